//! Two-stage discovery -> refine funnel
//!
//! A pass gate-checks every candidate, scores and prices the survivors, ranks them and keeps the top
//! `target`. Discovery runs over the whole pool; refine runs over discovery's ranked output, or over
//! the whole pool again when discovery kept nothing. Both passes share no state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::candidates::Candidate;
use crate::exits::{self, ExitPrices, ExitTargets};
use crate::filtering::{self, GateConfig, GateRejection};
use crate::logger::{self, LogTag};
use crate::scoring;

/// Everything a funnel run needs, frozen at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelSettings {
    pub discovery: GateConfig,
    pub refine: GateConfig,
    pub discovery_target: usize,
    pub refine_target: usize,
    pub exit_targets: ExitTargets,
}

impl Default for FunnelSettings {
    fn default() -> Self {
        Self {
            discovery: GateConfig::discovery_defaults(),
            refine: GateConfig::refine_defaults(),
            discovery_target: 200,
            refine_target: 90,
            exit_targets: ExitTargets::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
    pub exits: ExitPrices,
    /// 1-based, assigned after truncation
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedCandidate {
    pub candidate: Candidate,
    pub rejection: GateRejection,
}

impl RejectedCandidate {
    pub fn reason(&self) -> String {
        self.rejection.reason()
    }
}

/// Per-pass counters, logged after each pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassStats {
    pub evaluated: usize,
    pub passed: usize,
    pub rejected: usize,
    /// Passed the gates but fell below the target cut
    pub truncated: usize,
    pub rejection_counts: HashMap<&'static str, usize>,
}

impl PassStats {
    fn record_rejection(&mut self, reason: &GateRejection) {
        *self.rejection_counts.entry(reason.label()).or_insert(0) += 1;
    }

    /// Most frequent rejection labels, e.g. `liquidity:120, vliq:40`
    pub fn rejection_summary(&self) -> String {
        let mut counts: Vec<(&str, usize)> = self
            .rejection_counts
            .iter()
            .map(|(label, count)| (*label, *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        if counts.is_empty() {
            return "none".to_string();
        }

        counts
            .iter()
            .take(5)
            .map(|(label, count)| format!("{}:{}", label, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassOutcome {
    pub ranked: Vec<ScoredCandidate>,
    pub rejected: Vec<RejectedCandidate>,
    pub stats: PassStats,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunnelOutcome {
    pub discovery: PassOutcome,
    pub refine: PassOutcome,
    /// Refine ran over the raw pool because discovery kept nothing
    pub refine_used_fallback: bool,
}

/// One pass over `pool`.
///
/// Survivors are ordered by score descending. Equal scores keep their order in `pool` (stable sort),
/// which for a live run is fetch order. At most `target` candidates are kept and ranked 1..=N.
/// Rejects keep pool order.
pub fn run_pass(
    pool: &[Candidate],
    config: &GateConfig,
    target: usize,
    exit_targets: &ExitTargets,
) -> PassOutcome {
    let mut stats = PassStats {
        evaluated: pool.len(),
        ..Default::default()
    };
    let mut survivors = Vec::new();
    let mut rejected = Vec::new();

    for candidate in pool {
        match filtering::evaluate(candidate, config) {
            Ok(()) => {
                let score = scoring::score(candidate);
                survivors.push(ScoredCandidate {
                    candidate: candidate.clone(),
                    score,
                    exits: exits::compute(candidate, exit_targets),
                    rank: 0,
                });
            }
            Err(rejection) => {
                if logger::is_debug_enabled(LogTag::Filtering) {
                    logger::debug(
                        LogTag::Filtering,
                        &format!("{} rejected: {}", candidate.display_name(), rejection),
                    );
                }
                stats.record_rejection(&rejection);
                rejected.push(RejectedCandidate {
                    candidate: candidate.clone(),
                    rejection,
                });
            }
        }
    }

    stats.passed = survivors.len();
    stats.rejected = rejected.len();

    // sort_by is stable: ties keep pool order
    survivors.sort_by(|a, b| b.score.total_cmp(&a.score));
    stats.truncated = survivors.len().saturating_sub(target);
    survivors.truncate(target);

    for (index, scored) in survivors.iter_mut().enumerate() {
        scored.rank = index + 1;
    }

    PassOutcome {
        ranked: survivors,
        rejected,
        stats,
    }
}

/// Discovery over `pool`, then refine over discovery's ranked output
pub fn run_funnel(pool: &[Candidate], settings: &FunnelSettings) -> FunnelOutcome {
    let discovery = run_pass(
        pool,
        &settings.discovery,
        settings.discovery_target,
        &settings.exit_targets,
    );
    log_pass("discovery", &discovery);

    let refine_used_fallback = discovery.ranked.is_empty();
    let refine_pool: Vec<Candidate> = if refine_used_fallback {
        if !pool.is_empty() {
            logger::warning(
                LogTag::Funnel,
                "Discovery kept no candidates, refining the full pool instead",
            );
        }
        pool.to_vec()
    } else {
        discovery
            .ranked
            .iter()
            .map(|scored| scored.candidate.clone())
            .collect()
    };

    let refine = run_pass(
        &refine_pool,
        &settings.refine,
        settings.refine_target,
        &settings.exit_targets,
    );
    log_pass("refine", &refine);

    FunnelOutcome {
        discovery,
        refine,
        refine_used_fallback,
    }
}

fn log_pass(name: &str, outcome: &PassOutcome) {
    let stats = &outcome.stats;
    logger::info(
        LogTag::Funnel,
        &format!(
            "{} pass: {} evaluated, {} passed, {} rejected, {} cut by target",
            name, stats.evaluated, stats.passed, stats.rejected, stats.truncated
        ),
    );
    logger::info(
        LogTag::Funnel,
        &format!("{} rejections: {}", name, stats.rejection_summary()),
    );
    if let Some(top) = outcome.ranked.first() {
        logger::debug(
            LogTag::Scoring,
            &format!(
                "{} top pick: {} score={:.2}",
                name,
                top.candidate.display_name(),
                top.score
            ),
        );
    }
}
