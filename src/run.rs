//! End-to-end screener run: fetch -> normalize -> funnel -> reports

use std::path::PathBuf;

use crate::candidates::normalize_pool;
use crate::config::ScreenerConfig;
use crate::dexscreener::{DexScreenerClient, FetchStats, RawPair};
use crate::errors::ScreenerResult;
use crate::funnel::run_funnel;
use crate::logger::{self, LogTag};
use crate::paths::{DISCOVERY_TAG, REFINED_TAG};
use crate::report::{write_pass_reports, ReportFiles};

/// What a finished run produced
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub fetch: FetchStats,
    pub pool_size: usize,
    pub discovery_ranked: usize,
    pub refine_ranked: usize,
    pub refine_used_fallback: bool,
    pub reports: Vec<ReportFiles>,
    pub output_dir: PathBuf,
}

/// Fetch every configured chain query, then screen and report.
///
/// Per-query fetch failures only shrink the pool; an empty pool still produces (empty) reports.
pub async fn run_screener(config: &ScreenerConfig) -> ScreenerResult<RunSummary> {
    let fetch = &config.fetch;
    logger::info(
        LogTag::System,
        &format!(
            "Fetching {} chain queries (limit {} per chain)",
            fetch.chains.len(),
            fetch.limit_per_chain
        ),
    );

    let client = DexScreenerClient::new(fetch)?;
    let (pairs, stats) = client
        .fetch_chains(&fetch.chains, fetch.limit_per_chain)
        .await;

    if stats.failed_queries > 0 {
        logger::warning(
            LogTag::Api,
            &format!(
                "{} of {} chain queries failed; continuing with {} pairs",
                stats.failed_queries, stats.queries, stats.pairs
            ),
        );
    }
    if stats.skipped_pairs > 0 {
        logger::debug(
            LogTag::Api,
            &format!("{} undecodable pairs skipped", stats.skipped_pairs),
        );
    }

    let mut summary = screen_and_report(&pairs, config)?;
    summary.fetch = stats;
    Ok(summary)
}

/// Normalize an already fetched pool, run both passes and write their reports
pub fn screen_and_report(pairs: &[RawPair], config: &ScreenerConfig) -> ScreenerResult<RunSummary> {
    let pool = normalize_pool(pairs);
    let settings = config.funnel_settings();
    let outcome = run_funnel(&pool, &settings);
    for scored in &outcome.refine.ranked {
        logger::verbose(
            LogTag::Funnel,
            &format!(
                "#{} {} score {:.2}",
                scored.rank,
                scored.candidate.display_name(),
                scored.score
            ),
        );
    }

    let output_dir = PathBuf::from(&config.report.output_dir);
    let write_html = config.report.write_html;
    let reports = vec![
        write_pass_reports(
            &output_dir,
            DISCOVERY_TAG,
            &outcome.discovery,
            &settings.exit_targets,
            write_html,
        )?,
        write_pass_reports(
            &output_dir,
            REFINED_TAG,
            &outcome.refine,
            &settings.exit_targets,
            write_html,
        )?,
    ];

    logger::info(
        LogTag::System,
        &format!(
            "Done: {} pairs -> {} discovery -> {} refined (reports in {})",
            pool.len(),
            outcome.discovery.ranked.len(),
            outcome.refine.ranked.len(),
            output_dir.display()
        ),
    );

    Ok(RunSummary {
        fetch: FetchStats::default(),
        pool_size: pool.len(),
        discovery_ranked: outcome.discovery.ranked.len(),
        refine_ranked: outcome.refine.ranked.len(),
        refine_used_fallback: outcome.refine_used_fallback,
        reports,
        output_dir,
    })
}
