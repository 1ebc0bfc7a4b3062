//! CSV and HTML reports for funnel passes
//!
//! Per pass tag: `candidates_<tag>.csv`, `rejects_<tag>.csv` and `candidates_<tag>.html`.
//! Files are rewritten on every run; an empty pass still gets header-only files.

pub mod csv;
pub mod html;

use chrono::Local;
use std::path::{Path, PathBuf};

use crate::errors::ScreenerResult;
use crate::exits::ExitTargets;
use crate::funnel::PassOutcome;
use crate::logger::{self, LogTag};
use crate::paths;

/// Files written for one pass
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFiles {
    pub candidates_csv: PathBuf,
    pub rejects_csv: PathBuf,
    pub candidates_html: Option<PathBuf>,
}

pub fn write_pass_reports(
    output_dir: &Path,
    tag: &str,
    outcome: &PassOutcome,
    targets: &ExitTargets,
    write_html: bool,
) -> ScreenerResult<ReportFiles> {
    paths::ensure_output_directory(output_dir)?;

    let candidates_csv = paths::candidates_csv_path(output_dir, tag);
    csv::write_ranked_csv(&candidates_csv, &outcome.ranked, targets)?;

    let rejects_csv = paths::rejects_csv_path(output_dir, tag);
    csv::write_rejects_csv(&rejects_csv, &outcome.rejected)?;

    let candidates_html = if write_html {
        let path = paths::candidates_html_path(output_dir, tag);
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let page = html::render_html(tag, &outcome.ranked, targets, &generated_at);
        std::fs::write(&path, page)?;
        Some(path)
    } else {
        None
    };

    logger::info(
        LogTag::Report,
        &format!(
            "{}: {} ranked, {} rejected -> {}",
            tag,
            outcome.ranked.len(),
            outcome.rejected.len(),
            candidates_csv.display()
        ),
    );

    Ok(ReportFiles {
        candidates_csv,
        rejects_csv,
        candidates_html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::Candidate;
    use crate::filtering::GateConfig;
    use crate::funnel::run_pass;

    #[test]
    fn test_writes_all_files_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let targets = ExitTargets::default();
        let pool = vec![
            Candidate {
                token_symbol: "KEEP".to_string(),
                lp_usd: 10_000.0,
                volume_24h_usd: 5_000.0,
                unique_traders_24h: 20,
                price_usd: 1.0,
                ..Default::default()
            },
            Candidate {
                token_symbol: "DROP".to_string(),
                ..Default::default()
            },
        ];
        let outcome = run_pass(&pool, &GateConfig::discovery_defaults(), 5, &targets);

        let files = write_pass_reports(&out, "discovery", &outcome, &targets, true).unwrap();
        assert!(files.candidates_csv.ends_with("candidates_discovery.csv"));
        assert!(files.candidates_csv.is_file());
        assert!(files.rejects_csv.is_file());
        let html_path = files.candidates_html.unwrap();
        let html = std::fs::read_to_string(html_path).unwrap();
        assert!(html.contains("KEEP"));

        let rejects = std::fs::read_to_string(files.rejects_csv).unwrap();
        assert!(rejects.contains("DROP"));
        assert!(rejects.contains("lp$0 outside [3000,2000000]"));
    }

    #[test]
    fn test_html_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_pass_reports(
            dir.path(),
            "refined",
            &PassOutcome::default(),
            &ExitTargets::default(),
            false,
        )
        .unwrap();
        assert!(files.candidates_html.is_none());
        assert!(!paths::candidates_html_path(dir.path(), "refined").exists());
        assert!(files.candidates_csv.is_file());
    }
}
