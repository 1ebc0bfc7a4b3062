//! Output and lock file locations
//!
//! Everything a run writes lives under one output directory:
//!
//! ```text
//! out/
//! ├── candidates_discovery.csv
//! ├── candidates_discovery.html
//! ├── rejects_discovery.csv
//! ├── candidates_refined.csv
//! ├── candidates_refined.html
//! ├── rejects_refined.csv
//! └── coinhunter.log
//! ```
//!
//! The lock file defaults to `.coinhunter.lock` in the working directory so two runs from the
//! same checkout exclude each other regardless of their output directories.

use std::path::{Path, PathBuf};

pub const DEFAULT_LOCK_FILE: &str = ".coinhunter.lock";
pub const LOG_FILE_NAME: &str = "coinhunter.log";

/// Report tag for the first pass
pub const DISCOVERY_TAG: &str = "discovery";
/// Report tag for the second pass
pub const REFINED_TAG: &str = "refined";

pub fn candidates_csv_path(output_dir: &Path, tag: &str) -> PathBuf {
  output_dir.join(format!("candidates_{}.csv", tag))
}

pub fn rejects_csv_path(output_dir: &Path, tag: &str) -> PathBuf {
  output_dir.join(format!("rejects_{}.csv", tag))
}

pub fn candidates_html_path(output_dir: &Path, tag: &str) -> PathBuf {
  output_dir.join(format!("candidates_{}.html", tag))
}

pub fn log_file_path(output_dir: &Path) -> PathBuf {
  output_dir.join(LOG_FILE_NAME)
}

pub fn default_lock_path() -> PathBuf {
  PathBuf::from(DEFAULT_LOCK_FILE)
}

/// Create the output directory (and parents) if missing
pub fn ensure_output_directory(output_dir: &Path) -> std::io::Result<()> {
  if !output_dir.exists() {
    std::fs::create_dir_all(output_dir)?;
  }
  Ok(())
}
