//! Tagged, levelled logging for coinhunter
//!
//! - Standard levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via `--debug <tag,...>`
//! - Colored console output plus an optional plain-text log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use coinhunter::logger::{self, LogTag};
//!
//! logger::info(LogTag::Funnel, "discovery pass complete");
//! logger::debug(LogTag::Api, "raw response ..."); // only with --debug api
//! ```
//!
//! Call [`init`] once at startup. Logging before `init` uses [`LoggerConfig::default`].

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Install the logger configuration and open the log file, if any.
///
/// A log file that cannot be opened is reported on stderr and console logging continues.
pub fn init(config: LoggerConfig) {
    if let Some(path) = config.log_file.clone() {
        if let Err(e) = file::init_file_logging(&path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
        }
    }
    config::set_logger_config(config);
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only when debug is enabled for `tag`
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, only with --verbose
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// True when debug lines for `tag` would be printed; lets hot paths skip formatting.
pub fn is_debug_enabled(tag: LogTag) -> bool {
    core::should_log(&get_logger_config(), &tag, LogLevel::Debug)
}

/// Flush pending file writes. Call before exiting.
pub fn flush() {
    file::flush_file_logging();
}
