//! Logger configuration, installed once by `logger::init`
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use super::levels::LogLevel;
use super::tags::LogTag;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Lines above this level are dropped (Debug additionally needs a debug tag)
    pub min_level: LogLevel,
    /// Tags with debug output enabled
    pub debug_tags: HashSet<LogTag>,
    /// Plain-text copy of every console line
    pub log_file: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            log_file: None,
        }
    }
}

impl LoggerConfig {
    /// Build from the CLI switches. Unknown debug tag names are ignored.
    pub fn from_flags(verbose: bool, quiet: bool, debug_tags: &[String]) -> Self {
        let mut tags: HashSet<LogTag> = debug_tags
            .iter()
            .filter_map(|name| LogTag::from_debug_key(name))
            .collect();
        if debug_tags.iter().any(|name| name.trim().eq_ignore_ascii_case("all")) {
            tags.extend(LogTag::all().iter().copied());
        }

        let min_level = if verbose {
            LogLevel::Verbose
        } else if !tags.is_empty() {
            LogLevel::Debug
        } else if quiet {
            LogLevel::Error
        } else {
            LogLevel::Info
        };

        Self {
            min_level,
            debug_tags: tags,
            log_file: None,
        }
    }

    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(_) => LoggerConfig::default(),
    }
}

pub(super) fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

pub(super) fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.min_level == LogLevel::Verbose || config.debug_tags.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_enable_debug_level() {
        let config = LoggerConfig::from_flags(false, false, &["api".to_string(), "bogus".to_string()]);
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.debug_tags.contains(&LogTag::Api));
        assert_eq!(config.debug_tags.len(), 1);
    }

    #[test]
    fn test_quiet_and_verbose() {
        assert_eq!(LoggerConfig::from_flags(false, true, &[]).min_level, LogLevel::Error);
        assert_eq!(LoggerConfig::from_flags(true, true, &[]).min_level, LogLevel::Verbose);
    }

    #[test]
    fn test_debug_all() {
        let config = LoggerConfig::from_flags(false, false, &["all".to_string()]);
        assert_eq!(config.debug_tags.len(), LogTag::all().len());
    }
}
