//! Error type for everything around the decision core: fetching, config, reports, locking.
//!
//! The core itself (normalize, gates, scoring, exits, funnel) cannot fail.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error calling {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    #[error("HTTP {status} from {endpoint}: {body}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Lock error: {0}")]
    Lock(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ScreenerError {
    pub fn config(message: impl Into<String>) -> Self {
        ScreenerError::Configuration(message.into())
    }

    /// Short category label for log lines
    pub fn category(&self) -> &'static str {
        match self {
            ScreenerError::Configuration(_) | ScreenerError::Toml(_) => "config",
            ScreenerError::Network { .. } | ScreenerError::HttpStatus { .. } => "network",
            ScreenerError::Parse(_) => "parse",
            ScreenerError::Lock(_) => "lock",
            ScreenerError::Io(_) | ScreenerError::Csv(_) => "io",
        }
    }
}

impl From<reqwest::Error> for ScreenerError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|url| url.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        ScreenerError::Network {
            endpoint,
            message: err.to_string(),
        }
    }
}

pub type ScreenerResult<T> = Result<T, ScreenerError>;
