//! Loading and validating configuration
use std::path::Path;

use crate::errors::{ScreenerError, ScreenerResult};
use crate::logger::{self, LogTag};

use super::schemas::ScreenerConfig;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "coinhunter.toml";

/// Load configuration from a TOML file.
///
/// A missing file yields defaults unless `required` is set (an explicit `--config` path).
pub fn load_config_from_path(path: &Path, required: bool) -> ScreenerResult<ScreenerConfig> {
    if !path.exists() {
        if required {
            return Err(ScreenerError::config(format!(
                "config file '{}' not found",
                path.display()
            )));
        }
        logger::debug(
            LogTag::Config,
            &format!("{} not found, using built-in defaults", path.display()),
        );
        return Ok(ScreenerConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let mut config = toml::from_str::<ScreenerConfig>(&contents)?;
    config.fetch.chains = clean_chains(&config.fetch.chains);
    logger::info(
        LogTag::Config,
        &format!("Loaded configuration from {}", path.display()),
    );
    Ok(config)
}

/// Trim chain queries and drop blank ones, the same way CLI lists are split
fn clean_chains(chains: &[String]) -> Vec<String> {
    chains
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reject configurations the pipeline cannot run with
pub fn validate_config(config: &ScreenerConfig) -> ScreenerResult<()> {
    if config.fetch.chains.is_empty() {
        return Err(ScreenerError::config("at least one chain query is required"));
    }
    if let Some(bad) = config
        .fetch
        .chains
        .iter()
        .find(|c| c.is_empty() || c.trim() != c.as_str())
    {
        return Err(ScreenerError::config(format!(
            "chain query '{}' is blank or padded",
            bad
        )));
    }
    if config.fetch.limit_per_chain == 0 {
        return Err(ScreenerError::config("limit_per_chain must be positive"));
    }
    if config.target_discovery == 0 || config.target_refine == 0 {
        return Err(ScreenerError::config("pass targets must be positive"));
    }
    if config.take_profit_multipliers.is_empty() {
        return Err(ScreenerError::config(
            "at least one take-profit multiplier is required",
        ));
    }
    if let Some(bad) = config
        .take_profit_multipliers
        .iter()
        .chain(config.valuation_targets.iter())
        .find(|v| !v.is_finite() || **v <= 0.0)
    {
        return Err(ScreenerError::config(format!(
            "exit targets must be positive numbers, got {}",
            bad
        )));
    }

    for (pass, gates) in [
        ("discovery", config.discovery_gates()),
        ("refine", config.refine_gates()),
    ] {
        if gates.min_liquidity > gates.max_liquidity {
            return Err(ScreenerError::config(format!(
                "{} min_liquidity {} exceeds max_liquidity {}",
                pass, gates.min_liquidity, gates.max_liquidity
            )));
        }
        let numbers = [
            gates.max_age_hours,
            gates.min_liquidity,
            gates.max_liquidity,
            gates.max_valuation,
            gates.min_volume_liquidity_ratio,
        ];
        if numbers.iter().any(|v| v.is_nan()) {
            return Err(ScreenerError::config(format!(
                "{} thresholds must be numbers",
                pass
            )));
        }
    }

    Ok(())
}
