//! Configuration schemas, each declared once with its defaults via `config_struct!`
//!
//! A config file only needs the keys it changes:
//!
//! ```toml
//! target_refine = 50
//!
//! [fetch]
//! chains = ["solana", "base"]
//!
//! [refine]
//! min_liquidity = 10000.0
//! require_social_presence = false
//! ```
use crate::config_struct;
use crate::exits::ExitTargets;
use crate::filtering::GateConfig;
use crate::funnel::FunnelSettings;

/// Chain search queries used when none are configured
pub const DEFAULT_CHAINS: &[&str] = &[
    "base", "solana", "eth", "arbitrum", "polygon", "bsc", "optimism", "avalanche", "blast",
    "mantle", "linea", "scroll", "zksync", "fantom",
];

// ============================================================================
// MARKET DATA
// ============================================================================

config_struct! {
    /// Market-data fetch settings
    pub struct FetchConfig {
        /// Search queries, one request each, issued in order
        chains: Vec<String> = DEFAULT_CHAINS.iter().map(|c| c.to_string()).collect(),
        /// Pairs kept per query
        limit_per_chain: usize = 2000,
        /// Pause before every request
        request_pause_ms: u64 = 600,
        request_timeout_secs: u64 = 30,
    }
}

// ============================================================================
// REPORTS
// ============================================================================

config_struct! {
    /// Report output settings
    pub struct ReportConfig {
        output_dir: String = "out".to_string(),
        write_html: bool = true,
        /// Mirror log lines into `<output_dir>/coinhunter.log`
        log_to_file: bool = true,
    }
}

// ============================================================================
// GATE OVERRIDES
// ============================================================================

config_struct! {
    /// Per-pass threshold overrides. Unset fields keep that pass's built-in default.
    pub struct GateOverrides {
        max_age_hours: Option<f64> = None,
        min_liquidity: Option<f64> = None,
        max_liquidity: Option<f64> = None,
        max_valuation: Option<f64> = None,
        min_unique_traders: Option<u64> = None,
        min_volume_liquidity_ratio: Option<f64> = None,
        require_social_presence: Option<bool> = None,
    }
}

impl GateOverrides {
    /// Combine two override layers; fields set in `higher` win.
    pub fn layered_under(&self, higher: &GateOverrides) -> GateOverrides {
        GateOverrides {
            max_age_hours: higher.max_age_hours.or(self.max_age_hours),
            min_liquidity: higher.min_liquidity.or(self.min_liquidity),
            max_liquidity: higher.max_liquidity.or(self.max_liquidity),
            max_valuation: higher.max_valuation.or(self.max_valuation),
            min_unique_traders: higher.min_unique_traders.or(self.min_unique_traders),
            min_volume_liquidity_ratio: higher
                .min_volume_liquidity_ratio
                .or(self.min_volume_liquidity_ratio),
            require_social_presence: higher
                .require_social_presence
                .or(self.require_social_presence),
        }
    }

    /// Produce the effective gate set for a pass
    pub fn apply(&self, base: GateConfig) -> GateConfig {
        GateConfig {
            max_age_hours: self.max_age_hours.unwrap_or(base.max_age_hours),
            min_liquidity: self.min_liquidity.unwrap_or(base.min_liquidity),
            max_liquidity: self.max_liquidity.unwrap_or(base.max_liquidity),
            max_valuation: self.max_valuation.unwrap_or(base.max_valuation),
            min_unique_traders: self.min_unique_traders.unwrap_or(base.min_unique_traders),
            min_volume_liquidity_ratio: self
                .min_volume_liquidity_ratio
                .unwrap_or(base.min_volume_liquidity_ratio),
            require_social_presence: self
                .require_social_presence
                .unwrap_or(base.require_social_presence),
        }
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    /// Complete run configuration
    pub struct ScreenerConfig {
        target_discovery: usize = 200,
        target_refine: usize = 90,
        take_profit_multipliers: Vec<f64> = vec![2.0, 5.0, 10.0],
        valuation_targets: Vec<f64> = vec![25_000_000.0, 50_000_000.0],
        fetch: FetchConfig = FetchConfig::default(),
        report: ReportConfig = ReportConfig::default(),
        discovery: GateOverrides = GateOverrides::default(),
        refine: GateOverrides = GateOverrides::default(),
    }
}

impl ScreenerConfig {
    pub fn discovery_gates(&self) -> GateConfig {
        self.discovery.apply(GateConfig::discovery_defaults())
    }

    pub fn refine_gates(&self) -> GateConfig {
        self.refine.apply(GateConfig::refine_defaults())
    }

    pub fn exit_targets(&self) -> ExitTargets {
        ExitTargets::new(
            self.take_profit_multipliers.clone(),
            self.valuation_targets.clone(),
        )
    }

    /// Freeze everything the funnel needs into one immutable value
    pub fn funnel_settings(&self) -> FunnelSettings {
        FunnelSettings {
            discovery: self.discovery_gates(),
            refine: self.refine_gates(),
            discovery_target: self.target_discovery,
            refine_target: self.target_refine,
            exit_targets: self.exit_targets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreenerConfig::default();
        assert_eq!(config.target_discovery, 200);
        assert_eq!(config.target_refine, 90);
        assert_eq!(config.fetch.chains.len(), 14);
        assert_eq!(config.fetch.limit_per_chain, 2000);
        assert_eq!(config.take_profit_multipliers, vec![2.0, 5.0, 10.0]);
        assert_eq!(config.discovery_gates(), GateConfig::discovery_defaults());
        assert_eq!(config.refine_gates(), GateConfig::refine_defaults());
    }

    #[test]
    fn test_partial_toml_keeps_pass_defaults() {
        let config: ScreenerConfig = toml::from_str(
            r#"
            target_refine = 50

            [refine]
            min_liquidity = 10000.0
            "#,
        )
        .unwrap();

        assert_eq!(config.target_refine, 50);
        assert_eq!(config.target_discovery, 200);

        let refine = config.refine_gates();
        assert_eq!(refine.min_liquidity, 10_000.0);
        assert_eq!(refine.max_liquidity, 1_500_000.0);
        assert!(refine.require_social_presence);
        assert_eq!(config.discovery_gates(), GateConfig::discovery_defaults());
    }

    #[test]
    fn test_override_layering() {
        let file = GateOverrides {
            min_liquidity: Some(1_000.0),
            min_unique_traders: Some(3),
            ..GateOverrides::default()
        };
        let cli = GateOverrides {
            min_liquidity: Some(2_000.0),
            ..GateOverrides::default()
        };

        let merged = file.layered_under(&cli);
        assert_eq!(merged.min_liquidity, Some(2_000.0));
        assert_eq!(merged.min_unique_traders, Some(3));
        assert!(merged.max_age_hours.is_none());
        assert_ne!(merged, GateOverrides::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = ScreenerConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[fetch]"));
        assert!(toml_str.contains("[report]"));
        let back: ScreenerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.fetch.chains, config.fetch.chains);
    }
}
