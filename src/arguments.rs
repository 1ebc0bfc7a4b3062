//! Command-line surface for coinhunter
//!
//! Every option is optional. Values given here override the config file, which overrides the
//! built-in defaults. Comma lists (`--chains`, `--tp`, `--fdv-targets`) ignore blank items.
//! Underscore spellings (`--limit_per_chain`, `--min_lp_disc`, ...) are accepted as aliases.
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{GateOverrides, ScreenerConfig};
use crate::utils::{parse_number_list, split_list};

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "coinhunter",
    version,
    about = "Screens newly listed DEX pairs through a discovery and a refine pass"
)]
pub struct Arguments {
    /// TOML config file (default: ./coinhunter.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Chain search queries, comma separated
    #[arg(long, value_name = "LIST", value_parser = parse_chain_list)]
    pub chains: Option<ChainList>,

    #[arg(long, alias = "limit_per_chain", value_name = "N")]
    pub limit_per_chain: Option<usize>,

    /// Ranked candidates kept by the discovery pass
    #[arg(long, alias = "target_disc", value_name = "N")]
    pub target_disc: Option<usize>,

    /// Ranked candidates kept by the refine pass
    #[arg(long, alias = "target_ref", value_name = "N")]
    pub target_ref: Option<usize>,

    /// Output directory for reports and the log file
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Take-profit multipliers, e.g. 2,5,10
    #[arg(long, value_name = "LIST", value_parser = parse_numbers)]
    pub tp: Option<NumberList>,

    /// Valuation targets in USD, e.g. 25000000,50000000
    #[arg(long, alias = "fdv_targets", value_name = "LIST", value_parser = parse_numbers)]
    pub fdv_targets: Option<NumberList>,

    // discovery overrides
    #[arg(long, alias = "max_age_h_disc", value_name = "HOURS")]
    pub max_age_h_disc: Option<f64>,
    #[arg(long, alias = "min_lp_disc", value_name = "USD")]
    pub min_lp_disc: Option<f64>,
    #[arg(long, alias = "max_lp_disc", value_name = "USD")]
    pub max_lp_disc: Option<f64>,
    #[arg(long, alias = "max_fdv_disc", value_name = "USD")]
    pub max_fdv_disc: Option<f64>,
    #[arg(long, alias = "min_traders_disc", value_name = "N")]
    pub min_traders_disc: Option<u64>,
    #[arg(long, alias = "min_vliq_disc", value_name = "RATIO")]
    pub min_vliq_disc: Option<f64>,
    #[arg(long, alias = "require_social_disc", value_name = "true|false", action = ArgAction::Set, value_parser = parse_switch)]
    pub require_social_disc: Option<bool>,

    // refine overrides
    #[arg(long, alias = "max_age_h_refine", value_name = "HOURS")]
    pub max_age_h_refine: Option<f64>,
    #[arg(long, alias = "min_lp_refine", value_name = "USD")]
    pub min_lp_refine: Option<f64>,
    #[arg(long, alias = "max_lp_refine", value_name = "USD")]
    pub max_lp_refine: Option<f64>,
    #[arg(long, alias = "max_fdv_refine", value_name = "USD")]
    pub max_fdv_refine: Option<f64>,
    #[arg(long, alias = "min_traders_refine", value_name = "N")]
    pub min_traders_refine: Option<u64>,
    #[arg(long, alias = "min_vliq_refine", value_name = "RATIO")]
    pub min_vliq_refine: Option<f64>,
    #[arg(long, alias = "require_social_refine", value_name = "true|false", action = ArgAction::Set, value_parser = parse_switch)]
    pub require_social_refine: Option<bool>,

    /// Lock file guarding against overlapping runs
    #[arg(long, value_name = "PATH")]
    pub lock_file: Option<PathBuf>,

    /// Show verbose output (implies debug for every tag)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Only show errors
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug output for tags, e.g. api,funnel or all
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    pub debug: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChainList(pub Vec<String>);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberList(pub Vec<f64>);

fn parse_chain_list(raw: &str) -> Result<ChainList, String> {
    Ok(ChainList(split_list(raw)))
}

fn parse_numbers(raw: &str) -> Result<NumberList, String> {
    parse_number_list(raw).map(NumberList)
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected true or false, got '{}'", other)),
    }
}

impl Arguments {
    pub fn discovery_overrides(&self) -> GateOverrides {
        GateOverrides {
            max_age_hours: self.max_age_h_disc,
            min_liquidity: self.min_lp_disc,
            max_liquidity: self.max_lp_disc,
            max_valuation: self.max_fdv_disc,
            min_unique_traders: self.min_traders_disc,
            min_volume_liquidity_ratio: self.min_vliq_disc,
            require_social_presence: self.require_social_disc,
        }
    }

    pub fn refine_overrides(&self) -> GateOverrides {
        GateOverrides {
            max_age_hours: self.max_age_h_refine,
            min_liquidity: self.min_lp_refine,
            max_liquidity: self.max_lp_refine,
            max_valuation: self.max_fdv_refine,
            min_unique_traders: self.min_traders_refine,
            min_volume_liquidity_ratio: self.min_vliq_refine,
            require_social_presence: self.require_social_refine,
        }
    }

    /// Layer command-line values over a loaded config
    pub fn apply_to(&self, mut config: ScreenerConfig) -> ScreenerConfig {
        if let Some(ChainList(chains)) = &self.chains {
            config.fetch.chains = chains.clone();
        }
        if let Some(limit) = self.limit_per_chain {
            config.fetch.limit_per_chain = limit;
        }
        if let Some(target) = self.target_disc {
            config.target_discovery = target;
        }
        if let Some(target) = self.target_ref {
            config.target_refine = target;
        }
        if let Some(out) = &self.out {
            config.report.output_dir = out.to_string_lossy().into_owned();
        }
        if let Some(NumberList(tp)) = &self.tp {
            config.take_profit_multipliers = tp.clone();
        }
        if let Some(NumberList(targets)) = &self.fdv_targets {
            config.valuation_targets = targets.clone();
        }

        config.discovery = config.discovery.layered_under(&self.discovery_overrides());
        config.refine = config.refine.layered_under(&self.refine_overrides());
        config
    }
}
