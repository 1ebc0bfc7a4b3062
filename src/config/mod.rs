//! Run configuration: schema, TOML loading, CLI override merging and validation.
//!
//! Thresholds end up in immutable [`FunnelSettings`](crate::funnel::FunnelSettings) built once at
//! startup; nothing in this module is global.

pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{FetchConfig, GateOverrides, ReportConfig, ScreenerConfig};
pub use utils::{load_config_from_path, validate_config, DEFAULT_CONFIG_FILE};
