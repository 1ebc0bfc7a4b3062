use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable threshold set for one funnel pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    pub max_age_hours: f64,
    pub min_liquidity: f64,
    pub max_liquidity: f64,
    /// Only applied when the candidate's valuation is known (> 0)
    pub max_valuation: f64,
    pub min_unique_traders: u64,
    pub min_volume_liquidity_ratio: f64,
    pub require_social_presence: bool,
}

impl GateConfig {
    /// Broad first pass
    pub fn discovery_defaults() -> Self {
        Self {
            max_age_hours: 2160.0,
            min_liquidity: 3_000.0,
            max_liquidity: 2_000_000.0,
            max_valuation: 20_000_000.0,
            min_unique_traders: 4,
            min_volume_liquidity_ratio: 0.10,
            require_social_presence: false,
        }
    }

    /// Stricter second pass
    pub fn refine_defaults() -> Self {
        Self {
            max_age_hours: 504.0,
            min_liquidity: 6_000.0,
            max_liquidity: 1_500_000.0,
            max_valuation: 12_000_000.0,
            min_unique_traders: 8,
            min_volume_liquidity_ratio: 0.15,
            require_social_presence: true,
        }
    }
}

/// Gate-failure codes, one per check, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateRejection {
    TooOld { max_age_hours: f64 },
    LiquidityOutOfRange { liquidity: f64, min: f64, max: f64 },
    ValuationTooHigh { max: f64 },
    TooFewTraders { min: u64 },
    VolumeRatioTooLow { min: f64 },
    NoSocials,
}

impl GateRejection {
    /// Machine friendly label used for rejection statistics
    pub fn label(&self) -> &'static str {
        match self {
            GateRejection::TooOld { .. } => "age",
            GateRejection::LiquidityOutOfRange { .. } => "liquidity",
            GateRejection::ValuationTooHigh { .. } => "valuation",
            GateRejection::TooFewTraders { .. } => "traders",
            GateRejection::VolumeRatioTooLow { .. } => "vliq",
            GateRejection::NoSocials => "socials",
        }
    }

    /// Reason text as written to the rejects table
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateRejection::TooOld { max_age_hours } => write!(f, "age>{}h", max_age_hours),
            GateRejection::LiquidityOutOfRange { liquidity, min, max } => {
                write!(f, "lp${:.0} outside [{},{}]", liquidity, min, max)
            }
            GateRejection::ValuationTooHigh { max } => write!(f, "fdv>{}", max),
            GateRejection::TooFewTraders { min } => write!(f, "traders24h<{}", min),
            GateRejection::VolumeRatioTooLow { min } => write!(f, "vliq<{:.2}", min),
            GateRejection::NoSocials => write!(f, "no_socials"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        assert_eq!(GateRejection::TooOld { max_age_hours: 504.0 }.reason(), "age>504h");
        assert_eq!(
            GateRejection::LiquidityOutOfRange {
                liquidity: 2500.4,
                min: 3000.0,
                max: 2_000_000.0
            }
            .reason(),
            "lp$2500 outside [3000,2000000]"
        );
        assert_eq!(
            GateRejection::ValuationTooHigh { max: 12_000_000.0 }.reason(),
            "fdv>12000000"
        );
        assert_eq!(GateRejection::TooFewTraders { min: 8 }.reason(), "traders24h<8");
        assert_eq!(GateRejection::VolumeRatioTooLow { min: 0.1 }.reason(), "vliq<0.10");
        assert_eq!(GateRejection::NoSocials.reason(), "no_socials");
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels = [
            GateRejection::TooOld { max_age_hours: 1.0 }.label(),
            GateRejection::LiquidityOutOfRange { liquidity: 0.0, min: 0.0, max: 0.0 }.label(),
            GateRejection::ValuationTooHigh { max: 0.0 }.label(),
            GateRejection::TooFewTraders { min: 0 }.label(),
            GateRejection::VolumeRatioTooLow { min: 0.0 }.label(),
            GateRejection::NoSocials.label(),
        ];
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn test_discovery_looser_than_refine() {
        let d = GateConfig::discovery_defaults();
        let r = GateConfig::refine_defaults();
        assert!(d.max_age_hours > r.max_age_hours);
        assert!(d.min_liquidity < r.min_liquidity);
        assert!(d.max_liquidity > r.max_liquidity);
        assert!(d.max_valuation > r.max_valuation);
        assert!(!d.require_social_presence && r.require_social_presence);
    }
}
