use super::types::{GateConfig, GateRejection};
use crate::candidates::Candidate;

/// Run every gate in order and stop at the first failure.
///
/// The order only decides which reason gets reported; a candidate passes iff all gates pass.
pub fn evaluate(candidate: &Candidate, config: &GateConfig) -> Result<(), GateRejection> {
    if let Some(reason) = check_age(candidate, config) {
        return Err(reason);
    }

    if let Some(reason) = check_liquidity(candidate, config) {
        return Err(reason);
    }

    if let Some(reason) = check_valuation(candidate, config) {
        return Err(reason);
    }

    if let Some(reason) = check_traders(candidate, config) {
        return Err(reason);
    }

    if let Some(reason) = check_volume_ratio(candidate, config) {
        return Err(reason);
    }

    if let Some(reason) = check_socials(candidate, config) {
        return Err(reason);
    }

    Ok(())
}

fn check_age(candidate: &Candidate, config: &GateConfig) -> Option<GateRejection> {
    // unknown age passes
    let age = candidate.age_hours?;
    if age > config.max_age_hours {
        return Some(GateRejection::TooOld {
            max_age_hours: config.max_age_hours,
        });
    }
    None
}

fn check_liquidity(candidate: &Candidate, config: &GateConfig) -> Option<GateRejection> {
    let lp = candidate.lp_usd;
    if lp < config.min_liquidity || lp > config.max_liquidity {
        return Some(GateRejection::LiquidityOutOfRange {
            liquidity: lp,
            min: config.min_liquidity,
            max: config.max_liquidity,
        });
    }
    None
}

fn check_valuation(candidate: &Candidate, config: &GateConfig) -> Option<GateRejection> {
    let fdv = candidate.fdv_usd;
    if fdv > 0.0 && fdv > config.max_valuation {
        return Some(GateRejection::ValuationTooHigh {
            max: config.max_valuation,
        });
    }
    None
}

fn check_traders(candidate: &Candidate, config: &GateConfig) -> Option<GateRejection> {
    if candidate.unique_traders_24h < config.min_unique_traders {
        return Some(GateRejection::TooFewTraders {
            min: config.min_unique_traders,
        });
    }
    None
}

fn check_volume_ratio(candidate: &Candidate, config: &GateConfig) -> Option<GateRejection> {
    if candidate.volume_liquidity_ratio() < config.min_volume_liquidity_ratio {
        return Some(GateRejection::VolumeRatioTooLow {
            min: config.min_volume_liquidity_ratio,
        });
    }
    None
}

fn check_socials(candidate: &Candidate, config: &GateConfig) -> Option<GateRejection> {
    if config.require_social_presence && !candidate.has_social_link() {
        return Some(GateRejection::NoSocials);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// lp 5000, fdv unknown, 10 traders, 2000 volume, 1h old, no socials
    fn fresh_candidate() -> Candidate {
        Candidate {
            token_symbol: "NEW".to_string(),
            chain: "base".to_string(),
            price_usd: 0.5,
            lp_usd: 5_000.0,
            volume_24h_usd: 2_000.0,
            unique_traders_24h: 10,
            buys_24h: 6,
            sells_24h: 4,
            age_hours: Some(1.0),
            ..Default::default()
        }
    }

    fn social_required() -> GateConfig {
        GateConfig {
            require_social_presence: true,
            ..GateConfig::discovery_defaults()
        }
    }

    #[test]
    fn test_fresh_candidate_passes_discovery() {
        assert_eq!(
            evaluate(&fresh_candidate(), &GateConfig::discovery_defaults()),
            Ok(())
        );
    }

    #[test]
    fn test_missing_socials_rejected_when_required() {
        let result = evaluate(&fresh_candidate(), &social_required());
        assert_eq!(result, Err(GateRejection::NoSocials));
        assert_eq!(result.unwrap_err().reason(), "no_socials");

        let mut with_site = fresh_candidate();
        with_site.website_url = "https://new.xyz".to_string();
        assert_eq!(evaluate(&with_site, &social_required()), Ok(()));
    }

    #[test]
    fn test_refine_defaults_reject_thin_pool_first() {
        let err = evaluate(&fresh_candidate(), &GateConfig::refine_defaults()).unwrap_err();
        assert_eq!(err.label(), "liquidity");
        assert_eq!(err.reason(), "lp$5000 outside [6000,1500000]");
    }

    #[test]
    fn test_age_gate() {
        let config = GateConfig::refine_defaults();
        let mut c = fresh_candidate();
        c.lp_usd = 10_000.0;
        c.volume_24h_usd = 10_000.0;
        c.twitter_url = "https://x.com/new".to_string();

        c.age_hours = Some(504.0);
        assert_eq!(evaluate(&c, &config), Ok(()));

        c.age_hours = Some(504.01);
        assert_eq!(evaluate(&c, &config).unwrap_err().reason(), "age>504h");

        c.age_hours = None;
        assert_eq!(evaluate(&c, &config), Ok(()));
    }

    #[test]
    fn test_liquidity_bounds_inclusive() {
        let config = GateConfig::discovery_defaults();
        let mut c = fresh_candidate();
        c.volume_24h_usd = 1_000_000.0;

        c.lp_usd = 3_000.0;
        assert!(evaluate(&c, &config).is_ok());
        c.lp_usd = 2_000_000.0;
        assert!(evaluate(&c, &config).is_ok());
        c.lp_usd = 2_000_000.5;
        assert_eq!(evaluate(&c, &config).unwrap_err().label(), "liquidity");
        c.lp_usd = 0.0;
        assert_eq!(evaluate(&c, &config).unwrap_err().label(), "liquidity");
    }

    #[test]
    fn test_unknown_valuation_passes() {
        let config = GateConfig::discovery_defaults();
        let mut c = fresh_candidate();
        c.fdv_usd = 0.0;
        assert!(evaluate(&c, &config).is_ok());

        c.fdv_usd = 20_000_001.0;
        assert_eq!(evaluate(&c, &config).unwrap_err().reason(), "fdv>20000000");
    }

    #[test]
    fn test_traders_and_volume_ratio() {
        let config = GateConfig::discovery_defaults();
        let mut c = fresh_candidate();

        c.unique_traders_24h = 3;
        assert_eq!(evaluate(&c, &config).unwrap_err().reason(), "traders24h<4");

        c.unique_traders_24h = 4;
        c.volume_24h_usd = 499.0;
        assert_eq!(evaluate(&c, &config).unwrap_err().reason(), "vliq<0.10");
    }

    #[test]
    fn test_first_failure_wins() {
        let mut c = fresh_candidate();
        c.age_hours = Some(10_000.0);
        c.lp_usd = 1.0;
        c.unique_traders_24h = 0;
        let err = evaluate(&c, &social_required()).unwrap_err();
        assert_eq!(err.label(), "age");
    }

    #[test]
    fn test_pass_iff_all_conditions_hold() {
        let config = social_required();
        let ages = [None, Some(1.0), Some(2160.0), Some(3000.0)];
        let lps = [0.0, 3_000.0, 50_000.0, 3_000_000.0];
        let fdvs = [0.0, 1_000_000.0, 25_000_000.0];
        let traders = [0u64, 4, 100];
        let volumes = [0.0, 500.0, 100_000.0];
        let socials = [false, true];

        for age in ages {
            for lp in lps {
                for fdv in fdvs {
                    for t in traders {
                        for vol in volumes {
                            for social in socials {
                                let c = Candidate {
                                    age_hours: age,
                                    lp_usd: lp,
                                    fdv_usd: fdv,
                                    unique_traders_24h: t,
                                    volume_24h_usd: vol,
                                    telegram_url: if social { "https://t.me/x".into() } else { String::new() },
                                    ..Default::default()
                                };
                                let expected = (lp >= config.min_liquidity && lp <= config.max_liquidity)
                                    && age.map_or(true, |a| a <= config.max_age_hours)
                                    && (fdv <= 0.0 || fdv <= config.max_valuation)
                                    && t >= config.min_unique_traders
                                    && c.volume_liquidity_ratio() >= config.min_volume_liquidity_ratio
                                    && social;
                                assert_eq!(evaluate(&c, &config).is_ok(), expected, "{:?}", c);
                            }
                        }
                    }
                }
            }
        }
    }
}
