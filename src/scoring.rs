//! Composite quality score for candidates that passed the gates
//!
//! Weighted blend of four normalized terms, scaled to 0..100, plus a small bonus for buy pressure.
//! Pure and deterministic; the theoretical range is 0..102.
use crate::candidates::Candidate;
use crate::utils::round_to;

const WEIGHT_VOLUME_RATIO: f64 = 0.46;
const WEIGHT_TRADERS: f64 = 0.29;
const WEIGHT_VALUATION: f64 = 0.15;
const WEIGHT_AGE: f64 = 0.10;

const VOLUME_RATIO_CAP: f64 = 5.0;
const TRADERS_FULL_SCORE: f64 = 1500.0;

const BUY_PRESSURE_MIN_TXNS: u64 = 10;
const BUY_PRESSURE_RATIO: f64 = 1.05;
const BUY_PRESSURE_BONUS: f64 = 2.0;

/// (upper bound, desirability); valuations above the last bound score 0
const VALUATION_TIERS: &[(f64, f64)] = &[
    (3_000_000.0, 1.0),
    (6_000_000.0, 0.85),
    (10_000_000.0, 0.7),
    (15_000_000.0, 0.5),
];

/// (upper bound in hours, desirability); older pairs score 0.3
const AGE_TIERS: &[(f64, f64)] = &[(24.0, 1.0), (72.0, 0.75), (240.0, 0.5)];
const AGE_FLOOR: f64 = 0.3;

pub fn score(candidate: &Candidate) -> f64 {
    let composite = 100.0
        * (WEIGHT_VOLUME_RATIO * volume_ratio_term(candidate)
            + WEIGHT_TRADERS * traders_term(candidate)
            + WEIGHT_VALUATION * valuation_term(candidate.fdv_usd)
            + WEIGHT_AGE * age_term(candidate.age_hours));

    round_to(composite + buy_pressure_bonus(candidate), 2)
}

fn volume_ratio_term(candidate: &Candidate) -> f64 {
    candidate.volume_liquidity_ratio().min(VOLUME_RATIO_CAP) / VOLUME_RATIO_CAP
}

fn traders_term(candidate: &Candidate) -> f64 {
    (candidate.unique_traders_24h as f64 / TRADERS_FULL_SCORE).min(1.0)
}

/// Unknown valuation (0) lands in the top tier
fn valuation_term(fdv: f64) -> f64 {
    VALUATION_TIERS
        .iter()
        .find(|(bound, _)| fdv <= *bound)
        .map(|(_, value)| *value)
        .unwrap_or(0.0)
}

fn age_term(age_hours: Option<f64>) -> f64 {
    let Some(age) = age_hours else {
        return 1.0;
    };
    AGE_TIERS
        .iter()
        .find(|(bound, _)| age <= *bound)
        .map(|(_, value)| *value)
        .unwrap_or(AGE_FLOOR)
}

fn buy_pressure_bonus(candidate: &Candidate) -> f64 {
    let buys = candidate.buys_24h;
    let sells = candidate.sells_24h;
    let total = buys.saturating_add(sells);
    if total >= BUY_PRESSURE_MIN_TXNS && (buys as f64) > (sells.max(1) as f64) * BUY_PRESSURE_RATIO {
        BUY_PRESSURE_BONUS
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Candidate {
        Candidate {
            lp_usd: 10_000.0,
            volume_24h_usd: 5_000.0,
            unique_traders_24h: 300,
            buys_24h: 150,
            sells_24h: 150,
            fdv_usd: 2_000_000.0,
            age_hours: Some(12.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_known_score() {
        // 0.46*0.1 + 0.29*0.2 + 0.15*1.0 + 0.10*1.0 = 0.354
        assert_eq!(score(&base()), 35.4);
    }

    #[test]
    fn test_empty_candidate() {
        // only valuation (unknown -> 1.0) and age (unknown -> 1.0) contribute
        assert_eq!(score(&Candidate::default()), 25.0);
    }

    #[test]
    fn test_maximum_score() {
        let c = Candidate {
            lp_usd: 1_000.0,
            volume_24h_usd: 1_000_000.0,
            unique_traders_24h: 5_000,
            buys_24h: 4_000,
            sells_24h: 1_000,
            ..Default::default()
        };
        assert_eq!(score(&c), 102.0);
    }

    #[test]
    fn test_valuation_tiers() {
        assert_eq!(valuation_term(0.0), 1.0);
        assert_eq!(valuation_term(3_000_000.0), 1.0);
        assert_eq!(valuation_term(3_000_001.0), 0.85);
        assert_eq!(valuation_term(10_000_000.0), 0.7);
        assert_eq!(valuation_term(15_000_000.0), 0.5);
        assert_eq!(valuation_term(15_000_001.0), 0.0);
    }

    #[test]
    fn test_age_tiers() {
        assert_eq!(age_term(None), 1.0);
        assert_eq!(age_term(Some(24.0)), 1.0);
        assert_eq!(age_term(Some(24.5)), 0.75);
        assert_eq!(age_term(Some(240.0)), 0.5);
        assert_eq!(age_term(Some(1000.0)), 0.3);
    }

    #[test]
    fn test_buy_pressure_bonus() {
        let mut c = base();
        c.buys_24h = 106;
        c.sells_24h = 100;
        assert_eq!(buy_pressure_bonus(&c), 2.0);

        c.buys_24h = 105;
        assert_eq!(buy_pressure_bonus(&c), 0.0);

        // too few transactions overall
        c.buys_24h = 9;
        c.sells_24h = 0;
        assert_eq!(buy_pressure_bonus(&c), 0.0);

        c.buys_24h = 10;
        assert_eq!(buy_pressure_bonus(&c), 2.0);
    }

    #[test]
    fn test_monotonic_in_volume_ratio() {
        let mut previous = f64::MIN;
        for volume in [0.0, 100.0, 1_000.0, 10_000.0, 49_999.0, 50_000.0, 1e9] {
            let c = Candidate {
                volume_24h_usd: volume,
                ..base()
            };
            let s = score(&c);
            assert!(s >= previous, "score dropped at volume {}", volume);
            previous = s;
        }
    }

    #[test]
    fn test_monotonic_in_traders() {
        let mut previous = f64::MIN;
        for traders in [0u64, 1, 10, 500, 1_499, 1_500, 100_000] {
            let c = Candidate {
                unique_traders_24h: traders,
                ..base()
            };
            let s = score(&c);
            assert!(s >= previous, "score dropped at traders {}", traders);
            previous = s;
        }
    }

    #[test]
    fn test_zero_liquidity_scores_no_volume_term() {
        let c = Candidate {
            lp_usd: 0.0,
            volume_24h_usd: 1_000_000.0,
            ..Default::default()
        };
        assert_eq!(score(&c), 25.0);
    }
}
