//! Exit-price levels for a scored candidate
//!
//! Stop-loss, take-profit multiples, valuation-target prices and Fibonacci extensions, all rounded to
//! 12 decimal places so micro-priced tokens keep their significant digits. A price of zero or less
//! leaves every optional level unset and the stop-loss at 0.

use serde::{Deserialize, Serialize};

use crate::candidates::Candidate;
use crate::utils::round_to;

const PRICE_DECIMALS: i32 = 12;

const STOP_LOSS_BASE_CUT: f64 = 0.25;
const STOP_LOSS_TIGHT_CUT: f64 = 0.22;
const STOP_LOSS_LOOSE_CUT: f64 = 0.28;

/// Swing used when the implied 24h open cannot be computed
const DEFAULT_SWING_FRACTION: f64 = 0.10;

/// Take-profit multipliers and valuation targets shared by every pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitTargets {
    pub take_profit_multipliers: Vec<f64>,
    pub valuation_targets: Vec<f64>,
}

impl ExitTargets {
    pub fn new(take_profit_multipliers: Vec<f64>, valuation_targets: Vec<f64>) -> Self {
        Self {
            take_profit_multipliers,
            valuation_targets,
        }
    }

    /// Report column names, e.g. `tp5x_price`
    pub fn take_profit_keys(&self) -> Vec<String> {
        self.take_profit_multipliers
            .iter()
            .map(|m| take_profit_key(*m))
            .collect()
    }

    /// Report column names, e.g. `fdv25m_price`
    pub fn valuation_keys(&self) -> Vec<String> {
        self.valuation_targets
            .iter()
            .map(|t| valuation_key(*t))
            .collect()
    }
}

impl Default for ExitTargets {
    fn default() -> Self {
        Self::new(vec![2.0, 5.0, 10.0], vec![25_000_000.0, 50_000_000.0])
    }
}

pub fn take_profit_key(multiplier: f64) -> String {
    format!("tp{}x_price", multiplier.trunc() as i64)
}

pub fn valuation_key(target: f64) -> String {
    format!("fdv{}m_price", (target / 1_000_000.0).trunc() as i64)
}

/// Computed levels; `None` renders as an empty report cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExitPrices {
    pub stop_loss: f64,
    /// (multiplier, price) in configured order
    pub take_profit: Vec<(f64, Option<f64>)>,
    /// (target valuation, price) in configured order
    pub valuation_targets: Vec<(f64, Option<f64>)>,
    pub fib_dn_0382: Option<f64>,
    pub fib_dn_0618: Option<f64>,
    pub fib_up_1618: Option<f64>,
    pub fib_up_2618: Option<f64>,
}

pub fn compute(candidate: &Candidate, targets: &ExitTargets) -> ExitPrices {
    let price = candidate.price_usd;
    let fdv = candidate.fdv_usd;
    let has_price = price > 0.0;

    let take_profit = targets
        .take_profit_multipliers
        .iter()
        .map(|m| (*m, has_price.then(|| round_price(price * m))))
        .collect();

    let valuation_targets = targets
        .valuation_targets
        .iter()
        .map(|t| {
            let level = (has_price && fdv > 0.0).then(|| round_price(price * (t / fdv)));
            (*t, level)
        })
        .collect();

    let stop_loss = stop_loss_price(
        price,
        candidate.volume_liquidity_ratio(),
        candidate.unique_traders_24h,
    );

    let mut prices = ExitPrices {
        stop_loss,
        take_profit,
        valuation_targets,
        ..Default::default()
    };

    if has_price {
        let swing = fib_swing(price, candidate.chg24_pct);
        prices.fib_dn_0382 = Some(round_price((price - 0.382 * swing).max(0.0)));
        prices.fib_dn_0618 = Some(round_price((price - 0.618 * swing).max(0.0)));
        prices.fib_up_1618 = Some(round_price(price + 1.618 * swing));
        prices.fib_up_2618 = Some(round_price(price + 2.618 * swing));
    }

    prices
}

/// 25% below price; 22% for active pools, 28% for thin ones
pub fn stop_loss_price(price: f64, volume_ratio: f64, traders: u64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }

    let mut cut = STOP_LOSS_BASE_CUT;
    if volume_ratio < 0.15 || traders < 8 {
        cut = STOP_LOSS_LOOSE_CUT;
    }
    // disjoint from the loose condition, so the order of the two checks never matters
    if volume_ratio >= 0.30 && traders >= 20 {
        cut = STOP_LOSS_TIGHT_CUT;
    }

    round_price(price * (1.0 - cut))
}

/// Distance between price and the open implied by the 24h change
fn fib_swing(price: f64, chg24_pct: Option<f64>) -> f64 {
    let fallback = DEFAULT_SWING_FRACTION * price;
    let Some(pct) = chg24_pct else {
        return fallback;
    };

    let open = price / (1.0 + pct / 100.0);
    let swing = (price - open).abs();
    if swing.is_finite() {
        swing
    } else {
        fallback
    }
}

fn round_price(value: f64) -> f64 {
    round_to(value, PRICE_DECIMALS)
}
