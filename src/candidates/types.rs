use serde::{Deserialize, Serialize};

/// Added to liquidity before dividing so an empty pool never divides by zero
pub const VLIQ_EPSILON: f64 = 1e-9;

/// Canonical view of one trading pair, built by the normalizer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub token_symbol: String,
    pub chain: String,
    pub contract_address: Option<String>,
    pub pair_address: Option<String>,
    pub price_usd: f64,
    /// 0 when unknown
    pub fdv_usd: f64,
    pub lp_usd: f64,
    pub volume_24h_usd: f64,
    /// buys + sells over 24h
    pub unique_traders_24h: u64,
    pub buys_24h: u64,
    pub sells_24h: u64,
    pub chg24_pct: Option<f64>,
    pub dex: String,
    pub trade_url: String,
    pub explorer_url: String,
    pub twitter_url: String,
    pub telegram_url: String,
    pub website_url: String,
    /// None when the creation time is unknown or implausibly old
    pub age_hours: Option<f64>,
}

impl Candidate {
    /// 24h volume over pool liquidity; 0 for an empty pool
    pub fn volume_liquidity_ratio(&self) -> f64 {
        if self.lp_usd <= 0.0 {
            return 0.0;
        }
        self.volume_24h_usd / (self.lp_usd + VLIQ_EPSILON)
    }

    pub fn has_social_link(&self) -> bool {
        !self.twitter_url.is_empty() || !self.telegram_url.is_empty() || !self.website_url.is_empty()
    }

    /// Short label for log lines
    pub fn display_name(&self) -> String {
        let symbol = if self.token_symbol.is_empty() { "?" } else { &self.token_symbol };
        format!("{}@{}", symbol, self.chain)
    }
}
