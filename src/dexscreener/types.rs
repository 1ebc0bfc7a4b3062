//! DexScreener pair payload as returned by `/latest/dex/search`
//!
//! Every field is optional. Numeric fields stay as raw JSON values because the API mixes numbers and
//! numeric strings (`priceUsd` is a string, `fdv` a number); read them with [`loose_f64`] / [`loose_u64`].
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPair {
    pub chain_id: Option<String>,
    pub dex_id: Option<String>,
    pub url: Option<String>,
    pub pair_address: Option<String>,
    pub base_token: Option<RawToken>,
    pub price_usd: Option<Value>,
    pub txns: Option<RawTxnWindows>,
    pub volume: Option<RawWindows>,
    pub price_change: Option<RawWindows>,
    pub liquidity: Option<RawLiquidity>,
    pub fdv: Option<Value>,
    pub pair_created_at: Option<Value>,
    pub created_at: Option<Value>,
    pub info: Option<RawInfo>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawToken {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawTxnWindows {
    pub h24: Option<RawTxnCounts>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawTxnCounts {
    pub buys: Option<Value>,
    pub sells: Option<Value>,
}

/// Time buckets shared by volume and price change; only the 24h window is read
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawWindows {
    pub h24: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLiquidity {
    pub usd: Option<Value>,
    pub base: Option<Value>,
    pub quote: Option<Value>,
    pub created_at: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInfo {
    pub created_at: Option<Value>,
    pub listed_at: Option<Value>,
    pub websites: Option<Vec<RawLink>>,
    pub socials: Option<Vec<RawLink>>,
}

/// Website or social (`type`) entry
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawLink {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
}

/// Search endpoint envelope. `pairs` may be null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub pairs: Option<Vec<Value>>,
}

/// Read a JSON number or numeric string as a finite f64
pub fn loose_f64(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Read a count; fractions truncate, negatives clamp to 0
pub fn loose_u64(value: Option<&Value>) -> Option<u64> {
    loose_f64(value).map(|v| if v <= 0.0 { 0 } else { v.trunc() as u64 })
}
