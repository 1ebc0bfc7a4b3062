//! Raw DexScreener pair -> Candidate
//!
//! Best effort by construction: absent or malformed numbers read as 0 (or None for age and price
//! change), absent text reads as "". Nothing here returns an error.
use chrono::{DateTime, Utc};

use super::registry::{dex_label, explorer_url};
use super::types::Candidate;
use crate::dexscreener::types::{loose_f64, loose_u64, RawInfo, RawPair};
use crate::logger::{self, LogTag};
use crate::utils::round_to;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Five years. Older ages point at timestamps in the wrong unit, so they read as unknown.
pub const MAX_PLAUSIBLE_AGE_HOURS: f64 = 24.0 * 365.0 * 5.0;

pub fn normalize_pair(pair: &RawPair) -> Candidate {
    normalize_pair_at(pair, Utc::now())
}

/// Normalize a whole fetch against a single clock reading
pub fn normalize_pool(pairs: &[RawPair]) -> Vec<Candidate> {
    let now = Utc::now();
    let pool: Vec<Candidate> = pairs.iter().map(|p| normalize_pair_at(p, now)).collect();

    let unknown_age = pool.iter().filter(|c| c.age_hours.is_none()).count();
    logger::debug(
        LogTag::Normalize,
        &format!(
            "Normalized {} pairs ({} with unknown age)",
            pool.len(),
            unknown_age
        ),
    );
    pool
}

pub fn normalize_pair_at(pair: &RawPair, now: DateTime<Utc>) -> Candidate {
    let chain = pair.chain_id.clone().unwrap_or_default();
    let base = pair.base_token.as_ref();
    let contract_address = base.and_then(|t| t.address.clone());

    let h24 = pair.txns.as_ref().and_then(|t| t.h24.as_ref());
    let buys = h24.and_then(|c| loose_u64(c.buys.as_ref())).unwrap_or(0);
    let sells = h24.and_then(|c| loose_u64(c.sells.as_ref())).unwrap_or(0);

    let (twitter_url, telegram_url, website_url) = social_links(pair.info.as_ref());

    Candidate {
        token_symbol: base.and_then(|t| t.symbol.clone()).unwrap_or_default(),
        contract_address: contract_address.clone(),
        pair_address: pair.pair_address.clone(),
        price_usd: non_negative(loose_f64(pair.price_usd.as_ref())),
        fdv_usd: non_negative(loose_f64(pair.fdv.as_ref())),
        lp_usd: non_negative(
            pair.liquidity
                .as_ref()
                .and_then(|l| loose_f64(l.usd.as_ref())),
        ),
        volume_24h_usd: non_negative(
            pair.volume.as_ref().and_then(|v| loose_f64(v.h24.as_ref())),
        ),
        unique_traders_24h: buys.saturating_add(sells),
        buys_24h: buys,
        sells_24h: sells,
        chg24_pct: pair
            .price_change
            .as_ref()
            .and_then(|p| loose_f64(p.h24.as_ref())),
        dex: dex_label(pair.dex_id.as_deref().unwrap_or(""), &chain),
        trade_url: pair.url.clone().unwrap_or_default(),
        explorer_url: explorer_url(&chain, contract_address.as_deref()),
        twitter_url,
        telegram_url,
        website_url,
        age_hours: created_ms(pair).and_then(|ms| age_hours_at(ms, now)),
        chain,
    }
}

/// First usable creation stamp: pair, then info, then liquidity
fn created_ms(pair: &RawPair) -> Option<f64> {
    let info = pair.info.as_ref();
    let liquidity = pair.liquidity.as_ref();

    [
        pair.pair_created_at.as_ref(),
        pair.created_at.as_ref(),
        info.and_then(|i| i.created_at.as_ref()),
        info.and_then(|i| i.listed_at.as_ref()),
        liquidity.and_then(|l| l.created_at.as_ref()),
    ]
    .into_iter()
    .filter_map(loose_f64)
    .find(|ms| *ms != 0.0)
}

/// Hours since `created_ms`, rounded to 2 places
pub fn age_hours_at(created_ms: f64, now: DateTime<Utc>) -> Option<f64> {
    let age = (now.timestamp_millis() as f64 - created_ms) / MS_PER_HOUR;
    if !age.is_finite() || age > MAX_PLAUSIBLE_AGE_HOURS {
        return None;
    }
    Some(round_to(age.max(0.0), 2))
}

fn social_links(info: Option<&RawInfo>) -> (String, String, String) {
    let mut twitter = String::new();
    let mut telegram = String::new();
    let mut website = String::new();

    let Some(info) = info else {
        return (twitter, telegram, website);
    };

    for social in info.socials.iter().flatten() {
        let url = social.url.as_deref().unwrap_or("");
        let kind = social.kind.as_deref().unwrap_or("").to_lowercase();
        if kind == "twitter" && twitter.is_empty() {
            twitter = url.to_string();
        } else if kind == "telegram" && telegram.is_empty() {
            telegram = url.to_string();
        }
    }

    if let Some(url) = info
        .websites
        .iter()
        .flatten()
        .filter_map(|w| w.url.as_deref())
        .find(|u| !u.trim().is_empty())
    {
        website = url.to_string();
    }

    (twitter, telegram, website)
}

fn non_negative(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0).max(0.0)
}
