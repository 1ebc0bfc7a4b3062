//! DexScreener search client
//!
//! One `GET /latest/dex/search?q=<query>` per chain query, strictly sequential, with a fixed pause
//! before every request. A failed query is logged and skipped so the run continues with a partial pool.
use reqwest::Client;
use std::time::Duration;

use super::types::{RawPair, SearchResponse};
use crate::config::FetchConfig;
use crate::errors::{ScreenerError, ScreenerResult};
use crate::logger::{self, LogTag};

// ============================================================================
// API CONFIGURATION
// ============================================================================

pub const DEXSCREENER_BASE_URL: &str = "https://api.dexscreener.com";

const SEARCH_PATH: &str = "/latest/dex/search";

/// Error bodies are cut to this many characters in logs and errors
const MAX_ERROR_BODY_CHARS: usize = 200;

// ============================================================================
// RESPONSE DECODING
// ============================================================================

/// Decoded search page
#[derive(Debug, Default)]
pub struct SearchPage {
    pub pairs: Vec<RawPair>,
    /// Pair objects that did not decode and were dropped
    pub skipped: usize,
}

/// Decode a search response body. A `null` or missing `pairs` list is an empty page.
pub fn parse_search_response(body: &str) -> ScreenerResult<SearchPage> {
    parse_search_page(body, usize::MAX)
}

/// Decode at most the first `limit` raw pair entries. Undecodable entries inside that window
/// are skipped, so a page can hold fewer than `limit` pairs.
fn parse_search_page(body: &str, limit: usize) -> ScreenerResult<SearchPage> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| ScreenerError::Parse(format!("search response: {}", e)))?;

    let mut page = SearchPage::default();
    for value in response.pairs.unwrap_or_default().into_iter().take(limit) {
        match serde_json::from_value::<RawPair>(value) {
            Ok(pair) => page.pairs.push(pair),
            Err(e) => {
                page.skipped += 1;
                logger::debug(LogTag::Api, &format!("Skipping undecodable pair: {}", e));
            }
        }
    }
    Ok(page)
}

// ============================================================================
// CLIENT
// ============================================================================

/// Counters for one `fetch_chains` call
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FetchStats {
    pub queries: usize,
    pub failed_queries: usize,
    pub pairs: usize,
    pub skipped_pairs: usize,
}

pub struct DexScreenerClient {
    client: Client,
    base_url: String,
    pause: Duration,
}

impl DexScreenerClient {
    pub fn new(settings: &FetchConfig) -> ScreenerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(concat!("coinhunter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: DEXSCREENER_BASE_URL.to_string(),
            pause: Duration::from_millis(settings.request_pause_ms),
        })
    }

    /// Point the client at another host (mirrors, local fixtures)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Search pairs for one query, keeping at most `limit`
    pub async fn search_pairs(&self, query: &str, limit: usize) -> ScreenerResult<SearchPage> {
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }

        let endpoint = format!("{}{}", self.base_url, SEARCH_PATH);
        logger::debug(LogTag::Api, &format!("GET {}?q={}", endpoint, query));

        let response = self
            .client
            .get(&endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScreenerError::HttpStatus {
                endpoint,
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response.text().await?;
        parse_search_page(&body, limit)
    }

    /// Fetch every query in order and concatenate the results
    pub async fn fetch_chains(&self, queries: &[String], limit: usize) -> (Vec<RawPair>, FetchStats) {
        let mut pool = Vec::new();
        let mut stats = FetchStats::default();

        for query in queries {
            stats.queries += 1;
            match self.search_pairs(query, limit).await {
                Ok(page) => {
                    logger::info(
                        LogTag::Api,
                        &format!("{}: {} pairs", query, page.pairs.len()),
                    );
                    stats.pairs += page.pairs.len();
                    stats.skipped_pairs += page.skipped;
                    pool.extend(page.pairs);
                }
                Err(e) => {
                    stats.failed_queries += 1;
                    logger::warning(
                        LogTag::Api,
                        &format!("Dex pull failed for {}: {}", query, e),
                    );
                }
            }
        }

        (pool, stats)
    }
}
