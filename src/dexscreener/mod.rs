//! DexScreener market data: wire types and the search client

pub mod client;
pub mod types;

pub use client::{parse_search_response, DexScreenerClient, FetchStats, SearchPage};
pub use types::RawPair;
