//! Static lookup tables for DEX display labels and block explorers
//!
//! Adding a chain or venue is a table edit; the normalizer only calls the lookup functions.

/// Exact DEX id (lower-cased) to display label
const DEX_LABELS: &[(&str, &str)] = &[
    ("raydium", "Raydium (Solana)"),
    ("orca", "Orca (Solana)"),
    ("meteora", "Meteora (Solana)"),
    ("lifinity", "Lifinity (Solana)"),
    ("phoenix", "Phoenix (Solana)"),
    ("uniswapv3", "Uniswap v3"),
    ("aerodrome", "Aerodrome (Base)"),
    ("baseswap", "BaseSwap (Base)"),
    ("pancakeswap-v3", "PancakeSwap v3"),
];

/// Chain substring to generic label, first match wins
const DEX_CHAIN_FALLBACKS: &[(&str, &str)] = &[
    ("solana", "Solana DEX"),
    ("base", "Base DEX"),
    ("eth", "Ethereum DEX"),
];

const DEX_DEFAULT_LABEL: &str = "DEX";

/// Chain substring to explorer host, first match wins
const EXPLORER_HOSTS: &[(&str, &str)] = &[
    ("solana", "solscan.io"),
    ("base", "basescan.org"),
    ("eth", "etherscan.io"),
    ("bsc", "bscscan.com"),
    ("arbitrum", "arbiscan.io"),
    ("polygon", "polygonscan.com"),
    ("optimism", "optimistic.etherscan.io"),
    ("avax", "snowtrace.io"),
    ("avalanche", "snowtrace.io"),
];

pub fn dex_label(dex_id: &str, chain: &str) -> String {
    let key = dex_id.trim().to_lowercase();
    if let Some((_, label)) = DEX_LABELS.iter().find(|(id, _)| *id == key) {
        return label.to_string();
    }

    let chain = chain.to_lowercase();
    DEX_CHAIN_FALLBACKS
        .iter()
        .find(|(needle, _)| chain.contains(needle))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| DEX_DEFAULT_LABEL.to_string())
}

/// Token page on the chain's explorer, or "" for unknown chains and missing addresses
pub fn explorer_url(chain: &str, token_address: Option<&str>) -> String {
    let address = match token_address.map(str::trim) {
        Some(addr) if !addr.is_empty() => addr,
        _ => return String::new(),
    };

    let chain = chain.to_lowercase();
    EXPLORER_HOSTS
        .iter()
        .find(|(needle, _)| chain.contains(needle))
        .map(|(_, host)| format!("https://{}/token/{}", host, address))
        .unwrap_or_default()
}
