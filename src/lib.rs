//! coinhunter: screens newly listed DEX pairs
//!
//! The decision core ([`candidates`], [`filtering`], [`scoring`], [`exits`], [`funnel`]) is pure and
//! synchronous. Everything else (fetching, config, reports, locking, logging) wraps around it.

pub mod arguments;
pub mod candidates;
pub mod config;
pub mod dexscreener;
pub mod errors;
pub mod exits;
pub mod filtering;
pub mod funnel;
pub mod logger;
pub mod paths;
pub mod process_lock;
pub mod report;
pub mod run;
pub mod scoring;
pub mod utils;
