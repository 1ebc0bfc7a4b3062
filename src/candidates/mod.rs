//! Candidate records and the raw-pair normalizer

pub mod normalize;
pub mod registry;
pub mod types;

pub use normalize::{normalize_pair, normalize_pair_at, normalize_pool};
pub use types::{Candidate, VLIQ_EPSILON};
