//! Gate evaluation for funnel passes
//!
//! Pure checks over a [`Candidate`](crate::candidates::Candidate): no I/O, no globals.

pub mod gates;
pub mod types;

pub use gates::evaluate;
pub use types::{GateConfig, GateRejection};
