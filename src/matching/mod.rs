//! Filename to catalog entry matching.
//!
//! [`resolve`] is the entry point: it runs a [`QueryEngine`] per
//! [`Direction`](reelmatch_parser::Direction) and reconciles the two
//! [`MatchDecision`]s.

pub mod distance;
pub mod engine;
pub mod reconcile;
pub mod scorer;

pub use engine::{MatchQuery, QueryEngine};
pub use reconcile::{pick, resolve};
pub use scorer::{CandidateRecord, MatchDecision, Scorer};
