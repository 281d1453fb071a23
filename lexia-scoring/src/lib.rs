//! # lexia-scoring
//!
//! Pure function set computing new confidence/yield/status from feedback
//! events or elapsed time. No I/O: all thresholds and factors arrive via
//! [`lexia_core::config::ScoringConfig`], and persistence is delegated back
//! to the caller.

mod decay;
mod engine;
mod feedback;

pub use decay::DecayOutcome;
pub use engine::ScoringEngine;
pub use feedback::FeedbackOutcome;
