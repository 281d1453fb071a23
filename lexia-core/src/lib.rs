//! # lexia-core
//!
//! Foundation crate for the Lexia multilingual concept registry.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod concept;
pub mod config;
pub mod constants;
pub mod errors;
pub mod feedback;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use concept::{Concept, ConceptId, ConceptStatus, GenerationMethod, Language, Score};
pub use config::LexiaConfig;
pub use errors::{LexiaError, LexiaResult};
pub use feedback::Feedback;
