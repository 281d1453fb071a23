//! # lexia-registry
//!
//! Create-or-merge registry over a [`lexia_core::traits::ConceptStore`].
//! The store's canonical-term uniqueness constraint is the single source of
//! truth for concept existence; the registry layers the optimistic
//! lookup / insert / conflict-re-read protocol on top of it, plus category
//! and translation maintenance and the keyword export query.

pub mod registry;
pub mod store;

pub use registry::{normalize_term, ConceptRegistry, KeywordItem, NewConcept};
pub use store::MemoryConceptStore;
