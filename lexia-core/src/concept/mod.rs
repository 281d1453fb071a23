mod base;
mod language;
mod score;

pub use base::{Concept, ConceptId, ConceptStatus, GenerationMethod};
pub use language::{Language, UnsupportedLanguage};
pub use score::Score;
