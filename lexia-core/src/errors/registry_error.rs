use crate::concept::ConceptId;
use crate::errors::StoreError;

/// Concept registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("concept not found: {id}")]
    NotFound { id: ConceptId },

    #[error("validation failed: {reason}")]
    Validation { reason: String },

    #[error("concept already exists for canonical term '{term}'")]
    Duplicate { term: String },

    /// An insert reported a uniqueness conflict but the follow-up read by
    /// canonical term found nothing. Indicates a broken store invariant.
    #[error("consistency violation: conflict reported for '{term}' but re-read found no concept")]
    Consistency { term: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
