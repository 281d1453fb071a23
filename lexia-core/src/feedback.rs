use serde::{Deserialize, Serialize};

use crate::concept::{ConceptId, Language};
use crate::errors::RegistryError;

/// Relevance feedback from an ingesting service for one concept/term.
/// Arrives out-of-band from the scheduled cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub concept_id: ConceptId,
    /// Language of the term the feedback refers to.
    pub language: Language,
    /// Observed relevance in [0, 1].
    pub relevance_metric: f64,
    /// Identifier of the submitting service.
    pub source: String,
    /// Optional term echo, used only for a verification warning.
    pub term: Option<String>,
}

impl Feedback {
    /// Reject malformed payloads before any state mutation.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if !(0.0..=1.0).contains(&self.relevance_metric) {
            return Err(RegistryError::Validation {
                reason: format!(
                    "relevance_metric {} outside [0, 1]",
                    self.relevance_metric
                ),
            });
        }
        if self.source.trim().is_empty() {
            return Err(RegistryError::Validation {
                reason: "feedback source must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
