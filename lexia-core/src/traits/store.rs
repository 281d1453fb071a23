use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::concept::{Concept, ConceptId, ConceptStatus, Language, Score};
use crate::errors::StoreError;

/// Outcome of an insert attempt. The uniqueness constraint on the canonical
/// term is the single source of truth for "does this concept already exist";
/// a conflict is the expected concurrent-dedup signal, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Conflict,
}

/// Atomic metric update applied by a feedback event. The store sets these
/// fields, touches `last_used_at`/`updated_at`, and increments `usage_count`
/// by exactly 1 in a single operation.
#[derive(Debug, Clone)]
pub struct FeedbackUpdate {
    pub confidence_score: Score,
    pub historical_yield: Score,
    pub status: ConceptStatus,
    /// Set only when the feedback was positive.
    pub positive_feedback_at: Option<DateTime<Utc>>,
}

/// Minimal projection used by the decay cycle, so scanning every active
/// concept does not pull full documents.
#[derive(Debug, Clone)]
pub struct DecaySnapshot {
    pub id: ConceptId,
    pub status: ConceptStatus,
    pub confidence_score: Score,
    pub last_positive_feedback_at: Option<DateTime<Utc>>,
}

/// Persistent collection of [`Concept`] records keyed by a unique
/// canonical-term index. External collaborator; per-concept consistency
/// relies on its atomic single-document update semantics.
#[async_trait]
pub trait ConceptStore: Send + Sync {
    /// Insert a concept, detecting canonical-term uniqueness conflicts.
    async fn insert(&self, concept: &Concept) -> Result<InsertOutcome, StoreError>;

    async fn find_by_id(&self, id: &ConceptId) -> Result<Option<Concept>, StoreError>;

    /// Point lookup by the canonical ("en") term, already normalized.
    async fn find_by_canonical_term(&self, term: &str) -> Result<Option<Concept>, StoreError>;

    /// Paginated listing, newest first.
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Concept>, StoreError>;

    /// Idempotent set-add of a category. Returns whether the concept matched.
    async fn add_category(&self, id: &ConceptId, category: &str) -> Result<bool, StoreError>;

    /// Set the term for a language. Returns whether the concept matched.
    async fn set_translation(
        &self,
        id: &ConceptId,
        language: Language,
        term: &str,
    ) -> Result<bool, StoreError>;

    /// Apply a feedback metric update atomically. Returns whether the
    /// concept matched.
    async fn apply_feedback(
        &self,
        id: &ConceptId,
        update: &FeedbackUpdate,
    ) -> Result<bool, StoreError>;

    /// Persist a time-decay result. Returns whether anything was modified.
    async fn apply_decay(
        &self,
        id: &ConceptId,
        score: Score,
        status: ConceptStatus,
    ) -> Result<bool, StoreError>;

    /// All active concepts, projected down to decay-relevant fields.
    async fn active_for_decay(&self) -> Result<Vec<DecaySnapshot>, StoreError>;

    /// Active concepts meeting the score threshold that carry a term in the
    /// requested language, descending by confidence score.
    async fn active_keywords(
        &self,
        language: Language,
        min_score: f64,
        limit: usize,
    ) -> Result<Vec<Concept>, StoreError>;
}
