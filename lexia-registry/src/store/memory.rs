use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use lexia_core::errors::StoreError;
use lexia_core::traits::{ConceptStore, DecaySnapshot, FeedbackUpdate, InsertOutcome};
use lexia_core::{Concept, ConceptId, ConceptStatus, Language, Score};

#[derive(Default)]
struct Inner {
    by_id: HashMap<ConceptId, Concept>,
    /// Insertion order, oldest first.
    order: Vec<ConceptId>,
}

impl Inner {
    fn canonical_taken(&self, term: &str) -> bool {
        self.by_id
            .values()
            .any(|c| c.canonical_term() == term)
    }
}

/// In-memory [`ConceptStore`] for tests and local runs. The write lock makes
/// each operation atomic, which matches the single-document atomicity the
/// registry expects from a real backend; the canonical-term scan plays the
/// role of the unique index.
#[derive(Default)]
pub struct MemoryConceptStore {
    inner: RwLock<Inner>,
}

impl MemoryConceptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ConceptStore for MemoryConceptStore {
    async fn insert(&self, concept: &Concept) -> Result<InsertOutcome, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.canonical_taken(concept.canonical_term()) {
            return Ok(InsertOutcome::Conflict);
        }
        inner.order.push(concept.id.clone());
        inner.by_id.insert(concept.id.clone(), concept.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn find_by_id(&self, id: &ConceptId) -> Result<Option<Concept>, StoreError> {
        Ok(self.inner.read().await.by_id.get(id).cloned())
    }

    async fn find_by_canonical_term(&self, term: &str) -> Result<Option<Concept>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_id
            .values()
            .find(|c| c.canonical_term() == term)
            .cloned())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Concept>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .rev()
            .skip(skip)
            .take(limit)
            .filter_map(|id| inner.by_id.get(id).cloned())
            .collect())
    }

    async fn add_category(&self, id: &ConceptId, category: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(concept) = inner.by_id.get_mut(id) else {
            return Ok(false);
        };
        if !concept.has_category(category) {
            concept.categories.push(category.to_string());
            concept.updated_at = Utc::now();
        }
        Ok(true)
    }

    async fn set_translation(
        &self,
        id: &ConceptId,
        language: Language,
        term: &str,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(concept) = inner.by_id.get_mut(id) else {
            return Ok(false);
        };
        concept.translations.insert(language, term.to_string());
        concept.updated_at = Utc::now();
        Ok(true)
    }

    async fn apply_feedback(
        &self,
        id: &ConceptId,
        update: &FeedbackUpdate,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(concept) = inner.by_id.get_mut(id) else {
            return Ok(false);
        };
        let now = Utc::now();
        concept.confidence_score = update.confidence_score;
        concept.historical_yield = update.historical_yield;
        concept.status = update.status;
        concept.usage_count += 1;
        concept.last_used_at = Some(now);
        concept.updated_at = now;
        if let Some(at) = update.positive_feedback_at {
            concept.last_positive_feedback_at = Some(at);
        }
        Ok(true)
    }

    async fn apply_decay(
        &self,
        id: &ConceptId,
        score: Score,
        status: ConceptStatus,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(concept) = inner.by_id.get_mut(id) else {
            return Ok(false);
        };
        if concept.confidence_score == score && concept.status == status {
            return Ok(false);
        }
        concept.confidence_score = score;
        concept.status = status;
        concept.updated_at = Utc::now();
        Ok(true)
    }

    async fn active_for_decay(&self) -> Result<Vec<DecaySnapshot>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_id
            .values()
            .filter(|c| c.status == ConceptStatus::Active)
            .map(|c| DecaySnapshot {
                id: c.id.clone(),
                status: c.status,
                confidence_score: c.confidence_score,
                last_positive_feedback_at: c.last_positive_feedback_at,
            })
            .collect())
    }

    async fn active_keywords(
        &self,
        language: Language,
        min_score: f64,
        limit: usize,
    ) -> Result<Vec<Concept>, StoreError> {
        let inner = self.inner.read().await;
        let mut matching: Vec<Concept> = inner
            .by_id
            .values()
            .filter(|c| {
                c.status == ConceptStatus::Active
                    && c.confidence_score.value() >= min_score
                    && c.translations.contains_key(&language)
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.confidence_score
                .value()
                .total_cmp(&a.confidence_score.value())
        });
        matching.truncate(limit);
        Ok(matching)
    }
}
