use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use lexia_core::errors::RegistryError;
use lexia_core::traits::{ConceptStore, InsertOutcome, TermGateway};
use lexia_core::{Concept, ConceptId, GenerationMethod, Language};

/// Lower-case and trim a raw term. An empty result is a validation error;
/// nothing downstream ever sees a blank or mixed-case term.
pub fn normalize_term(raw: &str) -> Result<String, RegistryError> {
    let term = raw.trim().to_lowercase();
    if term.is_empty() {
        return Err(RegistryError::Validation {
            reason: "term is empty after normalization".to_string(),
        });
    }
    Ok(term)
}

/// Manual creation payload. Non-canonical terms are optional; whatever is
/// present gets normalized before touching the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewConcept {
    pub canonical_term: String,
    #[serde(default)]
    pub translations: BTreeMap<Language, String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// One row of the keyword export feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordItem {
    pub term: String,
    pub language: Language,
    pub concept_id: ConceptId,
    /// Canonical ("en") term, for operator-facing labels.
    pub display_name: String,
}

/// Registry over a [`ConceptStore`]. Sole writer of translations, categories
/// and identity fields; scoring state is written through the dedicated store
/// operations instead.
///
/// No in-process lock is held across store round trips. Conflict resolution
/// belongs to the store's uniqueness constraint, which is why creation is an
/// insert-then-recheck protocol rather than a guarded read-modify-write.
#[derive(Clone)]
pub struct ConceptRegistry {
    store: Arc<dyn ConceptStore>,
}

impl ConceptRegistry {
    pub fn new(store: Arc<dyn ConceptStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ConceptStore> {
        &self.store
    }

    /// Point lookup by canonical term (normalized here).
    pub async fn find_by_canonical_term(
        &self,
        term: &str,
    ) -> Result<Option<Concept>, RegistryError> {
        let term = normalize_term(term)?;
        Ok(self.store.find_by_canonical_term(&term).await?)
    }

    /// Create a concept or converge on the existing one. Returns the record
    /// plus whether this call performed the insert.
    ///
    /// Concurrent discovery of the same canonical term from any number of
    /// pipelines ends with exactly one insert; every loser of the race
    /// re-reads the winner's record. A re-read miss after a reported
    /// conflict means the unique index and the lookup disagree, which is a
    /// fatal consistency error.
    pub async fn create_if_absent(
        &self,
        canonical_term: &str,
        extra_translations: BTreeMap<Language, String>,
        categories: Vec<String>,
        method: GenerationMethod,
    ) -> Result<(Concept, bool), RegistryError> {
        let canonical = normalize_term(canonical_term)?;

        // Optimistic lookup first; the common case is an existing concept.
        if let Some(existing) = self.store.find_by_canonical_term(&canonical).await? {
            debug!(term = %canonical, id = %existing.id, "concept already present");
            return Ok((existing, false));
        }

        let mut translations = BTreeMap::new();
        for (language, raw) in extra_translations {
            if language == Language::En {
                continue;
            }
            match normalize_term(&raw) {
                Ok(term) => {
                    translations.insert(language, term);
                }
                Err(_) => {
                    warn!(%language, "dropping blank translation at creation");
                }
            }
        }

        let candidate = Concept::new(canonical.clone(), translations, categories, method);
        match self.store.insert(&candidate).await? {
            InsertOutcome::Inserted => {
                info!(term = %canonical, id = %candidate.id, "concept created");
                Ok((candidate, true))
            }
            InsertOutcome::Conflict => {
                // Another writer won the race between our lookup and insert.
                debug!(term = %canonical, "insert conflict, re-reading winner");
                match self.store.find_by_canonical_term(&canonical).await? {
                    Some(winner) => Ok((winner, false)),
                    None => {
                        error!(term = %canonical, "conflict reported but re-read found nothing");
                        Err(RegistryError::Consistency { term: canonical })
                    }
                }
            }
        }
    }

    /// Manual creation path. An existing canonical term is a duplicate
    /// error here, unlike the merge-friendly [`Self::create_if_absent`].
    pub async fn create_manual(&self, payload: NewConcept) -> Result<Concept, RegistryError> {
        let canonical = normalize_term(&payload.canonical_term)?;
        let (concept, created) = self
            .create_if_absent(
                &canonical,
                payload.translations,
                payload.categories,
                GenerationMethod::Manual,
            )
            .await?;
        if !created {
            return Err(RegistryError::Duplicate { term: canonical });
        }
        Ok(concept)
    }

    pub async fn get(&self, id: &ConceptId) -> Result<Concept, RegistryError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })
    }

    pub async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Concept>, RegistryError> {
        Ok(self.store.list(skip, limit).await?)
    }

    /// Idempotent set-add of a category.
    pub async fn add_category(
        &self,
        id: &ConceptId,
        category: &str,
    ) -> Result<(), RegistryError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(RegistryError::Validation {
                reason: "category is empty".to_string(),
            });
        }
        if self.store.add_category(id, category).await? {
            Ok(())
        } else {
            Err(RegistryError::NotFound { id: id.clone() })
        }
    }

    /// Set the term for a language, normalized.
    pub async fn upsert_translation(
        &self,
        id: &ConceptId,
        language: Language,
        term: &str,
    ) -> Result<(), RegistryError> {
        let term = normalize_term(term)?;
        if self.store.set_translation(id, language, &term).await? {
            Ok(())
        } else {
            Err(RegistryError::NotFound { id: id.clone() })
        }
    }

    /// Fill in every missing language via the gateway, concurrently. A
    /// failed language logs and is skipped; sibling languages and the
    /// caller's overall success are unaffected. Returns how many
    /// translations were written.
    pub async fn enrich_missing_translations<G>(&self, concept: &Concept, gateway: &G) -> usize
    where
        G: TermGateway + ?Sized,
    {
        let canonical = concept.canonical_term().to_string();
        let tasks = concept.missing_translations().into_iter().map(|language| {
            let canonical = canonical.clone();
            async move {
                let Some(translated) = gateway
                    .translate_term(&canonical, Language::En, language)
                    .await
                else {
                    warn!(id = %concept.id, %language, "no translation available");
                    return false;
                };
                match self.upsert_translation(&concept.id, language, &translated).await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(id = %concept.id, %language, error = %e, "failed to store translation");
                        false
                    }
                }
            }
        });

        futures::future::join_all(tasks)
            .await
            .into_iter()
            .filter(|written| *written)
            .count()
    }

    /// Keyword export feed: active concepts at or above the score floor that
    /// carry a term in the requested language, best first.
    pub async fn export_keywords(
        &self,
        language: Language,
        min_score: f64,
        limit: usize,
    ) -> Result<Vec<KeywordItem>, RegistryError> {
        let concepts = self.store.active_keywords(language, min_score, limit).await?;
        Ok(concepts
            .into_iter()
            .filter_map(|concept| {
                let term = concept.translations.get(&language)?.clone();
                Some(KeywordItem {
                    term,
                    language,
                    display_name: concept.canonical_term().to_string(),
                    concept_id: concept.id,
                })
            })
            .collect())
    }
}
