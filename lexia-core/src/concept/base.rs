use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::language::Language;
use super::score::Score;
use crate::constants;

/// Opaque concept identifier, assigned at creation, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(String);

impl ConceptId {
    /// Generate a fresh UUID v4 identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ConceptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Concept lifecycle status. A concept is never physically deleted;
/// deactivation is the deletion surrogate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptStatus {
    Active,
    Inactive,
}

/// How a concept came into existence. Recorded at creation, immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    /// Entered by an operator through the external API.
    Manual,
    /// Produced by the generation provider from a topic description alone.
    Llm,
    /// Produced by the generation provider with topic context snippets.
    PlaceholderContext,
}

/// The unit of record: a canonical multilingual term with aggregated
/// relevance metrics.
///
/// Invariants:
/// - `translations` always contains a non-empty [`Language::En`] entry,
///   lower-cased and trimmed; it is the global uniqueness key.
/// - `confidence_score` and `historical_yield` stay in [0, 1] (enforced by
///   [`Score`]).
/// - `categories` is append-only and deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// UUID v4 identifier.
    pub id: ConceptId,
    /// Language code → term. The "en" entry is mandatory and canonical.
    pub translations: BTreeMap<Language, String>,
    /// Topic tags accumulated over time.
    pub categories: Vec<String>,
    /// Overall relevance estimate, boosted/decayed by feedback and time.
    pub confidence_score: Score,
    /// Running weighted average of raw feedback relevance.
    pub historical_yield: Score,
    /// Number of feedback events received; increments by exactly 1 each.
    pub usage_count: u64,
    pub status: ConceptStatus,
    pub generation_method: GenerationMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Last time any term of this concept was used or received feedback.
    pub last_used_at: Option<DateTime<Utc>>,
    /// Last time positive feedback was received.
    pub last_positive_feedback_at: Option<DateTime<Utc>>,
}

impl Concept {
    /// Build a new concept around a canonical term, with creation defaults.
    /// The caller is responsible for having normalized the terms already.
    pub fn new(
        canonical_term: String,
        extra_translations: BTreeMap<Language, String>,
        categories: Vec<String>,
        generation_method: GenerationMethod,
    ) -> Self {
        let now = Utc::now();
        let mut translations = extra_translations;
        translations.insert(Language::En, canonical_term);
        Self {
            id: ConceptId::generate(),
            translations,
            categories,
            confidence_score: Score::new(constants::INITIAL_CONFIDENCE_SCORE),
            historical_yield: Score::new(constants::INITIAL_HISTORICAL_YIELD),
            usage_count: 0,
            status: ConceptStatus::Active,
            generation_method,
            created_at: now,
            updated_at: now,
            last_used_at: None,
            last_positive_feedback_at: None,
        }
    }

    /// The canonical ("en") term. Guaranteed present by construction.
    pub fn canonical_term(&self) -> &str {
        self.translations
            .get(&Language::En)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Supported languages this concept has no term for yet.
    pub fn missing_translations(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| !self.translations.contains_key(lang))
            .collect()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Identity equality: two concepts are equal if they have the same ID.
impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_concept_carries_creation_defaults() {
        let c = Concept::new(
            "fever".to_string(),
            BTreeMap::new(),
            vec!["symptoms_fever_temperature".to_string()],
            GenerationMethod::Llm,
        );
        assert_eq!(c.canonical_term(), "fever");
        assert_eq!(c.confidence_score.value(), 0.75);
        assert_eq!(c.historical_yield.value(), 0.5);
        assert_eq!(c.usage_count, 0);
        assert_eq!(c.status, ConceptStatus::Active);
        assert!(c.last_used_at.is_none());
        assert!(c.last_positive_feedback_at.is_none());
    }

    #[test]
    fn missing_translations_excludes_present_languages() {
        let mut extra = BTreeMap::new();
        extra.insert(Language::Fr, "fièvre".to_string());
        let c = Concept::new("fever".to_string(), extra, vec![], GenerationMethod::Manual);
        assert_eq!(c.missing_translations(), vec![Language::Ar]);
    }
}
