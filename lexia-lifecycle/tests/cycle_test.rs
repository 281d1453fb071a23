use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use lexia_core::config::{LifecycleConfig, ScoringConfig};
use lexia_core::errors::{LexiaError, RegistryError};
use lexia_core::traits::TermGateway;
use lexia_core::{ConceptId, ConceptStatus, Feedback, GenerationMethod, Language, Score};
use lexia_lifecycle::LifecycleOrchestrator;
use lexia_registry::{ConceptRegistry, MemoryConceptStore};

const TOPIC: &str = "symptoms_fever_temperature";

/// Gateway scripted with a fixed term list; translation appends the target
/// code, except for one optional untranslatable term and explicit canonical
/// anchors.
struct ScriptedGateway {
    terms: Vec<String>,
    untranslatable: Option<String>,
    anchors: BTreeMap<String, String>,
}

impl ScriptedGateway {
    fn with_terms(terms: &[&str]) -> Self {
        Self {
            terms: terms.iter().map(|t| t.to_string()).collect(),
            untranslatable: None,
            anchors: BTreeMap::new(),
        }
    }
}

#[async_trait]
impl TermGateway for ScriptedGateway {
    async fn generate_terms(
        &self,
        _topic_description: &str,
        _language: Language,
        _context: Option<&str>,
    ) -> Vec<String> {
        self.terms.clone()
    }

    async fn translate_term(
        &self,
        term: &str,
        _source: Language,
        target: Language,
    ) -> Option<String> {
        if self.untranslatable.as_deref() == Some(term) {
            return None;
        }
        if target == Language::En {
            if let Some(anchor) = self.anchors.get(term) {
                return Some(anchor.clone());
            }
        }
        Some(format!("{term}-{target}"))
    }
}

fn orchestrator(
    gateway: ScriptedGateway,
) -> (LifecycleOrchestrator<ScriptedGateway>, ConceptRegistry) {
    let registry = ConceptRegistry::new(Arc::new(MemoryConceptStore::new()));
    let orchestrator = LifecycleOrchestrator::new(
        registry.clone(),
        gateway,
        ScoringConfig::default(),
        LifecycleConfig::default(),
    );
    (orchestrator, registry)
}

// ── Generation cycle ─────────────────────────────────────────────────────

#[tokio::test]
async fn generation_cycle_creates_tagged_enriched_concepts() {
    let (orchestrator, registry) = orchestrator(ScriptedGateway::with_terms(&["fever", "chills"]));

    let count = orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;
    assert_eq!(count, 2);

    let concept = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");
    assert_eq!(concept.generation_method, GenerationMethod::Llm);
    assert!(concept.has_category(TOPIC));
    assert_eq!(concept.translations.get(&Language::Fr).unwrap(), "fever-fr");
    assert_eq!(concept.translations.get(&Language::Ar).unwrap(), "fever-ar");
}

#[tokio::test]
async fn generation_cycle_merges_into_existing_concepts() {
    let (orchestrator, registry) = orchestrator(ScriptedGateway::with_terms(&["fever"]));
    registry
        .create_if_absent(
            "fever",
            BTreeMap::new(),
            vec!["disease_influenza_seasonal".to_string()],
            GenerationMethod::Manual,
        )
        .await
        .unwrap();

    let count = orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;
    assert_eq!(count, 1);

    assert_eq!(registry.list(0, 10).await.unwrap().len(), 1);
    let concept = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");
    assert!(concept.has_category("disease_influenza_seasonal"));
    assert!(concept.has_category(TOPIC));
    assert_eq!(concept.generation_method, GenerationMethod::Manual);
}

#[tokio::test]
async fn merge_keeps_the_discovered_source_language_term() {
    let mut gateway = ScriptedGateway::with_terms(&["fièvre"]);
    gateway
        .anchors
        .insert("fièvre".to_string(), "fever".to_string());
    let (orchestrator, registry) = orchestrator(gateway);
    registry
        .create_if_absent("fever", BTreeMap::new(), vec![], GenerationMethod::Manual)
        .await
        .unwrap();

    let count = orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::Fr)
        .await;
    assert_eq!(count, 1);

    let concept = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");
    // The discovered French term lands on the existing record; enrichment
    // must not overwrite it with a fresh anchor re-translation.
    assert_eq!(concept.translations.get(&Language::Fr).unwrap(), "fièvre");
    assert_eq!(concept.translations.get(&Language::Ar).unwrap(), "fever-ar");
}

#[tokio::test]
async fn missing_canonical_anchor_is_fatal_to_that_term_only() {
    let (orchestrator, registry) = orchestrator(ScriptedGateway {
        terms: vec![
            "fièvre".to_string(),
            "frissons".to_string(),
            "rare".to_string(),
        ],
        untranslatable: Some("rare".to_string()),
        anchors: BTreeMap::new(),
    });

    let count = orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::Fr)
        .await;
    assert_eq!(count, 2);

    // The source-language term is preserved alongside the canonical anchor.
    let concept = registry
        .find_by_canonical_term("fièvre-en")
        .await
        .unwrap()
        .expect("anchored concept");
    assert_eq!(concept.translations.get(&Language::Fr).unwrap(), "fièvre");
    assert!(registry
        .find_by_canonical_term("rare-en")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn empty_generation_aborts_the_cycle() {
    let (orchestrator, registry) = orchestrator(ScriptedGateway::with_terms(&[]));
    let count = orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;
    assert_eq!(count, 0);
    assert!(registry.list(0, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn context_file_switches_the_generation_method() {
    let dir = std::env::temp_dir().join(format!(
        "lexia-context-{}-{}",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{TOPIC}.txt")), "recent posts about fever").unwrap();

    let registry = ConceptRegistry::new(Arc::new(MemoryConceptStore::new()));
    let orchestrator = LifecycleOrchestrator::new(
        registry.clone(),
        ScriptedGateway::with_terms(&["fever"]),
        ScoringConfig::default(),
        LifecycleConfig {
            context_dir: Some(dir.clone()),
            ..Default::default()
        },
    );

    orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;
    let concept = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");
    assert_eq!(
        concept.generation_method,
        GenerationMethod::PlaceholderContext
    );

    std::fs::remove_dir_all(&dir).ok();
}

// ── Decay cycle ──────────────────────────────────────────────────────────

#[tokio::test]
async fn decay_cycle_counts_only_persisted_changes() {
    let (orchestrator, registry) =
        orchestrator(ScriptedGateway::with_terms(&["fever", "chills", "cough"]));
    orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;

    // Deactivate one concept; inactive records never decay.
    let inactive = registry
        .find_by_canonical_term("cough")
        .await
        .unwrap()
        .expect("cough concept");
    registry
        .store()
        .apply_decay(&inactive.id, Score::new(0.1), ConceptStatus::Inactive)
        .await
        .unwrap();

    let changed = orchestrator.run_decay_cycle().await;
    assert_eq!(changed, 2);

    let decayed = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");
    assert!((decayed.confidence_score.value() - 0.735).abs() < 1e-12);
}

#[tokio::test]
async fn decay_cycle_is_a_noop_when_disabled() {
    let registry = ConceptRegistry::new(Arc::new(MemoryConceptStore::new()));
    let orchestrator = LifecycleOrchestrator::new(
        registry.clone(),
        ScriptedGateway::with_terms(&["fever"]),
        ScoringConfig {
            time_decay_enabled: false,
            ..Default::default()
        },
        LifecycleConfig::default(),
    );
    orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;

    assert_eq!(orchestrator.run_decay_cycle().await, 0);
    let concept = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");
    assert_eq!(concept.confidence_score.value(), 0.75);
}

// ── Feedback intake ──────────────────────────────────────────────────────

fn feedback_for(id: &ConceptId, metric: f64) -> Feedback {
    Feedback {
        concept_id: id.clone(),
        language: Language::En,
        relevance_metric: metric,
        source: "news-ingester".to_string(),
        term: None,
    }
}

#[tokio::test]
async fn positive_feedback_updates_and_returns_the_concept() {
    let (orchestrator, registry) = orchestrator(ScriptedGateway::with_terms(&["fever"]));
    orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;
    let concept = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");

    let updated = orchestrator
        .process_feedback(feedback_for(&concept.id, 0.9))
        .await
        .unwrap();
    assert!((updated.confidence_score.value() - 0.7875).abs() < 1e-12);
    assert_eq!(updated.historical_yield.value(), 0.9);
    assert_eq!(updated.usage_count, 1);
    assert!(updated.last_positive_feedback_at.is_some());
    assert!(updated.last_used_at.is_some());
}

#[tokio::test]
async fn feedback_for_unknown_concept_is_not_found() {
    let (orchestrator, _) = orchestrator(ScriptedGateway::with_terms(&[]));
    let err = orchestrator
        .process_feedback(feedback_for(&ConceptId::generate(), 0.5))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LexiaError::Registry(RegistryError::NotFound { .. })
    ));
}

#[tokio::test]
async fn malformed_feedback_is_rejected_before_any_mutation() {
    let (orchestrator, registry) = orchestrator(ScriptedGateway::with_terms(&["fever"]));
    orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;
    let concept = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");

    let err = orchestrator
        .process_feedback(feedback_for(&concept.id, 1.5))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LexiaError::Registry(RegistryError::Validation { .. })
    ));

    let untouched = registry.get(&concept.id).await.unwrap();
    assert_eq!(untouched.usage_count, 0);
}

#[tokio::test]
async fn term_mismatch_is_a_warning_not_a_failure() {
    let (orchestrator, registry) = orchestrator(ScriptedGateway::with_terms(&["fever"]));
    orchestrator
        .run_generation_cycle_with(Some(TOPIC), Language::En)
        .await;
    let concept = registry
        .find_by_canonical_term("fever")
        .await
        .unwrap()
        .expect("fever concept");

    let mut feedback = feedback_for(&concept.id, 0.4);
    feedback.term = Some("influenza".to_string());
    let updated = orchestrator.process_feedback(feedback).await.unwrap();
    assert_eq!(updated.usage_count, 1);
}
