use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use futures::StreamExt;
use tracing::{debug, error, info, warn};

use lexia_core::config::{LifecycleConfig, ScoringConfig};
use lexia_core::errors::RegistryError;
use lexia_core::traits::TermGateway;
use lexia_core::{Concept, Feedback, GenerationMethod, Language, LexiaResult};
use lexia_registry::ConceptRegistry;
use lexia_scoring::{DecayOutcome, ScoringEngine};

use crate::topics::{self, Topic};

/// Drives the generation and decay cycles and handles out-of-band feedback.
/// Per-item failures inside a cycle are isolated and logged; cycles report
/// counts, never errors.
pub struct LifecycleOrchestrator<G> {
    registry: ConceptRegistry,
    gateway: G,
    scoring: ScoringEngine,
    config: LifecycleConfig,
}

impl<G: TermGateway> LifecycleOrchestrator<G> {
    pub fn new(
        registry: ConceptRegistry,
        gateway: G,
        scoring_config: ScoringConfig,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            registry,
            gateway,
            scoring: ScoringEngine::new(scoring_config),
            config,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// One generation cycle with a random target language. Returns the count
    /// of terms that completed without a fatal step.
    pub async fn run_generation_cycle(&self, category: Option<&str>) -> usize {
        self.run_generation_cycle_with(category, topics::random_language())
            .await
    }

    /// Generation cycle against an explicit target language.
    pub async fn run_generation_cycle_with(
        &self,
        category: Option<&str>,
        language: Language,
    ) -> usize {
        let topic = self.resolve_topic(category);
        let context = self.load_topic_context(topic.key).await;
        let method = if context.is_some() {
            GenerationMethod::PlaceholderContext
        } else {
            GenerationMethod::Llm
        };
        info!(topic = topic.key, %language, ?method, "starting generation cycle");

        let terms = self
            .gateway
            .generate_terms(topic.description, language, context.as_deref())
            .await;
        if terms.is_empty() {
            info!(topic = topic.key, "no candidate terms; cycle aborted");
            return 0;
        }

        let processed = AtomicUsize::new(0);
        futures::stream::iter(terms)
            .for_each_concurrent(self.config.fanout_limit, |term| {
                let processed = &processed;
                async move {
                    if self.process_term(&term, language, topic, method).await {
                        processed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
            .await;

        let count = processed.into_inner();
        info!(topic = topic.key, count, "generation cycle finished");
        count
    }

    /// Process one candidate term: anchor it to the canonical language,
    /// create-or-merge, tag the topic on merges, then enrich translations.
    /// A missing canonical anchor is fatal to this term only.
    async fn process_term(
        &self,
        term: &str,
        language: Language,
        topic: &Topic,
        method: GenerationMethod,
    ) -> bool {
        let canonical = if language.is_canonical() {
            term.to_string()
        } else {
            match self
                .gateway
                .translate_term(term, language, Language::En)
                .await
            {
                Some(canonical) => canonical,
                None => {
                    warn!(term, %language, "no canonical anchor; dropping term");
                    return false;
                }
            }
        };

        let mut extra = BTreeMap::new();
        if !language.is_canonical() {
            extra.insert(language, term.to_string());
        }

        let (concept, created) = match self
            .registry
            .create_if_absent(&canonical, extra, vec![topic.key.to_string()], method)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                warn!(term, canonical, error = %e, "create-or-merge failed");
                return false;
            }
        };

        let concept = if created {
            concept
        } else {
            if let Err(e) = self.registry.add_category(&concept.id, topic.key).await {
                warn!(id = %concept.id, topic = topic.key, error = %e, "category add failed");
            }
            // Merges keep the discovered source-language term; without this
            // the gateway would re-translate the anchor on enrichment.
            if !language.is_canonical() {
                if let Err(e) = self
                    .registry
                    .upsert_translation(&concept.id, language, term)
                    .await
                {
                    warn!(id = %concept.id, %language, error = %e, "translation upsert failed");
                }
            }
            match self.registry.get(&concept.id).await {
                Ok(fresh) => fresh,
                Err(e) => {
                    warn!(id = %concept.id, error = %e, "re-read after merge failed");
                    concept
                }
            }
        };

        let enriched = self
            .registry
            .enrich_missing_translations(&concept, &self.gateway)
            .await;
        debug!(id = %concept.id, created, enriched, "term processed");
        true
    }

    /// One decay cycle. Returns the count of concepts whose persisted state
    /// actually changed.
    pub async fn run_decay_cycle(&self) -> usize {
        if !self.scoring.config().time_decay_enabled {
            debug!("time decay disabled; skipping cycle");
            return 0;
        }

        let snapshots = match self.registry.store().active_for_decay().await {
            Ok(snapshots) => snapshots,
            Err(e) => {
                error!(error = %e, "could not fetch decay candidates");
                return 0;
            }
        };
        let now = Utc::now();

        let changed = AtomicUsize::new(0);
        futures::stream::iter(snapshots)
            .for_each_concurrent(self.config.fanout_limit, |snapshot| {
                let changed = &changed;
                async move {
                    let DecayOutcome::Changed {
                        confidence_score,
                        status,
                    } = self.scoring.apply_time_decay(&snapshot, now)
                    else {
                        return;
                    };
                    match self
                        .registry
                        .store()
                        .apply_decay(&snapshot.id, confidence_score, status)
                        .await
                    {
                        Ok(true) => {
                            changed.fetch_add(1, Ordering::Relaxed);
                        }
                        Ok(false) => {}
                        Err(e) => {
                            warn!(id = %snapshot.id, error = %e, "decay persist failed");
                        }
                    }
                }
            })
            .await;

        let count = changed.into_inner();
        info!(count, "decay cycle finished");
        count
    }

    /// Out-of-band feedback intake. Validates, scores, persists atomically,
    /// and returns the updated concept. Term/language mismatches are
    /// warnings, not failures.
    pub async fn process_feedback(&self, feedback: Feedback) -> LexiaResult<Concept> {
        feedback.validate()?;
        let concept = self.registry.get(&feedback.concept_id).await?;

        match concept.translations.get(&feedback.language) {
            None => {
                warn!(
                    id = %concept.id,
                    language = %feedback.language,
                    "feedback references a language this concept has no term for"
                );
            }
            Some(stored) => {
                if let Some(reported) = &feedback.term {
                    if stored != &reported.trim().to_lowercase() {
                        warn!(
                            id = %concept.id,
                            stored,
                            reported,
                            "feedback term does not match the stored term"
                        );
                    }
                }
            }
        }

        let update = self
            .scoring
            .apply_feedback(&concept, feedback.relevance_metric)
            .into_update(Utc::now());
        let matched = self
            .registry
            .store()
            .apply_feedback(&concept.id, &update)
            .await
            .map_err(RegistryError::from)?;
        if !matched {
            return Err(RegistryError::NotFound {
                id: concept.id.clone(),
            }
            .into());
        }

        Ok(self.registry.get(&concept.id).await?)
    }

    /// Validate a requested category against the catalog; unknown or absent
    /// categories fall back to a random topic.
    fn resolve_topic(&self, category: Option<&str>) -> &'static Topic {
        match category {
            Some(key) => match topics::TOPICS.iter().find(|t| t.key == key) {
                Some(topic) => topic,
                None => {
                    warn!(category = key, "unknown category; drawing a random topic");
                    topics::random_topic()
                }
            },
            None => topics::random_topic(),
        }
    }

    /// Optional per-topic context snippets from `{context_dir}/{key}.txt`.
    async fn load_topic_context(&self, topic_key: &str) -> Option<String> {
        let dir = self.config.context_dir.as_ref()?;
        let path = dir.join(format!("{topic_key}.txt"));
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    debug!(path = %path.display(), "context file is empty; ignoring");
                    None
                } else {
                    debug!(path = %path.display(), "using topic context");
                    Some(trimmed.to_string())
                }
            }
            Err(_) => None,
        }
    }
}
