use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use lexia_core::config::GatewayConfig;
use lexia_core::constants::MAX_TERMS_PER_GENERATION;
use lexia_core::traits::{TermGateway, TermProvider};
use lexia_core::Language;

use crate::prompts;
use crate::throttle::CallThrottle;

/// Clean one line of provider output into a usable term. `None` for blanks
/// and single-character noise.
fn clean_term(raw: &str) -> Option<String> {
    let term = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_lowercase();
    if term.chars().count() > 1 {
        Some(term)
    } else {
        None
    }
}

/// Parse a generation response: one term per line, quotes stripped,
/// lower-cased, capped at the per-call maximum.
fn parse_terms(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(clean_term)
        .take(MAX_TERMS_PER_GENERATION)
        .collect()
}

/// [`TermGateway`] implementation wrapping a [`TermProvider`] with the
/// global call throttle and prompt construction. Generic over the provider
/// so tests can script completions without touching the network.
pub struct Gateway<P> {
    provider: P,
    throttle: CallThrottle,
    config: GatewayConfig,
}

impl<P: TermProvider> Gateway<P> {
    pub fn new(provider: P, config: GatewayConfig) -> Self {
        let throttle = CallThrottle::new(Duration::from_secs_f64(config.min_call_interval_secs));
        Self {
            provider,
            throttle,
            config,
        }
    }

    async fn complete(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, lexia_core::errors::GatewayError> {
        self.throttle.acquire().await;
        self.provider.complete(prompt, max_output_tokens).await
    }
}

#[async_trait]
impl<P: TermProvider> TermGateway for Gateway<P> {
    async fn generate_terms(
        &self,
        topic_description: &str,
        language: Language,
        context: Option<&str>,
    ) -> Vec<String> {
        info!(
            topic = topic_description,
            %language,
            with_context = context.is_some(),
            "generating candidate terms"
        );
        let prompt = prompts::generation_prompt(topic_description, language, context);
        let raw = match self.complete(&prompt, self.config.generation_max_tokens).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(topic = topic_description, %language, error = %e, "term generation failed");
                return Vec::new();
            }
        };

        let terms = parse_terms(&raw);
        debug!(count = terms.len(), "parsed candidate terms");
        terms
    }

    async fn translate_term(
        &self,
        term: &str,
        source: Language,
        target: Language,
    ) -> Option<String> {
        let prompt = prompts::translation_prompt(term, source, target);
        let raw = match self.complete(&prompt, self.config.translation_max_tokens).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(term, %source, %target, error = %e, "translation failed");
                return None;
            }
        };

        let translation = clean_term(&raw)?;

        // An identical result is a valid cross-language homograph, but a
        // same-language no-op means the provider did not translate.
        if translation == term.to_lowercase() && source == target {
            warn!(term, %source, "provider returned the source term unchanged");
            return None;
        }

        Some(translation)
    }
}
