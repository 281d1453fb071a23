use async_trait::async_trait;

use crate::concept::Language;
use crate::errors::GatewayError;

/// Raw completion seam implemented by concrete providers (REST client in
/// production, scripted fakes in tests). Implementations do not throttle;
/// the gateway wrapping them does.
#[async_trait]
pub trait TermProvider: Send + Sync {
    async fn complete(&self, prompt: &str, max_output_tokens: u32) -> Result<String, GatewayError>;
}

/// The gateway surface consumed by the registry and the lifecycle
/// orchestrator. Both operations are rate-limited and potentially slow.
///
/// All provider failures (quota, auth, blocked content, network, empty
/// response) are normalized to an empty/`None` result and logged; retry
/// policy belongs to the caller.
#[async_trait]
pub trait TermGateway: Send + Sync {
    /// Generate up to a configured number of candidate terms for a topic in
    /// the given language, optionally steered by context snippets.
    async fn generate_terms(
        &self,
        topic_description: &str,
        language: Language,
        context: Option<&str>,
    ) -> Vec<String>;

    /// Translate a single term. Returns `None` when no usable translation is
    /// available.
    async fn translate_term(
        &self,
        term: &str,
        source: Language,
        target: Language,
    ) -> Option<String>;
}
