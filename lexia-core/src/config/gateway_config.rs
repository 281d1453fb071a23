use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation gateway configuration: throttle spacing, per-call token
/// budgets, and REST provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Minimum seconds between provider call starts. The provider quota is
    /// global to the account, so this spacing covers ALL operations.
    pub min_call_interval_secs: f64,
    /// Max output tokens for a term-generation call.
    pub generation_max_tokens: u32,
    /// Max output tokens for a single-term translation call.
    pub translation_max_tokens: u32,
    pub temperature: f64,
    /// Per-request timeout; expiry maps to the "no result" failure path.
    pub request_timeout_secs: u64,
    /// Provider model identifier.
    pub model: String,
    /// Provider endpoint base URL.
    pub endpoint: String,
    /// Provider API key. Empty means the provider is unusable and every call
    /// fails as an auth error.
    pub api_key: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            min_call_interval_secs: defaults::DEFAULT_MIN_CALL_INTERVAL_SECS,
            generation_max_tokens: defaults::DEFAULT_GENERATION_MAX_TOKENS,
            translation_max_tokens: defaults::DEFAULT_TRANSLATION_MAX_TOKENS,
            temperature: defaults::DEFAULT_TEMPERATURE,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            model: "gemini-1.5-flash-latest".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
        }
    }
}
