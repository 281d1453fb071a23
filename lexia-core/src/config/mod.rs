//! Process configuration. Loaded once at startup from TOML (or built from
//! defaults) and passed down by value — components never read ambient
//! configuration themselves.

pub mod defaults;

mod gateway_config;
mod lifecycle_config;
mod scheduler_config;
mod scoring_config;

use serde::{Deserialize, Serialize};

pub use gateway_config::GatewayConfig;
pub use lifecycle_config::LifecycleConfig;
pub use scheduler_config::SchedulerConfig;
pub use scoring_config::ScoringConfig;

use crate::errors::{LexiaError, LexiaResult};

/// Top-level configuration for the whole system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiaConfig {
    pub scoring: ScoringConfig,
    pub gateway: GatewayConfig,
    pub lifecycle: LifecycleConfig,
    pub scheduler: SchedulerConfig,
}

impl LexiaConfig {
    /// Parse a configuration from a TOML string. Missing sections and fields
    /// fall back to defaults.
    pub fn from_toml_str(input: &str) -> LexiaResult<Self> {
        toml::from_str(input).map_err(|e| LexiaError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file on disk.
    pub fn from_path(path: &std::path::Path) -> LexiaResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| LexiaError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }
}
