use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Lifecycle orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Bound on simultaneous in-flight term/concept tasks within a cycle.
    /// Kept modest: the gateway serializes the expensive calls anyway, so a
    /// wide fan-out only builds a queue of waiters.
    pub fanout_limit: usize,
    /// Directory holding optional per-topic context files
    /// (`{topic_key}.txt`). When a file exists and is non-empty, generation
    /// for that topic is context-driven.
    pub context_dir: Option<PathBuf>,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            fanout_limit: defaults::DEFAULT_FANOUT_LIMIT,
            context_dir: None,
        }
    }
}
