use serde::{Deserialize, Serialize};

use super::defaults;

/// Periodic scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Interval between combined generation+decay jobs.
    pub interval_minutes: u64,
    /// Upper bound on the uniform random jitter added to each interval,
    /// to avoid thundering-herd alignment across instances.
    pub jitter_secs: u64,
    /// Fixed pause between the generation cycle and the decay cycle.
    pub inter_cycle_pause_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_minutes: defaults::DEFAULT_SCHEDULER_INTERVAL_MINUTES,
            jitter_secs: defaults::DEFAULT_SCHEDULER_JITTER_SECS,
            inter_cycle_pause_secs: defaults::DEFAULT_INTER_CYCLE_PAUSE_SECS,
        }
    }
}
