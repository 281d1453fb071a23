use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring engine configuration. All thresholds and factors are explicit
/// parameters here; the engine itself never reads ambient config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Feedback relevance at or above this counts as positive.
    pub low_yield_threshold: f64,
    /// Score below this deactivates a concept; at or above reactivates it.
    pub deactivation_threshold: f64,
    /// Multiplier applied to the score on positive feedback (capped at 1.0).
    /// Named separately from the negative factor; no symmetry is assumed.
    pub positive_boost_factor: f64,
    /// Multiplier applied to the score on negative feedback.
    pub score_decay_factor: f64,
    /// Master switch for time-based decay.
    pub time_decay_enabled: bool,
    /// Days without positive feedback before time decay applies.
    pub decay_period_days: u32,
    /// Multiplier applied to the score by each time-decay pass.
    pub time_decay_factor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            low_yield_threshold: defaults::DEFAULT_LOW_YIELD_THRESHOLD,
            deactivation_threshold: defaults::DEFAULT_DEACTIVATION_THRESHOLD,
            positive_boost_factor: defaults::DEFAULT_POSITIVE_BOOST_FACTOR,
            score_decay_factor: defaults::DEFAULT_SCORE_DECAY_FACTOR,
            time_decay_enabled: defaults::DEFAULT_TIME_DECAY_ENABLED,
            decay_period_days: defaults::DEFAULT_DECAY_PERIOD_DAYS,
            time_decay_factor: defaults::DEFAULT_TIME_DECAY_FACTOR,
        }
    }
}
