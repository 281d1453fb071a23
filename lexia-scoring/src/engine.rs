use chrono::{DateTime, Utc};

use lexia_core::config::ScoringConfig;
use lexia_core::traits::DecaySnapshot;
use lexia_core::{Concept, ConceptStatus, Score};

use crate::decay::{self, DecayOutcome};
use crate::feedback::{self, FeedbackOutcome};

/// Status implied by a score under the deactivation threshold policy.
/// Inactive iff the score is below the threshold.
pub(crate) fn status_for(score: Score, deactivation_threshold: f64) -> ConceptStatus {
    if score.meets(deactivation_threshold) {
        ConceptStatus::Active
    } else {
        ConceptStatus::Inactive
    }
}

/// Scoring engine: the state machine over `{active, inactive}` driven by
/// feedback events and elapsed time. Holds its configuration explicitly so
/// it stays pure and independently testable.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Whether a relevance metric counts as positive feedback.
    pub fn is_positive(&self, relevance_metric: f64) -> bool {
        relevance_metric >= self.config.low_yield_threshold
    }

    /// Compute the metric update for one feedback event. Does not persist.
    pub fn apply_feedback(&self, concept: &Concept, relevance_metric: f64) -> FeedbackOutcome {
        feedback::compute(
            &self.config,
            concept.confidence_score,
            concept.historical_yield,
            concept.usage_count,
            relevance_metric,
        )
    }

    /// Evaluate time decay for one concept snapshot. Does not persist.
    /// Returns [`DecayOutcome::Unchanged`] when nothing would move.
    pub fn apply_time_decay(&self, snapshot: &DecaySnapshot, now: DateTime<Utc>) -> DecayOutcome {
        decay::compute(&self.config, snapshot, now)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
