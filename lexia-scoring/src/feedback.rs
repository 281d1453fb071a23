use chrono::{DateTime, Utc};

use lexia_core::config::ScoringConfig;
use lexia_core::traits::FeedbackUpdate;
use lexia_core::{ConceptStatus, Score};

/// Result of applying one feedback event to a concept's metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackOutcome {
    pub confidence_score: Score,
    pub historical_yield: Score,
    pub usage_count: u64,
    pub status: ConceptStatus,
    pub is_positive: bool,
}

impl FeedbackOutcome {
    /// Convert into the atomic store update for this event.
    pub fn into_update(self, now: DateTime<Utc>) -> FeedbackUpdate {
        FeedbackUpdate {
            confidence_score: self.confidence_score,
            historical_yield: self.historical_yield,
            status: self.status,
            positive_feedback_at: self.is_positive.then_some(now),
        }
    }
}

/// Feedback arithmetic.
///
/// ```text
/// isPositive = relevance >= low_yield_threshold
/// newScore   = clamp01(isPositive ? min(score * boost, 1.0)
///                                 : score * decay_factor)
/// newYield   = usage == 0 ? relevance
///                         : clamp01((yield * usage + relevance) / (usage + 1))
/// newUsage   = usage + 1
/// ```
///
/// Status is recomputed from the deactivation threshold: the only
/// transitions are crossings of that threshold in either direction.
pub fn compute(
    cfg: &ScoringConfig,
    score: Score,
    historical_yield: Score,
    usage_count: u64,
    relevance_metric: f64,
) -> FeedbackOutcome {
    let is_positive = relevance_metric >= cfg.low_yield_threshold;

    let new_score = if is_positive {
        Score::new((score.value() * cfg.positive_boost_factor).min(1.0))
    } else {
        score * cfg.score_decay_factor
    };

    let new_yield = if usage_count == 0 {
        Score::new(relevance_metric)
    } else {
        let weighted =
            (historical_yield.value() * usage_count as f64 + relevance_metric)
                / (usage_count as f64 + 1.0);
        Score::new(weighted)
    };

    FeedbackOutcome {
        confidence_score: new_score,
        historical_yield: new_yield,
        usage_count: usage_count + 1,
        status: super::engine::status_for(new_score, cfg.deactivation_threshold),
        is_positive,
    }
}
