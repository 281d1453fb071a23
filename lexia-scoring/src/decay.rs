use chrono::{DateTime, Duration, Utc};

use lexia_core::config::ScoringConfig;
use lexia_core::traits::DecaySnapshot;
use lexia_core::ConceptStatus;

/// Result of a time-decay evaluation. `Unchanged` lets callers skip the
/// persistence round trip for concepts that did not actually move.
#[derive(Debug, Clone, PartialEq)]
pub enum DecayOutcome {
    Changed {
        confidence_score: lexia_core::Score,
        status: ConceptStatus,
    },
    Unchanged,
}

/// Time-decay arithmetic. Applies only to active concepts whose last
/// positive feedback is unset or older than the configured period; the
/// score is multiplied by the time-decay factor and the status recomputed
/// from the deactivation threshold.
pub fn compute(cfg: &ScoringConfig, snapshot: &DecaySnapshot, now: DateTime<Utc>) -> DecayOutcome {
    if snapshot.status != ConceptStatus::Active {
        return DecayOutcome::Unchanged;
    }

    let cutoff = now - Duration::days(i64::from(cfg.decay_period_days));
    let stale = match snapshot.last_positive_feedback_at {
        None => true,
        Some(at) => at < cutoff,
    };
    if !stale {
        return DecayOutcome::Unchanged;
    }

    let decayed = snapshot.confidence_score * cfg.time_decay_factor;
    let status = super::engine::status_for(decayed, cfg.deactivation_threshold);

    if decayed == snapshot.confidence_score && status == snapshot.status {
        return DecayOutcome::Unchanged;
    }

    DecayOutcome::Changed {
        confidence_score: decayed,
        status,
    }
}
