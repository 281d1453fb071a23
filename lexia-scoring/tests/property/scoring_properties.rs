use chrono::{Duration, Utc};
use lexia_core::config::ScoringConfig;
use lexia_core::traits::DecaySnapshot;
use lexia_core::{Concept, ConceptId, ConceptStatus, GenerationMethod, Score};
use lexia_scoring::{DecayOutcome, ScoringEngine};
use proptest::prelude::*;

use std::collections::BTreeMap;

fn make_concept(score: f64, historical_yield: f64, usage: u64) -> Concept {
    let mut c = Concept::new(
        "hydration".to_string(),
        BTreeMap::new(),
        vec![],
        GenerationMethod::Llm,
    );
    c.confidence_score = Score::new(score);
    c.historical_yield = Score::new(historical_yield);
    c.usage_count = usage;
    c
}

// ── Bounds hold under any feedback sequence ──────────────────────────────

proptest! {
    #[test]
    fn scores_stay_in_unit_interval(
        start_score in 0.0f64..=1.0,
        start_yield in 0.0f64..=1.0,
        metrics in prop::collection::vec(0.0f64..=1.0, 1..50),
    ) {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let mut concept = make_concept(start_score, start_yield, 0);

        for metric in metrics {
            let out = engine.apply_feedback(&concept, metric);
            prop_assert!((0.0..=1.0).contains(&out.confidence_score.value()));
            prop_assert!((0.0..=1.0).contains(&out.historical_yield.value()));

            concept.confidence_score = out.confidence_score;
            concept.historical_yield = out.historical_yield;
            concept.usage_count = out.usage_count;
            concept.status = out.status;
        }
    }

    #[test]
    fn usage_count_increments_by_exactly_one(
        start_score in 0.0f64..=1.0,
        usage in 0u64..10_000,
        metric in 0.0f64..=1.0,
    ) {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let concept = make_concept(start_score, 0.5, usage);

        let out = engine.apply_feedback(&concept, metric);
        prop_assert_eq!(out.usage_count, usage + 1);
    }

    #[test]
    fn status_tracks_deactivation_threshold(
        start_score in 0.0f64..=1.0,
        metric in 0.0f64..=1.0,
    ) {
        let cfg = ScoringConfig::default();
        let engine = ScoringEngine::new(cfg.clone());
        let concept = make_concept(start_score, 0.5, 4);

        let out = engine.apply_feedback(&concept, metric);
        let expected = if out.confidence_score.value() >= cfg.deactivation_threshold {
            ConceptStatus::Active
        } else {
            ConceptStatus::Inactive
        };
        prop_assert_eq!(out.status, expected);
    }

    #[test]
    fn positive_feedback_never_lowers_score(
        start_score in 0.0f64..=1.0,
        metric in 0.3f64..=1.0,
    ) {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let concept = make_concept(start_score, 0.5, 2);

        let out = engine.apply_feedback(&concept, metric);
        prop_assert!(out.is_positive);
        prop_assert!(out.confidence_score.value() >= start_score - f64::EPSILON);
    }

    #[test]
    fn negative_feedback_never_raises_score(
        start_score in 0.0f64..=1.0,
        metric in 0.0f64..0.3,
    ) {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let concept = make_concept(start_score, 0.5, 2);

        let out = engine.apply_feedback(&concept, metric);
        prop_assert!(!out.is_positive);
        prop_assert!(out.confidence_score.value() <= start_score + f64::EPSILON);
    }
}

// ── Decay invariants ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn recent_positive_feedback_blocks_decay(
        score in 0.0f64..=1.0,
        days in 0i64..14,
    ) {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let snap = DecaySnapshot {
            id: ConceptId::generate(),
            status: ConceptStatus::Active,
            confidence_score: Score::new(score),
            last_positive_feedback_at: Some(Utc::now() - Duration::days(days)),
        };
        prop_assert_eq!(engine.apply_time_decay(&snap, Utc::now()), DecayOutcome::Unchanged);
    }

    #[test]
    fn decay_never_raises_score(
        score in 0.0f64..=1.0,
        days in 15i64..3650,
    ) {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let snap = DecaySnapshot {
            id: ConceptId::generate(),
            status: ConceptStatus::Active,
            confidence_score: Score::new(score),
            last_positive_feedback_at: Some(Utc::now() - Duration::days(days)),
        };

        match engine.apply_time_decay(&snap, Utc::now()) {
            DecayOutcome::Changed { confidence_score, .. } => {
                prop_assert!(confidence_score.value() <= score + f64::EPSILON);
                prop_assert!(confidence_score.value() >= 0.0);
            }
            DecayOutcome::Unchanged => {}
        }
    }

    #[test]
    fn inactive_concepts_are_never_decayed(score in 0.0f64..=1.0) {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let snap = DecaySnapshot {
            id: ConceptId::generate(),
            status: ConceptStatus::Inactive,
            confidence_score: Score::new(score),
            last_positive_feedback_at: None,
        };
        prop_assert_eq!(engine.apply_time_decay(&snap, Utc::now()), DecayOutcome::Unchanged);
    }
}
