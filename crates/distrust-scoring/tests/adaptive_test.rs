use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use distrust_core::config::{DistrustConfig, EngineConfig, FeedbackConfig, FeedbackMode};
use distrust_core::evidence::{EvidenceSet, EvidenceSource};
use distrust_core::models::Outcome;
use distrust_core::traits::FixedClock;
use distrust_scoring::{DistrustEngine, FeedbackSnapshot};

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 29, 12, 0, 0).unwrap()
}

fn adaptive_engine() -> DistrustEngine {
    DistrustEngine::new(EngineConfig::default())
        .unwrap()
        .with_feedback(FeedbackConfig::adaptive())
        .unwrap()
        .with_clock(Arc::new(FixedClock(reference())))
}

fn echo_chamber(story: &str) -> EvidenceSet {
    ["cnn", "msnbc", "nyt", "wapo", "abc"]
        .iter()
        .map(|id| EvidenceSource::new(story, 0.8, reference(), *id))
        .collect()
}

fn independent() -> EvidenceSet {
    EvidenceSet::new(vec![
        EvidenceSource::new("Study 1", 0.2, reference(), "researcher_a"),
        EvidenceSource::new("Study 2", 0.3, reference(), "researcher_b"),
    ])
}

#[test]
fn falsified_pattern_raises_later_similar_evaluations() {
    let engine = adaptive_engine();
    let base = engine.evaluate(&echo_chamber("Story A"), None, None).unwrap();
    assert_eq!(base.learned_correction, 1.0);

    engine
        .evaluate(&echo_chamber("Story A"), Some(Outcome::Falsified), None)
        .unwrap();

    // A different story with the same shape lands in the same bucket.
    let later = engine.evaluate(&echo_chamber("Story B"), None, None).unwrap();
    assert!((later.learned_correction - 1.2).abs() < 1e-12);
    assert!((later.distrust_score - base.base_score * 1.2).abs() < 1e-12);
    assert_eq!(later.base_score, base.base_score);
}

#[test]
fn unrelated_patterns_are_unaffected() {
    let engine = adaptive_engine();
    let before = engine.evaluate(&independent(), None, None).unwrap();
    engine
        .evaluate(&echo_chamber("Story A"), Some(Outcome::Verified), None)
        .unwrap();
    let after = engine.evaluate(&independent(), None, None).unwrap();
    assert_eq!(before, after);
}

#[test]
fn learning_happens_after_the_current_result() {
    let engine = adaptive_engine();
    let first = engine
        .evaluate(&echo_chamber("Story A"), Some(Outcome::Verified), None)
        .unwrap();
    assert_eq!(first.learned_correction, 1.0);
    assert!((first.distrust_score - first.base_score * 0.8).abs() < 1e-12);
}

#[test]
fn reset_forgets_learned_corrections() {
    let engine = adaptive_engine();
    let base = engine.evaluate(&echo_chamber("Story A"), None, None).unwrap();
    engine
        .evaluate(&echo_chamber("Story A"), Some(Outcome::Falsified), None)
        .unwrap();
    assert_eq!(engine.feedback_store().map(|s| s.len()), Some(1));

    engine.reset_learning();
    let after = engine.evaluate(&echo_chamber("Story A"), None, None).unwrap();
    assert_eq!(after, base);
}

#[test]
fn snapshot_carries_learning_to_a_new_engine() {
    let engine = adaptive_engine();
    engine
        .evaluate(&echo_chamber("Story A"), Some(Outcome::Falsified), None)
        .unwrap();
    engine
        .evaluate(&echo_chamber("Story A"), Some(Outcome::Falsified), None)
        .unwrap();
    let snapshot = engine.feedback_store().unwrap().snapshot();
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.entries[0].observations, 2);

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: FeedbackSnapshot = serde_json::from_str(&json).unwrap();

    let fresh = adaptive_engine();
    fresh.feedback_store().unwrap().restore(&restored);
    let result = fresh.evaluate(&echo_chamber("Story B"), None, None).unwrap();
    assert!((result.learned_correction - 1.44).abs() < 1e-9);
}

#[test]
fn adaptive_mode_from_toml() {
    let config = DistrustConfig::from_toml(
        r#"
        [feedback]
        mode = "adaptive"
        "#,
    )
    .unwrap();
    assert_eq!(config.feedback.mode, FeedbackMode::Adaptive);
    let engine = DistrustEngine::from_config(&config).unwrap();
    assert!(engine.feedback_store().is_some());
    assert_eq!(engine.feedback_store().unwrap().prior(), config.engine.prior_distrust);
}

#[test]
fn stateless_reset_is_a_no_op() {
    let engine = DistrustEngine::new(EngineConfig::default()).unwrap();
    engine.reset_learning();
    assert!(engine.feedback_store().is_none());
}
