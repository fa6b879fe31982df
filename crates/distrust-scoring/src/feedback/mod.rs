//! Bayesian-style feedback from verified outcomes.
//!
//! A verified claim multiplies the score by `verified_factor` (0.8), a
//! falsified one by `falsified_factor` (1.2). The result is clamped and
//! re-banded. Feedback always produces a new result; the input is untouched.
//!
//! In adaptive mode the same outcome also updates a [`FeedbackStore`] keyed by
//! a [`PatternSignature`], which corrects later evaluations whose components
//! fall in the same buckets.

mod signature;
mod store;

pub use signature::PatternSignature;
pub use store::{FeedbackSnapshot, FeedbackStore, PatternPosterior, SnapshotEntry};

use distrust_core::config::FeedbackConfig;
use distrust_core::models::{Outcome, ScoreResult, Verdict};
use tracing::info;

/// Multiplier for an outcome.
pub fn factor(outcome: Outcome, config: &FeedbackConfig) -> f64 {
    match outcome {
        Outcome::Verified => config.verified_factor,
        Outcome::Falsified => config.falsified_factor,
    }
}

/// Derive a new result with the outcome folded in.
///
/// An indeterminate result (no evidence) keeps its score: there is nothing the
/// outcome could be attributed to. The outcome is still recorded.
pub fn apply(result: &ScoreResult, outcome: Outcome, config: &FeedbackConfig) -> ScoreResult {
    let mut adjusted = result.clone();
    adjusted.outcome = Some(outcome);
    if result.is_indeterminate() {
        return adjusted;
    }

    let score = (result.distrust_score * factor(outcome, config)).clamp(0.0, 1.0);
    adjusted.distrust_score = score;
    adjusted.verdict = Verdict::from_score(score);

    info!(
        ?outcome,
        before = result.distrust_score,
        after = score,
        verdict = %adjusted.verdict,
        "feedback applied"
    );
    adjusted
}
