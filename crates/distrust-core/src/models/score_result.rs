use serde::{Deserialize, Serialize};

use super::{ComponentBreakdown, Outcome, Verdict};

/// Result of one evaluation. Owned by the caller; the engine keeps no reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final score in [0, 1].
    pub distrust_score: f64,
    pub verdict: Verdict,
    pub components: ComponentBreakdown,
    pub source_count: usize,
    pub unique_sources: usize,
    /// Combiner output before any learned correction or feedback.
    pub base_score: f64,
    /// Multiplier from the adaptive pattern store. 1.0 when stateless.
    pub learned_correction: f64,
    /// Verification outcome folded into this result, if any.
    pub outcome: Option<Outcome>,
}

impl ScoreResult {
    /// Neutral result for an empty evidence set.
    pub fn neutral() -> Self {
        Self {
            distrust_score: 0.0,
            verdict: Verdict::Trust,
            components: ComponentBreakdown::empty(),
            source_count: 0,
            unique_sources: 0,
            base_score: 0.0,
            learned_correction: 1.0,
            outcome: None,
        }
    }

    /// No evidence was available to score.
    pub fn is_indeterminate(&self) -> bool {
        self.source_count == 0
    }
}
