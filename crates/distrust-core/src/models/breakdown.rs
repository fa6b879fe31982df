use serde::{Deserialize, Serialize};

use super::DegradationEvent;

/// Which similarity backend produced the coordination signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinationMethod {
    /// Grouping by normalized content equality.
    ExactMatch,
    /// Pairwise cosine similarity over embeddings.
    Semantic,
    /// Fewer than two comparable sources.
    Trivial,
}

/// Immutable snapshot of the extracted signals behind a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentBreakdown {
    /// Temporal-weighted geometric mean of per-source authority factors.
    pub authority: f64,
    /// Temporal-weighted mean of the raw authority weights.
    pub authority_weight: f64,
    /// Normalized provenance entropy in [0, 1].
    pub entropy: f64,
    /// Coordination score in [0, 1].
    pub coordination: f64,
    /// Mean temporal decay weight over sources.
    pub temporal_avg_weight: f64,
    /// Sources as submitted, before deduplication. Same as `ScoreResult::source_count`.
    pub source_count: usize,
    pub unique_source_count: usize,
    /// Verbatim repeats (same id, same normalized content) dropped before scoring.
    /// `source_count - duplicates_removed` sources were scored.
    pub duplicates_removed: usize,
    pub coordination_method: CoordinationMethod,
    /// The astroturfing rule raised the score.
    pub astroturf_override: bool,
    /// Set when the embedding provider failed and exact matching was used instead.
    pub degradation: Option<DegradationEvent>,
}

impl ComponentBreakdown {
    /// Breakdown of an empty evidence set.
    pub fn empty() -> Self {
        Self {
            authority: 0.0,
            authority_weight: 0.0,
            entropy: 0.0,
            coordination: 0.0,
            temporal_avg_weight: 0.0,
            source_count: 0,
            unique_source_count: 0,
            duplicates_removed: 0,
            coordination_method: CoordinationMethod::Trivial,
            astroturf_override: false,
            degradation: None,
        }
    }
}
