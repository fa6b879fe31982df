use chrono::{DateTime, Utc};

use crate::errors::DistrustResult;
use crate::evidence::EvidenceSet;
use crate::models::{Outcome, ScoreResult};

/// Distrust scoring entry point.
pub trait IDistrustScorer: Send + Sync {
    /// Score `evidence`. `reference_time` defaults to the scorer's clock.
    fn evaluate(
        &self,
        evidence: &EvidenceSet,
        outcome: Option<Outcome>,
        reference_time: Option<DateTime<Utc>>,
    ) -> DistrustResult<ScoreResult>;
}
