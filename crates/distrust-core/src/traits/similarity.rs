use crate::errors::DistrustResult;
use crate::evidence::EvidenceSource;
use crate::models::CoordinationMethod;

/// Coordination detection strategy.
///
/// Implementations look only at content (text or embedding), never at
/// `source_id` or `authority_weight`.
pub trait ISimilarityBackend: Send + Sync {
    fn name(&self) -> &str;

    fn method(&self) -> CoordinationMethod;

    /// Coordination in [0, 1] across `sources`.
    fn coordination(&self, sources: &[EvidenceSource], threshold: f64) -> DistrustResult<f64>;
}
