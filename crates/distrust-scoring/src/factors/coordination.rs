use chrono::{DateTime, Utc};
use distrust_core::evidence::EvidenceSource;
use distrust_core::traits::IEmbeddingProvider;
use distrust_observability::coordination_span;
use distrust_similarity::{detect_coordination, CoordinationOutcome};
use tracing::debug;

/// Coordination signal for the normalized sources.
///
/// Content only: the selected backend never sees authority, and ids are used
/// solely by the normalizer's dedup step that ran before.
pub fn detect(
    sources: &[EvidenceSource],
    provider: Option<&dyn IEmbeddingProvider>,
    threshold: f64,
    now: DateTime<Utc>,
) -> CoordinationOutcome {
    let span = coordination_span!(sources.len());
    let _guard = span.enter();

    let outcome = detect_coordination(sources, provider, threshold, now);
    debug!(
        score = outcome.score,
        method = ?outcome.method,
        degraded = outcome.degradation.is_some(),
        "coordination detected"
    );
    outcome
}
