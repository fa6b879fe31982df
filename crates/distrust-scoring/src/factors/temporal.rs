use chrono::{DateTime, Utc};
use distrust_core::evidence::EvidenceSource;

/// Temporal decay weight: `2^(-Δt / halfLife)`.
///
/// Range: 0.0 – 1.0. Timestamps after the reference time count as fresh.
pub fn weight(timestamp: DateTime<Utc>, reference: DateTime<Utc>, halflife_secs: f64) -> f64 {
    let elapsed_secs = (reference - timestamp).num_milliseconds().max(0) as f64 / 1000.0;
    (-elapsed_secs / halflife_secs).exp2()
}

/// Per-source weights, in source order.
pub fn weights(sources: &[EvidenceSource], reference: DateTime<Utc>, halflife_secs: f64) -> Vec<f64> {
    sources
        .iter()
        .map(|s| weight(s.timestamp, reference, halflife_secs))
        .collect()
}

/// Mean weight, 0.0 for no sources.
pub fn average(weights: &[f64]) -> f64 {
    if weights.is_empty() {
        return 0.0;
    }
    weights.iter().sum::<f64>() / weights.len() as f64
}
