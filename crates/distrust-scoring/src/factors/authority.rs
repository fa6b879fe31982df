use distrust_core::constants::AUTHORITY_MIDPOINT;
use distrust_core::evidence::EvidenceSource;

/// Authority factor: `1 / (1 + e^(-k·(w - 0.5)))`.
///
/// Range: 0.0 – 1.0, monotone in `w`, 0.5 at the midpoint.
/// Higher authority means a larger distrust contribution.
pub fn factor(authority_weight: f64, steepness: f64) -> f64 {
    1.0 / (1.0 + (-steepness * (authority_weight - AUTHORITY_MIDPOINT)).exp())
}

/// Per-source authority factors, in source order.
pub fn factors(sources: &[EvidenceSource], steepness: f64) -> Vec<f64> {
    sources
        .iter()
        .map(|s| factor(s.authority_weight, steepness))
        .collect()
}

/// Temporal-weighted aggregate of the authority signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthorityAggregate {
    /// Weighted geometric mean of the per-source factors.
    pub factor: f64,
    /// Weighted arithmetic mean of the raw authority weights.
    pub weight: f64,
}

/// Aggregate per-source factors using temporal weights.
///
/// If every weight has decayed to zero (evidence far older than the half-life)
/// the sources are weighted uniformly instead.
pub fn aggregate(
    sources: &[EvidenceSource],
    factors: &[f64],
    temporal_weights: &[f64],
    log_floor: f64,
) -> AuthorityAggregate {
    if sources.is_empty() {
        return AuthorityAggregate {
            factor: 0.0,
            weight: 0.0,
        };
    }

    let total: f64 = temporal_weights.iter().sum();
    let uniform = !(total.is_finite() && total > 0.0);
    let weight_of = |i: usize| if uniform { 1.0 } else { temporal_weights[i] };
    let norm = if uniform { sources.len() as f64 } else { total };

    let mut log_sum = 0.0;
    let mut weight_sum = 0.0;
    for (i, (source, f)) in sources.iter().zip(factors).enumerate() {
        let w = weight_of(i);
        log_sum += w * f.max(log_floor).ln();
        weight_sum += w * source.authority_weight;
    }

    AuthorityAggregate {
        factor: (log_sum / norm).exp().clamp(0.0, 1.0),
        weight: (weight_sum / norm).clamp(0.0, 1.0),
    }
}
