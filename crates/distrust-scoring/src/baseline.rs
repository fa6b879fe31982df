//! Earlier single-penalty formulation, kept for calibration comparisons.
//!
//! `alpha · (ln(1 - w + 1e-8) + entropy)²`
//!
//! Unbounded, and blind to coordination: five outlets repeating one story
//! score the same as five independent ones. The geometric combiner replaced it.

const LOG_OFFSET: f64 = 1e-8;

/// Legacy penalty for one authority weight and entropy value. Not in [0, 1].
pub fn legacy_score(authority_weight: f64, entropy: f64, alpha: f64) -> f64 {
    let component = (1.0 - authority_weight + LOG_OFFSET).ln() + entropy;
    alpha * component * component
}
