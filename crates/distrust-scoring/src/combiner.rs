//! Geometric aggregation, astroturfing override, and clamping.
//!
//! ```text
//! raw   = exp(mean(ln(max(c_i, floor))))
//!         c = [authority, 1 - entropy + ε, coordination + ε]
//! score = clamp(alpha × raw, 0, 1)
//! ```
//!
//! Astroturfing: when the effective authority weight is below the ceiling and
//! coordination is above the floor, the score is raised to at least
//! `astroturf_min_score`. Low authority suppresses the product, which is exactly
//! the bot-campaign shape the mean alone under-penalizes.

use distrust_core::config::EngineConfig;

use crate::factors::entropy;

/// Extracted signals fed into the combiner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    /// Aggregated authority factor in [0, 1].
    pub authority: f64,
    /// Aggregated raw authority weight in [0, 1].
    pub authority_weight: f64,
    /// Normalized entropy in [0, 1].
    pub entropy: f64,
    /// Coordination in [0, 1].
    pub coordination: f64,
}

/// Combiner output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combined {
    /// Geometric mean before alpha scaling.
    pub raw: f64,
    /// Final score in [0, 1], before any learned correction.
    pub score: f64,
    /// The low-authority, high-coordination pattern matched.
    pub astroturf: bool,
}

/// Geometric mean via the log domain. Every component is floored before `ln`.
pub fn geometric_mean(components: &[f64], log_floor: f64) -> f64 {
    if components.is_empty() {
        return 0.0;
    }
    let log_sum: f64 = components.iter().map(|c| c.max(log_floor).ln()).sum();
    (log_sum / components.len() as f64).exp()
}

/// Whether the astroturfing pattern matches.
pub fn is_astroturf(signals: &Signals, config: &EngineConfig) -> bool {
    signals.authority_weight < config.astroturf_authority_ceiling
        && signals.coordination > config.astroturf_coordination_floor
}

pub fn combine(signals: &Signals, config: &EngineConfig) -> Combined {
    let eps = config.stability_epsilon;
    let components = [
        signals.authority,
        entropy::inverse(signals.entropy, eps),
        signals.coordination + eps,
    ];

    let raw = geometric_mean(&components, config.log_floor);
    let mut score = (config.alpha * raw).clamp(0.0, 1.0);

    let astroturf = is_astroturf(signals, config);
    if astroturf {
        score = score.max(config.astroturf_min_score);
    }

    Combined {
        raw,
        score,
        astroturf,
    }
}
