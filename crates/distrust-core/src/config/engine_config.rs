use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::SECONDS_PER_DAY;
use crate::errors::ConfigError;

/// How authority weights outside [0, 1] are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Reject the evidence set with `InputError::AuthorityOutOfRange`.
    #[default]
    Reject,
    /// Clamp into [0, 1]. NaN is still rejected.
    Clamp,
}

/// Scoring engine configuration. Immutable once an engine is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scalar applied to the geometric mean before clamping. Recommended 2.3–3.0.
    pub alpha: f64,
    /// Half-life of evidence weight, in days.
    pub temporal_halflife_days: f64,
    /// Cosine similarity above which two sources count as coordinated.
    pub coordination_threshold: f64,
    /// Bayesian prior distrust, the starting point of adaptive feedback buckets.
    pub prior_distrust: f64,
    /// Sigmoid steepness `k` of the authority factor.
    pub authority_steepness: f64,
    /// Added to inverse entropy and coordination so neither collapses the product.
    pub stability_epsilon: f64,
    /// Floor applied inside every logarithm of the geometric mean.
    pub log_floor: f64,
    /// Authority weight below which coordinated content counts as astroturfing.
    pub astroturf_authority_ceiling: f64,
    /// Coordination above which low-authority content counts as astroturfing.
    pub astroturf_coordination_floor: f64,
    /// Minimum score forced by the astroturfing override.
    pub astroturf_min_score: f64,
    pub out_of_range_policy: OutOfRangePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_ALPHA,
            temporal_halflife_days: defaults::DEFAULT_TEMPORAL_HALFLIFE_DAYS,
            coordination_threshold: defaults::DEFAULT_COORDINATION_THRESHOLD,
            prior_distrust: defaults::DEFAULT_PRIOR_DISTRUST,
            authority_steepness: defaults::DEFAULT_AUTHORITY_STEEPNESS,
            stability_epsilon: defaults::DEFAULT_STABILITY_EPSILON,
            log_floor: defaults::DEFAULT_LOG_FLOOR,
            astroturf_authority_ceiling: defaults::DEFAULT_ASTROTURF_AUTHORITY_CEILING,
            astroturf_coordination_floor: defaults::DEFAULT_ASTROTURF_COORDINATION_FLOOR,
            astroturf_min_score: defaults::DEFAULT_ASTROTURF_MIN_SCORE,
            out_of_range_policy: OutOfRangePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Half-life as a chrono duration (millisecond precision).
    pub fn temporal_halflife(&self) -> Duration {
        Duration::milliseconds((self.temporal_halflife_days * SECONDS_PER_DAY * 1000.0) as i64)
    }

    /// Half-life in seconds.
    pub fn temporal_halflife_secs(&self) -> f64 {
        self.temporal_halflife_days * SECONDS_PER_DAY
    }

    /// Builder-style override of the half-life.
    pub fn with_halflife(mut self, halflife: Duration) -> Self {
        self.temporal_halflife_days = halflife.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConfigError::invalid("alpha", self.alpha, "must be finite and > 0"));
        }
        if !self.temporal_halflife_days.is_finite() || self.temporal_halflife_days <= 0.0 {
            return Err(ConfigError::invalid(
                "temporal_halflife_days",
                self.temporal_halflife_days,
                "must be finite and > 0",
            ));
        }
        check_unit("coordination_threshold", self.coordination_threshold)?;
        if !(self.prior_distrust > 0.0 && self.prior_distrust <= 1.0) {
            return Err(ConfigError::invalid(
                "prior_distrust",
                self.prior_distrust,
                "must be in (0, 1]",
            ));
        }
        if !self.authority_steepness.is_finite() || self.authority_steepness <= 0.0 {
            return Err(ConfigError::invalid(
                "authority_steepness",
                self.authority_steepness,
                "must be finite and > 0",
            ));
        }
        if !(self.stability_epsilon > 0.0 && self.stability_epsilon < 1.0) {
            return Err(ConfigError::invalid(
                "stability_epsilon",
                self.stability_epsilon,
                "must be in (0, 1)",
            ));
        }
        if !(self.log_floor > 0.0 && self.log_floor < self.stability_epsilon) {
            return Err(ConfigError::invalid(
                "log_floor",
                self.log_floor,
                "must be in (0, stability_epsilon)",
            ));
        }
        check_unit("astroturf_authority_ceiling", self.astroturf_authority_ceiling)?;
        check_unit("astroturf_coordination_floor", self.astroturf_coordination_floor)?;
        check_unit("astroturf_min_score", self.astroturf_min_score)?;
        Ok(())
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "must be in [0, 1]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn halflife_round_trips_through_duration() {
        let config = EngineConfig::default().with_halflife(Duration::days(7));
        assert!((config.temporal_halflife_days - 7.0).abs() < 1e-9);
        assert_eq!(config.temporal_halflife(), Duration::days(7));
    }

    #[test]
    fn nan_threshold_rejected() {
        let config = EngineConfig {
            coordination_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
