//! Default values for every configuration knob.

// Engine
pub const DEFAULT_ALPHA: f64 = 2.7;
pub const DEFAULT_TEMPORAL_HALFLIFE_DAYS: f64 = 30.0;
pub const DEFAULT_COORDINATION_THRESHOLD: f64 = 0.85;
pub const DEFAULT_PRIOR_DISTRUST: f64 = 0.5;
pub const DEFAULT_AUTHORITY_STEEPNESS: f64 = 10.0;
pub const DEFAULT_STABILITY_EPSILON: f64 = 0.01;
pub const DEFAULT_LOG_FLOOR: f64 = 1e-10;

// Astroturfing override
pub const DEFAULT_ASTROTURF_AUTHORITY_CEILING: f64 = 0.3;
pub const DEFAULT_ASTROTURF_COORDINATION_FLOOR: f64 = 0.8;
pub const DEFAULT_ASTROTURF_MIN_SCORE: f64 = 0.75;

// Feedback
pub const DEFAULT_VERIFIED_FACTOR: f64 = 0.8;
pub const DEFAULT_FALSIFIED_FACTOR: f64 = 1.2;
pub const DEFAULT_PATTERN_RESOLUTION: u8 = 10;

// Embedding
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
