/// Distrust engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Steepness of the authority sigmoid.
pub const AUTHORITY_STEEPNESS: f64 = 10.0;

/// Midpoint of the authority sigmoid.
pub const AUTHORITY_MIDPOINT: f64 = 0.5;

/// Number of seconds in a day, used for half-life conversion.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Lower bound on a learned posterior so a bucket can always recover.
pub const MIN_POSTERIOR_DISTRUST: f64 = 0.01;
