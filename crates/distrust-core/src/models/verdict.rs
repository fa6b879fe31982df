use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete interpretive label mapped from the continuous score.
///
/// Bands are closed on the lower bound: `[0, 0.2)`, `[0.2, 0.4)`,
/// `[0.4, 0.7)`, `[0.7, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Trust,
    LowDistrust,
    MediumDistrust,
    HighDistrust,
}

impl Verdict {
    /// Lower bound of `LowDistrust`.
    pub const LOW: f64 = 0.2;
    /// Lower bound of `MediumDistrust`.
    pub const MEDIUM: f64 = 0.4;
    /// Lower bound of `HighDistrust`.
    pub const HIGH: f64 = 0.7;

    /// Band a score. Expects a value already clamped to [0, 1].
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH {
            Verdict::HighDistrust
        } else if score >= Self::MEDIUM {
            Verdict::MediumDistrust
        } else if score >= Self::LOW {
            Verdict::LowDistrust
        } else {
            Verdict::Trust
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Trust => "TRUST",
            Verdict::LowDistrust => "LOW_DISTRUST",
            Verdict::MediumDistrust => "MEDIUM_DISTRUST",
            Verdict::HighDistrust => "HIGH_DISTRUST",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
