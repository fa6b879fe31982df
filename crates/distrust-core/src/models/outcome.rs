use serde::{Deserialize, Serialize};

/// External verification of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The claim was confirmed.
    Verified,
    /// The claim was confirmed to be misinformation.
    Falsified,
}

impl Outcome {
    pub fn from_verified(verified: bool) -> Self {
        if verified {
            Outcome::Verified
        } else {
            Outcome::Falsified
        }
    }
}

impl From<bool> for Outcome {
    fn from(verified: bool) -> Self {
        Self::from_verified(verified)
    }
}
