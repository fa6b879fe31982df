use distrust_core::models::ComponentBreakdown;
use serde::{Deserialize, Serialize};

/// Quantized component profile used to group "similarly-patterned" evidence.
///
/// Each signal in [0, 1] maps to one of `resolution` buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatternSignature {
    pub authority: u8,
    pub entropy: u8,
    pub coordination: u8,
}

impl PatternSignature {
    pub fn from_breakdown(breakdown: &ComponentBreakdown, resolution: u8) -> Self {
        Self {
            authority: bucket(breakdown.authority_weight, resolution),
            entropy: bucket(breakdown.entropy, resolution),
            coordination: bucket(breakdown.coordination, resolution),
        }
    }
}

fn bucket(value: f64, resolution: u8) -> u8 {
    let r = resolution.max(1);
    let scaled = (value.clamp(0.0, 1.0) * r as f64).floor() as u8;
    scaled.min(r - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_maps_to_last_bucket() {
        assert_eq!(bucket(1.0, 10), 9);
        assert_eq!(bucket(0.0, 10), 0);
        assert_eq!(bucket(0.45, 10), 4);
    }

    #[test]
    fn nearby_profiles_share_a_signature() {
        let mut a = ComponentBreakdown::empty();
        a.authority_weight = 0.81;
        a.entropy = 1.0;
        a.coordination = 1.0;
        let mut b = a.clone();
        b.authority_weight = 0.84;
        assert_eq!(
            PatternSignature::from_breakdown(&a, 10),
            PatternSignature::from_breakdown(&b, 10)
        );
    }
}
