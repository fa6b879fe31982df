use std::collections::BTreeMap;

use distrust_core::evidence::EvidenceSource;

/// Normalized Shannon entropy of the `source_id` distribution.
///
/// `H = -Σ p·log2(p)` divided by `log2(unique)`. Exactly 0.0 for zero or one
/// unique source, whatever the repeat count.
pub fn normalized(sources: &[EvidenceSource]) -> f64 {
    // Ordered map: summation order must not depend on hasher state.
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for s in sources {
        *counts.entry(s.source_id.as_str()).or_default() += 1;
    }

    let unique = counts.len();
    if unique <= 1 {
        return 0.0;
    }

    let total = sources.len() as f64;
    let entropy: f64 = counts
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum();

    (entropy / (unique as f64).log2()).clamp(0.0, 1.0)
}

/// Distrust contribution of low diversity: `1 - entropy + epsilon`.
pub fn inverse(normalized_entropy: f64, epsilon: f64) -> f64 {
    1.0 - normalized_entropy + epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn with_ids(ids: &[&str]) -> Vec<EvidenceSource> {
        let now = Utc::now();
        ids.iter()
            .enumerate()
            .map(|(i, id)| EvidenceSource::new(format!("c{i}"), 0.5, now, *id))
            .collect()
    }

    #[test]
    fn single_source_is_zero_regardless_of_repeats() {
        for n in [1, 2, 5, 50] {
            let ids = vec!["gov"; n];
            assert_eq!(normalized(&with_ids(&ids)), 0.0);
        }
    }

    #[test]
    fn uniform_distinct_ids_are_one() {
        for n in [2, 3, 5, 17] {
            let ids: Vec<String> = (0..n).map(|i| format!("id{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            assert!((normalized(&with_ids(&refs)) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn skewed_distribution_is_between() {
        let e = normalized(&with_ids(&["a", "a", "a", "b"]));
        // H = -(0.75·log2 0.75 + 0.25·log2 0.25) ≈ 0.8113
        assert!((e - 0.811_278).abs() < 1e-5);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(normalized(&[]), 0.0);
    }

    #[test]
    fn inverse_never_hits_zero() {
        assert!((inverse(1.0, 0.01) - 0.01).abs() < 1e-12);
        assert!((inverse(0.0, 0.01) - 1.01).abs() < 1e-12);
    }
}
