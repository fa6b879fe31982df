use std::collections::HashMap;

use distrust_core::errors::DistrustResult;
use distrust_core::evidence::EvidenceSource;
use distrust_core::models::CoordinationMethod;
use distrust_core::traits::ISimilarityBackend;

/// Groups sources by normalized content (trimmed, lowercased).
///
/// `coordination = (m - 1) / (n - 1)` where `m` is the largest group and `n`
/// the number of sources. Blank content is a key like any other, so a burst of
/// metadata-only sources counts as coordinated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchBackend;

impl ExactMatchBackend {
    pub fn new() -> Self {
        Self
    }

    /// Size of the largest group of identical content.
    pub fn largest_group(sources: &[EvidenceSource]) -> usize {
        let mut groups: HashMap<String, usize> = HashMap::new();
        let mut largest = 0usize;
        for source in sources {
            let count = groups.entry(source.content_key()).or_default();
            *count += 1;
            largest = largest.max(*count);
        }
        largest
    }
}

impl ISimilarityBackend for ExactMatchBackend {
    fn name(&self) -> &str {
        "exact-match"
    }

    fn method(&self) -> CoordinationMethod {
        CoordinationMethod::ExactMatch
    }

    fn coordination(&self, sources: &[EvidenceSource], _threshold: f64) -> DistrustResult<f64> {
        let n = sources.len();
        if n < 2 {
            return Ok(0.0);
        }
        let m = Self::largest_group(sources);
        Ok((m.saturating_sub(1)) as f64 / (n - 1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sources(contents: &[&str]) -> Vec<EvidenceSource> {
        let now = Utc::now();
        contents
            .iter()
            .enumerate()
            .map(|(i, c)| EvidenceSource::new(*c, 0.5, now, format!("s{i}")))
            .collect()
    }

    #[test]
    fn identical_content_is_fully_coordinated() {
        let backend = ExactMatchBackend;
        let c = backend
            .coordination(&sources(&["same", "same", "same", "same"]), 0.85)
            .unwrap();
        assert_eq!(c, 1.0);
    }

    #[test]
    fn unique_content_is_uncoordinated() {
        let backend = ExactMatchBackend;
        let c = backend
            .coordination(&sources(&["one", "two", "three"]), 0.85)
            .unwrap();
        assert_eq!(c, 0.0);
    }

    #[test]
    fn partial_group_scales_linearly() {
        let backend = ExactMatchBackend;
        // Largest group 3 of 5 → (3-1)/(5-1) = 0.5
        let c = backend
            .coordination(&sources(&["a", "A ", "a", "b", "c"]), 0.85)
            .unwrap();
        assert!((c - 0.5).abs() < 1e-12);
    }

    #[test]
    fn metadata_only_sources_coordinate_with_each_other() {
        let backend = ExactMatchBackend;
        let c = backend.coordination(&sources(&["", "  ", ""]), 0.85).unwrap();
        assert_eq!(c, 1.0);
        let c = backend.coordination(&sources(&["", "text", "other"]), 0.85).unwrap();
        assert_eq!(c, 0.0);
    }

    #[test]
    fn single_source_is_zero() {
        let backend = ExactMatchBackend;
        assert_eq!(backend.coordination(&sources(&["x"]), 0.85).unwrap(), 0.0);
        assert_eq!(backend.coordination(&[], 0.85).unwrap(), 0.0);
    }
}
