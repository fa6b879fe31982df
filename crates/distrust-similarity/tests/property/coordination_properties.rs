use chrono::Utc;
use distrust_core::traits::ISimilarityBackend;
use distrust_core::EvidenceSource;
use distrust_similarity::{ExactMatchBackend, SemanticBackend};
use proptest::prelude::*;

fn texts_to_sources(texts: &[String]) -> Vec<EvidenceSource> {
    let now = Utc::now();
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| EvidenceSource::new(t.clone(), 0.5, now, format!("s{i}")))
        .collect()
}

proptest! {
    #[test]
    fn exact_match_bounded(texts in prop::collection::vec("[a-c]{0,2}", 0..12)) {
        let sources = texts_to_sources(&texts);
        let c = ExactMatchBackend.coordination(&sources, 0.85).unwrap();
        prop_assert!((0.0..=1.0).contains(&c), "out of bounds: {}", c);
    }

    #[test]
    fn semantic_bounded(
        vectors in prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 4), 0..10),
        threshold in 0.0f64..=1.0,
    ) {
        let now = Utc::now();
        let sources: Vec<_> = vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| EvidenceSource::new("", 0.5, now, format!("s{i}")).with_embedding(v))
            .collect();
        let c = SemanticBackend.coordination(&sources, threshold).unwrap();
        prop_assert!((0.0..=1.0).contains(&c), "out of bounds: {}", c);
    }

    #[test]
    fn exact_match_ignores_source_ids(texts in prop::collection::vec("[a-b]{1,2}", 2..8)) {
        let mut sources = texts_to_sources(&texts);
        let before = ExactMatchBackend.coordination(&sources, 0.85).unwrap();
        for s in &mut sources {
            s.source_id = "same".to_string();
            s.authority_weight = 0.99;
        }
        let after = ExactMatchBackend.coordination(&sources, 0.85).unwrap();
        prop_assert_eq!(before, after);
    }
}
