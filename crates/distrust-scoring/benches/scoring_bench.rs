use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use distrust_core::config::EngineConfig;
use distrust_core::evidence::{EvidenceSet, EvidenceSource};
use distrust_scoring::DistrustEngine;

/// `n` sources, a quarter of them repeating one story, spread over 90 days.
fn build_set(n: usize, embedded: bool) -> EvidenceSet {
    let reference = Utc.with_ymd_and_hms(2025, 11, 29, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let content = if i % 4 == 0 {
                "coordinated talking point".to_string()
            } else {
                format!("independent report {i}")
            };
            let source = EvidenceSource::new(
                content,
                (i % 10) as f64 / 10.0,
                reference - Duration::days((i % 90) as i64),
                format!("source_{}", i % 37),
            );
            if embedded {
                let v: Vec<f32> = (0..64).map(|d| ((i * 7 + d) % 13) as f32).collect();
                source.with_embedding(v)
            } else {
                source
            }
        })
        .collect()
}

fn bench_exact_match_100(c: &mut Criterion) {
    let engine = DistrustEngine::new(EngineConfig::default()).unwrap();
    let set = build_set(100, false);
    c.bench_function("evaluate_exact_match_100", |b| {
        b.iter(|| engine.evaluate(black_box(&set), None, None).unwrap())
    });
}

fn bench_semantic_500(c: &mut Criterion) {
    let engine = DistrustEngine::new(EngineConfig::default()).unwrap();
    let set = build_set(500, true);
    c.bench_function("evaluate_semantic_500", |b| {
        b.iter(|| engine.evaluate(black_box(&set), None, None).unwrap())
    });
}

fn bench_batch_64(c: &mut Criterion) {
    let engine = DistrustEngine::new(EngineConfig::default()).unwrap();
    let sets: Vec<EvidenceSet> = (0..64).map(|_| build_set(50, false)).collect();
    c.bench_function("evaluate_batch_64x50", |b| {
        b.iter(|| engine.evaluate_batch(black_box(&sets), None))
    });
}

criterion_group!(benches, bench_exact_match_100, bench_semantic_500, bench_batch_64);
criterion_main!(benches);
