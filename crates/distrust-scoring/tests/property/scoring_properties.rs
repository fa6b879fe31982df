use chrono::{DateTime, Duration, TimeZone, Utc};
use distrust_core::config::{EngineConfig, FeedbackConfig};
use distrust_core::evidence::{EvidenceSet, EvidenceSource};
use distrust_core::models::{Outcome, Verdict};
use distrust_scoring::factors::authority;
use distrust_scoring::{evaluate, feedback};
use proptest::prelude::*;

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 29, 0, 0, 0).unwrap()
}

fn arb_source() -> impl Strategy<Value = EvidenceSource> {
    (
        prop::sample::select(vec!["claim a", "claim b", "claim c", "", "Claim A "]),
        0.0f64..=1.0,
        0i64..2000,
        prop::sample::select(vec!["s1", "s2", "s3", "s4", "s5"]),
    )
        .prop_map(|(content, weight, days, id)| {
            EvidenceSource::new(content, weight, reference() - Duration::days(days), id)
        })
}

proptest! {
    #[test]
    fn score_is_always_bounded(sources in prop::collection::vec(arb_source(), 0..24)) {
        let evidence = EvidenceSet::new(sources);
        let result = evaluate(&evidence, &EngineConfig::default(), None, Some(reference())).unwrap();
        prop_assert!(result.distrust_score.is_finite());
        prop_assert!((0.0..=1.0).contains(&result.distrust_score));
        prop_assert_eq!(result.verdict, Verdict::from_score(result.distrust_score));
    }

    #[test]
    fn evaluation_is_idempotent(sources in prop::collection::vec(arb_source(), 1..16)) {
        let evidence = EvidenceSet::new(sources);
        let config = EngineConfig::default();
        let a = evaluate(&evidence, &config, None, Some(reference())).unwrap();
        let b = evaluate(&evidence, &config, None, Some(reference())).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn authority_factor_is_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let f_lo = authority::factor(lo, 10.0);
        let f_hi = authority::factor(hi, 10.0);
        prop_assert!(f_lo <= f_hi);
        prop_assert!((0.0..=1.0).contains(&f_lo));
        prop_assert!((0.0..=1.0).contains(&f_hi));
    }

    #[test]
    fn feedback_is_monotone(sources in prop::collection::vec(arb_source(), 1..16)) {
        let evidence = EvidenceSet::new(sources);
        let result = evaluate(&evidence, &EngineConfig::default(), None, Some(reference())).unwrap();
        let config = FeedbackConfig::default();

        let verified = feedback::apply(&result, Outcome::Verified, &config);
        prop_assert!(
            verified.distrust_score < result.distrust_score || result.distrust_score == 0.0
        );

        let falsified = feedback::apply(&result, Outcome::Falsified, &config);
        prop_assert!(
            falsified.distrust_score > result.distrust_score || result.distrust_score == 1.0
        );
    }
}
