//! Integration tests for the fallback pipeline

use proptest::prelude::*;
use sdglens_classifier::{ClassifierConfig, Disabled, FallbackOrchestrator};
use sdglens_domain::{
    ScoreMap, ScoringStrategy, SdgId, SourceTier, MIN_CONFIDENCE, NO_MATCH_EXPLANATION,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Stub tier that records how often it is invoked
struct Counting {
    tier: SourceTier,
    available: bool,
    scores: ScoreMap,
    calls: Arc<AtomicUsize>,
}

impl Counting {
    fn new(tier: SourceTier, available: bool, pairs: &[(u8, f64)]) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let stub = Self {
            tier,
            available,
            scores: pairs
                .iter()
                .map(|&(n, p)| (SdgId::new(n).unwrap(), p))
                .collect(),
            calls: calls.clone(),
        };
        (stub, calls)
    }
}

impl ScoringStrategy for Counting {
    fn tier(&self) -> SourceTier {
        self.tier
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn score_all(&self, _normalized_text: &str) -> ScoreMap {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scores.clone()
    }
}

#[tokio::test]
async fn test_clean_water_rule_tier_only() {
    let orchestrator = FallbackOrchestrator::rule_based_only(ClassifierConfig::default());
    let result = orchestrator
        .classify("Clean water and sanitation for all communities")
        .await;

    let top = result.top();
    assert_eq!(top.sdg_id.number(), 6);
    assert_eq!(top.matched_keywords, vec!["water", "sanitation", "clean"]);
    assert!((top.confidence - 0.45).abs() < 1e-9);
    assert_eq!(top.source_tier, SourceTier::RuleBased);
    assert_eq!(
        top.explanation,
        "Moderate alignment with SDG 6. Key indicators: water, sanitation, clean"
    );

    // SDG 14 shares "water"
    assert_eq!(result.len(), 2);
    assert_eq!(result.candidates()[1].sdg_id.number(), 14);
}

#[tokio::test]
async fn test_poverty_and_income() {
    let orchestrator = FallbackOrchestrator::rule_based_only(ClassifierConfig::default());
    let result = orchestrator.classify("Poverty and low INCOME households").await;

    let top = result.top();
    assert_eq!(top.sdg_id.number(), 1);
    assert!((top.confidence - 0.30).abs() < 1e-12);
    assert_eq!(top.matched_keywords, vec!["poverty", "income"]);
}

#[tokio::test]
async fn test_no_match_sentinel() {
    let orchestrator = FallbackOrchestrator::rule_based_only(ClassifierConfig::default());
    let result = orchestrator.classify("Lorem ipsum dolor sit amet").await;

    assert!(result.is_no_match());
    let sentinel = result.top();
    assert_eq!(sentinel.sdg_id, SdgId::NO_MATCH);
    assert_eq!(sentinel.confidence, 0.0);
    assert!(sentinel.matched_keywords.is_empty());
    assert_eq!(sentinel.explanation, NO_MATCH_EXPLANATION);
    assert_eq!(sentinel.source_tier, SourceTier::NoMatch);
}

#[tokio::test]
async fn test_unavailable_tiers_are_never_called() {
    let (remote, remote_calls) = Counting::new(SourceTier::Remote, false, &[(1, 0.9)]);
    let (local, local_calls) = Counting::new(SourceTier::Local, false, &[(2, 0.9)]);
    let orchestrator = FallbackOrchestrator::new(remote, local, ClassifierConfig::default());

    let result = orchestrator.classify("renewable energy").await;

    assert_eq!(remote_calls.load(Ordering::SeqCst), 0);
    assert_eq!(local_calls.load(Ordering::SeqCst), 0);
    assert_eq!(result.source_tier(), SourceTier::RuleBased);
    assert_eq!(result.top().sdg_id.number(), 7);
}

#[tokio::test]
async fn test_later_tiers_not_called_after_success() {
    let (remote, remote_calls) = Counting::new(SourceTier::Remote, true, &[(13, 0.72), (7, 0.4)]);
    let (local, local_calls) = Counting::new(SourceTier::Local, true, &[(2, 0.9)]);
    let orchestrator = FallbackOrchestrator::new(remote, local, ClassifierConfig::default());

    let result = orchestrator.classify("climate and renewable energy").await;

    assert_eq!(remote_calls.load(Ordering::SeqCst), 1);
    assert_eq!(local_calls.load(Ordering::SeqCst), 0);
    assert_eq!(result.source_tier(), SourceTier::Remote);

    let ids: Vec<u8> = result.iter().map(|c| c.sdg_id.number()).collect();
    assert_eq!(ids, vec![13, 7]);
    // Keyword enrichment is applied to remote scores too
    assert_eq!(result.top().matched_keywords, vec!["climate"]);
    assert!(result.top().explanation.starts_with("Strong alignment"));
}

#[tokio::test]
async fn test_empty_remote_falls_to_local() {
    let (remote, remote_calls) = Counting::new(SourceTier::Remote, true, &[]);
    let (local, local_calls) = Counting::new(SourceTier::Local, true, &[(4, 0.6)]);
    let orchestrator = FallbackOrchestrator::new(remote, local, ClassifierConfig::default());

    let result = orchestrator.classify("school").await;

    assert_eq!(remote_calls.load(Ordering::SeqCst), 1);
    assert_eq!(local_calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.source_tier(), SourceTier::Local);
}

#[tokio::test]
async fn test_all_sub_floor_reaches_rule_tier() {
    let (remote, _) = Counting::new(SourceTier::Remote, true, &[(1, 0.04)]);
    let (local, _) = Counting::new(SourceTier::Local, true, &[(2, f64::NAN)]);
    let orchestrator = FallbackOrchestrator::new(remote, local, ClassifierConfig::default());

    let result = orchestrator.classify("ocean").await;
    assert_eq!(result.source_tier(), SourceTier::RuleBased);
    assert_eq!(result.top().sdg_id.number(), 14);
}

#[tokio::test]
async fn test_top_k_is_clamped() {
    let pairs: Vec<(u8, f64)> = (1..=17).map(|n| (n, 0.5)).collect();
    let (local, _) = Counting::new(SourceTier::Local, true, &pairs);
    let orchestrator = FallbackOrchestrator::new(
        Disabled(SourceTier::Remote),
        local,
        ClassifierConfig::default(),
    );

    assert_eq!(orchestrator.classify_with_top_k("text", 0).await.len(), 1);
    assert_eq!(orchestrator.classify_with_top_k("text", 99).await.len(), 17);
    assert_eq!(orchestrator.classify("text").await.len(), 3);
}

fn score_pairs() -> impl Strategy<Value = Vec<(u8, f64)>> {
    prop::collection::vec((1u8..=17, prop_oneof![0.0f64..=1.0, Just(f64::NAN)]), 0..17)
}

proptest! {
    #[test]
    fn prop_results_ranked_and_above_floor(pairs in score_pairs(), top_k in 0usize..25) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let (local, _) = Counting::new(SourceTier::Local, true, &pairs);
        let orchestrator = FallbackOrchestrator::new(
            Disabled(SourceTier::Remote),
            local,
            ClassifierConfig::default(),
        );

        let result = runtime.block_on(orchestrator.classify_with_top_k("quantum chromodynamics", top_k));

        if result.is_no_match() {
            prop_assert_eq!(result.len(), 1);
        } else {
            prop_assert!(result.len() <= top_k.clamp(1, 17));
            for pair in result.candidates().windows(2) {
                prop_assert!(pair[0].confidence >= pair[1].confidence);
                if pair[0].confidence == pair[1].confidence {
                    prop_assert!(pair[0].sdg_id < pair[1].sdg_id);
                }
            }
            for candidate in &result {
                prop_assert!(candidate.confidence >= MIN_CONFIDENCE);
                prop_assert!(candidate.confidence <= 1.0);
            }
        }
    }
}
