//! Fallback orchestration across scoring tiers

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::ranking::rank_scores;
use crate::rule_based::RuleBasedStrategy;
use sdglens_domain::{
    normalize, DocumentText, KeywordIndex, PredictionResult, ScoreMap, ScoredCandidate,
    ScoringStrategy, SourceTier,
};
use tracing::{debug, info};

/// Placeholder for a tier that is switched off
#[derive(Debug, Clone, Copy)]
pub struct Disabled(pub SourceTier);

impl ScoringStrategy for Disabled {
    fn tier(&self) -> SourceTier {
        self.0
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn score_all(&self, _normalized_text: &str) -> ScoreMap {
        ScoreMap::new()
    }
}

/// Runs the tiers in order: remote, local, keyword rules
///
/// A tier is attempted only when available. The first tier whose scores
/// survive post-processing wins; later tiers are not called. Tiers are
/// never raced.
pub struct FallbackOrchestrator<R, L> {
    remote: R,
    local: L,
    rules: RuleBasedStrategy,
    index: KeywordIndex,
    config: ClassifierConfig,
}

impl FallbackOrchestrator<Disabled, Disabled> {
    /// Orchestrator with only the keyword tier enabled
    pub fn rule_based_only(config: ClassifierConfig) -> Self {
        Self::new(
            Disabled(SourceTier::Remote),
            Disabled(SourceTier::Local),
            config,
        )
    }
}

impl<R, L> FallbackOrchestrator<R, L>
where
    R: ScoringStrategy + Sync,
    L: ScoringStrategy + Sync,
{
    /// Create an orchestrator over the given remote and local tiers
    pub fn new(remote: R, local: L, config: ClassifierConfig) -> Self {
        Self {
            remote,
            local,
            rules: RuleBasedStrategy::new(&config),
            index: KeywordIndex::standard(),
            config,
        }
    }

    /// Like [`FallbackOrchestrator::new`], rejecting an invalid configuration
    pub fn try_new(remote: R, local: L, config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate().map_err(ClassifierError::Config)?;
        Ok(Self::new(remote, local, config))
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Whether the remote tier can be attempted
    pub fn remote_available(&self) -> bool {
        self.remote.is_available()
    }

    /// Whether the local tier can be attempted
    pub fn local_available(&self) -> bool {
        self.local.is_available()
    }

    /// Classify raw text with the configured `top_k`
    pub async fn classify(&self, text: &str) -> PredictionResult {
        self.classify_with_top_k(text, self.config.top_k).await
    }

    /// Classify raw text, keeping at most `top_k` goals (clamped into `1..=17`)
    pub async fn classify_with_top_k(&self, text: &str, top_k: usize) -> PredictionResult {
        let top_k = ClassifierConfig::clamp_top_k(top_k);
        let normalized = normalize(text);

        if normalized.is_empty() {
            debug!("Nothing left after normalization");
            return PredictionResult::no_match();
        }

        if let Some(ranked) = self.attempt(&self.remote, &normalized, top_k).await {
            return PredictionResult::from_ranked(ranked);
        }
        if let Some(ranked) = self.attempt(&self.local, &normalized, top_k).await {
            return PredictionResult::from_ranked(ranked);
        }
        if let Some(ranked) = self.attempt(&self.rules, &normalized, top_k).await {
            return PredictionResult::from_ranked(ranked);
        }

        info!("No tier produced a goal above the confidence floor");
        PredictionResult::no_match()
    }

    /// Classify a document's concatenated fields
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::EmptyDocument` when every field is blank.
    pub async fn classify_document(
        &self,
        document: &DocumentText,
        top_k: Option<usize>,
    ) -> Result<PredictionResult, ClassifierError> {
        if document.is_blank() {
            return Err(ClassifierError::EmptyDocument);
        }
        let top_k = top_k.unwrap_or(self.config.top_k);
        Ok(self
            .classify_with_top_k(&document.analysis_text(), top_k)
            .await)
    }

    async fn attempt<S: ScoringStrategy + Sync>(
        &self,
        strategy: &S,
        normalized: &str,
        top_k: usize,
    ) -> Option<Vec<ScoredCandidate>> {
        let tier = strategy.tier();
        if !strategy.is_available() {
            debug!("Tier {} unavailable, skipping", tier);
            return None;
        }

        let scores = strategy.score_all(normalized).await;
        let ranked = rank_scores(
            &scores,
            normalized,
            tier,
            top_k,
            self.config.min_confidence,
            &self.index,
        );

        if ranked.is_empty() {
            info!("Tier {} produced no usable scores, falling through", tier);
            None
        } else {
            info!("Tier {} classified text: {} goals", tier, ranked.len());
            Some(ranked)
        }
    }
}
