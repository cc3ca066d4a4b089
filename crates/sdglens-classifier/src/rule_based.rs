//! Keyword scoring tier

use crate::config::ClassifierConfig;
use sdglens_domain::{KeywordIndex, ScoreMap, ScoringStrategy, SdgId, SourceTier};

/// Last tier: deterministic keyword counting
///
/// Score for a goal is `min(cap, weight * matches)`, with matches counted by
/// [`KeywordIndex::match_keywords`]. Goals with no match are left out.
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedStrategy {
    index: KeywordIndex,
    weight: f64,
    cap: f64,
}

impl RuleBasedStrategy {
    /// Strategy with the weight and cap from `config`
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            index: KeywordIndex::standard(),
            weight: config.keyword_weight,
            cap: config.keyword_score_cap,
        }
    }

    /// Score every goal synchronously
    pub fn score(&self, normalized_text: &str) -> ScoreMap {
        SdgId::all()
            .filter_map(|id| {
                let matches = self.index.match_count(normalized_text, id);
                (matches > 0).then(|| (id, (self.weight * matches as f64).min(self.cap)))
            })
            .collect()
    }
}

impl Default for RuleBasedStrategy {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl ScoringStrategy for RuleBasedStrategy {
    fn tier(&self) -> SourceTier {
        SourceTier::RuleBased
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn score_all(&self, normalized_text: &str) -> ScoreMap {
        self.score(normalized_text)
    }
}
