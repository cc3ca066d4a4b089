//! Trait definitions for scoring tiers
//!
//! These traits define the boundary between the fallback pipeline and the
//! concrete predictors. Implementations live in other crates.

use crate::prediction::{ScoreMap, SourceTier};
use std::future::Future;

/// A predictor that scores normalized text against the 17 goals
///
/// Implemented by the remote zero-shot client (sdglens-zeroshot), the local
/// model (sdglens-model) and the keyword scorer (sdglens-classifier).
///
/// Failures never escape `score_all`: a tier that cannot produce scores
/// returns an empty map and the pipeline moves on to the next tier.
pub trait ScoringStrategy {
    /// Tier this strategy stands for
    fn tier(&self) -> SourceTier;

    /// Whether the strategy can be invoked at all
    ///
    /// Must be cheap: no network or model call.
    fn is_available(&self) -> bool;

    /// Score `normalized_text`; absent goals were not scored
    fn score_all(&self, normalized_text: &str) -> impl Future<Output = ScoreMap> + Send;
}
