//! SDG Lens Classifier
//!
//! The multi-tier classification pipeline.
//!
//! # Overview
//!
//! [`FallbackOrchestrator`] tries the scoring tiers in a fixed order and
//! stops at the first one that produces a usable score:
//!
//! ```text
//! text → normalize → remote zero-shot → local model → keyword rules → ranked result
//!                         (skip if unavailable or empty after filtering)
//! ```
//!
//! The same post-processing runs whichever tier wins: scores under the
//! confidence floor are dropped, the rest are sorted (ties by goal number),
//! cut to top-K and enriched with matched keywords and an explanation. When
//! every tier comes up empty the result is the single "no match" sentinel.
//!
//! The keyword tier ([`RuleBasedStrategy`]) lives here; the remote and local
//! tiers come from `sdglens-zeroshot` and `sdglens-model` and are plugged in
//! through the `ScoringStrategy` trait.
//!
//! # Example Usage
//!
//! ```
//! use sdglens_classifier::{ClassifierConfig, FallbackOrchestrator};
//!
//! # async fn example() {
//! // Remote and local tiers disabled: keyword scoring only
//! let orchestrator = FallbackOrchestrator::rule_based_only(ClassifierConfig::default());
//!
//! let result = orchestrator.classify("Clean water and sanitation for all communities").await;
//! let top = result.top();
//! assert_eq!(top.sdg_id.number(), 6);
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod orchestrator;
mod ranking;
mod rule_based;

pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use orchestrator::{Disabled, FallbackOrchestrator};
pub use ranking::rank_scores;
pub use rule_based::RuleBasedStrategy;
