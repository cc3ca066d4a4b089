//! SDG Lens Domain Layer
//!
//! This crate contains the core vocabulary of SDG Lens: the catalog of the
//! 17 UN Sustainable Development Goals, the text normalizer, keyword
//! matching, explanation synthesis and the result types every scoring tier
//! produces. It has no external dependencies so that the inference crates
//! and the front ends can all build on it.
//!
//! ## Key Concepts
//!
//! - **Sdg**: a goal with its canonical name, label descriptor and keywords
//! - **KeywordIndex**: static lookup from goal to keyword set, plus matching
//! - **ScoredCandidate**: one ranked goal with confidence and explanation
//! - **PredictionResult**: the ordered top-K list (or the "no match" sentinel)
//! - **ScoringStrategy**: the contract shared by the remote, local and
//!   rule-based tiers
//!
//! ## Example
//!
//! ```
//! use sdglens_domain::{normalize, KeywordIndex, SdgId};
//!
//! let text = normalize("Clean WATER & sanitation!");
//! assert_eq!(text, "clean water sanitation");
//!
//! let index = KeywordIndex::standard();
//! let matched = index.match_keywords(&text, SdgId::new(6).unwrap());
//! assert_eq!(matched, vec!["water", "sanitation", "clean"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod explanation;
pub mod keywords;
pub mod normalize;
pub mod prediction;
pub mod sdg;
pub mod traits;

// Re-exports for convenience
pub use document::DocumentText;
pub use explanation::{explain, AlignmentBand};
pub use keywords::{KeywordIndex, MAX_MATCHED_KEYWORDS};
pub use normalize::normalize;
pub use prediction::{
    PredictionResult, ScoreMap, ScoredCandidate, SourceTier, MIN_CONFIDENCE,
    NO_MATCH_EXPLANATION,
};
pub use sdg::{Sdg, SdgId, SDGS, SDG_COUNT};
pub use traits::ScoringStrategy;
