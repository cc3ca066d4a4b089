//! Prediction result types shared by every scoring tier

use crate::sdg::SdgId;
use std::collections::BTreeMap;
use std::fmt;

/// Minimum confidence a ranked goal must reach to be reported
pub const MIN_CONFIDENCE: f64 = 0.05;

/// Explanation carried by the "no match" sentinel
pub const NO_MATCH_EXPLANATION: &str = "No SDGs detected with sufficient confidence";

/// Raw scores produced by a strategy
///
/// A goal missing from the map could not be scored by that strategy, which
/// is different from a score of 0.0.
pub type ScoreMap = BTreeMap<SdgId, f64>;

/// Which tier produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTier {
    /// Remote zero-shot classification service
    Remote,

    /// Locally loaded supervised model
    Local,

    /// Deterministic keyword scoring
    RuleBased,

    /// No tier produced a qualifying candidate (sentinel only)
    NoMatch,
}

impl SourceTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTier::Remote => "remote",
            SourceTier::Local => "local",
            SourceTier::RuleBased => "rule_based",
            SourceTier::NoMatch => "none",
        }
    }

    /// Parse a tier from its string form
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "remote" => Some(SourceTier::Remote),
            "local" => Some(SourceTier::Local),
            "rule_based" => Some(SourceTier::RuleBased),
            "none" => Some(SourceTier::NoMatch),
            _ => None,
        }
    }
}

impl fmt::Display for SourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked goal
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Goal identifier (`SdgId::NO_MATCH` for the sentinel)
    pub sdg_id: SdgId,

    /// Confidence in [0.0, 1.0]
    pub confidence: f64,

    /// Keywords found in the text, declared order, at most five
    pub matched_keywords: Vec<String>,

    /// Human-readable justification
    pub explanation: String,

    /// Tier that produced the score
    pub source_tier: SourceTier,
}

impl ScoredCandidate {
    /// The "no match" sentinel candidate
    pub fn no_match() -> Self {
        Self {
            sdg_id: SdgId::NO_MATCH,
            confidence: 0.0,
            matched_keywords: Vec::new(),
            explanation: NO_MATCH_EXPLANATION.to_string(),
            source_tier: SourceTier::NoMatch,
        }
    }

    /// Canonical goal name, or "No Clear Match" for the sentinel
    pub fn sdg_name(&self) -> &'static str {
        self.sdg_id.sdg().map(|s| s.name).unwrap_or("No Clear Match")
    }

    /// Whether this is the sentinel candidate
    pub fn is_no_match(&self) -> bool {
        self.sdg_id.is_no_match()
    }
}

/// Ranked classification output for one document
///
/// Either a non-empty list of candidates in non-increasing confidence
/// order, each at or above [`MIN_CONFIDENCE`], or the single sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    candidates: Vec<ScoredCandidate>,
}

impl PredictionResult {
    /// Build a result from ranked candidates, falling back to the sentinel when empty
    ///
    /// Callers are expected to pass candidates already sorted and filtered.
    pub fn from_ranked(candidates: Vec<ScoredCandidate>) -> Self {
        if candidates.is_empty() {
            Self::no_match()
        } else {
            Self { candidates }
        }
    }

    /// The sentinel-only result
    pub fn no_match() -> Self {
        Self {
            candidates: vec![ScoredCandidate::no_match()],
        }
    }

    /// Candidates in rank order
    pub fn candidates(&self) -> &[ScoredCandidate] {
        &self.candidates
    }

    /// Consume the result and return its candidates
    pub fn into_candidates(self) -> Vec<ScoredCandidate> {
        self.candidates
    }

    /// Highest ranked candidate
    pub fn top(&self) -> &ScoredCandidate {
        // Never empty by construction
        &self.candidates[0]
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether this is the sentinel-only result
    pub fn is_no_match(&self) -> bool {
        self.candidates.len() == 1 && self.candidates[0].is_no_match()
    }

    /// Tier that produced the result
    pub fn source_tier(&self) -> SourceTier {
        self.top().source_tier
    }

    /// Iterate over candidates in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate> {
        self.candidates.iter()
    }
}

impl<'a> IntoIterator for &'a PredictionResult {
    type Item = &'a ScoredCandidate;
    type IntoIter = std::slice::Iter<'a, ScoredCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
