//! Explanation synthesis - confidence bands and justification strings

use crate::sdg::SdgId;
use std::fmt;

/// Lower confidence bound of the "Strong alignment" band
pub const STRONG_THRESHOLD: f64 = 0.70;

/// Lower confidence bound of the "Moderate alignment" band
pub const MODERATE_THRESHOLD: f64 = 0.40;

/// Number of keywords quoted in an explanation
const QUOTED_KEYWORDS: usize = 3;

/// Qualitative confidence band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentBand {
    /// confidence >= 0.70
    Strong,
    /// 0.40 <= confidence < 0.70
    Moderate,
    /// confidence < 0.40
    Weak,
}

impl AlignmentBand {
    /// Band for a confidence value
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= STRONG_THRESHOLD {
            AlignmentBand::Strong
        } else if confidence >= MODERATE_THRESHOLD {
            AlignmentBand::Moderate
        } else {
            AlignmentBand::Weak
        }
    }

    /// Human-readable band label
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentBand::Strong => "Strong alignment",
            AlignmentBand::Moderate => "Moderate alignment",
            AlignmentBand::Weak => "Weak alignment",
        }
    }
}

impl fmt::Display for AlignmentBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compose the explanation for a ranked goal
///
/// # Examples
///
/// ```
/// use sdglens_domain::{explain, SdgId};
///
/// let id = SdgId::new(6).unwrap();
/// assert_eq!(
///     explain(id, 0.45, &["water", "sanitation"]),
///     "Moderate alignment with SDG 6. Key indicators: water, sanitation"
/// );
/// assert_eq!(
///     explain(id, 0.9, &[]),
///     "Strong alignment with SDG 6. Key indicators: general terms"
/// );
/// ```
pub fn explain(id: SdgId, confidence: f64, matched_keywords: &[&str]) -> String {
    let band = AlignmentBand::from_confidence(confidence);
    let indicators = if matched_keywords.is_empty() {
        "general terms".to_string()
    } else {
        matched_keywords
            .iter()
            .take(QUOTED_KEYWORDS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!("{} with SDG {}. Key indicators: {}", band, id, indicators)
}
