//! Post-processing shared by every tier

use sdglens_domain::{explain, KeywordIndex, ScoreMap, ScoredCandidate, SourceTier};

/// Turn raw tier scores into ranked, enriched candidates
///
/// Drops non-finite scores, the sentinel id and anything below
/// `min_confidence`; sorts by descending confidence with ties broken by
/// ascending goal number; keeps at most `top_k`; clamps confidences into
/// `[0.0, 1.0]`; attaches matched keywords and an explanation.
///
/// An empty return means the tier produced nothing usable.
pub fn rank_scores(
    scores: &ScoreMap,
    normalized_text: &str,
    tier: SourceTier,
    top_k: usize,
    min_confidence: f64,
    index: &KeywordIndex,
) -> Vec<ScoredCandidate> {
    let mut kept: Vec<_> = scores
        .iter()
        .filter(|(id, p)| !id.is_no_match() && p.is_finite() && **p >= min_confidence)
        .map(|(&id, &p)| (id, p))
        .collect();

    kept.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    kept.truncate(top_k);

    kept.into_iter()
        .map(|(sdg_id, p)| {
            let confidence = p.clamp(0.0, 1.0);
            let matched = index.match_keywords(normalized_text, sdg_id);
            ScoredCandidate {
                sdg_id,
                confidence,
                explanation: explain(sdg_id, confidence, &matched),
                matched_keywords: matched.into_iter().map(str::to_string).collect(),
                source_tier: tier,
            }
        })
        .collect()
}
