//! Keyword index - static SDG keyword sets and substring matching

use crate::sdg::{Sdg, SdgId, SDGS};

/// Maximum number of keywords reported per goal
pub const MAX_MATCHED_KEYWORDS: usize = 5;

/// Static mapping from goal to its domain keywords
///
/// Matching is plain substring containment against text that has already
/// been through [`crate::normalize`], so it is case-insensitive by
/// construction. Keywords are reported in the catalog's declared order.
#[derive(Debug, Clone, Copy)]
pub struct KeywordIndex {
    catalog: &'static [Sdg],
}

impl KeywordIndex {
    /// Index over the standard 17-goal catalog
    pub fn standard() -> Self {
        Self { catalog: &SDGS }
    }

    /// Keyword set for a goal; empty for the sentinel
    pub fn keywords_for(&self, id: SdgId) -> &'static [&'static str] {
        id.index()
            .and_then(|i| self.catalog.get(i))
            .map(|sdg| sdg.keywords)
            .unwrap_or(&[])
    }

    /// Keywords of `id` that occur in `normalized_text`, at most five
    pub fn match_keywords(&self, normalized_text: &str, id: SdgId) -> Vec<&'static str> {
        self.keywords_for(id)
            .iter()
            .copied()
            .filter(|kw| normalized_text.contains(kw))
            .take(MAX_MATCHED_KEYWORDS)
            .collect()
    }

    /// Number of keywords of `id` found in `normalized_text`
    pub fn match_count(&self, normalized_text: &str, id: SdgId) -> usize {
        self.match_keywords(normalized_text, id).len()
    }
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::standard()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::normalize;
    use proptest::prelude::*;

    fn keyword_soup() -> impl Strategy<Value = String> {
        let words: Vec<&'static str> = SDGS
            .iter()
            .flat_map(|s| s.keywords.iter().copied())
            .chain(["the", "and", "of", "study", "x"])
            .collect();
        prop::collection::vec(prop::sample::select(words), 0..40).prop_map(|w| w.join(" "))
    }

    proptest! {
        /// Property: matches are bounded, unique, drawn from the set and present in the text
        #[test]
        fn test_match_properties(raw in keyword_soup(), n in 1u8..=17) {
            let index = KeywordIndex::standard();
            let id = SdgId::new(n).unwrap();
            let text = normalize(&raw);
            let matched = index.match_keywords(&text, id);

            prop_assert!(matched.len() <= MAX_MATCHED_KEYWORDS);
            let mut seen = std::collections::HashSet::new();
            for kw in &matched {
                prop_assert!(text.contains(kw));
                prop_assert!(index.keywords_for(id).contains(kw));
                prop_assert!(seen.insert(*kw));
            }
        }
    }
}
