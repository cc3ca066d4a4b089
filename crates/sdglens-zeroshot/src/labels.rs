//! Candidate labels and label-to-goal resolution

use sdglens_domain::{normalize, SdgId, SDGS};

/// Separator between the goal name and its descriptor in a candidate label
pub const LABEL_DELIMITER: &str = " - ";

/// The 17 candidate labels in goal order
pub fn candidate_labels() -> Vec<String> {
    SDGS.iter().map(|sdg| sdg.candidate_label()).collect()
}

/// Map a label returned by the service back to its goal
///
/// The service returns labels sorted by score, not in request order, so
/// goals are recovered from the label text: the segment before the first
/// `" - "` is compared with each canonical goal name after normalization
/// (which makes the comparison tolerant of case and punctuation).
pub fn resolve_label(label: &str) -> Option<SdgId> {
    let head = label.split(LABEL_DELIMITER).next().unwrap_or(label);
    let head = normalize(head);
    if head.is_empty() {
        return None;
    }

    SDGS.iter()
        .find(|sdg| normalize(sdg.name) == head)
        .map(|sdg| sdg.id)
}
