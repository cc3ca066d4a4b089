//! Extracted document text as supplied by an upstream extractor

/// Text fields of a document, already extracted from its source format
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    /// Document title
    pub title: String,

    /// Abstract
    pub abstract_text: String,

    /// Author keywords
    pub keywords: Vec<String>,

    /// Full body text
    pub full_text: String,
}

impl DocumentText {
    /// Document consisting only of body text
    pub fn from_text(full_text: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
            ..Self::default()
        }
    }

    /// Concatenation classified by the pipeline: title, abstract, keywords, body
    pub fn analysis_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.abstract_text,
            self.keywords.join(" "),
            self.full_text
        )
    }

    /// Whether every field is blank
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.abstract_text.trim().is_empty()
            && self.keywords.iter().all(|k| k.trim().is_empty())
            && self.full_text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_text_order() {
        let doc = DocumentText {
            title: "Water".to_string(),
            abstract_text: "Sanitation study".to_string(),
            keywords: vec!["hygiene".to_string(), "rural".to_string()],
            full_text: "Body".to_string(),
        };
        assert_eq!(doc.analysis_text(), "Water Sanitation study hygiene rural Body");
    }

    #[test]
    fn test_blank_document() {
        assert!(DocumentText::default().is_blank());
        assert!(!DocumentText::from_text("poverty").is_blank());
    }
}
