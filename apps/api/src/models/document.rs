use serde::{Deserialize, Serialize};

/// Extracted text of a single job description or resume.
///
/// Supplied by the document-parsing collaborator; the scoring core never
/// inspects the original file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub identifier: String,
    #[serde(default)]
    pub raw_text: String,
}

impl Document {
    pub fn new(identifier: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            raw_text: raw_text.into(),
        }
    }

    /// True when the document carries no text beyond whitespace.
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_raw_text_deserializes_as_empty() {
        let doc: Document = serde_json::from_str(r#"{"identifier": "cv.txt"}"#).unwrap();
        assert_eq!(doc.identifier, "cv.txt");
        assert!(doc.raw_text.is_empty());
        assert!(doc.is_blank());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert!(Document::new("jd", " \n\t ").is_blank());
        assert!(!Document::new("jd", "rust").is_blank());
    }
}
