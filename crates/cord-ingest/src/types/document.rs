//! Parsed document model

use serde::{Deserialize, Serialize};

/// Decoded structured-text document
///
/// Only `body_text` is read; every other key is ignored whatever its shape. A
/// document without `body_text` decodes with an empty body rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Body sections in reading order
    #[serde(default)]
    pub body_text: Vec<Section>,
}

/// One body section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// Raw section text, may contain line breaks
    #[serde(default)]
    pub text: String,
}

impl Section {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ParsedDocument {
    /// Build a document from section texts
    pub fn from_sections<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            body_text: sections.into_iter().map(Section::new).collect(),
        }
    }

    /// Whether the document has no body sections
    pub fn is_empty(&self) -> bool {
        self.body_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{
            "paper_id": "abc",
            "metadata": {"title": "A study", "authors": []},
            "abstract": [{"text": "ignored"}],
            "body_text": [
                {"text": "First", "cite_spans": [], "section": "Introduction"},
                {"text": "Second"}
            ],
            "bib_entries": {}
        }"#;

        let doc: ParsedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc, ParsedDocument::from_sections(["First", "Second"]));
    }

    #[test]
    fn test_decode_ignores_unexpected_value_types() {
        let json = r#"{
            "paper_id": 12345,
            "metadata": {"title": ["a", "b"]},
            "body_text": [{"text": "L1", "section": {"name": "Intro"}}]
        }"#;

        let doc: ParsedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc, ParsedDocument::from_sections(["L1"]));
    }

    #[test]
    fn test_decode_without_body_text() {
        let doc: ParsedDocument = serde_json::from_str(r#"{"paper_id": "x"}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_section_without_text_is_empty() {
        let doc: ParsedDocument =
            serde_json::from_str(r#"{"body_text": [{"section": "Methods"}]}"#).unwrap();
        assert_eq!(doc.body_text[0].text, "");
    }
}
