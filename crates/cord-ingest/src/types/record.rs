//! Metadata index records

use serde::{Deserialize, Serialize};

/// Literal the index uses for a set boolean column
pub const TRUE_LITERAL: &str = "True";

/// Interpret an index boolean column.
///
/// Only the exact literal `"True"` counts; `"true"`, `"1"` and empty cells are false.
pub fn parse_flag(value: &str) -> bool {
    value == TRUE_LITERAL
}

/// One row of the corpus metadata index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Unique row identifier
    pub cord_uid: String,
    /// Paper title
    pub title: String,
    /// Paper abstract
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Whether a PDF-derived parse is advertised
    pub has_pdf_parse: bool,
    /// Whether a PMC XML-derived parse is advertised
    pub has_pmc_xml_parse: bool,
    /// Content hash naming the PDF parse (may be empty)
    pub sha: String,
    /// PubMed Central id naming the XML parse (may be empty)
    pub pmcid: String,
}

impl MetadataRecord {
    /// Create a record with only an id and title set
    pub fn new(cord_uid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            cord_uid: cord_uid.into(),
            title: title.into(),
            abstract_text: String::new(),
            has_pdf_parse: false,
            has_pmc_xml_parse: false,
            sha: String::new(),
            pmcid: String::new(),
        }
    }

    /// Advertise a PDF parse named by `sha`
    pub fn with_pdf_parse(mut self, sha: impl Into<String>) -> Self {
        self.has_pdf_parse = true;
        self.sha = sha.into();
        self
    }

    /// Advertise a PMC parse named by `pmcid`
    pub fn with_pmc_parse(mut self, pmcid: impl Into<String>) -> Self {
        self.has_pmc_xml_parse = true;
        self.pmcid = pmcid.into();
        self
    }

    /// PDF parse identifier, if the row advertises a usable one
    pub fn pdf_key(&self) -> Option<&str> {
        (self.has_pdf_parse && !self.sha.is_empty()).then_some(self.sha.as_str())
    }

    /// PMC parse identifier, if the row advertises a usable one
    pub fn pmc_key(&self) -> Option<&str> {
        (self.has_pmc_xml_parse && !self.pmcid.is_empty()).then_some(self.pmcid.as_str())
    }

    /// Title truncated to `max_chars` characters
    pub fn short_title(&self, max_chars: usize) -> &str {
        match self.title.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.title[..idx],
            None => &self.title,
        }
    }
}
