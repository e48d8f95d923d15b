//! Resolved paper types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{MetadataRecord, ParsedDocument};

/// Leading lines of a document body, in reading order
pub type Excerpt = Vec<String>;

/// Naming scheme a document was found under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ParseSource {
    /// PDF-derived parse, named by content hash
    Pdf,
    /// PMC XML-derived parse, named by PMC id
    Pmc,
}

impl ParseSource {
    /// Directory holding this kind of parse inside a sub-corpus
    pub fn directory(&self) -> &'static str {
        match self {
            ParseSource::Pdf => "pdf_json",
            ParseSource::Pmc => "pmc_json",
        }
    }

    /// File name of the parse for `id`
    pub fn file_name(&self, id: &str) -> String {
        match self {
            ParseSource::Pdf => format!("{}.json", id),
            ParseSource::Pmc => format!("{}.xml.json", id),
        }
    }
}

impl std::fmt::Display for ParseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ParseSource::Pdf => "pdf",
            ParseSource::Pmc => "pmc",
        })
    }
}

/// A metadata record paired with its decoded document
#[derive(Debug, Clone)]
pub struct ResolvedPaper {
    /// Index row
    pub record: MetadataRecord,
    /// Decoded document
    pub document: ParsedDocument,
    /// File the document was loaded from
    pub path: PathBuf,
    /// Naming scheme that matched
    pub source: ParseSource,
}

impl ResolvedPaper {
    pub fn cord_uid(&self) -> &str {
        &self.record.cord_uid
    }
}
