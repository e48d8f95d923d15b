//! Streaming reader for the metadata index

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{parse_flag, MetadataRecord};

/// Columns every index must carry
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "cord_uid",
    "title",
    "abstract",
    "has_pdf_parse",
    "has_pmc_xml_parse",
    "sha",
    "pmcid",
];

/// Raw CSV row before flag interpretation
#[derive(Debug, Deserialize)]
struct IndexRow {
    cord_uid: String,
    title: String,
    #[serde(rename = "abstract")]
    abstract_text: String,
    has_pdf_parse: String,
    has_pmc_xml_parse: String,
    sha: String,
    pmcid: String,
}

impl From<IndexRow> for MetadataRecord {
    fn from(row: IndexRow) -> Self {
        Self {
            cord_uid: row.cord_uid,
            title: row.title,
            abstract_text: row.abstract_text,
            has_pdf_parse: parse_flag(&row.has_pdf_parse),
            has_pmc_xml_parse: parse_flag(&row.has_pmc_xml_parse),
            sha: row.sha,
            pmcid: row.pmcid,
        }
    }
}

/// Reads metadata rows one at a time in file order
pub struct IndexReader<R: Read> {
    reader: csv::Reader<R>,
}

impl IndexReader<File> {
    /// Open an index file.
    ///
    /// Fails with [`Error::MissingIndex`] when the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::missing_index(path));
        }
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> IndexReader<R> {
    /// Wrap any reader producing CSV text, checking the header row
    pub fn from_reader(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        Ok(Self { reader })
    }

    /// Stream records; rows that cannot be read come back as [`Error::MalformedRow`]
    pub fn records(self) -> impl Iterator<Item = Result<MetadataRecord>> {
        self.reader
            .into_deserialize::<IndexRow>()
            .map(|row| match row {
                Ok(row) => Ok(MetadataRecord::from(row)),
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    Err(Error::malformed_row(line, e.to_string()))
                }
            })
    }
}
