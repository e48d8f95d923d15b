//! Error types for corpus ingestion

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ingestion errors
///
/// Only [`Error::MissingIndex`], [`Error::MissingColumn`] and [`Error::Config`]
/// end a run. Everything else is absorbed per record by the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metadata index file does not exist
    #[error("metadata index not found at {}", path.display())]
    MissingIndex { path: PathBuf },

    /// Index header lacks a column every row needs
    #[error("metadata index is missing required column '{column}'")]
    MissingColumn { column: String },

    /// A single index row could not be turned into a record
    #[error("malformed index row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// Document file could not be read
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document file is not a valid parsed document
    #[error("failed to decode {}: {}", path.display(), source)]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a missing-index error
    pub fn missing_index(path: impl AsRef<Path>) -> Self {
        Self::MissingIndex {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a malformed-row error
    pub fn malformed_row(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: message.into(),
        }
    }

    /// Create a read error for a document path
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a decode error for a document path
    pub fn decode(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error must stop the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::MissingIndex { .. } | Error::MissingColumn { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(Error::missing_index("/nope/metadata.csv").is_fatal());
        assert!(Error::config("bad").is_fatal());
        assert!(Error::MissingColumn { column: "sha".into() }.is_fatal());
        assert!(!Error::malformed_row(3, "missing field `sha`").is_fatal());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::read("a.json", io).is_fatal());
    }

    #[test]
    fn test_missing_index_message_names_path() {
        let err = Error::missing_index("/data/metadata.csv");
        assert_eq!(
            err.to_string(),
            "metadata index not found at /data/metadata.csv"
        );
    }
}
