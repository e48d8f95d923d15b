//! Reads and decodes parsed documents

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::ParsedDocument;

/// Loads parsed documents from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    /// Create a loader
    pub fn new() -> Self {
        Self
    }

    /// Read and decode a document, reporting what went wrong
    pub fn try_load(&self, path: &Path) -> Result<ParsedDocument> {
        let data = std::fs::read(path).map_err(|e| Error::read(path, e))?;
        serde_json::from_slice(&data).map_err(|e| Error::decode(path, e))
    }

    /// Read and decode a document.
    ///
    /// Failures are logged and come back as `None`, the same as a record with
    /// no document at all.
    pub fn load(&self, path: &Path) -> Option<ParsedDocument> {
        match self.try_load(path) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!("Error loading {}: {}", path.display(), e);
                None
            }
        }
    }
}
