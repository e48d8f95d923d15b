//! Maps metadata records to parsed documents on disk
//!
//! The index never says which sub-corpus holds a document, so every candidate
//! location is probed in a fixed order. PDF parses are tried to exhaustion
//! before PMC parses; the first existing candidate wins.

use std::path::{Path, PathBuf};

use crate::types::{MetadataRecord, ParseSource};

/// Sub-corpora of the document tree, in probe order
pub const SUB_CORPORA: [&str; 4] = [
    "biorxiv_medrxiv",
    "comm_use_subset",
    "noncomm_use_subset",
    "custom_license",
];

/// Finds the parsed document for a record under a corpus root
#[derive(Debug, Clone)]
pub struct DocumentResolver {
    corpus_root: PathBuf,
}

impl DocumentResolver {
    /// Create a resolver for a corpus root
    pub fn new(corpus_root: impl Into<PathBuf>) -> Self {
        Self {
            corpus_root: corpus_root.into(),
        }
    }

    /// Root of the document tree
    pub fn corpus_root(&self) -> &Path {
        &self.corpus_root
    }

    /// Whether the document tree is present at all
    pub fn corpus_exists(&self) -> bool {
        self.corpus_root.exists()
    }

    /// Location of the `source` parse for `id` inside `sub_corpus`
    pub fn candidate_path(&self, sub_corpus: &str, source: ParseSource, id: &str) -> PathBuf {
        self.corpus_root
            .join(sub_corpus)
            .join(source.directory())
            .join(source.file_name(id))
    }

    /// Every location the record's document may live at, in probe order.
    ///
    /// Paths are built lazily as the iterator advances.
    pub fn candidates<'a>(
        &'a self,
        record: &'a MetadataRecord,
    ) -> impl Iterator<Item = (ParseSource, PathBuf)> + 'a {
        let pdf = self.scheme_candidates(ParseSource::Pdf, record.pdf_key());
        let pmc = self.scheme_candidates(ParseSource::Pmc, record.pmc_key());
        pdf.chain(pmc)
    }

    fn scheme_candidates<'a>(
        &'a self,
        source: ParseSource,
        id: Option<&'a str>,
    ) -> impl Iterator<Item = (ParseSource, PathBuf)> + 'a {
        id.into_iter().flat_map(move |id| {
            SUB_CORPORA
                .into_iter()
                .map(move |sub| (source, self.candidate_path(sub, source, id)))
        })
    }

    /// Resolve a record to its document path and the scheme that matched
    pub fn resolve_with_source(&self, record: &MetadataRecord) -> Option<(ParseSource, PathBuf)> {
        if !self.corpus_exists() {
            tracing::trace!(
                "corpus root {} missing, {} unresolved",
                self.corpus_root.display(),
                record.cord_uid
            );
            return None;
        }

        let hit = self.candidates(record).find(|(_, path)| path.exists());
        match &hit {
            Some((source, path)) => {
                tracing::debug!("{} -> {} ({})", record.cord_uid, path.display(), source)
            }
            None => tracing::debug!("{}: no parsed document", record.cord_uid),
        }
        hit
    }

    /// Resolve a record to its document path
    pub fn resolve(&self, record: &MetadataRecord) -> Option<PathBuf> {
        self.resolve_with_source(record).map(|(_, path)| path)
    }
}
