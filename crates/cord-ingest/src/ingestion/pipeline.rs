//! Ingestion pipeline orchestration

use serde::Serialize;
use std::path::Path;

use crate::config::IngestConfig;
use crate::error::Result;
use crate::types::{MetadataRecord, ResolvedPaper};

use super::index::IndexReader;
use super::loader::DocumentLoader;
use super::resolver::DocumentResolver;

/// Counters for one pipeline run
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RunReport {
    /// Rows taken from the index (excludes rows left unread by the cap)
    pub rows_scanned: usize,
    /// Papers resolved and decoded
    pub found: usize,
    /// Rows with no document on disk
    pub unresolved: usize,
    /// Rows whose document could not be read or decoded
    pub load_failures: usize,
    /// Rows that could not be read from the index
    pub malformed_rows: usize,
    /// Whether the cap stopped the scan before the index was exhausted
    pub capped: bool,
}

/// Outcome of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct IngestRun {
    /// Papers in index order
    pub papers: Vec<ResolvedPaper>,
    pub report: RunReport,
}

/// Streams index rows through the resolver and loader
pub struct IngestPipeline {
    resolver: DocumentResolver,
    loader: DocumentLoader,
    max_papers: Option<usize>,
}

impl IngestPipeline {
    /// Create a new pipeline; `max_papers` caps resolved papers, not rows
    pub fn new(resolver: DocumentResolver, loader: DocumentLoader, max_papers: Option<usize>) -> Self {
        Self {
            resolver,
            loader,
            max_papers,
        }
    }

    /// Create a pipeline from configuration
    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(
            DocumentResolver::new(config.corpus_root()),
            DocumentLoader::new(),
            config.ingestion.max_papers,
        )
    }

    pub fn resolver(&self) -> &DocumentResolver {
        &self.resolver
    }

    pub fn max_papers(&self) -> Option<usize> {
        self.max_papers
    }

    /// Run over an index file.
    ///
    /// A missing index is the only condition that fails the run.
    pub fn run(&self, index_path: impl AsRef<Path>) -> Result<IngestRun> {
        let reader = IndexReader::open(index_path)?;
        Ok(self.run_records(reader.records()))
    }

    /// Run over an already-open stream of records
    pub fn run_records<I>(&self, records: I) -> IngestRun
    where
        I: IntoIterator<Item = Result<MetadataRecord>>,
    {
        let mut run = IngestRun::default();

        for record in records {
            if self.cap_reached(run.papers.len()) {
                run.report.capped = true;
                break;
            }
            run.report.rows_scanned += 1;

            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping row: {}", e);
                    run.report.malformed_rows += 1;
                    continue;
                }
            };

            let Some((source, path)) = self.resolver.resolve_with_source(&record) else {
                run.report.unresolved += 1;
                continue;
            };

            let Some(document) = self.loader.load(&path) else {
                run.report.load_failures += 1;
                continue;
            };

            run.report.found += 1;
            run.papers.push(ResolvedPaper {
                record,
                document,
                path,
                source,
            });
        }

        tracing::info!(
            "Found {} papers with JSON data ({} rows scanned)",
            run.papers.len(),
            run.report.rows_scanned
        );
        run
    }

    fn cap_reached(&self, found: usize) -> bool {
        self.max_papers.is_some_and(|max| found >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::ParseSource;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_pdf(root: &Path, sha: &str, body: &str) -> PathBuf {
        let dir = root.join("comm_use_subset").join("pdf_json");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{}.json", sha));
        fs::write(&path, body).unwrap();
        path
    }

    fn pipeline(root: &Path, max: Option<usize>) -> IngestPipeline {
        IngestPipeline::new(DocumentResolver::new(root), DocumentLoader::new(), max)
    }

    fn pdf_record(uid: &str, sha: &str) -> Result<MetadataRecord> {
        Ok(MetadataRecord::new(uid, format!("Paper {}", uid)).with_pdf_parse(sha))
    }

    #[test]
    fn test_cap_bounds_results_not_rows() {
        let tmp = TempDir::new().unwrap();
        for sha in ["a", "b", "c"] {
            write_pdf(tmp.path(), sha, r#"{"body_text": [{"text": "x"}]}"#);
        }
        let records = vec![
            pdf_record("u0", "missing"),
            pdf_record("u1", "a"),
            pdf_record("u2", "missing"),
            pdf_record("u3", "b"),
            pdf_record("u4", "c"),
        ];

        let run = pipeline(tmp.path(), Some(2)).run_records(records);
        let uids: Vec<_> = run.papers.iter().map(|p| p.cord_uid()).collect();

        assert_eq!(uids, vec!["u1", "u3"]);
        assert_eq!(run.report.rows_scanned, 4);
        assert_eq!(run.report.unresolved, 2);
        assert!(run.report.capped);
    }

    #[test]
    fn test_unbounded_scans_everything() {
        let tmp = TempDir::new().unwrap();
        write_pdf(tmp.path(), "a", r#"{"body_text": []}"#);
        let records = vec![pdf_record("u1", "a"), pdf_record("u2", "zzz")];

        let run = pipeline(tmp.path(), None).run_records(records);
        assert_eq!(run.papers.len(), 1);
        assert_eq!(run.report.rows_scanned, 2);
        assert!(!run.report.capped);
    }

    #[test]
    fn test_empty_object_document_is_kept() {
        let tmp = TempDir::new().unwrap();
        write_pdf(tmp.path(), "empty", "{}");

        let run = pipeline(tmp.path(), Some(5)).run_records(vec![pdf_record("u1", "empty")]);
        assert_eq!(run.papers.len(), 1);
        assert!(run.papers[0].document.is_empty());
        assert_eq!(run.report.load_failures, 0);
    }

    #[test]
    fn test_zero_cap_examines_no_rows() {
        let tmp = TempDir::new().unwrap();
        write_pdf(tmp.path(), "a", r#"{"body_text": []}"#);

        let run = pipeline(tmp.path(), Some(0)).run_records(vec![pdf_record("u1", "a")]);
        assert!(run.papers.is_empty());
        assert_eq!(run.report.rows_scanned, 0);
        assert!(run.report.capped);
    }

    #[test]
    fn test_load_failures_and_malformed_rows_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write_pdf(tmp.path(), "bad", "not json");
        write_pdf(tmp.path(), "good", r#"{"body_text": [{"text": "ok"}]}"#);
        let records = vec![
            pdf_record("u1", "bad"),
            Err(Error::malformed_row(3, "missing field `sha`")),
            pdf_record("u3", "good"),
        ];

        let run = pipeline(tmp.path(), Some(5)).run_records(records);
        assert_eq!(run.papers.len(), 1);
        assert_eq!(run.papers[0].cord_uid(), "u3");
        assert_eq!(run.papers[0].source, ParseSource::Pdf);
        assert_eq!(run.report.load_failures, 1);
        assert_eq!(run.report.malformed_rows, 1);
        assert_eq!(run.report.found, 1);
        assert_eq!(run.report.rows_scanned, 3);
    }

    #[test]
    fn test_missing_corpus_completes_empty() {
        let tmp = TempDir::new().unwrap();
        let records = vec![pdf_record("u1", "a"), pdf_record("u2", "b")];

        let run = pipeline(&tmp.path().join("absent"), Some(5)).run_records(records);
        assert!(run.papers.is_empty());
        assert_eq!(run.report.found, 0);
        assert_eq!(run.report.unresolved, 2);
    }

    #[test]
    fn test_missing_index_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let result = pipeline(tmp.path(), Some(5)).run(tmp.path().join("metadata.csv"));
        assert!(matches!(result, Err(Error::MissingIndex { .. })));
    }

    #[test]
    fn test_from_config_uses_layout_and_cap() {
        let mut config = IngestConfig::with_base_dir("/data");
        config.ingestion.max_papers = Some(7);

        let pipeline = IngestPipeline::from_config(&config);
        assert_eq!(pipeline.max_papers(), Some(7));
        assert_eq!(pipeline.resolver().corpus_root(), Path::new("/data/document_parses"));
    }
}
