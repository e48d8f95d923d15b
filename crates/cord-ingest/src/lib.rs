//! cord-ingest: resolve CORD-19 metadata rows to parsed documents and extract excerpts
//!
//! The crate streams the corpus metadata index, locates each row's parsed JSON
//! document across the sub-corpora of the document tree, decodes it, and
//! produces a short excerpt of its leading body text.
//!
//! ```no_run
//! use cord_ingest::{IngestConfig, IngestPipeline, TextExtractor};
//!
//! let config = IngestConfig::with_base_dir("/data/cord-19/2020-04-10");
//! let run = IngestPipeline::from_config(&config).run(config.index_path())?;
//! for paper in &run.papers {
//!     println!("{}: {:?}", paper.cord_uid(), TextExtractor::new().extract(&paper.document));
//! }
//! # Ok::<(), cord_ingest::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod extraction;
pub mod ingestion;
pub mod nlp;
pub mod report;
pub mod types;

pub use config::IngestConfig;
pub use error::{Error, Result};
pub use extraction::TextExtractor;
pub use ingestion::{DocumentLoader, DocumentResolver, IngestPipeline, IngestRun, RunReport};
pub use nlp::NlpCapability;
pub use types::{Excerpt, MetadataRecord, ParseSource, ParsedDocument, ResolvedPaper, Section};
