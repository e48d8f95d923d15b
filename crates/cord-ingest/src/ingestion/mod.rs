//! Metadata ingestion: index reading, document resolution and loading

mod index;
mod loader;
mod pipeline;
mod resolver;

pub use index::{IndexReader, REQUIRED_COLUMNS};
pub use loader::DocumentLoader;
pub use pipeline::{IngestPipeline, IngestRun, RunReport};
pub use resolver::{DocumentResolver, SUB_CORPORA};
