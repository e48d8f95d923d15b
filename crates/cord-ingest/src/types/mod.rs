//! Core types for corpus ingestion

pub mod document;
pub mod paper;
pub mod record;

pub use document::{ParsedDocument, Section};
pub use paper::{Excerpt, ParseSource, ResolvedPaper};
pub use record::{parse_flag, MetadataRecord};
