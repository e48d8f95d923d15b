//! Excerpt extraction from parsed documents

mod excerpt;

pub use excerpt::{split_lines, TextExtractor, EXCERPT_LINES};
