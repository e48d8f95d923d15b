//! Bounded leading-line extraction

use crate::types::{Excerpt, ParsedDocument};

/// Lines kept in an excerpt
pub const EXCERPT_LINES: usize = 3;

/// Produces the first few body lines of a document
#[derive(Debug, Clone, Copy)]
pub struct TextExtractor {
    max_lines: usize,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor {
    /// Create an extractor keeping [`EXCERPT_LINES`] lines
    pub fn new() -> Self {
        Self::with_max_lines(EXCERPT_LINES)
    }

    /// Create an extractor keeping at most `max_lines` lines
    pub fn with_max_lines(max_lines: usize) -> Self {
        Self { max_lines }
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Leading lines of the document body.
    ///
    /// Sections are appended whole; the bound is only checked between
    /// sections, so the final truncation is what enforces it.
    pub fn extract(&self, document: &ParsedDocument) -> Excerpt {
        let mut lines: Vec<&str> = Vec::new();

        for section in &document.body_text {
            lines.extend(split_lines(&section.text));
            if lines.len() >= self.max_lines {
                break;
            }
        }

        lines
            .into_iter()
            .take(self.max_lines)
            .map(str::to_string)
            .collect()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines on universal line boundaries.
///
/// `\r\n` counts as one boundary. A trailing boundary does not produce a
/// trailing empty line, and empty text produces no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
