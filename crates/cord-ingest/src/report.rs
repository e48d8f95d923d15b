//! Human-readable and JSON run reports

use console::style;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::ingestion::{IngestRun, RunReport};
use crate::nlp::NlpCapability;
use crate::types::{Excerpt, ParseSource, ResolvedPaper};

/// Characters of the title shown per paper
const TITLE_PREVIEW_CHARS: usize = 100;

pub fn write_path_check(out: &mut impl Write, index_path: &Path, corpus_root: &Path) -> io::Result<()> {
    writeln!(out, "Checking paths...")?;
    writeln!(out, "Metadata path exists: {}", index_path.exists())?;
    writeln!(out, "Extraction folder exists: {}", corpus_root.exists())
}

pub fn write_nlp_status(out: &mut impl Write, nlp: &NlpCapability) -> io::Result<()> {
    if nlp.available {
        writeln!(out, "Language model '{}' loaded successfully", nlp.model)
    } else {
        writeln!(
            out,
            "{} Language model '{}' not found. Please install it using:",
            style("!").yellow(),
            nlp.model
        )?;
        writeln!(out, "{}", nlp.install_hint())
    }
}

/// Header and excerpt lines for one paper; `position` is 1-based
pub fn write_paper(
    out: &mut impl Write,
    position: usize,
    paper: &ResolvedPaper,
    excerpt: &Excerpt,
) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(50))?;
    writeln!(
        out,
        "Processing paper {}: {}...",
        style(position).bold(),
        paper.record.short_title(TITLE_PREVIEW_CHARS)
    )?;
    writeln!(out, "CORD UID: {}", paper.cord_uid())?;

    if excerpt.is_empty() {
        return writeln!(out, "{}", style("(no body text)").dim());
    }
    for (i, line) in excerpt.iter().enumerate() {
        writeln!(out, "Line {}: {}", i + 1, line)?;
    }
    Ok(())
}

pub fn write_empty_hints(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", style("No papers with JSON data found!").red().bold())?;
    writeln!(out, "This could be because:")?;
    writeln!(out, "1. The JSON files don't exist in the expected locations")?;
    writeln!(out, "2. The SHA/PMCID values in metadata.csv don't match the file names")?;
    writeln!(out, "3. The document_parses folder structure is different than expected")
}

pub fn write_summary(out: &mut impl Write, report: &RunReport) -> io::Result<()> {
    writeln!(
        out,
        "\nFound {} papers with JSON data ({} rows scanned)",
        style(report.found).green().bold(),
        report.rows_scanned
    )?;
    writeln!(
        out,
        "  unresolved: {}, load failures: {}, malformed rows: {}{}",
        report.unresolved,
        report.load_failures,
        report.malformed_rows,
        if report.capped { " (stopped at cap)" } else { "" }
    )
}

/// Serializable view of one paper and its excerpt
#[derive(Debug, Serialize)]
pub struct PaperSummary<'a> {
    pub cord_uid: &'a str,
    pub title: &'a str,
    pub source: ParseSource,
    pub path: &'a Path,
    pub excerpt: &'a [String],
}

/// Serializable view of a whole run
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub index_path: PathBuf,
    pub corpus_root: PathBuf,
    pub report: &'a RunReport,
    pub papers: Vec<PaperSummary<'a>>,
}

impl<'a> JsonReport<'a> {
    /// Pair each paper of a run with its excerpt
    pub fn new(
        index_path: PathBuf,
        corpus_root: PathBuf,
        run: &'a IngestRun,
        excerpts: &'a [Excerpt],
    ) -> Self {
        let papers = run
            .papers
            .iter()
            .zip(excerpts)
            .map(|(paper, excerpt)| PaperSummary {
                cord_uid: paper.cord_uid(),
                title: &paper.record.title,
                source: paper.source,
                path: &paper.path,
                excerpt,
            })
            .collect();

        Self {
            index_path,
            corpus_root,
            report: &run.report,
            papers,
        }
    }
}
