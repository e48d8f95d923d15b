//! Corpus excerpt CLI
//!
//! Run with: cargo run -p cord-ingest -- --base-dir /data/cord-19/2020-04-10

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cord_ingest::report::{self, JsonReport};
use cord_ingest::{Excerpt, IngestConfig, IngestPipeline, NlpCapability, TextExtractor};

#[derive(Parser, Debug)]
#[command(name = "cord-ingest", version, about = "Extract leading body text from CORD-19 parsed documents")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset release directory holding metadata.csv and document_parses/
    #[arg(long, env = "CORD_INGEST_BASE")]
    base_dir: Option<PathBuf>,

    /// Metadata index (overrides the configured location)
    #[arg(long)]
    index: Option<PathBuf>,

    /// Parsed document tree (overrides the configured location)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Stop after this many papers were found
    #[arg(short = 'n', long, conflicts_with = "all")]
    max_papers: Option<usize>,

    /// Scan the whole index
    #[arg(long)]
    all: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<IngestConfig> {
        let mut config = match &self.config {
            Some(path) => IngestConfig::from_file(path)?,
            None => IngestConfig::default(),
        };

        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        if let Some(base) = self.base_dir {
            config.paths.base_dir = base;
        }
        if let Some(index) = self.index {
            config.paths.index_file = cwd.join(index);
        }
        if let Some(corpus) = self.corpus {
            config.paths.corpus_dir = cwd.join(corpus);
        }
        if self.all {
            config.ingestion.max_papers = None;
        } else if let Some(max) = self.max_papers {
            config.ingestion.max_papers = Some(max);
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cord_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    let config = cli.into_config()?;

    let index_path = config.index_path();
    let corpus_root = config.corpus_root();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !json {
        report::write_path_check(&mut out, &index_path, &corpus_root)?;
    }

    let nlp = NlpCapability::probe(&config.nlp);
    if !json {
        report::write_nlp_status(&mut out, &nlp)?;
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - Index: {}", index_path.display());
    tracing::info!("  - Corpus: {}", corpus_root.display());
    match config.ingestion.max_papers {
        Some(max) => tracing::info!("  - Max papers: {}", max),
        None => tracing::info!("  - Max papers: unbounded"),
    }

    let run = IngestPipeline::from_config(&config)
        .run(&index_path)
        .with_context(|| format!("cannot ingest {}", index_path.display()))?;

    let extractor = TextExtractor::new();
    let excerpts: Vec<Excerpt> = run
        .papers
        .iter()
        .map(|paper| extractor.extract(&paper.document))
        .collect();

    if json {
        let report = JsonReport::new(index_path, corpus_root, &run, &excerpts);
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    if run.papers.is_empty() {
        report::write_empty_hints(&mut out)?;
    } else {
        for (i, (paper, excerpt)) in run.papers.iter().zip(&excerpts).enumerate() {
            report::write_paper(&mut out, i + 1, paper, excerpt)?;
        }
    }
    report::write_summary(&mut out, &run.report)?;

    Ok(())
}
