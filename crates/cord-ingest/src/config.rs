//! Configuration for corpus ingestion

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main ingestion configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngestConfig {
    /// Dataset location
    #[serde(default)]
    pub paths: PathsConfig,
    /// Pipeline limits
    #[serde(default)]
    pub ingestion: IngestionConfig,
    /// Optional language model
    #[serde(default)]
    pub nlp: NlpConfig,
}

/// Dataset location configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Dataset release directory; when loaded from a file, a relative value is
    /// taken relative to that file's directory
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// Metadata index, relative to `base_dir` unless absolute
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
    /// Parsed document tree, relative to `base_dir` unless absolute
    #[serde(default = "default_corpus_dir")]
    pub corpus_dir: PathBuf,
}

fn default_base_dir() -> PathBuf { PathBuf::from(".") }
fn default_index_file() -> PathBuf { PathBuf::from("metadata.csv") }
fn default_corpus_dir() -> PathBuf { PathBuf::from("document_parses") }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            index_file: default_index_file(),
            corpus_dir: default_corpus_dir(),
        }
    }
}

/// Pipeline limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestionConfig {
    /// Stop after this many papers were resolved (None = scan the whole index)
    #[serde(default = "default_max_papers")]
    pub max_papers: Option<usize>,
}

fn default_max_papers() -> Option<usize> { Some(5) }

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            max_papers: default_max_papers(),
        }
    }
}

/// Language model configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NlpConfig {
    /// Model package name
    #[serde(default = "default_model")]
    pub model: String,
    /// Directory where installed models live
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
}

fn default_model() -> String {
    "en_core_web_sm".to_string()
}

fn default_model_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cord-ingest")
        .join("models")
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            model_dir: default_model_dir(),
        }
    }
}

impl IngestConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        let mut config = Self::from_toml(&raw)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;

        if config.paths.base_dir.is_relative() {
            if let Some(dir) = path.parent() {
                config.paths.base_dir = dir.join(&config.paths.base_dir);
            }
        }
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::config(e.to_string()))
    }

    /// Default configuration rooted at a dataset release directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.paths.base_dir = base_dir.into();
        config
    }

    /// Resolved path of the metadata index
    pub fn index_path(&self) -> PathBuf {
        self.paths.base_dir.join(&self.paths.index_file)
    }

    /// Resolved path of the parsed document tree
    pub fn corpus_root(&self) -> PathBuf {
        self.paths.base_dir.join(&self.paths.corpus_dir)
    }
}
