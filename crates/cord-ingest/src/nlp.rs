//! Optional language model capability
//!
//! The model is probed once at startup. Nothing in the ingestion pipeline
//! depends on it; callers check [`NlpCapability::available`] before use.

use std::path::PathBuf;

use crate::config::NlpConfig;

/// Outcome of probing for the language model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NlpCapability {
    /// Model package name
    pub model: String,
    /// Installed model directory, when found
    pub location: Option<PathBuf>,
    /// Whether the model can be used
    pub available: bool,
}

impl NlpCapability {
    /// Look for the configured model under the model directory
    pub fn probe(config: &NlpConfig) -> Self {
        let candidate = config.model_dir.join(&config.model);
        if candidate.is_dir() {
            tracing::info!("Language model {} found at {}", config.model, candidate.display());
            Self {
                model: config.model.clone(),
                location: Some(candidate),
                available: true,
            }
        } else {
            tracing::warn!(
                "Language model {} not found under {}",
                config.model,
                config.model_dir.display()
            );
            Self::unavailable(&config.model)
        }
    }

    /// Capability for a model that is not installed
    pub fn unavailable(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            location: None,
            available: false,
        }
    }

    /// Command that installs the model
    pub fn install_hint(&self) -> String {
        format!("python -m spacy download {}", self.model)
    }
}
