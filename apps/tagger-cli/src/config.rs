//! Run configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! experiment = "quality"
//! taggers = ["gopher_v1", "char_length_v1"]
//! excerpt_chars = 200
//! skip_failed_documents = true
//! max_document_ms = 5000
//! ```

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Prefix of every attribute key written for this run
    #[serde(default = "default_experiment")]
    pub experiment: String,
    /// Registered tagger names to run, in output order
    #[serde(default = "default_taggers")]
    pub taggers: Vec<String>,
    /// Characters of document text quoted in log messages
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
    /// Log and skip failing documents instead of aborting the run
    #[serde(default = "default_skip_failed_documents")]
    pub skip_failed_documents: bool,
    /// Wall-clock budget for tagging one document
    #[serde(default)]
    pub max_document_ms: Option<u64>,
}

fn default_experiment() -> String {
    "quality".to_string()
}

fn default_taggers() -> Vec<String> {
    vec!["gopher_v1".to_string()]
}

fn default_excerpt_chars() -> usize {
    200
}

fn default_skip_failed_documents() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            experiment: default_experiment(),
            taggers: default_taggers(),
            excerpt_chars: default_excerpt_chars(),
            skip_failed_documents: default_skip_failed_documents(),
            max_document_ms: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - A field has the wrong type
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a field has the wrong type
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Reject configurations that cannot produce a meaningful run
    ///
    /// # Errors
    ///
    /// Returns an error if the experiment name is blank, no tagger is
    /// configured, a tagger is listed twice, or `max_document_ms` is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.experiment.trim().is_empty() {
            bail!("experiment name must not be empty");
        }
        if self.taggers.is_empty() {
            bail!("at least one tagger must be configured");
        }

        let mut seen = HashSet::new();
        for name in &self.taggers {
            if !seen.insert(name.as_str()) {
                bail!("tagger listed twice: {}", name);
            }
        }

        if self.max_document_ms == Some(0) {
            bail!("max_document_ms must be greater than zero");
        }
        Ok(())
    }
}
