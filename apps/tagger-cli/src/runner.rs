//! Streams documents through the configured taggers

use crate::config::RunConfig;
use anyhow::Context;
use doc_types::{Document, OutputRecord};
use quality_taggers::text::excerpt;
use quality_taggers::{Tagger, TaggerError, TaggerRegistry};
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

/// A failure confined to one input document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Line {line}: invalid document JSON: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Document {doc_id}: {source}")]
    Tagging {
        doc_id: String,
        #[source]
        source: TaggerError,
    },
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
}

pub struct Runner {
    config: RunConfig,
    taggers: Vec<(String, Arc<dyn Tagger>)>,
}

impl Runner {
    /// Validate `config` and resolve its tagger names once, up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or names an unknown
    /// tagger. Both fail here, before any document is read.
    pub fn new(registry: &TaggerRegistry, config: RunConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let taggers = registry
            .resolve(&config.taggers)
            .context("Failed to resolve configured taggers")?;
        Ok(Self { config, taggers })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run every configured tagger over one document and merge the results
    pub fn tag_document(&self, doc: &Document) -> Result<OutputRecord, TaggerError> {
        let started = Instant::now();
        let mut record = OutputRecord::new(doc.id());

        for (name, tagger) in &self.taggers {
            let result = tagger.predict(doc)?;

            if let Some(budget_ms) = self.config.max_document_ms {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                if elapsed_ms > budget_ms {
                    return Err(TaggerError::BudgetExceeded {
                        tagger: name.clone(),
                        doc_id: doc.id().to_string(),
                        elapsed_ms,
                        budget_ms,
                    });
                }
            }

            record.add_result(&self.config.experiment, name, &result);
        }

        Ok(record)
    }

    /// Tag every JSON line of `reader`, writing one record per line to `writer`.
    ///
    /// Blank lines are ignored. Failing documents are logged and skipped when
    /// `skip_failed_documents` is set; otherwise the first failure ends the run.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();
        info!(
            experiment = %self.config.experiment,
            taggers = ?self.config.taggers,
            "Starting tagging run"
        );

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.with_context(|| format!("Failed to read input line {}", line_no))?;
            if line.trim().is_empty() {
                continue;
            }

            match self.process_line(line_no, &line) {
                Ok(record) => {
                    serde_json::to_writer(&mut writer, &record)
                        .context("Failed to serialize output record")?;
                    writer.write_all(b"\n").context("Failed to write output")?;
                    summary.processed += 1;
                    debug!(doc_id = %record.id, "Wrote attributes");
                }
                Err(e) if self.config.skip_failed_documents => {
                    error!(
                        error = %e,
                        excerpt = excerpt(&line, self.config.excerpt_chars),
                        "Skipping document"
                    );
                    summary.skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        writer.flush().context("Failed to flush output")?;
        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            "Tagging run finished"
        );
        Ok(summary)
    }

    fn process_line(&self, line_no: usize, line: &str) -> Result<OutputRecord, DocumentError> {
        let doc: Document = serde_json::from_str(line).map_err(|source| DocumentError::Parse {
            line: line_no,
            source,
        })?;
        self.tag_document(&doc).map_err(|source| DocumentError::Tagging {
            doc_id: doc.id().to_string(),
            source,
        })
    }
}
