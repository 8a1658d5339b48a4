use doc_types::SpanError;
use thiserror::Error;

/// Errors raised by taggers and the tagger registry
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaggerError {
    /// A second tagger was registered under an existing name
    #[error("Tagger already registered: {0}")]
    DuplicateTagger(String),

    /// No tagger is registered under the requested name
    #[error("Unknown tagger: {0}")]
    UnknownTagger(String),

    /// A tagger produced a span that does not fit its document
    #[error("Invalid span: {0}")]
    InvalidSpan(#[from] SpanError),

    /// Tagging one document took longer than the configured budget
    #[error("Tagger {tagger} took {elapsed_ms}ms on document {doc_id} (budget {budget_ms}ms)")]
    BudgetExceeded {
        tagger: String,
        doc_id: String,
        elapsed_ms: u64,
        budget_ms: u64,
    },
}

impl TaggerError {
    /// Configuration errors abort a run; everything else is per-document.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TaggerError::DuplicateTagger(_) | TaggerError::UnknownTagger(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_classified() {
        assert!(TaggerError::DuplicateTagger("x".into()).is_configuration());
        assert!(TaggerError::UnknownTagger("x".into()).is_configuration());
        assert!(!TaggerError::BudgetExceeded {
            tagger: "t".into(),
            doc_id: "d".into(),
            elapsed_ms: 20,
            budget_ms: 10,
        }
        .is_configuration());
    }

    #[test]
    fn test_messages_name_the_tagger() {
        let err = TaggerError::UnknownTagger("gopher_v9".into());
        assert_eq!(err.to_string(), "Unknown tagger: gopher_v9");
    }
}
