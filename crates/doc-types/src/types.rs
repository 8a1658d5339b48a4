use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A unit of text to be scored.
///
/// Fields are private so a document cannot change while a tagger borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters (Unicode scalar values), the unit
    /// every span offset is expressed in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A typed, scored annotation over `start..end` (character offsets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub score: f64,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: impl Into<String>, score: f64) -> Self {
        Self {
            start,
            end,
            kind: kind.into(),
            score,
        }
    }

    /// Check `start <= end <= len`.
    pub fn check_bounds(&self, len: usize) -> Result<(), SpanError> {
        if self.start > self.end || self.end > len {
            return Err(SpanError::OutOfBounds {
                kind: self.kind.clone(),
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }
}

/// Errors raised while assembling a `DocResult`
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpanError {
    #[error("Span '{kind}' {start}..{end} is outside document of {len} characters")]
    OutOfBounds {
        kind: String,
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Everything one tagger produced for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocResult<'a> {
    pub doc: &'a Document,
    pub spans: Vec<Span>,
}

impl<'a> DocResult<'a> {
    /// Build a result, rejecting any span that does not fit inside `doc`.
    pub fn new(doc: &'a Document, spans: Vec<Span>) -> Result<Self, SpanError> {
        let len = doc.char_len();
        for span in &spans {
            span.check_bounds(len)?;
        }
        Ok(Self { doc, spans })
    }

    pub fn id(&self) -> &str {
        self.doc.id()
    }

    /// First span with the given type, if any
    pub fn span(&self, kind: &str) -> Option<&Span> {
        self.spans.iter().find(|span| span.kind == kind)
    }
}
