//! Shared data model for document tagging
//!
//! This crate provides:
//! - `Document`: an immutable text unit with an externally assigned id
//! - `Span`: a typed, scored annotation over a character range
//! - `DocResult`: every span a tagger produced for one document
//! - `OutputRecord`: the persisted per-document attribute shape

pub mod record;
pub mod types;

pub use record::{OutputRecord, ATTRIBUTE_KEY_SEPARATOR};
pub use types::{DocResult, Document, Span, SpanError};
