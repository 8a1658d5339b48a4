//! Document quality taggers
//!
//! A tagger scores one document and returns typed spans. Taggers are looked
//! up by name in a `TaggerRegistry` that is built once at startup and shared
//! read-only afterwards.
//!
//! Built-in taggers:
//! - `gopher_v1`: repetition, symbol, line-shape and word statistics
//! - `char_length_v1`: document length in characters

pub mod error;
pub mod gopher;
pub mod length;
pub mod patterns;
pub mod registry;
pub mod tagger;
pub mod text;

pub use error::TaggerError;
pub use gopher::{
    get_attributes, Completeness, GopherAttributes, GopherReport, GopherTagger, PartialReason,
    COMPLETE_SPAN,
};
pub use length::CharLengthTagger;
pub use registry::{builtin_taggers, TaggerRegistry};
pub use tagger::Tagger;

pub use doc_types::{DocResult, Document, Span};
