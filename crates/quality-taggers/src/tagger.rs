use crate::error::TaggerError;
use doc_types::{DocResult, Document};

/// A pluggable scorer over one document.
///
/// Implementations must be deterministic (the same text always yields the
/// same spans), must not modify the document, and must not block on I/O.
/// They are shared across worker threads through the registry.
pub trait Tagger: Send + Sync {
    /// Name this tagger registers under by default
    fn name(&self) -> &str;

    /// Score a document
    fn predict<'a>(&self, doc: &'a Document) -> Result<DocResult<'a>, TaggerError>;
}
