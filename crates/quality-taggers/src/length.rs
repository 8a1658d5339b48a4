use crate::error::TaggerError;
use crate::tagger::Tagger;
use doc_types::{DocResult, Document, Span};

/// The `char_length_v1` tagger: one `length` span scoring the character count
#[derive(Debug, Clone, Copy, Default)]
pub struct CharLengthTagger;

impl CharLengthTagger {
    pub const NAME: &'static str = "char_length_v1";
}

impl Tagger for CharLengthTagger {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn predict<'a>(&self, doc: &'a Document) -> Result<DocResult<'a>, TaggerError> {
        let len = doc.char_len();
        Ok(DocResult::new(doc, vec![Span::new(0, len, "length", len as f64)])?)
    }
}
