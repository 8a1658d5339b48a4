//! Gopher quality heuristics
//!
//! Scores a document on word statistics, n-gram repetition and line shape.
//! Every metric is emitted as a whole-document span so downstream filters can
//! threshold on it.
//!
//! Denominators differ per metric and must stay that way:
//! - word ratios divide by `word_count`
//! - n-gram fractions divide by characters in words (whitespace excluded)
//! - line fractions divide by `line_count`
//! - the duplicate-line character fraction divides by the full `character_count`

pub mod attributes;
pub mod lines;
pub mod ngrams;

pub use attributes::GopherAttributes;

use crate::error::TaggerError;
use crate::patterns::{
    has_symbol, is_required_word, is_word_separator, DUPLICATE_NGRAM_SIZES,
    MOST_COMMON_NGRAM_SIZES,
};
use crate::tagger::Tagger;
use crate::text::{excerpt, median, ratio};
use doc_types::{DocResult, Document, Span};
use lines::line_stats;
use ngrams::WordWindows;
use thiserror::Error;
use tracing::{debug, warn};

/// Characters of document text included in log messages by default
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Span type carrying the completeness flag of a record
pub const COMPLETE_SPAN: &str = "complete";

/// Why a record could not be fully computed
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PartialReason {
    #[error("text contains no words")]
    NoWords,
}

/// Whether every metric of a record was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    Complete,
    /// Metrics that could not be computed keep their zero defaults
    Partial { reason: PartialReason },
}

/// Attributes together with a flag telling callers whether they are complete
#[derive(Debug, Clone, PartialEq)]
pub struct GopherReport {
    pub attributes: GopherAttributes,
    pub completeness: Completeness,
}

impl GopherReport {
    fn complete(attributes: GopherAttributes) -> Self {
        Self {
            attributes,
            completeness: Completeness::Complete,
        }
    }

    fn partial(attributes: GopherAttributes, reason: PartialReason) -> Self {
        Self {
            attributes,
            completeness: Completeness::Partial { reason },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completeness == Completeness::Complete
    }

    /// Attribute spans followed by a `complete` span scored 1.0 or 0.0
    pub fn as_spans(&self) -> Vec<Span> {
        let mut spans = self.attributes.as_spans();
        let score = if self.is_complete() { 1.0 } else { 0.0 };
        spans.push(Span::new(
            0,
            self.attributes.character_count,
            COMPLETE_SPAN,
            score,
        ));
        spans
    }
}

/// Compute every Gopher metric for `text`.
///
/// Empty text yields an all-zero, complete record. Text without any words
/// (whitespace only) yields a partial record: `character_count` and
/// `word_count` are set, every later metric keeps its default.
pub fn get_attributes(text: &str) -> GopherReport {
    let mut attrs = GopherAttributes {
        character_count: text.chars().count(),
        ..Default::default()
    };
    if attrs.character_count == 0 {
        return GopherReport::complete(attrs);
    }

    let words = split_words(text);
    if words.is_empty() {
        return GopherReport::partial(attrs, PartialReason::NoWords);
    }
    fill_word_metrics(&mut attrs, &words);

    let lines = line_stats(text, attrs.character_count);
    attrs.fraction_of_lines_starting_with_bullet_point = lines.fraction_starting_with_bullet_point;
    attrs.fraction_of_lines_ending_with_ellipsis = lines.fraction_ending_with_ellipsis;
    attrs.fraction_of_duplicate_lines = lines.fraction_of_duplicate_lines;
    attrs.fraction_of_characters_in_duplicate_lines =
        lines.fraction_of_characters_in_duplicate_lines;

    GopherReport::complete(attrs)
}

/// Words separated by runs of whitespace, information separators included
fn split_words(text: &str) -> Vec<&str> {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .collect()
}

fn fill_word_metrics(attrs: &mut GopherAttributes, words: &[&str]) {
    let word_count = words.len();
    let lengths: Vec<usize> = words.iter().map(|word| word.chars().count()).collect();

    attrs.word_count = word_count;
    attrs.median_word_length = median(&lengths).unwrap_or_default();
    attrs.symbol_to_word_ratio = ratio(
        words.iter().filter(|word| has_symbol(word)).count(),
        word_count,
    );
    attrs.fraction_of_words_with_alpha_character = ratio(
        words
            .iter()
            .filter(|word| word.chars().any(char::is_alphabetic))
            .count(),
        word_count,
    );
    attrs.required_word_count = words.iter().filter(|word| is_required_word(word)).count();

    let windows = WordWindows::new(words);
    attrs.fraction_of_characters_in_most_common_ngram = MOST_COMMON_NGRAM_SIZES
        .map(|n| (n, windows.most_common_fraction(n)))
        .collect();
    attrs.fraction_of_characters_in_duplicate_ngrams = DUPLICATE_NGRAM_SIZES
        .map(|n| (n, windows.duplicate_fraction(n)))
        .collect();
}

/// The `gopher_v1` tagger
#[derive(Debug, Clone)]
pub struct GopherTagger {
    excerpt_chars: usize,
}

impl GopherTagger {
    pub const NAME: &'static str = "gopher_v1";

    pub fn new() -> Self {
        Self {
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    /// Bound the document excerpt logged for incomplete records
    pub fn with_excerpt_chars(mut self, excerpt_chars: usize) -> Self {
        self.excerpt_chars = excerpt_chars;
        self
    }
}

impl Default for GopherTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for GopherTagger {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn predict<'a>(&self, doc: &'a Document) -> Result<DocResult<'a>, TaggerError> {
        let report = get_attributes(doc.text());

        if let Completeness::Partial { reason } = report.completeness {
            warn!(
                doc_id = doc.id(),
                %reason,
                excerpt = excerpt(doc.text(), self.excerpt_chars),
                "Incomplete gopher attributes"
            );
        }
        debug!(
            doc_id = doc.id(),
            characters = report.attributes.character_count,
            words = report.attributes.word_count,
            "Scored document"
        );

        Ok(DocResult::new(doc, report.as_spans())?)
    }
}
