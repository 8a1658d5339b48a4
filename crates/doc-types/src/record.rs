//! Persisted attribute record
//!
//! One record per document per run:
//!
//! ```json
//! {"id": "doc-1", "attributes": {"quality__gopher_v1__word_count": [[0, 42, 7.0]]}}
//! ```

use crate::types::DocResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Joins experiment, tagger name, and span type into an attribute key
pub const ATTRIBUTE_KEY_SEPARATOR: &str = "__";

/// `[start, end, score]` triple as stored on disk
pub type SpanTriple = (usize, usize, f64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: String,
    pub attributes: BTreeMap<String, Vec<SpanTriple>>,
}

impl OutputRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Append every span of `result` under `<experiment>__<tagger>__<type>`.
    /// Spans sharing a type keep their emission order.
    pub fn add_result(&mut self, experiment: &str, tagger: &str, result: &DocResult<'_>) {
        for span in &result.spans {
            self.attributes
                .entry(attribute_key(experiment, tagger, &span.kind))
                .or_default()
                .push((span.start, span.end, span.score));
        }
    }

    /// Merge the results of several taggers run over the same document
    pub fn from_results<'t, 'r, 'a: 'r, I>(id: &str, experiment: &str, results: I) -> Self
    where
        I: IntoIterator<Item = (&'t str, &'r DocResult<'a>)>,
    {
        let mut record = Self::new(id);
        for (tagger, result) in results {
            record.add_result(experiment, tagger, result);
        }
        record
    }
}

pub fn attribute_key(experiment: &str, tagger: &str, kind: &str) -> String {
    [experiment, tagger, kind].join(ATTRIBUTE_KEY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Document, Span};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attribute_key_layout() {
        assert_eq!(
            attribute_key("quality", "gopher_v1", "word_count"),
            "quality__gopher_v1__word_count"
        );
    }

    #[test]
    fn test_record_merges_taggers() {
        let doc = Document::new("d1", "hello world");
        let gopher = DocResult::new(&doc, vec![Span::new(0, 11, "word_count", 2.0)]).unwrap();
        let length = DocResult::new(&doc, vec![Span::new(0, 11, "length", 11.0)]).unwrap();

        let record = OutputRecord::from_results(
            doc.id(),
            "exp",
            [("gopher_v1", &gopher), ("char_length_v1", &length)],
        );

        assert_eq!(record.id, "d1");
        assert_eq!(
            record.attributes.keys().collect::<Vec<_>>(),
            vec!["exp__char_length_v1__length", "exp__gopher_v1__word_count"]
        );
        assert_eq!(
            record.attributes["exp__gopher_v1__word_count"],
            vec![(0, 11, 2.0)]
        );
    }

    #[test]
    fn test_record_serializes_triples_as_arrays() {
        let doc = Document::new("d1", "ab");
        let result = DocResult::new(
            &doc,
            vec![Span::new(0, 1, "letter", 1.0), Span::new(1, 2, "letter", 0.5)],
        )
        .unwrap();
        let mut record = OutputRecord::new("d1");
        record.add_result("exp", "t", &result);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"d1","attributes":{"exp__t__letter":[[0,1,1.0],[1,2,0.5]]}}"#
        );
    }
}
