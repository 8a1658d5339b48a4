use doc_types::Span;

/// Every metric the Gopher tagger computes for one document.
///
/// Each field becomes one whole-document span (`0..character_count`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GopherAttributes {
    /// `(n, fraction)` for n in 2..=4
    pub fraction_of_characters_in_most_common_ngram: Vec<(usize, f64)>,
    /// `(n, fraction)` for n in 5..=10
    pub fraction_of_characters_in_duplicate_ngrams: Vec<(usize, f64)>,
    pub character_count: usize,
    pub word_count: usize,
    pub median_word_length: f64,
    pub symbol_to_word_ratio: f64,
    pub fraction_of_words_with_alpha_character: f64,
    pub required_word_count: usize,
    pub fraction_of_lines_starting_with_bullet_point: f64,
    pub fraction_of_lines_ending_with_ellipsis: f64,
    pub fraction_of_duplicate_lines: f64,
    pub fraction_of_characters_in_duplicate_lines: f64,
}

impl GopherAttributes {
    /// Expand into spans: n-gram families first, then scalars in field order.
    pub fn as_spans(&self) -> Vec<Span> {
        let end = self.character_count;
        let whole = |kind: String, score: f64| Span::new(0, end, kind, score);

        let mut spans = Vec::with_capacity(
            self.fraction_of_characters_in_most_common_ngram.len()
                + self.fraction_of_characters_in_duplicate_ngrams.len()
                + 10,
        );

        spans.extend(
            self.fraction_of_characters_in_most_common_ngram
                .iter()
                .map(|&(n, v)| whole(format!("fraction_of_characters_in_most_common_{n}grams"), v)),
        );
        spans.extend(
            self.fraction_of_characters_in_duplicate_ngrams
                .iter()
                .map(|&(n, v)| whole(format!("fraction_of_characters_in_duplicate_{n}grams"), v)),
        );

        let scalars: [(&str, f64); 10] = [
            ("character_count", self.character_count as f64),
            ("word_count", self.word_count as f64),
            ("median_word_length", self.median_word_length),
            ("symbol_to_word_ratio", self.symbol_to_word_ratio),
            (
                "fraction_of_words_with_alpha_character",
                self.fraction_of_words_with_alpha_character,
            ),
            ("required_word_count", self.required_word_count as f64),
            (
                "fraction_of_lines_starting_with_bullet_point",
                self.fraction_of_lines_starting_with_bullet_point,
            ),
            (
                "fraction_of_lines_ending_with_ellipsis",
                self.fraction_of_lines_ending_with_ellipsis,
            ),
            ("fraction_of_duplicate_lines", self.fraction_of_duplicate_lines),
            (
                "fraction_of_characters_in_duplicate_lines",
                self.fraction_of_characters_in_duplicate_lines,
            ),
        ];
        spans.extend(
            scalars
                .into_iter()
                .map(|(kind, score)| whole(kind.to_string(), score)),
        );

        spans
    }
}
