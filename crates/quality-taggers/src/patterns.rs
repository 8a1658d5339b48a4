//! Fixed word sets and markers used by the quality heuristics

use std::ops::RangeInclusive;

/// Common English function words; matched case-sensitively
pub const REQUIRED_ENGLISH_WORDS: &[&str] =
    &["the", "be", "to", "of", "and", "that", "have", "with"];

/// Horizontal ellipsis (U+2026)
pub const ELLIPSIS: char = '\u{2026}';

/// A word containing any of these counts as a symbol word
pub const SYMBOLS: &[char] = &['#', ELLIPSIS];

/// Line prefixes that mark a bullet point
pub const BULLET_POINTS: &[char] = &['*', '-'];

/// N-gram sizes scored by the characters of their single most common n-gram
pub const MOST_COMMON_NGRAM_SIZES: RangeInclusive<usize> = 2..=4;

/// N-gram sizes scored by the characters of all repeated n-grams
pub const DUPLICATE_NGRAM_SIZES: RangeInclusive<usize> = 5..=10;

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Check if a word exactly matches one of the required English words
pub fn is_required_word(word: &str) -> bool {
    REQUIRED_ENGLISH_WORDS.contains(&word)
}

/// Check if a word contains `#` or an ellipsis
pub fn has_symbol(word: &str) -> bool {
    word.contains(SYMBOLS)
}

pub fn is_bullet_line(line: &str) -> bool {
    line.starts_with(BULLET_POINTS)
}

pub fn ends_with_ellipsis(line: &str) -> bool {
    line.ends_with(ELLIPSIS)
}
