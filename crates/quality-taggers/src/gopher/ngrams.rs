//! Word n-gram repetition measures
//!
//! Both measures work on contiguous windows of `n` words. Window character
//! counts come from a prefix sum over word lengths, so each window costs O(1)
//! to measure; counting distinct n-grams hashes the window slices.

use std::collections::HashMap;

/// Words of a document with their character lengths precomputed
pub struct WordWindows<'w> {
    words: &'w [&'w str],
    /// `prefix[i]` is the character count of `words[..i]`
    prefix: Vec<usize>,
}

impl<'w> WordWindows<'w> {
    pub fn new(words: &'w [&'w str]) -> Self {
        let mut prefix = Vec::with_capacity(words.len() + 1);
        prefix.push(0);
        let mut total = 0;
        for word in words {
            total += word.chars().count();
            prefix.push(total);
        }
        Self { words, prefix }
    }

    /// Characters across all words (whitespace excluded)
    pub fn total_chars(&self) -> usize {
        self.prefix[self.words.len()]
    }

    fn window_count(&self, n: usize) -> usize {
        if n == 0 || self.words.len() < n {
            0
        } else {
            self.words.len() - n + 1
        }
    }

    fn window_chars(&self, start: usize, n: usize) -> usize {
        self.prefix[start + n] - self.prefix[start]
    }

    fn occurrence_counts(&self, n: usize) -> HashMap<&'w [&'w str], usize> {
        let mut counts = HashMap::with_capacity(self.window_count(n));
        for window in self.words.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
        counts
    }

    /// Characters of the single most common n-gram over all word characters.
    ///
    /// Among n-grams sharing the highest count, the one that first occurs
    /// earliest in the document wins. `0.0` when there are fewer than `n` words.
    pub fn most_common_fraction(&self, n: usize) -> f64 {
        if self.window_count(n) == 0 {
            return 0.0;
        }

        let counts = self.occurrence_counts(n);
        let max_count = counts.values().copied().max().unwrap_or(0);
        let winner = self
            .words
            .windows(n)
            .position(|window| counts.get(window) == Some(&max_count));

        match winner {
            Some(start) => self.window_chars(start, n) as f64 / self.total_chars() as f64,
            None => 0.0,
        }
    }

    /// Characters in repeated n-grams over characters in all n-grams.
    ///
    /// Overlapping windows count shared words once per window, in both the
    /// numerator and the denominator. `0.0` when there are fewer than `n` words.
    pub fn duplicate_fraction(&self, n: usize) -> f64 {
        let windows = self.window_count(n);
        if windows == 0 {
            return 0.0;
        }

        let counts = self.occurrence_counts(n);
        let mut all_chars = 0;
        let mut duplicate_chars = 0;
        for (start, window) in self.words.windows(n).enumerate() {
            let chars = self.window_chars(start, n);
            all_chars += chars;
            if counts.get(window).copied().unwrap_or(0) > 1 {
                duplicate_chars += chars;
            }
        }

        if all_chars == 0 {
            0.0
        } else {
            duplicate_chars as f64 / all_chars as f64
        }
    }
}
