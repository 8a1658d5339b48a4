//! Line-shape measures

use crate::patterns::{ends_with_ellipsis, is_bullet_line};
use crate::text::ratio;
use std::collections::HashMap;

/// Line-level metrics of one document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineStats {
    pub line_count: usize,
    pub fraction_starting_with_bullet_point: f64,
    pub fraction_ending_with_ellipsis: f64,
    pub fraction_of_duplicate_lines: f64,
    pub fraction_of_characters_in_duplicate_lines: f64,
}

/// Split on `\n`. A single trailing newline closes the last line instead of
/// opening an empty one.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.strip_suffix('\n').unwrap_or(text).split('\n').collect()
}

/// Compute line metrics. `character_count` is the character length of the
/// whole text and is the denominator of the duplicate-character fraction.
pub fn line_stats(text: &str, character_count: usize) -> LineStats {
    let lines = split_lines(text);
    let line_count = lines.len();

    let bullets = lines.iter().filter(|line| is_bullet_line(line)).count();
    let ellipses = lines.iter().filter(|line| ends_with_ellipsis(line)).count();

    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(line_count);
    for &line in &lines {
        *counts.entry(line).or_insert(0) += 1;
    }

    // Every occurrence of a repeated line counts, not just the extra copies.
    let (duplicate_lines, duplicate_chars) = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .fold((0usize, 0usize), |(n_lines, n_chars), (line, count)| {
            (n_lines + count, n_chars + line.chars().count() * count)
        });

    LineStats {
        line_count,
        fraction_starting_with_bullet_point: ratio(bullets, line_count),
        fraction_ending_with_ellipsis: ratio(ellipses, line_count),
        fraction_of_duplicate_lines: ratio(duplicate_lines, line_count),
        fraction_of_characters_in_duplicate_lines: ratio(duplicate_chars, character_count),
    }
}
