// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of the first `n` characters of `s`. Used to place the
/// form cursor after multi-width characters.
pub fn width_of_prefix(s: &str, n: usize) -> usize {
    if n == 0 || s.is_empty() {
        return 0;
    }
    match s.char_indices().nth(n - 1) {
        Some((idx, ch)) => s[..idx + ch.len_utf8()].width(),
        None => s.width(),
    }
}

/// Byte range of the grapheme cluster at index `idx`, if any. Deleting a
/// "character" from an input removes the whole cluster.
pub fn grapheme_byte_range(s: &str, idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(idx)
        .map(|(start, g)| start..start + g.len())
}

/// Truncates to at most `max` characters, appending `...` when shortened.
pub fn truncate_text(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_width_counts_wide_characters() {
        assert_eq!(width_of_prefix("hello", 3), 3);
        assert_eq!(width_of_prefix("hello", 99), 5);
        assert_eq!(width_of_prefix("ab中", 3), 4);
        assert_eq!(width_of_prefix("", 2), 0);
    }

    #[test]
    fn grapheme_range_spans_multibyte_clusters() {
        assert_eq!(grapheme_byte_range("abc", 1), Some(1..2));
        assert_eq!(grapheme_byte_range("a中b", 1), Some(1..4));
        assert_eq!(grapheme_byte_range("ab", 5), None);
    }

    #[test]
    fn truncation_appends_ellipsis_only_when_needed() {
        assert_eq!(truncate_text("short", 15), "short");
        assert_eq!(truncate_text("a longer title here", 6), "a long...");
    }
}
