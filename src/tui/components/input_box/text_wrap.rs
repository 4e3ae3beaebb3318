//! Pure text wrapping utilities and dimensional constants for the InputBox.
//!
//! Stateless helpers with no dependency on InputBox or CursorState.

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Columns from the area edge to the first content cell (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Rows from the area edge to the first content row (border)
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after subtracting border and padding.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines for the given text, accounting for trailing newlines
/// that textwrap may not represent as empty lines.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Byte offset of the character boundary immediately before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    let mut p = pos.saturating_sub(1);
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Byte offset of the character boundary immediately after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    let mut p = (pos + 1).min(text.len());
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte offset of the previous word start before `pos`, readline style:
/// separators are skipped first, then the word itself.
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let before = &text[..pos];
    let word_end = before.trim_end_matches(|c| !is_word_char(c)).len();
    before[..word_end]
        .char_indices()
        .rfind(|&(_, c)| !is_word_char(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// Byte offset of the end of the next word after `pos`, readline style.
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let after = &text[pos..];
    let word_start = after.len() - after.trim_start_matches(|c| !is_word_char(c)).len();
    let word = &after[word_start..];
    let word_len = word.find(|c: char| !is_word_char(c)).unwrap_or(word.len());
    pos + word_start + word_len
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- wrap_line_count -------------------------------------------------

    #[test]
    fn wrap_line_count_empty_string() {
        assert_eq!(wrap_line_count("", 80), 1);
    }

    #[test]
    fn wrap_line_count_zero_width() {
        assert_eq!(wrap_line_count("hello", 0), 1);
    }

    #[test]
    fn wrap_line_count_wraps_long_text() {
        // 10 chars into a 5-wide column -> 2 lines
        assert_eq!(wrap_line_count("aaaaaaaaaa", 5), 2);
    }

    #[test]
    fn wrap_line_count_explicit_newlines() {
        assert_eq!(wrap_line_count("a\nb\nc", 80), 3);
    }

    #[test]
    fn wrap_line_count_trailing_newline_adds_line() {
        assert_eq!(wrap_line_count("hello\n", 80), 2);
        // "aaaaaaaaaa\n" at width 5 -> "aaaaa", "aaaaa", "" = 3 lines
        assert_eq!(wrap_line_count("aaaaaaaaaa\n", 5), 3);
    }

    // -- char boundaries ---------------------------------------------------

    #[test]
    fn char_boundaries_ascii() {
        assert_eq!(prev_char_boundary("abc", 2), 1);
        assert_eq!(prev_char_boundary("abc", 1), 0);
        assert_eq!(next_char_boundary("abc", 0), 1);
        assert_eq!(next_char_boundary("abc", 2), 3);
        assert_eq!(next_char_boundary("abc", 3), 3);
    }

    #[test]
    fn char_boundaries_multibyte() {
        // "café" = [99, 97, 102, 195, 169]; 'é' spans bytes 3..5
        let s = "café";
        assert_eq!(prev_char_boundary(s, 5), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
        assert_eq!(next_char_boundary(s, 3), 5);
        assert_eq!(next_char_boundary(s, 2), 3);
    }

    #[test]
    fn char_boundaries_emoji() {
        // "a🚀b": the emoji spans bytes 1..5
        let s = "a🚀b";
        assert_eq!(prev_char_boundary(s, 5), 1);
        assert_eq!(prev_char_boundary(s, 1), 0);
        assert_eq!(next_char_boundary(s, 1), 5);
        assert_eq!(next_char_boundary(s, 5), 6);
    }

    // -- word boundaries ---------------------------------------------------

    #[test]
    fn prev_word_skips_back_over_word() {
        assert_eq!(prev_word_boundary("can we work", 11), 7);
        assert_eq!(prev_word_boundary("can we work", 9), 7);
    }

    #[test]
    fn prev_word_skips_separators_first() {
        assert_eq!(prev_word_boundary("can   we", 6), 0);
        assert_eq!(prev_word_boundary("foo.bar", 7), 4);
    }

    #[test]
    fn prev_word_at_start_stays_put() {
        assert_eq!(prev_word_boundary("hello", 0), 0);
    }

    #[test]
    fn prev_word_underscore_is_part_of_word() {
        assert_eq!(prev_word_boundary("task_flow demo", 14), 10);
        assert_eq!(prev_word_boundary("task_flow demo", 10), 0);
    }

    #[test]
    fn prev_word_multibyte() {
        let s = "café latte";
        assert_eq!(prev_word_boundary(s, s.len()), 6);
    }

    #[test]
    fn next_word_skips_to_word_end() {
        assert_eq!(next_word_boundary("can we work", 0), 3);
        assert_eq!(next_word_boundary("can we work", 3), 6);
        assert_eq!(next_word_boundary("can we work", 1), 3);
    }

    #[test]
    fn next_word_skips_separators_first() {
        assert_eq!(next_word_boundary("can   we", 3), 8);
        assert_eq!(next_word_boundary("foo.bar", 3), 7);
    }

    #[test]
    fn next_word_at_end_stays_put() {
        assert_eq!(next_word_boundary("hello", 5), 5);
    }

    #[test]
    fn next_word_multibyte() {
        assert_eq!(next_word_boundary("café latte", 0), 5);
    }
}
