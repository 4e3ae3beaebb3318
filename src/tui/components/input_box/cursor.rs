//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset, the internal scroll offset,
//! and the width cached from the last render. The text itself lives in
//! `InputBox`; every method takes `buffer: &str` so the dependency stays
//! visible at the call site.

use std::borrow::Cow;

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, inner_width, wrap_line_count,
    wrap_options,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
    /// Content width from the last render, reused for cursor movement
    /// between frames
    pub last_content_width: u16,
}

/// Byte length a wrapped line covers in the original buffer, including the
/// hard newline that follows it (textwrap swallows those).
fn line_span(buffer: &str, line: &str, offset: usize) -> usize {
    let after = offset + line.len();
    let has_newline = after < buffer.len() && buffer.as_bytes()[after] == b'\n';
    line.len() + usize::from(has_newline)
}

/// Wrapped line index and byte column of `pos`. `lines` must be non-empty.
fn locate(lines: &[Cow<'_, str>], buffer: &str, pos: usize) -> (usize, usize) {
    let mut offset = 0;
    for (idx, line) in lines.iter().enumerate() {
        if offset + line.len() >= pos {
            return (idx, pos - offset);
        }
        offset += line_span(buffer, line, offset);
    }
    // Wrapping trims trailing whitespace, so a cursor sitting on trimmed
    // spaces can run past every line. Snap to the end of the last one.
    let last = lines.len() - 1;
    (last, lines[last].len())
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Reset cursor to start (used after Submit clears the buffer).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Move the cursor one wrapped line up or down, holding the column
    /// where possible. Returns `false` when already at the boundary.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        let (line_idx, column) = locate(&lines, buffer, self.pos);
        let target_idx = if direction < 0 {
            match line_idx.checked_sub(1) {
                Some(idx) => idx,
                None => return false,
            }
        } else {
            if line_idx + 1 >= lines.len() {
                return false;
            }
            line_idx + 1
        };

        let mut target_start = 0;
        for line in lines.iter().take(target_idx) {
            target_start += line_span(buffer, line, target_start);
        }

        // The byte column may land inside a multi-byte character on the
        // target line. Snap back to the nearest boundary.
        let mut pos = target_start + column.min(lines[target_idx].len());
        while pos > 0 && !buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;

        true
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn cursor_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(before_cursor, wrap_options(width));
        let mut line = lines.len().saturating_sub(1) as u16;

        // A newline directly behind the cursor is not always represented
        // as an empty trailing line by textwrap.
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            line += 1;
        }

        line
    }

    /// Adjust the scroll offset so the cursor stays inside the viewport.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.cursor_line(buffer, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen position (column, row) for the terminal cursor, based on the
    /// wrapped layout of the text before the cursor.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET_X, area.y + CONTENT_OFFSET_Y);
        }

        let options = wrap_options(width);
        let before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(before_cursor, &options);
        let cursor_line = lines.len().saturating_sub(1) as u16;

        // Column is counted in chars from the last hard newline. The
        // wrapped line itself is useless here because textwrap trims the
        // trailing spaces the cursor may be sitting on.
        let logical_start = before_cursor.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let logical_line = &before_cursor[logical_start..];
        let segments = textwrap::wrap(logical_line, options);

        let cursor_col = if segments.is_empty() {
            0
        } else {
            let chars_in_full_segments: usize = segments
                .iter()
                .take(segments.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();
            (logical_line.chars().count() - chars_in_full_segments) as u16
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        // Keep the cursor inside the border even when trailing spaces
        // push the column past the inner width.
        let screen_col =
            (area.x + CONTENT_OFFSET_X + cursor_col).min(area.x + area.width.saturating_sub(2));
        let screen_row = area.y + CONTENT_OFFSET_Y + visible_line;

        (screen_col, screen_row)
    }
}
