//! # InputBox Component
//!
//! The message composer at the bottom of the screen.
//!
//! ## Responsibilities
//!
//! - Capture text input with a placeholder when empty
//! - Handle editing (backspace, delete, cursor movement, word jumps, paste)
//! - Handle submission (Enter)
//! - Grow with its content, scrolling internally past five lines
//!
//! ## State Management
//!
//! The buffer is internal state; suggestion picks write into it through
//! `set_text`. Cursor position and scroll state are encapsulated in
//! `CursorState`. The theme and placeholder are props from the
//! application state.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, next_word_boundary,
    prev_char_boundary, prev_word_boundary, wrap_line_count, wrap_options,
};

/// Placeholder before the first message. The draw pass swaps in a
/// persona-specific hint ("Message Alex...") once a conversation exists.
pub const HERO_PLACEHOLDER: &str = "What do you want to know?";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed (parent may need to resize the layout)
    ContentChanged,
}

/// Text input component.
///
/// # Props
///
/// - `theme`: Current color palette (from App state)
/// - `placeholder`: Hint shown while the buffer is empty (from App state)
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Cursor position, scroll offset, and cached width (see `CursorState`)
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Current palette (Prop)
    pub theme: Theme,
    /// Hint shown while the buffer is empty (Prop)
    pub placeholder: String,
    /// Cursor and scroll tracking
    cursor: CursorState,
}

impl InputBox {
    pub fn new(theme: Theme) -> Self {
        Self {
            buffer: String::new(),
            theme,
            placeholder: String::from(HERO_PLACEHOLDER),
            cursor: CursorState::new(),
        }
    }

    /// Replace the buffer wholesale and park the cursor at the end.
    /// Used when a suggestion pill is picked.
    pub fn set_text(&mut self, text: String) {
        self.cursor.pos = text.len();
        self.buffer = text;
    }

    /// Required height for the current buffer, clamped to the viewport limit.
    /// Returns a value in [1 + VERTICAL_OVERHEAD, MAX_VISIBLE_LINES + VERTICAL_OVERHEAD].
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Wrapped content from the scroll offset down, at most a viewport's worth.
    /// Pre-wrapping keeps the display in lockstep with the height and cursor math.
    fn visible_text(&self, content_width: u16) -> String {
        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    /// Render scrollbar when content exceeds the visible area
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let width = inner_width(area.width);
        let total_lines = wrap_line_count(&self.buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_lines.saturating_sub(MAX_VISIBLE_LINES);

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let theme = self.theme;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::horizontal(1))
            .title_bottom(
                Line::styled(" Enter to send ", Style::default().fg(theme.text_subtle))
                    .right_aligned(),
            );

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(Style::default().fg(theme.text_subtle))
        } else {
            Paragraph::new(self.visible_text(area.width)).style(Style::default().fg(theme.text))
        };

        frame.render_widget(paragraph.block(block), area);
        self.render_scrollbar(frame, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor.pos, text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor.pos > 0 {
                    self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorWordLeft => {
                let target = prev_word_boundary(&self.buffer, self.cursor.pos);
                (self.cursor.pos != target).then(|| {
                    self.cursor.pos = target;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorWordRight => {
                let target = next_word_boundary(&self.buffer, self.cursor.pos);
                (self.cursor.pos != target).then(|| {
                    self.cursor.pos = target;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_content_width)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_content_width)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor.reset();
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn rendered_text(input: &mut InputBox, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_starts_empty() {
        let input = InputBox::new(Theme::dark());
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputBox::new(Theme::dark());

        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('h')),
            Some(InputEvent::ContentChanged)
        );
        type_str(&mut input, "i!");
        assert_eq!(input.buffer, "hi!");

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "hi");
    }

    #[test]
    fn test_backspace_respects_char_boundaries() {
        let mut input = InputBox::new(Theme::dark());
        type_str(&mut input, "café");
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "caf");
    }

    #[test]
    fn test_submit_hands_over_buffer() {
        let mut input = InputBox::new(Theme::dark());
        type_str(&mut input, "what have you built?");

        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "what have you built?"),
            other => panic!("expected Submit, got {other:?}"),
        }
        assert!(input.buffer.is_empty(), "buffer clears after submit");
    }

    #[test]
    fn test_blank_submit_is_swallowed() {
        let mut input = InputBox::new(Theme::dark());
        type_str(&mut input, "   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        // The whitespace stays; nothing was sent.
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_submit_keeps_surrounding_whitespace() {
        let mut input = InputBox::new(Theme::dark());
        type_str(&mut input, "  hello  ");
        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "  hello  "),
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut input = InputBox::new(Theme::dark());
        input.set_text("Can we work together".to_string());
        input.handle_event(&TuiEvent::InputChar('?'));
        assert_eq!(input.buffer, "Can we work together?");
    }

    #[test]
    fn test_word_jumps() {
        let mut input = InputBox::new(Theme::dark());
        input.set_text("can we work".to_string());

        input.handle_event(&TuiEvent::CursorWordLeft);
        // Cursor at the start of "work"; deleting backwards removes "we ".
        input.handle_event(&TuiEvent::Backspace);
        input.handle_event(&TuiEvent::Backspace);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "can work");

        // At the start already: no event.
        input.handle_event(&TuiEvent::CursorHome);
        assert_eq!(input.handle_event(&TuiEvent::CursorWordLeft), None);
    }

    #[test]
    fn test_vertical_moves_follow_wrapped_lines() {
        let mut input = InputBox::new(Theme::dark());
        input.set_text("one\ntwo".to_string());

        assert_eq!(
            input.handle_event(&TuiEvent::CursorUp),
            Some(InputEvent::ContentChanged)
        );
        // Same column on the first line: right after "one".
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "one!\ntwo");

        input.handle_event(&TuiEvent::CursorDown);
        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "one!\ntwo!");
    }

    #[test]
    fn test_height_grows_and_clamps() {
        let mut input = InputBox::new(Theme::dark());
        assert_eq!(input.calculate_height(24), 3);

        // 50 chars at inner width 20 wrap to 3 lines.
        input.set_text("a".repeat(50));
        assert_eq!(input.calculate_height(24), 5);

        // Far past the limit: clamped to MAX_VISIBLE_LINES + borders.
        input.set_text("a".repeat(2000));
        assert_eq!(
            input.calculate_height(24),
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn test_placeholder_shown_until_typing() {
        let mut input = InputBox::new(Theme::dark());
        assert!(rendered_text(&mut input, 40, 3).contains(HERO_PLACEHOLDER));

        type_str(&mut input, "hi");
        let text = rendered_text(&mut input, 40, 3);
        assert!(!text.contains(HERO_PLACEHOLDER));
        assert!(text.contains("hi"));
    }

    #[test]
    fn test_placeholder_is_a_prop() {
        let mut input = InputBox::new(Theme::dark());
        input.placeholder = String::from("Message Alex...");
        assert!(rendered_text(&mut input, 40, 3).contains("Message Alex..."));
    }

    #[test]
    fn test_render_shows_send_hint() {
        let mut input = InputBox::new(Theme::dark());
        assert!(rendered_text(&mut input, 40, 3).contains("Enter to send"));
    }
}
