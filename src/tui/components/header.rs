//! # HeaderBar Component
//!
//! Top status bar showing the portfolio identity, transient status text and
//! the keyboard affordances that are currently meaningful.
//!
//! ## Responsibilities
//!
//! - Display "{persona} Portfolio" as the application title
//! - Display status messages (e.g., "Ask me anything", "Conversation cleared")
//! - Offer `^R reset` only while a conversation exists
//! - Offer `^T` with the theme the toggle would switch *to*
//! - Show "↓ new" when a reply landed below the current scroll position
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! HeaderBar is purely presentational—it receives all data as props and has
//! no internal state. This makes it trivial to test and reason about:
//!
//! ```rust,ignore
//! let header = HeaderBar {
//!     persona: "Alex".to_string(),
//!     status_message: "Ask me anything".to_string(),
//!     conversation_active: false,
//!     dark_mode: true,
//!     has_unseen_content: false,
//!     theme: Theme::dark(),
//! };
//! header.render(frame, area);
//! ```
//!
//! ### State Ownership
//!
//! The props come from different layers on purpose:
//! - `persona`, `status_message`, `dark_mode`: core App state
//! - `conversation_active`: derived from App (`!messages.is_empty()`)
//! - `has_unseen_content`: TUI state (scroll position indicator)
//!
//! The HeaderBar doesn't care where they come from—it just renders what
//! it's given.
//!
//! ### Left/Right Split
//!
//! Identity and status sit on the left; key hints sit flush right. The gap
//! between them is computed from display widths (`unicode-width`), so the
//! right block stays right-aligned regardless of persona length. On very
//! narrow terminals the hints win and the status is the first thing clipped.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Top status bar component showing identity, status, and key hints.
pub struct HeaderBar {
    /// Portfolio owner's display name.
    pub persona: String,
    /// Transient status (e.g., "Ask me anything", "Conversation cleared").
    pub status_message: String,
    /// True once the transcript has at least one message.
    pub conversation_active: bool,
    /// Current color scheme; the `^T` hint names the other one.
    pub dark_mode: bool,
    /// Whether there's content below the current scroll position.
    pub has_unseen_content: bool,
    pub theme: Theme,
}

impl Component for HeaderBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;

        let mut left: Vec<Span> = vec![
            Span::styled(
                format!(" {} Portfolio", self.persona),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.status_message.is_empty() {
            left.push(Span::styled(
                format!("  {}", self.status_message),
                Style::default().fg(theme.text_muted),
            ));
        }

        let mut right: Vec<Span> = Vec::new();
        if self.has_unseen_content {
            right.push(Span::styled(
                "↓ new  ",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
        }
        if self.conversation_active {
            right.push(Span::styled(
                "^R reset  ",
                Style::default().fg(theme.text_subtle),
            ));
        }
        let other_mode = if self.dark_mode { "light" } else { "dark" };
        right.push(Span::styled(
            format!("^T {other_mode} "),
            Style::default().fg(theme.text_subtle),
        ));

        let left_width: usize = left.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right.iter().map(|s| s.content.width()).sum();
        let gap = (area.width as usize).saturating_sub(left_width + right_width);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(right);

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(header: &mut HeaderBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                header.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn header() -> HeaderBar {
        HeaderBar {
            persona: "Alex".to_string(),
            status_message: "Ask me anything".to_string(),
            conversation_active: false,
            dark_mode: false,
            has_unseen_content: false,
            theme: Theme::light(),
        }
    }

    #[test]
    fn test_header_shows_identity_and_status() {
        let text = draw(&mut header());
        assert!(text.contains("Alex Portfolio"));
        assert!(text.contains("Ask me anything"));
    }

    #[test]
    fn test_reset_hint_requires_a_conversation() {
        let mut bare = header();
        assert!(!draw(&mut bare).contains("^R reset"));

        let mut active = header();
        active.conversation_active = true;
        assert!(draw(&mut active).contains("^R reset"));
    }

    #[test]
    fn test_theme_hint_names_the_other_mode() {
        let mut light = header();
        assert!(draw(&mut light).contains("^T dark"));

        let mut dark = header();
        dark.dark_mode = true;
        assert!(draw(&mut dark).contains("^T light"));
    }

    #[test]
    fn test_unseen_indicator_toggles() {
        let mut quiet = header();
        assert!(!draw(&mut quiet).contains("↓ new"));

        let mut unseen = header();
        unseen.has_unseen_content = true;
        assert!(draw(&mut unseen).contains("↓ new"));
    }

    #[test]
    fn test_empty_status_collapses() {
        let mut bare = header();
        bare.status_message = String::new();
        let text = draw(&mut bare);
        assert!(text.contains("Alex Portfolio"));
        assert!(!text.contains("Ask me anything"));
    }
}
