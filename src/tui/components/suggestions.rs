//! # Suggestion Pills
//!
//! The row of clickable follow-up prompts shown on the hero screen and
//! under each assistant reply. Pills flow left to right and wrap onto
//! additional rows when the area is narrow.
//!
//! Layout math lives in [`pill_layout`] and is shared between rendering
//! and mouse hit-testing, so a click always lands on the pill the visitor
//! sees.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use ratatui::{buffer::Buffer, layout::Rect};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::{Suggestion, Topic};
use crate::tui::theme::Theme;

/// Horizontal gap between pills in the same row.
const PILL_GAP: u16 = 1;
/// Padding inside a pill on each side of the label.
const PILL_PAD: u16 = 1;

/// Position of one pill, relative to the bar's own origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillRect {
    pub x: u16,
    pub row: u16,
    pub width: u16,
}

/// Compute wrapped pill positions for the given labels inside `max_width`.
/// A pill wider than the whole row is placed alone and clipped at render
/// time rather than dropped.
pub fn pill_layout(labels: &[&str], max_width: u16) -> Vec<PillRect> {
    let max_width = max_width.max(1);
    let mut rects = Vec::with_capacity(labels.len());
    let mut x: u16 = 0;
    let mut row: u16 = 0;
    for label in labels {
        let width = label.width() as u16 + PILL_PAD * 2;
        if x > 0 && x + width > max_width {
            row += 1;
            x = 0;
        }
        rects.push(PillRect { x, row, width });
        x += width + PILL_GAP;
    }
    rects
}

/// The pill bar widget. Rendered into a `Buffer` so it can live inside the
/// transcript's scroll view as well as directly on the hero screen.
pub struct SuggestionBar<'a> {
    pub suggestions: &'a [Suggestion],
    /// Index of the keyboard-focused pill, if any.
    pub focused: Option<usize>,
    pub theme: Theme,
}

impl SuggestionBar<'_> {
    /// Rows the bar occupies at the given width.
    pub fn calculate_height(suggestions: &[Suggestion], width: u16) -> u16 {
        if suggestions.is_empty() {
            return 0;
        }
        let labels: Vec<&str> = suggestions.iter().map(|s| s.label).collect();
        pill_layout(&labels, width)
            .last()
            .map(|r| r.row + 1)
            .unwrap_or(0)
    }

    /// The topic of the pill at bar-relative coordinates, if any.
    pub fn hit_test(
        suggestions: &[Suggestion],
        width: u16,
        col: u16,
        row: u16,
    ) -> Option<Topic> {
        let labels: Vec<&str> = suggestions.iter().map(|s| s.label).collect();
        pill_layout(&labels, width)
            .iter()
            .zip(suggestions)
            .find(|(rect, _)| rect.row == row && col >= rect.x && col < rect.x + rect.width)
            .map(|(_, s)| s.topic)
    }
}

impl Widget for SuggestionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<&str> = self.suggestions.iter().map(|s| s.label).collect();
        let rects = pill_layout(&labels, area.width);

        for (i, (rect, suggestion)) in rects.iter().zip(self.suggestions).enumerate() {
            let y = area.y + rect.row;
            if y >= area.y + area.height {
                break;
            }
            let style = if self.focused == Some(i) {
                Style::default()
                    .fg(self.theme.pill_focus_fg)
                    .bg(self.theme.pill_focus_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.pill_fg).bg(self.theme.pill_bg)
            };
            let text = format!(" {} ", suggestion.label);
            buf.set_stringn(
                area.x + rect.x,
                y,
                &text,
                area.width.saturating_sub(rect.x) as usize,
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::INITIAL_SUGGESTIONS;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn suggestions() -> &'static [Suggestion] {
        INITIAL_SUGGESTIONS
    }

    #[test]
    fn test_layout_flows_left_to_right() {
        let rects = pill_layout(&["aa", "bbb"], 40);
        assert_eq!(rects[0], PillRect { x: 0, row: 0, width: 4 });
        assert_eq!(rects[1], PillRect { x: 5, row: 0, width: 5 });
    }

    #[test]
    fn test_layout_wraps_at_max_width() {
        // Each pill is 4 wide plus a 1-column gap; three of them need 14.
        let rects = pill_layout(&["aa", "bb", "cc"], 10);
        assert_eq!(rects[0].row, 0);
        assert_eq!(rects[1].row, 0);
        assert_eq!(rects[2], PillRect { x: 0, row: 1, width: 4 });
    }

    #[test]
    fn test_oversized_pill_gets_its_own_row() {
        let rects = pill_layout(&["short", "a very very long label indeed"], 12);
        assert_eq!(rects[0].row, 0);
        assert_eq!(rects[1].x, 0);
        assert_eq!(rects[1].row, 1);
    }

    #[test]
    fn test_height_counts_rows() {
        assert_eq!(SuggestionBar::calculate_height(suggestions(), 200), 1);
        assert!(SuggestionBar::calculate_height(suggestions(), 30) >= 2);
        assert_eq!(SuggestionBar::calculate_height(&[], 200), 0);
    }

    #[test]
    fn test_hit_test_matches_layout() {
        // All four initial pills on one wide row.
        let topic = SuggestionBar::hit_test(suggestions(), 200, 1, 0);
        assert_eq!(topic, Some(suggestions()[0].topic));

        // First column past the first pill's end is the gap.
        let first_width = suggestions()[0].label.len() as u16 + 2;
        assert_eq!(SuggestionBar::hit_test(suggestions(), 200, first_width, 0), None);
        assert_eq!(
            SuggestionBar::hit_test(suggestions(), 200, first_width + 1, 0),
            Some(suggestions()[1].topic)
        );
    }

    #[test]
    fn test_hit_test_off_rows_misses() {
        assert_eq!(SuggestionBar::hit_test(suggestions(), 200, 1, 5), None);
        assert_eq!(SuggestionBar::hit_test(&[], 200, 0, 0), None);
    }

    #[test]
    fn test_render_shows_labels() {
        let backend = TestBackend::new(120, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let bar = SuggestionBar {
                    suggestions: suggestions(),
                    focused: Some(1),
                    theme: Theme::dark(),
                };
                frame.render_widget(bar, frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Who are you?"));
        assert!(text.contains("What projects have you built?"));
    }

    #[test]
    fn test_focused_pill_uses_focus_colors() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let bar = SuggestionBar {
                    suggestions: &suggestions()[..1],
                    focused: Some(0),
                    theme: Theme::dark(),
                };
                frame.render_widget(bar, frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let cell = buffer.cell((2, 0)).unwrap();
        assert_eq!(cell.style().bg, Some(Theme::dark().pill_focus_bg));
    }
}
