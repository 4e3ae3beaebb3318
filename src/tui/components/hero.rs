//! # Hero Screen
//!
//! What a visitor sees before the first message: the avatar, the animated
//! headline and the initial prompt pills, stacked and centered in the main
//! area. Replaced by the transcript as soon as a conversation starts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::core::catalog::{INITIAL_SUGGESTIONS, Topic};
use crate::tui::component::Component;
use crate::tui::components::avatar::{self, Avatar};
use crate::tui::components::suggestions::SuggestionBar;
use crate::tui::theme::Theme;

/// Widest the pill row is allowed to get, so prompts stay visually grouped
/// on large terminals.
const MAX_PILL_WIDTH: u16 = 64;

/// Headline gradient endpoints (blue to purple).
const GRADIENT_FROM: (u8, u8, u8) = (37, 99, 235);
const GRADIENT_TO: (u8, u8, u8) = (147, 51, 234);

pub struct HeroScreen<'a> {
    pub headline_prefix: &'a str,
    pub headline_word: &'a str,
    pub avatar: &'a str,
    /// Keyboard-focused pill, if the visitor is tabbing through prompts.
    pub focused: Option<usize>,
    /// Animation phase in `0.0..=1.0`, drives the hint shimmer.
    pub pulse_value: f32,
    pub theme: Theme,
}

struct HeroRegions {
    avatar: Rect,
    headline: Rect,
    pills: Rect,
    hint: Rect,
}

/// Vertical stack, centered as a group. Rendering and hit-testing both go
/// through here so mouse clicks can't drift from what's on screen.
fn regions(area: Rect, avatar_height: u16) -> HeroRegions {
    let pill_width = area.width.saturating_sub(4).clamp(1, MAX_PILL_WIDTH);
    let pills_height = SuggestionBar::calculate_height(INITIAL_SUGGESTIONS, pill_width);

    let chunks = Layout::vertical([
        Constraint::Length(avatar_height),
        Constraint::Length(1),
        Constraint::Length(2), // headline prefix + rotating word
        Constraint::Length(1),
        Constraint::Length(pills_height),
        Constraint::Length(1),
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    let pills_row = chunks[4];
    let x = pills_row.x + pills_row.width.saturating_sub(pill_width) / 2;
    let pills = Rect::new(x, pills_row.y, pill_width.min(pills_row.width), pills_row.height);

    HeroRegions {
        avatar: chunks[0],
        headline: chunks[2],
        pills,
        hint: chunks[6],
    }
}

/// The topic of the initial pill at screen coordinates, if the click landed
/// on one.
pub fn pill_hit(avatar_art: &str, area: Rect, col: u16, row: u16) -> Option<Topic> {
    let regions = regions(area, avatar::height(avatar_art));
    let pills = regions.pills;
    if col < pills.x || row < pills.y || row >= pills.y + pills.height {
        return None;
    }
    SuggestionBar::hit_test(INITIAL_SUGGESTIONS, pills.width, col - pills.x, row - pills.y)
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Per-character color sweep across the rotating word.
fn gradient_line(word: &str) -> Line<'static> {
    let chars: Vec<char> = word.chars().collect();
    let last = chars.len().saturating_sub(1).max(1) as f32;
    let spans: Vec<Span<'static>> = chars
        .iter()
        .enumerate()
        .map(|(i, ch)| {
            let t = i as f32 / last;
            let color = Color::Rgb(
                lerp(GRADIENT_FROM.0, GRADIENT_TO.0, t),
                lerp(GRADIENT_FROM.1, GRADIENT_TO.1, t),
                lerp(GRADIENT_FROM.2, GRADIENT_TO.2, t),
            );
            Span::styled(
                ch.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

impl Component for HeroScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let regions = regions(area, avatar::height(self.avatar));

        frame.render_widget(Avatar { art: self.avatar, theme }, regions.avatar);

        let headline = Text::from(vec![
            Line::styled(
                self.headline_prefix.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            gradient_line(self.headline_word),
        ]);
        frame.render_widget(Paragraph::new(headline).centered(), regions.headline);

        frame.render_widget(
            SuggestionBar {
                suggestions: INITIAL_SUGGESTIONS,
                focused: self.focused,
                theme,
            },
            regions.pills,
        );

        // Shimmer between the two muted tones while the screen idles.
        let hint_color = if self.pulse_value > 0.5 {
            theme.text_muted
        } else {
            theme.text_subtle
        };
        frame.render_widget(
            Paragraph::new(Line::styled(
                "Type below, or pick a prompt (Tab to cycle)",
                Style::default().fg(hint_color),
            ))
            .centered(),
            regions.hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn hero(avatar: &str) -> HeroScreen<'_> {
        HeroScreen {
            headline_prefix: "I build lovable",
            headline_word: "apps",
            avatar,
            focused: None,
            pulse_value: 0.0,
            theme: Theme::dark(),
        }
    }

    /// Render into a buffer and return one String per row.
    fn draw_rows(width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                hero(avatar::DEFAULT_ART).render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_hero_shows_headline_and_prompts() {
        let rows = draw_rows(80, 24);
        let all = rows.join("\n");
        assert!(all.contains("I build lovable"));
        assert!(all.contains("apps"));
        assert!(all.contains("Who are you?"));
        assert!(all.contains("Can we work together?"));
        assert!(all.contains("pick a prompt"));
    }

    #[test]
    fn test_pill_hit_matches_rendered_position() {
        let area = Rect::new(0, 0, 80, 24);
        let rows = draw_rows(80, 24);

        let (row, col) = rows
            .iter()
            .enumerate()
            .find_map(|(y, line)| line.find("Who are you?").map(|x| (y as u16, x as u16)))
            .expect("first pill should be on screen");

        assert_eq!(pill_hit(avatar::DEFAULT_ART, area, col, row), Some(Topic::About));
        // One row above the pills is empty space.
        assert_eq!(pill_hit(avatar::DEFAULT_ART, area, col, row.saturating_sub(1)), None);
    }

    #[test]
    fn test_every_initial_pill_is_clickable() {
        let area = Rect::new(0, 0, 80, 24);
        let rows = draw_rows(80, 24);

        for suggestion in INITIAL_SUGGESTIONS {
            let (row, col) = rows
                .iter()
                .enumerate()
                .find_map(|(y, line)| line.find(suggestion.label).map(|x| (y as u16, x as u16)))
                .unwrap_or_else(|| panic!("{} not rendered", suggestion.label));
            assert_eq!(
                pill_hit(avatar::DEFAULT_ART, area, col, row),
                Some(suggestion.topic),
                "click on {} resolved wrong",
                suggestion.label
            );
        }
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                hero(avatar::DEFAULT_ART).render(f, f.area());
            })
            .unwrap();
    }

    #[test]
    fn test_gradient_spans_one_per_char() {
        let line = gradient_line("apps");
        assert_eq!(line.spans.len(), 4);
        // Endpoints hit the configured gradient colors.
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(37, 99, 235)));
        assert_eq!(line.spans[3].style.fg, Some(Color::Rgb(147, 51, 234)));
    }
}
