//! # Color Themes
//!
//! Dark and light palettes for every painted surface. Components never name
//! raw colors; they take a `Theme` prop and read roles off it, so a theme
//! toggle is just swapping which palette gets passed down.

use ratatui::style::Color;

/// One resolved palette. Copy-sized so it can be passed by value into
/// every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Whole-screen background.
    pub bg: Color,
    /// Raised panels (typing indicator bubble).
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (status line, captions).
    pub text_muted: Color,
    /// Tertiary text (timestamps, placeholders).
    pub text_subtle: Color,
    /// Default borders.
    pub border: Color,
    /// Brand color (headline word, focus states, unseen marker).
    pub accent: Color,
    /// Border of the visitor's bubbles.
    pub visitor_bubble: Color,
    /// Border of the assistant's bubbles.
    pub assistant_bubble: Color,
    /// Suggestion pill fill.
    pub pill_bg: Color,
    /// Suggestion pill text.
    pub pill_fg: Color,
    /// Focused suggestion pill fill.
    pub pill_focus_bg: Color,
    /// Focused suggestion pill text.
    pub pill_focus_fg: Color,
    /// Avatar tint.
    pub avatar: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(3, 7, 18),
            surface: Color::Rgb(17, 24, 39),
            text: Color::Rgb(243, 244, 246),
            text_muted: Color::Rgb(156, 163, 175),
            text_subtle: Color::Rgb(107, 114, 128),
            border: Color::Rgb(31, 41, 55),
            accent: Color::Rgb(37, 99, 235),
            visitor_bubble: Color::Rgb(37, 99, 235),
            assistant_bubble: Color::Rgb(55, 65, 81),
            pill_bg: Color::Rgb(31, 41, 55),
            pill_fg: Color::Rgb(243, 244, 246),
            pill_focus_bg: Color::Rgb(37, 99, 235),
            pill_focus_fg: Color::Rgb(255, 255, 255),
            avatar: Color::Rgb(255, 219, 0),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(249, 250, 251),
            text: Color::Rgb(17, 24, 39),
            text_muted: Color::Rgb(75, 85, 99),
            text_subtle: Color::Rgb(107, 114, 128),
            border: Color::Rgb(229, 231, 235),
            accent: Color::Rgb(37, 99, 235),
            visitor_bubble: Color::Rgb(37, 99, 235),
            assistant_bubble: Color::Rgb(209, 213, 219),
            pill_bg: Color::Rgb(229, 231, 235),
            pill_fg: Color::Rgb(17, 24, 39),
            pill_focus_bg: Color::Rgb(37, 99, 235),
            pill_focus_fg: Color::Rgb(255, 255, 255),
            avatar: Color::Rgb(202, 138, 4),
        }
    }

    /// Palette for the given mode flag.
    pub fn of(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_selects_palette() {
        assert_eq!(Theme::of(true), Theme::dark());
        assert_eq!(Theme::of(false), Theme::light());
    }

    #[test]
    fn test_palettes_differ_where_it_matters() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark.bg, light.bg);
        assert_ne!(dark.text, light.text);
        // The brand color is shared across modes.
        assert_eq!(dark.accent, light.accent);
    }
}
