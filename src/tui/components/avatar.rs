//! The portfolio owner's face, in ASCII.
//!
//! A built-in smiley ships in the binary; `avatar_file` in the config swaps
//! in custom art. Loading is forgiving: anything unreadable or empty falls
//! back to the built-in face so the hero screen never renders blank.

use log::warn;
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Widget};
use ratatui::{buffer::Buffer, layout::Rect};
use std::fs;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

pub const DEFAULT_ART: &str = r"  .-~~~~~-.
 /  _   _  \
|   o   o   |
|     L     |
 \  \___/  /
  `-.___.-'";

/// Load avatar art, falling back to [`DEFAULT_ART`] when the file is
/// missing, unreadable or blank.
pub fn load(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return DEFAULT_ART.to_string();
    };
    match fs::read_to_string(path) {
        Ok(contents) => {
            let art = contents.trim_end().to_string();
            if art.trim().is_empty() {
                warn!("Avatar file {} is empty, using built-in art", path.display());
                DEFAULT_ART.to_string()
            } else {
                art
            }
        }
        Err(e) => {
            warn!("Could not read avatar file {}: {}", path.display(), e);
            DEFAULT_ART.to_string()
        }
    }
}

/// Height of the art in terminal rows.
pub fn height(art: &str) -> u16 {
    art.lines().count() as u16
}

/// Width of the art's widest row in terminal columns.
pub fn width(art: &str) -> u16 {
    art.lines().map(|l| l.width() as u16).max().unwrap_or(0)
}

/// Renders the art centered in its area, tinted with the theme's avatar
/// color.
pub struct Avatar<'a> {
    pub art: &'a str,
    pub theme: Theme,
}

impl Widget for Avatar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.art.lines().map(Line::from).collect();
        Paragraph::new(Text::from(lines))
            .style(Style::default().fg(self.theme.avatar))
            .centered()
            .render(area, buf);
    }
}
