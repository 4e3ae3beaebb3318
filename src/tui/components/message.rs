use chrono::{DateTime, Utc};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::state::{Author, Message};
use crate::core::timestamp;
use crate::tui::markdown;
use crate::tui::theme::Theme;

/// Share of the item width a bubble may occupy, leaving the other side open
/// so visitor and assistant messages read as two columns.
const BUBBLE_WIDTH_PERCENT: u16 = 78;
/// Bubbles never shrink below this, even on narrow terminals.
const MIN_BUBBLE_WIDTH: u16 = 20;
/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// The timestamp line rendered under the bubble.
const TIMESTAMP_ROWS: u16 = 1;

/// A stateless component that renders one transcript message: the bordered
/// bubble plus the timestamp line beneath it.
///
/// # Design
///
/// `MessageBubble` is a **transient component**: created fresh each frame
/// with the data it needs. Visitor bubbles anchor to the right edge,
/// assistant bubbles to the left, and assistant bodies go through the
/// markdown renderer.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph` wrapping.
/// The parent transcript uses it to lay out the scroll canvas without
/// rendering anything.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
    /// Portfolio owner's name, lowercased into the assistant bubble title.
    pub persona: &'a str,
    /// Reference instant for the relative timestamp.
    pub now: DateTime<Utc>,
    pub theme: Theme,
}

impl MessageBubble<'_> {
    /// Bubble width for a given item width.
    pub fn bubble_width(width: u16) -> u16 {
        let scaled = (width as u32 * BUBBLE_WIDTH_PERCENT as u32 / 100) as u16;
        scaled.max(MIN_BUBBLE_WIDTH).min(width.max(1))
    }

    /// Rows this message needs at the given item width, timestamp included.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = Self::bubble_width(width).saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1 + TIMESTAMP_ROWS;
        }

        let rows: u16 = body_text(message, Style::default())
            .lines
            .iter()
            .map(|line| {
                let plain: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                wrapped_rows(&plain, content_width)
            })
            .sum();
        rows.max(1) + VERTICAL_OVERHEAD + TIMESTAMP_ROWS
    }
}

/// How many rows one logical line occupies after wrapping. Must agree with
/// `Paragraph` + `Wrap { trim: true }`.
fn wrapped_rows(line: &str, width: u16) -> u16 {
    if line.trim().is_empty() {
        return 1;
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    (textwrap::wrap(line, options).len() as u16).max(1)
}

/// The styled body: markdown for the assistant, literal text for the
/// visitor. The base style carries the theme's text color at render time
/// and stays default during height measurement, where only the line
/// structure matters.
fn body_text(message: &Message, base: Style) -> Text<'static> {
    match message.author {
        Author::Assistant => {
            markdown::render(&message.body, base.fg.unwrap_or_default())
        }
        Author::Visitor => {
            let lines: Vec<Line<'static>> = message
                .body
                .lines()
                .map(|l| Line::styled(l.to_string(), base))
                .collect();
            Text::from(lines)
        }
    }
}

impl Widget for MessageBubble<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let theme = self.theme;
        let bubble_width = Self::bubble_width(area.width);
        let bubble_height = area.height.saturating_sub(TIMESTAMP_ROWS);

        let (x, title, border_color) = match self.message.author {
            Author::Visitor => (
                area.x + area.width.saturating_sub(bubble_width),
                "you".to_string(),
                theme.visitor_bubble,
            ),
            Author::Assistant => {
                (area.x, self.persona.to_lowercase(), theme.assistant_bubble)
            }
        };
        let bubble_area = Rect::new(x, area.y, bubble_width, bubble_height);

        let border_style = Style::default().fg(border_color);
        let block = Block::bordered()
            .title(title)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(bubble_area);
        block.render(bubble_area, buf);

        let body = body_text(self.message, Style::default().fg(theme.text));
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);

        if area.height > bubble_height {
            let stamp = timestamp::format_relative(self.message.created_at, self.now);
            let line = Line::styled(stamp, Style::default().fg(theme.text_subtle));
            let stamp_area = Rect::new(x, area.y + bubble_height, bubble_width, TIMESTAMP_ROWS);
            let paragraph = match self.message.author {
                Author::Visitor => Paragraph::new(line).right_aligned(),
                Author::Assistant => Paragraph::new(line),
            };
            paragraph.render(stamp_area, buf);
        }
    }
}
