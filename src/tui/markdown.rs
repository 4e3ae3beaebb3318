//! Markdown → ratatui `Text` renderer for reply bodies.
//!
//! The catalog writes chat-style markdown: short paragraphs, `**bold**`
//! labels, bullet rows separated by single newlines, the odd link. This
//! renderer covers that surface (plus lists, inline code and headings for
//! custom catalog data) and nothing more. Fenced code renders as plain
//! dimmed lines; there is no syntax highlighting to do on a portfolio.
//!
//! One deviation from strict CommonMark: soft breaks become real line
//! breaks. Reply bodies use single newlines to separate bullet rows, and
//! collapsing them into spaces would mash those rows together.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Render markdown into styled `Text`, with `base_fg` as the body color.
///
/// Returns owned text (`'static`) so callers aren't tied to the input
/// lifetime.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut writer = Writer::new(base_fg);
    for event in Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH) {
        writer.handle(event);
    }
    writer.text
}

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack. Entries compose via `patch`, so bold inside
    /// italic keeps both modifiers.
    styles: Vec<Style>,
    /// List nesting: `None` for unordered, `Some(n)` for the next ordered
    /// index.
    lists: Vec<Option<u64>>,
    /// Destination of the link currently open, printed after its text.
    link: Option<String>,
    /// A block element just closed; the next one gets a blank row first.
    separate: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: Vec::new(),
            lists: Vec::new(),
            link: None,
            separate: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn open_block(&mut self) {
        if self.separate {
            self.text.lines.push(Line::default());
            self.separate = false;
        }
        self.text.lines.push(Line::default());
    }

    fn span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.text.lines.push(Line::from(span)),
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) => self.open_block(),
            Event::End(TagEnd::Paragraph) => self.separate = true,

            Event::Start(Tag::Heading { level, .. }) => {
                self.open_block();
                self.push_style(heading_style(self.base_fg, level));
            }
            Event::End(TagEnd::Heading(_)) => {
                self.styles.pop();
                self.separate = true;
            }

            Event::Start(Tag::List(start)) => {
                if self.lists.is_empty() && self.separate {
                    self.text.lines.push(Line::default());
                    self.separate = false;
                }
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.lists.pop();
                self.separate = true;
            }
            Event::Start(Tag::Item) => {
                self.text.lines.push(Line::default());
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{indent}{n}. ");
                        *n += 1;
                        m
                    }
                    _ => format!("{indent}- "),
                };
                self.span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
            }
            Event::End(TagEnd::Item) => {}

            // Reply bodies separate bullet rows with single newlines; keep
            // them as rows.
            Event::SoftBreak | Event::HardBreak => self.text.lines.push(Line::default()),

            Event::Start(Tag::Emphasis) => {
                self.push_style(Style::default().add_modifier(Modifier::ITALIC))
            }
            Event::Start(Tag::Strong) => {
                self.push_style(Style::default().add_modifier(Modifier::BOLD))
            }
            Event::Start(Tag::Strikethrough) => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough) => {
                self.styles.pop();
            }

            Event::Start(Tag::Link { dest_url, .. }) => {
                self.link = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            Event::End(TagEnd::Link) => {
                self.styles.pop();
                if let Some(url) = self.link.take() {
                    let url_style = Style::default().fg(Color::Cyan);
                    self.span(Span::raw(" ("));
                    self.span(Span::styled(url, url_style));
                    self.span(Span::raw(")"));
                }
            }

            // No highlighting: fenced code becomes dimmed plain lines.
            Event::Start(Tag::CodeBlock(_)) => {
                if self.separate || !self.text.lines.is_empty() {
                    self.text.lines.push(Line::default());
                    self.separate = false;
                }
                self.push_style(Style::default().fg(self.base_fg).add_modifier(Modifier::DIM));
            }
            Event::End(TagEnd::CodeBlock) => {
                self.styles.pop();
                self.separate = true;
            }

            Event::Text(t) => {
                // Ratatui draws \t as zero-width; expand to spaces.
                let content = if t.contains('\t') {
                    t.replace('\t', "    ")
                } else {
                    t.to_string()
                };
                let style = self.style();
                let mut rows = content.split('\n');
                if let Some(first) = rows.next() {
                    self.span(Span::styled(first.to_string(), style));
                }
                for row in rows {
                    self.text
                        .lines
                        .push(Line::from(Span::styled(row.to_string(), style)));
                }
            }
            Event::Code(code) => {
                self.span(Span::styled(
                    code.to_string(),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ));
            }

            // Blockquotes, rules, HTML and the rest never appear in reply
            // bodies; ignore their tags and let any text through plain.
            _ => {}
        }
    }
}

fn heading_style(base_fg: Color, level: HeadingLevel) -> Style {
    let modifiers = match level {
        HeadingLevel::H1 => Modifier::BOLD | Modifier::UNDERLINED,
        _ => Modifier::BOLD,
    };
    Style::default().fg(base_fg).add_modifier(modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Topic;

    fn plain_lines(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn soft_breaks_become_line_breaks() {
        let text = render("**Key:**\n• first\n• second", Color::Blue);
        assert_eq!(plain_lines(&text), vec!["Key:", "• first", "• second"]);
    }

    #[test]
    fn paragraphs_get_a_blank_separator() {
        let text = render("one\n\ntwo", Color::Blue);
        assert_eq!(plain_lines(&text), vec!["one", "", "two"]);
    }

    #[test]
    fn bold_text_is_bold() {
        let text = render("Some **bold** text", Color::Blue);
        let span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "bold")
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(span.style.fg, Some(Color::Blue));
    }

    #[test]
    fn plain_text_uses_base_color() {
        let text = render("hello", Color::Green);
        assert_eq!(text.lines[0].spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn inline_code_is_highlighted() {
        let text = render("Use `foo()` here", Color::Blue);
        let span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "foo()")
            .unwrap();
        assert_eq!(span.style.fg, Some(Color::White));
        assert_eq!(span.style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn links_print_their_destination() {
        let text = render("[call](https://calendly.com/x)", Color::Blue);
        let line: String = plain_lines(&text).join("");
        assert_eq!(line, "call (https://calendly.com/x)");
        let label = &text.lines[0].spans[0];
        assert!(label.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn list_items_get_markers() {
        let text = render("- one\n- two", Color::Blue);
        let lines = plain_lines(&text);
        assert_eq!(lines, vec!["- one", "- two"]);

        let text = render("1. one\n2. two", Color::Blue);
        assert_eq!(plain_lines(&text), vec!["1. one", "2. two"]);
    }

    #[test]
    fn fenced_code_renders_plain_and_dim() {
        let text = render("```\nlet x = 1;\n```", Color::Blue);
        let lines = plain_lines(&text);
        assert!(lines.iter().any(|l| l.contains("let x = 1;")), "got {lines:?}");
        // No border decorations around the code.
        assert!(lines.iter().all(|l| !l.contains('╭') && !l.contains('│')));
        let dim = text
            .lines
            .iter()
            .flat_map(|l| &l.spans)
            .find(|s| s.content.contains("let x = 1;"))
            .unwrap();
        assert!(dim.style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn tabs_expand_to_spaces() {
        let text = render("```\n\tindented\n```", Color::Blue);
        let lines = plain_lines(&text);
        assert!(lines.iter().any(|l| l.starts_with("    indented")), "got {lines:?}");
    }

    #[test]
    fn heading_text_is_bold() {
        let text = render("## Offer", Color::Blue);
        let span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content.contains("Offer"))
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn catalog_bullet_rows_stay_separate() {
        // The taskflow reply lists features on consecutive soft-broken
        // lines. Each bullet must land on its own rendered row.
        let text = render(Topic::Taskflow.reply().body, Color::Gray);
        let lines = plain_lines(&text);
        let bullets = lines.iter().filter(|l| l.starts_with('•')).count();
        assert_eq!(bullets, 4, "got lines {lines:#?}");
    }

    #[test]
    fn every_catalog_body_renders_nonempty() {
        for topic in Topic::ALL {
            let text = render(topic.reply().body, Color::Gray);
            assert!(
                text.lines.iter().any(|l| !l.spans.is_empty()),
                "{} rendered empty",
                topic.key()
            );
        }
    }
}
