//! # Transcript Component
//!
//! Scrollable view of the conversation history.
//!
//! ## Responsibilities
//!
//! - Display message bubbles with their timestamps and suggestion pills
//! - Show the typing indicator while a reply is pending
//! - Manage scrolling specific logic (stick-to-bottom, unseen marker)
//! - Hit testing for mouse clicks on pills
//! - Perform efficient layout caching (item heights)
//!
//! ## Architecture
//!
//! `Transcript` is a transient component (created each frame) that wraps
//! `&'a mut TranscriptState` (persistent state) and the message slice
//! (props). Since `Component::render` takes `&mut self`, the layout cache
//! and scroll state can be updated during the render pass, aligning with
//! Ratatui's `StatefulWidget` pattern.
//!
//! Messages never mutate after they are appended, so cached heights stay
//! valid until the width changes or the transcript is cleared.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Topic;
use crate::core::state::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::components::suggestions::SuggestionBar;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Blank rows between transcript items.
const ITEM_GAP: u16 = 1;
/// Pills sit slightly inset under their message, like a reply thread.
const PILL_INDENT: u16 = 2;
/// Rows the typing indicator occupies (bubble + caption).
const TYPING_HEIGHT: u16 = 4;
/// Width of the typing indicator bubble: three dots with gaps plus borders.
const TYPING_BUBBLE_WIDTH: u16 = 9;

/// Layout and scroll state for the transcript.
/// Must be persisted in the parent TuiState.
pub struct TranscriptState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// True when content exists below the current scroll position.
    /// Feeds the header's "↓ new" marker.
    pub has_unseen_content: bool,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            has_unseen_content: false,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last message.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the bottom.
    /// Called on scroll-down events so that scrolling past the end re-pins to bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Per-item breakdown: the bubble (timestamp included) and the pill rows
/// under it. The gap row is added on top of these.
struct ItemMetrics {
    bubble: u16,
    pills: u16,
}

fn item_metrics(message: &Message, content_width: u16) -> ItemMetrics {
    let bubble = MessageBubble::calculate_height(message, content_width);
    let pills = match message.suggestions {
        Some(suggestions) => {
            SuggestionBar::calculate_height(suggestions, pill_width(content_width))
        }
        None => 0,
    };
    ItemMetrics { bubble, pills }
}

/// Total rows one transcript item occupies, including the trailing gap.
pub fn item_height(message: &Message, content_width: u16) -> u16 {
    let metrics = item_metrics(message, content_width);
    metrics.bubble + metrics.pills + ITEM_GAP
}

fn pill_width(content_width: u16) -> u16 {
    content_width.saturating_sub(PILL_INDENT).max(1)
}

/// Find the suggestion pill at canvas coordinates, walking the same layout
/// math the render pass uses. `content_y` is in canvas space (scroll offset
/// already applied by the caller).
pub fn pill_at(
    messages: &[Message],
    content_width: u16,
    col: u16,
    content_y: u16,
) -> Option<Topic> {
    let mut top = 0u16;
    for message in messages {
        let metrics = item_metrics(message, content_width);
        let height = metrics.bubble + metrics.pills + ITEM_GAP;
        if content_y < top + height {
            let local_y = content_y - top;
            let in_pill_rows =
                local_y >= metrics.bubble && local_y < metrics.bubble + metrics.pills;
            if in_pill_rows
                && col >= PILL_INDENT
                && let Some(suggestions) = message.suggestions
            {
                return SuggestionBar::hit_test(
                    suggestions,
                    pill_width(content_width),
                    col - PILL_INDENT,
                    local_y - metrics.bubble,
                );
            }
            return None;
        }
        top += height;
    }
    None
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct Transcript<'a> {
    // Mutable reference to persistent state
    pub state: &'a mut TranscriptState,
    pub messages: &'a [Message],
    pub persona: &'a str,
    /// True while a reply is pending; shows the typing indicator.
    pub composing: bool,
    /// Keyboard focus within the newest reply's pills.
    pub focused_pill: Option<usize>,
    pub spinner_frame: usize,
    pub now: DateTime<Utc>,
    pub theme: Theme,
}

impl Component for Transcript<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let num_items = self.messages.len();

        // 1. Update Layout Cache (Internal Mutation)
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(num_items, content_width);
        layout.heights.truncate(reusable.min(layout.heights.len()));
        for message in self.messages.iter().skip(layout.heights.len()) {
            layout.heights.push(item_height(message, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(num_items, content_width);

        let total_height = self.state.layout.total_height();

        // While composing, the typing indicator extends the canvas so
        // scroll_to_bottom leaves room for it under the last message.
        let canvas_height = if self.composing {
            total_height.saturating_add(TYPING_HEIGHT)
        } else {
            total_height
        };

        // 2. Clamp scroll offset to prevent overscrolling past content.
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        // When pinned, cull against the offset the pin will land on, not the
        // stale one; a resize can move the bottom a long way in one frame.
        let scroll_offset = if self.state.stick_to_bottom {
            canvas_height.saturating_sub(area.height)
        } else {
            self.state.scroll_state.offset().y
        };
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible items into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // The newest message with suggestions owns the keyboard focus.
        let focus_index = self.messages.iter().rposition(|m| m.suggestions.is_some());

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let message = &self.messages[i];
            let metrics = item_metrics(message, content_width);

            let bubble_rect = Rect::new(0, y_offset, content_width, metrics.bubble);
            scroll_view.render_widget(
                MessageBubble {
                    message,
                    persona: self.persona,
                    now: self.now,
                    theme: self.theme,
                },
                bubble_rect,
            );

            if metrics.pills > 0
                && let Some(suggestions) = message.suggestions
            {
                let focused = if focus_index == Some(i) {
                    self.focused_pill
                } else {
                    None
                };
                let pills_rect = Rect::new(
                    PILL_INDENT,
                    y_offset + metrics.bubble,
                    pill_width(content_width),
                    metrics.pills,
                );
                scroll_view.render_widget(
                    SuggestionBar {
                        suggestions,
                        focused,
                        theme: self.theme,
                    },
                    pills_rect,
                );
            }

            y_offset += self.state.layout.heights[i];
        }

        if self.composing {
            let typing_rect = Rect::new(0, total_height, content_width, TYPING_HEIGHT);
            scroll_view.render_widget(
                TypingIndicator {
                    spinner_frame: self.spinner_frame,
                    theme: self.theme,
                },
                typing_rect,
            );
        }

        // Auto-scroll logic (Mutation)
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        // Render the ScrollView into the full viewport area
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        // Update auxiliary state. The offset is read back after rendering,
        // once the scroll view has clamped it to the canvas.
        let offset = self.state.scroll_state.offset().y;
        let max_offset = canvas_height.saturating_sub(area.height);
        self.state.has_unseen_content = offset < max_offset;
    }
}

/// EventHandler is implemented on `TranscriptState` rather than `Transcript`
/// because event handling requires persistent state (scroll position,
/// stick_to_bottom flag), and the component itself is recreated each frame.
impl EventHandler for TranscriptState {
    type Event = (); // Transcript currently emits no events (scroll handled internally)

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollToTop => {
                let current = self.scroll_state.offset();
                self.scroll_state.set_offset(Position { x: current.x, y: 0 });
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
                self.scroll_state.scroll_to_bottom();
                None
            }
            // Mouse clicks handled by the parent via pill_at hit testing
            _ => None,
        }
    }
}

/// Three pulsing dots in a small assistant-side bubble with a caption,
/// shown while a reply is "being typed".
struct TypingIndicator {
    spinner_frame: usize,
    theme: Theme,
}

impl Widget for TypingIndicator {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let theme = self.theme;
        let bubble_area = Rect::new(
            area.x,
            area.y,
            TYPING_BUBBLE_WIDTH.min(area.width),
            (TYPING_HEIGHT - 1).min(area.height),
        );

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.assistant_bubble));
        let inner = block.inner(bubble_area);
        block.render(bubble_area, buf);

        let active = self.spinner_frame % 3;
        let dots: Vec<Span> = (0..3)
            .flat_map(|i| {
                let style = if i == active {
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_subtle)
                };
                [Span::styled("●", style), Span::raw(" ")]
            })
            .collect();
        Paragraph::new(Line::from(dots)).render(inner, buf);

        if area.height >= TYPING_HEIGHT {
            let caption_area = Rect::new(area.x + 1, area.y + TYPING_HEIGHT - 1, area.width, 1);
            Paragraph::new(Line::styled(
                "Typing...",
                Style::default().fg(theme.text_subtle),
            ))
            .render(caption_area, buf);
        }
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    message_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            message_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights are still valid. Transcript items are
    /// immutable once appended, so everything cached survives unless the
    /// width changed or the transcript shrank (reset).
    pub fn reusable_count(&self, message_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || self.heights.is_empty() {
            return 0;
        }
        if message_count < self.message_count {
            return 0;
        }
        self.heights.len()
    }

    pub fn update_metadata(&mut self, message_count: usize, content_width: u16) {
        self.message_count = message_count;
        self.content_width = content_width;
    }

    /// Canvas rows all items occupy together. Saturates at `u16::MAX`
    /// rather than overflowing on an absurdly long transcript.
    pub fn total_height(&self) -> u16 {
        self.heights.iter().fold(0, |acc, &h| acc.saturating_add(h))
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    /// Items overlapping the viewport, padded by half a screen on each side
    /// so a fast scroll never reveals an unrendered gap.
    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}
