use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::core::catalog::Topic;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HeaderBar, HeroScreen, Transcript, hero, input_box, transcript};
use crate::tui::theme::Theme;

/// Animation frames per hint shimmer cycle.
const PULSE_PERIOD: usize = 20;

fn pulse(tick: usize) -> f32 {
    (tick % PULSE_PERIOD) as f32 / PULSE_PERIOD as f32
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let theme = Theme::of(app.dark_mode);
    tui.input_box.theme = theme;
    tui.input_box.placeholder = if app.messages.is_empty() {
        String::from(input_box::HERO_PLACEHOLDER)
    } else {
        format!("Message {}...", app.persona)
    };

    // Theme background under everything.
    frame.render_widget(
        Block::new().style(Style::default().bg(theme.bg).fg(theme.text)),
        frame.area(),
    );

    let input_height = tui.input_box.calculate_height(frame.area().width);
    let layout = Layout::vertical([Length(1), Min(0), Length(input_height)]);
    let [header_area, main_area, input_area] = layout.areas(frame.area());

    // Main area first: it refreshes the unseen marker the header reads.
    if app.messages.is_empty() {
        HeroScreen {
            headline_prefix: &app.headline_prefix,
            headline_word: app.headline_word(),
            avatar: &tui.avatar_art,
            focused: tui.pill_focus,
            pulse_value: pulse(tui.animation_tick),
            theme,
        }
        .render(frame, main_area);
        tui.transcript.has_unseen_content = false;
    } else {
        Transcript {
            state: &mut tui.transcript,
            messages: &app.messages,
            persona: &app.persona,
            composing: app.composing,
            focused_pill: tui.pill_focus,
            spinner_frame: tui.animation_tick,
            now: Utc::now(),
            theme,
        }
        .render(frame, main_area);
    }

    HeaderBar {
        persona: app.persona.clone(),
        status_message: app.status_message.clone(),
        conversation_active: !app.messages.is_empty() || app.composing,
        dark_mode: app.dark_mode,
        has_unseen_content: tui.transcript.has_unseen_content,
        theme,
    }
    .render(frame, header_area);

    tui.input_box.render(frame, input_area);
}

/// Map a mouse click to the suggestion pill under it, if any. Recomputes the
/// same layout split as `draw_ui`, so the click path tracks the paint path.
pub fn hit_test_pill(
    app: &App,
    tui: &TuiState,
    frame_area: Rect,
    col: u16,
    row: u16,
) -> Option<Topic> {
    use Constraint::{Length, Min};

    let input_height = tui.input_box.calculate_height(frame_area.width);
    let layout = Layout::vertical([Length(1), Min(0), Length(input_height)]);
    let [_header_area, main_area, _input_area] = layout.areas(frame_area);

    if !main_area.contains(Position::new(col, row)) {
        return None;
    }

    if app.messages.is_empty() {
        return hero::pill_hit(&tui.avatar_art, main_area, col, row);
    }

    // The transcript reserves the rightmost column for the scrollbar.
    let content_width = main_area.width.saturating_sub(1);
    if col >= main_area.x + content_width {
        return None;
    }
    let content_y = (row - main_area.y).saturating_add(tui.transcript.scroll_state.offset().y);
    transcript::pill_at(&app.messages, content_width, col - main_area.x, content_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use crate::tui::components::avatar;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn test_tui() -> TuiState {
        TuiState::new(Theme::dark(), avatar::load(None))
    }

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    /// Screen coordinates of the first cell of `needle` in the buffer.
    fn find_in_buffer(buffer: &ratatui::buffer::Buffer, needle: &str) -> (u16, u16) {
        let width = buffer.area.width;
        for y in 0..buffer.area.height {
            let row: String = (0..width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol())
                .collect();
            if let Some(byte_x) = row.find(needle) {
                let x = row[..byte_x].chars().count() as u16;
                return (x, y);
            }
        }
        panic!("{needle:?} not found in buffer");
    }

    #[test]
    fn test_empty_conversation_shows_hero() {
        let app = test_app();
        let mut tui = test_tui();
        let text = buffer_text(&draw(&app, &mut tui, 100, 30));

        assert!(text.contains("Alex Portfolio"));
        assert!(text.contains("I build lovable"));
        assert!(text.contains("Who are you?"));
        assert!(text.contains("What do you want to know?"));
    }

    #[test]
    fn test_conversation_shows_transcript() {
        let mut app = test_app();
        update(&mut app, Action::Submit("who are you?".to_string()));
        update(&mut app, Action::ReplyReady(Topic::About));

        let mut tui = test_tui();
        let text = buffer_text(&draw(&app, &mut tui, 100, 40));

        assert!(text.contains("you"), "visitor bubble title");
        assert!(text.contains("alex"), "reply bubble title");
        assert!(text.contains("Message Alex..."), "composer placeholder follows the persona");
        // Hero headline is gone once the conversation starts.
        assert!(!text.contains("I build lovable"));
    }

    #[test]
    fn test_hero_pill_click_resolves_topic() {
        let app = test_app();
        let mut tui = test_tui();
        let buffer = draw(&app, &mut tui, 100, 30);

        let (x, y) = find_in_buffer(&buffer, "Who are you?");
        let topic = hit_test_pill(&app, &tui, buffer.area, x, y);
        assert_eq!(topic, Some(Topic::About));
    }

    #[test]
    fn test_transcript_pill_click_resolves_topic() {
        let mut app = test_app();
        update(&mut app, Action::Submit("who are you?".to_string()));
        update(&mut app, Action::ReplyReady(Topic::About));

        let mut tui = test_tui();
        // Tall viewport: everything fits, scroll offset stays zero.
        let buffer = draw(&app, &mut tui, 120, 50);

        let (x, y) = find_in_buffer(&buffer, "What's your background?");
        let topic = hit_test_pill(&app, &tui, buffer.area, x, y);
        assert_eq!(topic, Some(Topic::Background));
    }

    #[test]
    fn test_clicks_outside_main_area_miss() {
        let app = test_app();
        let tui = test_tui();
        let frame_area = Rect::new(0, 0, 100, 30);

        // Header row and input rows are not pill territory.
        assert_eq!(hit_test_pill(&app, &tui, frame_area, 10, 0), None);
        assert_eq!(hit_test_pill(&app, &tui, frame_area, 10, 29), None);
    }
}
