//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, native)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (hero screen, typing indicator): draws every ~80ms for
//!   smooth animation.
//! - **Idle** (conversation, no input): sleeps up to 500ms, only redraws on
//!   events, terminal resize, or the periodic timestamp refresh.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
pub mod markdown;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Topic;
use crate::core::config::ResolvedConfig;
use crate::core::prefs::{self, PrefStore};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TranscriptState, avatar};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// Relative timestamps ("2m ago") go stale even when nothing happens.
const STAMP_REFRESH: Duration = Duration::from_secs(30);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub transcript: TranscriptState,
    pub input_box: InputBox,
    // Keyboard focus within the visible suggestion pills (Tab to cycle)
    pub pill_focus: Option<usize>,
    // Animation state
    pub animation_tick: usize,
    // ASCII portrait, loaded once at startup
    pub avatar_art: String,
}

impl TuiState {
    pub fn new(theme: Theme, avatar_art: String) -> Self {
        Self {
            transcript: TranscriptState::new(),
            input_box: InputBox::new(theme),
            pill_focus: None,
            animation_tick: 0,
            avatar_art,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable Kitty keyboard protocol unconditionally. Detection via
        // supports_keyboard_enhancement() fails in WSL, but the protocol is
        // harmlessly ignored by terminals that don't support it.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Deliver the reply for `topic` after the configured thinking delay.
/// The returned handle aborts the timer when the conversation is reset
/// before the reply lands.
pub fn spawn_reply(
    topic: Topic,
    delay: Duration,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Scheduling reply for '{}' in {:?}", topic.key(), delay);
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Action::ReplyReady(topic)).is_err() {
            warn!("Failed to deliver reply: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Dispatch a composer draft to the reducer. Returns the topic to schedule
/// on success; a dropped submission (reply still pending) hands the draft
/// back to the composer so nothing the visitor typed is lost.
fn submit_draft(app: &mut App, input_box: &mut InputBox, text: String) -> Option<Topic> {
    match update(app, Action::Submit(text.clone())) {
        Effect::ScheduleReply(topic) => Some(topic),
        _ => {
            input_box.set_text(text);
            None
        }
    }
}

pub fn run(config: ResolvedConfig, mut prefs: Box<dyn PrefStore>, dark_mode: bool) -> std::io::Result<()> {
    let mut app = App::from_config(&config, dark_mode);
    let avatar_art = avatar::load(config.avatar_file.as_deref());
    let mut tui = TuiState::new(Theme::of(dark_mode), avatar_art);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight reply timer (used by reset-while-composing)
    let mut pending_reply: Option<tokio::task::AbortHandle> = None;

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut last_draw = Instant::now();
    let mut last_headline_tick = Instant::now();

    loop {
        // Animations run on the hero screen and while a reply is pending
        let animating = app.composing || app.messages.is_empty();
        if animating {
            needs_redraw = true;
        }

        // Rotate the headline word while the hero screen is up
        if app.messages.is_empty() && last_headline_tick.elapsed() >= config.headline_interval {
            update(&mut app, Action::HeadlineTick);
            last_headline_tick = Instant::now();
        }

        // Relative timestamps age; refresh them even on an idle conversation
        if last_draw.elapsed() >= STAMP_REFRESH {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.animation_tick = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
            last_draw = Instant::now();
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Ctrl+R clears the conversation from anywhere
            if matches!(event, TuiEvent::Reset) {
                let effect = update(&mut app, Action::Reset);
                if effect == Effect::CancelReply
                    && let Some(handle) = pending_reply.take()
                {
                    handle.abort();
                }
                tui.transcript = TranscriptState::new();
                tui.pill_focus = None;
                // The hero is back; give its first word a full interval
                last_headline_tick = Instant::now();
                continue;
            }

            // Ctrl+T toggles the theme and persists the choice
            if matches!(event, TuiEvent::ToggleTheme) {
                if let Effect::PersistDarkMode(dark) = update(&mut app, Action::ToggleDarkMode) {
                    prefs::store_dark_mode(prefs.as_mut(), dark);
                }
                continue;
            }

            // Mouse click — pick the suggestion pill under the cursor
            if let TuiEvent::MouseClick(col, row) = event {
                let frame_area = terminal.get_frame().area();
                if let Some(topic) = ui::hit_test_pill(&app, &tui, frame_area, col, row)
                    && let Effect::FillInput(text) =
                        update(&mut app, Action::PickSuggestion(topic))
                {
                    tui.input_box.set_text(text);
                    tui.pill_focus = None;
                }
                continue;
            }

            // Scroll events always go to the transcript
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
                    | TuiEvent::ScrollToTop
                    | TuiEvent::ScrollToBottom
            ) {
                tui.transcript.handle_event(&event);
                continue;
            }

            // Up/Down scroll the transcript while the composer is empty
            if matches!(event, TuiEvent::CursorUp | TuiEvent::CursorDown)
                && tui.input_box.buffer.is_empty()
            {
                let scroll = if matches!(event, TuiEvent::CursorUp) {
                    TuiEvent::ScrollUp
                } else {
                    TuiEvent::ScrollDown
                };
                tui.transcript.handle_event(&scroll);
                continue;
            }

            // Tab / Shift+Tab cycle the visible suggestion pills
            if matches!(event, TuiEvent::NextSuggestion | TuiEvent::PrevSuggestion) {
                let pills = app.active_suggestions();
                tui.pill_focus = if pills.is_empty() {
                    None
                } else {
                    let len = pills.len();
                    Some(match (&event, tui.pill_focus) {
                        (TuiEvent::NextSuggestion, None) => 0,
                        (TuiEvent::NextSuggestion, Some(i)) => (i + 1) % len,
                        (_, None) => len - 1,
                        (_, Some(i)) => (i + len - 1) % len,
                    })
                };
                continue;
            }

            // Esc drops pill focus
            if matches!(event, TuiEvent::Escape) {
                tui.pill_focus = None;
                continue;
            }

            // Enter on a focused pill fills the input; sending stays explicit
            if matches!(event, TuiEvent::Submit)
                && let Some(focus) = tui.pill_focus
            {
                if let Some(suggestion) = app.active_suggestions().get(focus)
                    && let Effect::FillInput(text) =
                        update(&mut app, Action::PickSuggestion(suggestion.topic))
                {
                    tui.input_box.set_text(text);
                }
                tui.pill_focus = None;
                continue;
            }

            // InputBox handles everything else
            if let Some(input_event) = tui.input_box.handle_event(&event) {
                match input_event {
                    InputEvent::Submit(text) => {
                        if let Some(topic) = submit_draft(&mut app, &mut tui.input_box, text) {
                            pending_reply = Some(spawn_reply(topic, app.reply_delay, tx.clone()));
                        }
                    }
                    InputEvent::ContentChanged => {
                        // Typing moves attention back to the composer
                        tui.pill_focus = None;
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (the reply timer)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if matches!(action, Action::ReplyReady(_)) {
                pending_reply = None;
            }
            update(&mut app, action);
        }
    }

    ratatui::restore();
    Ok(())
}
