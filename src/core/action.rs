//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! Visitor presses Enter? That's `Action::Submit`.
//! The reply timer fires? That's `Action::ReplyReady(topic)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns the `Effect` the caller must carry out. No side effects
//! here. Timers, disk writes and terminal I/O happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and effect.
//! And debuggable: log every action, replay the exact session.

use log::{debug, info};

use crate::core::catalog::{self, Topic};
use crate::core::router;
use crate::core::state::{App, Message};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Visitor submitted the input buffer.
    Submit(String),
    /// The scheduled reply timer fired.
    ReplyReady(Topic),
    /// Visitor picked a suggestion pill.
    PickSuggestion(Topic),
    /// Clear the conversation and return to the hero screen.
    Reset,
    /// Flip between dark and light mode.
    ToggleDarkMode,
    /// Advance the rotating headline word.
    HeadlineTick,
    /// Shut down.
    Quit,
}

/// What the caller must do after an `update`. The reducer itself never
/// touches timers, disk or the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start the reply timer for this topic.
    ScheduleReply(Topic),
    /// Abort the in-flight reply timer.
    CancelReply,
    /// Place this text in the input box, ready to edit or send.
    FillInput(String),
    /// Write the dark-mode preference to the preference store.
    PersistDarkMode(bool),
    /// Tear down the TUI and exit.
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if text.trim().is_empty() {
                debug!("Ignoring empty submission");
                return Effect::None;
            }
            if app.composing {
                debug!("Ignoring submission while a reply is pending");
                return Effect::None;
            }
            let topic = router::classify(&text);
            info!("Visitor message routed to {}", topic.key());
            app.messages.push(Message::from_visitor(text));
            app.composing = true;
            Effect::ScheduleReply(topic)
        }
        Action::ReplyReady(topic) => {
            // A reply that arrives after a reset has nothing to attach to.
            if !app.composing {
                debug!("Dropping stale reply for {}", topic.key());
                return Effect::None;
            }
            info!("Reply delivered for {}", topic.key());
            app.messages.push(Message::from_reply(topic));
            app.composing = false;
            Effect::None
        }
        Action::PickSuggestion(topic) => {
            // Picking a pill only stages the prompt text. Sending stays an
            // explicit, separate step.
            let label = catalog::suggestion_label(topic);
            debug!("Staged suggestion for {}", topic.key());
            Effect::FillInput(label.to_string())
        }
        Action::Reset => {
            if app.messages.is_empty() && !app.composing {
                return Effect::None;
            }
            let had_pending = app.composing;
            app.messages.clear();
            app.composing = false;
            app.status_message = String::from("Conversation cleared");
            info!("Conversation reset");
            if had_pending {
                Effect::CancelReply
            } else {
                Effect::None
            }
        }
        Action::ToggleDarkMode => {
            app.dark_mode = !app.dark_mode;
            app.status_message = if app.dark_mode {
                String::from("Dark mode")
            } else {
                String::from("Light mode")
            };
            Effect::PersistDarkMode(app.dark_mode)
        }
        Action::HeadlineTick => {
            if !app.headline_words.is_empty() {
                app.headline_index = (app.headline_index + 1) % app.headline_words.len();
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
