//! # Application State
//!
//! Core business state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── persona: String            // portfolio owner's display name
//! ├── headline_prefix: String    // hero headline lead-in
//! ├── headline_words: Vec        // rotating headline completions
//! ├── headline_index: usize      // which word is showing
//! ├── messages: Vec<Message>     // conversation transcript
//! ├── composing: bool            // reply scheduled, not yet delivered
//! ├── dark_mode: bool            // current color scheme
//! ├── status_message: String     // status bar text
//! └── reply_delay: Duration      // simulated typing time
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::core::catalog::{self, Suggestion, Topic};
use crate::core::config::ResolvedConfig;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Visitor,
    Assistant,
}

/// One entry in the conversation transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub author: Author,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Follow-up prompts rendered under the message. Only assistant
    /// messages carry these.
    pub suggestions: Option<&'static [Suggestion]>,
}

impl Message {
    /// A visitor message, stamped with the current time. The body is kept
    /// exactly as typed.
    pub fn from_visitor(body: String) -> Self {
        Self {
            author: Author::Visitor,
            body,
            created_at: Utc::now(),
            suggestions: None,
        }
    }

    /// The canned assistant reply for `topic`, with its follow-up prompts
    /// attached.
    pub fn from_reply(topic: Topic) -> Self {
        let reply = topic.reply();
        Self {
            author: Author::Assistant,
            body: reply.body.to_string(),
            created_at: Utc::now(),
            suggestions: Some(reply.suggestions),
        }
    }
}

pub struct App {
    pub persona: String,
    pub headline_prefix: String,
    pub headline_words: Vec<String>,
    pub headline_index: usize,
    pub messages: Vec<Message>,
    pub composing: bool,
    pub dark_mode: bool,
    pub status_message: String,
    pub reply_delay: Duration,
}

impl App {
    pub fn from_config(config: &ResolvedConfig, dark_mode: bool) -> Self {
        Self {
            persona: config.persona.clone(),
            headline_prefix: config.headline_prefix.clone(),
            headline_words: config.headline_words.clone(),
            headline_index: 0,
            messages: Vec::new(),
            composing: false,
            dark_mode,
            status_message: String::from("Ask me anything"),
            reply_delay: config.reply_delay,
        }
    }

    /// The headline word currently displayed. Empty when no words are
    /// configured.
    pub fn headline_word(&self) -> &str {
        self.headline_words
            .get(self.headline_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The suggestion set the keyboard can focus: the hero prompts before
    /// any conversation, afterwards the follow-ups of the newest assistant
    /// message.
    pub fn active_suggestions(&self) -> &'static [Suggestion] {
        if self.messages.is_empty() {
            return catalog::INITIAL_SUGGESTIONS;
        }
        self.messages
            .iter()
            .rev()
            .find_map(|m| m.suggestions)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_new_app_starts_on_hero() {
        let app = test_app();
        assert!(app.messages.is_empty());
        assert!(!app.composing);
        assert_eq!(app.headline_index, 0);
        assert_eq!(app.persona, "Alex");
        assert_eq!(app.status_message, "Ask me anything");
    }

    #[test]
    fn test_headline_word_tracks_index() {
        let mut app = test_app();
        assert_eq!(app.headline_word(), "apps");
        app.headline_index = 1;
        assert_eq!(app.headline_word(), "AI tools");
    }

    #[test]
    fn test_headline_word_is_empty_without_words() {
        let mut app = test_app();
        app.headline_words.clear();
        app.headline_index = 3;
        assert_eq!(app.headline_word(), "");
    }

    #[test]
    fn test_active_suggestions_start_with_hero_prompts() {
        let app = test_app();
        assert_eq!(app.active_suggestions(), catalog::INITIAL_SUGGESTIONS);
    }

    #[test]
    fn test_active_suggestions_follow_latest_reply() {
        let mut app = test_app();
        app.messages.push(Message::from_visitor("hi".to_string()));
        // A visitor-only transcript has nothing to focus.
        assert!(app.active_suggestions().is_empty());

        app.messages.push(Message::from_reply(Topic::Projects));
        assert_eq!(app.active_suggestions(), Topic::Projects.reply().suggestions);

        // A trailing visitor message keeps the previous reply's prompts live.
        app.messages.push(Message::from_visitor("more".to_string()));
        assert_eq!(app.active_suggestions(), Topic::Projects.reply().suggestions);
    }

    #[test]
    fn test_visitor_message_keeps_body_untrimmed() {
        let message = Message::from_visitor("  hello  ".to_string());
        assert_eq!(message.body, "  hello  ");
        assert_eq!(message.author, Author::Visitor);
        assert!(message.suggestions.is_none());
    }

    #[test]
    fn test_reply_message_carries_suggestions() {
        let message = Message::from_reply(Topic::Stack);
        assert_eq!(message.author, Author::Assistant);
        assert_eq!(message.suggestions, Some(Topic::Stack.reply().suggestions));
        assert!(message.body.contains("Frontend"));
    }
}
