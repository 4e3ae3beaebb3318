//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Effect (requests)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │  whatever  │
//!     │  Adapter   │      │  Adapter   │      │ comes next │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum plus the `update()` reducer
//! - [`catalog`]: The canned replies and their follow-up suggestions
//! - [`router`]: Keyword matching from visitor text to a topic
//! - [`timestamp`]: Relative time formatting for the transcript
//! - [`config`]: Settings from `~/.folio/config.toml`, env and CLI
//! - [`prefs`]: Persisted visitor preferences (dark mode)

pub mod action;
pub mod catalog;
pub mod config;
pub mod prefs;
pub mod router;
pub mod state;
pub mod timestamp;
