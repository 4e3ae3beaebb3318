//! Relative timestamp formatting for transcript messages.
//!
//! Fresh messages read as relative ("Just now", "5m ago") and roll over to an
//! absolute date once they are a week old. The caller supplies `now` so the
//! formatting stays a pure function.

use chrono::{DateTime, Local, Utc};

/// Format a message timestamp relative to `now`.
///
/// Thresholds: under a minute, under an hour, under a day, under a week,
/// then an absolute local date like `Mar 4, 02:15 PM`. A `created_at` in the
/// future (clock skew) reads as "Just now".
pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }

    created_at
        .with_timezone(&Local)
        .format("%b %-d, %I:%M %p")
        .to_string()
}
