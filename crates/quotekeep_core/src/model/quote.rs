//! Quote domain model.
//!
//! # Responsibility
//! - Define the canonical quote record and its insert input.
//! - Convert `created_at` between epoch milliseconds and local display time.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another quote.
//! - `created_at` is Unix epoch milliseconds from the local clock.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key for a saved quote.
pub type QuoteId = i64;

/// Display format for `created_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A quote persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    /// Attributed author. Not unique; the primary search dimension.
    pub author: String,
    pub text: String,
    /// Unix epoch milliseconds captured when the quote was saved.
    pub created_at: i64,
}

impl Quote {
    /// Renders `created_at` in local time, e.g. `2026-10-19 14:03:22`.
    pub fn created_at_display(&self) -> String {
        format_epoch_ms(self.created_at)
    }
}

/// Insert input for a quote that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub author: String,
    pub text: String,
    pub created_at: i64,
}

impl NewQuote {
    pub fn new(author: impl Into<String>, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            created_at,
        }
    }

    /// Creates an insert input stamped with the current local time.
    pub fn now(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(author, text, now_epoch_ms())
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Formats epoch milliseconds as local time using [`TIMESTAMP_FORMAT`].
///
/// Values outside chrono's representable range fall back to the raw number.
pub fn format_epoch_ms(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(value) => value.format(TIMESTAMP_FORMAT).to_string(),
        None => epoch_ms.to_string(),
    }
}
