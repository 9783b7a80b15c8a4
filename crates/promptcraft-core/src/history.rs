use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Number of characters of the input kept in a preview.
pub const PREVIEW_CHARS: usize = 50;

/// One successful generation in the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub created_at: DateTime<Utc>,
    pub preview: String,
    pub full_input: String,
    pub response: String,
}

impl HistoryEntry {
    pub fn new(input: &str, response: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            preview: preview_of(input),
            full_input: input.to_string(),
            response: response.to_string(),
        }
    }

    /// Local wall-clock time, `HH:MM`.
    pub fn time_label(&self) -> String {
        self.created_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// First [`PREVIEW_CHARS`] characters of `input`, with `...` appended when
/// anything was cut.
pub fn preview_of(input: &str) -> String {
    if input.chars().count() > PREVIEW_CHARS {
        let mut preview: String = input.chars().take(PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    } else {
        input.to_string()
    }
}
