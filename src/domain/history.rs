//! Session history of generated passwords.
//!
//! The history lives in memory for one session only and is never written
//! anywhere.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::PasswordKind;

/// A password recorded in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Generated password.
    pub password: String,
    /// Generator kind that produced it.
    #[serde(rename = "type")]
    pub kind: PasswordKind,
    /// Generation time.
    pub generated_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn new(password: impl Into<String>, kind: PasswordKind) -> Self {
        Self {
            password: password.into(),
            kind,
            generated_at: Utc::now(),
        }
    }
}

/// Append-only list of generated passwords.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a generated password.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wipe every entry at session end.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
