//! Checklist entries for shift tasks.

use serde::{Deserialize, Serialize};

/// A single checklist line as the kitchen frontend writes it.
///
/// The store accepts any JSON value for a checklist and returns it
/// unchanged; this struct gives typed construction for the known
/// `{item, done}` shape where code builds checklists itself (seeding,
/// tests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    /// What needs doing.
    pub item: String,
    /// Whether it has been done.
    pub done: bool,
}

impl ChecklistEntry {
    /// Create an entry that still needs doing.
    #[must_use]
    pub fn pending(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            done: false,
        }
    }

    /// Create an already-completed entry.
    #[must_use]
    pub fn completed(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            done: true,
        }
    }
}
