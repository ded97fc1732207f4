//! Shift task domain types.

use chrono::{DateTime, Utc};
use serde_json::Value;

use barback_core::ShiftTaskId;

/// A checklist for one work shift (domain type).
#[derive(Debug, Clone)]
pub struct ShiftTask {
    /// Unique shift task ID.
    pub id: ShiftTaskId,
    /// Shift label, e.g. "Mañana" or "Tarde".
    pub shift_name: String,
    /// Checklist payload, stored verbatim. Entry order is display order
    /// and survives the round trip through the database.
    pub checklist: Value,
    /// When the shift task was created.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a shift task.
#[derive(Debug, Clone)]
pub struct NewShiftTask {
    pub shift_name: String,
    pub checklist: Value,
}
