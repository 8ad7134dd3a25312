use super::event_kind::EventKind;
use crate::utils::time::format_display;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One append-only row of the `events` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: i64,
    pub timestamp: DateTime<Utc>, // ⇔ events.timestamp (TEXT, UTC, microseconds)
    pub kind: EventKind,          // ⇔ events.kind (wire key)
    pub employee_id: i64,
    pub site_id: i64,
}

impl Event {
    pub fn timestamp_str(&self) -> String {
        format_display(&self.timestamp)
    }
}
