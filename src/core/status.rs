//! Status derivation: latest event kind per employee.

use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::status::WorkStatus;
use std::collections::HashMap;

/// Latest event kind per employee id.
pub type StatusMap = HashMap<i64, EventKind>;

/// Fold a time-ordered event sequence into the last kind seen per employee.
///
/// Events must be in ascending `(timestamp, id)` order: the last write per
/// employee wins, so the result is the most recent kind. Running the fold
/// again over the same sequence yields the same map.
pub fn derive_statuses<'a, I>(events: I) -> StatusMap
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut latest = StatusMap::new();
    for ev in events {
        latest.insert(ev.employee_id, ev.kind);
    }
    latest
}

/// Working status of one employee according to a derived map.
pub fn status_of(statuses: &StatusMap, employee_id: i64) -> WorkStatus {
    WorkStatus::classify(statuses.get(&employee_id).copied())
}
