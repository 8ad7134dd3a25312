//! Timestamp utilities: storage encoding and display formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Storage format of `events.timestamp`. Fixed width, so text order is time order.
const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format used in reports and CLI listings.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn to_db_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(DB_FORMAT).to_string()
}

pub fn parse_db_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, DB_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, DISPLAY_FORMAT))
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::Other(format!("Invalid stored timestamp: {s}")))
}

pub fn format_display(ts: &DateTime<Utc>) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}
