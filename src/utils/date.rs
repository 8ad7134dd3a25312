use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Last instant of a day at the microsecond precision of stored timestamps.
const LAST_MICROSECOND: NaiveTime = match NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999) {
    Some(t) => t,
    None => NaiveTime::MIN,
};

/// Today's date on the clock events are stamped with (UTC).
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Strict `YYYY-MM-DD` parsing for user supplied range bounds.
pub fn parse_range_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| {
        AppError::InvalidDateRange(format!("'{s}' is not a date, use the YYYY-MM-DD format"))
    })
}

/// Closed UTC interval `[start 00:00:00, end 23:59:59.999999]`.
///
/// Covers every instant of the inclusive calendar range `start..=end` at
/// storage precision, and stays within four-digit years for any `end` up
/// to 9999-12-31. A reversed range yields an empty interval.
pub fn day_bounds(start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let lower = start.and_time(NaiveTime::MIN).and_utc();
    let upper = end.and_time(LAST_MICROSECOND).and_utc();
    (lower, upper)
}
