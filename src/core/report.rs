//! CSV attendance report for a calendar date range.

use crate::core::status::derive_statuses;
use crate::db::queries::{load_all_events, load_report_rows};
use crate::errors::AppResult;
use crate::export::csv::write_report;
use crate::export::report_filename;
use crate::models::locale::Locale;
use crate::models::status::StatusScope;
use crate::utils::date::day_bounds;
use chrono::NaiveDate;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
pub struct ReportRequest {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day, inclusive. Before `start` gives an empty report.
    pub end: NaiveDate,
    pub scope: StatusScope,
    pub locale: Locale,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub filename: String,
    /// Number of event rows, header excluded.
    pub row_count: usize,
    /// UTF-8 CSV content.
    pub bytes: Vec<u8>,
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn build_report(conn: &Connection, req: &ReportRequest) -> AppResult<Report> {
        let (lower, upper) = day_bounds(req.start, req.end);
        let rows = load_report_rows(conn, lower, upper)?;

        let statuses = match req.scope {
            StatusScope::Window => derive_statuses(rows.iter().map(|r| &r.event)),
            StatusScope::Global => derive_statuses(&load_all_events(conn)?),
        };

        let mut bytes = Vec::new();
        write_report(&mut bytes, &rows, &statuses, req.locale)?;

        Ok(Report {
            filename: report_filename(req.start, req.end, req.locale),
            row_count: rows.len(),
            bytes,
        })
    }
}
