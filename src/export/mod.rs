// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod logic;
mod model;
mod range;

pub use logic::ExportLogic;
pub use model::ReportRow;

use crate::models::locale::Locale;
use crate::ui::messages::success;
use chrono::NaiveDate;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(rows: usize, path: &Path) {
    success(format!("CSV export completed ({rows} rows): {}", path.display()));
}

/// Download name of a report, e.g. `attendance_2025-06-01-2025-06-30.csv`.
pub fn report_filename(start: NaiveDate, end: NaiveDate, locale: Locale) -> String {
    let prefix = match locale {
        Locale::En => "attendance",
        Locale::Sk => "dochadzka",
    };
    format!(
        "{prefix}_{}-{}.csv",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}
