// src/export/logic.rs

use crate::core::report::{ReportLogic, ReportRequest};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::export::range::parse_range;
use crate::models::locale::Locale;
use crate::models::status::StatusScope;
use crate::ui::messages::warning;
use crate::utils::date::{parse_range_date, today};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// How the user selected the export period on the command line.
#[derive(Debug, Clone)]
pub enum ExportPeriod {
    /// `--range` expression (YYYY, YYYY-MM, YYYY-MM-DD or `a:b`).
    Range(String),
    /// `--from` / `--to` dates (YYYY-MM-DD).
    Between { from: String, to: String },
    /// `--today`
    Today,
}

impl ExportPeriod {
    pub fn bounds(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        match self {
            ExportPeriod::Range(r) => parse_range(r),
            ExportPeriod::Between { from, to } => {
                Ok((parse_range_date(from)?, parse_range_date(to)?))
            }
            ExportPeriod::Today => {
                let d = today();
                Ok((d, d))
            }
        }
    }
}

/// High-level logic for exporting a report to a file.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the CSV report to `file`.
    ///
    /// A directory as `file` receives the report under its default name.
    /// Returns the path written.
    pub fn export(
        pool: &DbPool,
        file: &str,
        period: &ExportPeriod,
        scope: StatusScope,
        locale: Locale,
        force: bool,
    ) -> AppResult<String> {
        let (start, end) = period.bounds()?;

        if start > end {
            return Err(AppError::InvalidDateRange(format!(
                "start date {start} is after end date {end}"
            )));
        }

        let req = ReportRequest {
            start,
            end,
            scope,
            locale,
        };
        let report = ReportLogic::build_report(&pool.conn, &req)?;

        let target = Path::new(file);
        let path = if target.is_dir() {
            target.join(&report.filename)
        } else {
            target.to_path_buf()
        };

        ensure_writable(&path, force)?;

        if report.row_count == 0 {
            warning("No events found for the selected range, writing header only.");
        }

        fs::write(&path, &report.bytes)?;
        notify_export_success(report.row_count, &path);

        Ok(path.to_string_lossy().to_string())
    }
}
