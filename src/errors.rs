//! Unified application error type.
//! All modules (db, core, cli, http) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::event_kind::EventKind;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Clock-in / clock-out rejections
    // ---------------------------
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Unknown personnel code: {0}")]
    UnknownEmployee(String),

    #[error("Unknown site: {0}")]
    UnknownSite(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("{}", no_prior_arrival_message(.last))]
    NoPriorArrival { last: Option<EventKind> },

    #[error("Employee is already at work (last action: {last})")]
    AlreadyClockedIn { last: EventKind },

    // ---------------------------
    // Parsing / reporting
    // ---------------------------
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid status scope '{0}' (use 'window' or 'global')")]
    InvalidStatusScope(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Provisioning
    // ---------------------------
    #[error("Already exists: {0}")]
    Duplicate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

fn no_prior_arrival_message(last: &Option<EventKind>) -> String {
    match last {
        Some(kind) => format!(
            "Cannot record a departure without a prior arrival (last action: {kind})"
        ),
        None => "Cannot record a departure without a prior arrival (no previous events)".into(),
    }
}

impl AppError {
    /// True for errors caused by the request content rather than the
    /// environment (storage, filesystem, configuration).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::MissingField(_)
                | AppError::UnknownEmployee(_)
                | AppError::UnknownSite(_)
                | AppError::InvalidEventKind(_)
                | AppError::NoPriorArrival { .. }
                | AppError::AlreadyClockedIn { .. }
                | AppError::InvalidDateRange(_)
                | AppError::InvalidStatusScope(_)
                | AppError::Duplicate(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
