use super::event_kind::EventKind;
use super::locale::Locale;
use crate::errors::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reporting status of an employee, derived from the latest event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkStatus {
    InWork,
    OffWork,
}

impl WorkStatus {
    /// No event at all counts as off work.
    pub fn classify(latest: Option<EventKind>) -> Self {
        match latest {
            Some(kind) if kind.is_in_work() => WorkStatus::InWork,
            _ => WorkStatus::OffWork,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, WorkStatus::InWork) => "In work",
            (Locale::En, WorkStatus::OffWork) => "Off work",
            (Locale::Sk, WorkStatus::InWork) => "V práci",
            (Locale::Sk, WorkStatus::OffWork) => "Mimo práce",
        }
    }
}

/// Which events feed the status column of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusScope {
    /// Only the events inside the exported date range.
    #[default]
    Window,
    /// The employee's latest event overall.
    Global,
}

impl FromStr for StatusScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "window" => Ok(StatusScope::Window),
            "global" => Ok(StatusScope::Global),
            _ => Err(AppError::InvalidStatusScope(s.trim().to_string())),
        }
    }
}
