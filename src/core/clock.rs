//! Clock-in / clock-out validation and recording.

use crate::db::pool::DbPool;
use crate::db::queries::{
    find_active_employee_by_code, find_site_by_code, insert_event, last_event_for_employee,
};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::site::Site;
use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;
use serde::Deserialize;

/// A terminal request as received. Fields stay raw so each missing or
/// unknown value maps to its own rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClockRequest {
    #[serde(rename = "osobne_cislo")]
    pub personnel_code: Option<String>,
    #[serde(rename = "typ_zaznamu")]
    pub kind: Option<String>,
    #[serde(rename = "kod_prevadzky")]
    pub site_code: Option<String>,
}

impl ClockRequest {
    pub fn new(personnel_code: &str, kind: &str, site_code: &str) -> Self {
        Self {
            personnel_code: Some(personnel_code.to_string()),
            kind: Some(kind.to_string()),
            site_code: Some(site_code.to_string()),
        }
    }
}

/// An accepted event together with the records it references.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub event: Event,
    pub employee: Employee,
    pub site: Site,
}

/// Blank counts as missing; a present value is passed on untouched, so codes
/// match exactly.
fn required<'a>(value: &'a Option<String>, field: &'static str) -> AppResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::MissingField(field)),
    }
}

/// Ordering rules between the previous event of an employee and a new one.
///
/// Only arrivals and departures are checked; lunch and medical-leave
/// events are accepted in any position.
pub fn check_transition(prior: Option<EventKind>, next: EventKind) -> AppResult<()> {
    match next {
        EventKind::Departure => match prior {
            None | Some(EventKind::Departure) => Err(AppError::NoPriorArrival { last: prior }),
            Some(_) => Ok(()),
        },
        EventKind::Arrival => match prior {
            Some(last) if !last.is_departure() => Err(AppError::AlreadyClockedIn { last }),
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

/// High-level business logic for clock events.
pub struct ClockLogic;

impl ClockLogic {
    /// Validate and append an event stamped with the current UTC time.
    pub fn record(pool: &mut DbPool, req: &ClockRequest) -> AppResult<RecordedEvent> {
        Self::record_at(pool, req, Utc::now())
    }

    /// Validate and append an event stamped with `now`.
    ///
    /// The lookup of the prior event and the insert share one IMMEDIATE
    /// transaction: SQLite takes the write lock up front, so two writers
    /// cannot both observe the same prior event.
    pub fn record_at(
        pool: &mut DbPool,
        req: &ClockRequest,
        now: DateTime<Utc>,
    ) -> AppResult<RecordedEvent> {
        let personnel_code = required(&req.personnel_code, "osobne_cislo")?;
        let kind_key = required(&req.kind, "typ_zaznamu")?;
        let site_code = required(&req.site_code, "kod_prevadzky")?;

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let employee = find_active_employee_by_code(&tx, personnel_code)?
            .ok_or_else(|| AppError::UnknownEmployee(personnel_code.to_string()))?;

        let site = find_site_by_code(&tx, site_code)?
            .ok_or_else(|| AppError::UnknownSite(site_code.to_string()))?;

        let kind: EventKind = kind_key.parse()?;

        let prior = last_event_for_employee(&tx, employee.id)?;
        check_transition(prior.map(|ev| ev.kind), kind)?;

        let event = insert_event(&tx, now, kind, employee.id, site.id)?;
        tx.commit()?;

        Ok(RecordedEvent {
            event,
            employee,
            site,
        })
    }
}
