use crate::errors::{AppError, AppResult};
use crate::export::ReportRow;
use crate::models::employee::Employee;
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::site::Site;
use crate::utils::time::{parse_db_timestamp, to_db_timestamp};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, params};

const EVENT_COLUMNS: &str = "ev.id, ev.timestamp, ev.kind, ev.employee_id, ev.site_id";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        personnel_code: row.get("personnel_code")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        active: row.get::<_, i32>("active")? == 1,
    })
}

pub fn map_site(row: &Row) -> Result<Site> {
    Ok(Site {
        id: row.get("id")?,
        code: row.get("code")?,
        name: row.get("name")?,
    })
}

/// Maps the first five columns, in `EVENT_COLUMNS` order.
pub fn map_event(row: &Row) -> Result<Event> {
    let ts_str: String = row.get(1)?;
    let timestamp = parse_db_timestamp(&ts_str).map_err(|e| conversion_error(1, e))?;

    let kind_str: String = row.get(2)?;
    let kind = EventKind::from_wire_key(&kind_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidEventKind(kind_str.clone())))?;

    Ok(Event {
        id: row.get(0)?,
        timestamp,
        kind,
        employee_id: row.get(3)?,
        site_id: row.get(4)?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

pub fn find_employee_by_code(conn: &Connection, code: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employees WHERE personnel_code = ?1")?;
    Ok(stmt.query_row([code], map_employee).optional()?)
}

/// Inactive employees are invisible to terminals.
pub fn find_active_employee_by_code(conn: &Connection, code: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn
        .prepare_cached("SELECT * FROM employees WHERE personnel_code = ?1 AND active = 1")?;
    Ok(stmt.query_row([code], map_employee).optional()?)
}

pub fn insert_employee(
    conn: &Connection,
    code: &str,
    first_name: &str,
    last_name: &str,
) -> AppResult<Employee> {
    conn.execute(
        "INSERT INTO employees (personnel_code, first_name, last_name, active)
         VALUES (?1, ?2, ?3, 1)",
        params![code, first_name, last_name],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Duplicate(format!("employee with personnel code '{code}'"))
        } else {
            AppError::Db(e)
        }
    })?;

    Ok(Employee {
        id: conn.last_insert_rowid(),
        personnel_code: code.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        active: true,
    })
}

/// Returns false when no employee has this code.
pub fn set_employee_active(conn: &Connection, code: &str, active: bool) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE employees SET active = ?1 WHERE personnel_code = ?2",
        params![if active { 1 } else { 0 }, code],
    )?;
    Ok(changed > 0)
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees ORDER BY personnel_code ASC")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

pub fn find_site_by_code(conn: &Connection, code: &str) -> AppResult<Option<Site>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM sites WHERE code = ?1")?;
    Ok(stmt.query_row([code], map_site).optional()?)
}

pub fn insert_site(conn: &Connection, code: &str, name: &str) -> AppResult<Site> {
    conn.execute(
        "INSERT INTO sites (code, name) VALUES (?1, ?2)",
        params![code, name],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Duplicate(format!("site with code '{code}'"))
        } else {
            AppError::Db(e)
        }
    })?;

    Ok(Site {
        id: conn.last_insert_rowid(),
        code: code.to_string(),
        name: name.to_string(),
    })
}

pub fn list_sites(conn: &Connection) -> AppResult<Vec<Site>> {
    let mut stmt = conn.prepare("SELECT * FROM sites ORDER BY code ASC")?;
    let rows = stmt.query_map([], map_site)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Most recent event of an employee, by timestamp then id.
pub fn last_event_for_employee(conn: &Connection, employee_id: i64) -> AppResult<Option<Event>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events ev
         WHERE ev.employee_id = ?1
         ORDER BY ev.timestamp DESC, ev.id DESC
         LIMIT 1"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([employee_id], map_event).optional()?)
}

pub fn insert_event(
    conn: &Connection,
    timestamp: DateTime<Utc>,
    kind: EventKind,
    employee_id: i64,
    site_id: i64,
) -> AppResult<Event> {
    conn.execute(
        "INSERT INTO events (timestamp, kind, employee_id, site_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            to_db_timestamp(&timestamp),
            kind.wire_key(),
            employee_id,
            site_id
        ],
    )?;

    Ok(Event {
        id: conn.last_insert_rowid(),
        timestamp,
        kind,
        employee_id,
        site_id,
    })
}

/// Every event, oldest first.
pub fn load_all_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events ev ORDER BY ev.timestamp ASC, ev.id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_event)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Events in `[lower, upper]` joined with their employee and site, oldest first.
pub fn load_report_rows(
    conn: &Connection,
    lower: DateTime<Utc>,
    upper: DateTime<Utc>,
) -> AppResult<Vec<ReportRow>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS},
                em.personnel_code, em.first_name, em.last_name,
                si.name
         FROM events ev
         JOIN employees em ON em.id = ev.employee_id
         JOIN sites si ON si.id = ev.site_id
         WHERE ev.timestamp >= ?1 AND ev.timestamp <= ?2
         ORDER BY ev.timestamp ASC, ev.id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(
        params![to_db_timestamp(&lower), to_db_timestamp(&upper)],
        |row| {
            Ok(ReportRow {
                event: map_event(row)?,
                personnel_code: row.get(5)?,
                first_name: row.get(6)?,
                last_name: row.get(7)?,
                site_name: row.get(8)?,
            })
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
