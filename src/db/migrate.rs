//! Schema migrations.
//!
//! Every migration has a version key. Applied versions are recorded in the
//! `log` table as `migration_applied` rows, so running the engine twice is
//! a no-op.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250601_0001_create_sites",
        description: "Created sites table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS sites (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            code  TEXT NOT NULL UNIQUE CHECK(length(code) BETWEEN 1 AND 10),
            name  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250601_0002_create_employees",
        description: "Created employees table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            personnel_code  TEXT NOT NULL UNIQUE CHECK(length(personnel_code) BETWEEN 1 AND 10),
            first_name      TEXT NOT NULL,
            last_name       TEXT NOT NULL,
            active          INTEGER NOT NULL DEFAULT 1
        );
        "#,
    },
    Migration {
        version: "20250601_0003_create_events",
        description: "Created events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp    TEXT NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN (
                             'PRICHOD', 'ODCHOD', 'OBED_START',
                             'OBED_END', 'LEKAR_START', 'LEKAR_KONIEC')),
            employee_id  INTEGER NOT NULL REFERENCES employees(id),
            site_id      INTEGER NOT NULL REFERENCES sites(id)
        );

        CREATE INDEX IF NOT EXISTS idx_events_employee_ts ON events(employee_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_events_ts ON events(timestamp);
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {e}", m.version)))?;

    ttlog(&tx, "migration_applied", m.version, m.description)?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Returns the versions applied by this call, oldest first.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}
