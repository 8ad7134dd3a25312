use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::queries::{insert_employee, insert_site};
use crate::errors::AppResult;
use rusqlite::Connection;

const DEMO_SITES: &[(&str, &str)] = &[("NM01", "Centrala Nové Mesto"), ("TN01", "Servis Trencin")];

const DEMO_EMPLOYEES: &[(&str, &str, &str)] = &[
    ("12345", "Jan", "Novak"),
    ("54321", "Maria", "Vesela"),
    ("11111", "Mario", "Petrech"),
    ("22222", "Gabriel", "Gajdos"),
];

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine and
/// records each applied version in the internal log.
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    run_pending_migrations(conn)
}

/// Insert the demo sites and employees, only into an empty database.
///
/// Returns false (and changes nothing) when any employee already exists.
pub fn seed_demo_data(conn: &Connection) -> AppResult<bool> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(false);
    }

    let tx = conn.unchecked_transaction()?;
    for (code, name) in DEMO_SITES {
        insert_site(&tx, code, name)?;
    }
    for (code, first, last) in DEMO_EMPLOYEES {
        insert_employee(&tx, code, first, last)?;
    }
    ttlog(
        &tx,
        "seed",
        "demo data",
        &format!(
            "Inserted {} sites and {} employees",
            DEMO_SITES.len(),
            DEMO_EMPLOYEES.len()
        ),
    )?;
    tx.commit()?;

    Ok(true)
}
