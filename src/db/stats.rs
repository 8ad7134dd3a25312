use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) REFERENCE DATA
    //
    let sites = count(pool, "SELECT COUNT(*) FROM sites")?;
    let employees = count(pool, "SELECT COUNT(*) FROM employees")?;
    let active = count(pool, "SELECT COUNT(*) FROM employees WHERE active = 1")?;

    println!("{}• Sites:{} {}", CYAN, RESET, sites);
    println!(
        "{}• Employees:{} {} ({}{} active{})",
        CYAN, RESET, employees, GREEN, active, RESET
    );

    //
    // 3) EVENTS
    //
    let events = count(pool, "SELECT COUNT(*) FROM events")?;
    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, events, RESET
    );

    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(timestamp, 1, 19) FROM events ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(timestamp, 1, 19) FROM events ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let none = format!("{GREY}--{RESET}");
    println!("{}• Event range (UTC):{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| none.clone()));
    println!("    to:   {}", last.unwrap_or(none));

    println!();
    Ok(())
}
