#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rattendance::core::clock::{ClockLogic, ClockRequest, RecordedEvent};
use rattendance::db::initialize::{init_db, seed_demo_data};
use rattendance::db::pool::DbPool;
use rattendance::errors::AppResult;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB file with the demo sites and employees
pub fn init_seeded_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init", "--seed"])
        .assert()
        .success();
}

/// Migrated in-memory database with the demo sites and employees
pub fn memory_db() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("migrate");
    seed_demo_data(&pool.conn).expect("seed");
    pool
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("valid timestamp")
}

/// Record an event at a fixed instant
pub fn clock_at(
    pool: &mut DbPool,
    code: &str,
    kind: &str,
    site: &str,
    when: DateTime<Utc>,
) -> AppResult<RecordedEvent> {
    ClockLogic::record_at(pool, &ClockRequest::new(code, kind, site), when)
}
