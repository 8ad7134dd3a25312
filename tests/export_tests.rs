use predicates::str::contains;
use std::fs;

mod common;
use common::{init_seeded_db, rti, setup_test_db, temp_out};

fn clock(db_path: &str, code: &str, kind: &str, site: &str) {
    rti()
        .args(["--db", db_path, "clock", code, kind, "--site", site])
        .assert()
        .success();
}

#[test]
fn test_export_today_scenario_54321() {
    let db_path = setup_test_db("export_today");
    let out = temp_out("export_today", "csv");
    init_seeded_db(&db_path);

    clock(&db_path, "54321", "PRICHOD", "TN01");
    clock(&db_path, "54321", "ODCHOD", "TN01");

    rti()
        .args(["--db", &db_path, "export", "--file", &out, "--today"])
        .assert()
        .success()
        .stdout(contains("2 rows"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<_> = content.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Record ID,Personnel code"));
    assert!(lines[1].contains("54321,Maria,Vesela,Servis Trencin"));
    assert!(lines[1].ends_with("Arrival,Off work"));
    assert!(lines[2].ends_with("Departure,Off work"));
}

#[test]
fn test_export_requires_force_to_overwrite() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_seeded_db(&db_path);

    fs::write(&out, "previous content").unwrap();

    // Declining the overwrite prompt keeps the old file.
    rti()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2025-06"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous content");

    rti()
        .args([
            "--db", &db_path, "export", "--file", &out, "--range", "2025-06", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_export_into_directory_uses_report_filename() {
    let db_path = setup_test_db("export_dir");
    init_seeded_db(&db_path);

    let dir = std::env::temp_dir().join("rattendance_export_dir");
    fs::create_dir_all(&dir).unwrap();
    let expected = dir.join("attendance_2025-06-01-2025-06-30.csv");
    fs::remove_file(&expected).ok();

    rti()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            dir.to_str().unwrap(),
            "--from",
            "2025-06-01",
            "--to",
            "2025-06-30",
        ])
        .assert()
        .success();

    assert!(expected.exists());
}

#[test]
fn test_export_rejects_bad_ranges() {
    let db_path = setup_test_db("export_bad_range");
    let out = temp_out("export_bad_range", "csv");
    init_seeded_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "export", "--file", &out, "--from", "2025-06-30", "--to",
            "2025-06-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));

    rti()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));

    rti()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure();
}

#[test]
fn test_export_global_scope_sees_later_departure() {
    let db_path = setup_test_db("export_scope");
    let out = temp_out("export_scope", "csv");
    init_seeded_db(&db_path);

    clock(&db_path, "22222", "PRICHOD", "NM01");

    rti()
        .args([
            "--db", &db_path, "export", "--file", &out, "--today", "--scope", "global",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.lines().nth(1).unwrap().ends_with("Arrival,In work"));
}
