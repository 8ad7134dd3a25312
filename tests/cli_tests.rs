use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_seeded_db, rti, setup_test_db};

#[test]
fn test_init_seeds_demo_data_once() {
    let db_path = setup_test_db("init_seed");

    rti()
        .args(["--db", &db_path, "--test", "init", "--seed"])
        .assert()
        .success()
        .stdout(contains("Demo sites and employees inserted"));

    rti()
        .args(["--db", &db_path, "--test", "init", "--seed"])
        .assert()
        .success()
        .stdout(contains("demo data not inserted"));

    rti()
        .args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Jan Novak").and(contains("Gabriel Gajdos")));

    rti()
        .args(["--db", &db_path, "site", "list"])
        .assert()
        .success()
        .stdout(contains("NM01").and(contains("/terminal/TN01")));
}

#[test]
fn test_clock_scenario_12345() {
    let db_path = setup_test_db("clock_12345");
    init_seeded_db(&db_path);

    rti()
        .args(["--db", &db_path, "clock", "12345", "PRICHOD", "--site", "NM01"])
        .assert()
        .success()
        .stdout(contains("Record 'Arrival' for Jan Novak saved"));

    rti()
        .args(["--db", &db_path, "clock", "12345", "arrival", "--site", "NM01"])
        .assert()
        .failure()
        .stderr(contains("already at work"));

    rti()
        .args(["--db", &db_path, "clock", "12345", "ODCHOD", "--site", "NM01"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "clock", "12345", "departure", "--site", "NM01"])
        .assert()
        .failure()
        .stderr(contains("without a prior arrival"));
}

#[test]
fn test_clock_rejects_unknown_inputs() {
    let db_path = setup_test_db("clock_unknown");
    init_seeded_db(&db_path);

    rti()
        .args(["--db", &db_path, "clock", "99999", "PRICHOD", "--site", "NM01"])
        .assert()
        .failure()
        .stderr(contains("Unknown personnel code: 99999"));

    rti()
        .args(["--db", &db_path, "clock", "12345", "PRICHOD", "--site", "XX01"])
        .assert()
        .failure()
        .stderr(contains("Unknown site: XX01"));

    rti()
        .args(["--db", &db_path, "clock", "12345", "SIESTA", "--site", "NM01"])
        .assert()
        .failure()
        .stderr(contains("Invalid event kind: SIESTA"));
}

#[test]
fn test_employee_provisioning_and_deactivation() {
    let db_path = setup_test_db("employee_provisioning");
    init_seeded_db(&db_path);

    rti()
        .args(["--db", &db_path, "employee", "add", "777", "Eva", "Hruba"])
        .assert()
        .success()
        .stdout(contains("Eva Hruba (777) added"));

    rti()
        .args(["--db", &db_path, "employee", "add", "777", "Eva", "Hruba"])
        .assert()
        .failure()
        .stderr(contains("Already exists"));

    rti()
        .args(["--db", &db_path, "employee", "deactivate", "777"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "clock", "777", "PRICHOD", "--site", "NM01"])
        .assert()
        .failure()
        .stderr(contains("Unknown personnel code"));

    rti()
        .args(["--db", &db_path, "employee", "activate", "777"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "clock", "777", "PRICHOD", "--site", "NM01"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "employee", "deactivate", "404404"])
        .assert()
        .failure();
}

#[test]
fn test_site_codes_are_validated() {
    let db_path = setup_test_db("site_codes");
    init_seeded_db(&db_path);

    rti()
        .args(["--db", &db_path, "site", "add", "BA01", "Pobocka Bratislava"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "site", "add", "WAY_TOO_LONG_CODE", "Nowhere"])
        .assert()
        .failure();

    rti()
        .args(["--db", &db_path, "site", "add", "BA01", "Again"])
        .assert()
        .failure()
        .stderr(contains("Already exists"));
}

#[test]
fn test_list_shows_events_and_status() {
    let db_path = setup_test_db("list_today");
    init_seeded_db(&db_path);

    rti()
        .args(["--db", &db_path, "clock", "54321", "PRICHOD", "--site", "TN01"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Maria Vesela").and(contains("In work")));

    rti()
        .args(["--db", &db_path, "list", "--employee", "12345"])
        .assert()
        .success()
        .stdout(contains("No events recorded"));

    rti()
        .args(["--db", &db_path, "list", "--date", "2020-01-01"])
        .assert()
        .success()
        .stdout(contains("No events recorded"));
}

#[test]
fn test_db_maintenance_and_log() {
    let db_path = setup_test_db("db_maintenance");
    init_seeded_db(&db_path);

    rti()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("already up to date"));

    rti()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("migration_applied")
                .and(contains("20250601_0003_create_events"))
                .and(contains("seed")),
        );
}

#[test]
fn test_config_print_reflects_db_override() {
    let db_path = setup_test_db("config_print");

    rti()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()).and(contains("report_status_scope")));
}
