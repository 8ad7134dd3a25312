use rattendance::core::clock::{ClockRequest, ClockLogic, check_transition};
use rattendance::db::initialize::{init_db, seed_demo_data};
use rattendance::db::pool::DbPool;
use rattendance::db::queries::{last_event_for_employee, load_all_events};
use rattendance::errors::AppError;
use rattendance::models::event_kind::EventKind;
use std::sync::Barrier;
use std::thread;

mod common;
use common::{at, clock_at, memory_db, setup_test_db};

#[test]
fn departure_requires_a_preceding_non_departure() {
    assert!(matches!(
        check_transition(None, EventKind::Departure),
        Err(AppError::NoPriorArrival { last: None })
    ));
    assert!(matches!(
        check_transition(Some(EventKind::Departure), EventKind::Departure),
        Err(AppError::NoPriorArrival {
            last: Some(EventKind::Departure)
        })
    ));

    for prior in EventKind::ALL.into_iter().filter(|k| !k.is_departure()) {
        assert!(
            check_transition(Some(prior), EventKind::Departure).is_ok(),
            "departure after {prior:?} should be accepted"
        );
    }
}

#[test]
fn arrival_requires_no_event_or_a_departure() {
    assert!(check_transition(None, EventKind::Arrival).is_ok());
    assert!(check_transition(Some(EventKind::Departure), EventKind::Arrival).is_ok());

    for prior in EventKind::ALL.into_iter().filter(|k| !k.is_departure()) {
        assert!(matches!(
            check_transition(Some(prior), EventKind::Arrival),
            Err(AppError::AlreadyClockedIn { last }) if last == prior
        ));
    }
}

#[test]
fn lunch_and_medical_events_are_never_checked() {
    let unchecked = [
        EventKind::LunchStart,
        EventKind::LunchEnd,
        EventKind::MedicalLeaveStart,
        EventKind::MedicalLeaveEnd,
    ];

    for next in unchecked {
        assert!(check_transition(None, next).is_ok());
        for prior in EventKind::ALL {
            assert!(check_transition(Some(prior), next).is_ok());
        }
    }
}

#[test]
fn scenario_12345_arrival_twice_then_departure_twice() {
    let mut pool = memory_db();

    let first = clock_at(&mut pool, "12345", "PRICHOD", "NM01", at(2025, 6, 2, 8, 0, 0))
        .expect("first arrival accepted");
    assert_eq!(first.employee.full_name(), "Jan Novak");
    assert_eq!(first.site.code, "NM01");

    let err = clock_at(&mut pool, "12345", "PRICHOD", "NM01", at(2025, 6, 2, 8, 1, 0))
        .expect_err("second arrival rejected");
    assert!(matches!(
        err,
        AppError::AlreadyClockedIn {
            last: EventKind::Arrival
        }
    ));

    clock_at(&mut pool, "12345", "ODCHOD", "NM01", at(2025, 6, 2, 16, 0, 0))
        .expect("departure accepted");

    let err = clock_at(&mut pool, "12345", "ODCHOD", "NM01", at(2025, 6, 2, 16, 5, 0))
        .expect_err("second departure rejected");
    assert!(matches!(
        err,
        AppError::NoPriorArrival {
            last: Some(EventKind::Departure)
        }
    ));

    // Rejections leave no trace.
    assert_eq!(load_all_events(&pool.conn).unwrap().len(), 2);
}

#[test]
fn unknown_employee_and_site_are_rejected() {
    let mut pool = memory_db();

    let err = clock_at(&mut pool, "99999", "PRICHOD", "NM01", at(2025, 6, 2, 8, 0, 0))
        .expect_err("unknown employee");
    assert!(matches!(err, AppError::UnknownEmployee(code) if code == "99999"));

    let err = clock_at(&mut pool, "12345", "PRICHOD", "XX99", at(2025, 6, 2, 8, 0, 0))
        .expect_err("unknown site");
    assert!(matches!(err, AppError::UnknownSite(code) if code == "XX99"));
}

#[test]
fn missing_fields_are_reported_in_request_order() {
    let mut pool = memory_db();

    let err = ClockLogic::record(&mut pool, &ClockRequest::default()).unwrap_err();
    assert!(matches!(err, AppError::MissingField("osobne_cislo")));

    let req = ClockRequest {
        personnel_code: Some("12345".into()),
        kind: Some("   ".into()),
        site_code: Some("NM01".into()),
    };
    let err = ClockLogic::record(&mut pool, &req).unwrap_err();
    assert!(matches!(err, AppError::MissingField("typ_zaznamu")));

    let req = ClockRequest {
        site_code: None,
        ..ClockRequest::new("12345", "PRICHOD", "")
    };
    let err = ClockLogic::record(&mut pool, &req).unwrap_err();
    assert!(matches!(err, AppError::MissingField("kod_prevadzky")));
}

#[test]
fn invalid_kind_is_rejected_but_english_names_are_accepted() {
    let mut pool = memory_db();

    let err = clock_at(&mut pool, "12345", "BREAKFAST", "NM01", at(2025, 6, 2, 8, 0, 0))
        .expect_err("invalid kind");
    assert!(matches!(err, AppError::InvalidEventKind(k) if k == "BREAKFAST"));

    let rec = clock_at(&mut pool, "12345", "arrival", "NM01", at(2025, 6, 2, 8, 0, 0))
        .expect("english name accepted");
    assert_eq!(rec.event.kind, EventKind::Arrival);

    let rec = clock_at(&mut pool, "12345", "Lunch-Start", "NM01", at(2025, 6, 2, 12, 0, 0))
        .expect("english name accepted");
    assert_eq!(rec.event.kind, EventKind::LunchStart);
}

#[test]
fn deactivated_employee_cannot_clock() {
    let mut pool = memory_db();

    rattendance::core::provision::ProvisionLogic::set_active(&pool.conn, "54321", false)
        .expect("deactivate");

    let err = clock_at(&mut pool, "54321", "PRICHOD", "TN01", at(2025, 6, 2, 8, 0, 0))
        .expect_err("inactive employee");
    assert!(matches!(err, AppError::UnknownEmployee(_)));
}

#[test]
fn latest_event_breaks_timestamp_ties_by_id() {
    let mut pool = memory_db();
    let same = at(2025, 6, 2, 8, 0, 0);

    clock_at(&mut pool, "11111", "PRICHOD", "NM01", same).unwrap();
    let second = clock_at(&mut pool, "11111", "ODCHOD", "NM01", same).unwrap();

    let last = last_event_for_employee(&pool.conn, second.employee.id)
        .unwrap()
        .expect("an event");
    assert_eq!(last.id, second.event.id);
    assert_eq!(last.kind, EventKind::Departure);

    // Departure is the latest, so a new arrival is fine.
    clock_at(&mut pool, "11111", "PRICHOD", "NM01", same).expect("arrival after departure");
}

#[test]
fn stored_timestamp_round_trips_with_microseconds() {
    let mut pool = memory_db();
    let when = at(2025, 6, 2, 8, 0, 0) + chrono::Duration::microseconds(123_456);

    let rec = clock_at(&mut pool, "22222", "PRICHOD", "TN01", when).unwrap();
    let stored = load_all_events(&pool.conn).unwrap();

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].timestamp, when);
    assert_eq!(stored[0], rec.event);
}

#[test]
fn codes_are_matched_exactly() {
    let mut pool = memory_db();

    let err = clock_at(&mut pool, " 12345 ", "PRICHOD", "NM01", at(2025, 6, 2, 8, 0, 0))
        .expect_err("padded personnel code");
    assert!(matches!(err, AppError::UnknownEmployee(code) if code == " 12345 "));

    let err = clock_at(&mut pool, "12345", "PRICHOD", "NM01 ", at(2025, 6, 2, 8, 0, 0))
        .expect_err("padded site code");
    assert!(matches!(err, AppError::UnknownSite(code) if code == "NM01 "));

    assert!(load_all_events(&pool.conn).unwrap().is_empty());
}

#[test]
fn concurrent_arrivals_on_separate_connections_record_once() {
    const WRITERS: usize = 8;

    let db_path = setup_test_db("concurrent_arrivals");
    {
        let pool = DbPool::new(&db_path).expect("open db");
        init_db(&pool.conn).expect("migrate");
        seed_demo_data(&pool.conn).expect("seed");
    }

    let barrier = Barrier::new(WRITERS);
    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..WRITERS)
            .map(|_| {
                s.spawn(|| {
                    let mut pool = DbPool::new(&db_path).expect("open db");
                    barrier.wait();
                    ClockLogic::record(&mut pool, &ClockRequest::new("12345", "PRICHOD", "NM01"))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("writer thread"))
            .collect()
    });

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(accepted, 1);

    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert!(
            matches!(
                err,
                AppError::AlreadyClockedIn {
                    last: EventKind::Arrival
                }
            ),
            "unexpected rejection: {err}"
        );
    }

    let pool = DbPool::new(&db_path).expect("open db");
    assert_eq!(load_all_events(&pool.conn).unwrap().len(), 1);
}
