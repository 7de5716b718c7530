use campus_core::db::migrations::latest_version;
use campus_core::db::DbError;
use campus_core::{
    parse_date, parse_time, CampusStore, Event, Registration, RegistrationStatus, ServiceRequest,
    SqliteStore, StoreError, Student,
};
use chrono::{TimeZone, Utc};
use rusqlite::Connection;

fn event(id: &str, date: &str, start: &str, end: &str, venue: &str) -> Event {
    Event::new(
        id,
        format!("{id} title"),
        "Organizer",
        parse_date(date).unwrap(),
        parse_time(start).unwrap(),
        parse_time(end).unwrap(),
        venue,
        10,
    )
}

#[test]
fn migrations_report_a_version() {
    assert!(latest_version() > 0);
}

#[test]
fn data_survives_reopen_from_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campus.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        let mut invalid = event("E2", "2025-09-20", "11:00", "12:30", "Hall");
        invalid.is_valid = false;
        invalid.violations = vec!["E1".to_string()];

        store
            .insert_event(&event("E1", "2025-09-20", "10:00", "12:00", "Hall"))
            .unwrap();
        store.insert_event(&invalid).unwrap();
        store
            .insert_student(&Student::new("S01", "Alice", "CSE", 3, "alice@example.com"))
            .unwrap();
        store
            .insert_registration(&Registration::new(
                "S01",
                "E1",
                RegistrationStatus::Confirmed,
            ))
            .unwrap();
    }

    // Reopen: migrations are already applied and state must round-trip.
    let store = SqliteStore::open(&path).unwrap();
    let events = store.list_events().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_id, "E1");
    assert!(events[0].is_valid);
    assert_eq!(events[1].violations, ["E1"]);
    assert_eq!(
        events[1].start_time,
        parse_time("11:00").unwrap()
    );

    assert!(store.student_exists("S01").unwrap());
    assert_eq!(
        store
            .count_registrations("E1", RegistrationStatus::Confirmed)
            .unwrap(),
        1
    );
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = SqliteStore::open(&path).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Db(DbError::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn events_in_slot_filters_and_preserves_insertion_order() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store
        .insert_event(&event("E3", "2025-09-20", "14:00", "15:00", "Hall"))
        .unwrap();
    store
        .insert_event(&event("E1", "2025-09-20", "10:00", "12:00", "Hall"))
        .unwrap();
    store
        .insert_event(&event("E2", "2025-09-20", "10:00", "12:00", "Auditorium"))
        .unwrap();
    store
        .insert_event(&event("E4", "2025-09-21", "10:00", "12:00", "Hall"))
        .unwrap();

    let slot = store
        .events_in_slot(parse_date("2025-09-20").unwrap(), "Hall")
        .unwrap();
    let ids: Vec<_> = slot.iter().map(|event| event.event_id.as_str()).collect();
    assert_eq!(ids, ["E3", "E1"]);
}

#[test]
fn requests_list_in_creation_time_order() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let stamp = |ms| Utc.timestamp_millis_opt(ms).unwrap();

    store
        .insert_request(
            &ServiceRequest::new("R2", "S01", "Library", "Campus").with_created_at(stamp(2_000)),
        )
        .unwrap();
    store
        .insert_request(
            &ServiceRequest::new("R1", "S01", "Maintenance", "Campus")
                .with_created_at(stamp(1_000)),
        )
        .unwrap();
    store
        .insert_request(
            &ServiceRequest::new("R3", "S01", "Counseling", "Campus")
                .with_created_at(stamp(2_000)),
        )
        .unwrap();

    let ids: Vec<_> = store
        .list_requests()
        .unwrap()
        .into_iter()
        .map(|request| request.request_id)
        .collect();
    // Equal stamps fall back to insertion order.
    assert_eq!(ids, ["R1", "R2", "R3"]);
}

#[test]
fn duplicate_registration_violates_unique_constraint() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store
        .insert_registration(&Registration::new(
            "S01",
            "E1",
            RegistrationStatus::Confirmed,
        ))
        .unwrap();

    let err = store
        .insert_registration(&Registration::new(
            "S01",
            "E1",
            RegistrationStatus::Waitlisted,
        ))
        .unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
}
