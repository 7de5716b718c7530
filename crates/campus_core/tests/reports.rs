use campus_core::{
    parse_date, parse_time, CampusError, CampusStore, CampusSystem, EntityKind, Event,
    MemoryStore, NewServiceRequest, RequestStatus, SqliteStore, Student,
};

fn backends() -> Vec<CampusSystem<Box<dyn CampusStore>>> {
    vec![
        CampusSystem::new(Box::new(MemoryStore::new()) as Box<dyn CampusStore>),
        CampusSystem::new(Box::new(SqliteStore::open_in_memory().unwrap()) as Box<dyn CampusStore>),
    ]
}

fn event(id: &str, date: &str, start: &str, end: &str, venue: &str, seats: u32) -> Event {
    Event::new(
        id,
        format!("{id} title"),
        "Organizer",
        parse_date(date).unwrap(),
        parse_time(start).unwrap(),
        parse_time(end).unwrap(),
        venue,
        seats,
    )
}

fn new_request(request_id: &str, category: &str, status: Option<RequestStatus>) -> NewServiceRequest {
    NewServiceRequest {
        request_id: request_id.to_string(),
        student_id: "S01".to_string(),
        category: category.to_string(),
        location: "Campus".to_string(),
        description: None,
        status,
    }
}

#[test]
fn event_summary_reports_live_counts_and_conflict_state() {
    for mut system in backends() {
        system
            .add_student(Student::new("S01", "Alice", "CSE", 3, "alice@example.com"))
            .unwrap();
        system
            .add_student(Student::new("S02", "Bob", "ECE", 2, "bob@example.com"))
            .unwrap();
        system
            .add_event(event("E1", "2025-09-20", "10:00", "12:00", "Hall", 1))
            .unwrap();

        system.register("S01", "E1").unwrap();
        system.register("S02", "E1").unwrap();

        let summary = system.event_summary("E1").unwrap();
        assert_eq!(summary.max_seats, 1);
        assert_eq!(summary.confirmed, 1);
        assert_eq!(summary.waitlisted, 1);
        assert!(summary.is_valid);
        assert!(summary.violations.is_empty());
    }
}

#[test]
fn event_summary_unknown_id_is_not_found() {
    for system in backends() {
        let err = system.event_summary("E404").unwrap_err();
        assert!(matches!(
            err,
            CampusError::NotFound {
                kind: EntityKind::Event,
                ref id
            } if id == "E404"
        ));
    }
}

#[test]
fn conflict_report_lists_only_invalidated_events() {
    for mut system in backends() {
        system
            .add_event(event("E101", "2025-09-20", "10:00", "12:00", "Seminar Hall", 50))
            .unwrap();
        system
            .add_event(event("E102", "2025-09-20", "11:00", "12:30", "Seminar Hall", 30))
            .unwrap();
        system
            .add_event(event("E103", "2025-09-22", "18:00", "20:00", "Auditorium", 100))
            .unwrap();

        let report = system.conflict_report().unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].event_id, "E102");
        assert_eq!(report[0].violations, ["E101"]);
    }
}

#[test]
fn conflict_report_is_empty_without_overlaps() {
    for mut system in backends() {
        system
            .add_event(event("E1", "2025-09-20", "10:00", "12:00", "Hall", 10))
            .unwrap();
        system
            .add_event(event("E2", "2025-09-20", "12:00", "13:00", "Hall", 10))
            .unwrap();

        assert!(system.conflict_report().unwrap().is_empty());
    }
}

#[test]
fn request_report_counts_buckets_and_caps_examples() {
    for mut system in backends() {
        system
            .add_student(Student::new("S01", "Alice", "CSE", 3, "alice@example.com"))
            .unwrap();

        for n in 1..=5 {
            system
                .raise_request(new_request(&format!("R{n:03}"), "Maintenance", None))
                .unwrap();
        }
        system
            .raise_request(new_request(
                "R006",
                "Library Access",
                Some(RequestStatus::InProgress),
            ))
            .unwrap();
        system
            .raise_request(new_request(
                "R007",
                "Counseling",
                Some(RequestStatus::Resolved),
            ))
            .unwrap();

        let report = system.service_request_report().unwrap();
        assert_eq!(report.counts.open, 5);
        assert_eq!(report.counts.in_progress, 1);
        assert_eq!(report.counts.resolved, 1);

        let open_ids: Vec<_> = report
            .examples
            .open
            .iter()
            .map(|example| example.request_id.as_str())
            .collect();
        assert_eq!(open_ids, ["R001", "R002", "R003"]);
        assert_eq!(report.examples.in_progress[0].category, "Library Access");
        assert_eq!(report.examples.resolved[0].request_id, "R007");
    }
}

#[test]
fn request_report_follows_transitions() {
    for mut system in backends() {
        system
            .add_student(Student::new("S01", "Alice", "CSE", 3, "alice@example.com"))
            .unwrap();
        system
            .raise_request(new_request("R001", "Maintenance", None))
            .unwrap();

        system
            .update_request_status("R001", RequestStatus::InProgress)
            .unwrap();
        let report = system.service_request_report().unwrap();
        assert_eq!(report.counts.open, 0);
        assert_eq!(report.counts.in_progress, 1);
        assert_eq!(report.examples.in_progress[0].request_id, "R001");
    }
}
