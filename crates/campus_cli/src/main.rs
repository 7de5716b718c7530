//! Demo entry point.
//!
//! # Responsibility
//! - Seed the sample campus dataset through the public facade.
//! - Print event, conflict, and service-request reports as JSON.
//!
//! Usage: `campus_cli [memory | <sqlite-db-path>]` (defaults to memory).

use campus_core::{
    parse_date, parse_time, CampusError, CampusStore, CampusSystem, Event, NewServiceRequest,
    RequestStatus, StoreConfig, Student,
};
use std::error::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join("campus_cli_logs");
    if let Err(err) =
        campus_core::init_logging(campus_core::default_log_level(), &log_dir.to_string_lossy())
    {
        // The demo still works without file logs.
        eprintln!("Warning: logging disabled: {err}");
    }

    let config = match std::env::args().nth(1).as_deref() {
        None | Some("memory") => StoreConfig::Memory,
        Some(path) => StoreConfig::Sqlite(path.into()),
    };

    let mut system = CampusSystem::from_config(&config)?;
    seed_sample_data(&mut system)?;

    println!("Event summaries:");
    for event_id in ["E101", "E102"] {
        println!(
            "{}",
            serde_json::to_string_pretty(&system.event_summary(event_id)?)?
        );
    }

    println!("Conflict report:");
    println!(
        "{}",
        serde_json::to_string_pretty(&system.conflict_report()?)?
    );

    println!("Service request report:");
    println!(
        "{}",
        serde_json::to_string_pretty(&system.service_request_report()?)?
    );

    Ok(())
}

/// Seeds the sample dataset. Duplicate-ID failures are tolerated so the demo
/// can be re-run against an existing database file.
fn seed_sample_data(system: &mut CampusSystem<Box<dyn CampusStore>>) -> Result<(), Box<dyn Error>> {
    let students = [
        ("S01", "Alice", "CSE", 3, "alice@example.com"),
        ("S02", "Bob", "ECE", 2, "bob@example.com"),
        ("S03", "Carol", "ME", 1, "carol@example.com"),
        ("S04", "Dave", "EEE", 4, "dave@example.com"),
        ("S05", "Eve", "Robotics", 3, "eve@example.com"),
        ("S06", "Frank", "Literature", 2, "frank@example.com"),
    ];
    for (id, name, dept, year, contact) in students {
        tolerate_duplicate(system.add_student(Student::new(id, name, dept, year, contact)))?;
    }

    let events = [
        ("E101", "AI Workshop", "AI Club", "2025-09-20", "10:00", "12:00", "Seminar Hall", 50),
        ("E102", "Guitar Jam", "Music Club", "2025-09-20", "11:00", "12:30", "Seminar Hall", 30),
        ("E103", "Drama Night", "Drama Club", "2025-09-22", "18:00", "20:00", "Auditorium", 100),
        ("E104", "Robotics Expo", "Robotics Club", "2025-09-23", "14:00", "17:00", "Lab Block", 40),
        ("E105", "Debate Comp.", "Literary Club", "2025-09-24", "15:00", "17:00", "Seminar Hall", 60),
    ];
    for (id, title, organizer, date, start, end, venue, seats) in events {
        tolerate_duplicate(system.add_event(Event::new(
            id,
            title,
            organizer,
            parse_date(date)?,
            parse_time(start)?,
            parse_time(end)?,
            venue,
            seats,
        )))?;
    }

    for (student_id, event_id) in [
        ("S01", "E101"),
        ("S02", "E101"),
        ("S03", "E101"),
        ("S04", "E102"),
        ("S05", "E104"),
        ("S06", "E105"),
    ] {
        tolerate_duplicate(system.register(student_id, event_id))?;
    }

    let requests = [
        ("R001", "S01", "Hostel Maintenance", "Hostel Block A", None),
        ("R002", "S02", "Library Access", "Central Library", Some(RequestStatus::InProgress)),
        ("R003", "S03", "Counseling", "Student Center", Some(RequestStatus::Resolved)),
    ];
    for (request_id, student_id, category, location, status) in requests {
        tolerate_duplicate(system.raise_request(NewServiceRequest {
            request_id: request_id.to_string(),
            student_id: student_id.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            description: None,
            status,
        }))?;
    }

    Ok(())
}

fn tolerate_duplicate<T>(result: Result<T, CampusError>) -> Result<(), CampusError> {
    match result {
        Ok(_) | Err(CampusError::DuplicateId { .. }) => Ok(()),
        Err(err) => Err(err),
    }
}
