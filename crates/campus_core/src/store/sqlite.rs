//! SQLite-backed campus store.
//!
//! # Responsibility
//! - Persist campus entities in a SQLite database file.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - `seq` ordering mirrors insertion order for events and registrations.
//! - The `violations` column stores a JSON array of event IDs.

use super::{CampusStore, StoreError, StoreResult};
use crate::db::{open_db, open_db_in_memory};
use crate::model::event::Event;
use crate::model::registration::{Registration, RegistrationStatus};
use crate::model::request::{RequestStatus, ServiceRequest};
use crate::model::student::Student;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use rusqlite::{params, Connection, Row};
use std::path::Path;

const EVENT_SELECT_SQL: &str = "SELECT
    event_id,
    title,
    organizer,
    date,
    start_time,
    end_time,
    venue,
    max_seats,
    is_valid,
    violations
FROM events";

const REQUEST_SELECT_SQL: &str = "SELECT
    request_id,
    student_id,
    category,
    location,
    description,
    status,
    created_at
FROM service_requests";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Campus store persisted in a SQLite database.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) a database file and applies migrations.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db(path)?;
        Ok(Self { conn })
    }

    /// Opens a private in-memory database. Used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self { conn })
    }
}

impl CampusStore for SqliteStore {
    fn insert_event(&mut self, event: &Event) -> StoreResult<()> {
        let violations = serde_json::to_string(&event.violations)
            .map_err(|err| StoreError::InvalidData(format!("violations encode: {err}")))?;
        self.conn.execute(
            "INSERT INTO events (
                event_id,
                title,
                organizer,
                date,
                start_time,
                end_time,
                venue,
                max_seats,
                is_valid,
                violations
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                event.event_id.as_str(),
                event.title.as_str(),
                event.organizer.as_str(),
                event.date.format(DATE_FORMAT).to_string(),
                event.start_time.format(TIME_FORMAT).to_string(),
                event.end_time.format(TIME_FORMAT).to_string(),
                event.venue.as_str(),
                event.max_seats,
                event.is_valid,
                violations,
            ],
        )?;
        Ok(())
    }

    fn event_exists(&self, event_id: &str) -> StoreResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM events WHERE event_id = ?1);",
            [event_id],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn get_event(&self, event_id: &str) -> StoreResult<Option<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} WHERE event_id = ?1;"))?;
        let mut rows = stmt.query([event_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_event_row(row)?));
        }
        Ok(None)
    }

    fn list_events(&self) -> StoreResult<Vec<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }

    fn events_in_slot(&self, date: NaiveDate, venue: &str) -> StoreResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EVENT_SELECT_SQL} WHERE date = ?1 AND venue = ?2 ORDER BY seq ASC;"
        ))?;
        let mut rows = stmt.query(params![date.format(DATE_FORMAT).to_string(), venue])?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }

    fn insert_student(&mut self, student: &Student) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO students (student_id, name, dept, year, contact)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                student.student_id.as_str(),
                student.name.as_str(),
                student.dept.as_str(),
                student.year,
                student.contact.as_str(),
            ],
        )?;
        Ok(())
    }

    fn student_exists(&self, student_id: &str) -> StoreResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM students WHERE student_id = ?1);",
            [student_id],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn insert_registration(&mut self, registration: &Registration) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO registrations (student_id, event_id, status)
             VALUES (?1, ?2, ?3);",
            params![
                registration.student_id.as_str(),
                registration.event_id.as_str(),
                registration_status_to_db(registration.status),
            ],
        )?;
        Ok(())
    }

    fn registration_exists(&self, student_id: &str, event_id: &str) -> StoreResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM registrations WHERE student_id = ?1 AND event_id = ?2
            );",
            params![student_id, event_id],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn count_registrations(
        &self,
        event_id: &str,
        status: RegistrationStatus,
    ) -> StoreResult<u32> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM registrations WHERE event_id = ?1 AND status = ?2;",
            params![event_id, registration_status_to_db(status)],
            |row| row.get::<_, u32>(0),
        )?;
        Ok(count)
    }

    fn insert_request(&mut self, request: &ServiceRequest) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO service_requests (
                request_id,
                student_id,
                category,
                location,
                description,
                status,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                request.request_id.as_str(),
                request.student_id.as_str(),
                request.category.as_str(),
                request.location.as_str(),
                request.description.as_str(),
                request_status_to_db(request.status),
                request.created_at.timestamp_millis(),
            ],
        )?;
        Ok(())
    }

    fn request_exists(&self, request_id: &str) -> StoreResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM service_requests WHERE request_id = ?1);",
            [request_id],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn get_request(&self, request_id: &str) -> StoreResult<Option<ServiceRequest>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REQUEST_SELECT_SQL} WHERE request_id = ?1;"))?;
        let mut rows = stmt.query([request_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_request_row(row)?));
        }
        Ok(None)
    }

    fn set_request_status(&mut self, request_id: &str, status: RequestStatus) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE service_requests SET status = ?1 WHERE request_id = ?2;",
            params![request_status_to_db(status), request_id],
        )?;
        if changed == 0 {
            return Err(StoreError::InvalidData(format!(
                "request `{request_id}` not stored"
            )));
        }
        Ok(())
    }

    fn list_requests(&self) -> StoreResult<Vec<ServiceRequest>> {
        let mut stmt = self.conn.prepare(&format!(
            "{REQUEST_SELECT_SQL} ORDER BY created_at ASC, seq ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut requests = Vec::new();
        while let Some(row) = rows.next()? {
            requests.push(parse_request_row(row)?);
        }
        Ok(requests)
    }
}

fn parse_event_row(row: &Row<'_>) -> StoreResult<Event> {
    let date_text: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT).map_err(|_| {
        StoreError::InvalidData(format!("invalid date value `{date_text}` in events.date"))
    })?;

    let start_text: String = row.get("start_time")?;
    let start_time = NaiveTime::parse_from_str(&start_text, TIME_FORMAT).map_err(|_| {
        StoreError::InvalidData(format!(
            "invalid time value `{start_text}` in events.start_time"
        ))
    })?;

    let end_text: String = row.get("end_time")?;
    let end_time = NaiveTime::parse_from_str(&end_text, TIME_FORMAT).map_err(|_| {
        StoreError::InvalidData(format!(
            "invalid time value `{end_text}` in events.end_time"
        ))
    })?;

    let violations_text: String = row.get("violations")?;
    let violations: Vec<String> = serde_json::from_str(&violations_text).map_err(|_| {
        StoreError::InvalidData(format!(
            "invalid violations value `{violations_text}` in events.violations"
        ))
    })?;

    Ok(Event {
        event_id: row.get("event_id")?,
        title: row.get("title")?,
        organizer: row.get("organizer")?,
        date,
        start_time,
        end_time,
        venue: row.get("venue")?,
        max_seats: row.get("max_seats")?,
        is_valid: row.get("is_valid")?,
        violations,
    })
}

fn parse_request_row(row: &Row<'_>) -> StoreResult<ServiceRequest> {
    let status_text: String = row.get("status")?;
    let status = parse_request_status(&status_text).ok_or_else(|| {
        StoreError::InvalidData(format!(
            "invalid status `{status_text}` in service_requests.status"
        ))
    })?;

    let created_at_ms: i64 = row.get("created_at")?;
    let created_at = Utc
        .timestamp_millis_opt(created_at_ms)
        .single()
        .ok_or_else(|| {
            StoreError::InvalidData(format!(
                "invalid created_at value `{created_at_ms}` in service_requests.created_at"
            ))
        })?;

    Ok(ServiceRequest {
        request_id: row.get("request_id")?,
        student_id: row.get("student_id")?,
        category: row.get("category")?,
        location: row.get("location")?,
        description: row.get("description")?,
        status,
        created_at,
    })
}

fn registration_status_to_db(status: RegistrationStatus) -> &'static str {
    match status {
        RegistrationStatus::Confirmed => "confirmed",
        RegistrationStatus::Waitlisted => "waitlisted",
    }
}

fn request_status_to_db(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Open => "open",
        RequestStatus::InProgress => "in_progress",
        RequestStatus::Resolved => "resolved",
    }
}

fn parse_request_status(value: &str) -> Option<RequestStatus> {
    match value {
        "open" => Some(RequestStatus::Open),
        "in_progress" => Some(RequestStatus::InProgress),
        "resolved" => Some(RequestStatus::Resolved),
        _ => None,
    }
}
