//! Storage abstraction over interchangeable campus data backends.
//!
//! # Responsibility
//! - Define the data-access contract shared by the in-process store and the
//!   SQLite adapter.
//! - Select a backend once, at construction time, from explicit
//!   configuration.
//!
//! # Invariants
//! - `list_events` and `events_in_slot` preserve event insertion order.
//! - `list_requests` returns requests in creation-time order.
//! - Stores persist what they are given; identity and lifecycle rules are
//!   enforced by the service layer.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::db::DbError;
use crate::model::event::Event;
use crate::model::registration::{Registration, RegistrationStatus};
use crate::model::request::{RequestStatus, ServiceRequest};
use crate::model::student::Student;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failure.
#[derive(Debug)]
pub enum StoreError {
    /// SQLite transport or schema-version failure.
    Db(DbError),
    /// Persisted state that cannot be interpreted, or a write that
    /// contradicts already-stored identity.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Backend selection, decided once at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Indexed in-process collections; state is lost on drop.
    Memory,
    /// SQLite database file at the given path.
    Sqlite(PathBuf),
}

/// Data-access contract for campus entities.
///
/// Write methods take `&mut self`: the core assumes a single logical writer
/// and every mutation is one atomic step.
pub trait CampusStore {
    fn insert_event(&mut self, event: &Event) -> StoreResult<()>;
    fn event_exists(&self, event_id: &str) -> StoreResult<bool>;
    fn get_event(&self, event_id: &str) -> StoreResult<Option<Event>>;
    /// All events, in insertion order.
    fn list_events(&self) -> StoreResult<Vec<Event>>;
    /// Events on `date` at `venue`, in insertion order. Interval overlap is
    /// evaluated by the caller so the predicate lives in exactly one place.
    fn events_in_slot(&self, date: NaiveDate, venue: &str) -> StoreResult<Vec<Event>>;

    fn insert_student(&mut self, student: &Student) -> StoreResult<()>;
    fn student_exists(&self, student_id: &str) -> StoreResult<bool>;

    fn insert_registration(&mut self, registration: &Registration) -> StoreResult<()>;
    fn registration_exists(&self, student_id: &str, event_id: &str) -> StoreResult<bool>;
    /// Live count over the current registration set; never cached.
    fn count_registrations(
        &self,
        event_id: &str,
        status: RegistrationStatus,
    ) -> StoreResult<u32>;

    fn insert_request(&mut self, request: &ServiceRequest) -> StoreResult<()>;
    fn request_exists(&self, request_id: &str) -> StoreResult<bool>;
    fn get_request(&self, request_id: &str) -> StoreResult<Option<ServiceRequest>>;
    fn set_request_status(&mut self, request_id: &str, status: RequestStatus) -> StoreResult<()>;
    /// All requests, ordered by creation time (FIFO for equal stamps).
    fn list_requests(&self) -> StoreResult<Vec<ServiceRequest>>;
}

impl<S: CampusStore + ?Sized> CampusStore for Box<S> {
    fn insert_event(&mut self, event: &Event) -> StoreResult<()> {
        (**self).insert_event(event)
    }

    fn event_exists(&self, event_id: &str) -> StoreResult<bool> {
        (**self).event_exists(event_id)
    }

    fn get_event(&self, event_id: &str) -> StoreResult<Option<Event>> {
        (**self).get_event(event_id)
    }

    fn list_events(&self) -> StoreResult<Vec<Event>> {
        (**self).list_events()
    }

    fn events_in_slot(&self, date: NaiveDate, venue: &str) -> StoreResult<Vec<Event>> {
        (**self).events_in_slot(date, venue)
    }

    fn insert_student(&mut self, student: &Student) -> StoreResult<()> {
        (**self).insert_student(student)
    }

    fn student_exists(&self, student_id: &str) -> StoreResult<bool> {
        (**self).student_exists(student_id)
    }

    fn insert_registration(&mut self, registration: &Registration) -> StoreResult<()> {
        (**self).insert_registration(registration)
    }

    fn registration_exists(&self, student_id: &str, event_id: &str) -> StoreResult<bool> {
        (**self).registration_exists(student_id, event_id)
    }

    fn count_registrations(
        &self,
        event_id: &str,
        status: RegistrationStatus,
    ) -> StoreResult<u32> {
        (**self).count_registrations(event_id, status)
    }

    fn insert_request(&mut self, request: &ServiceRequest) -> StoreResult<()> {
        (**self).insert_request(request)
    }

    fn request_exists(&self, request_id: &str) -> StoreResult<bool> {
        (**self).request_exists(request_id)
    }

    fn get_request(&self, request_id: &str) -> StoreResult<Option<ServiceRequest>> {
        (**self).get_request(request_id)
    }

    fn set_request_status(&mut self, request_id: &str, status: RequestStatus) -> StoreResult<()> {
        (**self).set_request_status(request_id, status)
    }

    fn list_requests(&self) -> StoreResult<Vec<ServiceRequest>> {
        (**self).list_requests()
    }
}

/// Opens the backend described by `config`.
pub fn open_store(config: &StoreConfig) -> StoreResult<Box<dyn CampusStore>> {
    match config {
        StoreConfig::Memory => Ok(Box::new(MemoryStore::new())),
        StoreConfig::Sqlite(path) => Ok(Box::new(SqliteStore::open(path)?)),
    }
}
