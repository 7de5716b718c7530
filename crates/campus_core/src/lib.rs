//! Core domain logic for campus event and student service management.
//! This crate is the single source of truth for business invariants:
//! venue/time conflict detection, seat allocation, and the service-request
//! lifecycle.

pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod parse;
pub mod report;
pub mod service;
pub mod store;

pub use error::{CampusError, CampusResult, EntityKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{times_overlap, Event};
pub use model::registration::{Registration, RegistrationStatus};
pub use model::request::{RequestStatus, ServiceRequest};
pub use model::student::Student;
pub use parse::{parse_date, parse_time, ParseError};
pub use report::{
    ConflictEntry, EventSummary, RequestExample, ServiceRequestReport, StatusCounts,
    StatusExamples,
};
pub use service::campus::{CampusSystem, NewServiceRequest};
pub use store::{
    open_store, CampusStore, MemoryStore, SqliteStore, StoreConfig, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
