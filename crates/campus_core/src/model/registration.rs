//! Registration domain model.
//!
//! # Invariants
//! - Status is decided by the seat allocator at creation and never
//!   transitions afterwards; there is no revocation or waitlist promotion.
//! - At most one registration exists per `(student_id, event_id)` pair.

use serde::{Deserialize, Serialize};

/// Seat outcome for a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    /// Holds one of the event's `max_seats` confirmed seats.
    Confirmed,
    /// Overflow registration beyond confirmed capacity.
    Waitlisted,
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Waitlisted => write!(f, "Waitlisted"),
        }
    }
}

/// Link between one student and one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub student_id: String,
    pub event_id: String,
    pub status: RegistrationStatus,
}

impl Registration {
    pub fn new(
        student_id: impl Into<String>,
        event_id: impl Into<String>,
        status: RegistrationStatus,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            event_id: event_id.into(),
            status,
        }
    }
}
