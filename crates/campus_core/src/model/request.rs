//! Service request domain model and status transition table.
//!
//! # Responsibility
//! - Define the service request record and its linear status lifecycle.
//! - Keep the allowed-transition table next to the status type so every
//!   caller shares one source of truth.
//!
//! # Invariants
//! - Status only ever advances Open -> In-Progress -> Resolved.
//! - `created_at` ordering is significant for reporting and is never
//!   rewritten after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Raised but not picked up yet.
    Open,
    /// Being worked on.
    #[serde(rename = "In-Progress")]
    InProgress,
    /// Terminal state.
    Resolved,
}

impl RequestStatus {
    /// Returns whether the linear lifecycle allows moving to `next`.
    ///
    /// Same-state no-ops and skips are not transitions and return `false`.
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::InProgress) | (Self::InProgress, Self::Resolved)
        )
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::InProgress => write!(f, "In-Progress"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// Service request raised by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub request_id: String,
    pub student_id: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl ServiceRequest {
    /// Creates a request stamped with the current time.
    ///
    /// Status starts at `Open`; seeding paths may overwrite it before
    /// insertion.
    pub fn new(
        request_id: impl Into<String>,
        student_id: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            student_id: student_id.into(),
            category: category.into(),
            location: location.into(),
            description: String::new(),
            status: RequestStatus::Open,
            created_at: Utc::now(),
        }
    }

    /// Replaces the creation stamp. Used by tests and import paths where
    /// creation time already exists externally.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
