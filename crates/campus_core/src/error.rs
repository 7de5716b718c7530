//! Error taxonomy for core campus operations.
//!
//! # Invariants
//! - Every failure is surfaced synchronously to the caller; nothing is
//!   retried or swallowed inside the core.

use crate::model::request::RequestStatus;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CampusResult<T> = Result<T, CampusError>;

/// Entity class named by identity errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Event,
    Student,
    Registration,
    Request,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Event => write!(f, "event"),
            Self::Student => write!(f, "student"),
            Self::Registration => write!(f, "registration"),
            Self::Request => write!(f, "service request"),
        }
    }
}

/// Failure of a core campus operation.
#[derive(Debug)]
pub enum CampusError {
    /// Identity collision on insert.
    DuplicateId { kind: EntityKind, id: String },
    /// Reference to a nonexistent entity.
    NotFound { kind: EntityKind, id: String },
    /// Illegal service-request status change.
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },
    /// Storage-layer failure.
    Store(StoreError),
}

impl Display for CampusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { kind, id } => write!(f, "{kind} ID already exists: {id}"),
            Self::NotFound { kind, id } => write!(f, "unknown {kind}: {id}"),
            Self::InvalidTransition { from, to } => {
                write!(f, "invalid status transition: {from} -> {to}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CampusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CampusError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
