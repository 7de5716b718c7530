//! Campus system facade.
//!
//! # Responsibility
//! - Orchestrate store calls into the core campus operations: event
//!   insertion with conflict detection, seat allocation, service-request
//!   lifecycle, and reporting.
//! - Stay storage-agnostic; backends are injected at construction.
//!
//! # Invariants
//! - Every operation is a single atomic step: identity and precondition
//!   checks complete before any mutation, and a failed operation changes
//!   no state.
//! - There is no ambient system instance; callers own and pass the facade.

use crate::error::{CampusError, CampusResult, EntityKind};
use crate::model::event::Event;
use crate::model::registration::{Registration, RegistrationStatus};
use crate::model::request::{RequestStatus, ServiceRequest};
use crate::model::student::Student;
use crate::report::{
    build_request_report, summarize_event, ConflictEntry, EventSummary, ServiceRequestReport,
};
use crate::service::conflict::conflicting_ids;
use crate::service::seating::seat_status;
use crate::store::{open_store, CampusStore, StoreConfig, StoreError};
use log::{info, warn};

/// Input model for raising a service request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServiceRequest {
    pub request_id: String,
    pub student_id: String,
    pub category: String,
    pub location: String,
    /// Defaults to empty.
    pub description: Option<String>,
    /// Defaults to `Open`. Non-`Open` values are accepted for seeding and
    /// are not validated beyond being one of the three legal states.
    pub status: Option<RequestStatus>,
}

/// Facade over one campus store. Assumes a single logical writer; callers
/// needing concurrency must add external mutual exclusion per aggregate.
pub struct CampusSystem<S: CampusStore> {
    store: S,
}

impl CampusSystem<Box<dyn CampusStore>> {
    /// Opens the configured backend and wraps it in a system instance.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self::new(open_store(config)?))
    }
}

impl<S: CampusStore> CampusSystem<S> {
    /// Creates a system over the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Inserts an event, evaluating conflicts against earlier events.
    ///
    /// A duplicate `event_id` is rejected before conflict evaluation. When
    /// earlier events occupy the same venue slot, the new event is stored
    /// invalid with their IDs (in insertion order) as violations; the
    /// earlier events keep their validity.
    pub fn add_event(&mut self, mut event: Event) -> CampusResult<()> {
        if self.store.event_exists(&event.event_id)? {
            return Err(CampusError::DuplicateId {
                kind: EntityKind::Event,
                id: event.event_id,
            });
        }

        let earlier = self.store.events_in_slot(event.date, &event.venue)?;
        let violations = conflicting_ids(&event, &earlier);
        if !violations.is_empty() {
            warn!(
                "event=event_added module=service status=ok event_id={} valid=false violations={}",
                event.event_id,
                violations.len()
            );
            event.is_valid = false;
            event.violations = violations;
        } else {
            info!(
                "event=event_added module=service status=ok event_id={} valid=true",
                event.event_id
            );
        }

        self.store.insert_event(&event)?;
        Ok(())
    }

    /// Adds a student to the registry.
    pub fn add_student(&mut self, student: Student) -> CampusResult<()> {
        if self.store.student_exists(&student.student_id)? {
            return Err(CampusError::DuplicateId {
                kind: EntityKind::Student,
                id: student.student_id,
            });
        }
        self.store.insert_student(&student)?;
        Ok(())
    }

    /// Registers a student to an event, allocating a seat or a waitlist
    /// slot.
    ///
    /// The confirmed count is recomputed from the store on every call, so
    /// sequential registrations allocate monotonically. A second
    /// registration for the same `(student, event)` pair is rejected.
    pub fn register(&mut self, student_id: &str, event_id: &str) -> CampusResult<Registration> {
        if !self.store.student_exists(student_id)? {
            return Err(CampusError::NotFound {
                kind: EntityKind::Student,
                id: student_id.to_string(),
            });
        }
        let event = self.store.get_event(event_id)?.ok_or_else(|| {
            CampusError::NotFound {
                kind: EntityKind::Event,
                id: event_id.to_string(),
            }
        })?;
        if self.store.registration_exists(student_id, event_id)? {
            return Err(CampusError::DuplicateId {
                kind: EntityKind::Registration,
                id: format!("{student_id}/{event_id}"),
            });
        }

        let confirmed = self
            .store
            .count_registrations(event_id, RegistrationStatus::Confirmed)?;
        let status = seat_status(confirmed, event.max_seats);
        let registration = Registration::new(student_id, event_id, status);
        self.store.insert_registration(&registration)?;

        info!(
            "event=registration_added module=service status=ok event_id={event_id} outcome={status} confirmed_before={confirmed}"
        );
        Ok(registration)
    }

    /// Raises a service request owned by an existing student.
    pub fn raise_request(&mut self, input: NewServiceRequest) -> CampusResult<ServiceRequest> {
        if !self.store.student_exists(&input.student_id)? {
            return Err(CampusError::NotFound {
                kind: EntityKind::Student,
                id: input.student_id,
            });
        }
        if self.store.request_exists(&input.request_id)? {
            return Err(CampusError::DuplicateId {
                kind: EntityKind::Request,
                id: input.request_id,
            });
        }

        let mut request = ServiceRequest::new(
            input.request_id,
            input.student_id,
            input.category,
            input.location,
        );
        if let Some(description) = input.description {
            request.description = description;
        }
        if let Some(status) = input.status {
            request.status = status;
        }

        self.store.insert_request(&request)?;
        Ok(request)
    }

    /// Advances a service request along Open -> In-Progress -> Resolved.
    ///
    /// Any other change, including same-state no-ops and skips, fails with
    /// `InvalidTransition` naming source and target.
    pub fn update_request_status(
        &mut self,
        request_id: &str,
        new_status: RequestStatus,
    ) -> CampusResult<()> {
        let request = self.store.get_request(request_id)?.ok_or_else(|| {
            CampusError::NotFound {
                kind: EntityKind::Request,
                id: request_id.to_string(),
            }
        })?;

        if !request.status.can_transition_to(new_status) {
            return Err(CampusError::InvalidTransition {
                from: request.status,
                to: new_status,
            });
        }

        self.store.set_request_status(request_id, new_status)?;
        info!(
            "event=request_transition module=service status=ok request_id={request_id} from={} to={new_status}",
            request.status
        );
        Ok(())
    }

    /// Joins one event with its live confirmed/waitlisted counts and stored
    /// violations.
    pub fn event_summary(&self, event_id: &str) -> CampusResult<EventSummary> {
        let event = self.store.get_event(event_id)?.ok_or_else(|| {
            CampusError::NotFound {
                kind: EntityKind::Event,
                id: event_id.to_string(),
            }
        })?;
        let confirmed = self
            .store
            .count_registrations(event_id, RegistrationStatus::Confirmed)?;
        let waitlisted = self
            .store
            .count_registrations(event_id, RegistrationStatus::Waitlisted)?;
        Ok(summarize_event(&event, confirmed, waitlisted))
    }

    /// Lists `(event_id, violations)` for every stored event invalidated by
    /// overlap, in store iteration order.
    pub fn conflict_report(&self) -> CampusResult<Vec<ConflictEntry>> {
        let entries = self
            .store
            .list_events()?
            .into_iter()
            .filter(|event| !event.is_valid && !event.violations.is_empty())
            .map(|event| ConflictEntry {
                event_id: event.event_id,
                violations: event.violations,
            })
            .collect();
        Ok(entries)
    }

    /// Buckets all service requests by status, with capped examples in
    /// creation-time order.
    pub fn service_request_report(&self) -> CampusResult<ServiceRequestReport> {
        let requests = self.store.list_requests()?;
        Ok(build_request_report(&requests))
    }
}
