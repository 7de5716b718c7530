//! Reporting projections over stored campus entities.
//!
//! # Responsibility
//! - Join events with live registration counts and stored violations.
//! - Bucket service requests by status with capped examples.
//!
//! # Invariants
//! - Counts are computed from current stored state at call time.
//! - Example lists keep at most `REQUEST_EXAMPLE_CAP` entries per bucket,
//!   first encountered first kept.

use crate::model::event::Event;
use crate::model::request::{RequestStatus, ServiceRequest};
use serde::Serialize;

/// Maximum example rows kept per status bucket in the request report.
pub const REQUEST_EXAMPLE_CAP: usize = 3;

/// One event joined with its live counts and stored conflict state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub event_id: String,
    pub title: String,
    pub venue: String,
    pub max_seats: u32,
    pub confirmed: u32,
    pub waitlisted: u32,
    pub violations: Vec<String>,
    pub is_valid: bool,
}

/// One invalid event with its recorded violation sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictEntry {
    pub event_id: String,
    pub violations: Vec<String>,
}

/// Request totals per status bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: u32,
    pub in_progress: u32,
    pub resolved: u32,
}

/// Capped `(request_id, category)` sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestExample {
    pub request_id: String,
    pub category: String,
}

/// Example rows per status bucket, in storage iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusExamples {
    pub open: Vec<RequestExample>,
    pub in_progress: Vec<RequestExample>,
    pub resolved: Vec<RequestExample>,
}

/// Service-request report: bucket counts plus capped examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceRequestReport {
    pub counts: StatusCounts,
    pub examples: StatusExamples,
}

/// Joins one event with its live registration counts.
pub fn summarize_event(event: &Event, confirmed: u32, waitlisted: u32) -> EventSummary {
    EventSummary {
        event_id: event.event_id.clone(),
        title: event.title.clone(),
        venue: event.venue.clone(),
        max_seats: event.max_seats,
        confirmed,
        waitlisted,
        violations: event.violations.clone(),
        is_valid: event.is_valid,
    }
}

/// Buckets requests by status, counting all and sampling the first
/// `REQUEST_EXAMPLE_CAP` per bucket in the given order.
pub fn build_request_report(requests: &[ServiceRequest]) -> ServiceRequestReport {
    let mut report = ServiceRequestReport::default();
    for request in requests {
        let (count, examples) = match request.status {
            RequestStatus::Open => (&mut report.counts.open, &mut report.examples.open),
            RequestStatus::InProgress => (
                &mut report.counts.in_progress,
                &mut report.examples.in_progress,
            ),
            RequestStatus::Resolved => {
                (&mut report.counts.resolved, &mut report.examples.resolved)
            }
        };
        *count += 1;
        if examples.len() < REQUEST_EXAMPLE_CAP {
            examples.push(RequestExample {
                request_id: request.request_id.clone(),
                category: request.category.clone(),
            });
        }
    }
    report
}
