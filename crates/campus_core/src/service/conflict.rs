//! Venue/time conflict resolution.
//!
//! # Invariants
//! - Only earlier events are checked against a candidate; earlier events are
//!   never retroactively invalidated.
//! - An event that is itself invalid still counts as a violation source for
//!   later candidates.

use crate::model::event::Event;

/// Collects the IDs of events in `earlier` that conflict with `candidate`:
/// same date, same venue, overlapping half-open time ranges.
///
/// Every match is collected, in the order of `earlier`, which callers must
/// supply in insertion order.
pub fn conflicting_ids(candidate: &Event, earlier: &[Event]) -> Vec<String> {
    earlier
        .iter()
        .filter(|existing| existing.occupies_same_slot(candidate))
        .map(|existing| existing.event_id.clone())
        .collect()
}
