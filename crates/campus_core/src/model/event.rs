//! Event domain model and schedule overlap predicate.
//!
//! # Responsibility
//! - Define the canonical event record held by the registry.
//! - Provide the half-open time-overlap predicate used for conflict
//!   detection.
//!
//! # Invariants
//! - `event_id` is stable and never reused for another event.
//! - `is_valid` and `violations` are fixed when the event is inserted;
//!   later insertions never rewrite them.
//! - Time ranges are half-open `[start_time, end_time)`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Scheduled event occupying one venue for a half-open time range.
///
/// The first event inserted for a given venue/date/time keeps
/// `is_valid = true`; later overlapping events are inserted with
/// `is_valid = false` and the earlier IDs recorded in `violations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub title: String,
    pub organizer: String,
    pub date: NaiveDate,
    /// Inclusive start of the occupied range.
    pub start_time: NaiveTime,
    /// Exclusive end of the occupied range.
    pub end_time: NaiveTime,
    pub venue: String,
    /// Confirmed-seat capacity; zero means every registration waitlists.
    pub max_seats: u32,
    /// False when this event overlapped earlier events at insertion time.
    pub is_valid: bool,
    /// IDs of earlier conflicting events, in their insertion order.
    pub violations: Vec<String>,
}

impl Event {
    /// Creates a valid event with no recorded violations.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_id: impl Into<String>,
        title: impl Into<String>,
        organizer: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        venue: impl Into<String>,
        max_seats: u32,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            title: title.into(),
            organizer: organizer.into(),
            date,
            start_time,
            end_time,
            venue: venue.into(),
            max_seats,
            is_valid: true,
            violations: Vec::new(),
        }
    }

    /// Returns whether this event competes for the same venue slot as
    /// `other`: same date, same venue, overlapping time ranges.
    pub fn occupies_same_slot(&self, other: &Event) -> bool {
        self.date == other.date
            && self.venue == other.venue
            && times_overlap(
                self.start_time,
                self.end_time,
                other.start_time,
                other.end_time,
            )
    }
}

/// Returns whether `[a_start, a_end)` and `[b_start, b_end)` intersect.
///
/// Touching ranges (`a_end == b_start`) never overlap.
pub fn times_overlap(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    !(a_end <= b_start || a_start >= b_end)
}

#[cfg(test)]
mod tests {
    use super::times_overlap;
    use chrono::NaiveTime;

    fn at(text: &str) -> NaiveTime {
        NaiveTime::parse_from_str(text, "%H:%M").unwrap()
    }

    #[test]
    fn partial_overlap_is_detected() {
        assert!(times_overlap(at("10:00"), at("12:00"), at("11:00"), at("12:30")));
        assert!(times_overlap(at("11:00"), at("12:30"), at("10:00"), at("12:00")));
    }

    #[test]
    fn containment_is_detected() {
        assert!(times_overlap(at("10:00"), at("12:00"), at("10:30"), at("11:00")));
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        assert!(!times_overlap(at("10:00"), at("12:00"), at("12:00"), at("13:00")));
        assert!(!times_overlap(at("12:00"), at("13:00"), at("10:00"), at("12:00")));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!times_overlap(at("08:00"), at("09:00"), at("10:00"), at("11:00")));
    }

    #[test]
    fn zero_duration_range_at_boundary_does_not_overlap() {
        assert!(!times_overlap(at("10:00"), at("10:00"), at("10:00"), at("12:00")));
        assert!(!times_overlap(at("12:00"), at("12:00"), at("10:00"), at("12:00")));
    }
}
