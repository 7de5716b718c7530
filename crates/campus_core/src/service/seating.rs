//! Seat allocation decision.
//!
//! # Invariants
//! - Allocation is first-come-first-serve; a seat is never revoked or
//!   promoted afterwards.

use crate::model::registration::RegistrationStatus;

/// Status for the next registration, given the live confirmed count.
///
/// `max_seats == 0` waitlists every registration.
pub fn seat_status(confirmed: u32, max_seats: u32) -> RegistrationStatus {
    if confirmed < max_seats {
        RegistrationStatus::Confirmed
    } else {
        RegistrationStatus::Waitlisted
    }
}
