//! Domain models for events, students, registrations, and service requests.
//!
//! # Responsibility
//! - Define the canonical records shared by storage and service layers.
//! - Keep per-type lifecycle rules (overlap predicate, transition table)
//!   next to the data they govern.
//!
//! # Invariants
//! - Every record is identified by a caller-supplied, globally unique,
//!   external string ID (`E101`, `S01`, `R001`).

pub mod event;
pub mod registration;
pub mod request;
pub mod student;
