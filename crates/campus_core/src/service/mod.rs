//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep conflict and seating decisions in pure, independently testable
//!   helpers.

pub mod campus;
pub mod conflict;
pub mod seating;
