//! Strict parsing for textual date and time literals at the boundary.
//!
//! # Responsibility
//! - Parse `YYYY-MM-DD` and 24-hour `HH:MM` exactly; reject everything else.
//!
//! # Invariants
//! - Parse failures surface as `ParseError`; nothing is coerced or defaulted.

use chrono::{NaiveDate, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Malformed date/time literal received at a textual interface.
#[derive(Debug)]
pub enum ParseError {
    Date {
        input: String,
        source: chrono::ParseError,
    },
    Time {
        input: String,
        source: chrono::ParseError,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date { input, .. } => {
                write!(f, "invalid date literal `{input}`: expected YYYY-MM-DD")
            }
            Self::Time { input, .. } => {
                write!(f, "invalid time literal `{input}`: expected HH:MM")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Date { source, .. } | Self::Time { source, .. } => Some(source),
        }
    }
}

/// Parses a `YYYY-MM-DD` date literal.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| ParseError::Date {
        input: input.to_string(),
        source,
    })
}

/// Parses a 24-hour `HH:MM` time literal.
pub fn parse_time(input: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(input, TIME_FORMAT).map_err(|source| ParseError::Time {
        input: input.to_string(),
        source,
    })
}
