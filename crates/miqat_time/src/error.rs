//! Error types for date construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-date handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple does not name a real Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Text could not be parsed.
    Parse(String),
    /// Date arithmetic left the representable range.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year:04}-{month:02}-{day:02}")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::OutOfRange => write!(f, "date outside supported range"),
        }
    }
}

impl Error for TimeError {}
