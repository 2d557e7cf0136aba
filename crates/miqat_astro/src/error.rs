//! Error types for observer validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constructing astronomical inputs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// Latitude outside [-90, 90] degrees or not a number.
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] degrees or not a number.
    InvalidLongitude(f64),
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatitude(v) => write!(f, "latitude {v} outside [-90, 90]"),
            Self::InvalidLongitude(v) => write!(f, "longitude {v} outside [-180, 180]"),
        }
    }
}

impl Error for AstroError {}
