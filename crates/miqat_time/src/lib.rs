//! Civil dates, Julian Day arithmetic and minute rounding.
//!
//! This crate provides:
//! - Julian Day / Julian Century conversion (Meeus, ch. 7)
//! - `CalendarDate`, a validated proleptic Gregorian date
//! - `TimeComponents`, fractional hours split into h/m/s and resolved to UTC
//! - Minute rounding of UTC instants

pub mod components;
pub mod date;
pub mod error;
pub mod julian;
pub mod rounding;

pub use components::{TimeComponents, instant_from_hours};
pub use date::{CalendarDate, is_leap_year};
pub use error::TimeError;
pub use julian::{DAYS_PER_CENTURY, J2000_JD, julian_century, julian_day};
pub use rounding::{Rounding, rounded_minute};
