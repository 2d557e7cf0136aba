//! Fractional hours split into whole hours, minutes and seconds.

use chrono::{DateTime, TimeDelta, Utc};

use crate::date::CalendarDate;

/// Hours, minutes and seconds obtained by successive flooring.
///
/// Hours may be negative or exceed 24; resolving against a date carries
/// the overflow into neighbouring days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComponents {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeComponents {
    /// Split a fractional hour value. Returns `None` for NaN or infinity.
    pub fn from_hours(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let hours = value.floor();
        let minutes = ((value - hours) * 60.0).floor();
        let seconds = ((value - (hours + minutes / 60.0)) * 3600.0).floor();
        Some(Self {
            hours: hours as i64,
            minutes: minutes as i64,
            seconds: seconds as i64,
        })
    }

    /// Total offset from midnight in whole seconds.
    pub fn total_seconds(&self) -> Option<i64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes * 60)?
            .checked_add(self.seconds)
    }

    /// The UTC instant these components name on `date`.
    pub fn on_date(&self, date: CalendarDate) -> Option<DateTime<Utc>> {
        let offset = TimeDelta::try_seconds(self.total_seconds()?)?;
        date.midnight_utc().checked_add_signed(offset)
    }
}

/// Resolve fractional UTC hours on `date` to an instant.
pub fn instant_from_hours(date: CalendarDate, hours: f64) -> Option<DateTime<Utc>> {
    TimeComponents::from_hours(hours)?.on_date(date)
}
