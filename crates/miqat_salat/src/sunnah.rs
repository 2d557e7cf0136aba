//! Night divisions between Maghrib and the following Fajr.

use chrono::{DateTime, TimeDelta, Utc};
use miqat_time::rounded_minute;

use crate::error::SalatError;
use crate::prayer_times::PrayerTimes;

/// Middle and last third of the night following a day's Maghrib.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunnahTimes {
    pub middle_of_the_night: DateTime<Utc>,
    pub last_third_of_the_night: DateTime<Utc>,
}

impl SunnahTimes {
    /// Compute from `today`, deriving the next day's prayer times with the
    /// same coordinates and parameters.
    pub fn new(today: &PrayerTimes) -> Result<Self, SalatError> {
        let tomorrow = PrayerTimes::new(
            today.coordinates(),
            today.date().next_day()?,
            today.parameters(),
        )?;
        Self::from_pair(today, &tomorrow)
    }

    /// Compute from two already-derived consecutive days.
    pub fn from_pair(today: &PrayerTimes, tomorrow: &PrayerTimes) -> Result<Self, SalatError> {
        if tomorrow.date() != today.date().next_day()? {
            return Err(SalatError::NonConsecutiveDays {
                today: today.date(),
                tomorrow: tomorrow.date(),
            });
        }

        let night_seconds = (tomorrow.fajr - today.maghrib).num_seconds();
        let rounding = today.parameters().rounding;

        let middle = today.maghrib + TimeDelta::seconds((night_seconds as f64 / 2.0) as i64);
        let last_third =
            today.maghrib + TimeDelta::seconds((night_seconds as f64 * (2.0 / 3.0)) as i64);

        Ok(Self {
            middle_of_the_night: rounded_minute(middle, rounding),
            last_third_of_the_night: rounded_minute(last_third, rounding),
        })
    }
}
