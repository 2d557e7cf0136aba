//! Validated proleptic Gregorian calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::error::TimeError;
use crate::julian::julian_day;

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// A civil date without time of day.
///
/// Construction rejects triples that are not real dates, so every
/// `CalendarDate` maps to exactly one UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// 1-based ordinal day within the year.
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Number of days in this date's year.
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    pub fn next_day(&self) -> Result<Self, TimeError> {
        self.date
            .succ_opt()
            .map(|date| Self { date })
            .ok_or(TimeError::OutOfRange)
    }

    pub fn previous_day(&self) -> Result<Self, TimeError> {
        self.date
            .pred_opt()
            .map(|date| Self { date })
            .ok_or(TimeError::OutOfRange)
    }

    /// 00:00:00 UTC on this date.
    pub fn midnight_utc(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Julian Day at 0h UT.
    pub fn julian_day(&self) -> f64 {
        julian_day(self.year(), self.month(), self.day(), 0.0)
    }

    pub fn naive(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

/// Parses `YYYY-MM-DD`.
impl FromStr for CalendarDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!(
                "expected YYYY-MM-DD, got '{s}'"
            )));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid year in '{s}'")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid month in '{s}'")))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid day in '{s}'")))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        for year in [2016, 1600, 2000, 2400] {
            assert!(is_leap_year(year), "{year} should be leap");
        }
        for year in [2015, 1700, 1800, 1900, 2100] {
            assert!(!is_leap_year(year), "{year} should not be leap");
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            CalendarDate::new(2015, 2, 29),
            Err(TimeError::InvalidDate {
                year: 2015,
                month: 2,
                day: 29
            })
        );
        assert!(CalendarDate::new(2016, 2, 29).is_ok());
        assert!(CalendarDate::new(2016, 13, 1).is_err());
        assert!(CalendarDate::new(2016, 4, 31).is_err());
    }

    #[test]
    fn day_of_year() {
        let d = CalendarDate::new(2016, 3, 1).unwrap();
        assert_eq!(d.day_of_year(), 61);
        let d = CalendarDate::new(2015, 12, 31).unwrap();
        assert_eq!(d.day_of_year(), 365);
        assert_eq!(d.days_in_year(), 365);
    }

    #[test]
    fn next_day_crosses_year() {
        let d = CalendarDate::new(2015, 12, 31).unwrap();
        assert_eq!(d.next_day().unwrap(), CalendarDate::new(2016, 1, 1).unwrap());
        assert_eq!(d.next_day().unwrap().previous_day().unwrap(), d);
    }

    #[test]
    fn midnight_matches_julian_day() {
        let d = CalendarDate::new(1992, 10, 13).unwrap();
        assert_eq!(d.julian_day(), 2_448_908.5);
        assert_eq!(d.midnight_utc().to_rfc3339(), "1992-10-13T00:00:00+00:00");
    }

    #[test]
    fn parse_and_display() {
        let d: CalendarDate = "2020-06-15".parse().unwrap();
        assert_eq!(d, CalendarDate::new(2020, 6, 15).unwrap());
        assert_eq!(d.to_string(), "2020-06-15");
        assert!("2020-06".parse::<CalendarDate>().is_err());
        assert!("2020-xx-15".parse::<CalendarDate>().is_err());
        assert!(matches!(
            "2021-02-30".parse::<CalendarDate>(),
            Err(TimeError::InvalidDate { .. })
        ));
    }
}
