//! Seasonal twilight model of the Moonsighting Committee.
//!
//! Instead of a fixed depression angle, Fajr and Isha lie a number of
//! minutes from sunrise and sunset that varies with latitude and with the
//! number of days since the winter solstice. The year is split into six
//! linear segments joining four anchor values `a`, `b`, `c`, `d`.

use chrono::{DateTime, TimeDelta, Utc};
use miqat_time::is_leap_year;

use crate::prayer_types::Shafaq;

/// Anchor minutes of one seasonal curve at a given latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SeasonalCurve {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl SeasonalCurve {
    /// `base + coefficient / 55 · |latitude|` for each anchor.
    fn new(base: f64, coefficients: [f64; 4], latitude: f64) -> Self {
        let at = |k: f64| base + k / 55.0 * latitude.abs();
        Self {
            a: at(coefficients[0]),
            b: at(coefficients[1]),
            c: at(coefficients[2]),
            d: at(coefficients[3]),
        }
    }

    /// Minutes of twilight on day `dyy` after the winter solstice.
    fn minutes_at(&self, dyy: u32) -> f64 {
        let Self { a, b, c, d } = *self;
        let dyy = f64::from(dyy);
        if dyy < 91.0 {
            a + (b - a) / 91.0 * dyy
        } else if dyy < 137.0 {
            b + (c - b) / 46.0 * (dyy - 91.0)
        } else if dyy < 183.0 {
            c + (d - c) / 46.0 * (dyy - 137.0)
        } else if dyy < 229.0 {
            d + (c - d) / 46.0 * (dyy - 183.0)
        } else if dyy < 275.0 {
            c + (b - c) / 46.0 * (dyy - 229.0)
        } else {
            b + (a - b) / 91.0 * (dyy - 275.0)
        }
    }
}

/// Days elapsed since the local winter solstice.
///
/// Northern hemisphere (latitude ≥ 0) counts from 21 December, southern
/// from 21 June.
pub fn days_since_solstice(day_of_year: u32, year: i32, latitude: f64) -> u32 {
    let days_in_year: i64 = if is_leap_year(year) { 366 } else { 365 };
    let day_of_year = i64::from(day_of_year);
    let days = if latitude >= 0.0 {
        let days = day_of_year + 10;
        if days >= days_in_year {
            days - days_in_year
        } else {
            days
        }
    } else {
        let southern_offset = if is_leap_year(year) { 173 } else { 172 };
        let days = day_of_year - southern_offset;
        if days < 0 { days + days_in_year } else { days }
    };
    days as u32
}

fn offset_seconds(minutes: f64) -> TimeDelta {
    TimeDelta::seconds((minutes * 60.0).round() as i64)
}

/// Earliest acceptable Fajr under the seasonal model.
pub fn season_adjusted_morning_twilight(
    latitude: f64,
    day_of_year: u32,
    year: i32,
    sunrise: DateTime<Utc>,
) -> DateTime<Utc> {
    let curve = SeasonalCurve::new(75.0, [28.65, 19.44, 32.74, 48.10], latitude);
    let minutes = curve.minutes_at(days_since_solstice(day_of_year, year, latitude));
    sunrise - offset_seconds(minutes)
}

/// Latest acceptable Isha under the seasonal model for the chosen shafaq.
pub fn season_adjusted_evening_twilight(
    latitude: f64,
    day_of_year: u32,
    year: i32,
    sunset: DateTime<Utc>,
    shafaq: Shafaq,
) -> DateTime<Utc> {
    let curve = match shafaq {
        Shafaq::General => SeasonalCurve::new(75.0, [25.60, 2.050, -9.210, 6.140], latitude),
        Shafaq::Ahmer => SeasonalCurve::new(62.0, [17.40, -7.160, 5.120, 19.44], latitude),
        Shafaq::Abyad => SeasonalCurve::new(75.0, [25.60, 7.160, 36.84, 81.84], latitude),
    };
    let minutes = curve.minutes_at(days_since_solstice(day_of_year, year, latitude));
    sunset + offset_seconds(minutes)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use miqat_time::CalendarDate;

    use super::*;

    fn dss(year: i32, month: u32, day: u32, latitude: f64) -> u32 {
        let d = CalendarDate::new(year, month, day).unwrap();
        days_since_solstice(d.day_of_year(), d.year(), latitude)
    }

    #[test]
    fn northern_hemisphere() {
        assert_eq!(dss(2016, 1, 1, 1.0), 11);
        assert_eq!(dss(2015, 12, 31, 1.0), 10);
        assert_eq!(dss(2016, 12, 31, 1.0), 10);
        assert_eq!(dss(2016, 12, 21, 1.0), 0);
        assert_eq!(dss(2016, 12, 22, 1.0), 1);
        assert_eq!(dss(2016, 3, 1, 1.0), 71);
        assert_eq!(dss(2015, 3, 1, 1.0), 70);
        assert_eq!(dss(2016, 12, 20, 1.0), 365);
        assert_eq!(dss(2015, 12, 20, 1.0), 364);
    }

    #[test]
    fn southern_hemisphere() {
        assert_eq!(dss(2015, 6, 21, -1.0), 0);
        assert_eq!(dss(2016, 6, 21, -1.0), 0);
        assert_eq!(dss(2015, 6, 20, -1.0), 364);
        assert_eq!(dss(2016, 6, 20, -1.0), 365);
    }

    #[test]
    fn equator_counts_as_north() {
        assert_eq!(dss(2016, 1, 1, 0.0), 11);
    }

    #[test]
    fn curve_is_continuous_at_segment_edges() {
        let curve = SeasonalCurve::new(75.0, [28.65, 19.44, 32.74, 48.10], 50.0);
        for edge in [91u32, 137, 183, 229, 275] {
            let before = curve.minutes_at(edge - 1);
            let at = curve.minutes_at(edge);
            assert!((at - before).abs() < 0.5, "jump at {edge}: {before} -> {at}");
        }
        assert!((curve.minutes_at(0) - curve.a).abs() < 1e-12);
        assert!((curve.minutes_at(91) - curve.b).abs() < 1e-12);
        assert!((curve.minutes_at(183) - curve.d).abs() < 1e-12);
    }

    #[test]
    fn equator_general_shafaq_is_75_minutes() {
        let sunset = Utc.with_ymd_and_hms(2021, 1, 1, 18, 0, 0).unwrap();
        let isha = season_adjusted_evening_twilight(0.0, 1, 2021, sunset, Shafaq::General);
        assert_eq!(isha, sunset + TimeDelta::minutes(75));
        let isha = season_adjusted_evening_twilight(0.0, 1, 2021, sunset, Shafaq::Ahmer);
        assert_eq!(isha, sunset + TimeDelta::minutes(62));
    }

    #[test]
    fn morning_twilight_precedes_sunrise() {
        let sunrise = Utc.with_ymd_and_hms(2016, 1, 1, 8, 19, 0).unwrap();
        let fajr = season_adjusted_morning_twilight(59.9094, 1, 2016, sunrise);
        let gap = (sunrise - fajr).num_minutes();
        assert!((100..=110).contains(&gap), "gap = {gap} min");
    }
}
