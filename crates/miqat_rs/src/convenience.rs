use chrono::{DateTime, FixedOffset, Utc};
use miqat_astro::Coordinates;
use miqat_salat::{CalculationParameters, PrayerTimes, SalatError, SunnahTimes, qibla_bearing};
use miqat_time::CalendarDate;

/// Prayer times for a latitude/longitude pair in degrees.
pub fn prayer_times(
    latitude: f64,
    longitude: f64,
    date: CalendarDate,
    parameters: CalculationParameters,
) -> Result<PrayerTimes, SalatError> {
    let coordinates = Coordinates::new(latitude, longitude)?;
    PrayerTimes::new(coordinates, date, parameters)
}

/// Prayer times for `days` consecutive days starting at `start`.
///
/// Each day is computed independently, so a polar-night day yields an
/// error entry without stopping the run.
pub fn prayer_times_range(
    coordinates: Coordinates,
    start: CalendarDate,
    days: u32,
    parameters: CalculationParameters,
) -> Result<Vec<(CalendarDate, Result<PrayerTimes, SalatError>)>, SalatError> {
    let mut out = Vec::with_capacity(days as usize);
    let mut date = start;
    for i in 0..days {
        if i > 0 {
            date = date.next_day()?;
        }
        out.push((date, PrayerTimes::new(coordinates, date, parameters)));
    }
    Ok(out)
}

/// Middle and last third of the night following `date`.
pub fn sunnah_times(
    coordinates: Coordinates,
    date: CalendarDate,
    parameters: CalculationParameters,
) -> Result<SunnahTimes, SalatError> {
    let today = PrayerTimes::new(coordinates, date, parameters)?;
    SunnahTimes::new(&today)
}

/// Sunnah times for `days` consecutive nights, reusing each computed day as
/// the next night's "today".
pub fn sunnah_times_range(
    coordinates: Coordinates,
    start: CalendarDate,
    days: u32,
    parameters: CalculationParameters,
) -> Result<Vec<(CalendarDate, SunnahTimes)>, SalatError> {
    let mut out = Vec::with_capacity(days as usize);
    let mut today = PrayerTimes::new(coordinates, start, parameters)?;
    for _ in 0..days {
        let tomorrow = PrayerTimes::new(coordinates, today.date().next_day()?, parameters)?;
        out.push((today.date(), SunnahTimes::from_pair(&today, &tomorrow)?));
        today = tomorrow;
    }
    Ok(out)
}

/// Qibla bearing in degrees from true north for a latitude/longitude pair.
pub fn qibla(latitude: f64, longitude: f64) -> Result<f64, SalatError> {
    Ok(qibla_bearing(Coordinates::new(latitude, longitude)?))
}

/// Present a UTC instant at a fixed offset east of UTC, in minutes.
///
/// Returns `None` for offsets of a day or more.
pub fn local_time(time: DateTime<Utc>, utc_offset_minutes: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(utc_offset_minutes.checked_mul(60)?)?;
    Some(time.with_timezone(&offset))
}
