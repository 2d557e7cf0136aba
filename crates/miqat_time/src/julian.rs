//! Julian Day and Julian Century.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., ch. 7.

/// Julian Day of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day for a Gregorian calendar date plus fractional hours (UT).
///
/// January and February count as months 13 and 14 of the previous year.
/// The `365.25·(Y+4716)` and `30.6001·(M+1)` terms are truncated, not
/// rounded, and the Gregorian correction is `B = 2 − A + ⌊A/4⌋` with
/// `A = ⌊Y/100⌋`.
///
/// `hours` may exceed 24; `julian_day(y, m, 1, 48.0) == julian_day(y, m, 3, 0.0)`.
pub fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (y, m) = if month > 2 {
        (year, month as i32)
    } else {
        (year - 1, month as i32 + 12)
    };
    let d = day as f64 + hours / 24.0;

    let a = y / 100;
    let b = 2 - a + a / 4;

    let i0 = (365.25 * (y + 4716) as f64) as i64;
    let i1 = (30.6001 * (m + 1) as f64) as i64;

    i0 as f64 + i1 as f64 + d + b as f64 - 1524.5
}

/// Julian centuries since J2000.0: T = (JD − 2451545) / 36525.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
