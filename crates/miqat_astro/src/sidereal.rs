//! Mean sidereal time at Greenwich.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., eq. 12.4.

use miqat_time::{DAYS_PER_CENTURY, J2000_JD};

use crate::angle::unwind_angle;

/// Mean sidereal time at Greenwich, θ0, in degrees.
///
/// θ0 = 280.46061837 + 360.98564736629·(JD − 2451545) + 0.000387933·T² − T³/38710000
///
/// `t` is Julian centuries since J2000.0; the Julian Day is recovered from it.
pub fn mean_sidereal_time(t: f64) -> f64 {
    let jd = t * DAYS_PER_CENTURY + J2000_JD;
    let term1 = 280.46061837;
    let term2 = 360.98564736629 * (jd - J2000_JD);
    let term3 = 0.000387933 * t.powi(2);
    let term4 = t.powi(3) / 38710000.0;
    unwind_angle(term1 + term2 + term3 - term4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use miqat_time::{julian_century, julian_day};

    #[test]
    fn meeus_example_12a() {
        let t = julian_century(julian_day(1987, 4, 10, 0.0));
        let theta = mean_sidereal_time(t);
        assert!((theta - 197.693195).abs() < 1e-6, "θ0 = {theta}");
    }

    #[test]
    fn range() {
        for t in [-0.5, 0.0, 0.15, 0.2] {
            let theta = mean_sidereal_time(t);
            assert!((0.0..360.0).contains(&theta), "θ0 = {theta}");
        }
    }
}
