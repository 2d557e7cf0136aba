//! Transit and rising/setting times from three days of solar coordinates.
//!
//! Times are fractions of a day (`m`) or hours UT measured from 0h on the
//! central day. Longitudes are east-positive; Meeus' west-positive `L` is
//! obtained by negation inside each routine.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., ch. 15.

use crate::angle::{Triple, closest_angle, normalize_with_bound, unwind_angle};

/// Sidereal rotation in degrees per day of mean solar time.
const SIDEREAL_DEG_PER_DAY: f64 = 360.985647;

/// Altitude of a body for observer latitude `phi`, declination `delta` and
/// local hour angle `h`, all in degrees (eq. 13.6).
pub fn altitude_deg(phi: f64, delta: f64, h: f64) -> f64 {
    let phi = phi.to_radians();
    let delta = delta.to_radians();
    let h = h.to_radians();
    let term1 = phi.sin() * delta.sin();
    let term2 = phi.cos() * delta.cos() * h.cos();
    (term1 + term2).asin().to_degrees()
}

/// Approximate transit as a fraction of a day in `[0, 1)` (eq. 15.2).
///
/// `longitude` east-positive, `sidereal_time` is apparent sidereal time at
/// 0h UT, `right_ascension` is the body's RA on the day, all in degrees.
pub fn approximate_transit(longitude: f64, sidereal_time: f64, right_ascension: f64) -> f64 {
    let lw = -longitude;
    normalize_with_bound((right_ascension + lw - sidereal_time) / 360.0, 1.0)
}

/// Transit time in hours UT after one correction step.
pub fn corrected_transit(
    m0: f64,
    longitude: f64,
    sidereal_time: f64,
    right_ascension: Triple,
) -> f64 {
    let lw = -longitude;
    let theta = unwind_angle(sidereal_time + SIDEREAL_DEG_PER_DAY * m0);
    let alpha = unwind_angle(right_ascension.interpolate_angle(m0));
    let h = closest_angle(theta - lw - alpha);
    let dm = h / -360.0;
    (m0 + dm) * 24.0
}

/// Time in hours UT at which the body reaches altitude `h0` degrees,
/// before (`after_transit == false`) or after the transit `m0`.
///
/// Returns NaN when the body never reaches `h0` on this day, i.e. when the
/// cosine of the local hour angle falls outside [-1, 1].
#[allow(clippy::too_many_arguments)]
pub fn corrected_hour_angle(
    m0: f64,
    h0: f64,
    latitude: f64,
    longitude: f64,
    after_transit: bool,
    sidereal_time: f64,
    right_ascension: Triple,
    declination: Triple,
) -> f64 {
    let lw = -longitude;
    let phi = latitude.to_radians();
    let delta2 = declination.value.to_radians();

    let term1 = h0.to_radians().sin() - phi.sin() * delta2.sin();
    let term2 = phi.cos() * delta2.cos();
    let big_h0 = (term1 / term2).acos().to_degrees();

    let m = if after_transit {
        m0 + big_h0 / 360.0
    } else {
        m0 - big_h0 / 360.0
    };
    let theta = unwind_angle(sidereal_time + SIDEREAL_DEG_PER_DAY * m);
    let alpha = unwind_angle(right_ascension.interpolate_angle(m));
    let delta = declination.interpolate(m);
    let h = theta - lw - alpha;
    let altitude = altitude_deg(latitude, delta, h);

    let term3 = altitude - h0;
    let term4 = 360.0 * delta.to_radians().cos() * phi.cos() * h.to_radians().sin();
    let dm = term3 / term4;
    (m + dm) * 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 15.a: Venus at Boston, 1988 March 20.
    const BOSTON_LAT: f64 = 42.3333;
    const BOSTON_LON: f64 = -71.0833;
    const THETA0: f64 = 177.74208;

    fn venus_ra() -> Triple {
        Triple::new(40.68021, 41.73129, 42.78204)
    }

    fn venus_dec() -> Triple {
        Triple::new(18.04761, 18.44092, 18.82742)
    }

    #[test]
    fn altitude_meeus_example_13b() {
        let phi = 38.0 + 55.0 / 60.0 + 17.0 / 3600.0;
        let delta = -6.0 - 43.0 / 60.0 - 11.61 / 3600.0;
        let h = altitude_deg(phi, delta, 64.352133);
        assert!((h - 15.1249).abs() < 1e-3, "h = {h}");
    }

    #[test]
    fn transit_meeus_example_15a() {
        let m0 = approximate_transit(BOSTON_LON, THETA0, venus_ra().value);
        assert!((m0 - 0.81965).abs() < 1e-4, "m0 = {m0}");

        let transit = corrected_transit(m0, BOSTON_LON, THETA0, venus_ra()) / 24.0;
        assert!((transit - 0.81980).abs() < 1e-4, "transit = {transit}");
    }

    #[test]
    fn rising_meeus_example_15a() {
        let m0 = approximate_transit(BOSTON_LON, THETA0, venus_ra().value);
        let rise = corrected_hour_angle(
            m0,
            -0.5667,
            BOSTON_LAT,
            BOSTON_LON,
            false,
            THETA0,
            venus_ra(),
            venus_dec(),
        ) / 24.0;
        assert!((rise - 0.51766).abs() < 1e-4, "rise = {rise}");
    }

    #[test]
    fn unreachable_altitude_is_nan() {
        let m0 = approximate_transit(BOSTON_LON, THETA0, venus_ra().value);
        let t = corrected_hour_angle(
            m0,
            80.0,
            BOSTON_LAT,
            BOSTON_LON,
            true,
            THETA0,
            venus_ra(),
            venus_dec(),
        );
        assert!(t.is_nan(), "expected NaN, got {t}");
    }
}
