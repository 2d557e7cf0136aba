//! Geometric and apparent solar longitude.
//!
//! All functions take `t`, Julian centuries since J2000.0, and return
//! degrees.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., ch. 25 (low accuracy).

use crate::angle::unwind_angle;

/// Geometric mean longitude of the Sun, L0 (eq. 25.2).
pub fn mean_solar_longitude(t: f64) -> f64 {
    let term1 = 280.4664567;
    let term2 = 36000.76983 * t;
    let term3 = 0.0003032 * t.powi(2);
    unwind_angle(term1 + term2 + term3)
}

/// Mean anomaly of the Sun, M (eq. 25.3).
pub fn mean_solar_anomaly(t: f64) -> f64 {
    let term1 = 357.52911;
    let term2 = 35999.05029 * t;
    let term3 = 0.0001537 * t.powi(2);
    unwind_angle(term1 + term2 - term3)
}

/// The Sun's equation of the center, C, for mean anomaly `m` in degrees.
pub fn solar_equation_of_the_center(t: f64, m: f64) -> f64 {
    let m_rad = m.to_radians();
    let term1 = (1.914602 - 0.004817 * t - 0.000014 * t.powi(2)) * m_rad.sin();
    let term2 = (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin();
    let term3 = 0.000289 * (3.0 * m_rad).sin();
    term1 + term2 + term3
}

/// Apparent longitude of the Sun, λ, corrected for nutation and aberration.
///
/// `mean_longitude` is L0 from [`mean_solar_longitude`].
pub fn apparent_solar_longitude(t: f64, mean_longitude: f64) -> f64 {
    let longitude = mean_longitude + solar_equation_of_the_center(t, mean_solar_anomaly(t));
    let omega = 125.04 - 1934.136 * t;
    let lambda = longitude - 0.00569 - 0.00478 * omega.to_radians().sin();
    unwind_angle(lambda)
}
