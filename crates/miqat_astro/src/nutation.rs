//! Low-precision nutation in longitude and obliquity.
//!
//! Four-term approximation good to about 0.5″ in Δψ and 0.1″ in Δε.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., ch. 22.

use crate::angle::unwind_angle;

/// Mean longitude of the Moon, L′, in degrees.
pub fn mean_lunar_longitude(t: f64) -> f64 {
    let term1 = 218.3165;
    let term2 = 481267.8813 * t;
    unwind_angle(term1 + term2)
}

/// Longitude of the Moon's mean ascending node, Ω, in degrees.
pub fn ascending_lunar_node_longitude(t: f64) -> f64 {
    let term1 = 125.04452;
    let term2 = 1934.136261 * t;
    let term3 = 0.0020708 * t.powi(2);
    let term4 = t.powi(3) / 450000.0;
    unwind_angle(term1 - term2 + term3 + term4)
}

/// Nutation in longitude, Δψ, in degrees.
///
/// `solar_longitude` is L0, `lunar_longitude` is L′, `ascending_node` is Ω.
pub fn nutation_in_longitude(solar_longitude: f64, lunar_longitude: f64, ascending_node: f64) -> f64 {
    let l0 = solar_longitude.to_radians();
    let lp = lunar_longitude.to_radians();
    let omega = ascending_node.to_radians();
    let term1 = (-17.2 / 3600.0) * omega.sin();
    let term2 = (1.32 / 3600.0) * (2.0 * l0).sin();
    let term3 = (0.23 / 3600.0) * (2.0 * lp).sin();
    let term4 = (0.21 / 3600.0) * (2.0 * omega).sin();
    term1 - term2 - term3 + term4
}

/// Nutation in obliquity, Δε, in degrees.
pub fn nutation_in_obliquity(solar_longitude: f64, lunar_longitude: f64, ascending_node: f64) -> f64 {
    let l0 = solar_longitude.to_radians();
    let lp = lunar_longitude.to_radians();
    let omega = ascending_node.to_radians();
    let term1 = (9.2 / 3600.0) * omega.cos();
    let term2 = (0.57 / 3600.0) * (2.0 * l0).cos();
    let term3 = (0.10 / 3600.0) * (2.0 * lp).cos();
    let term4 = (0.09 / 3600.0) * (2.0 * omega).cos();
    term1 + term2 + term3 - term4
}
