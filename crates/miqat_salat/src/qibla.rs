//! Great-circle bearing toward the Kaaba.

use miqat_astro::{Coordinates, unwind_angle};

/// Latitude of the Kaaba, Makkah.
pub const MAKKAH_LATITUDE_DEG: f64 = 21.4225241;
/// Longitude of the Kaaba, Makkah.
pub const MAKKAH_LONGITUDE_DEG: f64 = 39.8261818;

/// Initial great-circle bearing from `coordinates` to the Kaaba, in degrees
/// clockwise from true north, in `[0, 360)`.
///
/// At the Kaaba itself every direction is equally valid and the returned
/// value carries no meaning.
///
/// tan q = sin Δλ / (cos φ · tan φK − sin φ · cos Δλ)
pub fn qibla_bearing(coordinates: Coordinates) -> f64 {
    let phi = coordinates.latitude().to_radians();
    let phi_k = MAKKAH_LATITUDE_DEG.to_radians();
    let delta_lambda = (MAKKAH_LONGITUDE_DEG - coordinates.longitude()).to_radians();

    let term1 = delta_lambda.sin();
    let term2 = phi.cos() * phi_k.tan();
    let term3 = phi.sin() * delta_lambda.cos();

    unwind_angle(term1.atan2(term2 - term3).to_degrees())
}
