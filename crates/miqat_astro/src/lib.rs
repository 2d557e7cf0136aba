//! Low-precision solar ephemeris and hour-angle solver.
//!
//! This crate provides:
//! - Angle normalisation and three-point interpolation
//! - Solar longitude, anomaly, obliquity, nutation and sidereal time
//!   polynomials in Julian centuries (Meeus, chs. 12, 22, 25)
//! - Transit and hour-angle correction for arbitrary solar altitudes
//!   (Meeus, ch. 15)
//! - `SolarCoordinates` for a single instant and `SolarTime` for a civil day
//!
//! Accuracy is on the order of a minute of time, which is what civil
//! prayer-time tables need.

pub mod angle;
pub mod error;
pub mod geo;
pub mod nutation;
pub mod obliquity;
pub mod sidereal;
pub mod solar;
pub mod solar_coordinates;
pub mod solar_time;
pub mod transit;

pub use angle::{
    Triple, closest_angle, interpolate, interpolate_angles, normalize_with_bound, unwind_angle,
};
pub use error::AstroError;
pub use geo::Coordinates;
pub use solar_coordinates::SolarCoordinates;
pub use solar_time::{SOLAR_RISE_SET_ALTITUDE_DEG, SolarTime};
pub use transit::{altitude_deg, approximate_transit, corrected_hour_angle, corrected_transit};
