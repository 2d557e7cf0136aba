//! Apparent equatorial coordinates of the Sun for one instant.

use miqat_time::julian_century;

use crate::angle::unwind_angle;
use crate::nutation::{
    ascending_lunar_node_longitude, mean_lunar_longitude, nutation_in_longitude,
    nutation_in_obliquity,
};
use crate::obliquity::{apparent_obliquity_of_the_ecliptic, mean_obliquity_of_the_ecliptic};
use crate::sidereal::mean_sidereal_time;
use crate::solar::{apparent_solar_longitude, mean_solar_longitude};

/// Declination, right ascension and apparent sidereal time, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// Declination of the Sun, δ, in [-90, 90].
    pub declination: f64,
    /// Right ascension of the Sun, α, in [0, 360).
    pub right_ascension: f64,
    /// Apparent sidereal time at Greenwich, θ.
    pub apparent_sidereal_time: f64,
}

impl SolarCoordinates {
    pub fn new(julian_day: f64) -> Self {
        let t = julian_century(julian_day);
        let l0 = mean_solar_longitude(t);
        let lp = mean_lunar_longitude(t);
        let omega = ascending_lunar_node_longitude(t);
        let lambda = apparent_solar_longitude(t, l0).to_radians();
        let theta0 = mean_sidereal_time(t);
        let dpsi = nutation_in_longitude(l0, lp, omega);
        let deps = nutation_in_obliquity(l0, lp, omega);
        let epsilon0 = mean_obliquity_of_the_ecliptic(t);
        let epsilon_app = apparent_obliquity_of_the_ecliptic(t, epsilon0).to_radians();

        // Meeus eq. 13.4
        let declination = (epsilon_app.sin() * lambda.sin()).asin().to_degrees();

        // Meeus eq. 13.3
        let right_ascension = unwind_angle(
            (epsilon_app.cos() * lambda.sin())
                .atan2(lambda.cos())
                .to_degrees(),
        );

        // Meeus ch. 12: nutation correction to sidereal time
        let apparent_sidereal_time =
            theta0 + (dpsi * 3600.0 * (epsilon0 + deps).to_radians().cos()) / 3600.0;

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miqat_time::julian_day;

    #[test]
    fn meeus_example_25a() {
        let solar = SolarCoordinates::new(julian_day(1992, 10, 13, 0.0));
        assert!(
            (solar.declination - -7.78507).abs() < 1e-4,
            "δ = {}",
            solar.declination
        );
        assert!(
            (solar.right_ascension - 198.38083).abs() < 1e-4,
            "α = {}",
            solar.right_ascension
        );
    }

    #[test]
    fn apparent_sidereal_time_meeus_example_12a() {
        let solar = SolarCoordinates::new(julian_day(1987, 4, 10, 0.0));
        let theta = solar.apparent_sidereal_time;
        assert!((theta - 197.6922295833).abs() < 1e-4, "θ = {theta}");
    }

    #[test]
    fn declination_stays_within_obliquity() {
        let start = julian_day(2024, 1, 1, 0.0);
        for day in 0..366 {
            let solar = SolarCoordinates::new(start + day as f64);
            assert!(solar.declination.abs() < 23.5, "δ = {}", solar.declination);
            assert!((0.0..360.0).contains(&solar.right_ascension));
        }
    }
}
