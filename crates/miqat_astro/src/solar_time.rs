//! Transit, sunrise, sunset and arbitrary-altitude solar events for one day.

use miqat_time::CalendarDate;

use crate::angle::Triple;
use crate::geo::Coordinates;
use crate::solar_coordinates::SolarCoordinates;
use crate::transit::{approximate_transit, corrected_hour_angle, corrected_transit};

/// Altitude of the Sun's centre at apparent sunrise and sunset: upper limb
/// on the horizon (16′ semidiameter) plus standard refraction (34′).
pub const SOLAR_RISE_SET_ALTITUDE_DEG: f64 = -50.0 / 60.0;

/// Solar events on one civil day for one observer.
///
/// All times are fractional hours UT from 0h on the day. They may fall
/// outside [0, 24) and are NaN where the event does not occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTime {
    pub transit: f64,
    pub sunrise: f64,
    pub sunset: f64,
    observer: Coordinates,
    solar: SolarCoordinates,
    approximate_transit: f64,
    right_ascension: Triple,
    declination: Triple,
}

impl SolarTime {
    /// Sample the Sun at 0h UT on the day before, the day and the day after,
    /// then solve transit, sunrise and sunset.
    pub fn new(date: CalendarDate, observer: Coordinates) -> Self {
        let jd = date.julian_day();

        let prev_solar = SolarCoordinates::new(jd - 1.0);
        let solar = SolarCoordinates::new(jd);
        let next_solar = SolarCoordinates::new(jd + 1.0);

        let right_ascension = Triple::new(
            prev_solar.right_ascension,
            solar.right_ascension,
            next_solar.right_ascension,
        );
        let declination = Triple::new(
            prev_solar.declination,
            solar.declination,
            next_solar.declination,
        );

        let m0 = approximate_transit(
            observer.longitude(),
            solar.apparent_sidereal_time,
            solar.right_ascension,
        );
        let transit = corrected_transit(
            m0,
            observer.longitude(),
            solar.apparent_sidereal_time,
            right_ascension,
        );

        let mut solar_time = Self {
            transit,
            sunrise: f64::NAN,
            sunset: f64::NAN,
            observer,
            solar,
            approximate_transit: m0,
            right_ascension,
            declination,
        };
        solar_time.sunrise = solar_time.time_for_solar_angle(SOLAR_RISE_SET_ALTITUDE_DEG, false);
        solar_time.sunset = solar_time.time_for_solar_angle(SOLAR_RISE_SET_ALTITUDE_DEG, true);
        solar_time
    }

    /// Hours UT at which the Sun's centre is at `angle` degrees altitude,
    /// before or after transit. Negative angles are below the horizon.
    pub fn time_for_solar_angle(&self, angle: f64, after_transit: bool) -> f64 {
        corrected_hour_angle(
            self.approximate_transit,
            angle,
            self.observer.latitude(),
            self.observer.longitude(),
            after_transit,
            self.solar.apparent_sidereal_time,
            self.right_ascension,
            self.declination,
        )
    }

    /// Hours UT after transit when an object's shadow equals its length
    /// times `shadow_length` plus its shadow at noon.
    pub fn afternoon(&self, shadow_length: f64) -> f64 {
        let tangent = (self.observer.latitude() - self.solar.declination).abs();
        let inverse = shadow_length + tangent.to_radians().tan();
        let angle = (1.0 / inverse).atan().to_degrees();
        self.time_for_solar_angle(angle, true)
    }

    pub fn observer(&self) -> Coordinates {
        self.observer
    }

    /// Solar coordinates at 0h UT on the day.
    pub fn solar_coordinates(&self) -> SolarCoordinates {
        self.solar
    }
}
