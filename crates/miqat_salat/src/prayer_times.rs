//! Daily prayer times for one observer.
//!
//! The pipeline per day:
//! 1. Solve solar transit, sunrise, sunset and the Asr shadow time for the
//!    day, and sunrise for the day after.
//! 2. Solve Fajr and Isha from the method's twilight angles, then bound them
//!    by a safety net: a fraction of the night (high-latitude rule) or the
//!    seasonal model for the Moonsighting Committee.
//! 3. Add method and user offsets and round to the minute.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, trace};
use miqat_astro::{Coordinates, SolarTime};
use miqat_time::{CalendarDate, instant_from_hours, rounded_minute};

use crate::error::{SalatError, SolarEvent};
use crate::method::CalculationMethod;
use crate::params::CalculationParameters;
use crate::prayer_types::Prayer;
use crate::twilight::{season_adjusted_evening_twilight, season_adjusted_morning_twilight};

/// From this latitude the Moonsighting Committee replaces the twilight
/// angles with one seventh of the night.
const MOONSIGHTING_SEVENTH_LATITUDE_DEG: f64 = 55.0;

/// Prayer times for one civil day, as UTC instants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    pub fajr: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub dhuhr: DateTime<Utc>,
    pub asr: DateTime<Utc>,
    pub maghrib: DateTime<Utc>,
    pub isha: DateTime<Utc>,
    coordinates: Coordinates,
    date: CalendarDate,
    parameters: CalculationParameters,
}

fn resolve(date: CalendarDate, hours: f64, event: SolarEvent) -> Result<DateTime<Utc>, SalatError> {
    instant_from_hours(date, hours).ok_or_else(|| {
        debug!("{event} unsolvable on {date} (hours = {hours})");
        SalatError::UnsolvableGeometry(event)
    })
}

/// `portion` of `night_ms`, truncated to whole seconds.
fn night_fraction(portion: f64, night_ms: i64) -> TimeDelta {
    TimeDelta::seconds((portion * night_ms as f64 / 1000.0) as i64)
}

impl PrayerTimes {
    /// Compute the day's times.
    ///
    /// Fails with [`SalatError::UnsolvableGeometry`] when the Sun does not
    /// transit, rise, set or reach the Asr altitude on `date`, or does not
    /// rise the following day (polar day and night).
    pub fn new(
        coordinates: Coordinates,
        date: CalendarDate,
        parameters: CalculationParameters,
    ) -> Result<Self, SalatError> {
        let tomorrow = date.next_day()?;
        let solar_time = SolarTime::new(date, coordinates);
        let tomorrow_solar_time = SolarTime::new(tomorrow, coordinates);

        let transit = resolve(date, solar_time.transit, SolarEvent::Transit)?;
        let sunrise = resolve(date, solar_time.sunrise, SolarEvent::Sunrise)?;
        let sunset = resolve(date, solar_time.sunset, SolarEvent::Sunset)?;
        let tomorrow_sunrise = resolve(
            tomorrow,
            tomorrow_solar_time.sunrise,
            SolarEvent::TomorrowSunrise,
        )?;
        let asr = resolve(
            date,
            solar_time.afternoon(parameters.madhab.shadow_length()),
            SolarEvent::Asr,
        )?;

        let night_ms = (tomorrow_sunrise - sunset).num_milliseconds();
        let latitude = coordinates.latitude();
        let moonsighting = parameters.method == CalculationMethod::MoonsightingCommittee;
        let portions = parameters.night_portions(coordinates);

        let fajr = {
            let mut raw = instant_from_hours(
                date,
                solar_time.time_for_solar_angle(-parameters.fajr_angle, false),
            );
            if moonsighting && latitude >= MOONSIGHTING_SEVENTH_LATITUDE_DEG {
                raw = Some(sunrise - TimeDelta::seconds(night_ms / 7000));
            }

            let safe = if moonsighting {
                season_adjusted_morning_twilight(latitude, date.day_of_year(), date.year(), sunrise)
            } else {
                sunrise - night_fraction(portions.fajr, night_ms)
            };

            match raw {
                Some(fajr) if fajr >= safe => fajr,
                _ => {
                    debug!("fajr on {date} bounded by safety net at {safe}");
                    safe
                }
            }
        };

        let isha = if parameters.isha_interval > 0 {
            sunset + TimeDelta::minutes(i64::from(parameters.isha_interval))
        } else {
            let mut raw = instant_from_hours(
                date,
                solar_time.time_for_solar_angle(-parameters.isha_angle, true),
            );
            if moonsighting && latitude >= MOONSIGHTING_SEVENTH_LATITUDE_DEG {
                raw = Some(sunset + TimeDelta::seconds(night_ms / 7000));
            }

            let safe = if moonsighting {
                season_adjusted_evening_twilight(
                    latitude,
                    date.day_of_year(),
                    date.year(),
                    sunset,
                    parameters.shafaq,
                )
            } else {
                sunset + night_fraction(portions.isha, night_ms)
            };

            match raw {
                Some(isha) if isha <= safe => isha,
                _ => {
                    debug!("isha on {date} bounded by safety net at {safe}");
                    safe
                }
            }
        };

        let finish = |time: DateTime<Utc>, prayer: Prayer| {
            let minutes = parameters.adjustments.minutes_for(prayer)
                + parameters.method_adjustments.minutes_for(prayer);
            rounded_minute(
                time + TimeDelta::minutes(i64::from(minutes)),
                parameters.rounding,
            )
        };

        let times = Self {
            fajr: finish(fajr, Prayer::Fajr),
            sunrise: finish(sunrise, Prayer::Sunrise),
            dhuhr: finish(transit, Prayer::Dhuhr),
            asr: finish(asr, Prayer::Asr),
            maghrib: finish(sunset, Prayer::Maghrib),
            isha: finish(isha, Prayer::Isha),
            coordinates,
            date,
            parameters,
        };
        trace!("prayer times for {date}: {times:?}");
        Ok(times)
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn parameters(&self) -> CalculationParameters {
        self.parameters
    }

    pub fn time_for_prayer(&self, prayer: Prayer) -> DateTime<Utc> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// The latest prayer whose time has arrived at `time`, or `None`
    /// before Fajr.
    pub fn current_prayer(&self, time: DateTime<Utc>) -> Option<Prayer> {
        Prayer::all()
            .iter()
            .rev()
            .copied()
            .find(|&p| self.time_for_prayer(p) <= time)
    }

    /// The first prayer still to come after `time`, or `None` after Isha.
    pub fn next_prayer(&self, time: DateTime<Utc>) -> Option<Prayer> {
        Prayer::all()
            .iter()
            .copied()
            .find(|&p| self.time_for_prayer(p) > time)
    }
}
