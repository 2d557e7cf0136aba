//! Islamic prayer times built on the `miqat_astro` solar engine.
//!
//! This crate provides:
//! - `PrayerTimes`: Fajr, sunrise, Dhuhr, Asr, Maghrib and Isha as UTC
//!   instants for one civil day
//! - Calculation method presets, madhab, high-latitude rules and the
//!   seasonal twilight model used by the Moonsighting Committee
//! - `SunnahTimes`: middle and last third of the night
//! - Qibla bearing toward the Kaaba
//!
//! Everything is computed in UTC. Converting to a local zone is left to
//! the caller.

pub mod error;
pub mod method;
pub mod params;
pub mod prayer_times;
pub mod prayer_types;
pub mod qibla;
pub mod sunnah;
pub mod twilight;

pub use error::{SalatError, SolarEvent};
pub use method::CalculationMethod;
pub use params::CalculationParameters;
pub use prayer_times::PrayerTimes;
pub use prayer_types::{HighLatitudeRule, Madhab, NightPortions, Prayer, PrayerAdjustments, Shafaq};
pub use qibla::{MAKKAH_LATITUDE_DEG, MAKKAH_LONGITUDE_DEG, qibla_bearing};
pub use sunnah::SunnahTimes;
pub use twilight::{
    days_since_solstice, season_adjusted_evening_twilight, season_adjusted_morning_twilight,
};

pub use miqat_astro::Coordinates;
pub use miqat_time::{CalendarDate, Rounding};
