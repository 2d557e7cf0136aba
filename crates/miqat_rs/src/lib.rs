//! Convenience wrapper for the miqat prayer-time engine.
//!
//! High-level functions that take plain latitude/longitude and dates,
//! compute runs of consecutive days, and present UTC instants in a fixed
//! local offset.
//!
//! # Quick start
//!
//! ```rust
//! use miqat_rs::*;
//!
//! let date: CalendarDate = "2015-07-12".parse().unwrap();
//! let params = CalculationMethod::NorthAmerica
//!     .parameters()
//!     .with_madhab(Madhab::Hanafi);
//! let times = prayer_times(35.7750, -78.6336, date, params).unwrap();
//! let fajr = local_time(times.fajr, -240).unwrap();
//! assert_eq!(fajr.format("%H:%M").to_string(), "04:42");
//! ```

pub mod convenience;

// Primary re-exports; users should only need `use miqat_rs::*`
pub use convenience::{
    local_time, prayer_times, prayer_times_range, qibla, sunnah_times, sunnah_times_range,
};

pub use miqat_config::{ConfigError, MiqatConfig};
pub use miqat_salat::{
    CalculationMethod, CalculationParameters, HighLatitudeRule, Madhab, NightPortions, Prayer,
    PrayerAdjustments, PrayerTimes, SalatError, Shafaq, SolarEvent, SunnahTimes, qibla_bearing,
};

// Lower layers, for callers that want the raw solar quantities.
pub use miqat_astro::{AstroError, Coordinates, SolarCoordinates, SolarTime};
pub use miqat_time::{CalendarDate, Rounding, TimeError, julian_century, julian_day};
