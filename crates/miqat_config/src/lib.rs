//! TOML configuration for prayer-time calculations.
//!
//! ```toml
//! [location]
//! latitude = 35.7750
//! longitude = -78.6336
//!
//! [calculation]
//! method = "north_america"
//! madhab = "hanafi"
//! high_latitude_rule = "seventh_of_the_night"   # omit for automatic
//! shafaq = "general"
//! rounding = "nearest"
//! # fajr_angle, isha_angle and isha_interval override the method preset
//!
//! [adjustments]
//! fajr = 2
//! isha = -1
//!
//! [display]
//! utc_offset_minutes = -240
//! ```
//!
//! Every section is optional.

pub mod error;

use std::path::Path;

use log::debug;
use miqat_astro::Coordinates;
use miqat_salat::{CalculationMethod, CalculationParameters, PrayerAdjustments};
use serde::Deserialize;

pub use error::ConfigError;

/// Largest accepted UTC offset, in minutes.
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiqatConfig {
    /// Observer position, if the file names one.
    pub coordinates: Option<Coordinates>,
    pub parameters: CalculationParameters,
    /// Fixed offset used when printing times.
    pub utc_offset_minutes: i32,
}

impl Default for MiqatConfig {
    fn default() -> Self {
        Self {
            coordinates: None,
            parameters: CalculationMethod::MuslimWorldLeague.parameters(),
            utc_offset_minutes: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootToml {
    #[serde(default)]
    location: Option<LocationToml>,
    #[serde(default)]
    calculation: CalculationToml,
    #[serde(default)]
    adjustments: AdjustmentsToml,
    #[serde(default)]
    display: DisplayToml,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationToml {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CalculationToml {
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    madhab: Option<String>,
    #[serde(default)]
    high_latitude_rule: Option<String>,
    #[serde(default)]
    shafaq: Option<String>,
    #[serde(default)]
    rounding: Option<String>,
    #[serde(default)]
    fajr_angle: Option<f64>,
    #[serde(default)]
    isha_angle: Option<f64>,
    #[serde(default)]
    isha_interval: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AdjustmentsToml {
    #[serde(default)]
    fajr: i32,
    #[serde(default)]
    sunrise: i32,
    #[serde(default)]
    dhuhr: i32,
    #[serde(default)]
    asr: i32,
    #[serde(default)]
    maghrib: i32,
    #[serde(default)]
    isha: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayToml {
    #[serde(default)]
    utc_offset_minutes: i32,
}

impl MiqatConfig {
    /// Read and resolve a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        debug!("loaded config from {}", path.display());
        Self::parse(&content)
    }

    /// Resolve configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let root: RootToml = toml::from_str(content)?;

        let coordinates = match root.location {
            Some(loc) => Some(Coordinates::new(loc.latitude, loc.longitude)?),
            None => None,
        };

        let calc = root.calculation;
        let method = match calc.method.as_deref() {
            Some(name) => name.parse()?,
            None => CalculationMethod::MuslimWorldLeague,
        };
        let mut parameters = method.parameters();
        if let Some(name) = calc.madhab.as_deref() {
            parameters.madhab = name.parse()?;
        }
        if let Some(name) = calc.high_latitude_rule.as_deref() {
            parameters.high_latitude_rule = Some(name.parse()?);
        }
        if let Some(name) = calc.shafaq.as_deref() {
            parameters.shafaq = name.parse()?;
        }
        if let Some(name) = calc.rounding.as_deref() {
            parameters.rounding = name.parse()?;
        }
        if let Some(angle) = calc.fajr_angle {
            parameters.fajr_angle = angle;
        }
        if let Some(angle) = calc.isha_angle {
            parameters.isha_angle = angle;
        }
        if let Some(minutes) = calc.isha_interval {
            parameters.isha_interval = minutes;
        }

        let adj = root.adjustments;
        parameters.adjustments = PrayerAdjustments {
            fajr: adj.fajr,
            sunrise: adj.sunrise,
            dhuhr: adj.dhuhr,
            asr: adj.asr,
            maghrib: adj.maghrib,
            isha: adj.isha,
        };

        let utc_offset_minutes = root.display.utc_offset_minutes;
        if utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::InvalidOffset(utc_offset_minutes));
        }

        Ok(Self {
            coordinates,
            parameters,
            utc_offset_minutes,
        })
    }
}
