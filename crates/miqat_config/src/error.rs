//! Error types for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use miqat_astro::AstroError;
use miqat_salat::SalatError;
use miqat_time::TimeError;

/// Errors from reading or interpreting a configuration file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// I/O error.
    Io(String),
    /// The file is not valid TOML or does not match the schema.
    Parse(String),
    /// A value is well-formed but not acceptable.
    Invalid(SalatError),
    /// UTC offset beyond ±18 hours.
    InvalidOffset(i32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(e) => write!(f, "invalid config value: {e}"),
            Self::InvalidOffset(m) => write!(f, "UTC offset of {m} minutes out of range"),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<SalatError> for ConfigError {
    fn from(e: SalatError) -> Self {
        Self::Invalid(e)
    }
}

impl From<AstroError> for ConfigError {
    fn from(e: AstroError) -> Self {
        Self::Invalid(SalatError::Astro(e))
    }
}

impl From<TimeError> for ConfigError {
    fn from(e: TimeError) -> Self {
        Self::Invalid(SalatError::Time(e))
    }
}
