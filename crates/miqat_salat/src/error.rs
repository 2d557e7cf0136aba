//! Error types for prayer-time derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use miqat_astro::AstroError;
use miqat_time::{CalendarDate, TimeError};

/// Solar quantity that a day's prayer times depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Transit,
    Sunrise,
    Sunset,
    TomorrowSunrise,
    Asr,
}

impl SolarEvent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transit => "transit",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::TomorrowSunrise => "next-day sunrise",
            Self::Asr => "asr",
        }
    }
}

impl Display for SolarEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from prayer-time calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SalatError {
    /// Invalid observer coordinates.
    Astro(AstroError),
    /// Invalid or unrepresentable date.
    Time(TimeError),
    /// The Sun does not reach the altitude the event requires on this day.
    UnsolvableGeometry(SolarEvent),
    /// Sunnah times need a day and the day after it.
    NonConsecutiveDays {
        today: CalendarDate,
        tomorrow: CalendarDate,
    },
    /// A method, madhab, rule or shafaq name was not recognised.
    UnknownName { kind: &'static str, value: String },
}

impl Display for SalatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Astro(e) => write!(f, "coordinate error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::UnsolvableGeometry(event) => {
                write!(f, "no solution for {event} at this latitude and date")
            }
            Self::NonConsecutiveDays { today, tomorrow } => {
                write!(f, "{tomorrow} does not follow {today}")
            }
            Self::UnknownName { kind, value } => write!(f, "unknown {kind} '{value}'"),
        }
    }
}

impl Error for SalatError {}

impl From<AstroError> for SalatError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}

impl From<TimeError> for SalatError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
