//! Minute rounding of UTC instants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Timelike, Utc};

use crate::error::TimeError;

/// How a computed instant is reduced to minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round half up to the nearest minute.
    #[default]
    Nearest,
    /// Any non-zero seconds advance to the next minute.
    Up,
    /// Keep the seconds.
    None,
}

impl Rounding {
    pub const fn all() -> &'static [Rounding] {
        &[Self::Nearest, Self::Up, Self::None]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Up => "up",
            Self::None => "none",
        }
    }
}

impl Display for Rounding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rounding {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TimeError::Parse(format!("unknown rounding '{s}'")))
    }
}

/// Apply `rounding` to `time`. Sub-second parts are always dropped.
pub fn rounded_minute(time: DateTime<Utc>, rounding: Rounding) -> DateTime<Utc> {
    let whole_seconds = time - TimeDelta::nanoseconds(i64::from(time.nanosecond()));
    let second = i64::from(whole_seconds.second());
    let floored = whole_seconds - TimeDelta::seconds(second);
    match rounding {
        Rounding::Nearest if second >= 30 => floored + TimeDelta::minutes(1),
        Rounding::Nearest => floored,
        Rounding::Up if second > 0 => floored + TimeDelta::minutes(1),
        Rounding::Up => floored,
        Rounding::None => whole_seconds,
    }
}
