//! Enumerations and small value types shared by the prayer-time modules.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use miqat_astro::Coordinates;

use crate::error::SalatError;

/// Latitude beyond which the seventh-of-the-night rule is recommended.
const SEVENTH_OF_NIGHT_LATITUDE_DEG: f64 = 48.0;

/// Look up `s` among `all` by `name`, ignoring case and treating `_` as `-`.
pub(crate) fn parse_named<T: Copy>(
    kind: &'static str,
    all: &[T],
    name: fn(T) -> &'static str,
    s: &str,
) -> Result<T, SalatError> {
    let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
    all.iter()
        .copied()
        .find(|v| name(*v) == wanted)
        .ok_or_else(|| SalatError::UnknownName {
            kind,
            value: s.to_string(),
        })
}

/// The six daily times, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All prayers in daily order.
    pub const fn all() -> &'static [Prayer] {
        &[
            Self::Fajr,
            Self::Sunrise,
            Self::Dhuhr,
            Self::Asr,
            Self::Maghrib,
            Self::Isha,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }
}

impl Display for Prayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// School of jurisprudence, which fixes the Asr shadow ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Madhab {
    /// Shafi'i, Maliki and Hanbali: shadow equals object length.
    #[default]
    Shafi,
    /// Hanafi: shadow equals twice the object length.
    Hanafi,
}

impl Madhab {
    pub const fn all() -> &'static [Madhab] {
        &[Self::Shafi, Self::Hanafi]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Shafi => "shafi",
            Self::Hanafi => "hanafi",
        }
    }

    /// Multiplier on object length added to the noon shadow.
    pub const fn shadow_length(self) -> f64 {
        match self {
            Self::Shafi => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

impl Display for Madhab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Madhab {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("madhab", Self::all(), Self::name, s)
    }
}

/// Fractions of the night bounding Fajr and Isha where twilight persists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightPortions {
    pub fajr: f64,
    pub isha: f64,
}

/// Safety-net rule for latitudes where twilight angles may not be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighLatitudeRule {
    /// Fajr no earlier than half the night before sunrise, Isha no later
    /// than half the night after sunset.
    MiddleOfTheNight,
    /// As above with one seventh of the night.
    SeventhOfTheNight,
    /// Portion equal to the twilight angle divided by 60.
    TwilightAngle,
}

impl HighLatitudeRule {
    pub const fn all() -> &'static [HighLatitudeRule] {
        &[
            Self::MiddleOfTheNight,
            Self::SeventhOfTheNight,
            Self::TwilightAngle,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::MiddleOfTheNight => "middle-of-the-night",
            Self::SeventhOfTheNight => "seventh-of-the-night",
            Self::TwilightAngle => "twilight-angle",
        }
    }

    /// Seventh of the night beyond 48° latitude, middle of the night otherwise.
    pub fn recommended_for(coordinates: Coordinates) -> Self {
        if coordinates.latitude().abs() > SEVENTH_OF_NIGHT_LATITUDE_DEG {
            Self::SeventhOfTheNight
        } else {
            Self::MiddleOfTheNight
        }
    }

    /// Night fractions for this rule given the method's twilight angles.
    pub fn night_portions(self, fajr_angle: f64, isha_angle: f64) -> NightPortions {
        match self {
            Self::MiddleOfTheNight => NightPortions {
                fajr: 1.0 / 2.0,
                isha: 1.0 / 2.0,
            },
            Self::SeventhOfTheNight => NightPortions {
                fajr: 1.0 / 7.0,
                isha: 1.0 / 7.0,
            },
            Self::TwilightAngle => NightPortions {
                fajr: fajr_angle / 60.0,
                isha: isha_angle / 60.0,
            },
        }
    }
}

impl Display for HighLatitudeRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HighLatitudeRule {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("high-latitude rule", Self::all(), Self::name, s)
    }
}

/// Which twilight glow marks the end of dusk in the seasonal model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shafaq {
    /// Blend of ahmer and abyad; the Moonsighting Committee default.
    #[default]
    General,
    /// Red glow; shorter, earlier Isha.
    Ahmer,
    /// White glow; longer, later Isha.
    Abyad,
}

impl Shafaq {
    pub const fn all() -> &'static [Shafaq] {
        &[Self::General, Self::Ahmer, Self::Abyad]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Ahmer => "ahmer",
            Self::Abyad => "abyad",
        }
    }
}

impl Display for Shafaq {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shafaq {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("shafaq", Self::all(), Self::name, s)
    }
}

/// Whole-minute offsets applied to each computed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrayerAdjustments {
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
}

impl PrayerAdjustments {
    pub fn minutes_for(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_lengths() {
        assert_eq!(Madhab::Shafi.shadow_length(), 1.0);
        assert_eq!(Madhab::Hanafi.shadow_length(), 2.0);
    }

    #[test]
    fn night_portions_per_rule() {
        let p = HighLatitudeRule::MiddleOfTheNight.night_portions(18.0, 18.0);
        assert_eq!((p.fajr, p.isha), (0.5, 0.5));

        let p = HighLatitudeRule::SeventhOfTheNight.night_portions(18.0, 18.0);
        assert_eq!((p.fajr, p.isha), (1.0 / 7.0, 1.0 / 7.0));

        let p = HighLatitudeRule::TwilightAngle.night_portions(10.0, 15.0);
        assert_eq!((p.fajr, p.isha), (10.0 / 60.0, 15.0 / 60.0));
    }

    #[test]
    fn recommended_rule_by_latitude() {
        let north = Coordinates::new(48.5, 2.0).unwrap();
        let south = Coordinates::new(-48.5, 2.0).unwrap();
        let mid = Coordinates::new(48.0, 2.0).unwrap();
        assert_eq!(
            HighLatitudeRule::recommended_for(north),
            HighLatitudeRule::SeventhOfTheNight
        );
        assert_eq!(
            HighLatitudeRule::recommended_for(south),
            HighLatitudeRule::SeventhOfTheNight
        );
        assert_eq!(
            HighLatitudeRule::recommended_for(mid),
            HighLatitudeRule::MiddleOfTheNight
        );
    }

    #[test]
    fn parse_accepts_snake_and_kebab() {
        assert_eq!(
            "seventh_of_the_night".parse::<HighLatitudeRule>().unwrap(),
            HighLatitudeRule::SeventhOfTheNight
        );
        assert_eq!(
            "Twilight-Angle".parse::<HighLatitudeRule>().unwrap(),
            HighLatitudeRule::TwilightAngle
        );
        assert_eq!("HANAFI".parse::<Madhab>().unwrap(), Madhab::Hanafi);
        assert_eq!("abyad".parse::<Shafaq>().unwrap(), Shafaq::Abyad);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "maliki".parse::<Madhab>(),
            Err(SalatError::UnknownName {
                kind: "madhab",
                value: "maliki".to_string()
            })
        );
    }

    #[test]
    fn adjustments_lookup() {
        let adj = PrayerAdjustments {
            asr: 4,
            isha: -2,
            ..Default::default()
        };
        assert_eq!(adj.minutes_for(Prayer::Asr), 4);
        assert_eq!(adj.minutes_for(Prayer::Isha), -2);
        assert_eq!(adj.minutes_for(Prayer::Fajr), 0);
    }

    #[test]
    fn prayers_are_ordered() {
        let all = Prayer::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
