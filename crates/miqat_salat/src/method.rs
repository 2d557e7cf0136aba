//! Named calculation-method presets.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use miqat_time::Rounding;

use crate::error::SalatError;
use crate::params::CalculationParameters;
use crate::prayer_types::{PrayerAdjustments, parse_named};

/// Conventions published by Islamic authorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationMethod {
    /// Muslim World League: Fajr 18°, Isha 17°.
    MuslimWorldLeague,
    /// Egyptian General Authority of Survey: Fajr 19.5°, Isha 17.5°.
    Egyptian,
    /// University of Islamic Sciences, Karachi: Fajr 18°, Isha 18°.
    Karachi,
    /// Umm al-Qura University, Makkah: Fajr 18.5°, Isha 90 minutes after Maghrib.
    UmmAlQura,
    /// UAE: Fajr 18.2°, Isha 18.2°.
    Dubai,
    /// Moonsighting Committee: Fajr 18°, Isha 18°, seasonal twilight model.
    MoonsightingCommittee,
    /// ISNA: Fajr 15°, Isha 15°.
    NorthAmerica,
    /// Kuwait: Fajr 18°, Isha 17.5°.
    Kuwait,
    /// Qatar: Fajr 18°, Isha 90 minutes after Maghrib.
    Qatar,
    /// Majlis Ugama Islam Singapura: Fajr 20°, Isha 18°, rounded up.
    Singapore,
    /// Diyanet İşleri Başkanlığı: Fajr 18°, Isha 17°.
    Turkey,
    /// No preset; angles are zero until set.
    Other,
}

impl CalculationMethod {
    pub const fn all() -> &'static [CalculationMethod] {
        &[
            Self::MuslimWorldLeague,
            Self::Egyptian,
            Self::Karachi,
            Self::UmmAlQura,
            Self::Dubai,
            Self::MoonsightingCommittee,
            Self::NorthAmerica,
            Self::Kuwait,
            Self::Qatar,
            Self::Singapore,
            Self::Turkey,
            Self::Other,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::MuslimWorldLeague => "muslim-world-league",
            Self::Egyptian => "egyptian",
            Self::Karachi => "karachi",
            Self::UmmAlQura => "umm-al-qura",
            Self::Dubai => "dubai",
            Self::MoonsightingCommittee => "moonsighting-committee",
            Self::NorthAmerica => "north-america",
            Self::Kuwait => "kuwait",
            Self::Qatar => "qatar",
            Self::Singapore => "singapore",
            Self::Turkey => "turkey",
            Self::Other => "other",
        }
    }

    /// Default parameters for this method.
    pub fn parameters(self) -> CalculationParameters {
        let dhuhr_plus_one = PrayerAdjustments {
            dhuhr: 1,
            ..Default::default()
        };
        let (fajr, isha, interval, method_adjustments) = match self {
            Self::MuslimWorldLeague => (18.0, 17.0, 0, dhuhr_plus_one),
            Self::Egyptian => (19.5, 17.5, 0, dhuhr_plus_one),
            Self::Karachi => (18.0, 18.0, 0, dhuhr_plus_one),
            Self::UmmAlQura => (18.5, 0.0, 90, PrayerAdjustments::default()),
            Self::Dubai => (
                18.2,
                18.2,
                0,
                PrayerAdjustments {
                    sunrise: -3,
                    dhuhr: 3,
                    asr: 3,
                    maghrib: 3,
                    ..Default::default()
                },
            ),
            Self::MoonsightingCommittee => (
                18.0,
                18.0,
                0,
                PrayerAdjustments {
                    dhuhr: 5,
                    maghrib: 3,
                    ..Default::default()
                },
            ),
            Self::NorthAmerica => (15.0, 15.0, 0, dhuhr_plus_one),
            Self::Kuwait => (18.0, 17.5, 0, PrayerAdjustments::default()),
            Self::Qatar => (18.0, 0.0, 90, PrayerAdjustments::default()),
            Self::Singapore => (20.0, 18.0, 0, dhuhr_plus_one),
            Self::Turkey => (
                18.0,
                17.0,
                0,
                PrayerAdjustments {
                    sunrise: -7,
                    dhuhr: 5,
                    asr: 4,
                    maghrib: 7,
                    ..Default::default()
                },
            ),
            Self::Other => (0.0, 0.0, 0, PrayerAdjustments::default()),
        };

        let rounding = match self {
            Self::Singapore => Rounding::Up,
            _ => Rounding::Nearest,
        };

        CalculationParameters {
            method: self,
            isha_interval: interval,
            method_adjustments,
            rounding,
            ..CalculationParameters::new(fajr, isha)
        }
    }
}

impl Display for CalculationMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculationMethod {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("calculation method", Self::all(), Self::name, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let p = CalculationMethod::MuslimWorldLeague.parameters();
        assert_eq!((p.fajr_angle, p.isha_angle), (18.0, 17.0));
        assert_eq!(p.method_adjustments.dhuhr, 1);

        let p = CalculationMethod::Egyptian.parameters();
        assert_eq!((p.fajr_angle, p.isha_angle), (19.5, 17.5));

        let p = CalculationMethod::UmmAlQura.parameters();
        assert_eq!((p.fajr_angle, p.isha_interval), (18.5, 90));

        let p = CalculationMethod::Qatar.parameters();
        assert_eq!((p.fajr_angle, p.isha_interval), (18.0, 90));

        let p = CalculationMethod::Dubai.parameters();
        assert_eq!((p.fajr_angle, p.isha_angle), (18.2, 18.2));
        assert_eq!(p.method_adjustments.sunrise, -3);
        assert_eq!(p.method_adjustments.maghrib, 3);

        let p = CalculationMethod::MoonsightingCommittee.parameters();
        assert_eq!((p.method_adjustments.dhuhr, p.method_adjustments.maghrib), (5, 3));

        let p = CalculationMethod::Singapore.parameters();
        assert_eq!((p.fajr_angle, p.isha_angle), (20.0, 18.0));
        assert_eq!(p.rounding, Rounding::Up);

        let p = CalculationMethod::Turkey.parameters();
        assert_eq!(p.method_adjustments.sunrise, -7);
        assert_eq!(p.method_adjustments.asr, 4);

        let p = CalculationMethod::Other.parameters();
        assert_eq!((p.fajr_angle, p.isha_angle, p.isha_interval), (0.0, 0.0, 0));
    }

    #[test]
    fn preset_remembers_method() {
        for &method in CalculationMethod::all() {
            assert_eq!(method.parameters().method, method);
        }
    }

    #[test]
    fn names_round_trip() {
        for &method in CalculationMethod::all() {
            assert_eq!(method.name().parse::<CalculationMethod>().unwrap(), method);
        }
        assert_eq!(
            "moonsighting_committee".parse::<CalculationMethod>().unwrap(),
            CalculationMethod::MoonsightingCommittee
        );
        assert!("tehran".parse::<CalculationMethod>().is_err());
    }
}
