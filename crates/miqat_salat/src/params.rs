//! Calculation parameters for one prayer-time computation.

use miqat_astro::Coordinates;
use miqat_time::Rounding;

use crate::method::CalculationMethod;
use crate::prayer_types::{HighLatitudeRule, Madhab, NightPortions, PrayerAdjustments, Shafaq};

/// Everything besides place and date that determines a day's times.
///
/// Usually obtained from [`CalculationMethod::parameters`] and then
/// customised with the `with_*` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationParameters {
    /// Preset these values came from. Moonsighting Committee selects the
    /// seasonal twilight model.
    pub method: CalculationMethod,
    /// Solar depression for Fajr, positive degrees below the horizon.
    pub fajr_angle: f64,
    /// Solar depression for Isha, positive degrees below the horizon.
    pub isha_angle: f64,
    /// Minutes after Maghrib for Isha. Zero means use `isha_angle`.
    pub isha_interval: u32,
    pub madhab: Madhab,
    /// `None` selects a rule from the observer's latitude.
    pub high_latitude_rule: Option<HighLatitudeRule>,
    /// User offsets in minutes.
    pub adjustments: PrayerAdjustments,
    /// Offsets in minutes that are part of the method's definition.
    pub method_adjustments: PrayerAdjustments,
    pub rounding: Rounding,
    pub shafaq: Shafaq,
}

impl CalculationParameters {
    /// Custom angles with no method-specific behaviour.
    pub fn new(fajr_angle: f64, isha_angle: f64) -> Self {
        Self {
            method: CalculationMethod::Other,
            fajr_angle,
            isha_angle,
            isha_interval: 0,
            madhab: Madhab::default(),
            high_latitude_rule: None,
            adjustments: PrayerAdjustments::default(),
            method_adjustments: PrayerAdjustments::default(),
            rounding: Rounding::default(),
            shafaq: Shafaq::default(),
        }
    }

    /// Custom Fajr angle with Isha a fixed number of minutes after Maghrib.
    pub fn with_isha_interval(fajr_angle: f64, isha_interval: u32) -> Self {
        Self {
            isha_interval,
            ..Self::new(fajr_angle, 0.0)
        }
    }

    pub fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    pub fn with_high_latitude_rule(mut self, rule: Option<HighLatitudeRule>) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    pub fn with_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_shafaq(mut self, shafaq: Shafaq) -> Self {
        self.shafaq = shafaq;
        self
    }

    /// The rule in force for `coordinates`.
    pub fn effective_high_latitude_rule(&self, coordinates: Coordinates) -> HighLatitudeRule {
        self.high_latitude_rule
            .unwrap_or_else(|| HighLatitudeRule::recommended_for(coordinates))
    }

    pub fn night_portions(&self, coordinates: Coordinates) -> NightPortions {
        self.effective_high_latitude_rule(coordinates)
            .night_portions(self.fajr_angle, self.isha_angle)
    }
}

impl Default for CalculationParameters {
    fn default() -> Self {
        CalculationMethod::Other.parameters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_angles() {
        let p = CalculationParameters::new(16.0, 14.0);
        assert_eq!(p.method, CalculationMethod::Other);
        assert_eq!((p.fajr_angle, p.isha_angle, p.isha_interval), (16.0, 14.0, 0));
        assert_eq!(p.rounding, Rounding::Nearest);
        assert!(p.high_latitude_rule.is_none());
    }

    #[test]
    fn interval_variant() {
        let p = CalculationParameters::with_isha_interval(18.5, 90);
        assert_eq!(p.isha_interval, 90);
        assert_eq!(p.isha_angle, 0.0);
    }

    #[test]
    fn twilight_angle_portions() {
        let p = CalculationParameters::new(10.0, 15.0)
            .with_high_latitude_rule(Some(HighLatitudeRule::TwilightAngle));
        let coords = Coordinates::new(10.0, 0.0).unwrap();
        let portions = p.night_portions(coords);
        assert!((portions.fajr - 1.0 / 6.0).abs() < 1e-12);
        assert!((portions.isha - 1.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn auto_rule_follows_latitude() {
        let p = CalculationParameters::new(18.0, 18.0);
        let oslo = Coordinates::new(59.9094, 10.7349).unwrap();
        let cairo = Coordinates::new(30.0287, 31.2495).unwrap();
        assert_eq!(
            p.effective_high_latitude_rule(oslo),
            HighLatitudeRule::SeventhOfTheNight
        );
        assert_eq!(
            p.effective_high_latitude_rule(cairo),
            HighLatitudeRule::MiddleOfTheNight
        );
    }

    #[test]
    fn builders_chain() {
        let p = CalculationParameters::new(18.0, 17.0)
            .with_madhab(Madhab::Hanafi)
            .with_shafaq(Shafaq::Ahmer)
            .with_rounding(Rounding::Up);
        assert_eq!(p.madhab, Madhab::Hanafi);
        assert_eq!(p.shafaq, Shafaq::Ahmer);
        assert_eq!(p.rounding, Rounding::Up);
    }
}
