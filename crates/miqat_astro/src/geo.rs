//! Observer position on Earth.

use crate::error::AstroError;

/// Geographic coordinates in degrees, north and east positive.
///
/// Fields are private so that every value has passed range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Coordinates {
    /// Validate and build. Out-of-range or NaN inputs are rejected, never clamped.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, AstroError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(AstroError::InvalidLatitude(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(AstroError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude(&self) -> f64 {
        self.longitude_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        let c = Coordinates::new(35.775, -78.6336).unwrap();
        assert_eq!(c.latitude(), 35.775);
        assert_eq!(c.longitude(), -78.6336);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Coordinates::new(90.5, 0.0),
            Err(AstroError::InvalidLatitude(90.5))
        );
        assert_eq!(
            Coordinates::new(0.0, -180.1),
            Err(AstroError::InvalidLongitude(-180.1))
        );
    }

    #[test]
    fn rejects_nan() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NAN).is_err());
    }
}
