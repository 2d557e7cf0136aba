//! Obliquity of the ecliptic.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., eqs. 22.2 and 25.8.

/// Mean obliquity of the ecliptic, ε0, in degrees.
pub fn mean_obliquity_of_the_ecliptic(t: f64) -> f64 {
    let term1 = 23.439291;
    let term2 = 0.013004167 * t;
    let term3 = 0.0000001639 * t.powi(2);
    let term4 = 0.0000005036 * t.powi(3);
    term1 - term2 - term3 + term4
}

/// Apparent obliquity of the ecliptic for apparent solar positions.
///
/// `mean_obliquity` is ε0 from [`mean_obliquity_of_the_ecliptic`].
pub fn apparent_obliquity_of_the_ecliptic(t: f64, mean_obliquity: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    mean_obliquity + 0.00256 * omega.to_radians().cos()
}
