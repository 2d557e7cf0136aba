//! Angle normalisation and three-point interpolation.

/// Reduce `value` into `[0, max)` (or `(max, 0]` for negative `max`).
///
/// Uses floor division, so negative inputs wrap forward:
/// `normalize_with_bound(-1.0, 24.0) == 23.0`.
pub fn normalize_with_bound(value: f64, max: f64) -> f64 {
    value - max * (value / max).floor()
}

/// Reduce degrees into `[0, 360)`.
pub fn unwind_angle(angle: f64) -> f64 {
    normalize_with_bound(angle, 360.0)
}

/// Representative of `angle` in `(-180, 180]`.
pub fn closest_angle(angle: f64) -> f64 {
    if angle > -180.0 && angle <= 180.0 {
        return angle;
    }
    let reduced = angle - 360.0 * (angle / 360.0).round();
    if reduced <= -180.0 {
        reduced + 360.0
    } else {
        reduced
    }
}

/// Interpolate between three equidistant tabular values.
///
/// `y2` is the central value, `y1` the previous, `y3` the next; `n` is the
/// interpolation factor measured from `y2` in units of the tabular interval.
///
/// Source: Meeus, "Astronomical Algorithms", eq. 3.3.
pub fn interpolate(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    y2 + (n / 2.0) * (a + b + n * c)
}

/// As [`interpolate`], with the first differences unwound into `[0, 360)`
/// so that values straddling 0°/360° interpolate correctly.
pub fn interpolate_angles(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = unwind_angle(y2 - y1);
    let b = unwind_angle(y3 - y2);
    let c = b - a;
    y2 + (n / 2.0) * (a + b + n * c)
}

/// Samples of one quantity on the previous, current and next day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple {
    pub previous: f64,
    pub value: f64,
    pub next: f64,
}

impl Triple {
    pub fn new(previous: f64, value: f64, next: f64) -> Self {
        Self {
            previous,
            value,
            next,
        }
    }

    pub fn interpolate(&self, n: f64) -> f64 {
        interpolate(self.value, self.previous, self.next, n)
    }

    pub fn interpolate_angle(&self, n: f64) -> f64 {
        interpolate_angles(self.value, self.previous, self.next, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_positive_and_negative_bounds() {
        assert_eq!(normalize_with_bound(2.0, -5.0), -3.0);
        assert_eq!(normalize_with_bound(-4.0, -5.0), -4.0);
        assert_eq!(normalize_with_bound(-6.0, -5.0), -1.0);
        assert_eq!(normalize_with_bound(-1.0, 24.0), 23.0);
        assert_eq!(normalize_with_bound(1.0, 24.0), 1.0);
        assert_eq!(normalize_with_bound(49.0, 24.0), 1.0);
    }

    #[test]
    fn unwind() {
        assert_eq!(unwind_angle(-45.0), 315.0);
        assert_eq!(unwind_angle(361.0), 1.0);
        assert_eq!(unwind_angle(360.0), 0.0);
        assert_eq!(unwind_angle(259.0), 259.0);
        assert_eq!(unwind_angle(2592.0), 72.0);
    }

    #[test]
    fn closest() {
        assert!((closest_angle(360.0) - 0.0).abs() < 1e-12);
        assert!((closest_angle(361.0) - 1.0).abs() < 1e-12);
        assert!((closest_angle(1.0) - 1.0).abs() < 1e-12);
        assert!((closest_angle(-1.0) + 1.0).abs() < 1e-12);
        assert!((closest_angle(-181.0) - 179.0).abs() < 1e-12);
        assert!((closest_angle(180.0) - 180.0).abs() < 1e-12);
        assert!((closest_angle(359.0) + 1.0).abs() < 1e-12);
        assert!((closest_angle(-359.0) - 1.0).abs() < 1e-12);
        assert!((closest_angle(1261.0) + 179.0).abs() < 1e-12);
    }

    #[test]
    fn closest_excludes_minus_180() {
        assert_eq!(closest_angle(-180.0), 180.0);
        assert_eq!(closest_angle(540.0), 180.0);
        assert_eq!(closest_angle(-540.0), 180.0);
    }

    #[test]
    fn interpolation_meeus_example_3a() {
        let v = interpolate(0.877366, 0.884226, 0.870531, 4.35 / 24.0);
        assert!((v - 0.876125).abs() < 1e-6, "got {v}");
        let v = interpolate(1.0, -1.0, 3.0, 0.6);
        assert!((v - 2.2).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn angle_interpolation_across_zero() {
        let v = interpolate_angles(1.0, -1.0, 3.0, 0.6);
        assert!((v - 2.2).abs() < 1e-6, "got {v}");
        let v = interpolate_angles(1.0, 359.0, 3.0, 0.6);
        assert!((v - 2.2).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn triple_matches_free_functions() {
        let t = Triple::new(359.0, 1.0, 3.0);
        assert_eq!(t.interpolate_angle(0.6), interpolate_angles(1.0, 359.0, 3.0, 0.6));
        assert_eq!(t.interpolate(0.6), interpolate(1.0, 359.0, 3.0, 0.6));
    }
}
