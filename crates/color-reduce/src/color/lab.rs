//! CIE L\*a\*b\* color type, relative to the D65/2° white point.

use super::xyz::{Xyz, D65_WHITE};

/// Threshold between the cube-root and linear segments of the Lab curve.
const EPSILON: f64 = 0.008856;

/// A color in CIE Lab space.
///
/// `l` is 0.0..=100.0 for in-gamut colors; `a` and `b` are unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness (0.0 = black, 100.0 = white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    /// XYZ to Lab.
    ///
    /// # Example
    ///
    /// ```
    /// use color_reduce::{Lab, Xyz};
    ///
    /// let lab = Lab::from(Xyz::new(95.047, 100.0, 108.883));
    /// assert!((lab.l - 100.0).abs() < 1e-9);
    /// assert!(lab.a.abs() < 1e-9 && lab.b.abs() < 1e-9);
    /// ```
    fn from(xyz: Xyz) -> Self {
        let fx = f(xyz.x / D65_WHITE.x);
        let fy = f(xyz.y / D65_WHITE.y);
        let fz = f(xyz.z / D65_WHITE.z);

        Self::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_xyz_close(a: Xyz, b: Xyz) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3 && (a.z - b.z).abs() < 1e-3,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_black_is_zero_lightness() {
        let lab = Lab::from(Xyz::new(0.0, 0.0, 0.0));
        assert!(lab.l.abs() < 1e-9);
        assert!(lab.a.abs() < 1e-9);
        assert!(lab.b.abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_both_curve_segments() {
        let samples = [
            Xyz::new(41.24, 21.26, 1.93),
            Xyz::new(0.2, 0.3, 0.5),
            Xyz::new(95.047, 100.0, 108.883),
            Xyz::new(18.0, 19.0, 20.0),
            Xyz::new(0.0, 0.0, 0.0),
            Xyz::new(60.0, 0.5, 80.0),
        ];
        for xyz in samples {
            assert_xyz_close(Xyz::from(Lab::from(xyz)), xyz);
        }
    }

    #[test]
    fn test_round_trip_grid() {
        for x in (0..=100).step_by(10) {
            for y in (0..=100).step_by(10) {
                for z in (0..=100).step_by(10) {
                    let xyz = Xyz::new(x as f64, y as f64, z as f64);
                    assert_xyz_close(Xyz::from(Lab::from(xyz)), xyz);
                }
            }
        }
    }

    #[test]
    fn test_lightness_of_mid_grey() {
        // Y = 18.42 is the textbook L* = 50 grey.
        let lab = Lab::from(Xyz::new(17.51, 18.42, 20.06));
        assert!((lab.l - 50.0).abs() < 0.05, "L* = {}", lab.l);
    }
}
