//! HSV color type
//!
//! Hue is expressed in turns (0.0..1.0) rather than degrees, which keeps all
//! three channels on comparable scales for weighted averaging.
//!
//! Averaging hue linearly is not a circular mean: hues 0.99 and 0.01 average
//! to 0.5. The `hsv` and `hue` strategies accept this approximation.

use super::srgb::Srgb;

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in turns (0.0..1.0)
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Value (0.0..=1.0)
    pub v: f64,
}

impl Hsv {
    /// Create a new Hsv color.
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// The most saturated, brightest color with this hue.
    #[inline]
    pub fn pure_hue(self) -> Self {
        Self::new(self.h, 1.0, 1.0)
    }
}

impl From<Srgb> for Hsv {
    /// sRGB to HSV on normalized channels.
    ///
    /// # Example
    ///
    /// ```
    /// use color_reduce::{Hsv, Srgb};
    ///
    /// let hsv = Hsv::from(Srgb::from_bytes([0, 0, 255]));
    /// assert!((hsv.h - 2.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(hsv.s, 1.0);
    /// assert_eq!(hsv.v, 1.0);
    /// ```
    fn from(srgb: Srgb) -> Self {
        let [r, g, b] = srgb.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        if max == min {
            return Self::new(0.0, 0.0, max);
        }

        let spread = max - min;
        let s = spread / max;
        let rc = (max - r) / spread;
        let gc = (max - g) / spread;
        let bc = (max - b) / spread;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self::new((h / 6.0).rem_euclid(1.0), s, max)
    }
}
