//! CIE XYZ 1931 color type (D65 illuminant)

use super::lab::Lab;
use super::srgb::{decode_gamma, Srgb};

/// D65 / 2° reference white, scaled to Y = 100.
pub const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

/// A color in CIE XYZ space, nominally 0.0..=100.0 per channel.
///
/// Values are not clamped; in-gamut sRGB colors may land slightly above 100
/// because of the four-digit matrix constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Create a new Xyz color.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Srgb> for Xyz {
    /// sRGB to XYZ.
    ///
    /// Normalizes each channel, removes the sRGB gamma, scales to 0..=100 and
    /// applies the D65 sRGB→XYZ matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use color_reduce::{Srgb, Xyz};
    ///
    /// let white = Xyz::from(Srgb::from_bytes([255, 255, 255]));
    /// assert!((white.y - 100.0).abs() < 1e-9);
    /// ```
    fn from(srgb: Srgb) -> Self {
        let [r, g, b] = srgb.normalized().map(|c| decode_gamma(c) * 100.0);

        Self::new(
            r * 0.4124 + g * 0.3576 + b * 0.1805,
            r * 0.2126 + g * 0.7152 + b * 0.0722,
            r * 0.0193 + g * 0.1192 + b * 0.9505,
        )
    }
}

impl From<Lab> for Xyz {
    /// Lab to XYZ, the exact inverse of `Lab::from(Xyz)`.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;

        let finv = |t: f64| {
            let cubed = t.powi(3);
            if cubed > 0.008856 {
                cubed
            } else {
                (t - 16.0 / 116.0) / 7.787
            }
        };

        Self::new(
            finv(fx) * D65_WHITE.x,
            finv(fy) * D65_WHITE.y,
            finv(fz) * D65_WHITE.z,
        )
    }
}
