//! sRGB color type
//!
//! Channels are kept as real numbers on the 0..=255 scale so weighted averages
//! never lose precision before the result leaves the engine.

use super::hsv::Hsv;
use super::xyz::Xyz;

/// A color in gamma-encoded sRGB, channels in `0.0..=255.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from real channel values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use color_reduce::Srgb;
    /// let white = Srgb::from_bytes([255, 255, 255]);
    /// assert_eq!(white.r, 255.0);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0] as f64, bytes[1] as f64, bytes[2] as f64)
    }

    /// Convert to a byte array [R, G, B], rounding to nearest.
    ///
    /// Values are clamped to 0..=255.
    ///
    /// # Example
    /// ```
    /// use color_reduce::Srgb;
    /// let color = Srgb::new(254.6, 127.4, -3.0);
    /// assert_eq!(color.to_bytes(), [255, 127, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Convert to a byte array [R, G, B], truncating toward zero.
    ///
    /// The plain averaging strategies report their result this way.
    ///
    /// # Example
    /// ```
    /// use color_reduce::Srgb;
    /// let color = Srgb::new(254.9, 127.4, 0.99);
    /// assert_eq!(color.to_bytes_truncated(), [254, 127, 0]);
    /// ```
    #[inline]
    pub fn to_bytes_truncated(self) -> [u8; 3] {
        [
            self.r.trunc().clamp(0.0, 255.0) as u8,
            self.g.trunc().clamp(0.0, 255.0) as u8,
            self.b.trunc().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Channels normalized to 0.0..=1.0.
    #[inline]
    pub(crate) fn normalized(self) -> [f64; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }
}

/// Inverse sRGB companding of one normalized channel.
#[inline]
pub(crate) fn decode_gamma(value: f64) -> f64 {
    if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Forward sRGB companding of one linear channel.
#[inline]
pub(crate) fn encode_gamma(value: f64) -> f64 {
    if value > 0.0031308 {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * value
    }
}

impl From<Xyz> for Srgb {
    /// XYZ (0..=100) to sRGB.
    ///
    /// Applies the inverse D65 matrix, re-encodes the gamma curve and clamps
    /// each channel to the displayable range. Use [`Srgb::to_bytes`] for the
    /// final rounding.
    fn from(xyz: Xyz) -> Self {
        let x = xyz.x / 100.0;
        let y = xyz.y / 100.0;
        let z = xyz.z / 100.0;

        let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
        let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
        let b = x * 0.0557 + y * -0.2040 + z * 1.0570;

        let scale = |linear: f64| encode_gamma(linear).clamp(0.0, 1.0) * 255.0;
        Self::new(scale(r), scale(g), scale(b))
    }
}

impl From<Hsv> for Srgb {
    /// HSV (hue in turns) to sRGB.
    fn from(hsv: Hsv) -> Self {
        let Hsv { h, s, v } = hsv;
        if s == 0.0 {
            return Self::new(v * 255.0, v * 255.0, v * 255.0);
        }

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(r * 255.0, g * 255.0, b * 255.0)
    }
}
