//! Color types and conversion utilities
//!
//! Every color space the reduction strategies work in gets its own type, so
//! an XYZ triple can never be averaged or rendered as if it were sRGB.
//!
//! # Color Spaces
//!
//! - **Srgb**: gamma-encoded RGB, channels in 0.0..=255.0. Input/output.
//! - **Hsv**: hue in turns (0.0..1.0), saturation and value in 0.0..=1.0.
//! - **Xyz**: CIE XYZ 1931 (D65), nominally 0.0..=100.0.
//! - **Lab**: CIE L\*a\*b\* relative to the D65/2° white point.
//!
//! Conversions are plain `From` impls:
//!
//! ```
//! use color_reduce::{Lab, Srgb, Xyz};
//!
//! let srgb = Srgb::from_bytes([200, 120, 40]);
//! let lab = Lab::from(Xyz::from(srgb));
//! let back = Srgb::from(Xyz::from(lab));
//!
//! assert_eq!(back.to_bytes(), [200, 120, 40]);
//! ```

mod hsv;
mod lab;
mod srgb;
mod xyz;

pub use hsv::Hsv;
pub use lab::Lab;
pub use srgb::Srgb;
pub use xyz::Xyz;

/// A color value that is a plain triple of real channels.
///
/// Lets the averaging strategies share one weighted-mean routine across all
/// color spaces.
pub trait Channels: Copy {
    /// The channel values in declaration order.
    fn channels(self) -> [f64; 3];

    /// Build a color from channel values in declaration order.
    fn from_channels(channels: [f64; 3]) -> Self;
}

macro_rules! impl_channels {
    ($ty:ident, $a:ident, $b:ident, $c:ident) => {
        impl Channels for $ty {
            #[inline]
            fn channels(self) -> [f64; 3] {
                [self.$a, self.$b, self.$c]
            }

            #[inline]
            fn from_channels([$a, $b, $c]: [f64; 3]) -> Self {
                Self { $a, $b, $c }
            }
        }
    };
}

impl_channels!(Srgb, r, g, b);
impl_channels!(Hsv, h, s, v);
impl_channels!(Xyz, x, y, z);
impl_channels!(Lab, l, a, b);

/// Euclidean distance between two colors of the same space.
#[inline]
pub fn distance<C: Channels>(p: C, q: C) -> f64 {
    let [p0, p1, p2] = p.channels();
    let [q0, q1, q2] = q.channels();
    ((p0 - q0).powi(2) + (p1 - q1).powi(2) + (p2 - q2).powi(2)).sqrt()
}
