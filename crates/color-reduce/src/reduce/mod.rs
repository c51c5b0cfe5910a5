//! Per-frame color reduction strategies.
//!
//! A strategy maps one frame (its histogram, and for some strategies the
//! pixel buffer itself) to a single representative sRGB color. The ten
//! strategies are selected through the closed [`Method`] enum; each variant
//! maps to one entry of a function-pointer table.
//!
//! | Method | Idea | Output rounding |
//! |--------|------|-----------------|
//! | `rgb` | weighted mean of R, G, B | truncate |
//! | `rgb-squared` | root of the weighted mean of squared channels | truncate |
//! | `hsv` | weighted mean of H, S, V | truncate |
//! | `hue` | hue of the `hsv` mean at full saturation and value | truncate |
//! | `xyz` | weighted mean in CIE XYZ | round |
//! | `lab` | weighted mean in CIE Lab | round |
//! | `common` | most frequent color | exact |
//! | `resize` | box-filter the frame down to one pixel | round |
//! | `quantized` | one-color median cut palette | round |
//! | `kmeans` | center of the heaviest of 5 weighted clusters | round |

mod average;
mod common;
pub mod kmeans;
pub mod quantize;
mod resize;

use std::fmt;
use std::str::FromStr;

use image::RgbImage;
use rand::RngCore;

use crate::api::ReduceError;
use crate::histogram::Histogram;

/// Signature shared by every strategy in the dispatch table.
///
/// The histogram is never empty when a strategy is invoked.
type Strategy = fn(&RgbImage, &Histogram, &mut dyn RngCore) -> [u8; 3];

/// The reduction strategy applied to every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    Rgb,
    Hsv,
    Hue,
    Kmeans,
    Common,
    Xyz,
    Lab,
    #[default]
    RgbSquared,
    Resize,
    Quantized,
}

impl Method {
    /// Every method, in the canonical order.
    pub const ALL: [Method; 10] = [
        Method::Rgb,
        Method::Hsv,
        Method::Hue,
        Method::Kmeans,
        Method::Common,
        Method::Xyz,
        Method::Lab,
        Method::RgbSquared,
        Method::Resize,
        Method::Quantized,
    ];

    /// Selector names, index-aligned with [`Method::ALL`].
    pub const NAMES: [&'static str; 10] = [
        "rgb",
        "hsv",
        "hue",
        "kmeans",
        "common",
        "xyz",
        "lab",
        "rgb-squared",
        "resize",
        "quantized",
    ];

    /// The selector name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// True if repeated runs over the same frame always agree.
    pub fn is_deterministic(self) -> bool {
        self != Method::Kmeans
    }

    fn strategy(self) -> Strategy {
        match self {
            Method::Rgb => |_, hist, _| average::rgb(hist),
            Method::Hsv => |_, hist, _| average::hsv(hist),
            Method::Hue => |_, hist, _| average::hue(hist),
            Method::Kmeans => |_, hist, rng| kmeans::dominant_color(hist, rng).color,
            Method::Common => |_, hist, _| common::most_common(hist),
            Method::Xyz => |_, hist, _| average::xyz(hist),
            Method::Lab => |_, hist, _| average::lab(hist),
            Method::RgbSquared => |_, hist, _| average::rgb_squared(hist),
            Method::Resize => |image, _, _| resize::one_pixel(image),
            Method::Quantized => |_, hist, _| quantize::dominant_color(hist),
        }
    }

    /// Reduce one frame to its representative color.
    ///
    /// `rng` is only consulted by [`Method::Kmeans`].
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptyHistogram`] if the frame has no pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use color_reduce::Method;
    /// use image::{Rgb, RgbImage};
    ///
    /// let frame = RgbImage::from_pixel(4, 4, Rgb([30, 60, 90]));
    /// let color = Method::Rgb.reduce(&frame, &mut rand::thread_rng()).unwrap();
    /// assert_eq!(color, [30, 60, 90]);
    /// ```
    pub fn reduce(self, image: &RgbImage, rng: &mut dyn RngCore) -> Result<[u8; 3], ReduceError> {
        let histogram = Histogram::from_image(image);
        if histogram.is_empty() {
            return Err(ReduceError::EmptyHistogram);
        }
        Ok((self.strategy())(image, &histogram, rng))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ReduceError;

    /// Parse a selector name.
    ///
    /// Matching ignores case and surrounding whitespace. `rgbsquared` is
    /// accepted as an alias of `rgb-squared`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "rgbsquared" {
            return Ok(Method::RgbSquared);
        }
        Self::NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| ReduceError::InvalidMethod(s.to_string()))
    }
}
