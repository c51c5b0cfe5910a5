//! One-pixel downsampling strategy.
//!
//! Averages the pixel buffer directly with an area filter instead of going
//! through the histogram.

use image::imageops;
use image::RgbImage;

/// Box-filter `image` down to 1×1 and return that pixel.
pub(crate) fn one_pixel(image: &RgbImage) -> [u8; 3] {
    imageops::thumbnail(image, 1, 1).get_pixel(0, 0).0
}
