//! Weighted-average strategies.
//!
//! Each distinct color contributes in proportion to its pixel count; the
//! average is taken per channel in the strategy's color space and converted
//! back to sRGB.

use crate::color::{Channels, Hsv, Lab, Srgb, Xyz};
use crate::histogram::Histogram;

/// Count-weighted per-channel mean of the histogram, mapped into space `C`.
///
/// The histogram must not be empty.
pub(crate) fn weighted_mean<C: Channels>(histogram: &Histogram, convert: impl Fn(Srgb) -> C) -> C {
    let mut sums = [0.0f64; 3];
    for entry in histogram.entries() {
        let weight = entry.count as f64;
        for (sum, channel) in sums.iter_mut().zip(convert(entry.srgb()).channels()) {
            *sum += channel * weight;
        }
    }

    let total = histogram.total() as f64;
    C::from_channels(sums.map(|sum| sum / total))
}

pub(crate) fn rgb(histogram: &Histogram) -> [u8; 3] {
    weighted_mean(histogram, |srgb| srgb).to_bytes_truncated()
}

/// Root-mean-square per channel, which favors bright colors over dim ones.
pub(crate) fn rgb_squared(histogram: &Histogram) -> [u8; 3] {
    let squares = weighted_mean(histogram, |srgb| {
        Srgb::new(srgb.r * srgb.r, srgb.g * srgb.g, srgb.b * srgb.b)
    });
    Srgb::new(squares.r.sqrt(), squares.g.sqrt(), squares.b.sqrt()).to_bytes_truncated()
}

pub(crate) fn hsv(histogram: &Histogram) -> [u8; 3] {
    Srgb::from(weighted_mean(histogram, Hsv::from)).to_bytes_truncated()
}

/// The hue of the `hsv` result, at full saturation and value.
///
/// Taken from the 8-bit `hsv` output, so dim or greyish means pick up the
/// hue their truncated channels imply.
pub(crate) fn hue(histogram: &Histogram) -> [u8; 3] {
    let averaged = Hsv::from(Srgb::from_bytes(hsv(histogram)));
    Srgb::from(averaged.pure_hue()).to_bytes_truncated()
}

pub(crate) fn xyz(histogram: &Histogram) -> [u8; 3] {
    Srgb::from(weighted_mean(histogram, Xyz::from)).to_bytes()
}

pub(crate) fn lab(histogram: &Histogram) -> [u8; 3] {
    let mean = weighted_mean(histogram, |srgb| Lab::from(Xyz::from(srgb)));
    Srgb::from(Xyz::from(mean)).to_bytes()
}
