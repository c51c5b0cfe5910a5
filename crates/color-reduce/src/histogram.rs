//! Weighted color histograms.
//!
//! A [`Histogram`] records how many pixels of an image carry each distinct
//! color. Every reduction strategy starts from one. Entries are kept sorted
//! by color so that iteration order, and therefore k-means sampling and
//! tie-breaking, does not depend on hashing.

use std::collections::BTreeMap;

use image::RgbImage;

use crate::color::Srgb;

/// One distinct color and the number of pixels bearing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramEntry {
    /// The color as [R, G, B] bytes.
    pub color: [u8; 3],
    /// Number of pixels with exactly this color.
    pub count: u32,
}

impl HistogramEntry {
    /// The entry's color as a real-valued sRGB triple.
    #[inline]
    pub fn srgb(&self) -> Srgb {
        Srgb::from_bytes(self.color)
    }
}

/// Distinct colors of one image with their pixel counts.
///
/// Invariants: no color appears twice, no count is zero, and the counts sum
/// to the pixel count of the source image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    entries: Vec<HistogramEntry>,
    total: u64,
}

impl Histogram {
    /// Count every pixel of `image` exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use color_reduce::Histogram;
    /// use image::{Rgb, RgbImage};
    ///
    /// let mut image = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
    /// image.put_pixel(1, 1, Rgb([0, 0, 0]));
    ///
    /// let histogram = Histogram::from_image(&image);
    /// assert_eq!(histogram.len(), 2);
    /// assert_eq!(histogram.total(), 4);
    /// ```
    pub fn from_image(image: &RgbImage) -> Self {
        Self::from_colors(image.pixels().map(|pixel| pixel.0))
    }

    /// Build a histogram from a stream of individual pixel colors.
    pub fn from_colors(colors: impl IntoIterator<Item = [u8; 3]>) -> Self {
        let mut counts: BTreeMap<[u8; 3], u32> = BTreeMap::new();
        for color in colors {
            let count = counts.entry(color).or_insert(0);
            *count = count.saturating_add(1);
        }
        Self::from_counts(counts)
    }

    /// Build a histogram from `(color, count)` pairs.
    ///
    /// Repeated colors are merged and zero counts dropped, so the invariants
    /// hold whatever the input looks like. Merged counts saturate at
    /// `u32::MAX`.
    pub fn from_counts(counts: impl IntoIterator<Item = ([u8; 3], u32)>) -> Self {
        let mut merged: BTreeMap<[u8; 3], u32> = BTreeMap::new();
        for (color, count) in counts {
            if count > 0 {
                let merged_count = merged.entry(color).or_insert(0);
                *merged_count = merged_count.saturating_add(count);
            }
        }

        let entries: Vec<HistogramEntry> = merged
            .into_iter()
            .map(|(color, count)| HistogramEntry { color, count })
            .collect();
        let total = entries.iter().map(|e| e.count as u64).sum();

        Self { entries, total }
    }

    /// Entries sorted ascending by color.
    #[inline]
    pub fn entries(&self) -> &[HistogramEntry] {
        &self.entries
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the source image had no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (the pixel count of the source image).
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The entry with the highest count.
    ///
    /// Ties go to the lexicographically largest color, i.e. the last entry
    /// under ascending `(count, color)` ordering.
    pub fn most_common(&self) -> Option<&HistogramEntry> {
        self.entries.iter().max_by_key(|e| (e.count, e.color))
    }
}
