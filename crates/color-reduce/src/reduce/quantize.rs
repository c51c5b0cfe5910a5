//! Weighted median cut quantization.
//!
//! The `quantized` strategy reduces a frame to a one-color palette. The cut
//! itself is general so callers can extract larger palettes the same way.

use crate::color::Srgb;
use crate::histogram::{Histogram, HistogramEntry};

/// One palette color and the number of pixels it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub color: [u8; 3],
    pub weight: u64,
}

/// A box of histogram entries for median cut subdivision.
#[derive(Debug, Clone)]
struct ColorBox {
    entries: Vec<HistogramEntry>,
}

impl ColorBox {
    fn new(entries: Vec<HistogramEntry>) -> Self {
        Self { entries }
    }

    fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| e.count as u64).sum()
    }

    /// Range (max - min) along each channel.
    fn ranges(&self) -> [u8; 3] {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for entry in &self.entries {
            for channel in 0..3 {
                min[channel] = min[channel].min(entry.color[channel]);
                max[channel] = max[channel].max(entry.color[channel]);
            }
        }
        [max[0] - min[0], max[1] - min[1], max[2] - min[2]]
    }

    fn widest_channel(&self) -> usize {
        let [r, g, b] = self.ranges();
        if r >= g && r >= b {
            0
        } else if g >= b {
            1
        } else {
            2
        }
    }

    /// Split priority: heavy boxes with wide color spread split first.
    fn priority(&self) -> u64 {
        let spread = self.ranges().into_iter().max().unwrap_or(0) as u64;
        self.total_weight() * spread
    }

    /// Count-weighted mean color.
    fn centroid(&self) -> PaletteColor {
        let mut sums = [0.0f64; 3];
        for entry in &self.entries {
            let srgb = entry.srgb();
            let weight = entry.count as f64;
            sums[0] += srgb.r * weight;
            sums[1] += srgb.g * weight;
            sums[2] += srgb.b * weight;
        }

        let weight = self.total_weight();
        let total = weight.max(1) as f64;
        PaletteColor {
            color: Srgb::new(sums[0] / total, sums[1] / total, sums[2] / total).to_bytes(),
            weight,
        }
    }

    /// Split along the widest channel at the weighted median.
    fn split(mut self) -> (ColorBox, ColorBox) {
        let axis = self.widest_channel();
        self.entries.sort_by_key(|e| (e.color[axis], e.color));

        let half_weight = self.total_weight() as f64 / 2.0;
        let mut accumulated = 0.0f64;
        let mut split_idx = 1;

        for (i, entry) in self.entries.iter().enumerate() {
            accumulated += entry.count as f64;
            if accumulated >= half_weight && i + 1 < self.entries.len() {
                split_idx = i + 1;
                break;
            }
        }

        // At least one entry per side.
        split_idx = split_idx.clamp(1, self.entries.len() - 1);

        let right = self.entries.split_off(split_idx);
        (ColorBox::new(self.entries), ColorBox::new(right))
    }
}

/// Reduce `histogram` to at most `max_colors` palette colors.
///
/// Returns an empty palette for an empty histogram or `max_colors == 0`.
///
/// # Example
///
/// ```
/// use color_reduce::Histogram;
/// use color_reduce::reduce::quantize::median_cut;
///
/// let histogram = Histogram::from_counts([([0, 0, 0], 3), ([250, 250, 250], 1)]);
/// let palette = median_cut(&histogram, 2);
/// assert_eq!(palette.len(), 2);
/// ```
pub fn median_cut(histogram: &Histogram, max_colors: usize) -> Vec<PaletteColor> {
    if histogram.is_empty() || max_colors == 0 {
        return Vec::new();
    }

    let mut boxes = vec![ColorBox::new(histogram.entries().to_vec())];

    while boxes.len() < max_colors {
        let best_idx = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.entries.len() >= 2)
            .max_by_key(|(_, b)| b.priority())
            .map(|(i, _)| i);

        let Some(idx) = best_idx else {
            break;
        };

        let (left, right) = boxes.swap_remove(idx).split();
        boxes.push(left);
        boxes.push(right);
    }

    boxes.iter().map(ColorBox::centroid).collect()
}

/// The heaviest color of a one-color median cut palette.
pub(crate) fn dominant_color(histogram: &Histogram) -> [u8; 3] {
    median_cut(histogram, 1)
        .into_iter()
        .max_by_key(|p| p.weight)
        .map(|p| p.color)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_color_palette_is_weighted_mean() {
        let histogram = Histogram::from_counts([([0, 0, 0], 3), ([200, 100, 41], 1)]);
        let palette = median_cut(&histogram, 1);
        assert_eq!(
            palette,
            vec![PaletteColor {
                color: [50, 25, 10],
                weight: 4
            }]
        );
        assert_eq!(dominant_color(&histogram), [50, 25, 10]);
    }

    #[test]
    fn test_two_clusters_are_separated() {
        let histogram = Histogram::from_counts([
            ([0, 0, 0], 5),
            ([2, 2, 2], 5),
            ([250, 0, 0], 3),
            ([252, 0, 0], 3),
        ]);
        let mut palette = median_cut(&histogram, 2);
        palette.sort_by_key(|p| p.color);
        assert_eq!(
            palette,
            vec![
                PaletteColor { color: [1, 1, 1], weight: 10 },
                PaletteColor { color: [251, 0, 0], weight: 6 },
            ]
        );
    }

    #[test]
    fn test_palette_never_exceeds_distinct_colors() {
        let histogram = Histogram::from_counts([([1, 1, 1], 1), ([2, 2, 2], 1)]);
        assert_eq!(median_cut(&histogram, 8).len(), 2);
    }

    #[test]
    fn test_weights_are_preserved() {
        let histogram = Histogram::from_counts([
            ([10, 20, 30], 4),
            ([200, 20, 30], 9),
            ([10, 220, 30], 1),
            ([10, 20, 230], 6),
        ]);
        let palette = median_cut(&histogram, 3);
        assert_eq!(palette.iter().map(|p| p.weight).sum::<u64>(), histogram.total());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(median_cut(&Histogram::default(), 4).is_empty());
        let histogram = Histogram::from_counts([([1, 1, 1], 1)]);
        assert!(median_cut(&histogram, 0).is_empty());
    }
}
