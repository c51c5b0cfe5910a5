//! Most-frequent-color strategy.

use crate::histogram::Histogram;

/// The color with the highest pixel count, ties to the largest color.
pub(crate) fn most_common(histogram: &Histogram) -> [u8; 3] {
    histogram
        .most_common()
        .map(|entry| entry.color)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_duplicates_win() {
        let histogram =
            Histogram::from_counts([([1, 2, 3], 10), ([4, 5, 6], 20), ([4, 5, 6], 20)]);
        assert_eq!(most_common(&histogram), [4, 5, 6]);
    }

    #[test]
    fn test_tie_goes_to_largest_color() {
        let histogram = Histogram::from_counts([([0, 0, 255], 8), ([0, 1, 0], 8), ([9, 9, 9], 2)]);
        assert_eq!(most_common(&histogram), [0, 1, 0]);
    }
}
