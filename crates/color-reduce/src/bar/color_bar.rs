//! ColorBar struct and its geometry.

use image::{Rgb, RgbImage};

use crate::api::ReduceError;

/// Width-to-height ratio of the rendered bar.
const ASPECT_RATIO: f64 = 2.5;

/// Height of a bar `width` columns wide: `max(1, floor(width / 2.5))`.
///
/// # Example
///
/// ```
/// use color_reduce::bar_height;
///
/// assert_eq!(bar_height(3), 1);
/// assert_eq!(bar_height(10), 4);
/// assert_eq!(bar_height(1000), 400);
/// ```
pub fn bar_height(width: u32) -> u32 {
    ((width as f64 / ASPECT_RATIO).floor() as u32).max(1)
}

/// An ordered, non-empty sequence of per-frame colors ready to render.
///
/// Column `i` of the rendered image is `colors()[i]` on every row.
///
/// # Example
///
/// ```
/// use color_reduce::ColorBar;
///
/// let bar = ColorBar::new(vec![[255, 0, 0], [0, 255, 0], [0, 0, 255]]).unwrap();
/// assert_eq!((bar.width(), bar.height()), (3, 1));
///
/// let image = bar.to_image();
/// assert_eq!(image.get_pixel(1, 0).0, [0, 255, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBar {
    /// One color per frame, in frame order.
    colors: Vec<[u8; 3]>,
    /// Rendered height in pixels.
    height: u32,
}

impl ColorBar {
    /// Validate a color sequence and compute the bar geometry.
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptySequence`] if `colors` is empty.
    pub fn new(colors: Vec<[u8; 3]>) -> Result<Self, ReduceError> {
        if colors.is_empty() {
            return Err(ReduceError::EmptySequence);
        }
        let height = bar_height(colors.len() as u32);
        Ok(Self { colors, height })
    }

    /// The color sequence, one entry per column.
    #[inline]
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Width in pixels (the number of frames).
    #[inline]
    pub fn width(&self) -> u32 {
        self.colors.len() as u32
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Hex strings (`RRGGBB`) for each color, in order.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors
            .iter()
            .map(|[r, g, b]| format!("{:02X}{:02X}{:02X}", r, g, b))
            .collect()
    }

    /// Render the bar into a fresh RGB pixel buffer.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height, |x, _| Rgb(self.colors[x as usize]))
    }
}

/// Validate `colors` and render the bar image in one step.
///
/// # Errors
///
/// [`ReduceError::EmptySequence`] if `colors` is empty; no image is
/// allocated in that case.
pub fn assemble_bar(colors: &[[u8; 3]]) -> Result<RgbImage, ReduceError> {
    Ok(ColorBar::new(colors.to_vec())?.to_image())
}
