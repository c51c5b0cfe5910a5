//! Assertion helpers for tests.

use std::path::Path;

use image::RgbImage;
use pretty_assertions::assert_eq;

/// Assert a file exists, is a PNG, and decode it.
pub fn assert_png_file(path: &Path) -> RgbImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(&bytes)
        .expect("decode PNG")
        .into_rgb8()
}

/// Assert two colors agree per channel within `tolerance`.
pub fn assert_color_close(actual: [u8; 3], expected: [u8; 3], tolerance: u8) {
    let close = actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| a.abs_diff(*e) <= tolerance);
    assert!(
        close,
        "Expected {expected:?} (±{tolerance}), got {actual:?}"
    );
}

/// Assert a sequence of colors matches element-wise within `tolerance`.
pub fn assert_colors_close(actual: &[[u8; 3]], expected: &[[u8; 3]], tolerance: u8) {
    assert_eq!(actual.len(), expected.len(), "Color count differs");
    for (a, e) in actual.iter().zip(expected) {
        assert_color_close(*a, *e, tolerance);
    }
}

/// Assert every row of a bar image has column `x` colored like `colors[x]`.
pub fn assert_bar_columns(image: &RgbImage, colors: &[[u8; 3]]) {
    assert_eq!(image.width() as usize, colors.len(), "Bar width");
    for (x, color) in colors.iter().enumerate() {
        for y in 0..image.height() {
            assert_eq!(image.get_pixel(x as u32, y).0, *color, "Pixel ({x}, {y})");
        }
    }
}
