use std::io::Cursor;
use std::path::Path;

use color_reduce::ColorBar;

use crate::error::ColorbarError;

/// Encode a bar as an 8-bit RGB PNG.
pub fn encode_bar(bar: &ColorBar) -> Result<Vec<u8>, ColorbarError> {
    let image = bar.to_image();
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        // Every row repeats the first, so Up filtering leaves only zeros after row 0.
        encoder.set_filter(png::FilterType::Up);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ColorbarError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| ColorbarError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode `bar` and write it to `path`, creating parent directories.
///
/// The file is only touched once encoding has succeeded.
pub fn write_bar(bar: &ColorBar, path: &Path) -> Result<(), ColorbarError> {
    let bytes = encode_bar(bar)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;

    tracing::debug!(
        path = %path.display(),
        width = bar.width(),
        height = bar.height(),
        bytes = bytes.len(),
        "Wrote bar"
    );
    Ok(())
}
