//! Test fixtures: synthetic frames, fake videos and settings.

use std::path::{Path, PathBuf};

use color_reduce::Method;
use image::{Rgb, RgbImage};
use movie_colorbar::models::RunSettings;

/// Colors that survive JPEG and the resize without drifting far.
pub mod colors {
    pub const RED: [u8; 3] = [200, 30, 60];
    pub const GREEN: [u8; 3] = [40, 180, 70];
    pub const BLUE: [u8; 3] = [20, 60, 220];
    pub const GREY: [u8; 3] = [128, 128, 128];
    pub const BLACK: [u8; 3] = [0, 0, 0];
}

/// Settings for a run with the given method and no real ffmpeg.
pub fn settings(method: Method) -> RunSettings {
    RunSettings {
        method,
        fps: 10,
        workers: 2,
        seed: Some(42),
        frame_size: 25,
        ffmpeg: PathBuf::from("/nonexistent/ffmpeg"),
    }
}

/// Write one solid frame named `{index:05}.{ext}`.
pub fn write_frame(dir: &Path, index: usize, color: [u8; 3], ext: &str) -> PathBuf {
    let path = dir.join(format!("{index:05}.{ext}"));
    RgbImage::from_pixel(64, 36, Rgb(color))
        .save(&path)
        .expect("write frame");
    path
}

/// Write solid PNG frames numbered from 1, in the given order.
pub fn write_frames(dir: &Path, colors: &[[u8; 3]]) -> Vec<PathBuf> {
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| write_frame(dir, i + 1, *color, "png"))
        .collect()
}

/// Write a frame whose left `share` of columns is `left`, rest `right`.
pub fn write_split_frame(
    dir: &Path,
    index: usize,
    left: [u8; 3],
    right: [u8; 3],
    share: f64,
) -> PathBuf {
    let path = dir.join(format!("{index:05}.png"));
    let boundary = (100.0 * share) as u32;
    RgbImage::from_fn(100, 100, |x, _| if x < boundary { Rgb(left) } else { Rgb(right) })
        .save(&path)
        .expect("write frame");
    path
}

/// Create `name` inside `dir` plus the JPEG stills the fake ffmpeg will
/// "extract" from it.
#[cfg(unix)]
pub fn fake_video(dir: &Path, name: &str, colors: &[[u8; 3]]) -> PathBuf {
    let video = dir.join(name);
    std::fs::write(&video, b"not really a video").expect("write video");

    let frames = dir.join(format!("{name}.frames"));
    std::fs::create_dir_all(&frames).expect("create frames dir");
    for (i, color) in colors.iter().enumerate() {
        write_frame(&frames, i + 1, *color, "jpg");
    }
    video
}

/// A stand-in for ffmpeg that copies `<video>.frames/*.jpg` into the output
/// directory, or fails like ffmpeg does on unreadable input.
///
/// Written once per test binary, before any test spawns it, so no child
/// process can inherit a write handle to the script.
#[cfg(unix)]
pub fn fake_ffmpeg() -> &'static Path {
    use std::os::unix::fs::PermissionsExt;
    use std::sync::OnceLock;

    static SCRIPT: OnceLock<(tempfile::TempDir, PathBuf)> = OnceLock::new();

    let (_, path) = SCRIPT.get_or_init(|| {
        let dir = tempfile::tempdir().expect("script dir");
        let path = dir.path().join("ffmpeg");
        std::fs::write(
            &path,
            r#"#!/bin/sh
video="$2"
out=$(dirname "$5")
if [ ! -d "$video.frames" ]; then
    echo "ffmpeg version fake" >&2
    echo "$video: Invalid data found when processing input" >&2
    exit 1
fi
cp "$video.frames"/*.jpg "$out"/
"#,
        )
        .expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        (dir, path)
    });
    path
}
