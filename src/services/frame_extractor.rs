//! Frame extraction through an external ffmpeg process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use thiserror::Error;

/// Extensions recognised as video containers (compared case-insensitively).
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "webm", "mkv", "flv", "vob", "ogg", "ogv", "drc", "gif", "gifv", "mng", "avi", "mov", "qt",
    "wmv", "yuv", "rm", "rmvb", "asf", "amv", "mp4", "m4p", "m4v", "mpg", "mp2", "mpv",
];

/// Extensions of still images accepted as frames.
pub const FRAME_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("ffmpeg exited with {status} for {}: {stderr}", video.display())]
    Failed {
        video: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("ffmpeg produced no frames for {}", .0.display())]
    NoFrames(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// True if the path has one of the [`VIDEO_EXTENSIONS`].
pub fn is_video(path: &Path) -> bool {
    has_extension(path, VIDEO_EXTENSIONS)
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Still images in `dir`, in frame order.
///
/// Files named by frame number (`00012.jpg`) sort numerically; anything else
/// sorts after them by name.
pub fn list_frames(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut frames = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, FRAME_EXTENSIONS) {
            frames.push(path);
        }
    }

    frames.sort_by_cached_key(|path| {
        let number = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<u64>().ok());
        (number.is_none(), number, path.file_name().map(|n| n.to_owned()))
    });
    Ok(frames)
}

/// Frames written to a temporary directory.
///
/// The directory and its files are removed when this value drops.
#[derive(Debug)]
pub struct ExtractedFrames {
    dir: TempDir,
    frames: Vec<PathBuf>,
}

impl ExtractedFrames {
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Samples a video into numbered JPEG stills.
#[derive(Debug, Clone)]
pub struct FrameExtractor {
    ffmpeg: PathBuf,
    fps: u32,
}

impl FrameExtractor {
    pub fn new(ffmpeg: impl Into<PathBuf>, fps: u32) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            fps: fps.max(1),
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Arguments passed to ffmpeg for one extraction.
    pub fn arguments(&self, video: &Path, out_dir: &Path) -> Vec<OsString> {
        vec![
            OsString::from("-i"),
            video.as_os_str().to_owned(),
            OsString::from("-vf"),
            OsString::from(format!("fps={}", self.fps)),
            out_dir.join("%05d.jpg").into_os_string(),
        ]
    }

    pub fn extract(&self, video: &Path) -> Result<ExtractedFrames, ExtractError> {
        let dir = tempfile::Builder::new().prefix("colorbar-").tempdir()?;

        tracing::debug!(
            video = %video.display(),
            fps = self.fps,
            dir = %dir.path().display(),
            "Running ffmpeg"
        );

        let output = Command::new(&self.ffmpeg)
            .args(self.arguments(video, dir.path()))
            .output()
            .map_err(|source| ExtractError::Spawn {
                program: self.ffmpeg.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Failed {
                video: video.to_path_buf(),
                status: output.status.to_string(),
                stderr: last_line(&stderr).to_string(),
            });
        }

        let frames = list_frames(dir.path())?;
        if frames.is_empty() {
            return Err(ExtractError::NoFrames(video.to_path_buf()));
        }

        tracing::info!(video = %video.display(), frames = frames.len(), "Extracted frames");
        Ok(ExtractedFrames { dir, frames })
    }
}

/// ffmpeg prints its banner first; the cause of a failure is at the end.
fn last_line(stderr: &str) -> &str {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .trim()
}
