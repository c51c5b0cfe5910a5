use std::path::PathBuf;

use thiserror::Error;

use crate::models::ConfigError;
use crate::services::frame_extractor::ExtractError;
use crate::services::frame_loader::FrameError;

/// Everything that can stop a bar from being produced.
#[derive(Debug, Error)]
pub enum ColorbarError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Frame extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Frame loading error: {0}")]
    Frame(#[from] FrameError),

    #[error("Color reduction error: {0}")]
    Reduce(#[from] color_reduce::ReduceError),

    #[error("Not a video file: {}", .0.display())]
    NotAVideo(PathBuf),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_reduce::ReduceError;

    #[test]
    fn test_colorbar_error_reduce() {
        let error = ColorbarError::from(ReduceError::EmptySequence);
        assert_eq!(
            error.to_string(),
            "Color reduction error: no colors to assemble into a bar"
        );
    }

    #[test]
    fn test_colorbar_error_not_a_video() {
        let error = ColorbarError::NotAVideo(PathBuf::from("notes.txt"));
        assert_eq!(error.to_string(), "Not a video file: notes.txt");
    }

    #[test]
    fn test_colorbar_error_png_encode() {
        let error = ColorbarError::PngEncode("Buffer too small".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Buffer too small");
    }

    #[test]
    fn test_colorbar_error_extract() {
        let error = ColorbarError::from(ExtractError::NoFrames(PathBuf::from("clip.mp4")));
        assert_eq!(
            error.to_string(),
            "Frame extraction error: ffmpeg produced no frames for clip.mp4"
        );
    }

    #[test]
    fn test_colorbar_error_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error = ColorbarError::from(io_error);
        assert_eq!(error.to_string(), "IO error: File not found");
    }

    #[test]
    fn test_error_debug() {
        let error = ColorbarError::PngEncode("x".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("PngEncode"));
    }
}
