//! Decodes still frames into the working resolution used for reduction.

use std::path::{Path, PathBuf};

use color_reduce::{FramePool, ReduceError};
use image::imageops::FilterType;
use image::RgbImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No frames found in {}", .0.display())]
    NoFrames(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    WorkerPool(#[from] ReduceError),
}

/// Loads frames as RGB8 and shrinks them to `size × size`.
///
/// The reduction strategies only need a coarse picture of each frame; the
/// shrink keeps histogram and k-means cost flat regardless of video
/// resolution.
///
/// Decoding runs on the same number of worker threads as reduction; one
/// worker decodes on the calling thread, in frame order.
#[derive(Debug, Clone, Copy)]
pub struct FrameLoader {
    size: u32,
    workers: usize,
}

impl FrameLoader {
    pub fn new(size: u32) -> Self {
        Self {
            size: size.max(1),
            workers: 1,
        }
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn worker_count(&self) -> usize {
        self.workers
    }

    pub fn load(&self, path: &Path) -> Result<RgbImage, FrameError> {
        let decoded = image::open(path).map_err(|source| FrameError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.shrink(decoded.into_rgb8()))
    }

    /// Load every frame on the worker pool. Output order matches `paths`.
    pub fn load_all(&self, paths: &[PathBuf]) -> Result<Vec<RgbImage>, FrameError> {
        let pool = FramePool::new(self.workers)?;
        pool.map_ordered(paths, |_, path| self.load(path))
    }

    fn shrink(&self, frame: RgbImage) -> RgbImage {
        if frame.dimensions() == (self.size, self.size) {
            return frame;
        }
        image::imageops::resize(&frame, self.size, self.size, FilterType::Triangle)
    }
}
