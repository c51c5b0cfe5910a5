//! ColorReducer builder -- the primary entry point for the crate.
//!
//! [`ColorReducer`] wraps method selection, k-means seeding and worker
//! configuration behind a fluent builder, and turns a batch of frames into a
//! [`ColorBar`].

use image::RgbImage;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::ReduceError;
use crate::bar::ColorBar;
use crate::pool::FramePool;
use crate::reduce::Method;

/// Reduces frames to colors and colors to a bar.
///
/// # Design
///
/// - The method is fixed at construction, so an invalid selector fails
///   before any frame is touched.
/// - Configuration methods consume and return `self`.
/// - Reduction methods take `&self`; one reducer serves any number of
///   batches.
///
/// # Example
///
/// ```
/// use color_reduce::{ColorReducer, Method};
/// use image::{Rgb, RgbImage};
///
/// let frames = vec![
///     RgbImage::from_pixel(25, 25, Rgb([200, 0, 0])),
///     RgbImage::from_pixel(25, 25, Rgb([0, 0, 200])),
/// ];
///
/// let reducer = ColorReducer::new(Method::Rgb).workers(2);
/// let bar = reducer.build_bar(&frames).unwrap();
///
/// assert_eq!(bar.colors(), &[[200, 0, 0], [0, 0, 200]]);
/// assert_eq!((bar.width(), bar.height()), (2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct ColorReducer {
    method: Method,
    workers: usize,
    seed: Option<u64>,
}

impl ColorReducer {
    /// Create a sequential, unseeded reducer for `method`.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            workers: 1,
            seed: None,
        }
    }

    /// Create a reducer from a selector name.
    ///
    /// # Errors
    ///
    /// [`ReduceError::InvalidMethod`] for an unknown name.
    pub fn from_name(name: &str) -> Result<Self, ReduceError> {
        Ok(Self::new(name.parse()?))
    }

    /// Set the number of worker threads. 1 (the default) runs on the
    /// calling thread.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Seed the k-means random source.
    ///
    /// Frame `i` draws its initial centers from `seed + i`, so seeded runs
    /// agree whatever the worker count.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured reduction method.
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The configured worker count.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    fn frame_rng(&self, index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            // Deterministic strategies never draw from it.
            None if self.method.is_deterministic() => StdRng::seed_from_u64(0),
            None => StdRng::from_entropy(),
        }
    }

    /// Reduce one frame; `index` is its position in the sequence.
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptyHistogram`] if the frame has no pixels.
    pub fn reduce_frame(&self, index: usize, frame: &RgbImage) -> Result<[u8; 3], ReduceError> {
        self.method.reduce(frame, &mut self.frame_rng(index))
    }

    /// Reduce every frame, in parallel when more than one worker is set.
    ///
    /// The output has one color per frame in frame order.
    ///
    /// # Errors
    ///
    /// [`ReduceError::Frame`] wrapping the failure of any frame; no colors
    /// are returned in that case. [`ReduceError::WorkerPool`] if the worker
    /// threads cannot be started.
    pub fn reduce_frames(&self, frames: &[RgbImage]) -> Result<Vec<[u8; 3]>, ReduceError> {
        let pool = FramePool::new(self.workers)?;
        pool.map_ordered(frames, |index, frame| {
            self.reduce_frame(index, frame)
                .map_err(|e| e.in_frame(index))
        })
    }

    /// Reduce every frame and assemble the results into a bar.
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptySequence`] for an empty batch, otherwise as
    /// [`reduce_frames`](Self::reduce_frames).
    pub fn build_bar(&self, frames: &[RgbImage]) -> Result<ColorBar, ReduceError> {
        if frames.is_empty() {
            return Err(ReduceError::EmptySequence);
        }
        ColorBar::new(self.reduce_frames(frames)?)
    }
}
