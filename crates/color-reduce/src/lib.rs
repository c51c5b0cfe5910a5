//! color-reduce: per-frame color reduction and color bar assembly
//!
//! This library reduces each frame of a video to one representative color
//! and lays the resulting color sequence out as a bar image, one column per
//! frame.
//!
//! # Quick Start
//!
//! The [`ColorReducer`] builder is the primary entry point:
//!
//! ```
//! use color_reduce::{ColorReducer, Method};
//! use image::{Rgb, RgbImage};
//!
//! let frames: Vec<RgbImage> = (0..10u8)
//!     .map(|i| RgbImage::from_pixel(25, 25, Rgb([i * 25, 100, 255 - i * 25])))
//!     .collect();
//!
//! let reducer = ColorReducer::new("lab".parse::<Method>().unwrap()).workers(4);
//! let bar = reducer.build_bar(&frames).unwrap();
//!
//! assert_eq!((bar.width(), bar.height()), (10, 4));
//! let image = bar.to_image();
//! ```
//!
//! # Pipeline
//!
//! ```text
//! frame (RgbImage)
//!     |
//!     v
//! Histogram              (distinct color -> pixel count)
//!     |
//!     v
//! Method strategy        (one of ten, chosen once per run)
//!     |
//!     v
//! [u8; 3] per frame      (collected in frame order)
//!     |
//!     v
//! ColorBar               (width = frames, height = max(1, width / 2.5))
//! ```
//!
//! # Color Spaces
//!
//! - [`Srgb`]: gamma-encoded input/output, channels 0..=255
//! - [`Hsv`]: hue in turns, for the `hsv` and `hue` strategies
//! - [`Xyz`]: CIE XYZ (D65), for the `xyz` strategy
//! - [`Lab`]: CIE L\*a\*b\*, for the `lab` strategy
//!
//! All averages are weighted by pixel count. Averages in [`Hsv`] treat hue
//! as a linear quantity, so frames whose hues straddle red (hue 0/1) average
//! toward cyan.
//!
//! # Concurrency
//!
//! Frames are independent. With more than one worker, [`ColorReducer`]
//! reduces them on a rayon pool and collects results by frame index, so the
//! output order never depends on scheduling. Any failing frame discards the
//! whole batch.

pub mod api;
pub mod bar;
pub mod color;
pub mod histogram;
pub mod pool;
pub mod reduce;


pub use api::{ColorReducer, ReduceError};
pub use bar::{assemble_bar, bar_height, ColorBar};
pub use color::{Hsv, Lab, Srgb, Xyz};
pub use histogram::{Histogram, HistogramEntry};
pub use pool::FramePool;
pub use reduce::Method;
