//! Movie Colorbar
//!
//! Turns a video into a color bar image: one column per sampled frame,
//! colored by that frame's dominant color.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
