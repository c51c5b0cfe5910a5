//! Public API for the color-reduce crate.
//!
//! This module provides the high-level API: [`ColorReducer`] builder and
//! [`ReduceError`] unified error type.

mod builder;
mod error;

pub use builder::ColorReducer;
pub use error::ReduceError;
