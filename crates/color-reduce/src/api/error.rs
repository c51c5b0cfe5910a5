//! Unified error type for the color-reduce public API.

use std::fmt;

/// Errors raised while reducing frames or assembling a color bar.
///
/// All variants are input-validation failures: retrying with the same input
/// fails the same way.
///
/// # Example
///
/// ```
/// use color_reduce::{Method, ReduceError};
///
/// let err = "median".parse::<Method>().unwrap_err();
/// assert_eq!(err, ReduceError::InvalidMethod("median".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ReduceError {
    /// The reduction method name is not one of the ten known selectors.
    InvalidMethod(String),
    /// A frame contained no pixels.
    EmptyHistogram,
    /// Bar assembly was asked to render zero colors.
    EmptySequence,
    /// Reducing one frame of a batch failed.
    Frame {
        /// Position of the frame in the input sequence
        index: usize,
        /// The underlying failure
        source: Box<ReduceError>,
    },
    /// The worker thread pool could not be created.
    WorkerPool(String),
}

impl ReduceError {
    /// Attach the position of the frame that failed.
    pub(crate) fn in_frame(self, index: usize) -> Self {
        ReduceError::Frame {
            index,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::InvalidMethod(name) => write!(
                f,
                "invalid method '{}' (expected one of: {})",
                name,
                crate::reduce::Method::NAMES.join(", ")
            ),
            ReduceError::EmptyHistogram => write!(f, "frame has no pixels"),
            ReduceError::EmptySequence => write!(f, "no colors to assemble into a bar"),
            ReduceError::Frame { index, source } => write!(f, "frame {}: {}", index, source),
            ReduceError::WorkerPool(msg) => write!(f, "failed to start worker pool: {}", msg),
        }
    }
}

impl std::error::Error for ReduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReduceError::Frame { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
