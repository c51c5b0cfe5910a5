//! Color bar assembly.
//!
//! [`ColorBar`] turns the ordered per-frame color sequence into the final
//! image: one column per frame, every row identical.

mod color_bar;

pub use color_bar::{assemble_bar, bar_height, ColorBar};
