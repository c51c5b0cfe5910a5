pub mod bar_png;

pub use bar_png::{encode_bar, write_bar};
