pub mod bar_pipeline;
pub mod frame_extractor;
pub mod frame_loader;

pub use bar_pipeline::{output_name, BarPipeline, BarResult, DirectoryReport};
pub use frame_extractor::{is_video, list_frames, ExtractError, ExtractedFrames, FrameExtractor};
pub use frame_loader::{FrameError, FrameLoader};
