use std::path::{Path, PathBuf};

use color_reduce::{ColorBar, ColorReducer, Method};

use crate::error::ColorbarError;
use crate::models::RunSettings;
use crate::rendering::write_bar;
use crate::services::frame_extractor::{is_video, list_frames, FrameExtractor};
use crate::services::frame_loader::{FrameError, FrameLoader};

/// A bar that was written to disk
#[derive(Debug)]
pub struct BarResult {
    /// Where the PNG went
    pub output: PathBuf,
    /// The bar itself, one color per sampled frame
    pub bar: ColorBar,
}

/// Outcome of processing a directory of videos
#[derive(Debug, Default)]
pub struct DirectoryReport {
    pub written: Vec<BarResult>,
    pub failed: Vec<(PathBuf, ColorbarError)>,
}

impl DirectoryReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// Default output file name for a video: `<stem>_<method>.png`.
pub fn output_name(video: &Path, method: Method) -> PathBuf {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_string());
    PathBuf::from(format!("{stem}_{}.png", method.name()))
}

/// Pipeline that orchestrates extract → load → reduce → PNG
pub struct BarPipeline {
    settings: RunSettings,
    extractor: FrameExtractor,
    loader: FrameLoader,
    reducer: ColorReducer,
}

impl BarPipeline {
    pub fn new(settings: RunSettings) -> Self {
        let extractor = FrameExtractor::new(&settings.ffmpeg, settings.fps);
        let loader = FrameLoader::new(settings.frame_size).workers(settings.workers);
        let mut reducer = ColorReducer::new(settings.method).workers(settings.workers);
        if let Some(seed) = settings.seed {
            reducer = reducer.seed(seed);
        }

        Self {
            settings,
            extractor,
            loader,
            reducer,
        }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Turn one video into a bar at `output`.
    pub fn process_video(&self, video: &Path, output: &Path) -> Result<BarResult, ColorbarError> {
        if !is_video(video) {
            return Err(ColorbarError::NotAVideo(video.to_path_buf()));
        }

        tracing::info!(
            video = %video.display(),
            method = %self.settings.method,
            "Processing video"
        );

        // Frames live until the bar is built, then the temp dir is removed.
        let extracted = self.extractor.extract(video)?;
        tracing::debug!(frames = extracted.len(), "Loading extracted frames");
        let bar = self.build_from_paths(extracted.frames())?;
        drop(extracted);

        write_bar(&bar, output)?;
        tracing::info!(output = %output.display(), "Bar written");

        Ok(BarResult {
            output: output.to_path_buf(),
            bar,
        })
    }

    /// Build a bar from a directory of already-extracted stills.
    pub fn build_from_frames(&self, dir: &Path) -> Result<ColorBar, ColorbarError> {
        let paths = list_frames(dir).map_err(FrameError::from)?;
        if paths.is_empty() {
            return Err(FrameError::NoFrames(dir.to_path_buf()).into());
        }
        self.build_from_paths(&paths)
    }

    /// Like [`build_from_frames`](Self::build_from_frames), writing the PNG to `output`.
    pub fn process_frames_dir(&self, dir: &Path, output: &Path) -> Result<BarResult, ColorbarError> {
        let bar = self.build_from_frames(dir)?;
        write_bar(&bar, output)?;
        tracing::info!(output = %output.display(), "Bar written");

        Ok(BarResult {
            output: output.to_path_buf(),
            bar,
        })
    }

    /// Process every video in `dir`, writing bars into `out_dir`.
    ///
    /// A failing video is logged and skipped; the report lists it.
    pub fn process_directory(
        &self,
        dir: &Path,
        out_dir: &Path,
    ) -> Result<DirectoryReport, ColorbarError> {
        let mut videos = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_video(&path) {
                videos.push(path);
            }
        }
        videos.sort();

        if videos.is_empty() {
            tracing::warn!(dir = %dir.display(), "No videos found");
            return Ok(DirectoryReport::default());
        }

        std::fs::create_dir_all(out_dir)?;
        let total = videos.len();
        tracing::info!(videos = total, out_dir = %out_dir.display(), "Processing directory");

        let mut report = DirectoryReport::default();
        for (position, video) in videos.into_iter().enumerate() {
            let output = out_dir.join(output_name(&video, self.settings.method));
            tracing::info!(
                video = %video.display(),
                position = position + 1,
                total,
                "Next video"
            );
            match self.process_video(&video, &output) {
                Ok(result) => report.written.push(result),
                Err(e) => {
                    tracing::error!(video = %video.display(), error = %e, "Video failed");
                    report.failed.push((video, e));
                }
            }
        }

        Ok(report)
    }

    fn build_from_paths(&self, paths: &[PathBuf]) -> Result<ColorBar, ColorbarError> {
        let frames = self.loader.load_all(paths)?;
        tracing::debug!(
            frames = frames.len(),
            size = self.loader.size(),
            workers = self.loader.worker_count(),
            "Frames loaded"
        );

        let colors = self.reducer.reduce_frames(&frames)?;
        let bar = ColorBar::new(colors)?;

        tracing::debug!(colors = ?bar.to_hex(), "Color sequence");
        tracing::info!(
            method = %self.settings.method,
            frames = frames.len(),
            width = bar.width(),
            height = bar.height(),
            "Bar built"
        );
        Ok(bar)
    }
}
