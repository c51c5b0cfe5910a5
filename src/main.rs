use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use color_reduce::Method;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_colorbar::models::{AppConfig, Overrides};
use movie_colorbar::services::{output_name, BarPipeline};

#[derive(Parser)]
#[command(name = "colorbar")]
#[command(about = "Turn a video into a color bar, one column per sampled frame")]
struct Cli {
    /// Video file, or a directory of videos
    input: PathBuf,

    /// Output PNG (single video) or output directory (directory of videos)
    output: Option<PathBuf>,

    /// Reduction method: rgb, hsv, hue, kmeans, common, xyz, lab, rgb-squared, resize, quantized
    #[arg(short, long)]
    method: Option<Method>,

    /// Frames sampled per second of video
    #[arg(long)]
    fps: Option<u32>,

    /// Worker threads for reduction (1 = sequential)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Seed for the kmeans method
    #[arg(long)]
    seed: Option<u64>,

    /// YAML settings file (falls back to $COLORBAR_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat INPUT as a directory of already-extracted frames
    #[arg(long)]
    frames: bool,

    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.as_str();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("movie_colorbar={level},colorbar={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;
    let settings = config.resolve(&Overrides {
        method: cli.method,
        fps: cli.fps,
        workers: cli.workers,
        seed: cli.seed,
    })?;
    tracing::debug!(?settings, "Resolved settings");

    let pipeline = BarPipeline::new(settings);

    if cli.frames {
        run_frames(&pipeline, &cli.input, cli.output)
    } else if cli.input.is_dir() {
        run_directory(&pipeline, &cli.input, cli.output)
    } else {
        run_video(&pipeline, &cli.input, cli.output)
    }
}

fn run_video(pipeline: &BarPipeline, video: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let output = output.unwrap_or_else(|| output_name(video, pipeline.settings().method));
    let result = pipeline
        .process_video(video, &output)
        .with_context(|| format!("Failed to build bar for {}", video.display()))?;

    println!("{}", result.output.display());
    Ok(())
}

fn run_frames(pipeline: &BarPipeline, dir: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let output = output.unwrap_or_else(|| output_name(dir, pipeline.settings().method));
    let result = pipeline
        .process_frames_dir(dir, &output)
        .with_context(|| format!("Failed to build bar from frames in {}", dir.display()))?;

    println!("{}", result.output.display());
    Ok(())
}

fn run_directory(
    pipeline: &BarPipeline,
    dir: &Path,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let out_dir = output.unwrap_or_else(|| PathBuf::from("bars"));
    let report = pipeline.process_directory(dir, &out_dir)?;

    for result in &report.written {
        println!("{}", result.output.display());
    }

    if !report.failed.is_empty() {
        anyhow::bail!(
            "{} of {} videos failed",
            report.failed.len(),
            report.total()
        );
    }

    tracing::info!(bars = report.written.len(), "All done");
    Ok(())
}
