use std::path::{Path, PathBuf};

use color_reduce::{Method, ReduceError};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "COLORBAR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Method(#[from] ReduceError),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Settings file loaded from YAML
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Reduction method name
    #[serde(default)]
    pub method: Option<String>,

    /// Frames sampled per second of video
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Worker threads for reduction (defaults to available parallelism)
    #[serde(default)]
    pub workers: Option<usize>,

    /// k-means seed
    #[serde(default)]
    pub seed: Option<u64>,

    /// Side length frames are resized to before reduction
    #[serde(default = "default_frame_size")]
    pub frame_size: u32,

    /// Decoder binary used for frame extraction
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: PathBuf,
}

fn default_fps() -> u32 {
    10
}

fn default_frame_size() -> u32 {
    25
}

fn default_ffmpeg() -> PathBuf {
    PathBuf::from("ffmpeg")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            method: None,
            fps: default_fps(),
            workers: None,
            seed: None,
            frame_size: default_frame_size(),
            ffmpeg: default_ffmpeg(),
        }
    }
}

/// Values given on the command line. `None` falls back to the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub method: Option<Method>,
    pub fps: Option<u32>,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub method: Method,
    pub fps: u32,
    pub workers: usize,
    pub seed: Option<u64>,
    pub frame_size: u32,
    pub ffmpeg: PathBuf,
}

impl AppConfig {
    /// Load the config file named explicitly or through `COLORBAR_CONFIG`.
    ///
    /// No file at all means built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse one YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            method = config.method.as_deref().unwrap_or("default"),
            fps = config.fps,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Merge command-line overrides on top of this file and validate.
    pub fn resolve(&self, overrides: &Overrides) -> Result<RunSettings, ConfigError> {
        let method = match (overrides.method, &self.method) {
            (Some(method), _) => method,
            (None, Some(name)) => name.parse()?,
            (None, None) => Method::default(),
        };

        let fps = overrides.fps.unwrap_or(self.fps);
        if fps == 0 {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.frame_size == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_size",
                reason: "must be at least 1".to_string(),
            });
        }

        let workers = overrides
            .workers
            .or(self.workers)
            .unwrap_or_else(default_workers)
            .max(1);

        Ok(RunSettings {
            method,
            fps,
            workers,
            seed: overrides.seed.or(self.seed),
            frame_size: self.frame_size,
            ffmpeg: self.ffmpeg.clone(),
        })
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
