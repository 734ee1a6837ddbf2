//! Configuration for the mosaic app.
//!
//! Settings are read once at startup from `config.toml` in the platform
//! config directory. Every key is optional; anything missing takes its
//! default. Changes made while the app runs are not written back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use mosaic_core::{
    DEFAULT_ANIMATION_SPEED, DEFAULT_TILE_SIZE, GenerationParams, Palette, clamp_animation_speed,
    clamp_tile_size,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

const APP_NAME: &str = "mosaic";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "mosaic.log";

/// Fastest redraw rate accepted from config (about 120 fps).
const MIN_FRAME_INTERVAL_MS: u64 = 8;
/// Longest resize quiet period accepted from config.
const MAX_RESIZE_DEBOUNCE_MS: u64 = 2_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Startup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial tile size in pixels (10-100).
    pub tile_size: u32,
    /// Initial animation speed multiplier (0.5-2.0).
    pub animation_speed: f64,
    /// Initial palette as hex colors.
    pub palette: Palette,
    /// Quiet period before a terminal resize regenerates the grid.
    pub resize_debounce_ms: u64,
    /// Time between frames while tiles are animating.
    pub frame_interval_ms: u64,
    /// Log filter used when `MOSAIC_LOG` is not set.
    pub log_level: String,
    /// Whether the controls panel is visible at startup.
    pub show_controls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            palette: Palette::default(),
            resize_debounce_ms: 120,
            frame_interval_ms: 33,
            log_level: "info".to_string(),
            show_controls: true,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Location of the config file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Location of the log file, if the platform has a data directory.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

impl Config {
    /// Load from the platform config path, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config.normalized())
    }

    /// Clamp values into the ranges the app supports.
    pub fn normalized(mut self) -> Self {
        let tile_size = clamp_tile_size(self.tile_size);
        if tile_size != self.tile_size {
            warn!(requested = self.tile_size, used = tile_size, "tile_size out of range");
            self.tile_size = tile_size;
        }

        let speed = clamp_animation_speed(self.animation_speed);
        if speed != self.animation_speed {
            warn!(
                requested = self.animation_speed,
                used = speed,
                "animation_speed adjusted to control range"
            );
            self.animation_speed = speed;
        }

        self.frame_interval_ms = self.frame_interval_ms.max(MIN_FRAME_INTERVAL_MS);
        self.resize_debounce_ms = self.resize_debounce_ms.min(MAX_RESIZE_DEBOUNCE_MS);
        self
    }

    /// Parameters for the first generation.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            tile_size: self.tile_size,
            animation_speed: self.animation_speed,
            palette: self.palette.clone(),
            generation_key: 0,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn resize_quiet(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}
