//! Log setup.
//!
//! The terminal is taken over by the canvas, so logs go to a file in the
//! platform data directory instead of stdout.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use mosaic_config::{Config, log_path};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
const LOG_ENV: &str = "MOSAIC_LOG";

/// Install the global subscriber, returning the log file path on success.
///
/// Logging is left disabled when the log file cannot be created.
pub fn init(config: &Config) -> Option<PathBuf> {
    let path = log_path()?;
    let file = open_log_file(&path).ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .compact()
        .try_init()
        .ok()?;

    Some(path)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
