//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The TUI draws over the whole terminal, so log lines never go to stdout or
//! stderr. When a log file is configured, a plain-text fmt layer appends to
//! it; otherwise no subscriber is installed and the `tracing` macros are
//! no-ops.
//!
//! # Log Levels
//!
//! - `info`: session start and stop
//! - `debug`: every state transition and every rejected input
//!
//! `RUST_LOG` overrides the configured level when set.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Failures while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] io::Error),

    #[error("cannot install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Maximum level written.
    pub level: Level,
    /// Log file path. `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Set log level directly.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Install the global subscriber for `config`.
///
/// Returns `Ok(false)` when no log file is configured and nothing was installed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already set.
pub fn init_logging(config: &LogConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };
    let file = open_log_file(path)?;
    init_logging_with_writer(config, Mutex::new(file))?;
    Ok(true)
}

/// Install the global subscriber writing to `writer` (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    // Dependencies stay at warn
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dsviz={}", level_str)))
}
