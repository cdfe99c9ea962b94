//! Command-line flags for the visualizer binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::logging::LogConfig;
use crate::structures::StructureKind;

#[derive(Debug, Parser)]
#[command(
    name = "dsviz",
    version,
    about = "Interactive terminal visualizer for elementary data structures",
    long_about = "Add and remove values in an array, stack, queue, linked list or \
                  binary tree and watch the structure's shape change.\n\n\
                  State lives only for the session; nothing is saved."
)]
pub struct Cli {
    /// Structure selected at startup.
    #[arg(long, value_enum, default_value_t = StructureKind::Array)]
    pub kind: StructureKind,

    /// Write logs to this file. Without it nothing is logged, since the UI owns the terminal.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level for the log file (overridden by RUST_LOG).
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevelArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

impl Cli {
    /// Logging configuration built from the flags
    pub fn log_config(&self) -> LogConfig {
        LogConfig::default()
            .with_level(self.log_level.into())
            .with_log_file(self.log_file.clone())
    }
}
