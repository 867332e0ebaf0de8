//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "hypermarch")]
#[command(version, about = "Render a 4D scene by sphere tracing")]
pub struct Args {
    /// Directory holding default.toml and user.toml
    #[arg(short, long, default_value = "config")]
    pub config: PathBuf,

    /// RON scene file (overrides scene.path from the config)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// PNG file to write (overrides output.path from the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Logging level (overrides debug.log_level from the config)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Trace on a single thread
    #[arg(long)]
    pub serial: bool,
}
