//! CLI module for vodslice
//!
//! This module handles command-line argument parsing.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::utils::logging::{LogFormat, LogLevel};
use crate::utils::path::has_extension;

/// Extension a positional argument needs to be taken as the job file
pub const CONFIG_EXTENSION: &str = "ini";

/// vodslice - cut a segment out of a stream with ffmpeg
///
/// All extraction parameters come from the INI job file:
/// `url2` (required), `dir2`, `fnm2` (may contain `{TS2}`), `pos2`, `len2`.
#[derive(Parser, Debug)]
#[command(name = "vodslice")]
#[command(about = "Cut a segment out of an audio/video stream with ffmpeg, driven by an INI file")]
#[command(version)]
pub struct Cli {
    /// Input INI file
    #[arg(short = 'i', long = "iini", value_name = "FILE")]
    pub iini: Option<PathBuf>,

    /// ffmpeg executable to use instead of path.cfg / PATH discovery
    #[arg(long, env = "VODSLICE_FFMPEG", value_name = "PATH")]
    pub ffmpeg: Option<String>,

    /// Run without waiting for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Resolve and preview the command, but never run it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the preview as JSON
    #[arg(long)]
    pub json: bool,

    /// Logging level (overrides VODSLICE_LOG)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Other arguments; the first ending in `.ini` is used when `--iini` is absent
    #[arg(value_name = "ARGS")]
    pub args: Vec<PathBuf>,
}

impl Cli {
    /// Config path from `--iini`, else the first positional `.ini` argument
    pub fn config_path(&self) -> Option<PathBuf> {
        self.iini
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| {
                self.args
                    .iter()
                    .find(|arg| has_extension(Path::new(arg), CONFIG_EXTENSION))
                    .cloned()
            })
    }
}
