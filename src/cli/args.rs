//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::adapters::toml_config::{CliOverrides, LogFormat, LogLevel};

/// Options shared by every program
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file (TOML)
    #[arg(long, env = "MEDIAKIT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log output format (pretty, compact, json)
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl CommonArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

/// Download an m3u8 stream and convert it to mp4
#[derive(Parser, Debug)]
#[command(name = "m3u8-download", version, about)]
pub struct DownloadArgs {
    /// m3u8 playlist URL
    pub url: String,

    /// Output file name (.mp4 is appended if missing)
    pub output: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Cut a clip using offsets measured from the end of the video
#[derive(Parser, Debug)]
#[command(name = "clip-from-end", version, about)]
pub struct TrimArgs {
    /// Video file path
    pub video: PathBuf,

    /// Clip start, as HH:MM:SS before the end of the video
    pub start: String,

    /// Clip end, as HH:MM:SS before the end of the video
    pub end: String,

    /// Output file name, written to the video directory
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Embed a subtitle track into a video
#[derive(Parser, Debug)]
#[command(name = "embed-subtitle", version, about)]
pub struct EmbedArgs {
    /// Video file path
    pub video: PathBuf,

    /// Subtitle file path
    pub subtitle: PathBuf,

    /// Output file path (default: <name>_with_subtitle beside the video)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}
