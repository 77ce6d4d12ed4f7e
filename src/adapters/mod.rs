// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod probe_ffprobe;
pub mod process_probe;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_ffmpeg::FFmpegAdapter;
pub use probe_ffprobe::FFprobeAdapter;
pub use process_probe::ProcessProbeAdapter;
pub use toml_config::{CliOverrides, Config, LogFormat, LogLevel, ToolPaths};
pub use tracing_log::init_logging;
