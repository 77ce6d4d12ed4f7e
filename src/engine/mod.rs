//! Transcoder command construction and output relay

pub mod command;
pub mod presets;
pub mod progress;

pub use command::FfmpegCommand;
pub use progress::{CollectingSink, ConsoleSink, LineRelay, LineSink};
