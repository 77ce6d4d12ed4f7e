//! MediaKit CLI
//!
//! Thin command-line wrappers around `ffmpeg`:
//!
//! - `m3u8-download` downloads an HLS stream and converts it to mp4
//! - `clip-from-end` cuts a clip positioned relative to the end of a video
//! - `embed-subtitle` muxes a subtitle track into a video
//!
//! Each program checks that ffmpeg can be invoked, probes for an NVIDIA GPU,
//! assembles a fixed ffmpeg command and relays ffmpeg's progress output to
//! the console.
//!
//! # Usage
//!
//! ```bash
//! m3u8-download "https://example.com/live/index.m3u8" show
//! clip-from-end match.mp4 00:10:00 00:05:00 -o highlight
//! embed-subtitle ep01.mp4 ep01.srt
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{ClipWindow, EncoderMode, JobInputs, Timestamp, TranscodeJob};
pub use error::{MediaKitError, MediaKitResult};
