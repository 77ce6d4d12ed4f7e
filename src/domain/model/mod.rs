// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{MediaKitError, MediaKitResult, WindowError};
use crate::utils::time::{seconds_to_time, time_to_seconds};

#[cfg(test)]
mod tests;

/// Whole-second time offset, displayed as `HH:MM:SS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    seconds: u64,
}

impl Timestamp {
    /// Create a timestamp from whole seconds
    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Floor a floating point second count, rejecting negative and non-finite values
    pub fn from_secs_f64(seconds: f64) -> Option<Self> {
        if seconds.is_finite() && seconds >= 0.0 {
            Some(Self::from_secs(seconds.floor() as u64))
        } else {
            None
        }
    }

    /// Parse `HH:MM:SS`
    pub fn parse(time_str: &str) -> MediaKitResult<Self> {
        time_to_seconds(time_str).map(Self::from_secs)
    }

    /// Total whole seconds
    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }

    /// Subtract, returning `None` if `other` is later than `self`
    pub fn checked_sub(&self, other: Timestamp) -> Option<Timestamp> {
        self.seconds.checked_sub(other.seconds).map(Self::from_secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&seconds_to_time(self.seconds))
    }
}

impl FromStr for Timestamp {
    type Err = MediaKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Two offsets measured backward from the end of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndAnchoredRange {
    /// Distance from the end at which the clip starts
    pub start_offset: Timestamp,
    /// Distance from the end at which the clip ends
    pub end_offset: Timestamp,
}

impl EndAnchoredRange {
    /// Parse both offsets from `HH:MM:SS` strings
    pub fn parse(start_offset: &str, end_offset: &str) -> MediaKitResult<Self> {
        Ok(Self {
            start_offset: Timestamp::parse(start_offset)?,
            end_offset: Timestamp::parse(end_offset)?,
        })
    }
}

/// Start-anchored clip window; `start` is always strictly before `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    start: Timestamp,
    end: Timestamp,
}

impl ClipWindow {
    /// Create a window, rejecting empty or reversed ranges
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, WindowError> {
        if start >= end {
            return Err(WindowError::StartNotBeforeEnd {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Length of the clip
    pub fn duration(&self) -> Timestamp {
        Timestamp::from_secs(self.end.as_secs() - self.start.as_secs())
    }
}

impl fmt::Display for ClipWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Which encoder pipeline a job uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderMode {
    /// CUDA decode plus NVENC encode
    Hardware,
    /// libx264 software encode
    Software,
}

impl EncoderMode {
    /// Pick the mode from the GPU probe result
    pub fn from_gpu_available(available: bool) -> Self {
        if available {
            EncoderMode::Hardware
        } else {
            EncoderMode::Software
        }
    }

    /// Short label for console output
    pub fn label(&self) -> &'static str {
        match self {
            EncoderMode::Hardware => "GPU",
            EncoderMode::Software => "CPU",
        }
    }
}

/// Inputs for one transcoder run
#[derive(Debug, Clone, PartialEq)]
pub enum JobInputs {
    /// Remote m3u8 playlist
    Stream { url: String },
    /// Local video cut to a window
    Trim { video: PathBuf, window: ClipWindow },
    /// Local video muxed with a subtitle file
    Subtitle { video: PathBuf, subtitle: PathBuf },
}

/// Everything needed to assemble one ffmpeg invocation
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodeJob {
    pub inputs: JobInputs,
    pub output: PathBuf,
    pub mode: EncoderMode,
}

impl TranscodeJob {
    pub fn new(inputs: JobInputs, output: PathBuf, mode: EncoderMode) -> Self {
        Self {
            inputs,
            output,
            mode,
        }
    }

    /// Human-readable operation name used in failure messages
    pub fn operation(&self) -> &'static str {
        match self.inputs {
            JobInputs::Stream { .. } => "Download and conversion",
            JobInputs::Trim { .. } => "Trimming",
            JobInputs::Subtitle { .. } => "Subtitle embedding",
        }
    }
}

/// Lifecycle of a single transcoder process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    NotStarted,
    Running,
    Succeeded,
    Failed,
}

impl ExecutionState {
    /// True once the process has finished either way
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExecutionState::Succeeded | ExecutionState::Failed)
    }
}

/// Result of a completed transcoder run
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReport {
    pub state: ExecutionState,
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    /// Number of diagnostic lines forwarded to the sink
    pub lines_relayed: usize,
}

impl ExecutionReport {
    pub fn succeeded(&self) -> bool {
        self.state == ExecutionState::Succeeded
    }
}
