//! Error handling module for MediaKit

use std::path::PathBuf;

use thiserror::Error;

/// Exit status when the transcoder binary cannot be invoked
pub const EXIT_MISSING_TOOL: u8 = 1;

/// Exit status for every other failed operation
pub const EXIT_FAILURE: u8 = 3;

/// Reasons a clip window cannot be derived from end-anchored offsets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// An offset reaches further back than the start of the video
    #[error("offset {offset} exceeds the total duration {total}")]
    OutOfRange { offset: String, total: String },

    /// The resulting clip would be empty or reversed
    #[error("start ({start}) must precede end ({end})")]
    StartNotBeforeEnd { start: String, end: String },
}

/// Main error type for MediaKit operations
#[derive(Error, Debug)]
pub enum MediaKitError {
    /// A required external tool could not be invoked
    #[error("{tool} not found; make sure it is installed and on PATH")]
    MissingTool { tool: String },

    /// Input file not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Time string did not match HH:MM:SS
    #[error("Invalid time format: {time}. Expected HH:MM:SS")]
    InvalidTimeFormat { time: String },

    /// Clip window validation error
    #[error("Invalid time window: {0}")]
    InvalidTimeWindow(#[from] WindowError),

    /// ffprobe failed or returned something unusable
    #[error("Failed to probe media duration: {message}")]
    ProbeFailure { message: String },

    /// ffmpeg ran and reported failure
    #[error("{operation} failed: {reason}")]
    TranscodeFailure { operation: String, reason: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else that went wrong while running a tool
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

impl MediaKitError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            MediaKitError::MissingTool { .. } => EXIT_MISSING_TOOL,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias for MediaKit operations
pub type MediaKitResult<T> = std::result::Result<T, MediaKitError>;
