//! FFprobe adapter for media duration queries
//!
//! Runs `ffprobe -v error -show_entries format=duration
//! -of default=noprint_wrappers=1:nokey=1 <path>` and reads the bare
//! number of seconds it prints.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::model::Timestamp;
use crate::error::{MediaKitError, MediaKitResult};
use crate::ports::*;

/// Arguments placed before the media path
pub const DURATION_ARGS: &[&str] = &[
    "-v",
    "error",
    "-show_entries",
    "format=duration",
    "-of",
    "default=noprint_wrappers=1:nokey=1",
];

/// FFprobe-based duration adapter
#[derive(Debug, Clone)]
pub struct FFprobeAdapter {
    program: PathBuf,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter for the given executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Interpret ffprobe's stdout as a duration in seconds
    pub fn parse_duration_output(stdout: &str) -> MediaKitResult<Timestamp> {
        let raw = stdout.trim();
        let seconds: f64 = raw.parse().map_err(|_| MediaKitError::ProbeFailure {
            message: format!("unexpected duration value {:?}", raw),
        })?;

        Timestamp::from_secs_f64(seconds).ok_or_else(|| MediaKitError::ProbeFailure {
            message: format!("duration out of range: {}", raw),
        })
    }
}

#[async_trait]
impl DurationPort for FFprobeAdapter {
    async fn total_duration(&self, media: &Path) -> MediaKitResult<Timestamp> {
        if !tokio::fs::try_exists(media).await.unwrap_or(false) {
            return Err(MediaKitError::FileNotFound {
                path: media.to_path_buf(),
            });
        }

        debug!("Querying duration of {}", media.display());
        let output = Command::new(&self.program)
            .args(DURATION_ARGS)
            .arg(media)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| MediaKitError::ProbeFailure {
                message: format!("could not run {}: {}", self.program.display(), e),
            })?;

        if !output.status.success() {
            return Err(MediaKitError::ProbeFailure {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let duration = Self::parse_duration_output(&String::from_utf8_lossy(&output.stdout))?;
        info!("Total duration of {}: {}", media.display(), duration);
        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_seconds() {
        let duration = FFprobeAdapter::parse_duration_output("120.0\n").unwrap();
        assert_eq!(duration.to_string(), "00:02:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        let duration = FFprobeAdapter::parse_duration_output("3725.987000").unwrap();
        assert_eq!(duration.to_string(), "01:02:05");
    }

    #[test]
    fn rejects_unparseable_output() {
        for bad in ["N/A", "", "abc", "-3.0", "inf"] {
            assert!(
                matches!(
                    FFprobeAdapter::parse_duration_output(bad),
                    Err(MediaKitError::ProbeFailure { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn missing_file_fails_before_spawning() {
        let adapter = FFprobeAdapter::new("/definitely/not/here/ffprobe");
        let err = adapter
            .total_duration(Path::new("/definitely/not/here/video.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, MediaKitError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn missing_ffprobe_is_a_probe_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let video = dir.path().join("video.mp4");
        std::fs::write(&video, b"not really a video").unwrap();

        let adapter = FFprobeAdapter::new("/definitely/not/here/ffprobe");
        let err = adapter.total_duration(&video).await.unwrap_err();
        assert!(matches!(err, MediaKitError::ProbeFailure { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_a_probe_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let video = dir.path().join("video.mp4");
        std::fs::write(&video, b"not really a video").unwrap();

        let err = FFprobeAdapter::new("false").total_duration(&video).await.unwrap_err();
        assert!(matches!(err, MediaKitError::ProbeFailure { .. }));
    }
}
