//! FFmpeg execution adapter
//!
//! Spawns the assembled command, relays its stderr line by line and waits
//! for it to exit.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::BufReader;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::domain::model::*;
use crate::engine::{FfmpegCommand, LineRelay, LineSink};
use crate::error::{MediaKitError, MediaKitResult};
use crate::ports::*;

/// FFmpeg-based execution adapter
#[derive(Debug, Default, Clone)]
pub struct FFmpegAdapter;

impl FFmpegAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TranscodePort for FFmpegAdapter {
    async fn run(
        &self,
        command: &FfmpegCommand,
        sink: &mut dyn LineSink,
    ) -> MediaKitResult<ExecutionReport> {
        debug!("Spawning: {}", command);

        let mut child = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| MediaKitError::Unexpected {
                message: format!("failed to start {}: {}", command.program().display(), e),
            })?;
        debug!("Transcoder state: {:?}", ExecutionState::Running);

        let stderr = child.stderr.take().ok_or_else(|| MediaKitError::Unexpected {
            message: "transcoder stderr was not captured".to_string(),
        })?;

        let lines_relayed = match LineRelay::new(BufReader::new(stderr)).relay(sink).await {
            Ok(count) => count,
            Err(e) => {
                warn!("Lost transcoder output: {}", e);
                let _ = child.start_kill();
                return Err(MediaKitError::Unexpected {
                    message: format!("failed to read transcoder output: {}", e),
                });
            }
        };

        let status = child.wait().await?;
        let state = if status.success() {
            ExecutionState::Succeeded
        } else {
            ExecutionState::Failed
        };
        info!(?state, exit_code = ?status.code(), lines_relayed, "Transcoder finished");

        Ok(ExecutionReport {
            state,
            exit_code: status.code(),
            lines_relayed,
        })
    }
}
