// Application layer - Use case interactors

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::domain::model::TranscodeJob;
use crate::engine::{FfmpegCommand, LineSink};
use crate::error::{MediaKitError, MediaKitResult};
use crate::ports::TranscodePort;

pub mod container;
pub mod download_interactor;
pub mod embed_interactor;
pub mod preflight;
pub mod trim_interactor;

// Re-export interactors
pub use container::AppContainer;
pub use download_interactor::{DownloadInteractor, DownloadRequest};
pub use embed_interactor::{EmbedInteractor, EmbedRequest};
pub use preflight::Preflight;
pub use trim_interactor::{TrimInteractor, TrimRequest};

/// Assemble, run and judge one transcoder job
pub(crate) async fn run_job(
    transcoder: &dyn TranscodePort,
    ffmpeg: &Path,
    job: TranscodeJob,
    sink: &mut dyn LineSink,
) -> MediaKitResult<PathBuf> {
    let command = FfmpegCommand::for_job(ffmpeg, &job);
    sink.status(&format!("Encoding with {}", job.mode.label()));
    info!("Running {}", command);

    let report = transcoder.run(&command, sink).await?;
    if report.succeeded() {
        sink.status(&format!("Success! Saved to {}", job.output.display()));
        return Ok(job.output);
    }

    let reason = match report.exit_code {
        Some(code) => format!("ffmpeg exited with status {}", code),
        None => "ffmpeg was terminated by a signal".to_string(),
    };
    error!("{} failed: {}", job.operation(), reason);
    Err(MediaKitError::TranscodeFailure {
        operation: job.operation().to_string(),
        reason,
    })
}

/// Fail with [`MediaKitError::FileNotFound`] unless `path` exists
pub(crate) async fn require_file(path: &Path) -> MediaKitResult<()> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        Ok(())
    } else {
        Err(MediaKitError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
