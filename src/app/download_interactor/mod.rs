// Download interactor - m3u8 stream to mp4

use std::path::PathBuf;
use std::sync::Arc;

use crate::app::{run_job, Preflight};
use crate::domain::model::*;
use crate::engine::LineSink;
use crate::error::MediaKitResult;
use crate::output::OutputResolver;
use crate::ports::*;

/// Arguments of one download
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// m3u8 playlist URL
    pub url: String,
    /// File name inside the video directory; `.mp4` is appended if missing
    pub output_name: String,
}

/// Interactor for the download use case
pub struct DownloadInteractor {
    preflight: Arc<Preflight>,
    transcoder: Arc<dyn TranscodePort>,
    outputs: OutputResolver,
}

impl DownloadInteractor {
    pub fn new(
        preflight: Arc<Preflight>,
        transcoder: Arc<dyn TranscodePort>,
        outputs: OutputResolver,
    ) -> Self {
        Self {
            preflight,
            transcoder,
            outputs,
        }
    }

    /// Download the stream and convert it; returns the written file
    pub async fn execute(
        &self,
        request: DownloadRequest,
        sink: &mut dyn LineSink,
    ) -> MediaKitResult<PathBuf> {
        self.preflight.require_transcoder().await?;

        let output = self.outputs.download_target(&request.output_name);
        self.outputs.prepare(&output)?;

        let mode = self.preflight.encoder_mode().await;

        sink.status(&format!("Downloading and converting: {}", request.url));
        sink.status(&format!("Saving to: {}", output.display()));

        let job = TranscodeJob::new(JobInputs::Stream { url: request.url }, output, mode);
        run_job(
            self.transcoder.as_ref(),
            &self.preflight.tools().ffmpeg,
            job,
            sink,
        )
        .await
    }
}
