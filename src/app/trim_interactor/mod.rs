// Trim interactor - Cut a clip positioned relative to the end of a video

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::app::{require_file, run_job, Preflight};
use crate::domain::model::*;
use crate::domain::rules::ClipWindowResolver;
use crate::engine::LineSink;
use crate::error::MediaKitResult;
use crate::output::OutputResolver;
use crate::ports::*;

/// Arguments of one trim
#[derive(Debug, Clone)]
pub struct TrimRequest {
    pub video: PathBuf,
    /// `HH:MM:SS` before the end where the clip starts
    pub from_end_start: String,
    /// `HH:MM:SS` before the end where the clip ends
    pub from_end_end: String,
    /// Optional file name inside the video directory
    pub output_name: Option<String>,
}

/// Interactor for the trim use case
pub struct TrimInteractor {
    preflight: Arc<Preflight>,
    durations: Arc<dyn DurationPort>,
    transcoder: Arc<dyn TranscodePort>,
    outputs: OutputResolver,
}

impl TrimInteractor {
    pub fn new(
        preflight: Arc<Preflight>,
        durations: Arc<dyn DurationPort>,
        transcoder: Arc<dyn TranscodePort>,
        outputs: OutputResolver,
    ) -> Self {
        Self {
            preflight,
            durations,
            transcoder,
            outputs,
        }
    }

    /// Work out the clip window for `request` without running ffmpeg
    pub async fn resolve_window(&self, request: &TrimRequest) -> MediaKitResult<ClipWindow> {
        require_file(&request.video).await?;

        let total = self.durations.total_duration(&request.video).await?;
        let range = EndAnchoredRange::parse(&request.from_end_start, &request.from_end_end)?;
        let window = ClipWindowResolver::resolve(total, &range)?;

        info!(
            total = %total,
            start = %window.start(),
            end = %window.end(),
            duration = %window.duration(),
            "Resolved clip window"
        );
        Ok(window)
    }

    /// Cut the clip; returns the written file
    pub async fn execute(
        &self,
        request: TrimRequest,
        sink: &mut dyn LineSink,
    ) -> MediaKitResult<PathBuf> {
        self.preflight.require_transcoder().await?;

        let window = self.resolve_window(&request).await?;

        let output = self
            .outputs
            .trim_target(&request.video, request.output_name.as_deref());
        self.outputs.prepare(&output)?;

        let mode = self.preflight.encoder_mode().await;

        sink.status(&format!("Trimming: {}", request.video.display()));
        sink.status(&format!("Clip: {}", window));

        let job = TranscodeJob::new(
            JobInputs::Trim {
                video: request.video,
                window,
            },
            output,
            mode,
        );
        run_job(
            self.transcoder.as_ref(),
            &self.preflight.tools().ffmpeg,
            job,
            sink,
        )
        .await
    }
}
