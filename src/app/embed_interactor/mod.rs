// Embed interactor - Mux a subtitle file into a video

use std::path::PathBuf;
use std::sync::Arc;

use crate::app::{require_file, run_job, Preflight};
use crate::domain::model::*;
use crate::engine::LineSink;
use crate::error::MediaKitResult;
use crate::output::OutputResolver;
use crate::ports::*;

/// Arguments of one subtitle embedding
#[derive(Debug, Clone)]
pub struct EmbedRequest {
    pub video: PathBuf,
    pub subtitle: PathBuf,
    /// Full output path; defaults to `<stem>_with_subtitle<ext>` beside the video
    pub output: Option<PathBuf>,
}

/// Interactor for the subtitle use case
pub struct EmbedInteractor {
    preflight: Arc<Preflight>,
    transcoder: Arc<dyn TranscodePort>,
    outputs: OutputResolver,
}

impl EmbedInteractor {
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

    pub async fn execute(
        &self,
        request: EmbedRequest,
        sink: &mut dyn LineSink,
    ) -> MediaKitResult<PathBuf> {
        self.preflight.require_transcoder().await?;

        require_file(&request.video).await?;
        require_file(&request.subtitle).await?;

        let output = self
            .outputs
            .subtitle_target(&request.video, request.output.as_deref());
        let mode = self.preflight.encoder_mode().await;

        sink.status(&format!("Embedding subtitles into: {}", request.video.display()));

        let job = TranscodeJob::new(
            JobInputs::Subtitle {
                video: request.video,
                subtitle: request.subtitle,
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
