use std::sync::Arc;

use crate::adapters::{Config, FFmpegAdapter, FFprobeAdapter, ProcessProbeAdapter};
use crate::app::{DownloadInteractor, EmbedInteractor, Preflight, TrimInteractor};
use crate::error::MediaKitResult;
use crate::output::OutputResolver;
use crate::ports::{CapabilityProbe, DurationPort, TranscodePort};

/// Wires ports to adapters and hands out interactors
pub struct AppContainer {
    preflight: Arc<Preflight>,
    durations: Arc<dyn DurationPort>,
    transcoder: Arc<dyn TranscodePort>,
    outputs: OutputResolver,
}

impl AppContainer {
    /// Process-backed adapters configured from `config`
    pub fn from_config(config: &Config) -> MediaKitResult<Self> {
        let video_dir = match &config.output.video_dir {
            Some(dir) => dir.clone(),
            None => OutputResolver::default_video_dir()?,
        };

        let probe = Arc::new(ProcessProbeAdapter::new());
        let durations = Arc::new(FFprobeAdapter::new(config.tools.ffprobe.clone()));
        let transcoder = Arc::new(FFmpegAdapter::new());

        Ok(Self::with_ports(
            config,
            probe as Arc<dyn CapabilityProbe>,
            durations as Arc<dyn DurationPort>,
            transcoder as Arc<dyn TranscodePort>,
            OutputResolver::new(video_dir),
        ))
    }

    /// Explicit ports, for embedding and tests
    pub fn with_ports(
        config: &Config,
        probe: Arc<dyn CapabilityProbe>,
        durations: Arc<dyn DurationPort>,
        transcoder: Arc<dyn TranscodePort>,
        outputs: OutputResolver,
    ) -> Self {
        Self {
            preflight: Arc::new(Preflight::new(probe, config.tools.clone())),
            durations,
            transcoder,
            outputs,
        }
    }

    pub fn download_interactor(&self) -> DownloadInteractor {
        DownloadInteractor::new(
            Arc::clone(&self.preflight),
            Arc::clone(&self.transcoder),
            self.outputs.clone(),
        )
    }

    pub fn trim_interactor(&self) -> TrimInteractor {
        TrimInteractor::new(
            Arc::clone(&self.preflight),
            Arc::clone(&self.durations),
            Arc::clone(&self.transcoder),
            self.outputs.clone(),
        )
    }

    pub fn embed_interactor(&self) -> EmbedInteractor {
        EmbedInteractor::new(
            Arc::clone(&self.preflight),
            Arc::clone(&self.transcoder),
            self.outputs.clone(),
        )
    }
}
