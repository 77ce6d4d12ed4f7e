// Preflight - Tool presence and GPU checks shared by every program

use std::sync::Arc;

use tracing::info;

use crate::adapters::toml_config::ToolPaths;
use crate::domain::model::EncoderMode;
use crate::error::{MediaKitError, MediaKitResult};
use crate::ports::*;

/// Harmless arguments used to check that ffmpeg can be invoked
pub const TRANSCODER_PROBE_ARGS: &[&str] = &["-version"];

/// Capability checks run before any work
pub struct Preflight {
    probe: Arc<dyn CapabilityProbe>,
    tools: ToolPaths,
}

impl Preflight {
    pub fn new(probe: Arc<dyn CapabilityProbe>, tools: ToolPaths) -> Self {
        Self { probe, tools }
    }

    pub fn tools(&self) -> &ToolPaths {
        &self.tools
    }

    /// Fail with [`MediaKitError::MissingTool`] unless ffmpeg can be invoked
    pub async fn require_transcoder(&self) -> MediaKitResult<()> {
        let status = self
            .probe
            .probe(&self.tools.ffmpeg, TRANSCODER_PROBE_ARGS)
            .await;

        if status.is_callable() {
            Ok(())
        } else {
            Err(MediaKitError::MissingTool {
                tool: self.tools.ffmpeg.display().to_string(),
            })
        }
    }

    /// Probe the GPU again and pick the encoder pipeline
    pub async fn encoder_mode(&self) -> EncoderMode {
        let status = self.probe.probe(&self.tools.nvidia_smi, &[]).await;
        let mode = EncoderMode::from_gpu_available(status.succeeded());
        match mode {
            EncoderMode::Hardware => info!("NVIDIA GPU detected, using NVENC"),
            EncoderMode::Software => info!("No usable NVIDIA GPU ({:?}), using libx264", status),
        }
        mode
    }
}
