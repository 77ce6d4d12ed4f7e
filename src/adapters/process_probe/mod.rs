// Process probe adapter - Tool availability by invoking the executable

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::ports::*;

/// Probes tools by spawning them with throwaway arguments
#[derive(Debug, Default, Clone)]
pub struct ProcessProbeAdapter;

impl ProcessProbeAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CapabilityProbe for ProcessProbeAdapter {
    async fn probe(&self, executable: &Path, args: &[&str]) -> ProbeStatus {
        let status = Command::new(executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => ProbeStatus::Succeeded,
            Ok(status) => {
                debug!("{} exited with {}", executable.display(), status);
                ProbeStatus::Failed
            }
            Err(e) => {
                debug!("Could not invoke {}: {}", executable.display(), e);
                ProbeStatus::Missing
            }
        }
    }
}
