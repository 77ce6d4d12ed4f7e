// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::model::*;
use crate::engine::{FfmpegCommand, LineSink};
use crate::error::MediaKitResult;

/// Outcome of invoking an external executable to see whether it works
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The executable could not be spawned at all
    Missing,
    /// It ran but exited unsuccessfully
    Failed,
    /// It ran and exited with status zero
    Succeeded,
}

impl ProbeStatus {
    /// The executable exists and can be invoked, whatever its exit status
    pub fn is_callable(&self) -> bool {
        !matches!(self, ProbeStatus::Missing)
    }

    /// The executable ran and reported success
    pub fn succeeded(&self) -> bool {
        matches!(self, ProbeStatus::Succeeded)
    }
}

/// Port for checking whether an external tool can be invoked
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    /// Invoke `executable` with `args`. Never fails; a missing executable
    /// is reported as [`ProbeStatus::Missing`].
    async fn probe(&self, executable: &Path, args: &[&str]) -> ProbeStatus;
}

/// Port for reading a media file's total duration
#[async_trait]
pub trait DurationPort: Send + Sync {
    /// Total duration, truncated to whole seconds
    async fn total_duration(&self, media: &Path) -> MediaKitResult<Timestamp>;
}

/// Port for running the transcoder
#[async_trait]
pub trait TranscodePort: Send + Sync {
    /// Run `command` to completion, forwarding its diagnostic lines to `sink`.
    ///
    /// A process that runs and exits non-zero is reported through
    /// [`ExecutionReport::state`]; errors are reserved for spawn and read failures.
    async fn run(
        &self,
        command: &FfmpegCommand,
        sink: &mut dyn LineSink,
    ) -> MediaKitResult<ExecutionReport>;
}
