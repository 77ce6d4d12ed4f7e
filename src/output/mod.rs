//! Output location rules
//!
//! Downloads and explicitly named clips go into a shared `video` directory;
//! everything else is written next to its source file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MediaKitError, MediaKitResult};
use crate::utils::path::{dotted_extension, has_known_container_extension, sibling_with_suffix};

/// Name of the shared output directory
pub const VIDEO_DIR_NAME: &str = "video";

/// Resolves where each tool writes its result
#[derive(Debug, Clone)]
pub struct OutputResolver {
    video_dir: PathBuf,
}

impl OutputResolver {
    pub fn new(video_dir: impl Into<PathBuf>) -> Self {
        Self {
            video_dir: video_dir.into(),
        }
    }

    /// `video/` beside the running executable
    pub fn default_video_dir() -> MediaKitResult<PathBuf> {
        let exe = std::env::current_exe()?;
        let parent = exe.parent().ok_or_else(|| MediaKitError::Unexpected {
            message: format!("executable {} has no parent directory", exe.display()),
        })?;
        Ok(parent.join(VIDEO_DIR_NAME))
    }

    pub fn video_dir(&self) -> &Path {
        &self.video_dir
    }

    /// `<video_dir>/<name>`, with `.mp4` appended unless already present
    pub fn download_target(&self, name: &str) -> PathBuf {
        let file_name = if name.ends_with(".mp4") {
            name.to_string()
        } else {
            format!("{}.mp4", name)
        };
        self.video_dir.join(file_name)
    }

    /// Beside the source as `<stem>_edited<ext>`, or `<video_dir>/<name>` when named.
    /// Names without a known container extension get the source's extension.
    pub fn trim_target(&self, source: &Path, name: Option<&str>) -> PathBuf {
        match name {
            None => sibling_with_suffix(source, "_edited"),
            Some(name) if has_known_container_extension(name) => self.video_dir.join(name),
            Some(name) => self
                .video_dir
                .join(format!("{}{}", name, dotted_extension(source))),
        }
    }

    /// The explicit path verbatim, or `<stem>_with_subtitle<ext>` beside the source
    pub fn subtitle_target(&self, source: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => sibling_with_suffix(source, "_with_subtitle"),
        }
    }

    /// Create the video directory when `target` lives inside it
    pub fn prepare(&self, target: &Path) -> MediaKitResult<()> {
        if target.starts_with(&self.video_dir) && !self.video_dir.is_dir() {
            std::fs::create_dir_all(&self.video_dir)?;
            info!("Created output directory {}", self.video_dir.display());
        }
        Ok(())
    }
}
