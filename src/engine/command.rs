//! ffmpeg argument assembly

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::model::{EncoderMode, JobInputs, TranscodeJob};
use crate::engine::presets;

/// Program plus ordered argument vector for one ffmpeg run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl FfmpegCommand {
    /// Create an empty command for `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Assemble the full command for a job.
    ///
    /// The hardware parameter set is used if and only if `job.mode` is
    /// [`EncoderMode::Hardware`]; everything else is fixed.
    pub fn for_job(program: impl Into<PathBuf>, job: &TranscodeJob) -> Self {
        let hardware = job.mode == EncoderMode::Hardware;
        let mut cmd = Self::new(program);
        cmd.extend(presets::GLOBAL_FLAGS);

        match &job.inputs {
            JobInputs::Stream { url } => {
                if hardware {
                    cmd.extend(presets::STREAM_HWACCEL);
                }
                cmd.arg("-i").arg(url.as_str());
                if hardware {
                    cmd.extend(&presets::stream_nvenc());
                } else {
                    cmd.extend(presets::SOFTWARE_VIDEO);
                }
                cmd.extend(presets::AAC_AUDIO);
            }
            JobInputs::Trim { video, window } => {
                if hardware {
                    cmd.extend(presets::FILE_HWACCEL);
                }
                cmd.arg("-ss")
                    .arg(window.start().to_string())
                    .arg("-i")
                    .path_arg(video)
                    .arg("-t")
                    .arg(window.duration().to_string());
                cmd.file_video_codec(hardware);
                cmd.extend(presets::AAC_AUDIO);
            }
            JobInputs::Subtitle { video, subtitle } => {
                if hardware {
                    cmd.extend(presets::FILE_HWACCEL);
                }
                cmd.arg("-i").path_arg(video).arg("-i").path_arg(subtitle);
                cmd.file_video_codec(hardware);
                cmd.extend(presets::SUBTITLE_MUX);
            }
        }

        cmd.path_arg(&job.output);
        cmd
    }

    /// Append a single argument
    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument
    pub fn path_arg(&mut self, path: &Path) -> &mut Self {
        self.arg(path.to_string_lossy())
    }

    /// Append several arguments
    pub fn extend(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    fn file_video_codec(&mut self, hardware: bool) {
        if hardware {
            self.extend(&presets::file_nvenc());
        } else {
            self.extend(presets::SOFTWARE_VIDEO);
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Value following the first occurrence of `flag`
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for FfmpegCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
