// TOML config adapter - Layered configuration: CLI > Env > File > Defaults

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::{MediaKitError, MediaKitResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "mediakit.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "MEDIAKIT_CONFIG";

/// Environment variables that override single settings
const ENV_FFMPEG: &str = "MEDIAKIT_FFMPEG";
const ENV_FFPROBE: &str = "MEDIAKIT_FFPROBE";
const ENV_NVIDIA_SMI: &str = "MEDIAKIT_NVIDIA_SMI";
const ENV_VIDEO_DIR: &str = "MEDIAKIT_VIDEO_DIR";
const ENV_LOG_LEVEL: &str = "MEDIAKIT_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "MEDIAKIT_LOG_FORMAT";

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tools: ToolPaths,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Locations of the external executables
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolPaths {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
    pub nvidia_smi: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
            nvidia_smi: PathBuf::from("nvidia-smi"),
        }
    }
}

/// Where generated files go
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for downloads and named clips; `video/` beside the executable when unset
    pub video_dir: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Log level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = MediaKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(MediaKitError::Config {
                message: format!("unknown log level '{}'", other),
            }),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line format
    #[default]
    Pretty,
    /// Single-line text format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl FromStr for LogFormat {
    type Err = MediaKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(MediaKitError::Config {
                message: format!("unknown log format '{}'", other),
            }),
        }
    }
}

/// Settings given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> MediaKitResult<Self> {
        toml::from_str(content).map_err(|e| MediaKitError::Config {
            message: format!("failed to parse TOML config: {}", e),
        })
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> MediaKitResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MediaKitError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the effective configuration from the process environment
    pub fn load(cli: &CliOverrides) -> MediaKitResult<Self> {
        Self::load_with(cli, |key| std::env::var(key).ok())
    }

    /// Build the effective configuration with an injectable environment lookup
    pub fn load_with(
        cli: &CliOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> MediaKitResult<Self> {
        let explicit = cli
            .config_file
            .clone()
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_env(&env)?;
        config.apply_cli(cli);
        Ok(config)
    }

    fn apply_env(&mut self, env: &impl Fn(&str) -> Option<String>) -> MediaKitResult<()> {
        if let Some(value) = env(ENV_FFMPEG) {
            self.tools.ffmpeg = PathBuf::from(value);
        }
        if let Some(value) = env(ENV_FFPROBE) {
            self.tools.ffprobe = PathBuf::from(value);
        }
        if let Some(value) = env(ENV_NVIDIA_SMI) {
            self.tools.nvidia_smi = PathBuf::from(value);
        }
        if let Some(value) = env(ENV_VIDEO_DIR) {
            self.output.video_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = env(ENV_LOG_LEVEL) {
            self.logging.level = value.parse()?;
        }
        if let Some(value) = env(ENV_LOG_FORMAT) {
            self.logging.format = value.parse()?;
        }
        Ok(())
    }

    fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(level) = cli.log_level {
            self.logging.level = level;
        }
        if let Some(format) = cli.log_format {
            self.logging.format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_plain_tool_names() {
        let config = Config::default();
        assert_eq!(config.tools.ffmpeg, PathBuf::from("ffmpeg"));
        assert_eq!(config.tools.ffprobe, PathBuf::from("ffprobe"));
        assert_eq!(config.tools.nvidia_smi, PathBuf::from("nvidia-smi"));
        assert_eq!(config.output.video_dir, None);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn parses_partial_file() {
        let config = Config::from_toml_str(
            r#"
            [tools]
            ffmpeg = "/opt/ffmpeg/bin/ffmpeg"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.tools.ffmpeg, PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
        assert_eq!(config.tools.ffprobe, PathBuf::from("ffprobe"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(Config::from_toml_str("[tools]\nffmpg = \"x\"\n").is_err());
        assert!(Config::from_toml_str("[logging]\nlevel = \"loud\"\n").is_err());
        assert!(Config::from_toml_str("not toml at all [").is_err());
    }

    #[test]
    fn env_overrides_file_and_cli_overrides_env() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("custom.toml");
        std::fs::write(
            &file,
            "[tools]\nffprobe = \"/file/ffprobe\"\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let cli = CliOverrides {
            config_file: Some(file),
            log_level: Some(LogLevel::Trace),
            log_format: None,
        };
        let env = env_of(&[
            ("MEDIAKIT_FFPROBE", "/env/ffprobe"),
            ("MEDIAKIT_LOG_LEVEL", "debug"),
            ("MEDIAKIT_VIDEO_DIR", "/env/video"),
        ]);

        let config = Config::load_with(&cli, env).unwrap();
        assert_eq!(config.tools.ffprobe, PathBuf::from("/env/ffprobe"));
        assert_eq!(config.output.video_dir, Some(PathBuf::from("/env/video")));
        assert_eq!(config.logging.level, LogLevel::Trace);
    }

    #[test]
    fn config_file_from_env() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("env.toml");
        std::fs::write(&file, "[output]\nvideo_dir = \"/srv/video\"\n").unwrap();

        let file_str = file.to_string_lossy().to_string();
        let config =
            Config::load_with(&CliOverrides::default(), env_of(&[("MEDIAKIT_CONFIG", &file_str)]))
                .unwrap();
        assert_eq!(config.output.video_dir, Some(PathBuf::from("/srv/video")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let cli = CliOverrides {
            config_file: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Default::default()
        };
        let err = Config::load_with(&cli, |_| None).unwrap_err();
        assert!(matches!(err, MediaKitError::Config { .. }));
    }

    #[test]
    fn bad_env_value_is_an_error() {
        let err = Config::load_with(
            &CliOverrides::default(),
            env_of(&[("MEDIAKIT_LOG_FORMAT", "xml")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }
}
