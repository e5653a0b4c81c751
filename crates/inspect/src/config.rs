//! Inspector configuration loaded from environment variables.

use std::path::PathBuf;

use clap::ValueEnum;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Inspector configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `SNAPSHOT_PATH`: snapshot file to load (default: `"state.json"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            snapshot_path: lookup("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_path),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .and_then(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        snapshot_path: Option<PathBuf>,
        log_level: Option<String>,
        log_format: Option<LogFormat>,
    ) -> Self {
        if let Some(path) = snapshot_path {
            self.snapshot_path = path;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("state.json"),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
