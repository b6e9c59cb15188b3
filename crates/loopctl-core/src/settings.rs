//! Runner settings loaded from `loopctl.toml` in a project directory.

use loopctl_logging::LogFormat;
use serde::Deserialize;
use std::path::Path;

use crate::config::DEFAULT_MAX_ITERATIONS;
use crate::SettingsError;

/// The settings file name
pub const SETTINGS_FILE_NAME: &str = "loopctl.toml";

/// Project-level settings loaded from `loopctl.toml`
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoopSettings {
    /// Iteration budget (None = default of 10)
    pub max_iterations: Option<usize>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// The `[logging]` table
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
    pub format: Option<String>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: None,
        }
    }
}

impl LoopSettings {
    /// Load settings from `dir`.
    ///
    /// Returns:
    /// - `Ok(Some(settings))` if the file exists and parses
    /// - `Ok(None)` if the file does not exist
    /// - `Err(...)` if the file exists but cannot be read or parsed
    pub fn load(dir: &Path) -> Result<Option<Self>, SettingsError> {
        let path = dir.join(SETTINGS_FILE_NAME);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;

        let settings = toml::from_str(&content)
            .map_err(|source| SettingsError::Parse { path, source })?;

        Ok(Some(settings))
    }

    /// Effective iteration budget
    pub fn max_iterations(&self) -> usize {
        self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Effective log format; defaults to pretty
    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        match self.logging.format.as_deref() {
            Some(name) => name.parse().map_err(SettingsError::InvalidLogFormat),
            None => Ok(LogFormat::default()),
        }
    }
}
