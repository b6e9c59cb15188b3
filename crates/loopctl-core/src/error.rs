use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading [`LoopSettings`](crate::LoopSettings).
///
/// The loop itself has no error type: callback failures are returned to the
/// caller exactly as the callback produced them.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid logging format: {0}")]
    InvalidLogFormat(String),
}
