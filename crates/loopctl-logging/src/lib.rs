//! # loopctl-logging
//!
//! Logging for the loopctl control loop.
//!
//! ## Key Types
//!
//! - [`LoopEvent`] - Structured events emitted by the runner
//! - [`LogFormat`] - Output formats (Pretty, JSON, Compact)
//!
//! Nothing here is required to run a loop: the runner always emits
//! [`LoopEvent`]s through `tracing`, and they go nowhere until a subscriber
//! is installed with [`init_tracing`] or by the embedding application.

mod events;

pub use events::{LogFormat, LoopEvent};

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing for the application
///
/// Panics if a global subscriber has already been installed; use
/// [`try_init_tracing`] when that is possible.
pub fn init_tracing(level: &str, format: LogFormat) {
    if let Err(e) = try_init_tracing(level, format) {
        panic!("failed to install tracing subscriber: {e}");
    }
}

/// Level filter used by [`try_init_tracing`]: `RUST_LOG` when it parses,
/// otherwise `level`
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize tracing, failing if a global subscriber is already set.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn try_init_tracing(level: &str, format: LogFormat) -> Result<(), TryInitError> {
    let filter = env_filter(level);

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(false))
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init(),
    }
}
