//! # loopctl-core
//!
//! A bounded control loop that calls an external responder until a stop
//! condition holds or the iteration budget runs out.
//!
//! Each iteration awaits, in order: the responder, the stop condition, and
//! (only when the loop continues) the optional state transition. The loop
//! knows nothing about what the state or responses contain.
//!
//! ```no_run
//! # async fn demo() -> Result<(), std::convert::Infallible> {
//! use loopctl_core::{LoopConfig, TerminationReason};
//!
//! let config: LoopConfig<u32, u32, std::convert::Infallible> = LoopConfig::new(
//!     0,
//!     |n| Box::pin(async move { Ok(*n * 2) }),
//!     |doubled, _| Box::pin(async move { Ok(*doubled >= 8) }),
//! )
//! .with_transition(|_, n| Box::pin(async move { Ok(n + 1) }));
//!
//! let outcome = loopctl_core::run(config).await?;
//! assert_eq!(outcome.reason, TerminationReason::PredicateSatisfied);
//! assert_eq!(outcome.final_state, 4);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod loop_runner;
mod outcome;
mod settings;

pub use config::{LoopConfig, DEFAULT_MAX_ITERATIONS};
pub use error::SettingsError;
pub use loop_runner::{run, LoopRunner};
pub use outcome::{LoopOutcome, TerminationReason};
pub use settings::{LoggingSettings, LoopSettings, SETTINGS_FILE_NAME};

/// Boxed future returned by every loop callback
pub use futures::future::BoxFuture;
