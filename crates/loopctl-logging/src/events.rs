use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Structured log events for the control loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LoopEvent {
    LoopStarted {
        max_iterations: usize,
    },
    ResponseReceived {
        iteration: usize,
        duration_secs: f64,
    },
    PredicateEvaluated {
        iteration: usize,
        stop: bool,
    },
    /// `carried_forward` is set when no transition was configured and the
    /// state passed through unchanged
    StateTransitioned {
        iteration: usize,
        carried_forward: bool,
    },
    LoopCompleted {
        iterations: usize,
        duration_secs: f64,
    },
    MaxIterationsReached {
        iterations: usize,
        duration_secs: f64,
    },
}

impl LoopEvent {
    /// Forward the event to the active `tracing` subscriber
    pub fn emit(&self) {
        match self {
            LoopEvent::LoopStarted { max_iterations } => {
                info!(max_iterations = *max_iterations, "Loop started");
            }
            LoopEvent::ResponseReceived {
                iteration,
                duration_secs,
            } => {
                debug!(
                    iteration = *iteration,
                    duration_secs = *duration_secs,
                    "Response received"
                );
            }
            LoopEvent::PredicateEvaluated { iteration, stop } => {
                debug!(iteration = *iteration, stop = *stop, "Stop condition evaluated");
            }
            LoopEvent::StateTransitioned {
                iteration,
                carried_forward,
            } => {
                debug!(
                    iteration = *iteration,
                    carried_forward = *carried_forward,
                    "State advanced"
                );
            }
            LoopEvent::LoopCompleted {
                iterations,
                duration_secs,
            } => {
                info!(
                    iterations = *iterations,
                    duration_secs = *duration_secs,
                    "Stop condition satisfied"
                );
            }
            LoopEvent::MaxIterationsReached {
                iterations,
                duration_secs,
            } => {
                info!(
                    iterations = *iterations,
                    duration_secs = *duration_secs,
                    "Iteration budget exhausted"
                );
            }
        }
    }

    /// Serialize the event as a JSON object with an RFC 3339 `timestamp`
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        value
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field output
    #[default]
    Pretty,
    /// JSON lines format for machine consumption
    Json,
    /// Compact single-line format
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("Compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
    }

    #[test]
    fn test_log_format_rejects_unknown() {
        let err = "yaml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, "Unknown log format: yaml");
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = LoopEvent::PredicateEvaluated {
            iteration: 2,
            stop: true,
        };
        let json = event.to_json();
        assert_eq!(json["event"], "predicate_evaluated");
        assert_eq!(json["iteration"], 2);
        assert_eq!(json["stop"], true);
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_event_deserializes_without_timestamp() {
        let raw = r#"{"event":"max_iterations_reached","iterations":5,"duration_secs":0.5}"#;
        let event: LoopEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(
            event,
            LoopEvent::MaxIterationsReached {
                iterations: 5,
                duration_secs: 0.5
            }
        );
    }
}
