use std::time::Instant;

use loopctl_logging::LoopEvent;
use tracing::debug;

use crate::outcome::LoopOutcome;
use crate::LoopConfig;

/// Drives the respond / check / transition cycle for one config
pub struct LoopRunner<S, R, E> {
    config: LoopConfig<S, R, E>,
}

impl<S, R, E> LoopRunner<S, R, E> {
    pub fn new(config: LoopConfig<S, R, E>) -> Self {
        Self { config }
    }

    /// Run until the stop condition holds or the budget is spent.
    ///
    /// Iterations are strictly sequential. The stop condition judges each
    /// response against the state that produced it, and the transition is
    /// skipped on the iteration that stops the loop. The first callback error
    /// is returned unchanged and ends the run.
    pub async fn run(self) -> Result<LoopOutcome<S, R>, E> {
        let LoopConfig {
            initial_state,
            mut respond,
            mut should_stop,
            mut transition,
            max_iterations,
        } = self.config;

        let started_at = Instant::now();
        LoopEvent::LoopStarted { max_iterations }.emit();

        let mut state = initial_state;
        let mut last_response = None;
        let mut iterations = 0;

        while iterations < max_iterations {
            iterations += 1;

            debug!(iteration = iterations, "Calling responder");
            let call_started = Instant::now();
            let response = respond(&state).await?;
            LoopEvent::ResponseReceived {
                iteration: iterations,
                duration_secs: call_started.elapsed().as_secs_f64(),
            }
            .emit();

            let stop = should_stop(&response, &state).await?;
            LoopEvent::PredicateEvaluated {
                iteration: iterations,
                stop,
            }
            .emit();

            if stop {
                let duration = started_at.elapsed();
                LoopEvent::LoopCompleted {
                    iterations,
                    duration_secs: duration.as_secs_f64(),
                }
                .emit();
                return Ok(LoopOutcome::predicate_satisfied(
                    state, response, iterations, duration,
                ));
            }

            state = match transition.as_mut() {
                Some(transition) => transition(&response, state).await?,
                None => state,
            };
            LoopEvent::StateTransitioned {
                iteration: iterations,
                carried_forward: transition.is_none(),
            }
            .emit();

            last_response = Some(response);
        }

        let duration = started_at.elapsed();
        LoopEvent::MaxIterationsReached {
            iterations,
            duration_secs: duration.as_secs_f64(),
        }
        .emit();
        Ok(LoopOutcome::budget_exhausted(
            state,
            last_response,
            iterations,
            duration,
        ))
    }
}

/// Run one loop to completion; shorthand for `LoopRunner::new(config).run()`
pub async fn run<S, R, E>(config: LoopConfig<S, R, E>) -> Result<LoopOutcome<S, R>, E> {
    LoopRunner::new(config).run().await
}
