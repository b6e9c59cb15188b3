use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why a loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The stop condition returned true
    PredicateSatisfied,
    /// `max_iterations` responder calls ran without the stop condition holding
    BudgetExhausted,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::PredicateSatisfied => write!(f, "predicate-satisfied"),
            TerminationReason::BudgetExhausted => write!(f, "budget-exhausted"),
        }
    }
}

/// The final outcome of one loop invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopOutcome<S, R> {
    /// State that produced the terminating response, or the state after the
    /// last transition when the budget ran out
    pub final_state: S,
    /// `None` only when zero iterations ran
    pub last_response: Option<R>,
    pub reason: TerminationReason,
    /// Number of responder calls made
    pub iterations: usize,
    pub total_duration_secs: f64,
}

impl<S, R> LoopOutcome<S, R> {
    pub(crate) fn predicate_satisfied(
        final_state: S,
        last_response: R,
        iterations: usize,
        duration: Duration,
    ) -> Self {
        Self {
            final_state,
            last_response: Some(last_response),
            reason: TerminationReason::PredicateSatisfied,
            iterations,
            total_duration_secs: duration.as_secs_f64(),
        }
    }

    pub(crate) fn budget_exhausted(
        final_state: S,
        last_response: Option<R>,
        iterations: usize,
        duration: Duration,
    ) -> Self {
        Self {
            final_state,
            last_response,
            reason: TerminationReason::BudgetExhausted,
            iterations,
            total_duration_secs: duration.as_secs_f64(),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.reason == TerminationReason::PredicateSatisfied
    }

    /// Process exit status for callers that wrap a loop in a CLI: 0 when
    /// the stop condition held, 1 when the budget ran out
    pub fn exit_code(&self) -> i32 {
        match self.reason {
            TerminationReason::PredicateSatisfied => 0,
            TerminationReason::BudgetExhausted => 1,
        }
    }

    /// Transform the final state, keeping everything else
    pub fn map_state<T>(self, f: impl FnOnce(S) -> T) -> LoopOutcome<T, R> {
        LoopOutcome {
            final_state: f(self.final_state),
            last_response: self.last_response,
            reason: self.reason,
            iterations: self.iterations,
            total_duration_secs: self.total_duration_secs,
        }
    }

    pub fn into_parts(self) -> (S, Option<R>) {
        (self.final_state, self.last_response)
    }
}
