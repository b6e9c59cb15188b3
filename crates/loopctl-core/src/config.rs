use futures::future::BoxFuture;

use crate::LoopSettings;

/// Iteration budget used when none is configured
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

pub(crate) type RespondFn<S, R, E> =
    Box<dyn for<'a> FnMut(&'a S) -> BoxFuture<'a, Result<R, E>> + Send>;
pub(crate) type StopFn<S, R, E> =
    Box<dyn for<'a> FnMut(&'a R, &'a S) -> BoxFuture<'a, Result<bool, E>> + Send>;
pub(crate) type TransitionFn<S, R, E> =
    Box<dyn for<'a> FnMut(&'a R, S) -> BoxFuture<'a, Result<S, E>> + Send>;

/// Everything one loop invocation needs: the three callbacks, the budget,
/// and the state handed to the first responder call.
///
/// A config is consumed by [`LoopRunner::run`](crate::LoopRunner::run), so it
/// cannot change while a loop is in flight.
///
/// Callbacks return `Send` futures and `S`, `R`, `E` must be
/// `Send + Sync + 'static`, so a running loop can be handed to
/// `tokio::spawn`. Single-threaded state such as `Rc<RefCell<_>>` is
/// rejected; share it as `Arc<Mutex<_>>` instead.
///
/// ```compile_fail
/// use std::rc::Rc;
/// use loopctl_core::LoopConfig;
///
/// let _config: LoopConfig<Rc<u32>, u32, String> = LoopConfig::new(
///     Rc::new(0),
///     |n| Box::pin(async move { Ok(**n) }),
///     |_, _| Box::pin(async move { Ok(true) }),
/// );
/// ```
pub struct LoopConfig<S, R, E> {
    pub(crate) initial_state: S,
    pub(crate) respond: RespondFn<S, R, E>,
    pub(crate) should_stop: StopFn<S, R, E>,
    pub(crate) transition: Option<TransitionFn<S, R, E>>,
    pub(crate) max_iterations: usize,
}

impl<S, R, E> LoopConfig<S, R, E>
where
    S: Send + Sync + 'static,
    R: Send + Sync + 'static,
    E: Send + 'static,
{
    /// Create a config with the default budget and no transition.
    ///
    /// `respond` receives the current state. `should_stop` receives the
    /// response together with the state that produced it.
    pub fn new<Rf, Pf>(initial_state: S, respond: Rf, should_stop: Pf) -> Self
    where
        Rf: for<'a> FnMut(&'a S) -> BoxFuture<'a, Result<R, E>> + Send + 'static,
        Pf: for<'a> FnMut(&'a R, &'a S) -> BoxFuture<'a, Result<bool, E>> + Send + 'static,
    {
        Self {
            initial_state,
            respond: Box::new(respond),
            should_stop: Box::new(should_stop),
            transition: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Derive the next state from each non-terminating response.
    ///
    /// Without a transition the state is carried forward unchanged.
    pub fn with_transition<Tf>(mut self, transition: Tf) -> Self
    where
        Tf: for<'a> FnMut(&'a R, S) -> BoxFuture<'a, Result<S, E>> + Send + 'static,
    {
        self.transition = Some(Box::new(transition));
        self
    }

    /// Zero is allowed: the loop then returns without calling anything.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Apply file-based settings on top of this config.
    ///
    /// Keys absent from the settings leave the config as it is.
    pub fn with_settings(self, settings: &LoopSettings) -> Self {
        match settings.max_iterations {
            Some(max) => self.with_max_iterations(max),
            None => self,
        }
    }
}

impl<S, R, E> LoopConfig<S, R, E> {
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn has_transition(&self) -> bool {
        self.transition.is_some()
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }
}

impl<S: std::fmt::Debug, R, E> std::fmt::Debug for LoopConfig<S, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopConfig")
            .field("initial_state", &self.initial_state)
            .field("max_iterations", &self.max_iterations)
            .field("has_transition", &self.transition.is_some())
            .finish_non_exhaustive()
    }
}
