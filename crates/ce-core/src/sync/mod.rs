use std::sync::Arc;
use parking_lot::Mutex;

use crate::interaction::InteractionState;

/// Shared holder for the interaction state echoed between invocations.
///
/// Each invocation reads and writes the held state under one lock, so an
/// overlapping caller never observes or commits a half-applied transition.
#[derive(Clone, Default)]
pub struct InteractionSync {
    state: Arc<Mutex<InteractionState>>,
}

impl InteractionSync {
    /// Create a new holder starting idle
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the currently held state
    pub fn snapshot(&self) -> InteractionState {
        self.state.lock().clone()
    }

    /// Run `f` against the held state and commit the state it returns.
    ///
    /// The lock is held for the whole call. On `Err` the held state is left
    /// exactly as it was.
    pub fn transact<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&InteractionState) -> Result<(T, InteractionState), E>,
    {
        let mut guard = self.state.lock();
        let (output, next) = f(&*guard)?;
        *guard = next;
        Ok(output)
    }
}
