// ============================================================================
// Reducer Interface
// Defines the contract for pluggable stepper transition functions
// ============================================================================

use crate::domain::{Action, State, StepperConfig};
use std::borrow::Cow;

/// Strategy pattern interface for stepper transitions
/// Implementations: DefaultReducer, or any caller-supplied override
pub trait Reducer {
    /// Compute the state that follows `state` under `action`
    ///
    /// # Arguments
    /// * `config` - Configuration of the controller running the reducer
    /// * `state` - The current committed state
    /// * `action` - The action being dispatched
    ///
    /// # Returns
    /// `Cow::Borrowed(state)` when nothing changes, `Cow::Owned` with the
    /// replacement otherwise. Callers rely on the borrowed case to skip
    /// redundant commits.
    ///
    /// Reducers must be pure: no I/O, and no dispatch back into the
    /// controller that invoked them.
    fn reduce<'a>(
        &self,
        config: &StepperConfig,
        state: &'a State,
        action: &Action,
    ) -> Cow<'a, State>;

    /// Get the reducer name for logging
    fn name(&self) -> &str {
        "custom"
    }
}

impl<R: Reducer + ?Sized> Reducer for &R {
    fn reduce<'a>(
        &self,
        config: &StepperConfig,
        state: &'a State,
        action: &Action,
    ) -> Cow<'a, State> {
        (**self).reduce(config, state, action)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Reducer + ?Sized> Reducer for Box<R> {
    fn reduce<'a>(
        &self,
        config: &StepperConfig,
        state: &'a State,
        action: &Action,
    ) -> Cow<'a, State> {
        (**self).reduce(config, state, action)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
