// ============================================================================
// Stepper Controller
// Owns the stepper state and routes actions through the active reducer
// ============================================================================

use super::default_reducer::DefaultReducer;
use super::reinitialize::{reinitialize_target, DefaultHistory};
use crate::domain::{Action, Direction, State, StepperConfig, StepperResult};
use crate::interfaces::Reducer;
use crate::numeric::format_number;
use rust_decimal::Decimal;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Values a binding layer derives from the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct StepperSnapshot {
    /// Current text
    pub value: String,
    /// Lenient numeric reading; `None` while the text is not a number
    pub numeric: Option<f64>,
    /// The value sits exactly on the lower bound
    pub at_min: bool,
    /// The value sits exactly on the upper bound
    pub at_max: bool,
}

/// Stepper engine with a pluggable reducer
pub struct StepperController<R: Reducer = DefaultReducer> {
    /// Configuration of the current cycle
    config: StepperConfig,

    /// Committed state
    state: State,

    /// Active transition function
    reducer: R,

    /// Default values of the previous and current cycle
    history: DefaultHistory,
}

impl StepperController<DefaultReducer> {
    /// Create a controller running the built-in transitions
    pub fn new(config: StepperConfig) -> Self {
        Self::with_reducer(config, DefaultReducer)
    }
}

impl Default for StepperController<DefaultReducer> {
    fn default() -> Self {
        Self::new(StepperConfig::default())
    }
}

impl<R: Reducer> StepperController<R> {
    /// Create a controller running a caller-supplied reducer
    pub fn with_reducer(config: StepperConfig, reducer: R) -> Self {
        Self {
            state: State::from_number(config.default_value),
            history: DefaultHistory::new(config.default_value),
            config,
            reducer,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current text value
    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Derive the values a widget binds to
    pub fn snapshot(&self) -> StepperSnapshot {
        let numeric = self.state.numeric();
        StepperSnapshot {
            value: self.state.value().to_string(),
            numeric: (!numeric.is_nan()).then_some(numeric),
            at_min: self.state.value() == format_number(self.config.min),
            at_max: self.state.value() == format_number(self.config.max),
        }
    }

    /// Exact decimal view of the current value, `None` mid-edit
    pub fn to_decimal(&self) -> Option<Decimal> {
        self.state.to_decimal()
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run `action` through the active reducer.
    ///
    /// Returns `true` when a new state was committed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = match self.reducer.reduce(&self.config, &self.state, &action) {
            Cow::Borrowed(_) => {
                trace!(
                    reducer = self.reducer.name(),
                    action = %action.kind(),
                    value = self.state.value(),
                    "Stepper action left state unchanged"
                );
                return false;
            },
            Cow::Owned(next) => next,
        };

        debug!(
            reducer = self.reducer.name(),
            action = %action.kind(),
            from = self.state.value(),
            to = next.value(),
            "Stepper state committed"
        );
        self.state = next;
        true
    }

    /// Dispatch an action given by its raw discriminant name.
    ///
    /// # Errors
    /// Returns `UnsupportedAction` when `kind` is not part of the action
    /// vocabulary; the state is left untouched.
    pub fn dispatch_raw(&mut self, kind: &str, payload: Option<String>) -> StepperResult<bool> {
        let action = Action::from_raw(kind, payload)?;
        Ok(self.dispatch(action))
    }

    // ========================================================================
    // Bound Operations
    // ========================================================================

    /// Clamp `raw` into range and set it as the new value
    pub fn set_value(&mut self, raw: &str) -> bool {
        let clamped = self.config.bounds().clamp_text(raw);
        self.dispatch(Action::SetValue(Some(clamped)))
    }

    pub fn increment(&mut self) -> bool {
        self.dispatch(Action::Increment)
    }

    pub fn decrement(&mut self) -> bool {
        self.dispatch(Action::Decrement)
    }

    /// Normalize an in-progress edit; call when editing ends
    pub fn request_coerce(&mut self) -> bool {
        self.dispatch(Action::Coerce)
    }

    /// Jump to the lower bound
    pub fn set_to_min(&mut self) -> bool {
        let min = format_number(self.config.min);
        self.set_value(&min)
    }

    /// Jump to the upper bound
    pub fn set_to_max(&mut self) -> bool {
        let max = format_number(self.config.max);
        self.set_value(&max)
    }

    /// Coerce the pending edit, then move one step in `direction`
    pub fn step(&mut self, direction: Direction) -> bool {
        let coerced = self.request_coerce();
        let moved = self.dispatch(direction.action());
        coerced || moved
    }

    // ========================================================================
    // Reconfiguration
    // ========================================================================

    /// Start a new cycle with `config`.
    ///
    /// With `enable_reinitialize`, a changed `default_value` replaces the
    /// value when the value still equals the previous default. Returns
    /// `true` when that happened.
    pub fn reconfigure(&mut self, config: StepperConfig) -> bool {
        self.history = self.history.advance(config.default_value);
        self.config = config;

        let Some(target) = reinitialize_target(
            &self.history,
            self.config.enable_reinitialize,
            self.state.numeric(),
        ) else {
            return false;
        };

        debug!(
            previous = ?self.history.previous(),
            default_value = target,
            "Reinitializing stepper to new default"
        );
        self.set_value(&format_number(target))
    }
}
