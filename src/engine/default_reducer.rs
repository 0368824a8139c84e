// ============================================================================
// Default Reducer
// The built-in stepper transition table
// ============================================================================

use crate::domain::{Action, State, StepperConfig};
use crate::interfaces::Reducer;
use crate::numeric::{format_number, sum};
use std::borrow::Cow;

/// Built-in transitions.
///
/// - `Increment` / `Decrement`: decimal-safe `value ± step`, clamped
/// - `Coerce`: clamp the value, or fall back to `default_value` when the
///   value is not a number
/// - `SetValue`: replace the value verbatim, unclamped
///
/// Stepping from a non-numeric value treats it as absent, so the result is
/// `±step` clamped. Override reducers can delegate here for the actions
/// they leave alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultReducer;

impl DefaultReducer {
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for DefaultReducer {
    fn reduce<'a>(
        &self,
        config: &StepperConfig,
        state: &'a State,
        action: &Action,
    ) -> Cow<'a, State> {
        let current = state.numeric();
        let bounds = config.bounds();

        match action {
            Action::Increment => replace_if_changed(state, bounds.clamp(sum(current, config.step))),
            Action::Decrement => {
                replace_if_changed(state, bounds.clamp(sum(current, -config.step)))
            },
            Action::Coerce if current.is_nan() => {
                replace_text_if_changed(state, format_number(config.default_value))
            },
            Action::Coerce => replace_if_changed(state, bounds.clamp(current)),
            Action::SetValue(Some(payload)) if payload != state.value() => {
                Cow::Owned(State::new(payload.clone()))
            },
            Action::SetValue(_) => Cow::Borrowed(state),
        }
    }

    fn name(&self) -> &str {
        "default"
    }
}

fn replace_if_changed(state: &State, candidate: f64) -> Cow<'_, State> {
    replace_text_if_changed(state, format_number(candidate))
}

fn replace_text_if_changed(state: &State, text: String) -> Cow<'_, State> {
    if text == state.value() {
        Cow::Borrowed(state)
    } else {
        Cow::Owned(State::new(text))
    }
}
