// ============================================================================
// Numeric Stepper Library
// Headless value engine for increment/decrement/free-text numeric inputs
// ============================================================================

//! # Numeric Stepper
//!
//! The value-management core of a numeric stepper (spin button), free of
//! any rendering, event binding or accessibility wiring.
//!
//! ## Features
//!
//! - **Decimal-safe stepping**: `0.2 + 0.1` steps to `0.3`, not `0.30000000000000004`
//! - **Free-text editing**: invalid mid-edit text is kept until coerced
//! - **Inclusive bounds** applied on every stepping and coercion
//! - **Pluggable reducers** sharing the built-in action vocabulary
//! - **Reinitialization** to a changed default while the value is untouched
//!
//! ## Example
//!
//! ```rust
//! use numeric_stepper::prelude::*;
//!
//! let mut stepper = StepperController::new(
//!     StepperConfig::new()
//!         .with_default_value(1.0)
//!         .with_step(0.25)
//!         .with_bounds(0.0, 2.0),
//! );
//!
//! stepper.decrement();
//! assert_eq!(stepper.value(), "0.75");
//!
//! // Free text is accepted as typed, then normalized when editing ends
//! stepper.dispatch(Action::set_value("7"));
//! stepper.request_coerce();
//! assert_eq!(stepper.value(), "2");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Action, ActionKind, Bounds, Direction, State, StepperConfig, StepperError, StepperResult,
    };
    pub use crate::engine::{DefaultHistory, DefaultReducer, StepperController, StepperSnapshot};
    pub use crate::interfaces::Reducer;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::borrow::Cow;

    fn bounded(default_value: f64, min: f64, max: f64) -> StepperConfig {
        StepperConfig::new()
            .with_default_value(default_value)
            .with_bounds(min, max)
    }

    #[test]
    fn test_default_configuration() {
        let stepper = StepperController::new(StepperConfig::default());
        assert_eq!(stepper.value(), "0");
    }

    #[test]
    fn test_set_value_constrained_to_bounds() {
        let mut stepper = StepperController::new(bounded(1.0, 1.0, 2.0));
        assert_eq!(stepper.value(), "1");

        stepper.set_value("3");
        assert_eq!(stepper.value(), "2");
        stepper.set_value("2");
        assert_eq!(stepper.value(), "2");
        stepper.increment();
        assert_eq!(stepper.value(), "2");
    }

    #[test]
    fn test_stepping_constrained_to_bounds() {
        let mut stepper = StepperController::new(bounded(1.0, 1.0, 2.0));

        stepper.decrement();
        assert_eq!(stepper.value(), "1");
        stepper.increment();
        assert_eq!(stepper.value(), "2");
        stepper.increment();
        assert_eq!(stepper.value(), "2");
    }

    #[test]
    fn test_decimal_steps() {
        let mut stepper = StepperController::new(
            StepperConfig::new()
                .with_default_value(1.0)
                .with_step(0.25),
        );

        stepper.decrement();
        assert_eq!(stepper.value(), "0.75");
        stepper.increment();
        stepper.increment();
        assert_eq!(stepper.value(), "1.25");
        stepper.set_value("-0.5");
        assert_eq!(stepper.value(), "-0.5");
        stepper.decrement();
        assert_eq!(stepper.value(), "-0.75");
    }

    #[test]
    fn test_decimal_value_with_integer_step() {
        let mut stepper =
            StepperController::new(StepperConfig::new().with_default_value(0.5));

        stepper.increment();
        assert_eq!(stepper.value(), "1.5");
        stepper.increment();
        assert_eq!(stepper.value(), "2.5");
        stepper.decrement();
        assert_eq!(stepper.value(), "1.5");
        stepper.decrement();
        assert_eq!(stepper.value(), "0.5");
    }

    #[test]
    fn test_half_steps_and_bound_jumps() {
        let mut stepper = StepperController::new(bounded(5.0, 1.0, 10.0).with_step(0.5));

        stepper.increment();
        assert_eq!(stepper.value(), "5.5");
        for _ in 0..3 {
            stepper.decrement();
        }
        assert_eq!(stepper.value(), "4");
        stepper.set_to_min();
        assert_eq!(stepper.value(), "1");
        stepper.set_to_max();
        assert_eq!(stepper.value(), "10");
    }

    #[test]
    fn test_coerce_after_free_text_edit() {
        let mut stepper = StepperController::new(bounded(5.0, 1.0, 10.0));

        stepper.dispatch(Action::set_value("11"));
        stepper.request_coerce();
        assert_eq!(stepper.value(), "10");

        stepper.dispatch(Action::set_value("0"));
        stepper.request_coerce();
        assert_eq!(stepper.value(), "1");

        stepper.dispatch(Action::set_value("-"));
        assert_eq!(stepper.value(), "-");
        stepper.request_coerce();
        assert_eq!(stepper.value(), "5");
    }

    #[test]
    fn test_reinitialize_follows_untouched_default() {
        let config = StepperConfig::new()
            .with_default_value(33.0)
            .with_reinitialize(true);
        let mut stepper = StepperController::new(config.clone());
        assert_eq!(stepper.value(), "33");

        stepper.reconfigure(config.with_default_value(42.0));
        assert_eq!(stepper.value(), "42");
    }

    #[test]
    fn test_reinitialize_ignores_modified_value() {
        let config = StepperConfig::new()
            .with_default_value(33.0)
            .with_reinitialize(true);
        let mut stepper = StepperController::new(config.clone());

        stepper.increment();
        assert_eq!(stepper.value(), "34");
        stepper.reconfigure(config.with_default_value(42.0));
        assert_eq!(stepper.value(), "34");
    }

    #[test]
    fn test_reinitialize_disabled() {
        let config = StepperConfig::new().with_default_value(33.0);
        let mut stepper = StepperController::new(config.clone());

        stepper.reconfigure(config.with_default_value(42.0));
        assert_eq!(stepper.value(), "33");
    }

    /// Steps between whole dollar amounts, keeping cents only when typed
    struct DollarReducer;

    impl DollarReducer {
        fn next_even_dollar(value: f64) -> f64 {
            (value + 1.0).trunc()
        }

        fn previous_even_dollar(value: f64) -> f64 {
            if value.fract() != 0.0 {
                value.trunc()
            } else {
                (value - 1.0).trunc()
            }
        }

        fn replace(state: &State, next: f64) -> Cow<'_, State> {
            if next == state.numeric() {
                Cow::Borrowed(state)
            } else {
                Cow::Owned(State::from_number(next))
            }
        }
    }

    impl Reducer for DollarReducer {
        fn reduce<'a>(
            &self,
            config: &StepperConfig,
            state: &'a State,
            action: &Action,
        ) -> Cow<'a, State> {
            let current = state.numeric();
            match action {
                Action::Increment => Self::replace(state, Self::next_even_dollar(current)),
                Action::Decrement => Self::replace(state, Self::previous_even_dollar(current)),
                Action::Coerce => Cow::Borrowed(state),
                Action::SetValue(_) => DefaultReducer.reduce(config, state, action),
            }
        }

        fn name(&self) -> &str {
            "dollar"
        }
    }

    #[test]
    fn test_custom_reducer() {
        let mut stepper = StepperController::with_reducer(StepperConfig::default(), DollarReducer);

        stepper.set_value("4.25");
        assert_eq!(stepper.value(), "4.25");
        stepper.increment();
        assert_eq!(stepper.value(), "5");

        stepper.set_value("0.25");
        assert_eq!(stepper.value(), "0.25");
        stepper.decrement();
        assert_eq!(stepper.value(), "0");
    }

    #[test]
    fn test_custom_reducer_still_clamps_set_value() {
        let mut stepper =
            StepperController::with_reducer(bounded(0.0, 0.0, 10.0), DollarReducer);

        stepper.set_value("25.5");
        assert_eq!(stepper.value(), "10");

        // Coerce is a no-op for this reducer
        stepper.dispatch(Action::set_value("-3"));
        assert!(!stepper.request_coerce());
        assert_eq!(stepper.value(), "-3");
    }

    #[test]
    fn test_unsupported_raw_action() {
        let mut stepper = StepperController::new(StepperConfig::default());
        let result = stepper.dispatch_raw("reset", None);
        assert!(matches!(
            result,
            Err(StepperError::UnsupportedAction { ref kind }) if kind == "reset"
        ));
        assert_eq!(stepper.value(), "0");
    }
}
