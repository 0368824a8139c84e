// ============================================================================
// Stepper Actions
// The closed action vocabulary understood by every reducer
// ============================================================================

use super::errors::{StepperError, StepperResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A request to change the stepper state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "payload", rename_all = "camelCase")
)]
pub enum Action {
    /// Add one step
    Increment,
    /// Subtract one step
    Decrement,
    /// Normalize the current (possibly invalid) value into range
    Coerce,
    /// Replace the raw value; `None` is a no-op for the default reducer
    SetValue(Option<String>),
}

impl Action {
    /// Build a `SetValue` action carrying `value`
    pub fn set_value(value: impl Into<String>) -> Self {
        Action::SetValue(Some(value.into()))
    }

    /// Build an action from a raw discriminant name and optional payload.
    ///
    /// The payload is only read for `setValue`.
    ///
    /// # Errors
    /// Returns `UnsupportedAction` for names outside [`ActionKind::ALL`].
    pub fn from_raw(kind: &str, payload: Option<String>) -> StepperResult<Self> {
        Ok(match kind.parse::<ActionKind>()? {
            ActionKind::Increment => Action::Increment,
            ActionKind::Decrement => Action::Decrement,
            ActionKind::Coerce => Action::Coerce,
            ActionKind::SetValue => Action::SetValue(payload),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Increment => ActionKind::Increment,
            Action::Decrement => ActionKind::Decrement,
            Action::Coerce => ActionKind::Coerce,
            Action::SetValue(_) => ActionKind::SetValue,
        }
    }
}

/// Discriminant of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ActionKind {
    Increment,
    Decrement,
    Coerce,
    SetValue,
}

impl ActionKind {
    /// Every supported discriminant
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Increment,
        ActionKind::Decrement,
        ActionKind::Coerce,
        ActionKind::SetValue,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::Increment => "increment",
            ActionKind::Decrement => "decrement",
            ActionKind::Coerce => "coerce",
            ActionKind::SetValue => "setValue",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = StepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| StepperError::UnsupportedAction {
                kind: s.to_string(),
            })
    }
}

/// Direction of a keyboard-style step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The bare action that moves one step in this direction
    pub fn action(self) -> Action {
        match self {
            Direction::Up => Action::Increment,
            Direction::Down => Action::Decrement,
        }
    }
}
