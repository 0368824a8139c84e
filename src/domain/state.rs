// ============================================================================
// Stepper State
// ============================================================================

use crate::numeric::{format_number, parse_float};
use rust_decimal::Decimal;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Textual value of a stepper.
///
/// The text is not guaranteed to be numeric: while the user is typing it
/// may hold any free-text edit (`"-"`, `"1."`, `""`). It is numeric after
/// a `Coerce` or any bounds-aware transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    value: String,
}

impl State {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// State holding the canonical text of `value`
    pub fn from_number(value: f64) -> Self {
        Self::new(format_number(value))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Lenient numeric reading of the value; `NaN` for non-numeric text.
    pub fn numeric(&self) -> f64 {
        parse_float(&self.value)
    }

    /// Exact decimal reading of the value.
    ///
    /// Intended for API boundaries (form submission, persistence). Unlike
    /// [`State::numeric`] this is strict: partial edits yield `None`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let text = self.value.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl From<&str> for State {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for State {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
