// ============================================================================
// Stepper Errors
// ============================================================================

use thiserror::Error;

/// Errors raised by the stepper engine.
///
/// Malformed values are not errors: a non-numeric `value` is a legal
/// mid-edit state that `Coerce` repairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum StepperError {
    /// An action discriminant outside `increment`, `decrement`, `coerce`,
    /// `setValue`
    #[error("unsupported action type: {kind}")]
    UnsupportedAction { kind: String },
}

/// Result type alias for stepper operations
pub type StepperResult<T> = Result<T, StepperError>;
