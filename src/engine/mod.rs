// ============================================================================
// Engine Module
// Contains the stepper transition logic and its controller
// ============================================================================

mod controller;
mod default_reducer;

pub mod reinitialize;

pub use controller::{StepperController, StepperSnapshot};
pub use default_reducer::DefaultReducer;
pub use reinitialize::{reinitialize_target, DefaultHistory};
