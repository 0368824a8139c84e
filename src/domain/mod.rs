// ============================================================================
// Domain Models Module
// Contains the stepper state, actions, configuration and bounds
// ============================================================================

pub mod action;
pub mod bounds;
pub mod config;
pub mod errors;
pub mod state;

pub use action::{Action, ActionKind, Direction};
pub use bounds::Bounds;
pub use config::StepperConfig;
pub use errors::{StepperError, StepperResult};
pub use state::State;
