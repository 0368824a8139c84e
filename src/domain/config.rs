// ============================================================================
// Stepper Configuration
// Baseline, step size, bounds and reinitialization behavior
// ============================================================================

use super::bounds::Bounds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a stepper controller.
///
/// Fields are independent: nothing is cross-validated, so `min > max` is
/// accepted and resolved by [`Bounds::clamp`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StepperConfig {
    /// Initial value, and the value a non-numeric edit is coerced back to
    pub default_value: f64,

    /// Magnitude of a single increment or decrement
    pub step: f64,

    /// Inclusive lower bound (default: `-f64::MAX`)
    pub min: f64,

    /// Inclusive upper bound (default: `f64::MAX`)
    pub max: f64,

    /// Follow changes of `default_value` while the value is untouched
    pub enable_reinitialize: bool,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            default_value: 0.0,
            step: 1.0,
            min: Bounds::UNBOUNDED.min,
            max: Bounds::UNBOUNDED.max,
            enable_reinitialize: false,
        }
    }
}

impl StepperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the default value
    pub fn with_default_value(mut self, default_value: f64) -> Self {
        self.default_value = default_value;
        self
    }

    /// Builder method: Set the step size
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Builder method: Set the lower bound
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Builder method: Set the upper bound
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Builder method: Set both bounds
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Builder method: Enable or disable reinitialization
    pub fn with_reinitialize(mut self, enable: bool) -> Self {
        self.enable_reinitialize = enable;
        self
    }

    /// The clamping interval for this configuration
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min, self.max)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl StepperConfig {
    /// Whole percentages
    /// - Range: 0 to 100
    /// - Step: 1
    pub fn percentage() -> Self {
        Self::new().with_bounds(0.0, 100.0)
    }

    /// Non-negative amounts in cents
    /// - Range: 0 upwards
    /// - Step: 0.01
    pub fn currency() -> Self {
        Self::new().with_min(0.0).with_step(0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StepperConfig::default();
        assert_eq!(config.default_value, 0.0);
        assert_eq!(config.step, 1.0);
        assert_eq!(config.min, -f64::MAX);
        assert_eq!(config.max, f64::MAX);
        assert!(!config.enable_reinitialize);
        assert_eq!(config.bounds(), Bounds::UNBOUNDED);
    }

    #[test]
    fn test_builder_pattern() {
        let config = StepperConfig::new()
            .with_default_value(5.0)
            .with_step(0.5)
            .with_bounds(1.0, 10.0)
            .with_reinitialize(true);

        assert_eq!(config.default_value, 5.0);
        assert_eq!(config.step, 0.5);
        assert_eq!(config.bounds(), Bounds::new(1.0, 10.0));
        assert!(config.enable_reinitialize);
    }

    #[test]
    fn test_inverted_bounds_accepted() {
        let config = StepperConfig::new().with_min(10.0).with_max(1.0);
        assert_eq!(config.bounds().clamp(5.0), 1.0);
    }

    #[test]
    fn test_preset_configs() {
        let pct = StepperConfig::percentage();
        assert_eq!(pct.bounds(), Bounds::new(0.0, 100.0));
        assert_eq!(pct.step, 1.0);

        let cash = StepperConfig::currency();
        assert_eq!(cash.min, 0.0);
        assert_eq!(cash.max, f64::MAX);
        assert_eq!(cash.step, 0.01);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: StepperConfig =
            serde_json::from_str(r#"{"defaultValue": 33, "enableReinitialize": true}"#).unwrap();
        assert_eq!(config.default_value, 33.0);
        assert_eq!(config.step, 1.0);
        assert_eq!(config.max, f64::MAX);
        assert!(config.enable_reinitialize);
    }
}
