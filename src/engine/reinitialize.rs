// ============================================================================
// Reinitialization Policy
// Follow a changing external default while the value is untouched
// ============================================================================

/// One slot of `default_value` history across reconfiguration cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultHistory {
    previous: Option<f64>,
    current: f64,
}

impl DefaultHistory {
    /// History at construction: no previous cycle yet
    pub fn new(initial: f64) -> Self {
        Self {
            previous: None,
            current: initial,
        }
    }

    /// Shift the history forward by one cycle
    pub fn advance(self, next: f64) -> Self {
        Self {
            previous: Some(self.current),
            current: next,
        }
    }

    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Check if the default differs from the prior cycle's
    pub fn changed(&self) -> bool {
        self.previous.is_some_and(|previous| previous != self.current)
    }
}

/// Decide whether the value should jump to the new default.
///
/// Returns the new default when reinitialization is enabled, the default
/// changed in this cycle, and `current_numeric` still equals the previous
/// default (the user never moved away from it).
pub fn reinitialize_target(
    history: &DefaultHistory,
    enable_reinitialize: bool,
    current_numeric: f64,
) -> Option<f64> {
    if !enable_reinitialize || !history.changed() {
        return None;
    }

    match history.previous {
        Some(previous) if previous == current_numeric => Some(history.current),
        _ => None,
    }
}
