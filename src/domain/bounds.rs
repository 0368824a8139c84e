// ============================================================================
// Bounds Policy
// Inclusive range clamping for stepper values
// ============================================================================

use crate::numeric::{format_number, parse_float};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` interval.
///
/// No relationship between `min` and `max` is enforced. When `min > max`
/// every candidate clamps to `max`, because the lower bound is applied
/// first and the upper bound last.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// The full finite range, effectively unbounded
    pub const UNBOUNDED: Self = Self {
        min: -f64::MAX,
        max: f64::MAX,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `candidate` into the interval.
    ///
    /// `NaN` propagates: a non-numeric candidate stays `NaN`.
    #[inline]
    pub fn clamp(&self, candidate: f64) -> f64 {
        nan_min(self.max, nan_max(candidate, self.min))
    }

    /// Parse `raw` leniently, clamp it, and render the result.
    ///
    /// Non-numeric text renders as `"NaN"`.
    pub fn clamp_text(&self, raw: &str) -> String {
        format_number(self.clamp(parse_float(raw)))
    }

    /// Check whether `value` lies inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

// f64::min / f64::max drop NaN operands; the stepper needs them to propagate

#[inline]
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a >= b {
        a
    } else {
        b
    }
}

#[inline]
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a <= b {
        a
    } else {
        b
    }
}
