// ============================================================================
// Numeric Module
// Decimal-safe arithmetic and the text boundary for stepper values
// ============================================================================
//
// This module provides:
// - sum / count_decimals: addition that avoids binary floating-point drift
// - parse_float / format_number: lenient parsing and canonical rendering
//
// Design principles:
// - Parse failures are values (NaN), never errors
// - Rendering is the shortest text that parses back to the same f64

mod decimals;
mod text;

pub use decimals::{count_decimals, sum, DecimalText};
pub use text::{format_number, parse_float};
