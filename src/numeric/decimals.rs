// ============================================================================
// Decimal-Safe Arithmetic
// Addition that matches decimal arithmetic instead of binary approximation
// ============================================================================

use super::text::format_number;
use std::borrow::Cow;

/// Anything whose decimal digits can be counted from its textual form.
pub trait DecimalText {
    /// The text the decimal count is read from.
    fn decimal_text(&self) -> Cow<'_, str>;
}

impl DecimalText for f64 {
    fn decimal_text(&self) -> Cow<'_, str> {
        Cow::Owned(format_number(*self))
    }
}

impl DecimalText for str {
    fn decimal_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl DecimalText for String {
    fn decimal_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Count the decimal digits of a number or numeric text.
///
/// Exponential text is read as mantissa and exponent: `"5e-6"` has 6
/// decimals, `"1.5e-7"` has 8, `"1e+21"` has none. Everything else counts
/// the characters after the first decimal point, or 0 when there is none.
///
/// # Example
/// ```
/// use numeric_stepper::numeric::count_decimals;
///
/// assert_eq!(count_decimals(&0.0001232), 7);
/// assert_eq!(count_decimals("0.000420"), 6);
/// assert_eq!(count_decimals("5e-6"), 6);
/// ```
pub fn count_decimals<T: DecimalText + ?Sized>(value: &T) -> u32 {
    let text = value.decimal_text();

    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&text[..pos], leading_exponent(&text[pos + 1..])),
        None => (&text[..], 0),
    };

    let fraction = mantissa
        .split('.')
        .nth(1)
        .map_or(0, |digits| digits.chars().count() as i64);

    u32::try_from((fraction - exponent).max(0)).unwrap_or(u32::MAX)
}

/// Signed integer prefix of an exponent, 0 when there is none
fn leading_exponent(text: &str) -> i64 {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let magnitude: i64 = digits.parse().unwrap_or(0);

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Add two numbers without binary floating-point drift.
///
/// Both operands are scaled by `10^d`, where `d` is the larger of their
/// decimal counts, rounded to integers, summed, then scaled back.
/// `sum(0.1, 0.2)` is exactly `0.3` and `sum(1.13, 0.01)` is `1.14`.
///
/// `NaN` is absorbing in the lenient direction: a `NaN` operand is
/// ignored and the other operand is returned unchanged.
pub fn sum(a: f64, b: f64) -> f64 {
    if a.is_nan() {
        return b;
    }
    if b.is_nan() {
        return a;
    }

    let decimals = count_decimals(&a).max(count_decimals(&b));
    let alpha = 10f64.powf(f64::from(decimals));

    // a * alpha is integral in decimal terms; rounding drops the binary error
    let scaled = ((a * alpha).round() + (b * alpha).round()) / alpha;

    // Scaling overflowed: subnormal operands need more than 308 decimals
    if !scaled.is_finite() && a.is_finite() && b.is_finite() {
        return a + b;
    }

    scaled
}
