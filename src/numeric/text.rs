// ============================================================================
// Number Text
// Lenient parsing and canonical rendering of stepper values
// ============================================================================

/// Magnitude at which rendering switches to exponential notation.
const EXPONENTIAL_UPPER: i32 = 21;

/// Magnitude below which rendering switches to exponential notation.
const EXPONENTIAL_LOWER: i32 = -6;

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so a
/// half-typed edit like `"12px"` still reads as `12`. Text without a
/// numeric prefix (`""`, `"-"`, `"abc"`) yields `NaN`.
///
/// # Examples
/// - `"  3.5"` -> 3.5
/// - `"1e3kg"` -> 1000
/// - `"-Infinity"` -> -inf
/// - `"."` -> NaN
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows the marker
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+') | Some(b'-')) {
            cursor += 1;
        }
        let exp_digits = count_digits(&bytes[cursor.min(bytes.len())..]);
        if exp_digits > 0 {
            end = cursor + exp_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render `value` as the shortest text that parses back to the same number.
///
/// Plain decimal notation is used for magnitudes in `[1e-6, 1e21)`;
/// outside that range the output is exponential (`5e-7`, `1e+21`).
/// Negative zero renders as `"0"`, non-finite values as `"NaN"`,
/// `"Infinity"` and `"-Infinity"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // value = 0.d1d2...dk * 10^point
    let k = digits.len() as i32;
    let point = exponent + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }

    if k <= point && point <= EXPONENTIAL_UPPER {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= EXPONENTIAL_UPPER {
        let (int_part, frac_part) = digits.split_at(point as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if EXPONENTIAL_LOWER < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if exponent >= 0 { '+' } else { '-' });
        out.push_str(&exponent.unsigned_abs().to_string());
    }

    out
}
