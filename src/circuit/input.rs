//! Field text normalization.
//!
//! Raw text typed into a field is turned into `Option<f64>` before it reaches
//! the solver. Anything that cannot take part in a computation (empty,
//! non-numeric, zero, negative, infinite) becomes `None`.

use crate::solver::MAX_DECIMALS;

/// Parse the text of a calculator field.
///
/// Reads the longest leading decimal literal and ignores whatever follows,
/// so `"12.5 A"` reads as `12.5`. A comma is not a decimal separator.
pub fn parse_field(raw: &str) -> Option<f64> {
    let value = leading_number(raw.trim())?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Normalize a numeric value coming from a typed front end.
pub fn normalize_value(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Round to a fixed number of decimals, as displayed in a field.
///
/// Rounds the exact binary value, so 0.015 (stored just below the tie)
/// gives 0.01. Exact ties such as 0.125 round away from zero (0.13).
/// `decimals` is capped at [`MAX_DECIMALS`].
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let decimals = decimals.min(MAX_DECIMALS);
    let precision = decimals as usize;

    // Scaling by a power of two is exact: an odd integer here means the
    // expansion stops at digit decimals + 1 and that digit is a 5
    let half_steps = value * 2f64.powi(decimals as i32 + 1);
    let exact_tie = half_steps.fract() == 0.0 && half_steps % 2.0 != 0.0;

    let text = if exact_tie {
        let tie = format!("{:.*}", precision + 1, value);
        let truncated: f64 = tie[..tie.len() - 1].parse().unwrap_or(value);
        let step = 10f64.powi(-(decimals as i32)).copysign(value);
        format!("{:.*}", precision, truncated + step)
    } else {
        format!("{:.*}", precision, value)
    };

    text.parse().unwrap_or(value)
}

/// Render a field value with fixed decimals; empty fields render as "".
pub fn format_field(value: Option<f64>, decimals: u32) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals.min(MAX_DECIMALS) as usize, v),
        None => String::new(),
    }
}

fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let is_digit = |i: usize| i < len && bytes[i].is_ascii_digit();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
