//! Numeric display formatting (pure).
//!
//! Turns an `f64` into the text shown on the calculator. Binary noise is
//! rounded away at 10 decimal places. Text longer than the 12-character
//! display, and magnitudes beyond `1e10`, are shown in exponential form.
//! Anything else keeps at most 8 fractional digits.

use crate::model::{CalcError, ERROR_TEXT, ZERO_TEXT};

/// Maximum length of plain decimal text, sign and decimal point included.
pub const MAX_DISPLAY_LENGTH: usize = 12;

/// Magnitudes above this are rendered in exponential notation.
pub const EXPONENTIAL_THRESHOLD: f64 = 1e10;

/// Fractional digits kept in plain decimal text.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Fractional digits of the exponential mantissa.
pub const EXPONENT_FRACTION_DIGITS: usize = 6;

const ROUNDING_SCALE: f64 = 1e10;

/// Render a number for display.
///
/// Returns the sentinel `"Error"` for NaN and infinities. Never returns an
/// empty string and never returns `"-0"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let rounded = round_noise(value);
    if rounded == 0.0 {
        return ZERO_TEXT.to_string();
    }

    let shortest = rounded.to_string();
    if rounded.abs() > EXPONENTIAL_THRESHOLD || shortest.len() > MAX_DISPLAY_LENGTH {
        return exponential(rounded);
    }

    if fraction_digits(&shortest) > MAX_FRACTION_DIGITS {
        cap_fraction(rounded)
    } else {
        shortest
    }
}

/// Like [`format_number`], but reports the error sentinel as
/// [`CalcError::NonFiniteResult`].
pub fn try_format(value: f64) -> Result<String, CalcError> {
    let text = format_number(value);
    if text == ERROR_TEXT {
        Err(CalcError::NonFiniteResult)
    } else {
        Ok(text)
    }
}

/// Parse display or operand text. Returns `None` for anything that is not
/// a finite number (including the error sentinel).
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to 10 decimal places. Values too large to scale are returned as-is.
fn round_noise(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if scaled.is_finite() {
        scaled.round() / ROUNDING_SCALE
    } else {
        value
    }
}

fn fraction_digits(text: &str) -> usize {
    text.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

/// Fixed-point text with [`MAX_FRACTION_DIGITS`] places, trailing zeros
/// trimmed. A value that rounds away entirely renders as `"0"`.
fn cap_fraction(value: f64) -> String {
    let text = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "0" => ZERO_TEXT.to_string(),
        _ => trimmed.to_string(),
    }
}

/// Exponential text such as `1.234568e+12`.
fn exponential(value: f64) -> String {
    let raw = format!("{:.*e}", EXPONENT_FRACTION_DIGITS, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) if exp < 0 => format!("{}e-{}", mantissa, exp.unsigned_abs()),
            Ok(exp) => format!("{}e+{}", mantissa, exp),
            Err(_) => raw,
        },
        None => raw,
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
