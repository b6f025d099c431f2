use crate::errors::{Error, Result};

/// Magnitudes at or beyond this are written in exponent form
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this are written in exponent form
const EXPONENT_BELOW: f64 = 1e-7;

/// Formats a result for display and history. The output is the shortest
/// decimal that reads back as the same value, so it can seed a new
/// expression without drift.
pub fn format_number(value: f64) -> String {
    // Also catches negative zero
    if value == 0.0 {
        return String::from("0");
    }

    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Reads a plain numeric operand such as the display buffer of the basic
/// calculator
pub fn parse_operand(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(Error::InvalidOperand(format!(
            "'{}' is not a number",
            trimmed
        ))),
    }
}
