//! Conversions between entry text and `f64`

use crate::config::NonFiniteStyle;

/// Reads an entry as a number.
///
/// Text that is not a number (a lone `.` or `-`, a half-deleted `inf`)
/// reads as NaN, so arithmetic on it stays total.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders a result as entry text.
///
/// Integral values have no fractional part, other finite values use the
/// shortest round-trip form without exponent notation. Negative zero
/// renders as `0`.
#[must_use]
pub fn format_value(value: f64, style: NonFiniteStyle) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = match style {
            NonFiniteStyle::Rust => "inf",
            NonFiniteStyle::Javascript => "Infinity",
        };
        return if value.is_sign_negative() {
            format!("-{text}")
        } else {
            text.to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
