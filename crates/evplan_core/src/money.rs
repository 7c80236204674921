//! Parsing of the text fields a record is entered with.
//!
//! Amounts follow the Indonesian convention used for Rupiah: `.` groups
//! thousands and there is no decimal separator, so `"1.500.000"` is one and a
//! half million. Probabilities are plain decimals (`"0.35"`) and are not
//! stripped.

use crate::error::{DecisionError, InputField, Result};

/// Thousands separator accepted in monetary amounts
pub const THOUSANDS_SEPARATOR: char = '.';

/// Parse a `.`-grouped monetary amount into a plain number.
pub fn parse_amount(text: &str, field: InputField) -> Result<f64> {
    let stripped: String = text
        .trim()
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .collect();

    parse_finite(&stripped).ok_or_else(|| DecisionError::invalid(field, text))
}

/// Parse a probability. Range is not validated.
pub fn parse_probability(text: &str) -> Result<f64> {
    parse_finite(text.trim()).ok_or_else(|| DecisionError::invalid(InputField::Probability, text))
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format an amount back into the input convention (`1500000` -> `"1.500.000"`).
///
/// Fractional parts are rounded away since the input format cannot carry them.
pub fn format_amount_input(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
