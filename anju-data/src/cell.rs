//! Tolerant spreadsheet cells.
//!
//! Exported sheets mix numbers, numeric strings, blanks and stray text in
//! the same column. [`Cell`] accepts any JSON scalar and converts it on
//! demand, never failing.

use serde::Deserialize;
use serde_json::Value;

/// Parse `raw` as an integer, returning `0` when it is not numeric.
///
/// Surrounding whitespace is ignored and fractional values truncate toward
/// zero. Non-finite or unparsable input yields `0`.
///
/// # Examples
/// ```
/// use anju_data::parse_number_or_zero;
///
/// assert_eq!(parse_number_or_zero(" 3 "), 3);
/// assert_eq!(parse_number_or_zero("2.9"), 2);
/// assert_eq!(parse_number_or_zero("매움"), 0);
/// assert_eq!(parse_number_or_zero(""), 0);
/// ```
#[must_use]
pub fn parse_number_or_zero(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(truncate_float))
        .unwrap_or(0)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "spreadsheet numbers are truncated toward zero; `as` saturates out-of-range values"
)]
fn truncate_float(value: f64) -> i64 {
    if value.is_finite() { value as i64 } else { 0 }
}

/// A single spreadsheet cell of unknown type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Cell(Value);

impl Cell {
    /// Wrap an arbitrary JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The cell as text: strings verbatim, numbers and booleans rendered,
    /// blanks and nested values as the empty string.
    #[must_use]
    pub fn text(&self) -> String {
        match &self.0 {
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
        }
    }

    /// The cell as an integer, defaulting to `0`.
    ///
    /// Booleans count as `1` and `0`.
    #[must_use]
    pub fn number(&self) -> i64 {
        match &self.0 {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(truncate_float))
                .unwrap_or(0),
            Value::String(text) => parse_number_or_zero(text),
            Value::Bool(flag) => i64::from(*flag),
            Value::Null | Value::Array(_) | Value::Object(_) => 0,
        }
    }

    /// The cell as an unsigned count; negative or oversized values become `0`.
    #[must_use]
    pub fn count(&self) -> u32 {
        u32::try_from(self.number()).unwrap_or(0)
    }

    /// Whether the cell holds the numeric flag value `1`.
    #[must_use]
    pub fn flag(&self) -> bool {
        self.number() == 1
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self(Value::String(text.to_owned()))
    }
}

impl From<i64> for Cell {
    fn from(number: i64) -> Self {
        Self(Value::from(number))
    }
}
