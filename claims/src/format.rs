//! Text formatting for record fields in tables, modals, and CSV cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde_json::Value;

/// Placeholder for a score the backend did not provide.
pub const MISSING: &str = "-";

/// Render a JSON value as plain display text.
///
/// Strings are written without quotes, `null` is empty, and nested
/// arrays/objects fall back to compact JSON.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                n.to_string()
            } else {
                n.as_f64().map(format_number).unwrap_or_default()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Shortest display form of a float; integral values drop the `.0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    value.to_string()
}

/// Score cell text, `-` when the score is absent.
#[must_use]
pub fn score_label(score: Option<f64>) -> String {
    score.map_or_else(|| MISSING.to_owned(), format_number)
}

/// Anomaly score with fixed 4-decimal precision, `-` when absent.
#[must_use]
pub fn anomaly_label(score: Option<f64>) -> String {
    score.map_or_else(|| MISSING.to_owned(), |v| format!("{v:.4}"))
}
