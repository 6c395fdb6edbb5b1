//! Lenient numeric coercion for provider payloads.

use serde_json::Value;

/// Placeholder strings providers use in place of a number.
const MISSING_TOKENS: [&str; 4] = ["None", "NA", "nan", "-"];

/// Coerces a provider value into a finite `f64`.
///
/// Returns `None` for missing/null values, empty strings, the placeholder
/// tokens `None`, `NA`, `nan` and `-`, unparseable text, and non-finite
/// results (`NaN`, `inf`). Zero and negative numbers are kept.
///
/// ```
/// use equity_metrics::core::conversions::safe_numeric;
/// use serde_json::json;
///
/// assert_eq!(safe_numeric(Some(&json!("12.5"))), Some(12.5));
/// assert_eq!(safe_numeric(Some(&json!("NA"))), None);
/// assert_eq!(safe_numeric(None), None);
/// ```
#[must_use]
pub fn safe_numeric(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_numeric_str(s),
        _ => None,
    }
}

/// String form of [`safe_numeric`].
#[must_use]
pub fn parse_numeric_str(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || MISSING_TOKENS.contains(&s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads a string field, treating blanks and placeholder tokens as missing.
pub(crate) fn text_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty() && !MISSING_TOKENS.contains(s))
        .map(str::to_string)
}
