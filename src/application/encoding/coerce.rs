//! Numeric coercion for loosely typed payload fields.

use crate::domain::errors::EncodeError;
use serde_json::Value;

/// Coerces a JSON number or numeric string into f64. These fields have no
/// safe default, so failure rejects the whole request.
pub fn required_f64(field: &'static str, value: &Value) -> Result<f64, EncodeError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| not_numeric(field, value)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| not_numeric(field, value)),
        _ => Err(not_numeric(field, value)),
    }
}

/// Lenient integer coercion for `ad_view_cnt`: anything non-numeric counts as
/// zero views, matching how the training data was cleaned.
pub fn lenient_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as i64).unwrap_or(0),
        Value::String(s) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
        _ => 0,
    }
}

fn not_numeric(field: &'static str, value: &Value) -> EncodeError {
    EncodeError::NotNumeric {
        field,
        value: value.to_string(),
    }
}
