//! The static value/dtype compatibility table.

use serde_json::Value;

use crate::schema::Dtype;

/// Literal tokens accepted as binary values besides real booleans.
const BINARY_TOKENS: &[&str] = &["0", "1", "true", "false", "True", "False"];

/// Whether a raw JSON value is acceptable for a declared dtype.
///
/// Null/absent values are never rejected. Unrecognized dtypes accept
/// anything, so a schema evolution upstream never blocks extraction.
pub(crate) fn value_matches_dtype(dtype: Dtype, value: &Value) -> bool {
    if value.is_null() {
        return true;
    }
    match dtype {
        Dtype::Continuous => value.is_number(),
        Dtype::Binary => match value {
            Value::Bool(_) => true,
            Value::Number(n) => n.as_f64() == Some(0.0) || n.as_f64() == Some(1.0),
            Value::String(s) => BINARY_TOKENS.contains(&s.as_str()),
            _ => false,
        },
        Dtype::Count => match value {
            Value::Number(n) => match n.as_f64() {
                // Integer, or a real equal to its own floor and >= 0.
                Some(f) => n.is_i64() || n.is_u64() || (f >= 0.0 && f.fract() == 0.0),
                None => false,
            },
            _ => false,
        },
        Dtype::Ordinal => value.is_number() || value.is_string(),
        Dtype::Categorical => value.is_string(),
        Dtype::Other => true,
    }
}
