//! Conversion from `serde_json::Value` (feature = `"json"`).
//!
//! HTTP test harnesses usually hold response bodies as `serde_json::Value`
//! already; these conversions hand them to the matcher without a
//! re-serialization round trip.

use crate::{Number, Value};

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => Self::Number(convert_number(n)),
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            serde_json::Value::Object(obj) => Self::Map(
                obj.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(convert_number(&n)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Self::Map(obj.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

fn convert_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Int(i128::from(i))
    } else if let Some(u) = n.as_u64() {
        Number::Int(i128::from(u))
    } else {
        // Without arbitrary_precision every non-integer is representable as f64.
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Superset match directly on `serde_json` values.
///
/// ```
/// use serde_json::json;
///
/// let body = json!({"uuid": "f4f6", "state": "present", "fencing": {}});
/// assert!(muster::matches_json(&body, &json!({"state": "present"})));
/// assert!(!muster::matches_json(&body, &json!({"state": "absent"})));
/// ```
#[must_use]
pub fn matches_json(actual: &serde_json::Value, pattern: &serde_json::Value) -> bool {
    crate::matches(&Value::from(actual), &Value::from(pattern))
}
