use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A single cell of a report row: a number, some text, or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the value. Text counts when the whole string, after
    /// trimming, parses as a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Text view of the value, as shown in a table cell.
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Null => String::new(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        if n.is_finite() {
            Self::Number(n)
        } else {
            Self::Null
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(v: &serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Number(n) => n.as_f64().map(Self::from).unwrap_or(Self::Null),
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(b) => Self::Text(b.to_string()),
            // Nested structures have no meaningful ordering
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Null,
        }
    }
}

/// Read access to named fields of a report row.
///
/// Missing fields read as [`FieldValue::Null`].
pub trait FieldAccess {
    fn field_value(&self, field: &str) -> FieldValue;
}

impl FieldAccess for serde_json::Map<String, serde_json::Value> {
    fn field_value(&self, field: &str) -> FieldValue {
        self.get(field).map(FieldValue::from).unwrap_or(FieldValue::Null)
    }
}

impl FieldAccess for serde_json::Value {
    fn field_value(&self, field: &str) -> FieldValue {
        match self {
            serde_json::Value::Object(map) => map.field_value(field),
            _ => FieldValue::Null,
        }
    }
}

impl FieldAccess for HashMap<String, FieldValue> {
    fn field_value(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or(FieldValue::Null)
    }
}

impl FieldAccess for BTreeMap<String, FieldValue> {
    fn field_value(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or(FieldValue::Null)
    }
}
