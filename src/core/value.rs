//! Loggable value variants
//!
//! Arguments to the level methods are a closed set of variants rather than
//! arbitrary dynamic values: strings, numbers, booleans, null, and
//! object-shaped maps. Objects merge their fields into the record; every
//! other variant contributes its string form to the `msg` field. Falsy
//! values are dropped silently.

use serde_json::{Map, Value};
use std::fmt;

/// A single loggable argument.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Object-shaped value whose fields are merged into the record.
    Object(Map<String, Value>),
}

impl LogValue {
    /// Falsy values are skipped by the record builder: null, the empty
    /// string, zero, and `false`. Objects are never falsy, even when empty.
    pub fn is_falsy(&self) -> bool {
        match self {
            LogValue::Null => true,
            LogValue::Str(s) => s.is_empty(),
            LogValue::Int(i) => *i == 0,
            LogValue::Float(f) => *f == 0.0,
            LogValue::Bool(b) => !b,
            LogValue::Object(_) => false,
        }
    }

    /// The merged-field view, if this value is object-shaped.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            LogValue::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Null => write!(f, "null"),
            LogValue::Str(s) => write!(f, "{}", s),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::Float(fl) => write!(f, "{}", fl),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Object(fields) => write!(f, "{}", Value::Object(fields.clone())),
        }
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Str(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Str(s)
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<Map<String, Value>> for LogValue {
    fn from(fields: Map<String, Value>) -> Self {
        LogValue::Object(fields)
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LogValue::Null,
            Value::Bool(b) => LogValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => LogValue::Int(i),
                None => LogValue::Float(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => LogValue::Str(s),
            // Arrays are not object-shaped; they contribute to `msg`.
            Value::Array(_) => LogValue::Str(value.to_string()),
            Value::Object(fields) => LogValue::Object(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        assert!(LogValue::Null.is_falsy());
        assert!(LogValue::from("").is_falsy());
        assert!(LogValue::from(0).is_falsy());
        assert!(LogValue::from(0.0).is_falsy());
        assert!(LogValue::from(false).is_falsy());
    }

    #[test]
    fn test_truthy_values() {
        assert!(!LogValue::from("hello").is_falsy());
        assert!(!LogValue::from(1).is_falsy());
        assert!(!LogValue::from(-1.5).is_falsy());
        assert!(!LogValue::from(true).is_falsy());
        // An empty object still merges (to nothing) rather than being dropped
        assert!(!LogValue::Object(Map::new()).is_falsy());
    }

    #[test]
    fn test_from_json_value() {
        assert_eq!(LogValue::from(json!(null)), LogValue::Null);
        assert_eq!(LogValue::from(json!(42)), LogValue::Int(42));
        assert_eq!(LogValue::from(json!(2.5)), LogValue::Float(2.5));
        assert_eq!(LogValue::from(json!("hi")), LogValue::Str("hi".into()));
        assert_eq!(LogValue::from(json!([1, 2])), LogValue::Str("[1,2]".into()));
        assert!(LogValue::from(json!({"a": 1})).as_object().is_some());
    }

    #[test]
    fn test_display() {
        assert_eq!(LogValue::from("hello").to_string(), "hello");
        assert_eq!(LogValue::from(7).to_string(), "7");
        assert_eq!(LogValue::from(true).to_string(), "true");
        assert_eq!(LogValue::Null.to_string(), "null");
    }
}
