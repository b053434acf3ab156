//! Structural deep equality
//!
//! [`Value`] is a closed set of value kinds. [`equals`] compares two values
//! kind by kind; values of different kinds are never equal.

use indexmap::IndexMap;

/// A dynamically shaped value that can be compared structurally
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Point in time as milliseconds since the Unix epoch
    Date(i64),
    /// Regular expression compared by its literal `/source/flags` form
    Regex { source: String, flags: String },
    Array(Vec<Value>),
    /// Keyed map, insertion ordered
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn date(epoch_ms: i64) -> Self {
        Value::Date(epoch_ms)
    }

    pub fn regex(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::Regex {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Build an object from key/value pairs
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short name of the value kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Regex { .. } => "regex",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Deep structural equality.
///
/// Numbers follow IEEE comparison (`NaN` is unequal to itself, `0.0 == -0.0`).
/// Objects are equal when they hold the same keys with equal values; key order
/// does not matter.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x == y,
        (
            Value::Regex {
                source: sa,
                flags: fa,
            },
            Value::Regex {
                source: sb,
                flags: fb,
            },
        ) => sa == sb && fa == fb,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| equals(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| equals(x, y)))
        }
        _ => false,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64) -> Value {
        Value::object([("x", Value::Number(x))])
    }

    #[test]
    fn test_value_equals_itself() {
        let samples = [
            Value::Null,
            Value::Bool(true),
            Value::Number(1.5),
            Value::from("thing"),
            Value::date(1_700_000_000_000),
            Value::regex("a+b", "gi"),
            Value::Array(vec![Value::Null, Value::Number(2.0)]),
            point(1.0),
        ];
        for v in &samples {
            assert!(equals(v, v), "{} should equal itself", v.kind());
        }
    }

    #[test]
    fn test_objects() {
        assert!(equals(&point(1.0), &point(1.0)));
        assert!(!equals(&point(1.0), &point(2.0)));

        let ab = Value::object([("a", Value::Number(1.0)), ("b", Value::Number(2.0))]);
        let ba = Value::object([("b", Value::Number(2.0)), ("a", Value::Number(1.0))]);
        assert!(equals(&ab, &ba));
        assert!(!equals(&ab, &point(1.0)));
    }

    #[test]
    fn test_dates_compare_by_timestamp() {
        let t = 1_234_567_890_123;
        assert!(equals(&Value::date(t), &Value::date(t)));
        assert!(!equals(&Value::date(t), &Value::date(t + 1)));
        assert!(!equals(&Value::date(t), &Value::Number(t as f64)));
    }

    #[test]
    fn test_regex_compares_source_and_flags() {
        assert!(equals(&Value::regex("ab+", "g"), &Value::regex("ab+", "g")));
        assert!(!equals(&Value::regex("ab+", "g"), &Value::regex("ab+", "i")));
        assert!(!equals(&Value::regex("ab+", ""), &Value::from("/ab+/")));
    }

    #[test]
    fn test_numbers_use_ieee_equality() {
        assert!(!equals(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
        assert!(equals(&Value::Number(0.0), &Value::Number(-0.0)));
    }

    #[test]
    fn test_nested_arrays() {
        let a = Value::Array(vec![point(1.0), Value::Array(vec![Value::Null])]);
        let b = Value::Array(vec![point(1.0), Value::Array(vec![Value::Null])]);
        let c = Value::Array(vec![point(1.0)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_kinds_never_mix() {
        assert!(!equals(&Value::Null, &Value::Bool(false)));
        assert!(!equals(&Value::from("1"), &Value::Number(1.0)));
        assert!(!equals(
            &Value::Array(vec![Value::Number(1.0)]),
            &Value::object([("0", Value::Number(1.0))])
        ));
    }

    #[test]
    fn test_from_json() {
        let a: serde_json::Value = serde_json::json!({"x": 1, "tags": ["a", null]});
        let b: serde_json::Value = serde_json::json!({"tags": ["a", null], "x": 1.0});
        assert!(equals(&Value::from(a), &Value::from(b)));
    }
}
