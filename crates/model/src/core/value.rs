use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, hash::Hash};

/// The value carried by an annotation.
///
/// Serialized untagged so annotation values in model files read as plain JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use Value::*;
        std::mem::discriminant(self).hash(state);
        match self {
            Null => {}
            Bool(v) => v.hash(state),
            Int(v) => v.hash(state),
            Uint(v) => v.hash(state),
            Float(v) => {
                // Hash the bits of the float to handle NaN and -0.0 consistently
                v.to_bits().hash(state);
            }
            String(v) => v.hash(state),
            Array(v) => v.hash(state),
            Object(v) => v.hash(state),
        }
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Flattens an array into its elements; any other value becomes a single element.
    pub fn spread(&self) -> Vec<Value> {
        match self {
            Value::Array(items) => items.clone(),
            other => vec![other.clone()],
        }
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

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn test_untagged_deserialize() {
        let value: Value = serde_json::from_str(r#"["a", 1, 2.5, true, null]"#).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::from("a"),
                Value::Int(1),
                Value::Float(2.5),
                Value::Bool(true),
                Value::Null,
            ])
        );
    }

    #[test]
    fn test_spread_scalar_and_array() {
        assert_eq!(Value::from("x").spread(), vec![Value::from("x")]);
        assert_eq!(
            Value::from(vec!["a", "b"]).spread(),
            vec![Value::from("a"), Value::from("b")]
        );
    }

    #[test]
    fn test_deserialize_unsigned_beyond_i64() {
        let value: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value, Value::Uint(u64::MAX));

        let value: Value = serde_json::from_str("-5").unwrap();
        assert_eq!(value, Value::Int(-5));
    }

    #[test]
    fn test_deserialize_object() {
        let value: Value = serde_json::from_str(r#"{"b": [1], "a": "x"}"#).unwrap();
        let Value::Object(map) = &value else {
            panic!("expected object, got {value:?}");
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map["a"], Value::from("x"));
        assert_eq!(map["b"], Value::from(vec![1i64]));
    }
}
