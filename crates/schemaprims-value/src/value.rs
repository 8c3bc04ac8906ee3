use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bigint::BigInt;

/// Insertion-ordered mapping of string keys to values.
pub type Map = IndexMap<String, Value>;

/// Shared absent value, handed out for mapping keys that do not exist.
pub static ABSENT: Value = Value::Absent;

/// A dynamically-typed subject value.
///
/// `Absent` and `Null` are different things: a mapping can hold a key whose
/// value is `Absent`, which is not the same as the key not existing, and
/// neither is the same as the key holding an explicit `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No value provided.
    #[default]
    Absent,
    /// Explicit null.
    Null,
    Bool(bool),
    /// IEEE-754 double. May hold NaN or infinities.
    Number(f64),
    BigInt(BigInt),
    String(String),
    /// Ordered sequence.
    Sequence(Vec<Value>),
    /// Plain key-value mapping.
    Mapping(Map),
}

/// Kind tag of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Absent,
    Null,
    Bool,
    Number,
    BigInt,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Absent => "absent",
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::BigInt => "bigint",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Absent => ValueKind::Absent,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::String(_) => ValueKind::String,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Map> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key in a mapping. Returns `None` for missing keys and for
    /// values that are not mappings; a present key holding `Absent` returns
    /// `Some(&Value::Absent)`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Exports to JSON the way `JSON.stringify` treats undefined: absent
    /// mapping entries are dropped, absent sequence items and a top-level
    /// absent become `null`. Bigints that do not fit 64 bits become decimal
    /// strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Absent | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::BigInt(n) => bigint_to_json(n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .filter(|(_, value)| !value.is_absent())
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

fn bigint_to_json(n: &BigInt) -> serde_json::Value {
    if let Some(v) = n.to_i64() {
        return serde_json::Value::from(v);
    }
    if let Some(v) = n.to_u64() {
        return serde_json::Value::from(v);
    }
    serde_json::Value::String(n.to_string())
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    /// Lossy above 2^53, like any double.
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Mapping(value)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().collect())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(_) => serializer.serialize_unit(),
            Value::BigInt(n) => match (n.to_i64(), n.to_u64()) {
                (Some(v), _) => serializer.serialize_i64(v),
                (None, Some(v)) => serializer.serialize_u64(v),
                (None, None) => serializer.collect_str(n),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(map) => {
                let present = map.values().filter(|value| !value.is_absent()).count();
                let mut out = serializer.serialize_map(Some(present))?;
                for (key, value) in map.iter().filter(|(_, value)| !value.is_absent()) {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_and_null_are_distinct() {
        assert_ne!(Value::Absent, Value::Null);
        assert!(Value::default().is_absent());
        assert!(ABSENT.is_absent());
        assert!(!Value::Null.is_absent());
    }

    #[test]
    fn get_distinguishes_missing_from_present_absent() {
        let mut subject = Value::from(json!({ "a": 1 }));
        subject
            .as_mapping_mut()
            .unwrap()
            .insert("b".to_string(), Value::Absent);

        assert_eq!(subject.get("a"), Some(&Value::Number(1.0)));
        assert_eq!(subject.get("b"), Some(&Value::Absent));
        assert_eq!(subject.get("c"), None);
        assert_eq!(Value::Null.get("a"), None);
    }

    #[test]
    fn mapping_keeps_insertion_order() {
        let subject: Value = [("z", 1), ("a", 2), ("m", 3)]
            .into_iter()
            .map(|(key, n)| (key.to_string(), Value::from(n)))
            .collect();
        let keys: Vec<&str> = subject
            .as_mapping()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn to_json_follows_stringify_rules() {
        let mut map = Map::new();
        map.insert("kept".to_string(), Value::from("v"));
        map.insert("dropped".to_string(), Value::Absent);
        map.insert(
            "items".to_string(),
            Value::Sequence(vec![Value::Absent, Value::from(true)]),
        );
        map.insert("big".to_string(), Value::BigInt(BigInt::from(u128::MAX)));
        map.insert("small".to_string(), Value::BigInt(BigInt::from(-7)));

        assert_eq!(
            Value::Mapping(map).to_json(),
            json!({
                "kept": "v",
                "items": [null, true],
                "big": u128::MAX.to_string(),
                "small": -7
            })
        );
        assert_eq!(Value::Absent.to_json(), json!(null));
        assert_eq!(Value::Number(f64::NAN).to_json(), json!(null));
    }

    #[test]
    fn serialize_matches_to_json() {
        let mut subject = Value::from(json!({ "a": [1, "x", null], "b": { "c": false } }));
        subject
            .as_mapping_mut()
            .unwrap()
            .insert("gone".to_string(), Value::Absent);

        let serialized = serde_json::to_value(&subject).unwrap();
        assert_eq!(serialized, subject.to_json());
    }

    #[test]
    fn deserialize_from_json_text() {
        let value: Value = serde_json::from_str(r#"{"list":[1,2],"flag":true}"#).unwrap();
        assert_eq!(
            value.get("list"),
            Some(&Value::Sequence(vec![Value::from(1), Value::from(2)]))
        );
        assert_eq!(value.get("flag").and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn kinds_have_stable_names() {
        assert_eq!(Value::Absent.kind().as_str(), "absent");
        assert_eq!(Value::from(1.5).kind().to_string(), "number");
        assert_eq!(Value::from(vec![]).kind(), ValueKind::Sequence);
        assert_eq!(Value::from(Map::new()).kind(), ValueKind::Mapping);
    }
}
