//! Nested document model
//!
//! `NestedValue` is a closed set of cases the resolver knows how to walk:
//! strings and integers are leaves, `Map` is the only container, and
//! everything else (arrays, floats, booleans, null) is an opaque `Other`.

use std::collections::btree_map::{self, BTreeMap};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{NestedError, Result};

/// One value inside a nested document
#[derive(Debug, Clone, PartialEq)]
pub enum NestedValue {
    String(String),
    /// JSON numbers that fit in an `i64`
    Integer(i64),
    Map(Map),
    /// Anything else, kept as decoded
    Other(Value),
}

impl NestedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NestedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NestedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            NestedValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Short type name for logs and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            NestedValue::String(_) => "string",
            NestedValue::Integer(_) => "integer",
            NestedValue::Map(_) => "object",
            NestedValue::Other(v) => json_kind(v),
        }
    }
}

impl From<Value> for NestedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => NestedValue::String(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => NestedValue::Integer(i),
                None => NestedValue::Other(Value::Number(n)),
            },
            Value::Object(obj) => NestedValue::Map(Map::from(obj)),
            other => NestedValue::Other(other),
        }
    }
}

impl From<&str> for NestedValue {
    fn from(s: &str) -> Self {
        NestedValue::String(s.to_string())
    }
}

impl From<String> for NestedValue {
    fn from(s: String) -> Self {
        NestedValue::String(s)
    }
}

impl From<i64> for NestedValue {
    fn from(n: i64) -> Self {
        NestedValue::Integer(n)
    }
}

impl From<Map> for NestedValue {
    fn from(m: Map) -> Self {
        NestedValue::Map(m)
    }
}

impl From<NestedValue> for Value {
    fn from(value: NestedValue) -> Self {
        match value {
            NestedValue::String(s) => Value::String(s),
            NestedValue::Integer(n) => Value::from(n),
            NestedValue::Map(m) => Value::from(m),
            NestedValue::Other(v) => v,
        }
    }
}

impl Serialize for NestedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            NestedValue::String(s) => serializer.serialize_str(s),
            NestedValue::Integer(n) => serializer.serialize_i64(*n),
            NestedValue::Map(m) => m.serialize(serializer),
            NestedValue::Other(v) => v.serialize(serializer),
        }
    }
}

/// String-keyed mapping, the root of every lookup
///
/// Never mutated by a lookup. Key order is not significant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map(BTreeMap<String, NestedValue>);

impl Map {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode JSON text into a map
    ///
    /// Fails with `InvalidInput` when the text is valid JSON but not an object.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Take an already-decoded value, which must be a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(Map::from(obj)),
            other => Err(NestedError::InvalidInput {
                found: json_kind(&other),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&NestedValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<NestedValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, NestedValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, NestedValue> {
        self.0.keys()
    }
}

impl From<serde_json::Map<String, Value>> for Map {
    fn from(obj: serde_json::Map<String, Value>) -> Self {
        obj.into_iter().map(|(k, v)| (k, NestedValue::from(v))).collect()
    }
}

impl From<BTreeMap<String, NestedValue>> for Map {
    fn from(inner: BTreeMap<String, NestedValue>) -> Self {
        Map(inner)
    }
}

impl TryFrom<Value> for Map {
    type Error = NestedError;

    fn try_from(value: Value) -> Result<Self> {
        Map::from_value(value)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map.0.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
    }
}

impl<K: Into<String>, V: Into<NestedValue>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a NestedValue);
    type IntoIter = btree_map::Iter<'a, String, NestedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let obj = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        Ok(Map::from(obj))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
