//! Runtime values of a data record.
//!
//! Records are untyped mappings; every value carries an explicit tag
//! ([`ValueKind`]) which is what the type rule compares against.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::collections::HashMap;
use std::fmt;

/// A single data record: field name to value.
pub type Record = HashMap<String, DataValue>;

/// A value in a data record.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Explicit null
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value (integers and floats share one kind)
    Number(f64),
    /// String value
    String(String),
    /// List/array value
    Array(Vec<DataValue>),
    /// Nested record
    Object(Record),
}

/// Runtime kind of a [`DataValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            DataValue::Null => ValueKind::Null,
            DataValue::Bool(_) => ValueKind::Boolean,
            DataValue::Number(_) => ValueKind::Number,
            DataValue::String(_) => ValueKind::String,
            DataValue::Array(_) => ValueKind::Array,
            DataValue::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Length of the value, for kinds that have one.
    ///
    /// Strings count Unicode scalar values (not UTF-16 code units, so `"😀"`
    /// has length 1), arrays count elements. Numbers, booleans, objects and
    /// null have no length.
    pub fn length(&self) -> Option<usize> {
        match self {
            DataValue::String(s) => Some(s.chars().count()),
            DataValue::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as a nested record.
    pub fn as_object(&self) -> Option<&Record> {
        match self {
            DataValue::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Consumes the value and returns the record if it is an object.
    pub fn into_record(self) -> Option<Record> {
        match self {
            DataValue::Object(record) => Some(record),
            _ => None,
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<f64> for DataValue {
    fn from(n: f64) -> Self {
        DataValue::Number(n)
    }
}

impl From<i64> for DataValue {
    fn from(n: i64) -> Self {
        DataValue::Number(n as f64)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl From<Vec<DataValue>> for DataValue {
    fn from(items: Vec<DataValue>) -> Self {
        DataValue::Array(items)
    }
}

impl From<Record> for DataValue {
    fn from(record: Record) -> Self {
        DataValue::Object(record)
    }
}

impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => DataValue::Null,
            Value::Bool(b) => DataValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(DataValue::Null, DataValue::Number),
            Value::String(s) => DataValue::String(s),
            Value::Array(items) => {
                DataValue::Array(items.into_iter().map(DataValue::from).collect())
            }
            Value::Object(map) => DataValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, DataValue::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Deserializes any self-describing document (JSON, YAML, TOML) into a value.
///
/// Floats are kept as they are, so YAML `.nan` and `.inf` stay numbers.
impl<'de> Deserialize<'de> for DataValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DataValueVisitor)
    }
}

struct DataValueVisitor;

impl<'de> Visitor<'de> for DataValueVisitor {
    type Value = DataValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a null, boolean, number, string, list or mapping")
    }

    fn visit_unit<E: de::Error>(self) -> Result<DataValue, E> {
        Ok(DataValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<DataValue, E> {
        Ok(DataValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<DataValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        DataValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<DataValue, E> {
        Ok(DataValue::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<DataValue, E> {
        Ok(DataValue::Number(n as f64))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<DataValue, E> {
        Ok(DataValue::Number(n as f64))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<DataValue, E> {
        Ok(DataValue::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<DataValue, E> {
        Ok(DataValue::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<DataValue, E> {
        Ok(DataValue::String(s))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<DataValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(DataValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<DataValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = Record::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, DataValue>()? {
            record.insert(key, value);
        }
        Ok(DataValue::Object(record))
    }
}
