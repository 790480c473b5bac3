//! The value model handed to the formatter.
//!
//! [`Value`] is a closed set of shapes. Rust types reach it through `From`
//! conversions, or through [`Value::from_serialize`] for anything that
//! implements `serde::Serialize`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

mod ser;

pub use ser::SerializeError;

/// A numeric scalar, kept in its original representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

/// A record with named fields, in declaration order.
///
/// # Example
///
/// ```rust
/// use richline::{Record, Value};
///
/// let person = Record::named("Person")
///     .field("Name", "Ann")
///     .field("Age", 30)
///     .field("Active", true);
///
/// assert_eq!(person.fields().len(), 3);
/// let value: Value = person.into();
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    name: Option<String>,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an anonymous record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record carrying a type name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// Appends a field, returning the record for chaining.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }
}

/// Anything the formatter can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    Str(String),
    /// Ordered key/value pairs. Keys are values too.
    Mapping(Vec<(Value, Value)>),
    Sequence(Vec<Value>),
    Record(Record),
    /// A textual representation of something with no dedicated shape.
    /// Only tag interpretation is applied to it.
    Other(String),
}

impl Value {
    /// Builds an ordered mapping from key/value pairs.
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps the `Display` output of `value` as an [`Value::Other`].
    pub fn display(value: impl fmt::Display) -> Self {
        Value::Other(value.to_string())
    }

    /// Converts any serializable value.
    ///
    /// Structs become [`Record`]s named after their type, keeping field
    /// order. Maps become mappings; `()` and `None` become [`Value::Null`].
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, SerializeError> {
        value.serialize(ser::ValueSerializer)
    }

    /// Short name of the shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Record(_) => "record",
            Value::Other(_) => "other",
        }
    }

    /// Returns `true` for mappings, sequences and records.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Value::Mapping(_) | Value::Sequence(_) | Value::Record(_)
        )
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::Number(Number::Int(value as i64))
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::Number(Number::UInt(value as u64))
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::Sequence(value.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        Value::mapping(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::UInt(u))
                } else {
                    n.as_f64()
                        .map(|f| Value::Number(Number::Float(f)))
                        .unwrap_or_else(|| Value::Other(n.to_string()))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
