//! A `serde::Serializer` that produces [`Value`] trees.
//!
//! Structs keep their type name and field order as [`Record`]s, maps become
//! [`Value::Mapping`], and `()`/`None` become [`Value::Null`].

use std::fmt;

use serde::ser::{self, Serialize};
use thiserror::Error;

use super::{Number, Record, Value};

/// Raised when a `Serialize` impl reports a custom error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SerializeError(String);

impl ser::Error for SerializeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        SerializeError(msg.to_string())
    }
}

type Result<T> = std::result::Result<T, SerializeError>;

pub(crate) struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = SerializeError;

    type SerializeSeq = SequenceBuilder;
    type SerializeTuple = SequenceBuilder;
    type SerializeTupleStruct = SequenceBuilder;
    type SerializeTupleVariant = VariantSequenceBuilder;
    type SerializeMap = MappingBuilder;
    type SerializeStruct = RecordBuilder;
    type SerializeStructVariant = RecordBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(v.into())
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(v.into())
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(v.into())
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Int(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(i64::try_from(v)
            .map(|n| Value::Number(Number::Int(n)))
            .unwrap_or_else(|_| Value::Other(v.to_string())))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_u64(v.into())
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_u64(v.into())
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_u64(v.into())
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(u64::try_from(v)
            .map(|n| Value::Number(Number::UInt(n)))
            .unwrap_or_else(|_| Value::Other(v.to_string())))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(v.into())
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Sequence(
            v.iter().map(|b| Value::Number(Number::UInt((*b).into()))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Other(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value> {
        Ok(Value::Mapping(vec![(
            Value::Str(variant.to_string()),
            value.serialize(ValueSerializer)?,
        )]))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SequenceBuilder> {
        Ok(SequenceBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SequenceBuilder> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SequenceBuilder> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSequenceBuilder> {
        Ok(VariantSequenceBuilder {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MappingBuilder> {
        Ok(MappingBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<RecordBuilder> {
        Ok(RecordBuilder {
            record: Record::named(name),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<RecordBuilder> {
        Ok(RecordBuilder {
            record: Record::named(variant),
        })
    }
}

pub(crate) struct SequenceBuilder {
    items: Vec<Value>,
}

impl SequenceBuilder {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }
}

impl ser::SerializeSeq for SequenceBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.items))
    }
}

impl ser::SerializeTuple for SequenceBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.items))
    }
}

impl ser::SerializeTupleStruct for SequenceBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.items))
    }
}

pub(crate) struct VariantSequenceBuilder {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for VariantSequenceBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(vec![(
            Value::Str(self.variant.to_string()),
            Value::Sequence(self.items),
        )]))
    }
}

pub(crate) struct MappingBuilder {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for MappingBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.pending_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| SerializeError("map value serialized before its key".into()))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.entries))
    }
}

pub(crate) struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    fn push<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.record
            .fields
            .push((key.to_string(), value.serialize(ValueSerializer)?));
        Ok(())
    }
}

impl ser::SerializeStruct for RecordBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeStructVariant for RecordBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[test]
    fn test_struct_becomes_named_record() {
        #[derive(Serialize)]
        struct Person {
            name: &'static str,
            age: u32,
            email: Option<&'static str>,
        }

        let value = Value::from_serialize(&Person {
            name: "Ann",
            age: 30,
            email: None,
        })
        .unwrap();

        let expected = Record::named("Person")
            .field("name", "Ann")
            .field("age", Value::Number(Number::UInt(30)))
            .field("email", Value::Null);
        assert_eq!(value, Value::Record(expected));
    }

    #[test]
    fn test_map_becomes_mapping() {
        let mut map = BTreeMap::new();
        map.insert("b", vec![1i32]);
        map.insert("a", vec![]);

        let value = Value::from_serialize(&map).unwrap();
        assert_eq!(
            value,
            Value::Mapping(vec![
                (Value::from("a"), Value::Sequence(vec![])),
                (Value::from("b"), Value::Sequence(vec![Value::from(1i32)])),
            ])
        );
    }

    #[test]
    fn test_unit_and_none_become_null() {
        assert_eq!(Value::from_serialize(&()).unwrap(), Value::Null);
        assert_eq!(Value::from_serialize(&None::<u8>).unwrap(), Value::Null);
        assert_eq!(Value::from_serialize(&Some(true)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_enum_variants() {
        #[derive(Serialize)]
        enum Shape {
            Empty,
            Circle { radius: f64 },
            Point(i32, i32),
        }

        assert_eq!(
            Value::from_serialize(&Shape::Empty).unwrap(),
            Value::Other("Empty".into())
        );
        assert_eq!(
            Value::from_serialize(&Shape::Circle { radius: 1.5 }).unwrap(),
            Value::Record(Record::named("Circle").field("radius", 1.5))
        );
        assert_eq!(
            Value::from_serialize(&Shape::Point(1, 2)).unwrap(),
            Value::Mapping(vec![(
                Value::from("Point"),
                Value::Sequence(vec![Value::from(1i32), Value::from(2i32)]),
            )])
        );
    }

    #[test]
    fn test_wide_integers_fall_back_to_text() {
        assert_eq!(
            Value::from_serialize(&u128::MAX).unwrap(),
            Value::Other(u128::MAX.to_string())
        );
        assert_eq!(
            Value::from_serialize(&7i128).unwrap(),
            Value::Number(Number::Int(7))
        );
    }
}
