//! Field dump used by the `Display` impls of the model types.
//!
//! Only fields that are set are written, in declaration order:
//! `{InstanceId: i-0abc, State: {Code: 16, Name: running}}`. A value with no
//! fields set renders as `{}`.
//!
//! The value is first collected into a `serde_json::Value` by [`Dump`], which
//! keeps floats as the text of their own width (`0.1` for an `f32`, not its
//! `f64` widening) and writes non-finite floats as `NaN`, `inf` or `-inf`
//! instead of turning them into `null`.

use serde::ser::{self, Impossible, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub(crate) fn write_fields<T: Serialize>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    let value = value.serialize(Dump).map_err(|_| fmt::Error)?;
    write_value(f, &value)
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(fields) => {
            f.write_str("{")?;
            let mut first = true;
            // `null` only comes from an unset field.
            for (name, field) in fields.iter().filter(|(_, v)| !v.is_null()) {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                write!(f, "{}: ", name)?;
                write_value(f, field)?;
            }
            f.write_str("}")
        }
    }
}

fn float<F: Serialize + fmt::Display>(v: F, finite: bool) -> Result<Value, serde_json::Error> {
    if finite {
        Ok(Value::String(serde_json::to_string(&v)?))
    } else {
        Ok(Value::String(v.to_string()))
    }
}

struct Dump;

impl ser::Serializer for Dump {
    type Ok = Value;
    type Error = serde_json::Error;
    type SerializeSeq = SeqDump;
    type SerializeTuple = SeqDump;
    type SerializeTupleStruct = SeqDump;
    type SerializeTupleVariant = Impossible<Value, serde_json::Error>;
    type SerializeMap = MapDump;
    type SerializeStruct = MapDump;
    type SerializeStructVariant = Impossible<Value, serde_json::Error>;

    fn serialize_bool(self, v: bool) -> Result<Value, Self::Error> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, Self::Error> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, Self::Error> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, Self::Error> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, Self::Error> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, Self::Error> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, Self::Error> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, Self::Error> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, Self::Error> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, Self::Error> {
        float(v, v.is_finite())
    }

    fn serialize_f64(self, v: f64) -> Result<Value, Self::Error> {
        float(v, v.is_finite())
    }

    fn serialize_char(self, v: char) -> Result<Value, Self::Error> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, Self::Error> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, Self::Error> {
        Ok(Value::from(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value, Self::Error> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, Self::Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, Self::Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value, Self::Error> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, Self::Error> {
        let mut fields = Map::new();
        fields.insert(variant.to_string(), value.serialize(Dump)?);
        Ok(Value::Object(fields))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqDump, Self::Error> {
        Ok(SeqDump {
            items: Vec::with_capacity(len.unwrap_or_default()),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqDump, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqDump, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(ser::Error::custom(format!(
            "tuple variant {}::{} cannot be displayed",
            name, variant
        )))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapDump, Self::Error> {
        Ok(MapDump {
            fields: Map::new(),
            key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapDump, Self::Error> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(ser::Error::custom(format!(
            "struct variant {}::{} cannot be displayed",
            name, variant
        )))
    }
}

struct SeqDump {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqDump {
    type Ok = Value;
    type Error = serde_json::Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        self.items.push(value.serialize(Dump)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Self::Error> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SeqDump {
    type Ok = Value;
    type Error = serde_json::Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Self::Error> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqDump {
    type Ok = Value;
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Self::Error> {
        ser::SerializeSeq::end(self)
    }
}

struct MapDump {
    fields: Map<String, Value>,
    key: Option<String>,
}

impl ser::SerializeMap for MapDump {
    type Ok = Value;
    type Error = serde_json::Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Self::Error> {
        self.key = Some(match key.serialize(Dump)? {
            Value::String(s) => s,
            other => other.to_string(),
        });
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        let key = self
            .key
            .take()
            .ok_or_else(|| <serde_json::Error as ser::Error>::custom("map value without a key"))?;
        self.fields.insert(key, value.serialize(Dump)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Self::Error> {
        Ok(Value::Object(self.fields))
    }
}

impl ser::SerializeStruct for MapDump {
    type Ok = Value;
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        self.fields.insert(key.to_string(), value.serialize(Dump)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Self::Error> {
        Ok(Value::Object(self.fields))
    }
}
