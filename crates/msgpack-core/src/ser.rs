//! serde entry point: any `T: Serialize` → [`Value`] → MessagePack.
//!
//! Only generic data is accepted: scalars, strings, bytes, options,
//! sequences, tuples and string-keyed maps. Named records (structs, tuple
//! structs, unit structs) and enum variants have no MessagePack family of
//! their own and are rejected with [`EncodeError::UnsupportedType`].
//!
//! ```
//! use std::collections::BTreeMap;
//! use msgpack_core::to_vec;
//!
//! let mut scores = BTreeMap::new();
//! scores.insert("alice", vec![1u8, 2]);
//! assert_eq!(
//!     to_vec(&scores).unwrap(),
//!     [0x81, 0xa5, b'a', b'l', b'i', b'c', b'e', 0x92, 0x01, 0x02],
//! );
//! ```

use serde::ser::{self, Impossible, Serialize};

use crate::encoder::{encode_with, enter_container};
use crate::error::{EncodeError, Result};
use crate::options::EncodeOptions;
use crate::types::Value;

/// Convert a serializable value into a [`Value`] using the default options.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    to_value_with(value, &EncodeOptions::default())
}

/// Convert a serializable value into a [`Value`], enforcing `opts.max_depth`
/// while the tree is built.
pub fn to_value_with<T>(value: &T, opts: &EncodeOptions) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer::new(opts))
}

/// Serialize straight to MessagePack bytes.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_vec_with(value, &EncodeOptions::default())
}

pub fn to_vec_with<T>(value: &T, opts: &EncodeOptions) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    encode_with(&to_value_with(value, opts)?, opts)
}

/// Serializer whose output is a [`Value`]. `depth` is the nesting level of
/// the container being filled (0 at the root).
#[derive(Debug, Clone, Copy)]
pub struct ValueSerializer {
    depth: usize,
    max_depth: usize,
}

impl ValueSerializer {
    /// Root serializer; containers nested past `opts.max_depth` are rejected.
    pub fn new(opts: &EncodeOptions) -> Self {
        ValueSerializer {
            depth: 0,
            max_depth: opts.max_depth,
        }
    }

    fn child(self) -> Result<ValueSerializer> {
        Ok(ValueSerializer {
            depth: enter_container(self.depth, self.max_depth)?,
            max_depth: self.max_depth,
        })
    }
}

fn unsupported(what: String) -> EncodeError {
    EncodeError::UnsupportedType(what)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = EncodeError;

    type SerializeSeq = SerializeArray;
    type SerializeTuple = SerializeArray;
    type SerializeTupleStruct = Impossible<Value, EncodeError>;
    type SerializeTupleVariant = Impossible<Value, EncodeError>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = Impossible<Value, EncodeError>;
    type SerializeStructVariant = Impossible<Value, EncodeError>;

    fn is_human_readable(&self) -> bool {
        false
    }

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        let converted = if v >= 0 {
            u64::try_from(v).map(Value::UInt).ok()
        } else {
            i64::try_from(v).map(Value::Int).ok()
        };
        converted.ok_or_else(|| EncodeError::out_of_range("int", v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::UInt(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        u64::try_from(v)
            .map(Value::UInt)
            .map_err(|_| EncodeError::out_of_range("int", v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::F32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::F64(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Str(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bin(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(unsupported(format!("unit struct `{name}`")))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Err(unsupported(format!("enum variant `{name}::{variant}`")))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(unsupported(format!("enum variant `{name}::{variant}`")))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeArray {
            items: Vec::with_capacity(len.unwrap_or(0)),
            child: self.child()?,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        ser::Serializer::serialize_seq(self, Some(len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(unsupported(format!("tuple struct `{name}`")))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(unsupported(format!("enum variant `{name}::{variant}`")))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeMap {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
            child: self.child()?,
        })
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(unsupported(format!("struct `{name}`")))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(unsupported(format!("enum variant `{name}::{variant}`")))
    }
}

pub struct SerializeArray {
    items: Vec<Value>,
    child: ValueSerializer,
}

impl ser::SerializeSeq for SerializeArray {
    type Ok = Value;
    type Error = EncodeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(self.child)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SerializeArray {
    type Ok = Value;
    type Error = EncodeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

pub struct SerializeMap {
    entries: Vec<(String, Value)>,
    next_key: Option<String>,
    child: ValueSerializer,
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = EncodeError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.next_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| EncodeError::Custom("map value serialized before its key".into()))?;
        self.entries.push((key, value.serialize(self.child)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

/// Accepts only string and `char` keys. Everything else is rejected before a
/// nesting level is entered, so container keys never count against the depth
/// limit.
struct KeySerializer;

fn bad_key(kind: &str) -> EncodeError {
    unsupported(format!("map key of type {kind}, keys must be strings"))
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = EncodeError;

    type SerializeSeq = Impossible<String, EncodeError>;
    type SerializeTuple = Impossible<String, EncodeError>;
    type SerializeTupleStruct = Impossible<String, EncodeError>;
    type SerializeTupleVariant = Impossible<String, EncodeError>;
    type SerializeMap = Impossible<String, EncodeError>;
    type SerializeStruct = Impossible<String, EncodeError>;
    type SerializeStructVariant = Impossible<String, EncodeError>;

    fn is_human_readable(&self) -> bool {
        false
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_owned())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bool(self, _v: bool) -> Result<String> {
        Err(bad_key("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_i16(self, _v: i16) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_i32(self, _v: i32) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_i64(self, _v: i64) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_i128(self, _v: i128) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_u8(self, _v: u8) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_u16(self, _v: u16) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_u32(self, _v: u32) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_u64(self, _v: u64) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_u128(self, _v: u128) -> Result<String> {
        Err(bad_key("int"))
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(bad_key("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(bad_key("float"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(bad_key("bin"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(bad_key("nil"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(bad_key("nil"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String> {
        Err(bad_key(&format!("unit struct `{name}`")))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Err(bad_key(&format!("enum variant `{name}::{variant}`")))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(bad_key(&format!("enum variant `{name}::{variant}`")))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(bad_key("array"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(bad_key("array"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(bad_key(&format!("tuple struct `{name}`")))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(bad_key(&format!("enum variant `{name}::{variant}`")))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(bad_key("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(bad_key(&format!("struct `{name}`")))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(bad_key(&format!("enum variant `{name}::{variant}`")))
    }
}
