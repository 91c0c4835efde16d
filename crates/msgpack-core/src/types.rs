//! The `Value` tree accepted by the encoder.
//!
//! Every variant maps to exactly one MessagePack format family, so the
//! encoder can classify a value with a single exhaustive `match`.

/// An in-memory value ready to be encoded.
///
/// Integers keep their signedness and floats keep their declared width: the
/// encoder never narrows an `F64` to `F32`. Map keys are strings at the type
/// level; entry order is irrelevant because maps are emitted sorted by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    /// Signed integer. Non-negative values are written with the unsigned ladder.
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
    /// UTF-8 text (`str` family).
    Str(String),
    /// Raw bytes (`bin` family).
    Bin(Vec<u8>),
    Array(Vec<Value>),
    /// Key-value pairs; emitted in ascending key order.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Short family name, used in error messages and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::UInt(_) => "int",
            Value::F32(_) | Value::F64(_) => "float",
            Value::Str(_) => "str",
            Value::Bin(_) => "bin",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(u64::from(v))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bin(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bin(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(v: Vec<(String, Value)>) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}
