//! Dynamically typed values that conform to a resolved [`Type`](crate::Type).

use bytes::Bytes;
use indexmap::IndexMap;
use num_bigint::BigInt;

/// A value tree. Created by callers before encoding and by the codec when
/// decoding; it holds no references back into the type graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The only inhabitant of `None`.
    None,
    Boolean(bool),
    /// Arbitrary precision; fixed-width codecs reject what they cannot hold.
    Integer(BigInt),
    Float(f64),
    String(String),
    Bytes(Bytes),
    Array(Vec<Value>),
    /// Field name to value. Decoding preserves declaration order.
    Record(IndexMap<String, Value>),
    /// Selected variant name and its value.
    Choice(String, Box<Value>),
}

impl Value {
    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn choice(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Choice(name.into(), Box::new(value.into()))
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    /// `Optional` helper: `("none", None)`.
    pub fn none_variant() -> Self {
        Value::choice("none", Value::None)
    }

    /// `Optional` helper: `("value", v)`.
    pub fn some_variant(value: impl Into<Value>) -> Self {
        Value::choice("value", value)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Array(_) => "Array",
            Value::Record(_) => "Record",
            Value::Choice(..) => "Choice",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}
