//! Schema-guided conversion between [`Value`] and JSON.
//!
//! | shape   | JSON                                                   |
//! |---------|--------------------------------------------------------|
//! | None    | `null`                                                 |
//! | Integer | number, or decimal string when outside 64 bits         |
//! | Bytes   | array of numbers `0..=255`                             |
//! | Record  | object keyed by field name; extra keys are ignored     |
//! | Choice  | two element array `[variant, value]`                   |

use bytes::Bytes;
use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use sbs_codec::CodecError;
use sbs_core::{Entry, Type, TypeGraph, Value};
use serde_json::{Map, Number, Value as Json};

use crate::{Error, Result};

pub fn to_json(graph: &TypeGraph, ty: &Type, value: &Value) -> Result<Json> {
    Ok(match (shape(graph, ty)?, value) {
        (Type::None, Value::None) => Json::Null,
        (Type::Boolean, Value::Boolean(b)) => Json::Bool(*b),
        (Type::Integer, Value::Integer(i)) => integer_to_json(i),
        (Type::Float, Value::Float(f)) => Number::from_f64(*f)
            .map(Json::Number)
            .ok_or_else(|| Error::Json(format!("float {f} has no JSON representation")))?,
        (Type::String, Value::String(s)) => Json::String(s.clone()),
        (Type::Bytes, Value::Bytes(b)) => Json::Array(b.iter().map(|byte| Json::from(*byte)).collect()),
        (Type::Array(element), Value::Array(items)) => Json::Array(
            items
                .iter()
                .map(|item| to_json(graph, element, item))
                .collect::<Result<_>>()?,
        ),
        (Type::Record(entries), Value::Record(fields)) => {
            let mut object = Map::new();
            for entry in entries {
                let field = fields
                    .get(&entry.name)
                    .ok_or_else(|| CodecError::MissingField(entry.name.clone()))?;
                object.insert(entry.name.clone(), to_json(graph, &entry.ty, field)?);
            }
            Json::Object(object)
        }
        (Type::Choice(entries), Value::Choice(name, inner)) => {
            let entry = variant(entries, name)?;
            Json::Array(vec![
                Json::String(name.clone()),
                to_json(graph, &entry.ty, inner)?,
            ])
        }
        (expected, found) => {
            return Err(CodecError::TypeMismatch {
                expected: expected.kind_name(),
                found: found.kind_name(),
            }
            .into());
        }
    })
}

pub fn from_json(graph: &TypeGraph, ty: &Type, data: &Json) -> Result<Value> {
    let shape = shape(graph, ty)?;
    Ok(match (shape, data) {
        (Type::None, Json::Null) => Value::None,
        (Type::Boolean, Json::Bool(b)) => Value::Boolean(*b),
        (Type::Integer, Json::Number(n)) => Value::Integer(number_to_integer(n)?),
        (Type::Integer, Json::String(s)) => Value::Integer(
            s.parse::<BigInt>()
                .map_err(|_| Error::Json(format!("`{s}` is not a decimal integer")))?,
        ),
        (Type::Float, Json::Number(n)) => Value::Float(
            n.as_f64()
                .ok_or_else(|| Error::Json(format!("{n} is not a float")))?,
        ),
        (Type::String, Json::String(s)) => Value::String(s.clone()),
        (Type::Bytes, Json::Array(items)) => Value::Bytes(
            items
                .iter()
                .map(json_to_byte)
                .collect::<Result<Vec<u8>>>()
                .map(Bytes::from)?,
        ),
        (Type::Array(element), Json::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| from_json(graph, element, item))
                .collect::<Result<_>>()?,
        ),
        (Type::Record(entries), Json::Object(object)) => {
            let mut fields = IndexMap::with_capacity(entries.len());
            for entry in entries {
                let field = object
                    .get(&entry.name)
                    .ok_or_else(|| CodecError::MissingField(entry.name.clone()))?;
                fields.insert(entry.name.clone(), from_json(graph, &entry.ty, field)?);
            }
            Value::Record(fields)
        }
        (Type::Choice(entries), Json::Array(pair)) => {
            let [Json::String(name), inner] = pair.as_slice() else {
                return Err(Error::Json(
                    "choice must be a `[variant, value]` pair".to_string(),
                ));
            };
            let entry = variant(entries, name)?;
            Value::choice(name.clone(), from_json(graph, &entry.ty, inner)?)
        }
        (expected, found) => {
            return Err(Error::Json(format!(
                "expected {} value, found {}",
                expected.kind_name(),
                json_kind(found)
            )));
        }
    })
}

fn shape<'a>(graph: &'a TypeGraph, ty: &'a Type) -> Result<&'a Type> {
    match graph.resolve(ty) {
        Type::Ref(key) => Err(CodecError::UnknownType(key.clone()).into()),
        shape => Ok(shape),
    }
}

fn variant<'a>(entries: &'a [Entry], name: &str) -> Result<&'a Entry> {
    entries
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| CodecError::UnknownVariant(name.to_string()).into())
}

fn integer_to_json(i: &BigInt) -> Json {
    if let Some(n) = i.to_i64() {
        return Json::from(n);
    }
    if let Some(n) = i.to_u64() {
        return Json::from(n);
    }
    Json::String(i.to_string())
}

fn number_to_integer(n: &Number) -> Result<BigInt> {
    if let Some(i) = n.as_i64() {
        return Ok(BigInt::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(BigInt::from(u));
    }
    Err(Error::Json(format!("{n} is not an integer")))
}

fn json_to_byte(item: &Json) -> Result<u8> {
    item.as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| Error::Json(format!("{item} is not a byte")))
}

fn json_kind(data: &Json) -> &'static str {
    match data {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
