//! Reference serializer.
//!
//! Integers are `BigInt` end to end, so any value the schema admits can be
//! encoded. Decoding consumes a [`Bytes`] through the [`Buf`] trait, splitting
//! byte and string payloads off without copying.

use bytes::{Buf, BufMut, Bytes};
use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use sbs_core::{Type, TypeGraph, Value};

use crate::error::{CodecError, Result};
use crate::{ElementBudget, Serializer, descend, mismatch, shape, varint};

#[derive(Debug, Clone, Copy, Default)]
pub struct PortableSerializer;

impl Serializer for PortableSerializer {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn encode(&self, graph: &TypeGraph, ty: &Type, value: &Value) -> Result<Vec<u8>> {
        let mut encoder = Encoder {
            graph,
            out: Vec::new(),
        };
        encoder.encode(ty, value, 0)?;
        Ok(encoder.out)
    }

    fn decode(&self, graph: &TypeGraph, ty: &Type, data: Bytes) -> Result<(Value, Bytes)> {
        let mut data = data;
        let mut decoder = Decoder {
            graph,
            budget: ElementBudget::for_input(data.len()),
        };
        let value = decoder.decode(ty, &mut data, 0)?;
        Ok((value, data))
    }
}

struct Encoder<'g> {
    graph: &'g TypeGraph,
    out: Vec<u8>,
}

impl Encoder<'_> {
    fn encode(&mut self, ty: &Type, value: &Value, depth: u32) -> Result<()> {
        let depth = descend(depth)?;
        match (shape(self.graph, ty)?, value) {
            (Type::None, Value::None) => {}
            (Type::Boolean, Value::Boolean(b)) => self.out.put_u8(u8::from(*b)),
            (Type::Integer, Value::Integer(i)) => varint::write_big(i, &mut self.out),
            (Type::Float, Value::Float(f)) => self.out.put_f64(*f),
            (Type::String, Value::String(s)) => self.blob(s.as_bytes()),
            (Type::Bytes, Value::Bytes(b)) => self.blob(b),
            (Type::Array(element), Value::Array(items)) => {
                varint::write_big(&BigInt::from(items.len()), &mut self.out);
                for item in items {
                    self.encode(element, item, depth)?;
                }
            }
            (Type::Record(entries), Value::Record(fields)) => {
                for entry in entries {
                    let field = fields
                        .get(&entry.name)
                        .ok_or_else(|| CodecError::MissingField(entry.name.clone()))?;
                    self.encode(&entry.ty, field, depth)?;
                }
            }
            (Type::Choice(entries), Value::Choice(name, inner)) => {
                let index = entries
                    .iter()
                    .position(|entry| &entry.name == name)
                    .ok_or_else(|| CodecError::UnknownVariant(name.clone()))?;
                varint::write_big(&BigInt::from(index), &mut self.out);
                self.encode(&entries[index].ty, inner, depth)?;
            }
            (expected, found) => return Err(mismatch(expected, found)),
        }
        Ok(())
    }

    fn blob(&mut self, payload: &[u8]) {
        varint::write_big(&BigInt::from(payload.len()), &mut self.out);
        self.out.put_slice(payload);
    }
}

struct Decoder<'g> {
    graph: &'g TypeGraph,
    budget: ElementBudget,
}

impl Decoder<'_> {
    fn decode(&mut self, ty: &Type, data: &mut Bytes, depth: u32) -> Result<Value> {
        let depth = descend(depth)?;
        let value = match shape(self.graph, ty)? {
            Type::None => Value::None,
            Type::Boolean => {
                need(data, 1)?;
                Value::Boolean(data.get_u8() != 0)
            }
            Type::Integer => Value::Integer(varint::read_big(data)?),
            Type::Float => {
                need(data, 8)?;
                Value::Float(data.get_f64())
            }
            Type::String => {
                let raw = blob(data)?;
                let text = std::str::from_utf8(&raw).map_err(|_| CodecError::InvalidUtf8)?;
                Value::String(text.to_owned())
            }
            Type::Bytes => Value::Bytes(blob(data)?),
            Type::Array(element) => {
                let count = length(&varint::read_big(data)?)?;
                self.budget.claim(count)?;
                let mut items = Vec::with_capacity(count.min(data.remaining()));
                for _ in 0..count {
                    items.push(self.decode(element, data, depth)?);
                }
                Value::Array(items)
            }
            Type::Record(entries) => {
                let mut fields = IndexMap::with_capacity(entries.len());
                for entry in entries {
                    let field = self.decode(&entry.ty, data, depth)?;
                    fields.insert(entry.name.clone(), field);
                }
                Value::Record(fields)
            }
            Type::Choice(entries) => {
                let index = varint::read_big(data)?;
                let entry = index
                    .to_usize()
                    .and_then(|i| entries.get(i))
                    .ok_or_else(|| CodecError::InvalidChoiceIndex {
                        index: index.clone(),
                        count: entries.len(),
                    })?;
                let inner = self.decode(&entry.ty, data, depth)?;
                Value::Choice(entry.name.clone(), Box::new(inner))
            }
            Type::Ref(key) => return Err(CodecError::UnknownType(key.clone())),
        };
        Ok(value)
    }
}

fn need(data: &Bytes, needed: usize) -> Result<()> {
    if data.remaining() < needed {
        return Err(CodecError::UnexpectedEnd {
            needed,
            available: data.remaining(),
        });
    }
    Ok(())
}

fn length(raw: &BigInt) -> Result<usize> {
    raw.to_usize()
        .ok_or_else(|| CodecError::InvalidLength(raw.clone()))
}

fn blob(data: &mut Bytes) -> Result<Bytes> {
    let len = length(&varint::read_big(data)?)?;
    need(data, len)?;
    Ok(data.split_to(len))
}
