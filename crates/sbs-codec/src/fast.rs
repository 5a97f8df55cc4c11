//! Native-width serializer.
//!
//! Integers travel as `i64`. Encoding writes straight into a `Vec<u8>`;
//! decoding walks a slice with an explicit cursor and only touches the
//! shared [`Bytes`] handle to hand out zero-copy payload slices.

use bytes::Bytes;
use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use sbs_core::{Type, TypeGraph, Value};

use crate::error::{CodecError, Result};
use crate::{ElementBudget, Serializer, descend, mismatch, shape, varint};

#[derive(Debug, Clone, Copy, Default)]
pub struct FastSerializer;

impl Serializer for FastSerializer {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn encode(&self, graph: &TypeGraph, ty: &Type, value: &Value) -> Result<Vec<u8>> {
        let mut writer = Writer {
            graph,
            out: Vec::with_capacity(64),
        };
        writer.write(ty, value, 0)?;
        Ok(writer.out)
    }

    fn decode(&self, graph: &TypeGraph, ty: &Type, data: Bytes) -> Result<(Value, Bytes)> {
        let mut reader = Reader {
            graph,
            data: &data,
            pos: 0,
            budget: ElementBudget::for_input(data.len()),
        };
        let value = reader.read(ty, 0)?;
        let rest = data.slice(reader.pos..);
        Ok((value, rest))
    }
}

struct Writer<'g> {
    graph: &'g TypeGraph,
    out: Vec<u8>,
}

impl Writer<'_> {
    fn write(&mut self, ty: &Type, value: &Value, depth: u32) -> Result<()> {
        let depth = descend(depth)?;
        match (shape(self.graph, ty)?, value) {
            (Type::None, Value::None) => {}
            (Type::Boolean, Value::Boolean(b)) => self.out.push(u8::from(*b)),
            (Type::Integer, Value::Integer(i)) => {
                let native = i.to_i64().ok_or(CodecError::IntegerOverflow)?;
                varint::write_i64(native, &mut self.out);
            }
            (Type::Float, Value::Float(f)) => self.out.extend_from_slice(&f.to_be_bytes()),
            (Type::String, Value::String(s)) => self.blob(s.as_bytes())?,
            (Type::Bytes, Value::Bytes(b)) => self.blob(b)?,
            (Type::Array(element), Value::Array(items)) => {
                self.count(items.len())?;
                for item in items {
                    self.write(element, item, depth)?;
                }
            }
            (Type::Record(entries), Value::Record(fields)) => {
                for entry in entries {
                    let Some(field) = fields.get(&entry.name) else {
                        return Err(CodecError::MissingField(entry.name.clone()));
                    };
                    self.write(&entry.ty, field, depth)?;
                }
            }
            (Type::Choice(entries), Value::Choice(name, inner)) => {
                let Some(index) = entries.iter().position(|entry| &entry.name == name) else {
                    return Err(CodecError::UnknownVariant(name.clone()));
                };
                self.count(index)?;
                self.write(&entries[index].ty, inner, depth)?;
            }
            (expected, found) => return Err(mismatch(expected, found)),
        }
        Ok(())
    }

    fn count(&mut self, n: usize) -> Result<()> {
        let n = i64::try_from(n).map_err(|_| CodecError::IntegerOverflow)?;
        varint::write_i64(n, &mut self.out);
        Ok(())
    }

    fn blob(&mut self, payload: &[u8]) -> Result<()> {
        let len = i64::try_from(payload.len()).map_err(|_| CodecError::IntegerOverflow)?;
        self.out.reserve(varint::size_i64(len) + payload.len());
        varint::write_i64(len, &mut self.out);
        self.out.extend_from_slice(payload);
        Ok(())
    }
}

struct Reader<'g, 'd> {
    graph: &'g TypeGraph,
    data: &'d Bytes,
    pos: usize,
    budget: ElementBudget,
}

impl Reader<'_, '_> {
    fn read(&mut self, ty: &Type, depth: u32) -> Result<Value> {
        let depth = descend(depth)?;
        let value = match shape(self.graph, ty)? {
            Type::None => Value::None,
            Type::Boolean => Value::Boolean(self.take(1)?[0] != 0),
            Type::Integer => Value::Integer(BigInt::from(self.int()?)),
            Type::Float => {
                let raw = self.take(8)?;
                let mut be = [0u8; 8];
                be.copy_from_slice(raw);
                Value::Float(f64::from_be_bytes(be))
            }
            Type::String => {
                let len = self.payload_len()?;
                let text = std::str::from_utf8(self.take(len)?).map_err(|_| CodecError::InvalidUtf8)?;
                Value::String(text.to_owned())
            }
            Type::Bytes => {
                let len = self.payload_len()?;
                let start = self.pos;
                self.take(len)?;
                Value::Bytes(self.data.slice(start..self.pos))
            }
            Type::Array(element) => {
                let count = self.count()?;
                self.budget.claim(count)?;
                let mut items = Vec::with_capacity(count.min(self.remaining()));
                for _ in 0..count {
                    items.push(self.read(element, depth)?);
                }
                Value::Array(items)
            }
            Type::Record(entries) => {
                let mut fields = IndexMap::with_capacity(entries.len());
                for entry in entries {
                    let field = self.read(&entry.ty, depth)?;
                    fields.insert(entry.name.clone(), field);
                }
                Value::Record(fields)
            }
            Type::Choice(entries) => {
                let index = self.int()?;
                let Some(entry) = usize::try_from(index).ok().and_then(|i| entries.get(i)) else {
                    return Err(CodecError::InvalidChoiceIndex {
                        index: BigInt::from(index),
                        count: entries.len(),
                    });
                };
                let inner = self.read(&entry.ty, depth)?;
                Value::Choice(entry.name.clone(), Box::new(inner))
            }
            Type::Ref(key) => return Err(CodecError::UnknownType(key.clone())),
        };
        Ok(value)
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&[u8]> {
        if self.remaining() < n {
            return Err(CodecError::UnexpectedEnd {
                needed: n,
                available: self.remaining(),
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }

    fn int(&mut self) -> Result<i64> {
        let (value, used) = varint::read_i64(&self.data[self.pos..])?;
        self.pos += used;
        Ok(value)
    }

    /// Length prefix of a payload that must be fully present.
    fn payload_len(&mut self) -> Result<usize> {
        let len = self.count()?;
        if len > self.remaining() {
            return Err(CodecError::UnexpectedEnd {
                needed: len,
                available: self.remaining(),
            });
        }
        Ok(len)
    }

    fn count(&mut self) -> Result<usize> {
        let raw = self.int()?;
        usize::try_from(raw).map_err(|_| CodecError::InvalidLength(BigInt::from(raw)))
    }
}
