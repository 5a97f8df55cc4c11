#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Binary encoding of [`Value`]s against a [`TypeGraph`].
//!
//! Two serializers implement the same wire format:
//! - [`PortableSerializer`]: arbitrary precision integers, `Buf`-driven
//! - [`FastSerializer`]: native `i64` integers over a slice cursor (feature `fast`)
//!
//! Their output is byte-identical and each decodes the other's output. The only
//! permitted divergence is [`CodecError::IntegerOverflow`] from the fast one.

pub mod error;
#[cfg(feature = "fast")]
pub mod fast;
pub mod portable;
pub mod varint;

#[cfg(all(test, feature = "fast"))]
mod parity_tests;
#[cfg(test)]
mod varint_tests;

use bytes::Bytes;
use sbs_core::{Type, TypeGraph, Value};

pub use error::{CodecError, Result};
#[cfg(feature = "fast")]
pub use fast::FastSerializer;
pub use portable::PortableSerializer;

/// Maximum nesting of arrays, records, and choices in one value.
pub const MAX_DEPTH: u32 = 1024;

/// Array elements one decode may produce on top of one per input byte.
///
/// An element that occupies input owns at least one byte that none of its
/// nested elements own, so only zero-width elements (`None`, records of
/// `None`) draw on this allowance.
pub const ZERO_WIDTH_ALLOWANCE: usize = 1 << 20;

/// An implementation of the wire format.
pub trait Serializer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Encodes `value` as type `ty` into a freshly owned buffer.
    fn encode(&self, graph: &TypeGraph, ty: &Type, value: &Value) -> Result<Vec<u8>>;

    /// Decodes one value of type `ty` from the front of `data`.
    ///
    /// Returns the value and the unconsumed rest of `data`. Byte values are
    /// slices of `data`, not copies.
    fn decode(&self, graph: &TypeGraph, ty: &Type, data: Bytes) -> Result<(Value, Bytes)>;
}

/// Selects a serializer implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializerKind {
    Portable,
    Fast,
}

impl Default for SerializerKind {
    /// `Fast` when compiled in, otherwise `Portable`.
    fn default() -> Self {
        if cfg!(feature = "fast") {
            SerializerKind::Fast
        } else {
            SerializerKind::Portable
        }
    }
}

impl SerializerKind {
    pub fn name(self) -> &'static str {
        match self {
            SerializerKind::Portable => "portable",
            SerializerKind::Fast => "fast",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "portable" => Some(SerializerKind::Portable),
            "fast" => Some(SerializerKind::Fast),
            _ => None,
        }
    }

    pub fn is_available(self) -> bool {
        self.serializer().is_ok()
    }

    pub fn serializer(self) -> Result<&'static dyn Serializer> {
        match self {
            SerializerKind::Portable => Ok(&PortableSerializer),
            SerializerKind::Fast => fast_serializer(),
        }
    }
}

#[cfg(feature = "fast")]
fn fast_serializer() -> Result<&'static dyn Serializer> {
    Ok(&FastSerializer)
}

#[cfg(not(feature = "fast"))]
fn fast_serializer() -> Result<&'static dyn Serializer> {
    Err(CodecError::Unavailable("fast"))
}

/// Encodes with the default serializer.
pub fn encode(graph: &TypeGraph, ty: &Type, value: &Value) -> Result<Vec<u8>> {
    SerializerKind::default().serializer()?.encode(graph, ty, value)
}

/// Decodes with the default serializer.
pub fn decode(graph: &TypeGraph, ty: &Type, data: Bytes) -> Result<(Value, Bytes)> {
    SerializerKind::default().serializer()?.decode(graph, ty, data)
}

/// Chases `ty` to a structural shape; a dangling ref is an error.
pub(crate) fn shape<'a>(graph: &'a TypeGraph, ty: &'a Type) -> Result<&'a Type> {
    match graph.resolve(ty) {
        Type::Ref(key) => Err(CodecError::UnknownType(key.clone())),
        shape => Ok(shape),
    }
}

/// Array elements a single decode call may still produce.
pub(crate) struct ElementBudget(usize);

impl ElementBudget {
    pub(crate) fn for_input(len: usize) -> Self {
        Self(len.saturating_add(ZERO_WIDTH_ALLOWANCE))
    }

    /// Claims `count` elements before any of them is decoded.
    pub(crate) fn claim(&mut self, count: usize) -> Result<()> {
        if count > self.0 {
            return Err(CodecError::ElementLimitExceeded {
                count,
                available: self.0,
            });
        }
        self.0 -= count;
        Ok(())
    }
}

#[inline]
pub(crate) fn descend(depth: u32) -> Result<u32> {
    if depth >= MAX_DEPTH {
        return Err(CodecError::DepthLimitExceeded(MAX_DEPTH));
    }
    Ok(depth + 1)
}

pub(crate) fn mismatch(shape: &Type, value: &Value) -> CodecError {
    CodecError::TypeMismatch {
        expected: shape.kind_name(),
        found: value.kind_name(),
    }
}
