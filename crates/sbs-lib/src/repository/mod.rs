//! Compiled schema repository: named encode/decode over an evaluated graph.
//!
//! Type names use the dotted form `Module.Name`. A name without a dot refers
//! to the builtin module, so `Integer` is always encodable.

mod builder;
mod source;


use std::fs;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use sbs_codec::SerializerKind;
use sbs_core::{Module, Type, TypeGraph, TypeRef, Value};

pub use builder::RepositoryBuilder;
pub use source::{SCHEMA_EXTENSION, SchemaSource, TEXT_ORIGIN};

use crate::{Result, json};

/// Immutable after construction; clones share the evaluated graph.
#[derive(Debug, Clone)]
pub struct Repository {
    inner: Arc<Inner>,
    serializer: SerializerKind,
}

#[derive(Debug)]
struct Inner {
    modules: Vec<Module>,
    graph: TypeGraph,
}

impl Repository {
    pub fn builder() -> RepositoryBuilder {
        RepositoryBuilder::new()
    }

    /// Builds from any mix of sources with default settings.
    pub fn new<S: Into<SchemaSource>>(sources: impl IntoIterator<Item = S>) -> Result<Self> {
        Self::builder().sources(sources).build()
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::builder().source(text).build()
    }

    /// Rebuilds from the output of [`Repository::to_portable`].
    pub fn from_portable(data: serde_json::Value) -> Result<Self> {
        let modules: Vec<Module> = serde_json::from_value(data)?;
        Self::builder().source(modules).build()
    }

    pub fn from_portable_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|error| source::io_error(path, error))?;
        let modules: Vec<Module> = serde_json::from_str(&text)?;
        Self::builder().source(modules).build()
    }

    /// Exports the module ASTs, not data, as generic JSON.
    pub fn to_portable(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.inner.modules)?)
    }

    pub fn modules(&self) -> &[Module] {
        &self.inner.modules
    }

    pub fn graph(&self) -> &TypeGraph {
        &self.inner.graph
    }

    pub fn serializer(&self) -> SerializerKind {
        self.serializer
    }

    /// Same schema, different default serializer.
    pub fn with_serializer(&self, kind: SerializerKind) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            serializer: kind,
        }
    }

    pub fn encode(&self, name: &str, value: &Value) -> Result<Vec<u8>> {
        self.encode_with(self.serializer, name, value)
    }

    pub fn encode_with(&self, kind: SerializerKind, name: &str, value: &Value) -> Result<Vec<u8>> {
        let encoded = kind
            .serializer()?
            .encode(&self.inner.graph, &type_of(name), value)?;
        tracing::trace!(name, serializer = kind.name(), len = encoded.len(), "encoded");
        Ok(encoded)
    }

    /// Decodes one value; trailing bytes are ignored.
    pub fn decode(&self, name: &str, data: impl Into<Bytes>) -> Result<Value> {
        self.decode_with(self.serializer, name, data)
    }

    pub fn decode_with(
        &self,
        kind: SerializerKind,
        name: &str,
        data: impl Into<Bytes>,
    ) -> Result<Value> {
        let (value, _) = self.decode_prefix_with(kind, name, data.into())?;
        Ok(value)
    }

    /// Decodes one value from the front of `data` and returns the rest.
    pub fn decode_prefix(&self, name: &str, data: Bytes) -> Result<(Value, Bytes)> {
        self.decode_prefix_with(self.serializer, name, data)
    }

    pub fn decode_prefix_with(
        &self,
        kind: SerializerKind,
        name: &str,
        data: Bytes,
    ) -> Result<(Value, Bytes)> {
        let len = data.len();
        let (value, rest) = kind
            .serializer()?
            .decode(&self.inner.graph, &type_of(name), data)?;
        tracing::trace!(
            name,
            serializer = kind.name(),
            consumed = len - rest.len(),
            "decoded"
        );
        Ok((value, rest))
    }

    /// Schema-guided conversion of a value to JSON.
    pub fn value_to_json(&self, name: &str, value: &Value) -> Result<serde_json::Value> {
        json::to_json(&self.inner.graph, &type_of(name), value)
    }

    /// Schema-guided conversion of JSON to a value of type `name`.
    pub fn value_from_json(&self, name: &str, data: &serde_json::Value) -> Result<Value> {
        json::from_json(&self.inner.graph, &type_of(name), data)
    }
}

fn type_of(name: &str) -> Type {
    Type::Ref(TypeRef::parse(name))
}
