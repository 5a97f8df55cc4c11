use std::sync::Arc;

use super::source::SchemaSource;
use super::{Inner, Repository};
use crate::Result;
use crate::analyze::{EvalFuel, evaluate_with_fuel};
use crate::parser::ParseFuel;
use sbs_codec::SerializerKind;

/// Collects schema sources and settings, then parses and evaluates them once.
#[derive(Debug, Clone, Default)]
pub struct RepositoryBuilder {
    sources: Vec<SchemaSource>,
    serializer: SerializerKind,
    parse_fuel: ParseFuel,
    eval_fuel: EvalFuel,
}

impl RepositoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: impl Into<SchemaSource>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn sources<S: Into<SchemaSource>>(mut self, sources: impl IntoIterator<Item = S>) -> Self {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    /// Serializer used by [`Repository::encode`] and [`Repository::decode`].
    pub fn serializer(mut self, kind: SerializerKind) -> Self {
        self.serializer = kind;
        self
    }

    pub fn exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.parse_fuel.exec = limit;
        self
    }

    pub fn recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.parse_fuel.recursion = limit;
        self
    }

    pub fn instantiation_fuel(mut self, limit: Option<u32>) -> Self {
        self.eval_fuel.instantiation = limit;
        self
    }

    pub fn instantiation_size(mut self, limit: Option<u32>) -> Self {
        self.eval_fuel.instantiation_size = limit;
        self
    }

    pub fn build(self) -> Result<Repository> {
        self.serializer.serializer()?;

        let mut modules = Vec::new();
        for source in self.sources {
            source.load_into(self.parse_fuel, &mut modules)?;
        }

        let graph = evaluate_with_fuel(&modules, self.eval_fuel)?;

        tracing::debug!(
            modules = modules.len(),
            types = graph.len(),
            serializer = self.serializer.name(),
            "built repository"
        );

        Ok(Repository {
            inner: Arc::new(Inner { modules, graph }),
            serializer: self.serializer,
        })
    }
}
