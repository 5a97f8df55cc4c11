#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the simple binary serializer.
//!
//! Three layers:
//! - **Schema**: modules of declarations as written ([`Module`], [`Decl`], [`TypeExpr`])
//! - **Graph**: evaluated, possibly cyclic map from [`TypeRef`] to [`Type`]
//! - **Data**: dynamically typed [`Value`] trees encoded against the graph

pub mod builtin;
pub mod graph;
pub mod schema;
pub mod types;
pub mod value;

#[cfg(test)]
mod schema_tests;

pub use builtin::Builtin;
pub use graph::{TypeGraph, TypeId};
pub use schema::{Decl, Field, Module, TypeExpr, TypeRef};
pub use types::{Entry, Type};
pub use value::Value;

pub use bytes::Bytes;
pub use num_bigint::BigInt;
