//! Schema language front end, evaluator and repository for simple binary
//! serialization.
//!
//! # Example
//!
//! ```
//! use sbs_lib::{Repository, Value};
//!
//! let repo = Repository::from_text(r#"
//!     module Point
//!     Xy = Record { x: Integer, y: Integer }
//! "#).expect("valid schema");
//!
//! let value = Value::record([("x", Value::from(3)), ("y", Value::from(-4))]);
//! let bytes = repo.encode("Point.Xy", &value).expect("encodable");
//! assert_eq!(repo.decode("Point.Xy", bytes).expect("decodable"), value);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod json;
pub mod parser;
pub mod repository;

#[cfg(test)]
mod json_tests;

use std::path::PathBuf;

pub use analyze::{EvalFuel, SchemaError, evaluate};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::ParseFuel;
pub use repository::{Repository, RepositoryBuilder, SchemaSource};

pub use sbs_codec::{CodecError, SerializerKind};
pub use sbs_core::{Bytes, Module, Type, TypeGraph, TypeRef, Value};

/// A schema text that failed to parse, kept whole so it can be rendered.
#[derive(Debug, Clone)]
pub struct ParseError {
    origin: String,
    text: String,
    diagnostics: Diagnostics,
}

impl ParseError {
    pub fn new(origin: impl Into<String>, text: impl Into<String>, diagnostics: Diagnostics) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
            diagnostics,
        }
    }

    /// File path, or `<text>` for inline sources.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Source snippets with annotated spans.
    pub fn render(&self, colored: bool) -> String {
        self.diagnostics
            .printer()
            .source(&self.text)
            .path(&self.origin)
            .colored(colored)
            .render()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (schema nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("failed to parse schema {}: {} errors", .0.origin, .0.diagnostics.error_count())]
    Parse(Box<ParseError>),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("invalid portable schema: {0}")]
    Portable(#[from] serde_json::Error),

    #[error("invalid JSON value: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, Error>;
