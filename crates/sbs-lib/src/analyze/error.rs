use std::path::PathBuf;

use sbs_core::TypeRef;
use thiserror::Error;

/// Errors raised while turning modules into a type graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unsupported schema source `{}`: expected a `.sbs` file or a directory", .0.display())]
    UnsupportedSource(PathBuf),

    #[error("module `{0}` is defined more than once")]
    DuplicateModule(String),

    #[error("type `{name}` is defined more than once in module `{module}`")]
    DuplicateDefinition { module: String, name: String },

    #[error("entry `{entry}` appears more than once in `{module}.{decl}`")]
    DuplicateEntry {
        module: String,
        decl: String,
        entry: String,
    },

    #[error("record in `{module}.{decl}` has no fields")]
    EmptyRecord { module: String, decl: String },

    #[error("choice in `{module}.{decl}` has no variants")]
    EmptyChoice { module: String, decl: String },

    #[error("undefined reference `{reference}` in module `{module}`")]
    UndefinedReference { module: String, reference: TypeRef },

    #[error("unknown module `{target}` referenced from module `{module}`")]
    UnknownModule { module: String, target: String },

    #[error("`{reference}` expects {expected} type arguments, found {found}")]
    ArityMismatch {
        reference: TypeRef,
        expected: usize,
        found: usize,
    },

    #[error("parameter `{param}` of `{module}.{decl}` cannot be applied to arguments")]
    ParameterApplied {
        module: String,
        decl: String,
        param: String,
    },

    #[error("type `{0}` is an alias of itself")]
    AliasCycle(TypeRef),

    #[error("instantiating `{reference}` exceeds {limit} nested instantiations")]
    InstantiationLimitExceeded { reference: TypeRef, limit: u32 },

    #[error("instantiating `{reference}` with {size} argument type nodes exceeds the limit of {limit}")]
    InstantiationTooLarge {
        reference: TypeRef,
        size: usize,
        limit: u32,
    },
}
