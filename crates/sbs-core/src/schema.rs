//! Schema AST: modules of named, possibly parametric, type declarations.
//!
//! This is the owned form produced by lowering the parser's typed AST, and the
//! form that round-trips through the portable (serde) representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a declared type: optional module plus local name.
///
/// A ref without a module is resolved relative to the declaring module first,
/// then against the builtin table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub name: String,
}

impl TypeRef {
    pub fn new(module: Option<&str>, name: &str) -> Self {
        Self {
            module: module.map(str::to_owned),
            name: name.to_owned(),
        }
    }

    /// Ref into the builtin (null) module.
    pub fn builtin(name: &str) -> Self {
        Self::new(None, name)
    }

    pub fn qualified(module: &str, name: &str) -> Self {
        Self::new(Some(module), name)
    }

    /// Parses the dotted form `Module.Name`. A name without a dot has no module.
    ///
    /// Only the first dot separates; `a.b.c` is module `a`, name `b.c`.
    pub fn parse(dotted: &str) -> Self {
        match dotted.split_once('.') {
            Some((module, name)) => Self::qualified(module, name),
            None => Self::builtin(dotted),
        }
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}.{}", module, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A named entry of a record (field) or choice (variant).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Unresolved type expression as written in a declaration body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeExpr {
    None,
    Boolean,
    Integer,
    Float,
    String,
    Bytes,
    Array {
        element: Box<TypeExpr>,
    },
    Record {
        fields: Vec<Field>,
    },
    Choice {
        variants: Vec<Field>,
    },
    /// Reference to a declaration, a builtin, or a formal parameter,
    /// optionally applied to argument expressions.
    Ref {
        target: TypeRef,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeExpr>,
    },
}

impl TypeExpr {
    /// Zero-argument reference, e.g. a formal parameter or `Integer`.
    pub fn named(module: Option<&str>, name: &str) -> Self {
        TypeExpr::Ref {
            target: TypeRef::new(module, name),
            args: Vec::new(),
        }
    }

    pub fn apply(module: Option<&str>, name: &str, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Ref {
            target: TypeRef::new(module, name),
            args,
        }
    }

    pub fn array(element: TypeExpr) -> Self {
        TypeExpr::Array {
            element: Box::new(element),
        }
    }

    pub fn record<N: Into<String>>(fields: impl IntoIterator<Item = (N, TypeExpr)>) -> Self {
        TypeExpr::Record {
            fields: fields
                .into_iter()
                .map(|(name, ty)| Field::new(name, ty))
                .collect(),
        }
    }

    pub fn choice<N: Into<String>>(variants: impl IntoIterator<Item = (N, TypeExpr)>) -> Self {
        TypeExpr::Choice {
            variants: variants
                .into_iter()
                .map(|(name, ty)| Field::new(name, ty))
                .collect(),
        }
    }
}

/// A type declaration: `Name(params...) = body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    pub body: TypeExpr,
}

impl Decl {
    pub fn new(name: impl Into<String>, params: Vec<String>, body: TypeExpr) -> Self {
        Self {
            name: name.into(),
            params,
            body,
        }
    }

    pub fn is_parametric(&self) -> bool {
        !self.params.is_empty()
    }
}

/// A named, ordered set of declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decls: Vec::new(),
        }
    }

    pub fn with_decl(mut self, decl: Decl) -> Self {
        self.decls.push(decl);
        self
    }

    pub fn decl(&self, name: &str) -> Option<&Decl> {
        self.decls.iter().find(|d| d.name == name)
    }
}
