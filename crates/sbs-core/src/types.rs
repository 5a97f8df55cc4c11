//! Resolved types: the values stored in a [`TypeGraph`](crate::TypeGraph).
//!
//! Unlike [`TypeExpr`](crate::TypeExpr), a resolved [`Type`] never carries
//! generic arguments: every instantiation has been replaced by a reference to a
//! synthesized graph entry. Nested references stay unresolved so that
//! recursive types are representable without cyclic ownership.

use std::fmt;

use crate::schema::TypeRef;

/// Named entry of a resolved record or choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
    pub ty: Type,
}

impl Entry {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Structural shape of a resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    None,
    Boolean,
    Integer,
    Float,
    String,
    Bytes,
    Array(Box<Type>),
    Record(Vec<Entry>),
    Choice(Vec<Entry>),
    /// Indirection into the graph, chased one hop at a time at each use.
    Ref(TypeRef),
}

impl Type {
    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    pub fn reference(module: Option<&str>, name: &str) -> Self {
        Type::Ref(TypeRef::new(module, name))
    }

    /// The builtin `Optional(x)` expansion: `Choice { none: None, value: x }`.
    pub fn optional(value: Type) -> Self {
        Type::Choice(vec![
            Entry::new("none", Type::reference(None, "None")),
            Entry::new("value", value),
        ])
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::None => "None",
            Type::Boolean => "Boolean",
            Type::Integer => "Integer",
            Type::Float => "Float",
            Type::String => "String",
            Type::Bytes => "Bytes",
            Type::Array(_) => "Array",
            Type::Record(_) => "Record",
            Type::Choice(_) => "Choice",
            Type::Ref(_) => "Ref",
        }
    }

    pub fn as_type_ref(&self) -> Option<&TypeRef> {
        match self {
            Type::Ref(r) => Some(r),
            _ => None,
        }
    }
}

/// Canonical rendering, also used to name synthesized instantiations.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Array(element) => write!(f, "Array({})", element),
            Type::Record(entries) => write_entries(f, "Record", entries),
            Type::Choice(entries) => write_entries(f, "Choice", entries),
            Type::Ref(r) => write!(f, "{}", r),
            other => f.write_str(other.kind_name()),
        }
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, keyword: &str, entries: &[Entry]) -> fmt::Result {
    write!(f, "{} {{ ", keyword)?;
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", entry.name, entry.ty)?;
    }
    f.write_str(" }")
}
