//! Builtin (null-module) type constructors.

use crate::types::Type;

/// The fixed set of names every schema can reference without qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    None,
    Boolean,
    Integer,
    Float,
    String,
    Bytes,
    Array,
    Optional,
}

impl Builtin {
    pub const ALL: [Builtin; 8] = [
        Builtin::None,
        Builtin::Boolean,
        Builtin::Integer,
        Builtin::Float,
        Builtin::String,
        Builtin::Bytes,
        Builtin::Array,
        Builtin::Optional,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::None => "None",
            Builtin::Boolean => "Boolean",
            Builtin::Integer => "Integer",
            Builtin::Float => "Float",
            Builtin::String => "String",
            Builtin::Bytes => "Bytes",
            Builtin::Array => "Array",
            Builtin::Optional => "Optional",
        }
    }

    /// Number of type arguments the constructor must be applied to.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Array | Builtin::Optional => 1,
            _ => 0,
        }
    }

    /// Shape of a zero-arity builtin. `None` for the parametric constructors.
    pub fn primitive(self) -> Option<Type> {
        match self {
            Builtin::None => Some(Type::None),
            Builtin::Boolean => Some(Type::Boolean),
            Builtin::Integer => Some(Type::Integer),
            Builtin::Float => Some(Type::Float),
            Builtin::String => Some(Type::String),
            Builtin::Bytes => Some(Type::Bytes),
            Builtin::Array | Builtin::Optional => None,
        }
    }
}
