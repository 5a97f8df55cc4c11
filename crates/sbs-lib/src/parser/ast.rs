//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; accessors return `None` for
//! parts missing after error recovery.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(ModuleHeader, ModuleHeader);
ast_node!(Decl, Decl);
ast_node!(Params, Params);
ast_node!(Record, Record);
ast_node!(Choice, Choice);
ast_node!(Entry, Entry);
ast_node!(Ref, Ref);
ast_node!(Args, Args);

/// Type expression position: the right side of `=`, `:` or an argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Record(Record),
    Choice(Choice),
    Ref(Ref),
}

impl Type {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Record => Record::cast(node).map(Type::Record),
            SyntaxKind::Choice => Choice::cast(node).map(Type::Choice),
            SyntaxKind::Ref => Ref::cast(node).map(Type::Ref),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Type::Record(n) => n.as_cst(),
            Type::Choice(n) => n.as_cst(),
            Type::Ref(n) => n.as_cst(),
        }
    }
}

fn ids(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| t.kind() == SyntaxKind::Id)
}

impl Root {
    /// First header; duplicates are reported by the parser.
    pub fn header(&self) -> Option<ModuleHeader> {
        self.0.children().find_map(ModuleHeader::cast)
    }

    pub fn decls(&self) -> impl Iterator<Item = Decl> + '_ {
        self.0.children().filter_map(Decl::cast)
    }
}

impl ModuleHeader {
    pub fn name(&self) -> Option<SyntaxToken> {
        ids(&self.0).next()
    }
}

impl Decl {
    pub fn name(&self) -> Option<SyntaxToken> {
        ids(&self.0).next()
    }

    pub fn params(&self) -> Option<Params> {
        self.0.children().find_map(Params::cast)
    }

    pub fn body(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl Params {
    pub fn names(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        ids(&self.0)
    }
}

impl Record {
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.0.children().filter_map(Entry::cast)
    }
}

impl Choice {
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.0.children().filter_map(Entry::cast)
    }
}

impl Entry {
    pub fn name(&self) -> Option<SyntaxToken> {
        ids(&self.0).next()
    }

    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl Ref {
    fn is_qualified(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .any(|t| t.kind() == SyntaxKind::Dot)
    }

    /// `M` in `M.Name`.
    pub fn module(&self) -> Option<SyntaxToken> {
        if self.is_qualified() {
            ids(&self.0).next()
        } else {
            None
        }
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        if self.is_qualified() {
            ids(&self.0).nth(1)
        } else {
            ids(&self.0).next()
        }
    }

    pub fn args(&self) -> Option<Args> {
        self.0.children().find_map(Args::cast)
    }
}

impl Args {
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        self.0.children().filter_map(Type::cast)
    }
}
