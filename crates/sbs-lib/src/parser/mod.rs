//! Parser infrastructure for the schema language.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green
//! tree builder:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Explicit recovery sets: per-production sets determine when to bail vs consume
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. `Name =` is a synchronization point everywhere, so one broken declaration
//!    does not swallow the next
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;
mod lower;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod lower_tests;
#[cfg(test)]
mod tests;

use std::fmt::Write;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use core::Parser;

use crate::{Diagnostics, Error, ParseError, Result};
use lexer::lex;
use sbs_core::Module;

/// Default execution fuel (tokens consumed).
pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
/// Default recursion fuel (type nesting depth).
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Parser limits. `None` disables a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFuel {
    pub exec: Option<u32>,
    pub recursion: Option<u32>,
}

impl Default for ParseFuel {
    fn default() -> Self {
        Self {
            exec: Some(DEFAULT_EXEC_FUEL),
            recursion: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn root(&self) -> ast::Root {
        ast::Root::cast(self.syntax()).expect("parser always produces Root")
    }

    /// Indented tree of node kinds and non-trivia tokens.
    pub fn dump_cst(&self) -> String {
        let mut out = String::new();
        dump_node(&self.syntax(), 0, &mut out).expect("String write never fails");
        out
    }
}

fn dump_node(node: &SyntaxNode, depth: usize, w: &mut String) -> std::fmt::Result {
    writeln!(w, "{:indent$}{:?}", "", node.kind(), indent = depth * 2)?;
    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => dump_node(&n, depth + 1, w)?,
            rowan::NodeOrToken::Token(t) if !t.kind().is_trivia() => {
                writeln!(
                    w,
                    "{:indent$}{:?} {:?}",
                    "",
                    t.kind(),
                    t.text(),
                    indent = (depth + 1) * 2
                )?;
            }
            rowan::NodeOrToken::Token(_) => {}
        }
    }
    Ok(())
}

/// Main entry point with default fuel. Returns Err on fuel exhaustion.
pub fn parse(source: &str) -> Result<(Parse, Diagnostics)> {
    parse_with_fuel(source, ParseFuel::default())
}

pub fn parse_with_fuel(source: &str, fuel: ParseFuel) -> Result<(Parse, Diagnostics)> {
    let parser = Parser::new(source, lex(source))
        .with_exec_fuel(fuel.exec)
        .with_recursion_fuel(fuel.recursion);
    parse_with_parser(parser)
}

pub(crate) fn parse_with_parser(mut parser: Parser) -> Result<(Parse, Diagnostics)> {
    parser.parse_root();
    let (cst, diagnostics) = parser.finish()?;
    Ok((Parse { cst }, diagnostics))
}

/// Parses and lowers one schema text. Any error diagnostic fails the parse.
///
/// `origin` names the text in rendered diagnostics (a file path or `<text>`).
pub fn parse_module(origin: &str, source: &str, fuel: ParseFuel) -> Result<Module> {
    let (parse, diagnostics) = parse_with_fuel(source, fuel)?;
    if diagnostics.has_errors() {
        return Err(Error::Parse(Box::new(ParseError::new(
            origin,
            source,
            diagnostics.filtered(),
        ))));
    }
    let module = lower::lower_root(&parse.root());
    tracing::debug!(
        module = %module.name,
        decls = module.decls.len(),
        "parsed schema module"
    );
    Ok(module)
}
