//! Grammar productions for the schema language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.

mod items;
mod types;

use super::core::Parser;
use super::cst::SyntaxKind;
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    /// LL(2): `Name =` always starts a new declaration.
    pub(crate) fn at_decl_start(&mut self) -> bool {
        self.currently_is(SyntaxKind::Id) && self.peek_nth(1) == SyntaxKind::Equals
    }

    /// Consumes the closing token of the innermost delimiter or reports it unclosed.
    pub(crate) fn close_delimiter(
        &mut self,
        close: SyntaxKind,
        kind: DiagnosticKind,
        opened: &str,
    ) {
        let open = self.pop_delimiter();
        if self.eat(close) {
            return;
        }
        if let Some(open) = open {
            self.error_unclosed_delimiter(kind, format!("{opened} started here"), open.span);
        }
    }
}
