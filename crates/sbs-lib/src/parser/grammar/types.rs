use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{ENTRY_RECOVERY, LIST_RECOVERY, TYPE_FIRST};

impl Parser<'_> {
    /// `Record { .. }` | `Choice { .. }` | `Name(args)` | `Module.Name(args)`
    ///
    /// Returns `false` without consuming anything when no type starts here.
    pub(crate) fn parse_type(&mut self, context: &str) -> bool {
        if self.has_fatal_error() {
            return false;
        }

        let parsed = match self.current() {
            SyntaxKind::KwRecord | SyntaxKind::KwChoice if self.enter_recursion() => {
                self.parse_entries();
                true
            }
            SyntaxKind::Id if !self.at_decl_start() && self.enter_recursion() => {
                self.parse_ref();
                true
            }
            _ => {
                if !self.has_fatal_error() {
                    self.error_msg(DiagnosticKind::ExpectedType, context);
                }
                return false;
            }
        };

        self.exit_recursion();
        parsed
    }

    /// `Record { name: Type, .. }` and `Choice { .. }` share one body shape.
    fn parse_entries(&mut self) {
        let (kind, opened) = match self.current() {
            SyntaxKind::KwRecord => (SyntaxKind::Record, "record"),
            _ => (SyntaxKind::Choice, "choice"),
        };

        self.start_node(kind);
        self.bump();

        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.error_msg(
                DiagnosticKind::ExpectedBraceOpen,
                format!("to open the {opened} body"),
            );
            self.finish_node();
            return;
        }

        self.push_delimiter();
        self.bump();

        loop {
            if self.should_stop() {
                break;
            }
            match self.current() {
                SyntaxKind::BraceClose | SyntaxKind::Error => break,
                SyntaxKind::Id if self.at_decl_start() => break,
                SyntaxKind::Id => self.parse_entry(),
                _ => self.error_recover(
                    DiagnosticKind::ExpectedEntryName,
                    &format!("inside `{{ }}` of {opened}"),
                    ENTRY_RECOVERY,
                ),
            }
            self.eat(SyntaxKind::Comma);
        }

        self.close_delimiter(SyntaxKind::BraceClose, DiagnosticKind::UnclosedBrace, opened);
        self.finish_node();
    }

    /// `name: Type`
    fn parse_entry(&mut self) {
        self.start_node(SyntaxKind::Entry);
        self.bump();
        self.expect(SyntaxKind::Colon, DiagnosticKind::ExpectedColon);
        self.parse_type("after `:`");
        self.finish_node();
    }

    /// `Name`, `Module.Name`, optionally applied to `(args)`.
    fn parse_ref(&mut self) {
        self.start_node(SyntaxKind::Ref);
        self.bump();

        if self.eat(SyntaxKind::Dot) && !self.eat(SyntaxKind::Id) {
            self.error_msg(DiagnosticKind::ExpectedTypeName, "after `.`");
        }

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_args();
        }

        self.finish_node();
    }

    fn parse_args(&mut self) {
        self.start_node(SyntaxKind::Args);
        self.push_delimiter();
        self.bump();

        if self.currently_is(SyntaxKind::ParenClose) {
            self.error_msg(DiagnosticKind::EmptyList, "drop `()` or pass a type");
        } else {
            loop {
                if self.currently_is_one_of(TYPE_FIRST) {
                    self.parse_type("in argument list");
                } else {
                    self.error_recover(
                        DiagnosticKind::ExpectedType,
                        "in argument list",
                        LIST_RECOVERY,
                    );
                }
                if self.should_stop() || !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        self.close_delimiter(
            SyntaxKind::ParenClose,
            DiagnosticKind::UnclosedParen,
            "argument list",
        );
        self.finish_node();
    }
}
