use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{DECL_RECOVERY, LIST_RECOVERY};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);

        self.parse_module_header();

        while !self.should_stop() && !self.currently_is(SyntaxKind::Error) {
            match self.current() {
                SyntaxKind::Id => self.parse_decl(),
                SyntaxKind::KwModule => self.parse_duplicate_header(),
                _ => self.error_until_next_decl(),
            }
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// `module Name`
    fn parse_module_header(&mut self) {
        if !self.currently_is(SyntaxKind::KwModule) {
            self.error(DiagnosticKind::ExpectedModuleHeader);
            return;
        }

        self.start_node(SyntaxKind::ModuleHeader);
        self.bump();
        if !self.eat(SyntaxKind::Id) {
            self.error_msg(DiagnosticKind::ExpectedModuleName, "after `module`");
        }
        self.finish_node();
    }

    fn parse_duplicate_header(&mut self) {
        self.start_node(SyntaxKind::ModuleHeader);
        self.error(DiagnosticKind::DuplicateModuleHeader);
        self.bump();
        self.eat(SyntaxKind::Id);
        self.finish_node();
    }

    pub(crate) fn error_until_next_decl(&mut self) {
        self.error_recover(
            DiagnosticKind::UnexpectedToken,
            "expected a declaration like `Name = Type`",
            DECL_RECOVERY,
        );
    }

    /// `Name(params) = Type`
    fn parse_decl(&mut self) {
        self.assert_current(SyntaxKind::Id);
        self.start_node(SyntaxKind::Decl);
        self.bump();

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_params();
        }

        self.expect(SyntaxKind::Equals, DiagnosticKind::ExpectedEquals);
        self.parse_type("after `=`");

        self.finish_node();
    }

    /// `(a, b)`
    fn parse_params(&mut self) {
        self.start_node(SyntaxKind::Params);
        self.push_delimiter();
        self.bump();

        if self.currently_is(SyntaxKind::ParenClose) {
            self.error_msg(DiagnosticKind::EmptyList, "drop `()` or name a parameter");
        } else {
            loop {
                if !self.eat(SyntaxKind::Id) {
                    self.error_recover(
                        DiagnosticKind::ExpectedParamName,
                        "inside `( )`",
                        LIST_RECOVERY,
                    );
                }
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        self.close_delimiter(
            SyntaxKind::ParenClose,
            DiagnosticKind::UnclosedParen,
            "parameter list",
        );
        self.finish_node();
    }
}
