mod grammar_tests;
mod recovery_tests;

use crate::parser::parse;

/// CST dump of input that must parse without diagnostics.
fn expect_valid_cst(source: &str) -> String {
    let (parse, diagnostics) = parse(source).expect("fuel");
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        diagnostics.printer().render()
    );
    parse.dump_cst()
}

/// Plain rendering of the filtered diagnostics of input that must fail.
fn expect_invalid(source: &str) -> String {
    let (_, diagnostics) = parse(source).expect("fuel");
    assert!(diagnostics.has_errors(), "expected diagnostics for {source:?}");
    diagnostics.filtered().printer().render()
}
