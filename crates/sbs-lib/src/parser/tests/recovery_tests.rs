use super::{expect_invalid, expect_valid_cst};
use crate::Error;
use crate::parser::{ParseFuel, parse, parse_with_fuel};

#[test]
fn missing_module_header() {
    insta::assert_snapshot!(expect_invalid("T = Integer"), @"error at 0..1: expected `module` header");
}

#[test]
fn empty_source() {
    insta::assert_snapshot!(expect_invalid(""), @"error at 0..0: expected `module` header");
}

#[test]
fn missing_module_name() {
    insta::assert_snapshot!(expect_invalid("module = "), @"error at 7..8: expected module name: after `module`");
}

#[test]
fn duplicate_module_header() {
    insta::assert_snapshot!(expect_invalid("module A\nmodule B\n"), @"error at 9..15: only one `module` header is allowed");
}

#[test]
fn missing_equals() {
    insta::assert_snapshot!(expect_invalid("module M\nT Integer\n"), @"error at 11..18: expected `=`");
}

#[test]
fn missing_type_at_eof() {
    insta::assert_snapshot!(expect_invalid("module M\nT ="), @"error at 12..12: expected a type: after `=`");
}

#[test]
fn missing_type_before_next_decl() {
    let input = "module M\nA =\nB = Integer\n";

    insta::assert_snapshot!(expect_invalid(input), @"error at 13..14: expected a type: after `=`");
}

#[test]
fn missing_colon() {
    let input = "module M\nT = Record { a Integer }";

    insta::assert_snapshot!(expect_invalid(input), @"error at 24..31: expected `:`");
}

#[test]
fn missing_brace_after_keyword() {
    let input = "module M\nT = Choice";

    insta::assert_snapshot!(expect_invalid(input), @"error at 19..19: expected `{`: to open the choice body");
}

#[test]
fn unclosed_record_at_eof() {
    let input = "module M\nT = Record { a: Integer";

    insta::assert_snapshot!(expect_invalid(input), @"error at 20..32: missing closing `}` (related: record started here at 20..21)");
}

#[test]
fn unclosed_record_before_next_decl() {
    let input = "module M\nT = Record { a: Integer\nU = String\n";

    insta::assert_snapshot!(expect_invalid(input), @"error at 20..34: missing closing `}` (related: record started here at 20..21)");
}

#[test]
fn unclosed_args_before_next_decl() {
    let input = "module M\nT = Array(Integer\nU = String";

    insta::assert_snapshot!(expect_invalid(input), @"error at 18..28: missing closing `)` (related: argument list started here at 18..19)");
}

#[test]
fn empty_params() {
    let input = "module M\nT() = Integer";

    insta::assert_snapshot!(expect_invalid(input), @"error at 11..12: empty list: drop `()` or name a parameter");
}

#[test]
fn empty_args() {
    let input = "module M\nT = Array()";

    insta::assert_snapshot!(expect_invalid(input), @"error at 19..20: empty list: drop `()` or pass a type");
}

#[test]
fn garbage_between_decls() {
    let input = "module M\n$$ T = Integer";

    insta::assert_snapshot!(expect_invalid(input), @"error at 9..11: unexpected token: expected a declaration like `Name = Type`");

    let (parse, _) = parse(input).expect("fuel");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      ModuleHeader
        KwModule "module"
        Id "M"
      Error
        Garbage "$$"
      Decl
        Id "T"
        Equals "="
        Ref
          Id "Integer"
    "#);
}

#[test]
fn recovery_keeps_following_decls() {
    let input = "module M\nA = Record { x Integer }\nB = String\n";
    let (parse, diagnostics) = parse(input).expect("fuel");

    assert_eq!(diagnostics.len(), 1);
    let names: Vec<_> = parse
        .root()
        .decls()
        .filter_map(|d| d.name())
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn valid_input_after_fix() {
    let out = expect_valid_cst("module M\nA = Record { x: Integer }\n");
    assert!(out.contains("Entry"));
}

#[test]
fn deep_nesting_exhausts_recursion_fuel() {
    let depth = 600;
    let input = format!(
        "module M\nT = {}Integer{}",
        "Array(".repeat(depth),
        ")".repeat(depth)
    );

    let err = parse(&input).expect_err("nesting beyond the default limit");
    assert!(matches!(err, Error::RecursionLimitExceeded));
}

#[test]
fn nesting_within_limit_parses() {
    let depth = 100;
    let input = format!(
        "module M\nT = {}Integer{}",
        "Array(".repeat(depth),
        ")".repeat(depth)
    );

    let (_, diagnostics) = parse(&input).expect("within fuel");
    assert!(diagnostics.is_empty());
}

#[test]
fn exec_fuel_exhausted() {
    let fuel = ParseFuel {
        exec: Some(3),
        recursion: None,
    };

    let err = parse_with_fuel("module M\nT = Integer", fuel).expect_err("five tokens");
    assert!(matches!(err, Error::ExecFuelExhausted));
}

#[test]
fn unlimited_fuel() {
    let fuel = ParseFuel {
        exec: None,
        recursion: None,
    };

    let (_, diagnostics) = parse_with_fuel("module M\nT = Integer", fuel).expect("no limits");
    assert!(diagnostics.is_empty());
}
