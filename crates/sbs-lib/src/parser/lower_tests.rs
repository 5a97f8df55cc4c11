use indoc::indoc;
use sbs_core::{Decl, Module, TypeExpr};

use crate::Error;
use crate::parser::{ParseFuel, parse_module};

fn lower(source: &str) -> Module {
    parse_module("<test>", source, ParseFuel::default()).expect("valid schema")
}

#[test]
fn lowers_header_and_aliases() {
    let module = lower(indoc! {r#"
    module M
    A = Integer
    B = M1.T
    "#});

    let expected = Module::new("M")
        .with_decl(Decl::new("A", vec![], TypeExpr::named(None, "Integer")))
        .with_decl(Decl::new("B", vec![], TypeExpr::named(Some("M1"), "T")));
    assert_eq!(module, expected);
}

#[test]
fn lowers_params_and_structures() {
    let module = lower(indoc! {r#"
    module M
    T(x) = Record {
        a: x
        b: Choice { none: None, some: Array(M2.U) }
    }
    "#});

    let body = TypeExpr::record([
        ("a", TypeExpr::named(None, "x")),
        (
            "b",
            TypeExpr::choice([
                ("none", TypeExpr::named(None, "None")),
                (
                    "some",
                    TypeExpr::apply(None, "Array", vec![TypeExpr::named(Some("M2"), "U")]),
                ),
            ]),
        ),
    ]);
    let expected = Module::new("M").with_decl(Decl::new("T", vec!["x".to_string()], body));
    assert_eq!(module, expected);
}

#[test]
fn keeps_declaration_order() {
    let module = lower("module M\nZ = String\nA = Bytes\nM = Float\n");

    let names: Vec<_> = module.decls.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Z", "A", "M"]);
}

#[test]
fn empty_record_lowers_to_empty_fields() {
    let module = lower("module M\nT = Record {}\n");

    assert_eq!(module.decls[0].body, TypeExpr::Record { fields: vec![] });
}

#[test]
fn syntax_error_carries_diagnostics() {
    let err = parse_module("schema.sbs", "module M\nT =", ParseFuel::default())
        .expect_err("missing type");

    let Error::Parse(parse_error) = err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(parse_error.origin(), "schema.sbs");
    assert_eq!(parse_error.diagnostics().error_count(), 1);
    insta::assert_snapshot!(parse_error.diagnostics().printer().render(), @"error at 12..12: expected a type: after `=`");

    let rendered = parse_error.render(false);
    assert!(rendered.contains("schema.sbs"));
    assert!(rendered.contains("expected a type"));
}

#[test]
fn parse_error_display_counts_errors() {
    let err = parse_module("<text>", "T = \nU = ", ParseFuel::default()).expect_err("invalid");

    insta::assert_snapshot!(err.to_string(), @"failed to parse schema <text>: 3 errors");
}
