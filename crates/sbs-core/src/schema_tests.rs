use serde_json::json;

use crate::{Decl, Entry, Module, Type, TypeExpr, TypeRef};

#[test]
fn type_ref_parse_dotted() {
    assert_eq!(TypeRef::parse("M.T"), TypeRef::qualified("M", "T"));
    assert_eq!(TypeRef::parse("Integer"), TypeRef::builtin("Integer"));
    assert_eq!(TypeRef::parse("a.b.c"), TypeRef::qualified("a", "b.c"));
}

#[test]
fn type_ref_display() {
    insta::assert_snapshot!(TypeRef::qualified("M", "T").to_string(), @"M.T");
    insta::assert_snapshot!(TypeRef::builtin("Bytes").to_string(), @"Bytes");
}

#[test]
fn type_display_is_canonical() {
    let ty = Type::array(Type::optional(Type::reference(Some("M"), "Entry")));
    insta::assert_snapshot!(ty.to_string(), @"Array(Choice { none: None, value: M.Entry })");

    let record = Type::Record(vec![
        Entry::new("x", Type::Integer),
        Entry::new("y", Type::reference(None, "String")),
    ]);
    insta::assert_snapshot!(record.to_string(), @"Record { x: Integer, y: String }");
}

#[test]
fn module_portable_shape() {
    let module = Module::new("M")
        .with_decl(Decl::new(
            "Entry",
            vec!["K".into()],
            TypeExpr::record([("key", TypeExpr::named(None, "K"))]),
        ))
        .with_decl(Decl::new(
            "T",
            vec![],
            TypeExpr::apply(None, "Entry", vec![TypeExpr::Integer]),
        ));

    let portable = serde_json::to_value(&module).unwrap();
    assert_eq!(
        portable,
        json!({
            "name": "M",
            "decls": [
                {
                    "name": "Entry",
                    "params": ["K"],
                    "body": {
                        "kind": "record",
                        "fields": [
                            {"name": "key", "type": {"kind": "ref", "target": {"name": "K"}}}
                        ]
                    }
                },
                {
                    "name": "T",
                    "body": {
                        "kind": "ref",
                        "target": {"name": "Entry"},
                        "args": [{"kind": "integer"}]
                    }
                }
            ]
        })
    );

    let back: Module = serde_json::from_value(portable).unwrap();
    assert_eq!(back, module);
}

#[test]
fn qualified_ref_keeps_module_in_portable_form() {
    let expr = TypeExpr::named(Some("M1"), "T");
    let portable = serde_json::to_value(&expr).unwrap();
    assert_eq!(
        portable,
        json!({"kind": "ref", "target": {"module": "M1", "name": "T"}})
    );
}

#[test]
fn decl_lookup() {
    let module = Module::new("M").with_decl(Decl::new("T", vec![], TypeExpr::Bytes));
    assert!(module.decl("T").is_some());
    assert!(module.decl("U").is_none());
    assert!(!module.decl("T").unwrap().is_parametric());
}
