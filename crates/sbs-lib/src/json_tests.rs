use indoc::indoc;
use num_bigint::BigInt;
use serde_json::json;

use crate::{Error, Repository, Value};

fn repo() -> Repository {
    Repository::from_text(indoc! {r#"
        module M
        Point = Record { y: Integer, x: Integer }
        Blob = Bytes
        Maybe = Optional(String)
        Items = Array(Float)
        Nothing = None
    "#})
    .expect("valid schema")
}

#[test]
fn record_keeps_declaration_order() {
    let value = Value::record([("x", Value::from(1)), ("y", Value::from(2))]);

    let out = repo().value_to_json("M.Point", &value).expect("convertible");

    insta::assert_snapshot!(out.to_string(), @r#"{"y":2,"x":1}"#);
}

#[test]
fn large_integers_become_strings() {
    let repo = repo();
    let big = BigInt::parse_bytes(b"FFFFFFFFFFFFFFFFFFFF", 16).expect("hex literal");

    assert_eq!(
        repo.value_to_json("Integer", &Value::Integer(big.clone()))
            .expect("convertible"),
        json!("1208925819614629174706175")
    );
    assert_eq!(
        repo.value_from_json("Integer", &json!("1208925819614629174706175"))
            .expect("convertible"),
        Value::Integer(big)
    );
    assert_eq!(
        repo.value_to_json("Integer", &Value::from(u64::MAX))
            .expect("convertible"),
        json!(u64::MAX)
    );
    assert_eq!(
        repo.value_to_json("Integer", &Value::from(-5))
            .expect("convertible"),
        json!(-5)
    );
}

#[test]
fn bytes_as_number_arrays() {
    let repo = repo();
    let value = Value::from(&b"\x00\xff"[..]);

    assert_eq!(
        repo.value_to_json("M.Blob", &value).expect("convertible"),
        json!([0, 255])
    );
    assert_eq!(
        repo.value_from_json("M.Blob", &json!([0, 255])).expect("convertible"),
        value
    );
}

#[test]
fn choices_as_pairs() {
    let repo = repo();

    assert_eq!(
        repo.value_from_json("M.Maybe", &json!(["value", "abc"]))
            .expect("convertible"),
        Value::some_variant("abc")
    );
    assert_eq!(
        repo.value_from_json("M.Maybe", &json!(["none", null]))
            .expect("convertible"),
        Value::none_variant()
    );
    assert_eq!(
        repo.value_to_json("M.Maybe", &Value::some_variant("abc"))
            .expect("convertible"),
        json!(["value", "abc"])
    );
}

#[test]
fn floats_accept_integer_literals() {
    let value = repo()
        .value_from_json("M.Items", &json!([0, 1.5, -1]))
        .expect("convertible");

    assert_eq!(
        value,
        Value::array([Value::from(0.0), Value::from(1.5), Value::from(-1.0)])
    );
}

#[test]
fn extra_object_keys_are_ignored() {
    let value = repo()
        .value_from_json("M.Point", &json!({"x": 1, "y": 2, "z": 3}))
        .expect("convertible");

    assert_eq!(
        value,
        Value::record([("y", Value::from(2)), ("x", Value::from(1))])
    );
}

#[test]
fn missing_field() {
    let err = repo()
        .value_from_json("M.Point", &json!({"x": 1}))
        .expect_err("y is required");

    insta::assert_snapshot!(err.to_string(), @"record value is missing field `y`");
}

#[test]
fn unknown_variant() {
    let err = repo()
        .value_from_json("M.Maybe", &json!(["other", 1]))
        .expect_err("no such variant");

    insta::assert_snapshot!(err.to_string(), @"choice has no variant named `other`");
}

#[test]
fn malformed_inputs() {
    let repo = repo();

    let cases = [
        ("M.Point", json!([1, 2]), "invalid JSON value: expected Record value, found array"),
        ("M.Maybe", json!(["value"]), "invalid JSON value: choice must be a `[variant, value]` pair"),
        ("M.Blob", json!([256]), "invalid JSON value: 256 is not a byte"),
        ("Integer", json!(1.5), "invalid JSON value: 1.5 is not an integer"),
        ("Integer", json!("12a"), "invalid JSON value: `12a` is not a decimal integer"),
        ("M.Nothing", json!(0), "invalid JSON value: expected None value, found number"),
    ];

    for (name, data, expected) in cases {
        let err = repo.value_from_json(name, &data).expect_err(expected);
        assert!(matches!(err, Error::Json(_)), "{name}: {err}");
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn unknown_type_name() {
    let err = repo()
        .value_from_json("M.Missing", &json!(null))
        .expect_err("not declared");

    insta::assert_snapshot!(err.to_string(), @"type `M.Missing` is not in the type graph");
}

#[test]
fn non_finite_float() {
    let err = repo()
        .value_to_json("M.Items", &Value::array([Value::from(f64::NAN)]))
        .expect_err("NaN");

    insta::assert_snapshot!(err.to_string(), @"invalid JSON value: float NaN has no JSON representation");
}

#[test]
fn value_kind_mismatch() {
    let err = repo()
        .value_to_json("M.Blob", &Value::from("text"))
        .expect_err("string for bytes");

    insta::assert_snapshot!(err.to_string(), @"expected Bytes value, found String");
}
