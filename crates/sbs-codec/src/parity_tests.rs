use bytes::Bytes;
use num_bigint::BigInt;
use sbs_core::{Entry, Type, TypeGraph, TypeRef, Value};

use crate::{
    CodecError, FastSerializer, PortableSerializer, Serializer, SerializerKind, ZERO_WIDTH_ALLOWANCE,
};

fn graph() -> TypeGraph {
    let mut graph = TypeGraph::new();
    graph.insert(
        TypeRef::qualified("M", "Tree"),
        Type::Record(vec![
            Entry::new("label", Type::String),
            Entry::new("weight", Type::Float),
            Entry::new("payload", Type::Bytes),
            Entry::new(
                "children",
                Type::array(Type::reference(Some("M"), "Tree")),
            ),
            Entry::new(
                "extra",
                Type::Choice(vec![
                    Entry::new("none", Type::None),
                    Entry::new("flag", Type::Boolean),
                    Entry::new("count", Type::Integer),
                ]),
            ),
        ]),
    );
    graph
}

fn tree(label: &str, count: i64, children: Vec<Value>) -> Value {
    Value::record([
        ("label", label.into()),
        ("weight", (count as f64 / 3.0).into()),
        ("payload", Value::from(label.as_bytes())),
        ("children", Value::Array(children)),
        ("extra", Value::choice("count", count)),
    ])
}

fn samples() -> Vec<(Type, Value)> {
    let tree_ty = Type::reference(Some("M"), "Tree");
    let mut samples: Vec<(Type, Value)> = vec![
        (Type::None, Value::None),
        (Type::Boolean, true.into()),
        (Type::Float, f64::MIN_POSITIVE.into()),
        (Type::Float, (-0.0).into()),
        (Type::String, "".into()),
        (Type::String, "žluťoučký kůň".into()),
        (Type::Bytes, Value::from(&[0u8, 255, 7][..])),
        (
            Type::array(Type::optional(Type::Integer)),
            Value::array([Value::some_variant(-3), Value::none_variant()]),
        ),
        (
            tree_ty.clone(),
            tree(
                "root",
                -1,
                vec![tree("a", 1_000_000, vec![]), tree("b", i64::MIN, vec![])],
            ),
        ),
    ];
    for value in [0, 1, -1, 63, 64, -64, -65, 0xFFFF_FFFF, i64::MAX, i64::MIN] {
        samples.push((Type::Integer, value.into()));
    }
    samples
}

#[test]
fn byte_identical_output() {
    let graph = graph();
    for (ty, value) in samples() {
        let portable = PortableSerializer.encode(&graph, &ty, &value).unwrap();
        let fast = FastSerializer.encode(&graph, &ty, &value).unwrap();
        assert_eq!(portable, fast, "{ty} {value:?}");
    }
}

#[test]
fn cross_decode() {
    let graph = graph();
    let serializers: [&dyn Serializer; 2] = [&PortableSerializer, &FastSerializer];
    for (ty, value) in samples() {
        for writer in serializers {
            let bytes = Bytes::from(writer.encode(&graph, &ty, &value).unwrap());
            for reader in serializers {
                let (decoded, rest) = reader.decode(&graph, &ty, bytes.clone()).unwrap();
                assert_eq!(
                    decoded,
                    value,
                    "{} -> {}: {ty}",
                    writer.name(),
                    reader.name()
                );
                assert!(rest.is_empty());
            }
        }
    }
}

#[test]
fn same_remainder() {
    let graph = graph();
    let data = Bytes::from_static(&[0x83, 0x61, 0x62, 0x63, 0x01, 0x02]);
    let portable = PortableSerializer
        .decode(&graph, &Type::String, data.clone())
        .unwrap();
    let fast = FastSerializer.decode(&graph, &Type::String, data).unwrap();
    assert_eq!(portable, fast);
    assert_eq!(fast.1.as_ref(), &[0x01, 0x02]);
}

#[test]
fn same_decode_errors() {
    let graph = graph();
    let opt = Type::optional(Type::Integer);
    let cases: Vec<(Type, &[u8])> = vec![
        (Type::String, &[0x82, 0xFF, 0xFE][..]),
        (Type::String, &[0x85, 0x61][..]),
        (Type::Bytes, &[0xFF][..]),
        (Type::Integer, &[0x01, 0x02][..]),
        (Type::Float, &[0x00][..]),
        (opt.clone(), &[0x82][..]),
        (opt, &[0xFF][..]),
    ];
    for (ty, data) in cases {
        let data = Bytes::copy_from_slice(data);
        let portable = PortableSerializer.decode(&graph, &ty, data.clone());
        let fast = FastSerializer.decode(&graph, &ty, data);
        assert!(portable.is_err());
        assert_eq!(portable, fast, "{ty}");
    }
}

#[test]
fn fast_rejects_values_beyond_i64() {
    let graph = graph();
    for raw in [
        BigInt::from(i64::MAX) + 1,
        BigInt::from(i64::MIN) - 1,
        BigInt::from(0xFFFF_FFFF_FFFF_FFFF_FFFFu128),
    ] {
        let value = Value::Integer(raw);
        let bytes = PortableSerializer
            .encode(&graph, &Type::Integer, &value)
            .unwrap();

        assert_eq!(
            FastSerializer.encode(&graph, &Type::Integer, &value),
            Err(CodecError::IntegerOverflow)
        );
        assert_eq!(
            FastSerializer.decode(&graph, &Type::Integer, Bytes::from(bytes)),
            Err(CodecError::IntegerOverflow)
        );
    }
}

#[test]
fn default_kind_is_fast() {
    assert_eq!(SerializerKind::default(), SerializerKind::Fast);
    assert!(SerializerKind::Fast.is_available());
    assert_eq!(SerializerKind::from_name("portable"), Some(SerializerKind::Portable));
    assert_eq!(SerializerKind::from_name("cython"), None);
}

#[test]
fn free_functions_use_default() {
    let graph = graph();
    let bytes = crate::encode(&graph, &Type::Integer, &128.into()).unwrap();
    assert_eq!(bytes, vec![0x01, 0x80]);
    let (value, _) = crate::decode(&graph, &Type::Integer, Bytes::from(bytes)).unwrap();
    assert_eq!(value, 128.into());
}

#[test]
fn zero_width_elements_cannot_outgrow_input() {
    let graph = TypeGraph::new();
    let ty = Type::array(Type::None);
    // Count 2^21 with no element bytes.
    let data = Bytes::from_static(&[0x01, 0x00, 0x00, 0x80]);
    let expected: Result<(Value, Bytes), CodecError> = Err(CodecError::ElementLimitExceeded {
        count: 1 << 21,
        available: 4 + ZERO_WIDTH_ALLOWANCE,
    });

    assert_eq!(PortableSerializer.decode(&graph, &ty, data.clone()), expected);
    assert_eq!(FastSerializer.decode(&graph, &ty, data), expected);
}

#[test]
fn element_budget_is_shared_across_nested_arrays() {
    let graph = TypeGraph::new();
    let ty = Type::array(Type::array(Type::None));
    // Inner count 2^20 needs a leading zero group to stay positive.
    let inner = [0x00, 0x40, 0x00, 0x80];
    let mut data = vec![0x82];
    data.extend_from_slice(&inner);
    data.extend_from_slice(&inner);
    let data = Bytes::from(data);

    let portable = PortableSerializer.decode(&graph, &ty, data.clone());
    let fast = FastSerializer.decode(&graph, &ty, data);

    assert_eq!(portable, fast);
    assert!(matches!(
        portable,
        Err(CodecError::ElementLimitExceeded { count, .. }) if count == 1 << 20
    ));
}

#[test]
fn zero_width_elements_within_allowance_round_trip() {
    let graph = TypeGraph::new();
    let ty = Type::array(Type::None);
    let value = Value::Array(vec![Value::None; 1000]);
    let bytes = Bytes::from(PortableSerializer.encode(&graph, &ty, &value).unwrap());

    let serializers: [&dyn Serializer; 2] = [&PortableSerializer, &FastSerializer];
    for serializer in serializers {
        let (decoded, rest) = serializer.decode(&graph, &ty, bytes.clone()).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }
}
