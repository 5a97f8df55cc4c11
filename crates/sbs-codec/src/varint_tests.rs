use bytes::Bytes;
use num_bigint::BigInt;

use crate::CodecError;
use crate::varint::{read_big, read_i64, size_i64, write_big, write_i64};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn big(value: i128) -> Vec<u8> {
    let mut out = Vec::new();
    write_big(&BigInt::from(value), &mut out);
    out
}

fn native(value: i64) -> Vec<u8> {
    let mut out = Vec::new();
    write_i64(value, &mut out);
    out
}

const CASES: &[(i64, &str)] = &[
    (0, "80"),
    (1, "81"),
    (-1, "ff"),
    (63, "bf"),
    (64, "00 c0"),
    (-64, "c0"),
    (-65, "7f bf"),
    (127, "00 ff"),
    (128, "01 80"),
    (8191, "3f ff"),
    (0xFFFF_FFFF, "0f 7f 7f 7f ff"),
    (i64::MAX, "00 7f 7f 7f 7f 7f 7f 7f 7f ff"),
    (i64::MIN, "7f 00 00 00 00 00 00 00 00 80"),
];

#[test]
fn boundary_encodings() {
    for &(value, expected) in CASES {
        assert_eq!(hex(&big(value.into())), expected, "big {value}");
        assert_eq!(hex(&native(value)), expected, "i64 {value}");
        assert_eq!(size_i64(value), native(value).len(), "size {value}");
    }
}

#[test]
fn boundary_decodings() {
    for &(value, _) in CASES {
        let encoded = native(value);

        let mut buf = Bytes::from(encoded.clone());
        assert_eq!(read_big(&mut buf).unwrap(), BigInt::from(value));
        assert!(buf.is_empty());

        assert_eq!(read_i64(&encoded).unwrap(), (value, encoded.len()));
    }
}

#[test]
fn zero_is_single_terminal_byte() {
    assert_eq!(big(0), vec![0x80]);
    assert_eq!(native(0), vec![0x80]);
}

#[test]
fn decode_stops_at_terminal_byte() {
    let mut buf = Bytes::from_static(&[0x01, 0x80, 0xAA, 0xBB]);
    assert_eq!(read_big(&mut buf).unwrap(), BigInt::from(128));
    assert_eq!(buf.as_ref(), &[0xAA, 0xBB]);

    assert_eq!(read_i64(&[0x01, 0x80, 0xAA]).unwrap(), (128, 2));
}

#[test]
fn redundant_sign_groups_are_accepted() {
    assert_eq!(read_i64(&[0x00, 0x00, 0x81]).unwrap(), (1, 3));
    assert_eq!(read_i64(&[0x7f, 0x7f, 0xff]).unwrap(), (-1, 3));

    let mut buf = Bytes::from_static(&[0x7f, 0x7f, 0xff]);
    assert_eq!(read_big(&mut buf).unwrap(), BigInt::from(-1));
}

#[test]
fn beyond_64_bits() {
    let value = BigInt::from(0xFFFF_FFFF_FFFF_FFFF_FFFFu128);
    let mut encoded = Vec::new();
    write_big(&value, &mut encoded);
    assert_eq!(hex(&encoded), "07 7f 7f 7f 7f 7f 7f 7f 7f 7f 7f ff");

    let mut buf = Bytes::from(encoded.clone());
    assert_eq!(read_big(&mut buf).unwrap(), value);
    assert_eq!(read_i64(&encoded), Err(CodecError::IntegerOverflow));
}

#[test]
fn u64_max_overflows_native() {
    let encoded = big(i128::from(u64::MAX));
    assert_eq!(hex(&encoded), "01 7f 7f 7f 7f 7f 7f 7f 7f ff");
    assert_eq!(read_i64(&encoded), Err(CodecError::IntegerOverflow));
}

#[test]
fn negative_beyond_64_bits() {
    let value = BigInt::from(i64::MIN) - 1;
    let mut encoded = Vec::new();
    write_big(&value, &mut encoded);

    let mut buf = Bytes::from(encoded.clone());
    assert_eq!(read_big(&mut buf).unwrap(), value);
    assert_eq!(read_i64(&encoded), Err(CodecError::IntegerOverflow));
}

#[test]
fn missing_terminal_byte() {
    let mut buf = Bytes::from_static(&[0x01, 0x02]);
    assert_eq!(read_big(&mut buf), Err(CodecError::UnterminatedInteger));
    assert_eq!(read_i64(&[0x01, 0x02]), Err(CodecError::UnterminatedInteger));
}

#[test]
fn empty_input() {
    let end = CodecError::UnexpectedEnd {
        needed: 1,
        available: 0,
    };
    let mut buf = Bytes::new();
    assert_eq!(read_big(&mut buf), Err(end.clone()));
    assert_eq!(read_i64(&[]), Err(end));
}
