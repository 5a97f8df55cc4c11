//! Signed variable-length integers.
//!
//! The value is split into 7-bit groups of its two's-complement form, most
//! significant group first. Only the last byte carries the end marker `0x80`.
//! Bit `0x40` of the first byte is the sign: the decoder preloads `-1` when it
//! is set, so negative numbers need no extra sign group.
//!
//! ```text
//!          0 -> 80
//!         -1 -> ff
//!         64 -> 00 c0
//!        128 -> 01 80
//! ```

use bytes::{Buf, BufMut};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{CodecError, Result};

pub const END_BIT: u8 = 0x80;
pub const SIGN_BIT: u8 = 0x40;
pub const GROUP_MASK: u8 = 0x7F;

/// Groups needed for any `i64`: 64 bits plus one sign bit, seven per group.
pub const MAX_I64_GROUPS: usize = 10;

/// True once `rest` is nothing but sign extension of the last group.
#[inline]
fn is_final(group: u8, rest_is_zero: bool, rest_is_minus_one: bool) -> bool {
    if group & SIGN_BIT == 0 {
        rest_is_zero
    } else {
        rest_is_minus_one
    }
}

/// Writes an arbitrary precision integer.
pub fn write_big(value: &BigInt, buf: &mut impl BufMut) {
    let radix = BigInt::from(1u8 << 7);
    let minus_one = -BigInt::one();

    let mut groups = Vec::new();
    let mut rest = value.clone();
    loop {
        let (quotient, low) = rest.div_mod_floor(&radix);
        // `div_mod_floor` keeps `low` in 0..128 even for negative values.
        let group = low.iter_u32_digits().next().unwrap_or(0) as u8;
        groups.push(group);
        rest = quotient;
        if is_final(group, rest.is_zero(), rest == minus_one) {
            break;
        }
    }

    groups[0] |= END_BIT;
    for group in groups.iter().rev() {
        buf.put_u8(*group);
    }
}

/// Reads an arbitrary precision integer, consuming up to and including its
/// terminal byte.
pub fn read_big(buf: &mut impl Buf) -> Result<BigInt> {
    if !buf.has_remaining() {
        return Err(CodecError::UnexpectedEnd {
            needed: 1,
            available: 0,
        });
    }

    let mut acc = if buf.chunk()[0] & SIGN_BIT != 0 {
        -BigInt::one()
    } else {
        BigInt::zero()
    };

    while buf.has_remaining() {
        let byte = buf.get_u8();
        acc = acc * 128u32 + u32::from(byte & GROUP_MASK);
        if byte & END_BIT != 0 {
            return Ok(acc);
        }
    }

    Err(CodecError::UnterminatedInteger)
}

/// Writes an `i64` using a stack buffer.
pub fn write_i64(value: i64, buf: &mut impl BufMut) {
    let mut groups = [0u8; MAX_I64_GROUPS];
    let mut len = 0;
    let mut rest = value;
    loop {
        let group = (rest & i64::from(GROUP_MASK)) as u8;
        rest >>= 7;
        groups[len] = group;
        len += 1;
        if is_final(group, rest == 0, rest == -1) {
            break;
        }
    }

    groups[0] |= END_BIT;
    for group in groups[..len].iter().rev() {
        buf.put_u8(*group);
    }
}

/// Reads an `i64` from the start of `input`, returning the value and the number
/// of bytes consumed.
///
/// Fails with [`CodecError::IntegerOverflow`] when the encoded value is outside
/// the `i64` range, however many redundant sign groups precede it.
pub fn read_i64(input: &[u8]) -> Result<(i64, usize)> {
    let Some(&first) = input.first() else {
        return Err(CodecError::UnexpectedEnd {
            needed: 1,
            available: 0,
        });
    };

    let mut acc: i64 = if first & SIGN_BIT != 0 { -1 } else { 0 };
    for (i, &byte) in input.iter().enumerate() {
        acc = acc
            .checked_mul(128)
            .and_then(|v| v.checked_add(i64::from(byte & GROUP_MASK)))
            .ok_or(CodecError::IntegerOverflow)?;
        if byte & END_BIT != 0 {
            return Ok((acc, i + 1));
        }
    }

    Err(CodecError::UnterminatedInteger)
}

/// Encoded size of an `i64`, without writing it.
pub fn size_i64(value: i64) -> usize {
    let mut len = 1;
    let mut rest = value >> 7;
    let mut group = (value & i64::from(GROUP_MASK)) as u8;
    while !is_final(group, rest == 0, rest == -1) {
        group = (rest & i64::from(GROUP_MASK)) as u8;
        rest >>= 7;
        len += 1;
    }
    len
}
