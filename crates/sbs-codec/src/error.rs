//! Error type for encode and decode operations.

use num_bigint::BigInt;
use sbs_core::TypeRef;
use thiserror::Error;

/// Every failure aborts the whole call; no partial output is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("unexpected end of input: need {needed} bytes, have {available}")]
    UnexpectedEnd { needed: usize, available: usize },

    #[error("integer has no terminal byte before end of input")]
    UnterminatedInteger,

    /// The value does not fit the serializer's native integer width.
    #[error("integer does not fit in 64 bits")]
    IntegerOverflow,

    #[error("invalid length prefix {0}")]
    InvalidLength(BigInt),

    #[error("choice index {index} out of range for {count} variants")]
    InvalidChoiceIndex { index: BigInt, count: usize },

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("record value is missing field `{0}`")]
    MissingField(String),

    #[error("choice has no variant named `{0}`")]
    UnknownVariant(String),

    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("type `{0}` is not in the type graph")]
    UnknownType(TypeRef),

    /// Array counts are capped by input size so zero-width elements cannot
    /// inflate a short input.
    #[error("array of {count} elements exceeds the remaining decode budget of {available}")]
    ElementLimitExceeded { count: usize, available: usize },

    #[error("value nesting exceeds {0} levels")]
    DepthLimitExceeded(u32),

    #[error("serializer `{0}` is not available in this build")]
    Unavailable(&'static str),
}

pub type Result<T> = std::result::Result<T, CodecError>;
