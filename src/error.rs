//! Error type for BER/DER decoding and encoding

use crate::ber::{Class, Tag};
use nom::error::{ErrorKind, ParseError};
use nom::IResult;
use std::io;
use thiserror::Error;

/// Holds the result of parsing functions
///
/// `O` is the output type, and defaults to a `BerObject`.
///
/// Note that this type is also a `Result`, so usual functions (`map`, `unwrap` etc.) are available.
pub type BerResult<'a, O = crate::ber::BerObject> = IResult<&'a [u8], O, BerError>;

/// Holds the result of parsing functions (DER)
///
/// Note that this type is also a `Result`, so usual functions (`map`, `unwrap` etc.) are available.
pub type DerResult<'a> = BerResult<'a, crate::der::DerObject>;

/// DER-specific constraints violated by an otherwise valid BER encoding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DerConstraint {
    /// BOOLEAN content must be `00` or `ff` (X.690 11.1)
    InvalidBoolean,
    /// INTEGER content has redundant leading octets (X.690 8.3.2)
    IntegerNotMinimal,
    /// Unused bits of a BIT STRING must be zero (X.690 11.2.1)
    UnusedBitsNotZero,
    /// Strings must use the primitive encoding (X.690 10.2)
    ConstructedString,
    /// SET elements must be sorted by their encoding (X.690 11.6)
    UnsortedSet,
    /// UTCTime and GeneralizedTime must end with `Z` (X.690 11.7/11.8)
    MissingTimeZone,
}

/// Errors raised while decoding or encoding BER/DER objects
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BerError {
    /// Identifier octets are truncated, overflow, or are not minimally encoded
    #[error("malformed tag")]
    MalformedTag,
    /// Length octets are reserved, overflow, or are not allowed in this mode
    #[error("malformed length")]
    MalformedLength,
    /// Declared length exceeds the available input
    #[error("truncated content")]
    TruncatedContent,
    /// Indefinite-length value is missing its end-of-contents marker
    #[error("unterminated indefinite length")]
    UnterminatedIndefiniteLength,
    /// End-of-contents marker found where a value was expected
    #[error("unexpected end-of-contents marker")]
    UnexpectedEndOfContents,
    /// Extra data found after the object
    #[error("extra data found after object")]
    TrailingData,
    /// Input is valid BER but does not map to a known object kind
    #[error("cannot recognise object")]
    UnrecognizedObject,

    /// Object does not have the expected tag
    #[error("unexpected tag: expected {expected:?}, got {actual:?}")]
    UnexpectedTag { expected: Option<Tag>, actual: Tag },
    /// Object does not have the expected class
    #[error("unexpected class: expected {expected}, got {actual}")]
    UnexpectedClass { expected: Class, actual: Class },
    #[error("constructed encoding expected")]
    ConstructExpected,
    #[error("primitive encoding expected")]
    ConstructUnexpected,
    /// Content octets are not a valid value for the tag
    #[error("invalid content for object")]
    BerValueError,
    /// String content is not valid for the string type
    #[error("invalid characters in string")]
    StringInvalidCharset,

    /// Ber object does not have the expected type
    #[error("object does not have the expected type")]
    BerTypeError,
    /// Ber integer is too large to fit in a native type. Use `as_bigint()`
    #[error("integer too large")]
    IntegerTooLarge,
    /// Ber integer is negative, while an unsigned integer was requested
    #[error("integer is negative")]
    IntegerNegative,

    #[error("maximum recursion depth reached")]
    BerMaxDepth,

    #[error("DER constraint failed: {0:?}")]
    DerConstraintFailed(DerConstraint),

    #[error("unsupported encoding")]
    Unsupported,

    #[error("write to sink failed: {0:?}")]
    SinkError(io::ErrorKind),
    #[error("read from source failed: {0:?}")]
    SourceError(io::ErrorKind),

    #[error("nom error: {0:?}")]
    NomError(ErrorKind),
}

impl BerError {
    /// Test if this error means "well-formed BER, but not the expected kind of object"
    ///
    /// These errors are the ones folded into `UnrecognizedObject` by the top-level
    /// entry points such as [`BerObject::from_bytes`](../ber/struct.BerObject.html#method.from_bytes).
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            BerError::UnexpectedTag { .. }
                | BerError::UnexpectedClass { .. }
                | BerError::ConstructExpected
                | BerError::ConstructUnexpected
                | BerError::BerValueError
                | BerError::StringInvalidCharset
                | BerError::BerTypeError
                | BerError::UnrecognizedObject
        )
    }
}

impl<I> ParseError<I> for BerError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        BerError::NomError(kind)
    }
    fn append(_input: I, kind: ErrorKind, _other: Self) -> Self {
        BerError::NomError(kind)
    }
}

impl From<cookie_factory::GenError> for BerError {
    fn from(e: cookie_factory::GenError) -> Self {
        match e {
            cookie_factory::GenError::IoError(e) => BerError::SinkError(e.kind()),
            _ => BerError::Unsupported,
        }
    }
}

impl From<nom::Err<BerError>> for BerError {
    /// Flatten a nom error: running out of input means the content was truncated
    fn from(e: nom::Err<BerError>) -> Self {
        match e {
            nom::Err::Incomplete(_) => BerError::TruncatedContent,
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        }
    }
}
