//! Decoding a complete object from a buffer or a byte source

use crate::ber::parser::{parse_object, parse_with_tag};
use crate::ber::{BerObject, Tag};
use crate::error::{BerError, BerResult};
use crate::mode::Mode;
use log::debug;
use std::io::{self, Read};

/// Check that an object consumed the whole input
fn exhaustive(res: BerResult<'_>) -> Result<BerObject, BerError> {
    let (rem, obj) = res?;
    if !rem.is_empty() {
        return Err(BerError::TrailingData);
    }
    Ok(obj)
}

/// Collapse the errors of a well-formed input of the wrong shape into `UnrecognizedObject`
fn recognise(res: Result<BerObject, BerError>) -> Result<BerObject, BerError> {
    res.map_err(|e| {
        if e.is_dispatch_error() {
            debug!("cannot recognise object: {}", e);
            BerError::UnrecognizedObject
        } else {
            e
        }
    })
}

/// Decode exactly one object from `data`, using the given encoding rules
///
/// Fails with `TrailingData` if bytes remain after the object, and with
/// `TruncatedContent` if the input ends before the object does. Errors keep
/// their detailed kind.
pub fn decode(data: &[u8], mode: Mode) -> Result<BerObject, BerError> {
    exhaustive(parse_object(data, mode, 0))
}

/// Read exactly one object from `source`, using the given encoding rules
///
/// Only the octets of the object are consumed, following bytes are left in
/// the source. The content is copied as it is read, so a large declared length
/// does not cause a large allocation before the data is available.
pub fn read_from<R: Read>(source: &mut R, mode: Mode) -> Result<BerObject, BerError> {
    let mut buf = Vec::new();
    read_element(source, mode, &mut buf, 0)?;
    decode(&buf, mode)
}

fn io_error(e: io::Error) -> BerError {
    match e.kind() {
        io::ErrorKind::UnexpectedEof => BerError::TruncatedContent,
        kind => BerError::SourceError(kind),
    }
}

fn read_byte<R: Read>(src: &mut R, out: &mut Vec<u8>) -> Result<u8, BerError> {
    let mut b = [0u8; 1];
    src.read_exact(&mut b).map_err(io_error)?;
    out.push(b[0]);
    Ok(b[0])
}

/// Copy the raw octets of one element from `src` to `out`
///
/// Only the framing is checked here: identifier and length octets are
/// validated by the parser once the element is complete.
fn read_element<R: Read>(
    src: &mut R,
    mode: Mode,
    out: &mut Vec<u8>,
    depth: usize,
) -> Result<(), BerError> {
    if depth > crate::ber::MAX_RECURSION {
        return Err(BerError::BerMaxDepth);
    }
    let start = out.len();
    let b0 = read_byte(src, out)?;
    if b0 & 0x1f == 0x1f {
        loop {
            // a tag cut short by the end of the source is malformed
            let b = read_byte(src, out).map_err(|e| match e {
                BerError::TruncatedContent => BerError::MalformedTag,
                e => e,
            })?;
            if b & 0x80 == 0 {
                break;
            }
            if out.len() - start > 6 {
                return Err(BerError::MalformedTag);
            }
        }
    }
    let l0 = read_byte(src, out)?;
    let len = match l0 {
        0x80 => {
            if !mode.allow_indefinite() || b0 & 0x20 == 0 {
                return Err(BerError::MalformedLength);
            }
            // children, up to the end-of-contents marker
            loop {
                let child = out.len();
                read_element(src, mode, out, depth + 1)?;
                if out[child..] == [0, 0] {
                    return Ok(());
                }
            }
        }
        0xff => return Err(BerError::MalformedLength),
        l if l & 0x80 == 0 => usize::from(l),
        l => {
            let mut len: usize = 0;
            for _ in 0..(l & 0x7f) {
                if len > (usize::MAX >> 8) {
                    return Err(BerError::MalformedLength);
                }
                len = (len << 8) | usize::from(read_byte(src, out)?);
            }
            len
        }
    };
    let copied = (&mut *src)
        .take(len as u64)
        .read_to_end(out)
        .map_err(io_error)?;
    if copied < len {
        return Err(BerError::TruncatedContent);
    }
    Ok(())
}

impl BerObject {
    /// Decode exactly one BER object from `data`
    ///
    /// Any input that is well-formed but cannot be turned into an object
    /// (wrong tag or encoding for the type, invalid value) is reported as
    /// `UnrecognizedObject`.
    ///
    /// ```rust
    /// # use asn1_object::ber::BerObject;
    /// # use asn1_object::error::BerError;
    /// let obj = BerObject::from_bytes(&[0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02])
    ///     .expect("decoding failed");
    /// assert_eq!(obj.as_sequence().map(|v| v.len()), Ok(2));
    ///
    /// let res = BerObject::from_bytes(&[0x02, 0x01, 0x01, 0x00]);
    /// assert_eq!(res, Err(BerError::TrailingData));
    /// ```
    pub fn from_bytes(data: &[u8]) -> Result<BerObject, BerError> {
        recognise(decode(data, Mode::Ber))
    }

    /// Decode exactly one DER object from `data`
    pub fn from_der_bytes(data: &[u8]) -> Result<BerObject, BerError> {
        recognise(decode(data, Mode::Der))
    }

    /// Decode exactly one BER object from `data`, which must have the universal tag `tag`
    pub fn from_bytes_with_tag(data: &[u8], tag: Tag) -> Result<BerObject, BerError> {
        recognise(exhaustive(parse_with_tag(data, tag, Mode::Ber)))
    }

    /// Read exactly one BER object from `source`
    pub fn from_reader<R: Read>(source: &mut R) -> Result<BerObject, BerError> {
        recognise(read_from(source, Mode::Ber))
    }

    /// Read exactly one DER object from `source`
    pub fn from_der_reader<R: Read>(source: &mut R) -> Result<BerObject, BerError> {
        recognise(read_from(source, Mode::Der))
    }
}
