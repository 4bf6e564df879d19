//! BER/DER encoder, built on `cookie-factory` serializers
//!
//! Lengths are always definite and use the minimal number of octets, in
//! both modes.

use crate::ber::canonical::der_sorted_encodings;
use crate::ber::integer::strip_redundant_octets;
use crate::ber::length::minimal_be_bytes;
use crate::ber::*;
use crate::error::BerError;
use crate::mode::Mode;
use cookie_factory::bytes::be_u8;
use cookie_factory::combinator::slice;
use cookie_factory::gen_simple;
use cookie_factory::sequence::tuple;
use cookie_factory::{GenError, GenResult, SerializeFn, WriteContext};
use std::io::Write;

/// Encode the identifier octets
pub fn ber_encode_identifier<W: Write>(
    class: Class,
    constructed: bool,
    tag: Tag,
) -> impl SerializeFn<W> {
    slice(identifier_octets(class, constructed, tag))
}

/// Encode the length octets
pub fn ber_encode_length<W: Write>(length: Length) -> impl SerializeFn<W> {
    move |out: WriteContext<W>| match length {
        Length::Definite(sz) => slice(definite_length_octets(sz))(out),
        Length::Indefinite => be_u8(0x80)(out),
    }
}

fn identifier_octets(class: Class, constructed: bool, tag: Tag) -> Vec<u8> {
    let b0 = class.identifier_bits() | if constructed { 0b0010_0000 } else { 0 };
    if tag.0 <= Tag::MAX_LOW_FORM {
        return vec![b0 | tag.0 as u8];
    }
    // high-tag-number form: base 128, most significant group first
    let mut groups = vec![(tag.0 & 0x7f) as u8];
    let mut rest = tag.0 >> 7;
    while rest > 0 {
        groups.push(0x80 | (rest & 0x7f) as u8);
        rest >>= 7;
    }
    groups.push(b0 | 0b0001_1111);
    groups.reverse();
    groups
}

fn definite_length_octets(sz: usize) -> Vec<u8> {
    if sz < 0x80 {
        return vec![sz as u8];
    }
    let b = minimal_be_bytes(sz);
    let mut v = Vec::with_capacity(b.len() + 1);
    v.push(0x80 | b.len() as u8);
    v.extend(b);
    v
}

/// Encode a header, using the length it holds
pub fn ber_encode_header<'a, W: Write + 'a>(hdr: &'a Header) -> impl SerializeFn<W> + 'a {
    tuple((
        ber_encode_identifier(hdr.class, hdr.constructed, hdr.tag),
        ber_encode_length(hdr.length),
    ))
}

/// Encode the content octets of an object, in the given mode
pub fn ber_encode_object_content<'a, W: Write + 'a>(
    content: &'a BerObjectContent,
    mode: Mode,
) -> impl SerializeFn<W> + 'a {
    move |out: WriteContext<W>| write_content(content, mode, out)
}

/// Encode an object, in the given mode
///
/// The header length is recomputed from the content, and the constructed
/// flag is derived from the content kind.
///
/// ```rust
/// # use asn1_object::ber::{ber_encode_object, BerObject};
/// # use asn1_object::Mode;
/// use cookie_factory::gen_simple;
///
/// let obj = BerObject::from_set(vec![BerObject::from_u64(2), BerObject::from_u64(1)]);
/// let v = gen_simple(ber_encode_object(&obj, Mode::Der), Vec::new()).expect("serialization failed");
/// assert_eq!(&v, &[0x31, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02]);
/// ```
pub fn ber_encode_object<'a, W: Write + 'a>(
    obj: &'a BerObject,
    mode: Mode,
) -> impl SerializeFn<W> + 'a {
    move |out: WriteContext<W>| write_object(obj, mode, out)
}

fn write_object<W: Write>(obj: &BerObject, mode: Mode, out: WriteContext<W>) -> GenResult<W> {
    let content = content_to_vec(&obj.content, mode)?;
    let out = ber_encode_identifier(obj.header.class, obj.is_constructed(), obj.header.tag)(out)?;
    let out = ber_encode_length(Length::Definite(content.len()))(out)?;
    slice(content)(out)
}

pub(crate) fn content_to_vec(content: &BerObjectContent, mode: Mode) -> Result<Vec<u8>, GenError> {
    gen_simple(
        |out: WriteContext<Vec<u8>>| write_content(content, mode, out),
        Vec::new(),
    )
}

fn write_content<W: Write>(
    content: &BerObjectContent,
    mode: Mode,
    out: WriteContext<W>,
) -> GenResult<W> {
    match content {
        BerObjectContent::Boolean(b) => be_u8(if *b { 0xff } else { 0x00 })(out),
        BerObjectContent::Integer(i) => {
            if i.is_empty() {
                return Err(GenError::CustomError(0));
            }
            if mode.is_restricted() {
                return slice(strip_redundant_octets(i))(out);
            }
            slice(i)(out)
        }
        BerObjectContent::BitString(unused, b) => write_bitstring(*unused, &b.data, mode, out),
        BerObjectContent::OctetString(v)
        | BerObjectContent::UTCTime(v)
        | BerObjectContent::GeneralizedTime(v)
        | BerObjectContent::Unknown(_, _, v) => slice(v)(out),
        BerObjectContent::Null => Ok(out),
        BerObjectContent::OID(oid) => slice(oid.as_bytes())(out),
        BerObjectContent::NumericString(s)
        | BerObjectContent::PrintableString(s)
        | BerObjectContent::IA5String(s)
        | BerObjectContent::UTF8String(s) => slice(s)(out),
        BerObjectContent::Set(v) if mode.is_restricted() => der_sorted_encodings(v)?
            .iter()
            .try_fold(out, |out, e| slice(e)(out)),
        BerObjectContent::Sequence(v) | BerObjectContent::Set(v) => v
            .iter()
            .try_fold(out, |out, o| write_object(o, mode, out)),
        BerObjectContent::Tagged(_, _, inner) => write_object(inner, mode, out),
    }
}

/// Octets identifying an object, for equality and hashing
///
/// This is the DER encoding when the object can be encoded. Otherwise the
/// parts that cannot be encoded are written as stored, and DER is used for
/// everything else, so distinct values keep distinct octets.
pub(crate) fn identity_octets(obj: &BerObject) -> Vec<u8> {
    if let Ok(v) = obj.to_der_vec() {
        return v;
    }
    let content = identity_content(&obj.content);
    let mut v = identifier_octets(obj.header.class, obj.is_constructed(), obj.header.tag);
    v.extend(definite_length_octets(content.len()));
    v.extend(content);
    v
}

/// Content part of [`identity_octets`]
pub(crate) fn identity_content(content: &BerObjectContent) -> Vec<u8> {
    if let Ok(v) = content_to_vec(content, Mode::Der) {
        return v;
    }
    match content {
        BerObjectContent::Sequence(v) => v.iter().flat_map(identity_octets).collect(),
        BerObjectContent::Set(v) => {
            let mut parts: Vec<_> = v.iter().map(identity_octets).collect();
            parts.sort();
            parts.concat()
        }
        BerObjectContent::Tagged(_, _, inner) => identity_octets(inner),
        BerObjectContent::BitString(unused, b) => {
            let mut v = Vec::with_capacity(b.data.len() + 1);
            v.push(*unused);
            v.extend_from_slice(&b.data);
            v
        }
        // only integers and bit strings can fail among primitives
        c => c.as_slice().map(<[u8]>::to_vec).unwrap_or_default(),
    }
}

fn write_bitstring<W: Write>(
    unused: u8,
    data: &[u8],
    mode: Mode,
    out: WriteContext<W>,
) -> GenResult<W> {
    if unused > 7 || (data.is_empty() && unused != 0) {
        return Err(GenError::CustomError(0));
    }
    match data.split_last() {
        // X.690 11.2.1: unused bits are zero in DER
        Some((&last, head)) if mode.is_restricted() && unused > 0 => {
            let mask = !((1u8 << unused) - 1);
            tuple((be_u8(unused), slice(head), be_u8(last & mask)))(out)
        }
        _ => tuple((be_u8(unused), slice(data)))(out),
    }
}

impl BerObject {
    /// Encode the object in the given mode
    pub fn to_vec(&self, mode: Mode) -> Result<Vec<u8>, BerError> {
        gen_simple(ber_encode_object(self, mode), Vec::new()).map_err(BerError::from)
    }

    /// Encode the object using DER
    ///
    /// Elements of SETs are sorted by their encoding. The object itself is not
    /// modified.
    pub fn to_der_vec(&self) -> Result<Vec<u8>, BerError> {
        self.to_vec(Mode::Der)
    }

    /// Write the encoding of the object to `sink`, and return the number of bytes written
    ///
    /// Write failures are reported as `SinkError`.
    pub fn write_to<W: Write>(&self, sink: &mut W, mode: Mode) -> Result<u64, BerError> {
        let (_, written) = cookie_factory::gen(ber_encode_object(self, mode), sink)?;
        Ok(written)
    }
}
