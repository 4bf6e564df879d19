use crate::ber::parser::{
    object_from_parts, parse_object, parse_with_tag, read_content_as, read_header,
};
use crate::ber::*;
use crate::error::*;
use crate::mode::Mode;
use nom::Err;

/// Parse DER object recursively
///
/// Return a tuple containing the remaining (unparsed) bytes and the DER Object, or an error.
///
/// ### Example
///
/// ```
/// use asn1_object::der::parse_der;
/// use asn1_object::ber::Tag;
///
/// let bytes = &[0x02, 0x03, 0x01, 0x00, 0x01];
/// let (_, obj) = parse_der(bytes).expect("parsing failed");
///
/// assert_eq!(obj.header.tag, Tag::Integer);
/// ```
#[inline]
pub fn parse_der(i: &[u8]) -> DerResult<'_> {
    parse_der_recursive(i, MAX_RECURSION)
}

/// Parse DER object recursively, specifying the maximum recursion depth
pub fn parse_der_recursive(i: &[u8], max_depth: usize) -> DerResult<'_> {
    parse_object(i, Mode::Der, MAX_RECURSION.saturating_sub(max_depth))
}

/// Parse a DER object, expecting a value with specified tag
pub fn parse_der_with_tag<T: Into<Tag>>(i: &[u8], tag: T) -> DerResult<'_> {
    parse_with_tag(i, tag.into(), Mode::Der)
}

/// Read a boolean value
///
/// The encoding of a boolean value shall be primitive. The contents octets shall consist of a
/// single octet.
///
/// If the boolean value is FALSE, the octet shall be zero.
/// If the boolean value is TRUE, the octet shall be one byte, and have all bits set to one (0xff).
#[inline]
pub fn parse_der_bool(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::Boolean)
}

/// Read an integer value
///
/// The encoding of a boolean value shall be primitive. The contents octets shall consist of one or
/// more octets, and the first nine bits shall not be all zeros or all ones.
///
/// # Examples
///
/// ```rust
/// # use asn1_object::der::{parse_der_integer, DerObject};
/// # use asn1_object::ber::BerObjectContent;
/// let empty = &b""[..];
/// let bytes = [0x02, 0x03, 0x01, 0x00, 0x01];
/// let expected  = DerObject::from_obj(BerObjectContent::Integer(b"\x01\x00\x01".to_vec()));
/// assert_eq!(
///     parse_der_integer(&bytes),
///     Ok((empty, expected))
/// );
/// ```
#[inline]
pub fn parse_der_integer(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::Integer)
}

/// Read an bitstring value
///
/// The unused bits of the last octet shall be zero.
#[inline]
pub fn parse_der_bitstring(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::BitString)
}

/// Read an octetstring value
#[inline]
pub fn parse_der_octetstring(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::OctetString)
}

/// Read a null value
#[inline]
pub fn parse_der_null(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::Null)
}

/// Read an object identifier value
#[inline]
pub fn parse_der_oid(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::Oid)
}

/// Read a UTF-8 string value
#[inline]
pub fn parse_der_utf8string(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::Utf8String)
}

/// Parse a sequence of DER elements
///
/// Read a sequence of DER objects, without any constraint on the types.
/// Sequence is parsed recursively, so if structured elements are found, they are parsed using the
/// same function.
///
/// To read a specific sequence of objects (giving the expected types), use the
/// [`parse_der_sequence_defined`](fn.parse_der_sequence_defined.html) function.
#[inline]
pub fn parse_der_sequence(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::Sequence)
}

/// Parse a set of DER elements
///
/// The elements must be sorted by their encoding.
#[inline]
pub fn parse_der_set(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::Set)
}

#[inline]
pub fn parse_der_numericstring(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::NumericString)
}

#[inline]
pub fn parse_der_printablestring(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::PrintableString)
}

#[inline]
pub fn parse_der_ia5string(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::Ia5String)
}

/// Read an UTC time value
///
/// The value shall end with `Z`.
#[inline]
pub fn parse_der_utctime(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::UtcTime)
}

/// Read a Generalized time value
///
/// The value shall end with `Z`.
#[inline]
pub fn parse_der_generalizedtime(i: &[u8]) -> DerResult<'_> {
    parse_der_with_tag(i, Tag::GeneralizedTime)
}

/// Parse DER object and try to decode it as a 32-bits unsigned integer
#[inline]
pub fn parse_der_u32(i: &[u8]) -> BerResult<'_, u32> {
    let (rem, obj) = parse_der_integer(i)?;
    let v = obj.as_u32().map_err(Err::Error)?;
    Ok((rem, v))
}

/// Parse DER object and try to decode it as a 64-bits unsigned integer
#[inline]
pub fn parse_der_u64(i: &[u8]) -> BerResult<'_, u64> {
    let (rem, obj) = parse_der_integer(i)?;
    let v = obj.as_u64().map_err(Err::Error)?;
    Ok((rem, v))
}

/// Read an object header, checking the DER constraints on identifier and length
pub fn der_read_element_header(i: &[u8]) -> BerResult<'_, Header> {
    read_header(i, Mode::Der)
}

/// Parse the next bytes as the content of a DER object, read as the universal type `tag`
///
/// Content type is *not* checked to match tag, caller is responsible of providing the correct tag
pub fn der_read_element_content_as(
    i: &[u8],
    tag: Tag,
    length: Length,
    constructed: bool,
    max_depth: usize,
) -> BerResult<'_, BerObjectContent> {
    let depth = MAX_RECURSION.saturating_sub(max_depth);
    read_content_as(i, Class::Universal, tag, length, constructed, Mode::Der, depth)
}

/// Parse the content of a DER object, given its header
pub fn der_read_element_content(i: &[u8], hdr: Header) -> DerResult<'_> {
    let (rem, content) = read_content_as(
        i,
        hdr.class,
        hdr.tag,
        hdr.length,
        hdr.constructed,
        Mode::Der,
        0,
    )?;
    Ok((rem, object_from_parts(hdr, content)))
}
