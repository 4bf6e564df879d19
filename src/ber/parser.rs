use crate::ber::canonical::is_canonically_ordered;
use crate::ber::integer::is_minimal_integer;
use crate::ber::*;
use crate::error::*;
use crate::mode::Mode;
use crate::oid::Oid;
use log::trace;
use nom::{Err, Needed};
use std::convert::TryFrom;

/// Default maximum recursion limit
pub const MAX_RECURSION: usize = 50;

/// Parse the identifier octets: class, constructed flag and tag number
///
/// Tag numbers up to 30 use a single octet. Larger numbers use the
/// high-tag-number form (X.690 8.1.2.4), and must fit in a `u32`.
pub(crate) fn parse_identifier(i: &[u8], mode: Mode) -> BerResult<'_, (Class, bool, Tag)> {
    let (&b0, rem) = match i.split_first() {
        Some(x) => x,
        None => return Err(Err::Incomplete(Needed::new(1))),
    };
    let class = match Class::try_from(b0 >> 6) {
        Ok(c) => c,
        Err(_) => return Err(Err::Error(BerError::MalformedTag)),
    };
    let constructed = b0 & 0b0010_0000 != 0;
    let low = b0 & 0b0001_1111;
    if low != 0b0001_1111 {
        return Ok((rem, (class, constructed, Tag(u32::from(low)))));
    }
    let mut tag: u32 = 0;
    for (idx, &b) in rem.iter().enumerate() {
        // X.690 8.1.2.4.2 (c): bits 7 to 1 of the first subsequent octet shall not all be zero
        custom_check!(i, idx == 0 && b & 0x7f == 0, BerError::MalformedTag)?;
        custom_check!(i, tag > (u32::MAX >> 7), BerError::MalformedTag)?;
        tag = (tag << 7) | u32::from(b & 0x7f);
        if b & 0x80 == 0 {
            custom_check!(
                i,
                mode.is_restricted() && tag <= Tag::MAX_LOW_FORM,
                BerError::MalformedTag
            )?;
            return Ok((&rem[idx + 1..], (class, constructed, Tag(tag))));
        }
    }
    // continuation bit set on the last available octet
    Err(Err::Error(BerError::MalformedTag))
}

/// Parse the length octets
///
/// The indefinite form is only accepted in BER, for constructed encodings.
pub(crate) fn parse_length(i: &[u8], mode: Mode, constructed: bool) -> BerResult<'_, Length> {
    let (&b0, rem) = match i.split_first() {
        Some(x) => x,
        None => return Err(Err::Incomplete(Needed::new(1))),
    };
    if b0 & 0x80 == 0 {
        return Ok((rem, Length::Definite(usize::from(b0))));
    }
    let n = usize::from(b0 & 0x7f);
    if n == 0 {
        custom_check!(
            i,
            !mode.allow_indefinite() || !constructed,
            BerError::MalformedLength
        )?;
        return Ok((rem, Length::Indefinite));
    }
    // X.690 8.1.3.5 (c): value 0b1111_1111 shall not be used
    custom_check!(i, n == 0x7f, BerError::MalformedLength)?;
    if rem.len() < n {
        return Err(Err::Incomplete(Needed::new(n - rem.len())));
    }
    let (llen, rem) = rem.split_at(n);
    custom_check!(
        i,
        mode.is_restricted() && llen[0] == 0,
        BerError::MalformedLength
    )?;
    let mut len: usize = 0;
    for &b in llen {
        custom_check!(i, len > (usize::MAX >> 8), BerError::MalformedLength)?;
        len = (len << 8) | usize::from(b);
    }
    // DER: the short form must be used for lengths up to 127
    custom_check!(
        i,
        mode.is_restricted() && len < 0x80,
        BerError::MalformedLength
    )?;
    Ok((rem, Length::Definite(len)))
}

pub(crate) fn read_header(i: &[u8], mode: Mode) -> BerResult<'_, Header> {
    let (rem, (class, constructed, tag)) = parse_identifier(i, mode)?;
    let (rem, length) = parse_length(rem, mode, constructed)?;
    Ok((rem, Header::new(class, constructed, tag, length)))
}

/// Read an object header
///
/// ### Example
///
/// ```
/// # use asn1_object::ber::{ber_read_element_header, Class, Length, Tag};
/// #
/// let bytes = &[0x02, 0x03, 0x01, 0x00, 0x01];
/// let (i, hdr) = ber_read_element_header(bytes).expect("could not read header");
///
/// assert_eq!(hdr.class, Class::Universal);
/// assert_eq!(hdr.tag, Tag::Integer);
/// assert_eq!(hdr.length, Length::Definite(3));
/// ```
pub fn ber_read_element_header(i: &[u8]) -> BerResult<'_, Header> {
    read_header(i, Mode::Ber)
}

/// Turn a missing input inside an enclosing object into a truncation error
#[inline]
pub(crate) fn truncated(e: Err<BerError>) -> Err<BerError> {
    match e {
        Err::Incomplete(_) => Err::Error(BerError::TruncatedContent),
        e => e,
    }
}

fn is_numeric(b: &u8) -> bool {
    b.is_ascii_digit() || *b == b' '
}

#[rustfmt::skip]
fn is_printable(b: &u8) -> bool {
    b.is_ascii_alphanumeric() ||
    matches!(*b, b' ' | b'\'' | b'(' | b')' | b'+' | b',' | b'-' | b'.' | b'/' | b':' | b'=' | b'?')
}

fn is_ia5(b: &u8) -> bool {
    b.is_ascii()
}

fn ascii_string<P: Fn(&u8) -> bool>(data: &[u8], pred: P) -> Result<String, BerError> {
    if !data.iter().all(pred) {
        return Err(BerError::StringInvalidCharset);
    }
    String::from_utf8(data.to_vec()).map_err(|_| BerError::StringInvalidCharset)
}

fn read_content_bitstring(data: &[u8], mode: Mode) -> Result<BerObjectContent, BerError> {
    let (&unused, bits) = data.split_first().ok_or(BerError::BerValueError)?;
    if unused > 7 || (bits.is_empty() && unused != 0) {
        return Err(BerError::BerValueError);
    }
    if mode.is_restricted() && unused > 0 {
        // X.690 11.2.1: unused bits shall be set to zero
        let last = bits[bits.len() - 1];
        if last & ((1u8 << unused) - 1) != 0 {
            return Err(BerError::DerConstraintFailed(DerConstraint::UnusedBitsNotZero));
        }
    }
    Ok(BerObjectContent::BitString(
        unused,
        BitStringObject {
            data: bits.to_vec(),
        },
    ))
}

fn read_content_time(data: &[u8], mode: Mode) -> Result<Vec<u8>, BerError> {
    if mode.is_restricted() && data.last() != Some(&b'Z') {
        return Err(BerError::DerConstraintFailed(DerConstraint::MissingTimeZone));
    }
    Ok(data.to_vec())
}

/// Interpret the content octets of a primitive encoding
fn primitive_content(
    class: Class,
    tag: Tag,
    data: &[u8],
    mode: Mode,
) -> Result<BerObjectContent, BerError> {
    if class != Class::Universal {
        return Ok(BerObjectContent::Unknown(class, tag, data.to_vec()));
    }
    match tag {
        Tag::EndOfContent => Err(BerError::UnexpectedEndOfContents),
        Tag::Boolean => {
            if data.len() != 1 {
                return Err(BerError::BerValueError);
            }
            // X.690 11.1: TRUE is encoded as 0xff
            if mode.is_restricted() && data[0] != 0 && data[0] != 0xff {
                return Err(BerError::DerConstraintFailed(DerConstraint::InvalidBoolean));
            }
            Ok(BerObjectContent::Boolean(data[0] != 0))
        }
        Tag::Integer => {
            if data.is_empty() {
                return Err(BerError::BerValueError);
            }
            if mode.is_restricted() && !is_minimal_integer(data) {
                return Err(BerError::DerConstraintFailed(
                    DerConstraint::IntegerNotMinimal,
                ));
            }
            Ok(BerObjectContent::Integer(data.to_vec()))
        }
        Tag::BitString => read_content_bitstring(data, mode),
        Tag::OctetString => Ok(BerObjectContent::OctetString(data.to_vec())),
        Tag::Null => {
            if !data.is_empty() {
                return Err(BerError::BerValueError);
            }
            Ok(BerObjectContent::Null)
        }
        Tag::Oid => Oid::new(data.to_vec())
            .map(BerObjectContent::OID)
            .map_err(|_| BerError::BerValueError),
        Tag::Utf8String => String::from_utf8(data.to_vec())
            .map(BerObjectContent::UTF8String)
            .map_err(|_| BerError::StringInvalidCharset),
        Tag::NumericString => ascii_string(data, is_numeric).map(BerObjectContent::NumericString),
        Tag::PrintableString => {
            ascii_string(data, is_printable).map(BerObjectContent::PrintableString)
        }
        Tag::Ia5String => ascii_string(data, is_ia5).map(BerObjectContent::IA5String),
        Tag::UtcTime => read_content_time(data, mode).map(BerObjectContent::UTCTime),
        Tag::GeneralizedTime => {
            read_content_time(data, mode).map(BerObjectContent::GeneralizedTime)
        }
        Tag::Sequence | Tag::Set => Err(BerError::ConstructExpected),
        _ => {
            trace!("keeping raw content for universal tag {}", tag);
            Ok(BerObjectContent::Unknown(class, tag, data.to_vec()))
        }
    }
}

/// Interpret the children of a constructed encoding
fn constructed_content(
    class: Class,
    tag: Tag,
    mut children: Vec<BerObject>,
    mode: Mode,
) -> Result<BerObjectContent, BerError> {
    if class != Class::Universal {
        // a single child is read as explicit tagging, which has the same encoding
        // as an implicitly tagged constructed type with one element
        if children.len() == 1 {
            if let Some(inner) = children.pop() {
                return Ok(BerObjectContent::Tagged(class, tag, Box::new(inner)));
            }
        }
        return Ok(BerObjectContent::Sequence(children));
    }
    match tag {
        Tag::Sequence => Ok(BerObjectContent::Sequence(children)),
        Tag::Set => {
            if mode.is_restricted() && !is_canonically_ordered(&children)? {
                return Err(BerError::DerConstraintFailed(DerConstraint::UnsortedSet));
            }
            Ok(BerObjectContent::Set(children))
        }
        t if t.is_string_type() => {
            if mode.is_restricted() {
                return Err(BerError::DerConstraintFailed(
                    DerConstraint::ConstructedString,
                ));
            }
            join_segments(t, children)
        }
        Tag::EndOfContent => Err(BerError::UnexpectedEndOfContents),
        Tag::Boolean
        | Tag::Integer
        | Tag::Null
        | Tag::Oid
        | Tag::RelativeOid
        | Tag::Enumerated
        | Tag::RealType => Err(BerError::ConstructUnexpected),
        _ => {
            trace!("reading universal tag {} as a sequence", tag);
            Ok(BerObjectContent::Sequence(children))
        }
    }
}

#[cfg(not(feature = "ber-constructed-strings"))]
fn join_segments(_tag: Tag, _children: Vec<BerObject>) -> Result<BerObjectContent, BerError> {
    Err(BerError::Unsupported)
}

/// Reassemble a segmented string (X.690 8.7.3, 8.6.3 and 8.23.6)
#[cfg(feature = "ber-constructed-strings")]
fn join_segments(tag: Tag, children: Vec<BerObject>) -> Result<BerObjectContent, BerError> {
    let count = children.len();
    let mut unused = 0;
    let mut data = Vec::new();
    for (idx, child) in children.into_iter().enumerate() {
        if !child.header.is_universal() || child.header.tag != tag {
            return Err(BerError::UnexpectedTag {
                expected: Some(tag),
                actual: child.header.tag,
            });
        }
        match child.content {
            BerObjectContent::BitString(u, b) => {
                // only the last segment may have unused bits
                if u != 0 && idx + 1 != count {
                    return Err(BerError::BerValueError);
                }
                unused = u;
                data.extend(b.data);
            }
            BerObjectContent::OctetString(v)
            | BerObjectContent::UTCTime(v)
            | BerObjectContent::GeneralizedTime(v)
            | BerObjectContent::Unknown(_, _, v) => data.extend(v),
            BerObjectContent::NumericString(s)
            | BerObjectContent::PrintableString(s)
            | BerObjectContent::IA5String(s)
            | BerObjectContent::UTF8String(s) => data.extend(s.into_bytes()),
            _ => return Err(BerError::BerValueError),
        }
    }
    if tag == Tag::BitString {
        data.insert(0, unused);
    }
    primitive_content(Class::Universal, tag, &data, Mode::Ber)
}

fn read_children(
    i: &[u8],
    length: Length,
    mode: Mode,
    depth: usize,
) -> BerResult<'_, Vec<BerObject>> {
    match length {
        Length::Definite(len) => {
            if i.len() < len {
                return Err(Err::Incomplete(Needed::new(len - i.len())));
            }
            let (mut data, rem) = i.split_at(len);
            let mut v = Vec::new();
            while !data.is_empty() {
                // a child cannot extend past the end of its parent
                let (r, obj) = parse_object(data, mode, depth + 1).map_err(truncated)?;
                v.push(obj);
                data = r;
            }
            Ok((rem, v))
        }
        Length::Indefinite => {
            let mut i = i;
            let mut v = Vec::new();
            loop {
                if i.is_empty() {
                    return Err(Err::Error(BerError::UnterminatedIndefiniteLength));
                }
                if i.starts_with(&[0, 0]) {
                    return Ok((&i[2..], v));
                }
                let (r, obj) = parse_object(i, mode, depth + 1)?;
                v.push(obj);
                i = r;
            }
        }
    }
}

pub(crate) fn read_content_as(
    i: &[u8],
    class: Class,
    tag: Tag,
    length: Length,
    constructed: bool,
    mode: Mode,
    depth: usize,
) -> BerResult<'_, BerObjectContent> {
    custom_check!(i, depth > MAX_RECURSION, BerError::BerMaxDepth)?;
    if constructed {
        let (rem, children) = read_children(i, length, mode, depth)?;
        let content = constructed_content(class, tag, children, mode).map_err(Err::Error)?;
        Ok((rem, content))
    } else {
        let len = length.definite().map_err(Err::Error)?;
        if i.len() < len {
            return Err(Err::Incomplete(Needed::new(len - i.len())));
        }
        let (data, rem) = i.split_at(len);
        let content = primitive_content(class, tag, data, mode).map_err(Err::Error)?;
        Ok((rem, content))
    }
}

/// Parse the next bytes as the content of a BER object, read as the universal type `tag`
///
/// Content type is *not* checked to match tag, caller is responsible of providing the correct tag
///
/// This function is mostly used when parsing implicit tagged objects, when reading primitive
/// types.
///
/// ### Example
///
/// ```
/// # use asn1_object::ber::{ber_read_element_content_as, ber_read_element_header, Tag};
/// #
/// # let bytes = &[0x02, 0x03, 0x01, 0x00, 0x01];
/// let (i, hdr) = ber_read_element_header(bytes).expect("could not read header");
/// let (_, content) = ber_read_element_content_as(
///     i, Tag::Integer, hdr.length, hdr.is_constructed(), 5
/// ).expect("parsing failed");
/// #
/// # assert_eq!(hdr.tag, Tag::Integer);
/// # assert_eq!(content.as_u32(), Ok(0x10001));
/// ```
pub fn ber_read_element_content_as(
    i: &[u8],
    tag: Tag,
    length: Length,
    constructed: bool,
    max_depth: usize,
) -> BerResult<'_, BerObjectContent> {
    let depth = MAX_RECURSION.saturating_sub(max_depth);
    read_content_as(i, Class::Universal, tag, length, constructed, Mode::Ber, depth)
}

/// Parse one object, in the given mode, at the given nesting depth
/// Attach content to the header it was read with
///
/// Segments of a constructed string are joined into primitive content. When
/// the joined value has no dedicated variant, the header is marked primitive
/// so that the object re-encodes in primitive form.
pub(crate) fn object_from_parts(hdr: Header, content: BerObjectContent) -> BerObject {
    let hdr = match content {
        BerObjectContent::Unknown(..) if hdr.constructed => hdr.with_constructed(false),
        _ => hdr,
    };
    BerObject::from_header_and_content(hdr, content)
}

pub(crate) fn parse_object(i: &[u8], mode: Mode, depth: usize) -> BerResult<'_> {
    custom_check!(i, depth > MAX_RECURSION, BerError::BerMaxDepth)?;
    let (rem, hdr) = read_header(i, mode)?;
    custom_check!(
        i,
        hdr.is_universal() && hdr.tag == Tag::EndOfContent,
        BerError::UnexpectedEndOfContents
    )?;
    let (rem, content) = read_content_as(
        rem,
        hdr.class,
        hdr.tag,
        hdr.length,
        hdr.constructed,
        mode,
        depth,
    )?;
    Ok((rem, object_from_parts(hdr, content)))
}

/// Parse one object, checking that it is universal and carries the expected tag
pub(crate) fn parse_with_tag(i: &[u8], tag: Tag, mode: Mode) -> BerResult<'_> {
    let (rem, hdr) = read_header(i, mode)?;
    if !hdr.is_universal() {
        return Err(Err::Error(BerError::UnexpectedClass {
            expected: Class::Universal,
            actual: hdr.class,
        }));
    }
    if hdr.tag != tag {
        return Err(Err::Error(BerError::UnexpectedTag {
            expected: Some(tag),
            actual: hdr.tag,
        }));
    }
    let (rem, content) = read_content_as(
        rem,
        hdr.class,
        hdr.tag,
        hdr.length,
        hdr.constructed,
        mode,
        0,
    )?;
    Ok((rem, object_from_parts(hdr, content)))
}

/// Parse a BER object, expecting a value with specified tag
///
/// The object is parsed recursively, with a maximum depth of `MAX_RECURSION`.
///
/// ### Example
///
/// ```
/// use asn1_object::ber::Tag;
/// use asn1_object::ber::parse_ber_with_tag;
///
/// let bytes = &[0x02, 0x03, 0x01, 0x00, 0x01];
/// let (_, obj) = parse_ber_with_tag(bytes, Tag::Integer).expect("parsing failed");
///
/// assert_eq!(obj.header.tag, Tag::Integer);
/// ```
pub fn parse_ber_with_tag<T: Into<Tag>>(i: &[u8], tag: T) -> BerResult<'_> {
    parse_with_tag(i, tag.into(), Mode::Ber)
}

/// Read a Boolean value
///
/// The encoding of a boolean value shall be primitive. The contents octets shall consist of a
/// single octet.
///
/// If the boolean value is FALSE, the octet shall be zero.
/// If the boolean value is TRUE, the octet shall be one byte, and have all bits set to one (0xff).
#[inline]
pub fn parse_ber_bool(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::Boolean)
}

/// Read an integer value
///
/// The encoding of a boolean value shall be primitive. The contents octets shall consist of one or
/// more octets.
///
/// To access the content, use the [`as_u64`](struct.BerObject.html#method.as_u64),
/// [`as_u32`](struct.BerObject.html#method.as_u32),
/// [`as_bigint`](struct.BerObject.html#method.as_bigint) or
/// [`as_biguint`](struct.BerObject.html#method.as_biguint) methods.
/// Remember that a BER integer has unlimited size, so these methods return `Result` or `Option`
/// objects.
///
/// # Examples
///
/// ```rust
/// # use asn1_object::ber::{parse_ber_integer, BerObject, BerObjectContent};
/// let empty = &b""[..];
/// let bytes = [0x02, 0x03, 0x01, 0x00, 0x01];
/// let expected  = BerObject::from_obj(BerObjectContent::Integer(b"\x01\x00\x01".to_vec()));
/// assert_eq!(
///     parse_ber_integer(&bytes),
///     Ok((empty, expected))
/// );
/// ```
#[inline]
pub fn parse_ber_integer(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::Integer)
}

/// Read an bitstring value
#[inline]
pub fn parse_ber_bitstring(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::BitString)
}

/// Read an octetstring value
#[inline]
pub fn parse_ber_octetstring(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::OctetString)
}

/// Read a null value
#[inline]
pub fn parse_ber_null(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::Null)
}

/// Read an object identifier value
#[inline]
pub fn parse_ber_oid(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::Oid)
}

/// Read a UTF-8 string value. The encoding is checked.
#[inline]
pub fn parse_ber_utf8string(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::Utf8String)
}

/// Parse a sequence of BER elements
///
/// Read a sequence of BER objects, without any constraint on the types.
/// Sequence is parsed recursively, so if structured elements are found, they are parsed using the
/// same function.
///
/// To read a specific sequence of objects (giving the expected types), use the
/// [`parse_ber_sequence_defined`](fn.parse_ber_sequence_defined.html) function.
#[inline]
pub fn parse_ber_sequence(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::Sequence)
}

/// Parse a set of BER elements
///
/// Read a set of BER objects, without any constraint on the types.
/// Set is parsed recursively, so if structured elements are found, they are parsed using the
/// same function.
///
/// To read a specific set of objects (giving the expected types), use the
/// [`parse_ber_set_defined`](fn.parse_ber_set_defined.html) function.
#[inline]
pub fn parse_ber_set(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::Set)
}

/// Read a numeric string value. The content is verified to
/// contain only digits and spaces.
#[inline]
pub fn parse_ber_numericstring(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::NumericString)
}

/// Read a printable string value. The content is verified to
/// contain only the allowed characters.
#[inline]
pub fn parse_ber_printablestring(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::PrintableString)
}

/// Read an IA5 string value. The content is verified to be ASCII.
#[inline]
pub fn parse_ber_ia5string(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::Ia5String)
}

/// Read an UTC time value
#[inline]
pub fn parse_ber_utctime(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::UtcTime)
}

/// Read a Generalized time value
#[inline]
pub fn parse_ber_generalizedtime(i: &[u8]) -> BerResult<'_> {
    parse_ber_with_tag(i, Tag::GeneralizedTime)
}

/// Parse BER object and try to decode it as a 32-bits unsigned integer
///
/// Return `IntegerTooLarge` if object is an integer, but can not be represented in the target
/// integer type.
#[inline]
pub fn parse_ber_u32(i: &[u8]) -> BerResult<'_, u32> {
    let (rem, obj) = parse_ber_integer(i)?;
    let v = obj.as_u32().map_err(Err::Error)?;
    Ok((rem, v))
}

/// Parse BER object and try to decode it as a 64-bits unsigned integer
///
/// Return `IntegerTooLarge` if object is an integer, but can not be represented in the target
/// integer type.
#[inline]
pub fn parse_ber_u64(i: &[u8]) -> BerResult<'_, u64> {
    let (rem, obj) = parse_ber_integer(i)?;
    let v = obj.as_u64().map_err(Err::Error)?;
    Ok((rem, v))
}

/// Parse BER object and try to decode it as a 64-bits signed integer
#[inline]
pub fn parse_ber_i64(i: &[u8]) -> BerResult<'_, i64> {
    let (rem, obj) = parse_ber_integer(i)?;
    let v = obj.as_i64().map_err(Err::Error)?;
    Ok((rem, v))
}

/// Parse BER object recursively
///
/// Return a tuple containing the remaining (unparsed) bytes and the BER Object, or an error.
///
/// *Note*: this is the same as calling `parse_ber_recursive` with `MAX_RECURSION`.
///
/// ### Example
///
/// ```
/// use asn1_object::ber::{parse_ber, Tag};
///
/// let bytes = &[0x02, 0x03, 0x01, 0x00, 0x01];
/// let (_, obj) = parse_ber(bytes).expect("parsing failed");
///
/// assert_eq!(obj.header.tag, Tag::Integer);
/// ```
#[inline]
pub fn parse_ber(i: &[u8]) -> BerResult<'_> {
    parse_ber_recursive(i, MAX_RECURSION)
}

/// Parse BER object recursively, specifying the maximum recursion depth
///
/// Return a tuple containing the remaining (unparsed) bytes and the BER Object, or an error.
pub fn parse_ber_recursive(i: &[u8], max_depth: usize) -> BerResult<'_> {
    parse_object(i, Mode::Ber, MAX_RECURSION.saturating_sub(max_depth))
}
