use crate::ber::parser::{read_header, truncated, MAX_RECURSION};
use crate::ber::*;
use crate::error::*;
use crate::mode::Mode;
use nom::error::ParseError;
use nom::{Err, IResult, Needed};

/// Split the content of an object from the input
///
/// For the indefinite form, the extent of the content is found by walking the
/// headers of the children up to the end-of-contents marker. The returned
/// content does not include the marker.
pub(crate) fn split_content<'a>(
    i: &'a [u8],
    hdr: &Header,
    mode: Mode,
    depth: usize,
) -> BerResult<'a, &'a [u8]> {
    match hdr.length {
        Length::Definite(len) => {
            if i.len() < len {
                return Err(Err::Incomplete(Needed::new(len - i.len())));
            }
            Ok((&i[len..], &i[..len]))
        }
        Length::Indefinite => {
            custom_check!(i, depth > MAX_RECURSION, BerError::BerMaxDepth)?;
            let mut pos = 0;
            loop {
                let cur = &i[pos..];
                if cur.is_empty() {
                    return Err(Err::Error(BerError::UnterminatedIndefiniteLength));
                }
                if cur.starts_with(&[0, 0]) {
                    return Ok((&cur[2..], &i[..pos]));
                }
                let (r, child) = read_header(cur, mode)?;
                let (r, _) = split_content(r, &child, mode, depth + 1)?;
                pos = i.len() - r.len();
            }
        }
    }
}

/// Apply `f` to every element until the input is exhausted
fn many_of<'a, T, F>(f: &F, mut i: &'a [u8]) -> BerResult<'a, Vec<T>>
where
    F: Fn(&'a [u8]) -> BerResult<'a, T>,
{
    let mut v = Vec::new();
    while !i.is_empty() {
        let (rem, o) = f(i).map_err(truncated)?;
        v.push(o);
        i = rem;
    }
    Ok((i, v))
}

pub(crate) fn container<'a, O, F, E>(
    mode: Mode,
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], O, E>
where
    F: Fn(&Header, &'a [u8]) -> IResult<&'a [u8], O, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    move |i: &'a [u8]| {
        let (i, hdr) = read_header(i, mode).map_err(Err::convert)?;
        let (i, data) = split_content(i, &hdr, mode, 0).map_err(Err::convert)?;
        // trailing bytes of the content are ignored
        let (_rest, v) = f(&hdr, data)?;
        Ok((i, v))
    }
}

/// Check that the header is a constructed universal `tag`, then apply `f` to the content
pub(crate) fn constructed_g<'a, O, F, E>(
    mode: Mode,
    tag: Tag,
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], O, E>
where
    F: Fn(&'a [u8]) -> IResult<&'a [u8], O, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    container(mode, move |hdr, i| {
        if !hdr.is_universal() {
            return Err(Err::Error(
                BerError::UnexpectedClass {
                    expected: Class::Universal,
                    actual: hdr.class,
                }
                .into(),
            ));
        }
        if hdr.tag != tag {
            return Err(Err::Error(
                BerError::UnexpectedTag {
                    expected: Some(tag),
                    actual: hdr.tag,
                }
                .into(),
            ));
        }
        if !hdr.is_constructed() {
            return Err(Err::Error(BerError::ConstructExpected.into()));
        }
        f(i)
    })
}

pub(crate) fn constructed_of_v<'a, T, F>(
    mode: Mode,
    tag: Tag,
    f: F,
) -> impl Fn(&'a [u8]) -> BerResult<'a, Vec<T>>
where
    F: Fn(&'a [u8]) -> BerResult<'a, T>,
{
    constructed_g(mode, tag, move |i: &'a [u8]| many_of(&f, i))
}

/// Parse a SEQUENCE OF object
///
/// Given a subparser for a BER type, parse a sequence of identical objects.
///
/// ```rust
/// # use asn1_object::ber::{parse_ber_integer, parse_ber_sequence_of, BerObject};
/// # use asn1_object::error::BerResult;
/// #
/// /// Read a SEQUENCE OF INTEGER
/// fn parser(i:&[u8]) -> BerResult<BerObject> {
///     parse_ber_sequence_of(parse_ber_integer)(i)
/// };
///
/// # let empty = &b""[..];
/// # let bytes = [ 0x30, 0x0a,
/// #               0x02, 0x03, 0x01, 0x00, 0x01,
/// #               0x02, 0x03, 0x01, 0x00, 0x00,
/// # ];
/// # let expected  = BerObject::from_seq(vec![
/// #     BerObject::from_int_slice(b"\x01\x00\x01"),
/// #     BerObject::from_int_slice(b"\x01\x00\x00"),
/// # ]);
/// # assert_eq!(parser(&bytes), Ok((empty, expected)));
/// let (rem, v) = parser(&bytes).expect("parsing failed");
/// ```
pub fn parse_ber_sequence_of<'a, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a>
where
    F: Fn(&'a [u8]) -> BerResult<'a>,
{
    let parser = parse_ber_sequence_of_v(f);
    move |i: &'a [u8]| {
        let (rem, v) = parser(i)?;
        Ok((rem, BerObject::from_seq(v)))
    }
}

/// Parse a SEQUENCE OF object (returning a vec)
///
/// Given a subparser for a BER type, parse a sequence of identical objects.
///
/// This differs from `parse_ber_sequence_of` in the parse function and return type.
/// Every element of the sequence must be accepted by the subparser.
pub fn parse_ber_sequence_of_v<'a, T, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a, Vec<T>>
where
    F: Fn(&'a [u8]) -> BerResult<'a, T>,
{
    constructed_of_v(Mode::Ber, Tag::Sequence, f)
}

/// Parse a defined sequence of DER elements (function version)
///
/// Given a list of expected parsers, apply them to build a DER sequence and
/// return the remaining bytes and the built object.
///
/// The remaining bytes point *after* the sequence: any bytes that are part of the sequence but not
/// parsed are ignored.
///
/// # Examples
///
/// Parsing a defined sequence with different types:
///
/// ```rust
/// # use asn1_object::ber::*;
/// # use asn1_object::error::BerResult;
/// #
/// /// Read a DER-encoded object:
/// /// SEQUENCE {
/// ///     a INTEGER,
/// ///     b OCTETSTRING
/// /// }
/// fn localparse_seq(i:&[u8]) -> BerResult {
///     parse_ber_sequence_defined(|i| {
///         let (i, a) = parse_ber_integer(i)?;
///         let (i, b) = parse_ber_octetstring(i)?;
///         Ok((i, vec![a, b]))
///     })(i)
/// }
///
/// # let empty = &b""[..];
/// # let bytes = [ 0x30, 0x0a,
/// #               0x02, 0x03, 0x01, 0x00, 0x01,
/// #               0x04, 0x03, 0x01, 0x00, 0x00,
/// # ];
/// # let expected  = BerObject::from_seq(vec![
/// #     BerObject::from_int_slice(b"\x01\x00\x01"),
/// #     BerObject::from_obj(BerObjectContent::OctetString(b"\x01\x00\x00".to_vec())),
/// # ]);
/// # assert_eq!(localparse_seq(&bytes), Ok((empty, expected)));
/// let (rem, v) = localparse_seq(&bytes).expect("parsing failed");
/// ```
pub fn parse_ber_sequence_defined<'a, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a>
where
    F: Fn(&'a [u8]) -> BerResult<'a, Vec<BerObject>>,
{
    let parser = parse_ber_sequence_defined_g(f);
    move |i: &'a [u8]| {
        let (rem, v) = parser(i)?;
        Ok((rem, BerObject::from_seq(v)))
    }
}

/// Parse a defined SEQUENCE object (returning a generic object)
///
/// Given a parser for sequence content, apply it to build a DER sequence and
/// return the remaining bytes and the built object.
///
/// The remaining bytes point *after* the sequence: any bytes that are part of the sequence but not
/// parsed are ignored.
///
/// # Examples
///
/// Parsing a defined sequence with different types:
///
/// ```rust
/// # use asn1_object::ber::*;
/// # use asn1_object::error::BerResult;
/// #
/// # #[derive(Debug, PartialEq)]
/// pub struct MyObject {
///     a: u32,
///     b: Vec<u8>,
/// }
///
/// /// Read a DER-encoded object:
/// /// SEQUENCE {
/// ///     a INTEGER (0..4294967295),
/// ///     b OCTETSTRING
/// /// }
/// fn parse_myobject(i: &[u8]) -> BerResult<MyObject> {
///     parse_ber_sequence_defined_g(
///         |i:&[u8]| {
///             let (i, a) = parse_ber_u32(i)?;
///             let (i, obj) = parse_ber_octetstring(i)?;
///             let b = obj.as_slice().unwrap().to_vec();
///             Ok((i, MyObject{ a, b }))
///         }
///     )(i)
/// }
///
/// # let empty = &b""[..];
/// # let bytes = [ 0x30, 0x0a,
/// #               0x02, 0x03, 0x01, 0x00, 0x01,
/// #               0x04, 0x03, 0x01, 0x00, 0x00,
/// # ];
/// # let expected  = MyObject {
/// #   a: 0x010001,
/// #   b: vec![01, 00, 00]
/// # };
/// # assert_eq!(parse_myobject(&bytes), Ok((empty, expected)));
/// let (rem, v) = parse_myobject(&bytes).expect("parsing failed");
/// ```
pub fn parse_ber_sequence_defined_g<'a, O, F, E>(
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], O, E>
where
    F: Fn(&'a [u8]) -> IResult<&'a [u8], O, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    constructed_g(Mode::Ber, Tag::Sequence, f)
}

/// Parse a SET OF object
///
/// Given a subparser for a BER type, parse a set of identical objects.
///
/// ```rust
/// # use asn1_object::ber::{parse_ber_integer, parse_ber_set_of, BerObject};
/// # use asn1_object::error::BerResult;
/// #
/// /// Read a SET OF INTEGER
/// fn parser(i:&[u8]) -> BerResult<BerObject> {
///     parse_ber_set_of(parse_ber_integer)(i)
/// };
///
/// # let empty = &b""[..];
/// # let bytes = [ 0x31, 0x0a,
/// #               0x02, 0x03, 0x01, 0x00, 0x01,
/// #               0x02, 0x03, 0x01, 0x00, 0x00,
/// # ];
/// # let expected  = BerObject::from_set(vec![
/// #     BerObject::from_int_slice(b"\x01\x00\x01"),
/// #     BerObject::from_int_slice(b"\x01\x00\x00"),
/// # ]);
/// # assert_eq!(parser(&bytes), Ok((empty, expected)));
/// let (rem, v) = parser(&bytes).expect("parsing failed");
/// ```
pub fn parse_ber_set_of<'a, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a>
where
    F: Fn(&'a [u8]) -> BerResult<'a>,
{
    let parser = parse_ber_set_of_v(f);
    move |i: &'a [u8]| {
        let (rem, v) = parser(i)?;
        Ok((rem, BerObject::from_set(v)))
    }
}

/// Parse a SET OF object (returning a vec)
///
/// Given a subparser for a BER type, parse a set of identical objects.
///
/// This differs from `parse_ber_set_of` in the parse function and return type.
pub fn parse_ber_set_of_v<'a, T, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a, Vec<T>>
where
    F: Fn(&'a [u8]) -> BerResult<'a, T>,
{
    constructed_of_v(Mode::Ber, Tag::Set, f)
}

/// Parse a defined set of DER elements (function version)
///
/// Given a list of expected parsers, apply them to build a DER set and
/// return the remaining bytes and the built object.
///
/// The remaining bytes point *after* the set: any bytes that are part of the sequence but not
/// parsed are ignored.
pub fn parse_ber_set_defined<'a, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a>
where
    F: Fn(&'a [u8]) -> BerResult<'a, Vec<BerObject>>,
{
    let parser = parse_ber_set_defined_g(f);
    move |i: &'a [u8]| {
        let (rem, v) = parser(i)?;
        Ok((rem, BerObject::from_set(v)))
    }
}

/// Parse a defined SET object (returning a generic object)
///
/// Given a parser for set content, apply it to build a DER set and
/// return the remaining bytes and the built object.
///
/// The remaining bytes point *after* the set: any bytes that are part of the sequence but not
/// parsed are ignored.
pub fn parse_ber_set_defined_g<'a, O, F, E>(f: F) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], O, E>
where
    F: Fn(&'a [u8]) -> IResult<&'a [u8], O, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    constructed_g(Mode::Ber, Tag::Set, f)
}

/// Parse a BER object and apply provided function to content
///
/// Given a parser for content, read BER object header and apply parser to
/// return the remaining bytes and the parser result.
///
/// The remaining bytes point *after* the content: any bytes that are part of the content but not
/// parsed are ignored. For an indefinite length, the content does not include
/// the end-of-contents marker.
///
/// This function is mostly intended for structured objects, but can be used for any valid BER
/// object.
///
/// # Examples
///
/// Parsing a defined sequence with different types:
///
/// ```rust
/// # use asn1_object::ber::*;
/// # use asn1_object::error::{BerError, BerResult};
/// #
/// # #[derive(Debug, PartialEq)]
/// pub struct MyObject<'a> {
///     a: u32,
///     b: &'a [u8],
/// }
///
/// /// Read a DER-encoded object:
/// /// SEQUENCE {
/// ///     a INTEGER (0..4294967295),
/// ///     b OCTETSTRING
/// /// }
/// fn parse_myobject(i: &[u8]) -> BerResult<MyObject> {
///     parse_ber_container(
///         |hdr: &Header, i:&[u8]| {
///             if hdr.tag != Tag::Sequence {
///                 return Err(nom::Err::Error(BerError::BerTypeError.into()));
///             }
///             let (i, a) = parse_ber_u32(i)?;
///             let (b, _) = ber_read_element_header(i)?;
///             Ok((&b""[..], MyObject{ a, b }))
///         }
///     )(i)
/// }
///
/// # let empty = &b""[..];
/// # let bytes = [ 0x30, 0x0a,
/// #               0x02, 0x03, 0x01, 0x00, 0x01,
/// #               0x04, 0x03, 0x01, 0x00, 0x00,
/// # ];
/// # let expected  = MyObject {
/// #   a: 0x010001,
/// #   b: &[01, 00, 00]
/// # };
/// # assert_eq!(parse_myobject(&bytes), Ok((empty, expected)));
/// let (rem, v) = parse_myobject(&bytes).expect("parsing failed");
/// ```
pub fn parse_ber_container<'a, O, F, E>(f: F) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], O, E>
where
    F: Fn(&Header, &'a [u8]) -> IResult<&'a [u8], O, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    container(Mode::Ber, f)
}
