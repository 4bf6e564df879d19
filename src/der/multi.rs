use crate::ber::canonical::is_canonically_ordered;
use crate::ber::multi::{constructed_g, constructed_of_v, container};
use crate::ber::{Header, Tag};
use crate::der::DerObject;
use crate::error::*;
use crate::mode::Mode;
use nom::error::ParseError;
use nom::{Err, IResult};

fn check_set_order(v: Vec<DerObject>) -> Result<DerObject, Err<BerError>> {
    if !is_canonically_ordered(&v).map_err(Err::Error)? {
        return Err(Err::Error(BerError::DerConstraintFailed(
            DerConstraint::UnsortedSet,
        )));
    }
    Ok(DerObject::from_set(v))
}

/// Parse a SEQUENCE OF object
///
/// Given a subparser for a DER type, parse a sequence of identical objects.
///
/// ```rust
/// # use asn1_object::der::{parse_der_integer, parse_der_sequence_of, DerObject};
/// # use asn1_object::error::BerResult;
/// #
/// /// Read a SEQUENCE OF INTEGER
/// fn parser(i:&[u8]) -> BerResult<DerObject> {
///     parse_der_sequence_of(parse_der_integer)(i)
/// };
///
/// # let empty = &b""[..];
/// # let bytes = [ 0x30, 0x0a,
/// #               0x02, 0x03, 0x01, 0x00, 0x01,
/// #               0x02, 0x03, 0x01, 0x00, 0x00,
/// # ];
/// # let expected  = DerObject::from_seq(vec![
/// #     DerObject::from_int_slice(b"\x01\x00\x01"),
/// #     DerObject::from_int_slice(b"\x01\x00\x00"),
/// # ]);
/// # assert_eq!(parser(&bytes), Ok((empty, expected)));
/// let (rem, v) = parser(&bytes).expect("parsing failed");
/// ```
pub fn parse_der_sequence_of<'a, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a, DerObject>
where
    F: Fn(&'a [u8]) -> BerResult<'a, DerObject>,
{
    let parser = parse_der_sequence_of_v(f);
    move |i: &'a [u8]| {
        let (rem, v) = parser(i)?;
        Ok((rem, DerObject::from_seq(v)))
    }
}

/// Parse a SEQUENCE OF object (returning a vec)
pub fn parse_der_sequence_of_v<'a, T, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a, Vec<T>>
where
    F: Fn(&'a [u8]) -> BerResult<'a, T>,
{
    constructed_of_v(Mode::Der, Tag::Sequence, f)
}

/// Parse a defined sequence of DER elements (function version)
///
/// The remaining bytes point *after* the sequence: any bytes that are part of the sequence but not
/// parsed are ignored.
pub fn parse_der_sequence_defined<'a, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a, DerObject>
where
    F: Fn(&'a [u8]) -> BerResult<'a, Vec<DerObject>>,
{
    let parser = parse_der_sequence_defined_g(f);
    move |i: &'a [u8]| {
        let (rem, v) = parser(i)?;
        Ok((rem, DerObject::from_seq(v)))
    }
}

/// Parse a defined SEQUENCE object (returning a generic object)
pub fn parse_der_sequence_defined_g<'a, O, F, E>(
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], O, E>
where
    F: Fn(&'a [u8]) -> IResult<&'a [u8], O, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    constructed_g(Mode::Der, Tag::Sequence, f)
}

/// Parse a SET OF object
///
/// The elements must be sorted by their encoding, else a
/// `DerConstraintFailed(UnsortedSet)` error is returned.
pub fn parse_der_set_of<'a, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a, DerObject>
where
    F: Fn(&'a [u8]) -> BerResult<'a, DerObject>,
{
    let parser = parse_der_set_of_v(f);
    move |i: &'a [u8]| {
        let (rem, v) = parser(i)?;
        Ok((rem, check_set_order(v)?))
    }
}

/// Parse a SET OF object (returning a vec)
///
/// The order of the elements is not checked.
pub fn parse_der_set_of_v<'a, T, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a, Vec<T>>
where
    F: Fn(&'a [u8]) -> BerResult<'a, T>,
{
    constructed_of_v(Mode::Der, Tag::Set, f)
}

/// Parse a defined set of DER elements (function version)
///
/// The elements must be sorted by their encoding.
pub fn parse_der_set_defined<'a, F>(f: F) -> impl Fn(&'a [u8]) -> BerResult<'a, DerObject>
where
    F: Fn(&'a [u8]) -> BerResult<'a, Vec<DerObject>>,
{
    let parser = parse_der_set_defined_g(f);
    move |i: &'a [u8]| {
        let (rem, v) = parser(i)?;
        Ok((rem, check_set_order(v)?))
    }
}

/// Parse a defined SET object (returning a generic object)
pub fn parse_der_set_defined_g<'a, O, F, E>(f: F) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], O, E>
where
    F: Fn(&'a [u8]) -> IResult<&'a [u8], O, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    constructed_g(Mode::Der, Tag::Set, f)
}

/// Parse a DER object and apply provided function to content
///
/// The header is checked against the DER constraints. The remaining bytes point
/// *after* the content: any bytes that are part of the content but not parsed are ignored.
pub fn parse_der_container<'a, O, F, E>(f: F) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], O, E>
where
    F: Fn(&Header, &'a [u8]) -> IResult<&'a [u8], O, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    container(Mode::Der, f)
}
