use crate::ber::multi::container;
use crate::ber::parser::{read_content_as, MAX_RECURSION};
use crate::ber::*;
use crate::error::*;
use crate::mode::Mode;
use nom::error::ParseError;
use nom::{Err, IResult};

pub(crate) fn tagged_explicit<'a, Output, F, E>(
    mode: Mode,
    tag: Tag,
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>
where
    F: Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    container(mode, move |hdr, i| {
        if hdr.tag != tag {
            return Err(Err::Error(
                BerError::UnexpectedTag {
                    expected: Some(tag),
                    actual: hdr.tag,
                }
                .into(),
            ));
        }
        // X.690 8.14.2: if implicit tagging was not used, the encoding shall be constructed
        if !hdr.is_constructed() {
            return Err(Err::Error(BerError::ConstructExpected.into()));
        }
        f(i)
        // trailing bytes are ignored
    })
}

pub(crate) fn tagged_implicit<'a, Output, F, E>(
    mode: Mode,
    tag: Tag,
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>
where
    F: Fn(&'a [u8], &'_ Header, usize) -> IResult<&'a [u8], Output, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
{
    container(mode, move |hdr, i| {
        if hdr.tag != tag {
            return Err(Err::Error(
                BerError::UnexpectedTag {
                    expected: Some(tag),
                    actual: hdr.tag,
                }
                .into(),
            ));
        }
        // the content has already been split from the input
        let hdr = hdr.with_length(Length::Definite(i.len()));
        f(i, &hdr, MAX_RECURSION)
        // trailing bytes are ignored
    })
}

pub(crate) fn content_as<'a>(
    mode: Mode,
    tag: Tag,
) -> impl Fn(&'a [u8], &'_ Header, usize) -> BerResult<'a, BerObjectContent> {
    move |i: &'a [u8], hdr: &Header, max_depth: usize| {
        read_content_as(
            i,
            Class::Universal,
            tag,
            hdr.length,
            hdr.constructed,
            mode,
            MAX_RECURSION.saturating_sub(max_depth),
        )
    }
}

/// Read a TAGGED EXPLICIT value (function version)
///
/// The following parses `[2] EXPLICIT INTEGER`:
///
/// ```rust
/// # use asn1_object::ber::*;
/// # use asn1_object::error::BerResult;
/// #
/// fn parse_int_explicit(i:&[u8]) -> BerResult<u32> {
///     parse_ber_tagged_explicit(
///         Tag(2),
///         parse_ber_u32
///     )(i)
/// }
///
/// # let bytes = &[0xa2, 0x05, 0x02, 0x03, 0x01, 0x00, 0x01];
/// let res = parse_int_explicit(bytes);
/// # match res {
/// #     Ok((rem,val)) => {
/// #         assert!(rem.is_empty());
/// #         assert_eq!(val, 0x10001);
/// #     },
/// #     _ => assert!(false)
/// # }
/// ```
pub fn parse_ber_tagged_explicit<'a, T, Output, F, E>(
    tag: T,
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>
where
    F: Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
    T: Into<Tag>,
{
    tagged_explicit(Mode::Ber, tag.into(), f)
}

/// Read a TAGGED IMPLICIT value (function version)
///
/// The function `f` is given the content of the object, its header and the
/// remaining recursion depth.
///
/// The following parses `[2] IMPLICIT INTEGER`:
///
/// ```rust
/// # use asn1_object::ber::*;
/// # use asn1_object::error::BerResult;
/// #
/// fn parse_int_implicit(i:&[u8]) -> BerResult<u32> {
///     let (rem, content) = parse_ber_tagged_implicit(
///         Tag(2),
///         parse_ber_content(Tag::Integer),
///     )(i)?;
///     let val = content.as_u32().map_err(nom::Err::Error)?;
///     Ok((rem, val))
/// }
///
/// # let bytes = &[0x82, 0x03, 0x01, 0x00, 0x01];
/// let res = parse_int_implicit(bytes);
/// # match res {
/// #     Ok((rem,val)) => {
/// #         assert!(rem.is_empty());
/// #         assert_eq!(val, 0x10001);
/// #     },
/// #     _ => assert!(false)
/// # }
/// ```
pub fn parse_ber_tagged_implicit<'a, T, Output, F, E>(
    tag: T,
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>
where
    F: Fn(&'a [u8], &'_ Header, usize) -> IResult<&'a [u8], Output, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
    T: Into<Tag>,
{
    tagged_implicit(Mode::Ber, tag.into(), f)
}

/// Parse the content of an implicitly tagged object, as the universal type `tag`
///
/// This is meant to be used with
/// [`parse_ber_tagged_implicit`](fn.parse_ber_tagged_implicit.html).
pub fn parse_ber_content<'a>(
    tag: Tag,
) -> impl Fn(&'a [u8], &'_ Header, usize) -> BerResult<'a, BerObjectContent> {
    content_as(Mode::Ber, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_explicit_wrong_tag() {
        let bytes = hex!("a1 03 02 01 01");
        let res = parse_ber_tagged_explicit(Tag(0), parse_ber_integer)(&bytes);
        assert_eq!(
            res,
            Err(Err::Error(BerError::UnexpectedTag {
                expected: Some(Tag(0)),
                actual: Tag(1)
            }))
        );
    }

    #[test]
    fn test_explicit_primitive() {
        let bytes = hex!("80 03 02 01 01");
        let res = parse_ber_tagged_explicit(Tag(0), parse_ber_integer)(&bytes);
        assert_eq!(res, Err(Err::Error(BerError::ConstructExpected)));
    }

    #[test]
    fn test_implicit_indefinite_sequence() {
        let bytes = hex!("a0 80 02 01 05 00 00 ff");
        let (rem, content) =
            parse_ber_tagged_implicit(Tag(0), parse_ber_content(Tag::Sequence))(&bytes).unwrap();
        assert_eq!(rem, &[0xff]);
        let v = content.as_sequence().unwrap();
        assert_eq!(v[0].as_u32(), Ok(5));
    }
}
