use crate::ber::tagged::{content_as, tagged_explicit, tagged_implicit};
use crate::ber::{BerObjectContent, Header, Tag};
use crate::error::*;
use crate::mode::Mode;
use nom::error::ParseError;
use nom::IResult;

/// Read a TAGGED EXPLICIT value (function version)
///
/// The following parses `[2] EXPLICIT INTEGER`:
///
/// ```rust
/// # use asn1_object::ber::Tag;
/// # use asn1_object::der::*;
/// # use asn1_object::error::BerResult;
/// #
/// fn parse_int_explicit(i:&[u8]) -> BerResult<u32> {
///     parse_der_tagged_explicit(Tag(2), parse_der_u32)(i)
/// }
///
/// # let bytes = &[0xa2, 0x05, 0x02, 0x03, 0x01, 0x00, 0x01];
/// let (rem, val) = parse_int_explicit(bytes).expect("parsing failed");
/// # assert!(rem.is_empty());
/// # assert_eq!(val, 0x10001);
/// ```
pub fn parse_der_tagged_explicit<'a, T, Output, F, E>(
    tag: T,
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>
where
    F: Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
    T: Into<Tag>,
{
    tagged_explicit(Mode::Der, tag.into(), f)
}

/// Read a TAGGED IMPLICIT value (function version)
pub fn parse_der_tagged_implicit<'a, T, Output, F, E>(
    tag: T,
    f: F,
) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], Output, E>
where
    F: Fn(&'a [u8], &'_ Header, usize) -> IResult<&'a [u8], Output, E>,
    E: ParseError<&'a [u8]> + From<BerError>,
    T: Into<Tag>,
{
    tagged_implicit(Mode::Der, tag.into(), f)
}

/// Parse the content of an implicitly tagged object as the universal type `tag`,
/// checking the DER constraints
pub fn parse_der_content<'a>(
    tag: Tag,
) -> impl Fn(&'a [u8], &'_ Header, usize) -> BerResult<'a, BerObjectContent> {
    content_as(Mode::Der, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use nom::Err;

    #[test]
    fn test_der_implicit_integer() {
        let bytes = hex!("82 02 00 7f");
        let res = parse_der_tagged_implicit(Tag(2), parse_der_content(Tag::Integer))(&bytes);
        assert_eq!(
            res,
            Err(Err::Error(BerError::DerConstraintFailed(
                DerConstraint::IntegerNotMinimal
            )))
        );
        let bytes = hex!("82 01 7f");
        let (_, content) =
            parse_der_tagged_implicit(Tag(2), parse_der_content(Tag::Integer))(&bytes).unwrap();
        assert_eq!(content.as_u32(), Ok(127));
    }
}
