use asn1_object::ber::*;
use asn1_object::error::*;
use asn1_object::oid::Oid;
use hex_literal::hex;
use nom::branch::alt;
use nom::Err;
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq)]
struct MyStruct {
    a: BerObject,
    b: BerObject,
}

fn parse_struct01(i: &[u8]) -> BerResult<'_, MyStruct> {
    parse_ber_sequence_defined_g(|i| {
        let (i, a) = parse_ber_integer(i)?;
        let (i, b) = parse_ber_integer(i)?;
        Ok((i, MyStruct { a, b }))
    })(i)
}

fn parse_struct01_complete(i: &[u8]) -> BerResult<'_, MyStruct> {
    parse_ber_sequence_defined_g(|i| {
        let (i, a) = parse_ber_integer(i)?;
        let (i, b) = parse_ber_integer(i)?;
        if !i.is_empty() {
            return Err(Err::Error(BerError::TrailingData));
        }
        Ok((i, MyStruct { a, b }))
    })(i)
}

// verifying tag
fn parse_struct04(i: &[u8], tag: Tag) -> BerResult<'_, MyStruct> {
    parse_ber_container(|hdr: &Header, i| {
        if hdr.tag != tag {
            return Err(Err::Error(BerError::UnexpectedTag {
                expected: Some(tag),
                actual: hdr.tag,
            }));
        }
        let (i, a) = parse_ber_integer(i)?;
        let (i, b) = parse_ber_integer(i)?;
        Ok((i, MyStruct { a, b }))
    })(i)
}

#[test]
fn struct01() {
    let bytes = hex!("30 0a 02 03 01 00 01 02 03 01 00 00");
    let empty = &b""[..];
    let expected = MyStruct {
        a: BerObject::from_int_slice(b"\x01\x00\x01"),
        b: BerObject::from_int_slice(b"\x01\x00\x00"),
    };
    let res = parse_struct01(&bytes);
    assert_eq!(res, Ok((empty, expected)));
}

#[test]
fn struct02() {
    let empty = &b""[..];
    let bytes = [
        0x30, 0x45, 0x31, 0x0b, 0x30, 0x09, 0x06, 0x03, 0x55, 0x04, 0x06, 0x13, 0x02, 0x46, 0x52,
        0x31, 0x13, 0x30, 0x11, 0x06, 0x03, 0x55, 0x04, 0x08, 0x0c, 0x0a, 0x53, 0x6f, 0x6d, 0x65,
        0x2d, 0x53, 0x74, 0x61, 0x74, 0x65, 0x31, 0x21, 0x30, 0x1f, 0x06, 0x03, 0x55, 0x04, 0x0a,
        0x0c, 0x18, 0x49, 0x6e, 0x74, 0x65, 0x72, 0x6e, 0x65, 0x74, 0x20, 0x57, 0x69, 0x64, 0x67,
        0x69, 0x74, 0x73, 0x20, 0x50, 0x74, 0x79, 0x20, 0x4c, 0x74, 0x64,
    ];
    #[derive(Debug, PartialEq)]
    struct Attr {
        oid: Oid,
        val: BerObject,
    }
    #[derive(Debug, PartialEq)]
    struct Rdn {
        a: Attr,
    }
    #[derive(Debug, PartialEq)]
    struct Name {
        l: Vec<Rdn>,
    }
    let expected = Name {
        l: vec![
            Rdn {
                a: Attr {
                    oid: Oid::from(&[2, 5, 4, 6]).unwrap(), // countryName
                    val: BerObject::from_obj(BerObjectContent::PrintableString("FR".into())),
                },
            },
            Rdn {
                a: Attr {
                    oid: Oid::from(&[2, 5, 4, 8]).unwrap(), // stateOrProvinceName
                    val: BerObject::from_obj(BerObjectContent::UTF8String("Some-State".into())),
                },
            },
            Rdn {
                a: Attr {
                    oid: Oid::from(&[2, 5, 4, 10]).unwrap(), // organizationName
                    val: BerObject::from_obj(BerObjectContent::UTF8String(
                        "Internet Widgits Pty Ltd".into(),
                    )),
                },
            },
        ],
    };
    fn parse_directory_string(i: &[u8]) -> BerResult<'_> {
        alt((
            parse_ber_utf8string,
            parse_ber_printablestring,
            parse_ber_ia5string,
        ))(i)
    }
    fn parse_attr_type_and_value(i: &[u8]) -> BerResult<'_, Attr> {
        parse_ber_sequence_defined_g(|i| {
            let (i, o) = parse_ber_oid(i)?;
            let oid = o.as_oid().map_err(Err::Error)?.clone();
            let (i, val) = parse_directory_string(i)?;
            Ok((i, Attr { oid, val }))
        })(i)
    }
    fn parse_rdn(i: &[u8]) -> BerResult<'_, Rdn> {
        parse_ber_set_defined_g(|i| {
            let (i, a) = parse_attr_type_and_value(i)?;
            Ok((i, Rdn { a }))
        })(i)
    }
    fn parse_name(i: &[u8]) -> BerResult<'_, Name> {
        let (i, l) = parse_ber_sequence_of_v(parse_rdn)(i)?;
        Ok((i, Name { l }))
    }
    assert_eq!(parse_name(&bytes), Ok((empty, expected)));
}

#[test]
fn struct_with_garbage() {
    let bytes = hex!("30 0c 02 03 01 00 01 02 03 01 00 00 ff ff");
    let empty = &b""[..];
    let expected = MyStruct {
        a: BerObject::from_int_slice(b"\x01\x00\x01"),
        b: BerObject::from_int_slice(b"\x01\x00\x00"),
    };
    // trailing bytes inside the sequence are ignored by the container
    assert_eq!(parse_struct01(&bytes), Ok((empty, expected)));
    assert_eq!(
        parse_struct01_complete(&bytes),
        Err(Err::Error(BerError::TrailingData))
    );
}

#[test]
fn struct_verify_tag() {
    let bytes = hex!("30 0a 02 03 01 00 01 02 03 01 00 00");
    let empty = &b""[..];
    let expected = MyStruct {
        a: BerObject::from_int_slice(b"\x01\x00\x01"),
        b: BerObject::from_int_slice(b"\x01\x00\x00"),
    };
    let res = parse_struct04(&bytes, Tag::Sequence);
    assert_eq!(res, Ok((empty, expected)));
    let res = parse_struct04(&bytes, Tag::Set);
    assert_eq!(
        res,
        Err(Err::Error(BerError::UnexpectedTag {
            expected: Some(Tag::Set),
            actual: Tag::Sequence
        }))
    );
}

#[test]
fn sequence_wrong_tag() {
    let bytes = hex!("31 03 02 01 01");
    assert_eq!(
        parse_ber_sequence_of(parse_ber_integer)(&bytes),
        Err(Err::Error(BerError::UnexpectedTag {
            expected: Some(Tag::Sequence),
            actual: Tag::Set
        }))
    );
}

#[test]
fn sequence_of_strict() {
    // the second element is not an integer
    let bytes = hex!("30 06 02 01 01 01 01 ff");
    assert_eq!(
        parse_ber_sequence_of_v(parse_ber_u32)(&bytes),
        Err(Err::Error(BerError::UnexpectedTag {
            expected: Some(Tag::Integer),
            actual: Tag::Boolean
        }))
    );
}

#[test]
fn sequence_indefinite() {
    let bytes = hex!("30 80 02 01 01 30 80 02 01 02 00 00 00 00 ff");
    let (rem, obj) = parse_ber_sequence(&bytes).expect("parsing failed");
    assert_eq!(rem, &[0xff]);
    assert_eq!(obj.header.length, Length::Indefinite);
    assert_eq!(obj[0].as_u32(), Ok(1));
    assert_eq!(obj[1][0].as_u32(), Ok(2));
    // the same content, with definite lengths
    let definite = hex!("30 08 02 01 01 30 03 02 01 02");
    assert_eq!(BerObject::from_bytes(&definite), Ok(obj));
}

#[test]
fn sequence_indefinite_unterminated() {
    let bytes = hex!("30 80 02 01 01");
    assert_eq!(
        parse_ber(&bytes),
        Err(Err::Error(BerError::UnterminatedIndefiniteLength))
    );
}

#[test]
fn sequence_child_overruns_parent() {
    let bytes = hex!("30 03 02 02 01 00");
    assert_eq!(
        parse_ber(&bytes),
        Err(Err::Error(BerError::TruncatedContent))
    );
}

#[test]
fn set_any_order() {
    let bytes = hex!("31 06 02 01 02 02 01 01");
    let (_, obj) = parse_ber_set(&bytes).expect("parsing failed");
    let v = obj.as_set().expect("not a set");
    assert_eq!(v[0].as_u32(), Ok(2));
    assert_eq!(v[1].as_u32(), Ok(1));
    // equality does not depend on the order of SET elements
    let sorted = hex!("31 06 02 01 01 02 01 02");
    let (_, other) = parse_ber_set(&sorted).expect("parsing failed");
    assert_eq!(obj, other);
}

#[test]
fn tagged_explicit() {
    fn parse_int_explicit(i: &[u8]) -> BerResult<'_, u32> {
        parse_ber_tagged_explicit(Tag(2), parse_ber_u32)(i)
    }
    let bytes = &[0xa2, 0x05, 0x02, 0x03, 0x01, 0x00, 0x01];
    // EXPLICIT tagged value parsing
    let res = parse_int_explicit(bytes);
    match res {
        Ok((rem, val)) => {
            assert!(rem.is_empty());
            assert_eq!(val, 0x10001);
        }
        _ => panic!("parsing failed"),
    }
    // wrong tag
    assert_eq!(
        parse_ber_tagged_explicit(Tag(3), parse_ber_integer)(bytes as &[u8]),
        Err(Err::Error(BerError::UnexpectedTag {
            expected: Some(Tag(3)),
            actual: Tag(2)
        }))
    );
    // wrong type
    assert_eq!(
        parse_ber_tagged_explicit(Tag(2), parse_ber_bool)(bytes as &[u8]),
        Err(Err::Error(BerError::UnexpectedTag {
            expected: Some(Tag::Boolean),
            actual: Tag::Integer
        }))
    );
    // generic parsing gives the tagged object
    let (_, obj) = parse_ber(bytes).expect("parsing failed");
    let (class, tag, inner) = obj.as_tagged().expect("not a tagged object");
    assert_eq!(class, Class::ContextSpecific);
    assert_eq!(tag, Tag(2));
    assert_eq!(inner.as_u32(), Ok(0x10001));
    assert_eq!(
        obj,
        BerObject::from_explicit(
            Class::ContextSpecific,
            Tag(2),
            BerObject::from_int_slice(b"\x01\x00\x01")
        )
    );
}

#[test]
fn tagged_implicit() {
    fn parse_int_implicit(i: &[u8]) -> BerResult<'_, u32> {
        let (rem, content) =
            parse_ber_tagged_implicit(Tag(2), parse_ber_content(Tag::Integer))(i)?;
        let val = content.as_u32().map_err(Err::Error)?;
        Ok((rem, val))
    }
    let bytes = &[0x82, 0x03, 0x01, 0x00, 0x01];
    // IMPLICIT tagged value parsing
    let res = parse_int_implicit(bytes);
    match res {
        Ok((rem, val)) => {
            assert!(rem.is_empty());
            assert_eq!(val, 0x10001);
        }
        _ => panic!("parsing failed"),
    }
    // wrong tag
    assert_eq!(
        parse_ber_tagged_implicit(Tag(3), parse_ber_content(Tag::Integer))(bytes as &[u8]),
        Err(Err::Error(BerError::UnexpectedTag {
            expected: Some(Tag(3)),
            actual: Tag(2)
        }))
    );
    // the object built with the same tag has the same encoding
    let obj = BerObject::from_implicit(
        Class::ContextSpecific,
        Tag(2),
        BerObject::from_int_slice(b"\x01\x00\x01"),
    );
    assert_eq!(obj.to_der_vec(), Ok(bytes.to_vec()));
}

#[test]
fn application() {
    #[derive(Debug, PartialEq)]
    struct SimpleStruct {
        a: u32,
    }
    fn parse_app01(i: &[u8]) -> BerResult<'_, (Header, SimpleStruct)> {
        parse_ber_container(|hdr: &Header, i| {
            if !hdr.is_application() || hdr.tag != Tag(2) {
                return Err(Err::Error(BerError::UnexpectedTag {
                    expected: Some(Tag(2)),
                    actual: hdr.tag,
                }));
            }
            let (i, a) = parse_ber_u32(i)?;
            Ok((i, (*hdr, SimpleStruct { a })))
        })(i)
    }
    let bytes = &[0x62, 0x05, 0x02, 0x03, 0x01, 0x00, 0x01];
    let res = parse_app01(bytes);
    match res {
        Ok((rem, (hdr, app))) => {
            assert!(rem.is_empty());
            assert_eq!(hdr.tag, Tag(2));
            assert!(hdr.is_application());
            assert!(hdr.is_constructed());
            assert_eq!(app, SimpleStruct { a: 0x10001 });
        }
        _ => panic!("parsing failed"),
    }
}
