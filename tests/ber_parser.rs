use asn1_object::ber::*;
use asn1_object::error::*;
use asn1_object::oid::*;
use hex_literal::hex;
use nom::Err;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_ber_bool() {
    let empty = &b""[..];
    let b_true = BerObject::from_obj(BerObjectContent::Boolean(true));
    let b_false = BerObject::from_obj(BerObjectContent::Boolean(false));
    assert_eq!(parse_ber_bool(&[0x01, 0x01, 0x00]), Ok((empty, b_false)));
    assert_eq!(
        parse_ber_bool(&[0x01, 0x01, 0xff]),
        Ok((empty, b_true.clone()))
    );
    assert_eq!(parse_ber_bool(&[0x01, 0x01, 0x7f]), Ok((empty, b_true)));
    assert_eq!(
        parse_ber_bool(&[0x01, 0x02, 0x12, 0x34]),
        Err(Err::Error(BerError::BerValueError))
    );
}

#[test]
fn test_seq_indefinite_length() {
    let data = hex!("30 80 04 03 56 78 90 00 00 02 01 01");
    let expected = BerObject::from_seq(vec![BerObject::from_obj(BerObjectContent::OctetString(
        data[4..=6].to_vec(),
    ))]);
    let res = parse_ber(&data);
    assert_eq!(res, Ok((&data[9..], expected.clone())));
    let res = parse_ber_sequence(&data);
    assert_eq!(res, Ok((&data[9..], expected)));
}

#[test]
fn test_set_indefinite_length() {
    let data = hex!("31 80 04 03 56 78 90 00 00");
    let expected = BerObject::from_set(vec![BerObject::from_obj(BerObjectContent::OctetString(
        data[4..=6].to_vec(),
    ))]);
    let res = parse_ber(&data);
    assert_eq!(res, Ok((&data[9..], expected.clone())));
    let res = parse_ber_set(&data);
    assert_eq!(res, Ok((&data[9..], expected)));
}

#[test]
fn test_ber_int() {
    let empty = &b""[..];
    let bytes = [0x02, 0x03, 0x01, 0x00, 0x01];
    let expected = BerObject::from_obj(BerObjectContent::Integer(b"\x01\x00\x01".to_vec()));
    assert_eq!(parse_ber_integer(&bytes), Ok((empty, expected)));
}

#[test]
fn test_ber_bitstring_primitive() {
    let empty = &b""[..];
    let bytes = &[0x03, 0x07, 0x04, 0x0a, 0x3b, 0x5f, 0x29, 0x1c, 0xd0];
    let expected = BerObject::from_obj(BerObjectContent::BitString(
        4,
        BitStringObject {
            data: bytes[3..].to_vec(),
        },
    ));
    assert_eq!(parse_ber_bitstring(bytes), Ok((empty, expected)));
    //
    // correct encoding, padding bits not all set to 0
    //
    let bytes = &[0x03, 0x04, 0x06, 0x6e, 0x5d, 0xe0];
    let (rem, obj) = parse_ber_bitstring(bytes).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(
        obj.content,
        BerObjectContent::BitString(
            6,
            BitStringObject {
                data: bytes[3..].to_vec(),
            },
        )
    );
    //
    // long form of length
    //
    let bytes = &[0x03, 0x81, 0x04, 0x06, 0x6e, 0x5d, 0xc0];
    let (rem, obj) = parse_ber_bitstring(bytes).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(obj.as_slice(), Ok(&bytes[4..]));
}

#[cfg(not(feature = "ber-constructed-strings"))]
#[test]
fn test_ber_bitstring_constructed() {
    let bytes = &[
        0x23, 0x80, 0x03, 0x03, 0x00, 0x0a, 0x3b, 0x03, 0x05, 0x04, 0x5f, 0x29, 0x1c, 0xd0, 0x00,
        0x00,
    ];
    assert_eq!(
        parse_ber_bitstring(bytes),
        Err(Err::Error(BerError::Unsupported))
    );
}

#[cfg(feature = "ber-constructed-strings")]
#[test]
fn test_ber_bitstring_constructed() {
    let bytes = &[
        0x23, 0x80, 0x03, 0x03, 0x00, 0x0a, 0x3b, 0x03, 0x05, 0x04, 0x5f, 0x29, 0x1c, 0xd0, 0x00,
        0x00,
    ];
    let (rem, obj) = parse_ber_bitstring(bytes).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(
        obj.content,
        BerObjectContent::BitString(
            4,
            BitStringObject {
                data: vec![0x0a, 0x3b, 0x5f, 0x29, 0x1c, 0xd0],
            },
        )
    );
}

#[cfg(feature = "ber-constructed-strings")]
#[test]
fn test_ber_octetstring_constructed() {
    let bytes = hex!("24 80 04 02 41 42 04 01 43 00 00");
    let (rem, obj) = parse_ber_octetstring(&bytes).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(obj.as_slice(), Ok(&b"ABC"[..]));
    // segments must carry the tag of the string
    let bytes = hex!("24 06 04 01 41 0c 01 43");
    assert_eq!(
        parse_ber_octetstring(&bytes),
        Err(Err::Error(BerError::UnexpectedTag {
            expected: Some(Tag::OctetString),
            actual: Tag::Utf8String
        }))
    );
}

#[cfg(feature = "ber-constructed-strings")]
#[test]
fn test_ber_t61string_constructed_reencodes_primitive() {
    let bytes = hex!("34 80 14 01 41 14 01 42 00 00");
    let obj = BerObject::from_bytes(&bytes).expect("parsing failed");
    assert!(!obj.is_constructed());
    assert_eq!(obj.as_slice(), Ok(&b"AB"[..]));
    let der = obj.to_der_vec().expect("serialization failed");
    assert_eq!(der, hex!("14 02 41 42"));
    let reparsed = BerObject::from_bytes(&der).expect("parsing failed");
    assert_eq!(reparsed, obj);
}

#[test]
fn test_ber_octetstring_primitive() {
    let empty = &b""[..];
    let bytes = [0x04, 0x05, 0x41, 0x41, 0x41, 0x41, 0x41];
    let expected = BerObject::from_obj(BerObjectContent::OctetString(b"AAAAA".to_vec()));
    assert_eq!(parse_ber_octetstring(&bytes), Ok((empty, expected)));
}

#[test]
fn test_ber_null() {
    let empty = &b""[..];
    let expected = BerObject::from_obj(BerObjectContent::Null);
    assert_eq!(parse_ber_null(&[0x05, 0x00]), Ok((empty, expected)));
}

#[test]
fn test_ber_oid() {
    let empty = &b""[..];
    let bytes = [
        0x06, 0x09, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x05,
    ];
    let oid = Oid::from(&[1, 2, 840, 113549, 1, 1, 5]).unwrap();
    assert_eq!(oid.to_id_string(), "1.2.840.113549.1.1.5");
    let expected = BerObject::from_obj(BerObjectContent::OID(oid));
    assert_eq!(parse_ber_oid(&bytes), Ok((empty, expected)));
}

#[test]
fn test_ber_utf8string() {
    let empty = &b""[..];
    let bytes = [
        0x0c, 0x0a, 0x53, 0x6f, 0x6d, 0x65, 0x2d, 0x53, 0x74, 0x61, 0x74, 0x65,
    ];
    let expected = BerObject::from_obj(BerObjectContent::UTF8String("Some-State".to_string()));
    assert_eq!(parse_ber_utf8string(&bytes), Ok((empty, expected)));
}

#[test]
fn test_ber_end_of_contents() {
    assert_eq!(
        parse_ber(&hex!("00 00")),
        Err(Err::Error(BerError::UnexpectedEndOfContents))
    );
}

#[test_case(&hex!("30 01 02"), BerError::TruncatedContent ; "child-truncated")]
#[test_case(&hex!("05 01 00"), BerError::BerValueError ; "null-with-content")]
#[test_case(&hex!("21 03 01 01 ff"), BerError::ConstructUnexpected ; "constructed-boolean")]
#[test_case(&hex!("10 00"), BerError::ConstructExpected ; "primitive-sequence")]
fn test_ber_invalid(i: &[u8], e: BerError) {
    use pretty_assertions::assert_eq;
    let res = parse_ber(i);
    assert_eq!(res, Err(Err::Error(e)));
}

#[test]
fn test_ber_unknown_universal_constructed() {
    // ObjectDescriptor (7) with constructed encoding, read as a list of children
    let bytes = hex!("27 03 02 01 01");
    let (rem, obj) = parse_ber(&bytes).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(obj.header.tag, Tag(7));
    assert_eq!(obj.as_sequence().map(|v| v.len()), Ok(1));
}

#[test]
fn test_ber_private_sequence() {
    // more than one child: not an explicit tag
    let bytes = hex!("e1 06 02 01 01 02 01 02");
    let (_, obj) = parse_ber(&bytes).expect("parsing failed");
    assert!(obj.is_private());
    assert_eq!(obj.as_sequence().map(|v| v.len()), Ok(2));
    assert_eq!(obj.to_der_vec(), Ok(bytes.to_vec()));
}

#[test]
fn test_parse_ber_content() {
    let bytes = hex!("02 03 01 00 01");
    let (i, header) = ber_read_element_header(&bytes).expect("parsing failed");
    let (rem, content) =
        ber_read_element_content_as(i, header.tag, header.length, header.is_constructed(), 5)
            .expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(header.tag, Tag::Integer);
    assert_eq!(content.as_u32(), Ok(0x10001));
}

#[test]
fn test_parse_ber_recursive_limit() {
    let bytes = hex!("30 05 30 03 02 01 01");
    assert!(parse_ber_recursive(&bytes, 2).is_ok());
    assert_eq!(
        parse_ber_recursive(&bytes, 1),
        Err(Err::Error(BerError::BerMaxDepth))
    );
}
