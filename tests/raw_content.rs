use asn1_object::ber::*;
use pretty_assertions::assert_eq;

#[test]
fn implicit_bmpstring_kept_raw() {
    // This is a 4 bytes (2 characters) UTF-16-BE string. The first two bytes are the tag and size.
    let bytes = [0x80, 0x04, 0x00, 0x4c, 0x00, 0x65];
    let (i, header) = ber_read_element_header(&bytes).expect("parsing failed");
    let (rem, content) =
        parse_ber_content(Tag::BmpString)(i, &header, MAX_RECURSION).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(
        content,
        BerObjectContent::Unknown(Class::Universal, Tag::BmpString, bytes[2..].to_vec())
    );
}

#[test]
fn implicit_bmpstring_reencoded() {
    // This is a 6 bytes (3 characters) UTF-16-BE string. The first two bytes are the tag and size.
    let bytes = [0x80, 0x06, 0x79, 0x3E, 0x30, 0xBA, 0x30, 0xFC];
    let (i, header) = ber_read_element_header(&bytes).expect("parsing failed");
    let (rem, content) =
        parse_ber_content(Tag::BmpString)(i, &header, MAX_RECURSION).expect("parsing failed");
    assert!(rem.is_empty());
    let obj = BerObject::from_implicit(
        Class::ContextSpecific,
        Tag(0),
        BerObject::from_obj(content),
    );
    assert_eq!(obj.to_der_vec(), Ok(bytes.to_vec()));
}
