use crate::ber::integer::*;
use crate::ber::serialize::{content_to_vec, identity_content, identity_octets};
use crate::ber::{Class, Header, Length, Tag};
use crate::error::BerError;
use crate::mode::Mode;
use crate::oid::Oid;
use std::convert::AsRef;
use std::convert::From;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::Index;
use std::vec::Vec;

/// Representation of a BER-encoded (X.690) object
///
/// An object is a header (class, tag, constructed flag) and a content. The
/// header is authoritative for encoding: implicit tagging is done by changing
/// the header of an object while keeping its content.
///
/// Two objects are equal if their DER encodings are identical. In particular,
/// the order of the elements of a SET is not significant, and the `length`
/// stored in the header (as read from the input) is ignored.
#[derive(Debug, Clone)]
pub struct BerObject {
    pub header: Header,
    pub content: BerObjectContent,
}

/// BER object content
///
/// Primitive values own their content octets. Types that are not interpreted
/// by this crate are kept as raw content in `Unknown`.
#[derive(Debug, Clone)]
pub enum BerObjectContent {
    Boolean(bool),
    /// Integer, as two's complement big-endian content octets
    Integer(Vec<u8>),
    /// Bit string: number of unused bits, and data
    BitString(u8, BitStringObject),
    OctetString(Vec<u8>),
    Null,
    OID(Oid),
    NumericString(String),
    PrintableString(String),
    IA5String(String),
    UTF8String(String),

    UTCTime(Vec<u8>),
    GeneralizedTime(Vec<u8>),

    Sequence(Vec<BerObject>),
    Set(Vec<BerObject>),

    /// Explicitly tagged object: class, tag, and inner object
    Tagged(Class, Tag, Box<BerObject>),
    /// Object with an uninterpreted content: class, tag, and content octets
    Unknown(Class, Tag, Vec<u8>),
}

impl BerObject {
    /// Build a BerObject from a header and content.
    /// Note: values are not checked, so the tag can be different from the real content, or flags
    /// can be invalid.
    pub fn from_header_and_content(header: Header, content: BerObjectContent) -> BerObject {
        BerObject { header, content }
    }

    /// Build a BerObject from its content, using default flags (class and tag of the content,
    /// and constructed flag set only for Set, Sequence and explicitly tagged objects)
    pub fn from_obj(c: BerObjectContent) -> BerObject {
        let (class, constructed, tag) = c.default_identifier();
        let header = Header::new(class, constructed, tag, Length::Definite(0));
        BerObject { header, content: c }
    }

    /// Build a DER integer object from a slice containing an encoded integer
    pub fn from_int_slice(i: &[u8]) -> BerObject {
        BerObject::from_obj(BerObjectContent::Integer(i.to_vec()))
    }

    /// Build a DER integer object from an unsigned value, using the minimal encoding
    pub fn from_u64(v: u64) -> BerObject {
        BerObject::from_obj(BerObjectContent::Integer(encode_unsigned(v)))
    }

    /// Build a DER integer object from a signed value, using the minimal encoding
    pub fn from_i64(v: i64) -> BerObject {
        BerObject::from_obj(BerObjectContent::Integer(encode_signed(v)))
    }

    /// Build a DER sequence object from a vector of DER objects
    pub fn from_seq(l: Vec<BerObject>) -> BerObject {
        BerObject::from_obj(BerObjectContent::Sequence(l))
    }

    /// Build a DER set object from a vector of DER objects
    ///
    /// Elements are stored in the given order. The DER encoding sorts them,
    /// without changing this object.
    pub fn from_set(l: Vec<BerObject>) -> BerObject {
        BerObject::from_obj(BerObjectContent::Set(l))
    }

    /// Build an explicitly tagged object: `[class tag] EXPLICIT obj`
    ///
    /// The encoding of `obj` is nested inside a new constructed tag/length.
    pub fn from_explicit(class: Class, tag: Tag, obj: BerObject) -> BerObject {
        BerObject::from_obj(BerObjectContent::Tagged(class, tag, Box::new(obj)))
    }

    /// Build an implicitly tagged object: `[class tag] IMPLICIT obj`
    ///
    /// Only the identifier is replaced, the content of `obj` is kept.
    pub fn from_implicit(class: Class, tag: Tag, obj: BerObject) -> BerObject {
        let constructed = obj.is_constructed();
        let header = obj
            .header
            .with_class(class)
            .with_tag(tag)
            .with_constructed(constructed);
        BerObject {
            header,
            content: obj.content,
        }
    }

    /// Attempt to read integer value from DER object.
    /// This can fail if the object is not an integer, or if it is too large.
    ///
    /// ```rust
    /// # use asn1_object::ber::BerObject;
    /// let der_int  = BerObject::from_int_slice(b"\x01\x00\x01");
    /// assert_eq!(
    ///     der_int.as_u64(),
    ///     Ok(0x10001)
    /// );
    /// ```
    pub fn as_u64(&self) -> Result<u64, BerError> {
        self.content.as_u64()
    }

    /// Attempt to read integer value from DER object.
    /// This can fail if the object is not an integer, or if it is too large.
    pub fn as_u32(&self) -> Result<u32, BerError> {
        self.content.as_u32()
    }

    /// Attempt to read a signed integer value from DER object.
    /// This can fail if the object is not an integer, or if it is too large.
    ///
    /// ```rust
    /// # use asn1_object::ber::BerObject;
    /// let der_int  = BerObject::from_int_slice(b"\xff\x7f");
    /// assert_eq!(
    ///     der_int.as_i64(),
    ///     Ok(-129)
    /// );
    /// ```
    pub fn as_i64(&self) -> Result<i64, BerError> {
        self.content.as_i64()
    }

    /// Attempt to read a signed integer value from DER object.
    /// This can fail if the object is not an integer, or if it is too large.
    pub fn as_i32(&self) -> Result<i32, BerError> {
        self.content.as_i32()
    }

    /// Attempt to read integer value from DER object.
    /// This can fail if the object is not a boolean.
    pub fn as_bool(&self) -> Result<bool, BerError> {
        self.content.as_bool()
    }

    /// Attempt to read an OID value from DER object.
    /// This can fail if the object is not an OID.
    pub fn as_oid(&self) -> Result<&Oid, BerError> {
        self.content.as_oid()
    }

    /// Attempt to read the inner object of an explicitly tagged object.
    /// This can fail if the object is not tagged.
    pub fn as_tagged(&self) -> Result<(Class, Tag, &BerObject), BerError> {
        self.content.as_tagged()
    }

    /// Attempt to read a reference to a BitString value from DER object.
    /// This can fail if the object is not an BitString.
    pub fn as_bitstring(&self) -> Result<&BitStringObject, BerError> {
        self.content.as_bitstring()
    }

    /// Attempt to extract the list of objects from a DER sequence.
    /// This can fail if the object is not a sequence.
    pub fn as_sequence(&self) -> Result<&Vec<BerObject>, BerError> {
        self.content.as_sequence()
    }

    /// Attempt to extract the list of objects from a DER set.
    /// This can fail if the object is not a set.
    ///
    /// Elements are returned in their stored order.
    pub fn as_set(&self) -> Result<&Vec<BerObject>, BerError> {
        self.content.as_set()
    }

    /// Attempt to get the content from a DER object, as a slice.
    /// This can fail if the object does not contain a type directly equivalent to a slice (e.g a
    /// sequence).
    /// This function mostly concerns string types, integers, or unknown DER objects.
    pub fn as_slice(&self) -> Result<&[u8], BerError> {
        self.content.as_slice()
    }

    /// Attempt to get the content from a DER object, as a str.
    /// This can fail if the object does not contain a string type.
    ///
    /// Only NumericString, PrintableString, UTF8String and IA5String
    /// are considered here. Other string types can be read using `as_slice`.
    pub fn as_str(&self) -> Result<&str, BerError> {
        self.content.as_str()
    }

    /// Test if object class is Universal
    pub fn is_universal(&self) -> bool {
        self.header.class == Class::Universal
    }
    /// Test if object class is Application
    pub fn is_application(&self) -> bool {
        self.header.class == Class::Application
    }
    /// Test if object class is Context-specific
    pub fn is_contextspecific(&self) -> bool {
        self.header.class == Class::ContextSpecific
    }
    /// Test if object class is Private
    pub fn is_private(&self) -> bool {
        self.header.class == Class::Private
    }

    /// Test if object is primitive
    pub fn is_primitive(&self) -> bool {
        !self.is_constructed()
    }

    /// Test if object is constructed
    ///
    /// The flag is derived from the content, except for `Unknown` content
    /// where the header flag is used.
    pub fn is_constructed(&self) -> bool {
        match self.content {
            BerObjectContent::Sequence(_)
            | BerObjectContent::Set(_)
            | BerObjectContent::Tagged(..) => true,
            BerObjectContent::Unknown(..) => self.header.constructed,
            _ => false,
        }
    }
}

/// Build a DER object from an OID.
impl From<Oid> for BerObject {
    fn from(oid: Oid) -> BerObject {
        BerObject::from_obj(BerObjectContent::OID(oid))
    }
}

/// Build a DER object from a BerObjectContent.
impl From<BerObjectContent> for BerObject {
    fn from(obj: BerObjectContent) -> BerObject {
        BerObject::from_obj(obj)
    }
}

impl From<bool> for BerObject {
    fn from(b: bool) -> BerObject {
        BerObject::from_obj(BerObjectContent::Boolean(b))
    }
}

/// Objects are equal if and only if their DER encodings are identical
///
/// An object that cannot be encoded is never equal to one that can. Two such
/// objects are compared on their stored values.
impl PartialEq for BerObject {
    fn eq(&self, other: &BerObject) -> bool {
        match (self.to_der_vec(), other.to_der_vec()) {
            (Ok(a), Ok(b)) => a == b,
            (Err(_), Err(_)) => identity_octets(self) == identity_octets(other),
            _ => false,
        }
    }
}

impl Eq for BerObject {}

impl Hash for BerObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        identity_octets(self).hash(state);
    }
}

/// Contents are equal if they have the same kind and identical DER content octets
impl PartialEq for BerObjectContent {
    fn eq(&self, other: &BerObjectContent) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
            && self.default_identifier() == other.default_identifier()
            && match (content_to_vec(self, Mode::Der), content_to_vec(other, Mode::Der)) {
                (Ok(a), Ok(b)) => a == b,
                (Err(_), Err(_)) => identity_content(self) == identity_content(other),
                _ => false,
            }
    }
}

impl BerObjectContent {
    /// Class, constructed flag and tag implied by the content
    pub(crate) fn default_identifier(&self) -> (Class, bool, Tag) {
        match *self {
            BerObjectContent::Tagged(class, tag, _) => (class, true, tag),
            BerObjectContent::Unknown(class, tag, _) => (class, false, tag),
            BerObjectContent::Sequence(_) => (Class::Universal, true, Tag::Sequence),
            BerObjectContent::Set(_) => (Class::Universal, true, Tag::Set),
            ref c => (Class::Universal, false, c.tag()),
        }
    }

    pub fn as_u64(&self) -> Result<u64, BerError> {
        match *self {
            BerObjectContent::Integer(ref i) => decode_array_uint8(i),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_u32(&self) -> Result<u32, BerError> {
        match *self {
            BerObjectContent::Integer(ref i) => decode_array_uint4(i),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_i64(&self) -> Result<i64, BerError> {
        match *self {
            BerObjectContent::Integer(ref i) => decode_array_int8(i),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_i32(&self) -> Result<i32, BerError> {
        match *self {
            BerObjectContent::Integer(ref i) => decode_array_int4(i),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_bool(&self) -> Result<bool, BerError> {
        match *self {
            BerObjectContent::Boolean(b) => Ok(b),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_oid(&self) -> Result<&Oid, BerError> {
        match *self {
            BerObjectContent::OID(ref o) => Ok(o),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_tagged(&self) -> Result<(Class, Tag, &BerObject), BerError> {
        match *self {
            BerObjectContent::Tagged(class, tag, ref o) => Ok((class, tag, o.as_ref())),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_bitstring(&self) -> Result<&BitStringObject, BerError> {
        match *self {
            BerObjectContent::BitString(_, ref b) => Ok(b),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_sequence(&self) -> Result<&Vec<BerObject>, BerError> {
        match *self {
            BerObjectContent::Sequence(ref s) => Ok(s),
            _ => Err(BerError::BerTypeError),
        }
    }

    pub fn as_set(&self) -> Result<&Vec<BerObject>, BerError> {
        match *self {
            BerObjectContent::Set(ref s) => Ok(s),
            _ => Err(BerError::BerTypeError),
        }
    }

    #[rustfmt::skip]
    pub fn as_slice(&self) -> Result<&[u8],BerError> {
        match *self {
            BerObjectContent::NumericString(ref s) |
            BerObjectContent::PrintableString(ref s) |
            BerObjectContent::UTF8String(ref s) |
            BerObjectContent::IA5String(ref s) => Ok(s.as_ref()),
            BerObjectContent::Integer(ref s) |
            BerObjectContent::BitString(_,BitStringObject{data:ref s}) |
            BerObjectContent::OctetString(ref s) |
            BerObjectContent::UTCTime(ref s) |
            BerObjectContent::GeneralizedTime(ref s) |
            BerObjectContent::Unknown(_,_,ref s) => Ok(s),
            _ => Err(BerError::BerTypeError),
        }
    }

    #[rustfmt::skip]
    pub fn as_str(&self) -> Result<&str,BerError> {
        match *self {
            BerObjectContent::NumericString(ref s) |
            BerObjectContent::PrintableString(ref s) |
            BerObjectContent::UTF8String(ref s) |
            BerObjectContent::IA5String(ref s) => Ok(s),
            _ => Err(BerError::BerTypeError),
        }
    }

    /// Tag of the content: the universal tag for known types, or the
    /// tag stored in `Tagged` and `Unknown`
    #[rustfmt::skip]
    pub fn tag(&self) -> Tag {
        match *self {
            BerObjectContent::Boolean(_)           => Tag::Boolean,
            BerObjectContent::Integer(_)           => Tag::Integer,
            BerObjectContent::BitString(_,_)       => Tag::BitString,
            BerObjectContent::OctetString(_)       => Tag::OctetString,
            BerObjectContent::Null                 => Tag::Null,
            BerObjectContent::OID(_)               => Tag::Oid,
            BerObjectContent::NumericString(_)     => Tag::NumericString,
            BerObjectContent::PrintableString(_)   => Tag::PrintableString,
            BerObjectContent::IA5String(_)         => Tag::Ia5String,
            BerObjectContent::UTF8String(_)        => Tag::Utf8String,
            BerObjectContent::Sequence(_)          => Tag::Sequence,
            BerObjectContent::Set(_)               => Tag::Set,
            BerObjectContent::UTCTime(_)           => Tag::UtcTime,
            BerObjectContent::GeneralizedTime(_)   => Tag::GeneralizedTime,
            BerObjectContent::Tagged(_,x,_) |
            BerObjectContent::Unknown(_,x,_)       => x,
        }
    }
}

#[cfg(feature = "bigint")]
use num_bigint::{BigInt, BigUint, Sign};

#[cfg(feature = "bigint")]
impl BerObject {
    /// Interpret the content of an integer as a signed big integer
    pub fn as_bigint(&self) -> Option<BigInt> {
        match self.content {
            BerObjectContent::Integer(ref s) => Some(BigInt::from_signed_bytes_be(s)),
            _ => None,
        }
    }

    /// Interpret the content of a non-negative integer as an unsigned big integer
    pub fn as_biguint(&self) -> Option<BigUint> {
        match self.content {
            BerObjectContent::Integer(ref s) => {
                let i = BigInt::from_signed_bytes_be(s);
                match i.sign() {
                    Sign::Minus => None,
                    _ => i.to_biguint(),
                }
            }
            _ => None,
        }
    }
}

// This is a consuming iterator
impl IntoIterator for BerObject {
    type Item = BerObject;
    type IntoIter = std::vec::IntoIter<BerObject>;

    /// Iterate over the elements of a SEQUENCE or SET, or over the object itself otherwise
    fn into_iter(self) -> Self::IntoIter {
        match self.content {
            BerObjectContent::Sequence(v) | BerObjectContent::Set(v) => v.into_iter(),
            _ => vec![self].into_iter(),
        }
    }
}

#[derive(Debug)]
pub struct BerObjectRefIterator<'a> {
    obj: &'a BerObject,
    idx: usize,
}

impl<'a> Iterator for BerObjectRefIterator<'a> {
    type Item = &'a BerObject;
    fn next(&mut self) -> Option<&'a BerObject> {
        let res = match self.obj.content {
            BerObjectContent::Sequence(ref v) if self.idx < v.len() => Some(&v[self.idx]),
            BerObjectContent::Set(ref v) if self.idx < v.len() => Some(&v[self.idx]),
            _ => None,
        };
        self.idx += 1;
        res
    }
}

impl BerObject {
    pub fn ref_iter(&self) -> BerObjectRefIterator<'_> {
        BerObjectRefIterator { obj: self, idx: 0 }
    }
}

impl Index<usize> for BerObject {
    type Output = BerObject;

    fn index(&self, idx: usize) -> &BerObject {
        match self.content {
            BerObjectContent::Sequence(ref v) if idx < v.len() => &v[idx],
            BerObjectContent::Set(ref v) if idx < v.len() => &v[idx],
            _ => panic!("Try to index BerObjectContent which is not constructed"),
        }
    }
}

/// BitString wrapper
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitStringObject {
    pub data: Vec<u8>,
}

impl BitStringObject {
    /// Test if bit `bitnum` is set
    pub fn is_set(&self, bitnum: usize) -> bool {
        let byte_pos = bitnum / 8;
        if byte_pos >= self.data.len() {
            return false;
        }
        let b = 7 - (bitnum % 8);
        (self.data[byte_pos] & (1 << b)) != 0
    }
}

impl AsRef<[u8]> for BitStringObject {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::ber::*;
    use crate::oid::*;
    use std::collections::HashSet;

    #[test]
    fn test_der_as_u64() {
        let der_obj = BerObject::from_int_slice(b"\x01\x00\x02");
        assert_eq!(der_obj.as_u64(), Ok(0x10002));
    }

    #[test]
    fn test_der_from_u64() {
        assert_eq!(BerObject::from_u64(0).as_slice(), Ok(&b"\x00"[..]));
        assert_eq!(BerObject::from_u64(0x80).as_slice(), Ok(&b"\x00\x80"[..]));
        assert_eq!(BerObject::from_i64(-129).as_slice(), Ok(&b"\xff\x7f"[..]));
        assert_eq!(BerObject::from_i64(-1).as_slice(), Ok(&b"\xff"[..]));
    }

    #[test]
    fn test_der_seq_iter() {
        let der_obj = BerObject::from_obj(BerObjectContent::Sequence(vec![
            BerObject::from_int_slice(b"\x01\x00\x01"),
            BerObject::from_int_slice(b"\x01\x00\x00"),
        ]));
        let expected_values = vec![
            BerObject::from_int_slice(b"\x01\x00\x01"),
            BerObject::from_int_slice(b"\x01\x00\x00"),
        ];

        for (idx, v) in der_obj.ref_iter().enumerate() {
            assert_eq!((*v), expected_values[idx]);
        }
        let owned: Vec<_> = der_obj.into_iter().collect();
        assert_eq!(owned, expected_values);
    }

    #[test]
    fn test_der_from_oid() {
        let obj: BerObject = Oid::from(&[1, 2]).unwrap().into();
        let expected = BerObject::from_obj(BerObjectContent::OID(Oid::from(&[1, 2]).unwrap()));

        assert_eq!(obj, expected);
    }

    #[test]
    fn test_der_bistringobject() {
        let obj = BitStringObject {
            data: vec![0x0f, 0x00, 0x40],
        };
        assert!(!obj.is_set(0));
        assert!(obj.is_set(7));
        assert!(!obj.is_set(9));
        assert!(obj.is_set(17));
    }

    #[test]
    fn test_der_bistringobject_asref() {
        fn assert_equal<T: AsRef<[u8]>>(s: T, b: &[u8]) {
            assert_eq!(s.as_ref(), b);
        }
        let b: &[u8] = &[0x0f, 0x00, 0x40];
        let obj = BitStringObject { data: b.to_vec() };
        assert_equal(obj, b);
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a = BerObject::from_set(vec![
            BerObject::from_u64(1),
            BerObject::from_u64(2),
            BerObject::from_u64(3),
        ]);
        let b = BerObject::from_set(vec![
            BerObject::from_u64(3),
            BerObject::from_u64(1),
            BerObject::from_u64(2),
        ]);
        assert_eq!(a, b);
        let mut h = HashSet::new();
        h.insert(a);
        assert!(!h.insert(b));

        // order is significant in a sequence
        let s1 = BerObject::from_seq(vec![BerObject::from_u64(1), BerObject::from_u64(2)]);
        let s2 = BerObject::from_seq(vec![BerObject::from_u64(2), BerObject::from_u64(1)]);
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_content_equality() {
        assert_eq!(
            BerObjectContent::Integer(vec![1]),
            BerObjectContent::Integer(vec![1])
        );
        assert_ne!(
            BerObjectContent::Integer(vec![1]),
            BerObjectContent::OctetString(vec![1])
        );
    }

    #[test]
    fn test_unencodable_values_keep_identity() {
        let empty_int = || BerObject::from_int_slice(&[]);
        let a = BerObject::from_seq(vec![empty_int(), BerObject::from_u64(1)]);
        let b = BerObject::from_seq(vec![empty_int(), BerObject::from_u64(2)]);
        assert!(a.to_der_vec().is_err());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        let mut h = HashSet::new();
        assert!(h.insert(a));
        assert!(h.insert(b));

        let bad_bits = BerObject::from_obj(BerObjectContent::BitString(
            9,
            BitStringObject { data: vec![0x80] },
        ));
        assert_ne!(empty_int(), bad_bits);
        assert_ne!(empty_int(), BerObject::from_u64(0));
        assert_ne!(
            BerObjectContent::Integer(vec![]),
            BerObjectContent::Integer(vec![0])
        );
        assert_eq!(
            BerObjectContent::Integer(vec![]),
            BerObjectContent::Integer(vec![])
        );
    }

    #[test]
    fn test_implicit_keeps_content() {
        let inner = BerObject::from_seq(vec![BerObject::from_u64(5)]);
        let obj = BerObject::from_implicit(Class::ContextSpecific, Tag(1), inner);
        assert!(obj.is_contextspecific());
        assert!(obj.is_constructed());
        assert_eq!(obj.header.tag, Tag(1));
        assert_eq!(obj.as_sequence().map(|v| v.len()), Ok(1));
    }

    #[test]
    fn test_explicit_and_implicit_sequence_identity() {
        // [0] EXPLICIT INTEGER and [0] IMPLICIT SEQUENCE { INTEGER } share their encoding
        let explicit =
            BerObject::from_explicit(Class::ContextSpecific, Tag(0), BerObject::from_u64(1));
        let implicit = BerObject::from_implicit(
            Class::ContextSpecific,
            Tag(0),
            BerObject::from_seq(vec![BerObject::from_u64(1)]),
        );
        assert_eq!(explicit, implicit);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_der_to_bigint() {
        let obj = BerObject::from_obj(BerObjectContent::Integer(b"\x01\x00\x01".to_vec()));
        let expected = ::num_bigint::BigInt::from(0x10001);

        assert_eq!(obj.as_bigint(), Some(expected));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_der_to_biguint() {
        let obj = BerObject::from_obj(BerObjectContent::Integer(b"\x01\x00\x01".to_vec()));
        let expected = ::num_bigint::BigUint::from(0x10001 as u32);

        assert_eq!(obj.as_biguint(), Some(expected));
        let neg = BerObject::from_i64(-1);
        assert_eq!(neg.as_biguint(), None);
    }
}
