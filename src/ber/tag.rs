use rusticata_macros::newtype_enum;

/// BER/DER Tag as defined in X.680 section 8.4
///
/// X.690 doesn't specify the maximum tag size so we're assuming that people
/// aren't going to need anything more than a u32.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(pub u32);

newtype_enum! {
impl debug Tag {
    EndOfContent = 0x0,
    Boolean = 0x1,
    Integer = 0x2,
    BitString = 0x3,
    OctetString = 0x4,
    Null = 0x05,
    Oid = 0x06,
    ObjDescriptor = 0x07,
    External = 0x08,
    RealType = 0x09,
    Enumerated = 0xa,
    EmbeddedPdv = 0xb,
    Utf8String = 0xc,
    RelativeOid = 0xd,

    Sequence = 0x10,
    Set = 0x11,
    NumericString = 0x12,
    PrintableString = 0x13,
    T61String = 0x14,

    Ia5String = 0x16,
    UtcTime = 0x17,
    GeneralizedTime = 0x18,

    GeneralString = 27, // 0x1b

    BmpString = 0x1e,
}
}

impl Tag {
    /// Largest tag number that fits in the low-tag-number form
    pub const MAX_LOW_FORM: u32 = 30;

    /// Test if this universal tag denotes a string type that BER allows to be
    /// split into constructed segments (X.690 8.7.3, 8.23)
    pub(crate) fn is_string_type(self) -> bool {
        matches!(
            self,
            Tag::BitString
                | Tag::OctetString
                | Tag::Utf8String
                | Tag::NumericString
                | Tag::PrintableString
                | Tag::T61String
                | Tag::Ia5String
                | Tag::UtcTime
                | Tag::GeneralizedTime
                | Tag::GeneralString
                | Tag::BmpString
        )
    }
}

impl From<u32> for Tag {
    fn from(v: u32) -> Self {
        Tag(v)
    }
}
