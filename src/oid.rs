//! Object Identifier (OID)

use std::fmt;
use std::iter::FusedIterator;

/// Error raised when building an [`Oid`] from invalid components or content octets
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OidParseError {
    TooShort,
    /// Signalizes that the first or second component is too large.
    /// The first must be within the range 0 to 2 (inclusive).
    /// The second component must be less than 40, unless the first is 2.
    FirstComponentsTooLarge,
    /// A sub-identifier is not minimally encoded, or is truncated
    InvalidEncoding,
}

/// Object ID (OID) representation
///
/// The OID is stored as its DER content octets (X.690 8.19), so it can be
/// compared and re-encoded without any conversion. Components are decoded
/// on demand by [`iter`](#method.iter).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid {
    asn1: Vec<u8>,
}

impl Oid {
    /// Create an OID from its content octets, checking the encoding
    ///
    /// Every sub-identifier must be minimally encoded (no leading `0x80`)
    /// and the last octet must not have the continuation bit set.
    pub fn new(asn1: Vec<u8>) -> Result<Oid, OidParseError> {
        if asn1.is_empty() {
            return Err(OidParseError::TooShort);
        }
        let mut start_of_subid = true;
        for &b in &asn1 {
            if start_of_subid && b == 0x80 {
                return Err(OidParseError::InvalidEncoding);
            }
            start_of_subid = b & 0x80 == 0;
        }
        if !start_of_subid {
            return Err(OidParseError::InvalidEncoding);
        }
        Ok(Oid { asn1 })
    }

    /// Build an OID from an array of components.
    ///
    /// This conversion can fail if the first or second component is too large.
    pub fn from(s: &[u64]) -> Result<Oid, OidParseError> {
        if s.len() < 2 {
            return Err(OidParseError::TooShort);
        }
        if s[0] > 2 || (s[0] < 2 && s[1] >= 40) {
            return Err(OidParseError::FirstComponentsTooLarge);
        }
        let first = (s[0] * 40)
            .checked_add(s[1])
            .ok_or(OidParseError::FirstComponentsTooLarge)?;
        let mut asn1 = Vec::with_capacity(s.len() + 2);
        encode_subidentifier(first, &mut asn1);
        for &c in &s[2..] {
            encode_subidentifier(c, &mut asn1);
        }
        Ok(Oid { asn1 })
    }

    /// Get the encoded (content) bytes of the OID
    pub fn as_bytes(&self) -> &[u8] {
        &self.asn1
    }

    /// Return an iterator over the components of the OID
    ///
    /// Returns `None` if a component does not fit in a `u64`.
    pub fn iter(&self) -> Option<SubIdentifierIterator<'_>> {
        // 10 groups of 7 bits only fit if the first group holds a single bit
        let overflows = self
            .asn1
            .split_inclusive(|&b| b & 0x80 == 0)
            .any(|subid| subid.len() > 10 || (subid.len() == 10 && subid[0] & 0x7f > 1));
        if overflows {
            return None;
        }
        Some(SubIdentifierIterator {
            oid: self,
            pos: 0,
            first: true,
            pending: None,
        })
    }

    /// Return the dotted-decimal representation of the OID
    pub fn to_id_string(&self) -> String {
        match self.iter() {
            Some(it) => {
                let v: Vec<String> = it.map(|c| c.to_string()).collect();
                v.join(".")
            }
            None => {
                let mut s = String::with_capacity(self.asn1.len() * 3);
                for (i, b) in self.asn1.iter().enumerate() {
                    if i > 0 {
                        s.push(' ');
                    }
                    s.push_str(&format!("{:02x}", b));
                }
                s
            }
        }
    }
}

fn encode_subidentifier(c: u64, out: &mut Vec<u8>) {
    let mut groups = vec![(c & 0x7f) as u8];
    let mut rest = c >> 7;
    while rest > 0 {
        groups.push(0x80 | (rest & 0x7f) as u8);
        rest >>= 7;
    }
    out.extend(groups.iter().rev());
}

/// Iterator over the components of an [`Oid`]
#[derive(Debug)]
pub struct SubIdentifierIterator<'a> {
    oid: &'a Oid,
    pos: usize,
    first: bool,
    pending: Option<u64>,
}

impl<'a> Iterator for SubIdentifierIterator<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(second) = self.pending.take() {
            return Some(second);
        }
        if self.pos == self.oid.asn1.len() {
            return None;
        }
        let mut res: u64 = 0;
        for &b in &self.oid.asn1[self.pos..] {
            res = (res << 7) | u64::from(b & 0x7f);
            self.pos += 1;
            if b & 0x80 == 0 {
                break;
            }
        }
        if self.first {
            // first sub-identifier = X*40 + Y (See 8.19.4)
            self.first = false;
            let (x, y) = match res {
                0..=39 => (0, res),
                40..=79 => (1, res - 40),
                _ => (2, res - 80),
            };
            self.pending = Some(y);
            return Some(x);
        }
        Some(res)
    }
}

impl<'a> FusedIterator for SubIdentifierIterator<'a> {}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_id_string())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("OID(")?;
        f.write_str(&self.to_id_string())?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_fmt() {
        let oid = Oid::from(&[1, 2, 840, 113_549, 1, 1, 5]).unwrap();
        assert_eq!(format!("{}", oid), "1.2.840.113549.1.1.5".to_owned());
        assert_eq!(format!("{:?}", oid), "OID(1.2.840.113549.1.1.5)".to_owned());
    }

    #[test]
    fn test_oid_encoding() {
        let oid = Oid::from(&[1, 2, 250, 1, 16, 9]).unwrap();
        assert_eq!(oid.as_bytes(), &[42, 129, 122, 1, 16, 9]);
        assert_eq!(Oid::new(vec![42, 129, 122, 1, 16, 9]), Ok(oid));
    }

    #[test]
    fn test_oid_invalid() {
        assert_eq!(Oid::new(vec![]), Err(OidParseError::TooShort));
        assert_eq!(Oid::new(vec![42, 0x80, 0x01]), Err(OidParseError::InvalidEncoding));
        assert_eq!(Oid::new(vec![42, 0x81]), Err(OidParseError::InvalidEncoding));
        assert_eq!(
            Oid::from(&[3, 1]),
            Err(OidParseError::FirstComponentsTooLarge)
        );
        assert_eq!(Oid::from(&[1]), Err(OidParseError::TooShort));
    }

    #[test]
    fn test_oid_components() {
        let oid = Oid::new(vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d]).unwrap();
        let v: Vec<u64> = oid.iter().unwrap().collect();
        assert_eq!(v, vec![1, 2, 840, 113_549]);
    }

    #[test]
    fn test_oid_large_first_component() {
        let oid = Oid::from(&[2, 999, 3]).unwrap();
        assert_eq!(oid.as_bytes(), &[0x88, 0x37, 0x03]);
        assert_eq!(oid.to_id_string(), "2.999.3");
    }
}
