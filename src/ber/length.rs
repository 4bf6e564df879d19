use crate::error::BerError;
use std::convert::TryFrom;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BerSizeError(pub(crate) ());

/// Ber Object Length
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Length {
    /// Definite form (X.690 8.1.3.3)
    Definite(usize),
    /// Indefinite form (X.690 8.1.3.6)
    Indefinite,
}

impl Length {
    /// Return true if length is definite and equal to 0
    pub fn is_null(&self) -> bool {
        *self == Length::Definite(0)
    }

    /// Get length of primitive object
    #[inline]
    pub fn definite(&self) -> Result<usize, BerError> {
        match self {
            Length::Definite(sz) => Ok(*sz),
            Length::Indefinite => Err(BerError::MalformedLength),
        }
    }

    /// Number of octets used by the minimal encoding of this length
    pub fn encoded_len(&self) -> usize {
        match *self {
            Length::Definite(sz) if sz < 0x80 => 1,
            Length::Definite(sz) => 1 + minimal_be_bytes(sz).len(),
            Length::Indefinite => 1,
        }
    }
}

/// Big-endian bytes of `v` with leading zero octets removed
pub(crate) fn minimal_be_bytes(v: usize) -> Vec<u8> {
    v.to_be_bytes()
        .iter()
        .cloned()
        .skip_while(|&b| b == 0)
        .collect()
}

impl From<usize> for Length {
    fn from(v: usize) -> Self {
        Length::Definite(v)
    }
}

impl TryFrom<u64> for Length {
    type Error = BerSizeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let v = usize::try_from(value).or(Err(BerSizeError(())))?;
        Ok(Length::Definite(v))
    }
}

impl TryFrom<Length> for usize {
    type Error = BerSizeError;

    #[inline]
    fn try_from(value: Length) -> Result<Self, Self::Error> {
        match value {
            Length::Definite(sz) => Ok(sz),
            Length::Indefinite => Err(BerSizeError(())),
        }
    }
}
