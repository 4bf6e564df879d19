//! Canonical (DER) ordering of SET elements
//!
//! X.690 11.6: the encodings of the elements of a SET appear in ascending
//! order, compared as octet strings. The order is always computed from the
//! elements, values are never reordered in place.

use crate::ber::serialize::ber_encode_object;
use crate::ber::{BerObject, BerObjectContent};
use crate::error::BerError;
use crate::mode::Mode;
use cookie_factory::{gen_simple, GenError};
use log::trace;

fn der_encodings(elements: &[BerObject]) -> Result<Vec<Vec<u8>>, GenError> {
    elements
        .iter()
        .map(|o| gen_simple(ber_encode_object(o, Mode::Der), Vec::new()))
        .collect()
}

fn is_sorted(v: &[Vec<u8>]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// DER encodings of the elements, in canonical order
pub(crate) fn der_sorted_encodings(elements: &[BerObject]) -> Result<Vec<Vec<u8>>, GenError> {
    let mut v = der_encodings(elements)?;
    if !is_sorted(&v) {
        trace!("reordering {} SET elements for DER", v.len());
        v.sort();
    }
    Ok(v)
}

/// Test if the elements are stored in canonical order
pub(crate) fn is_canonically_ordered(elements: &[BerObject]) -> Result<bool, BerError> {
    let v = der_encodings(elements)?;
    Ok(is_sorted(&v))
}

/// Return references to the elements, in canonical (DER) order
pub fn canonical_order(elements: &[BerObject]) -> Result<Vec<&BerObject>, BerError> {
    let encodings = der_encodings(elements)?;
    let mut v: Vec<_> = encodings.iter().zip(elements.iter()).collect();
    v.sort_by(|a, b| a.0.cmp(b.0));
    Ok(v.into_iter().map(|(_, o)| o).collect())
}

impl BerObject {
    /// Return a copy of the object where the elements of every SET are stored
    /// in canonical order
    ///
    /// The DER encoding of the result is identical to the DER encoding of
    /// `self`, and encoding it in BER gives the same bytes as in DER when all
    /// other values are canonical.
    pub fn to_canonical(&self) -> Result<BerObject, BerError> {
        let content = match self.content {
            BerObjectContent::Sequence(ref v) => BerObjectContent::Sequence(
                v.iter()
                    .map(BerObject::to_canonical)
                    .collect::<Result<_, _>>()?,
            ),
            BerObjectContent::Set(ref v) => BerObjectContent::Set(
                canonical_order(v)?
                    .into_iter()
                    .map(BerObject::to_canonical)
                    .collect::<Result<_, _>>()?,
            ),
            BerObjectContent::Tagged(class, tag, ref inner) => {
                BerObjectContent::Tagged(class, tag, Box::new(inner.to_canonical()?))
            }
            ref c => c.clone(),
        };
        Ok(BerObject::from_header_and_content(self.header, content))
    }
}
