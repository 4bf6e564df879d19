//! Distinguished Encoding Rules (DER) objects and parser
//!
//! All functions in this module share the BER parsing engine (see the `ber` module),
//! adding the DER constraints: definite and minimal lengths, minimal tags, and
//! canonical values (booleans, integers, bit strings, times, SET order).
//!
//! The objects `BerObject` and `DerObject` are the same (type alias): all BER functions
//! and combinators can be used on DER objects.

use crate::ber::{BerObject, Tag};

mod multi;
mod parser;
mod tagged;
pub use crate::der::multi::*;
pub use crate::der::parser::*;
pub use crate::der::tagged::*;

/// DER tag (same as BER tag)
pub type DerTag = Tag;

/// Representation of a DER-encoded (X.690) object
///
/// Note that a DER object is just a BER object, with additional constraints.
pub type DerObject = BerObject;
