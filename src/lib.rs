//! # ASN.1 objects with BER/DER encoding
//!
//! An object model for ASN.1 values, with a decoder and an encoder for the Basic Encoding Rules
//! (BER [[X.690]]) and their canonical subset, the Distinguished Encoding Rules (DER [[X.690]]).
//! The decoder is implemented with the [nom](https://github.com/Geal/nom) parser combinator
//! framework, the encoder with [cookie-factory](https://github.com/rust-bakery/cookie-factory).
//!
//! # Decoding
//!
//! There are two different approaches for decoding objects: reading the objects recursively as
//! long as the tags are known, or specifying a description of the expected objects (generally from
//! the [ASN.1][X.680] description).
//!
//! The first method is provided by the entry points of [`BerObject`](ber/struct.BerObject.html),
//! which decode exactly one object and fail if any input is left:
//!
//! ```rust
//! use asn1_object::ber::BerObject;
//!
//! let bytes = [ 0x30, 0x0a,
//!               0x02, 0x03, 0x01, 0x00, 0x01,
//!               0x02, 0x03, 0x01, 0x00, 0x00,
//! ];
//!
//! let obj = BerObject::from_der_bytes(&bytes).expect("decoding failed");
//! assert_eq!(obj[0].as_u32(), Ok(0x10001));
//! ```
//!
//! The nom-style functions [`parse_ber`](ber/fn.parse_ber.html) and
//! [`parse_der`](der/fn.parse_der.html) do the same but return the remaining input.
//!
//! The second method is to specify the expected objects recursively, using
//! [`parse_der_sequence_defined_g`](der/fn.parse_der_sequence_defined_g.html) and similar
//! functions. For example, to read a sequence containing two integers:
//!
//! ```rust
//! use asn1_object::der::*;
//! use asn1_object::error::BerResult;
//!
//! fn localparse_seq(i: &[u8]) -> BerResult<(u32, u32)> {
//!     parse_der_sequence_defined_g(|i| {
//!         let (i, a) = parse_der_u32(i)?;
//!         let (i, b) = parse_der_u32(i)?;
//!         Ok((i, (a, b)))
//!     })(i)
//! }
//!
//! let bytes = [ 0x30, 0x0a,
//!               0x02, 0x03, 0x01, 0x00, 0x01,
//!               0x02, 0x03, 0x01, 0x00, 0x00,
//! ];
//! let (_, v) = localparse_seq(&bytes).expect("parsing failed");
//! assert_eq!(v, (0x10001, 0x10000));
//! ```
//!
//! # Encoding
//!
//! Objects are encoded with an explicit [`Mode`](enum.Mode.html). In DER, the elements of a SET
//! are written in the order of their encodings, without modifying the object:
//!
//! ```rust
//! use asn1_object::ber::BerObject;
//! use asn1_object::Mode;
//!
//! let set = BerObject::from_set(vec![BerObject::from_u64(2), BerObject::from_u64(1)]);
//! let der = set.to_vec(Mode::Der).expect("encoding failed");
//! assert_eq!(der, vec![0x31, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02]);
//! ```
//!
//! # Notes
//!
//! - Two objects are equal if and only if their DER encodings are identical.
//! - The DER constraints are verified when decoding with `Mode::Der`.
//! - `BerObject` and `DerObject` are the same objects (type alias). The only difference is the
//!   verification of constraints *during parsing*.
//! - Integers can be of any size, so they are stored as raw bytes. To get a simple value, use
//!   [`BerObject::as_u32`](ber/struct.BerObject.html#method.as_u32) (knowing that this method will
//!   return an error if the integer is too large), [`BerObject::as_u64`](ber/struct.BerObject.html#method.as_u64),
//!   or use the `bigint` feature of this crate and use
//!   [`BerObject::as_bigint`](ber/struct.BerObject.html#method.as_bigint).
//!
//! # References
//!
//! - [[X.680]] Abstract Syntax Notation One (ASN.1): Specification of basic notation.
//! - [[X.690]] ASN.1 encoding rules: Specification of Basic Encoding Rules (BER), Canonical
//!   Encoding Rules (CER) and Distinguished Encoding Rules (DER).
//!
//! [X.680]: http://www.itu.int/rec/T-REC-X.680/en "Abstract Syntax Notation One (ASN.1):
//!   Specification of basic notation."
//! [X.690]: https://www.itu.int/rec/T-REC-X.690/en "ASN.1 encoding rules: Specification of
//!   Basic Encoding Rules (BER), Canonical Encoding Rules (CER) and Distinguished Encoding Rules
//!   (DER)."

#![deny(/*missing_docs,*/unsafe_code, unstable_features, unused_import_braces)]

#[macro_use]
extern crate rusticata_macros;

#[allow(clippy::module_inception)]
pub mod ber;
pub mod der;
pub mod error;
mod mode;
pub mod oid;

pub use ber::parse_ber;
pub use der::parse_der;
pub use mode::Mode;
