//! Basic Encoding Rules (BER) objects, parser and encoder

mod ber;
pub(crate) mod canonical;
mod class;
mod header;
pub(crate) mod integer;
pub(crate) mod length;
pub(crate) mod multi;
pub(crate) mod parser;
mod print;
mod read;
pub(crate) mod serialize;
mod tag;
pub(crate) mod tagged;

pub use crate::ber::ber::*;
pub use crate::ber::canonical::canonical_order;
pub use crate::ber::class::*;
pub use crate::ber::header::*;
pub use crate::ber::length::*;
pub use crate::ber::multi::*;
pub use crate::ber::parser::*;
pub use crate::ber::print::*;
pub use crate::ber::read::*;
pub use crate::ber::serialize::*;
pub use crate::ber::tag::*;
pub use crate::ber::tagged::*;
