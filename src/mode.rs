//! Encoding rules

use std::fmt;

/// The encoding rules used to encode or decode an object.
///
/// The mode is an explicit argument of every encoding and mode-aware decoding
/// function; there is no global default.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Basic Encoding Rules.
    ///
    /// These are the most flexible rules, allowing alternative encodings for
    /// some types as well as indefinite length values. When encoding, SET
    /// elements are kept in their stored order.
    Ber,
    /// Distinguished Encoding Rules.
    ///
    /// These rules always employ definite length values and require the
    /// shortest possible encoding. SET elements are sorted by their encoding.
    Der,
}

impl Mode {
    /// Is this mode restricted to the canonical subset (DER)?
    #[inline]
    pub const fn is_restricted(self) -> bool {
        matches!(self, Mode::Der)
    }

    /// Does this mode allow indefinite length constructed values?
    #[inline]
    pub const fn allow_indefinite(self) -> bool {
        !self.is_restricted()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Ber => "BER",
            Mode::Der => "DER",
        };
        f.write_str(s)
    }
}
