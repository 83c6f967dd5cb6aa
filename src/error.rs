//! Error type shared by the encoders and the transmitter.
//!
//! Every error is raised synchronously, before the output pin is touched, so a
//! failed call never leaves a half-sent codeword on the air.

use core::convert::Infallible;

/// Errors reported by address parsing, codeword encoding and the send operations.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Error {
    /// DIP-style channel outside `1..=5` (outlet A..E).
    #[error("invalid channel {0}: expected 1 (outlet A) to 5 (outlet E)")]
    InvalidChannel(u8),

    /// Switch group address with more than 5 significant bits, or a
    /// pattern string that is not exactly 5 characters long.
    #[error("switch group address must fit in 5 DIP switches")]
    InvalidAddress,

    /// A literal pattern contained a character outside its alphabet
    /// (`0`/`1` for bits and addresses, `0`/`1`/`F` for tri-state codewords).
    #[error("pattern contains a character outside its alphabet")]
    InvalidPattern,

    /// Protocol number with no entry in the registry.
    #[error("unknown protocol {0}: expected 1 to 7")]
    UnknownProtocol(u8),

    /// Integer code length of zero or more than 32 bits.
    #[error("invalid code length {0}: expected 1 to 32 bits")]
    InvalidCodeLength(u8),
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_bad_value() {
        assert_eq!(
            Error::InvalidChannel(6).to_string(),
            "invalid channel 6: expected 1 (outlet A) to 5 (outlet E)"
        );
        assert_eq!(
            Error::UnknownProtocol(9).to_string(),
            "unknown protocol 9: expected 1 to 7"
        );
    }
}
