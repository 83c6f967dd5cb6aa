//! Symbols and codewords.
//!
//! Remote outlets built around PT2262-style encoders understand *tri-state*
//! symbols: `0`, `1` and `F` (floating). Each tri-state symbol is sent as two
//! waveforms of the active [`Protocol`]:
//!
//! | Symbol | Waveforms  |
//! |--------|------------|
//! | `0`    | zero, zero |
//! | `1`    | one, one   |
//! | `F`    | zero, one  |
//!
//! Plain binary codes (EV1527 and friends) use one waveform per bit instead.
//! Both kinds implement [`Symbol`], which is all the transmitter needs to know.

use core::fmt::{self, Write};

use heapless::Vec;

use crate::consts::CODEWORD_MAX_LEN;
use crate::error::Error;
use crate::protocol::{Protocol, Waveform};

/// Anything that renders to one or more waveforms of a [`Protocol`].
pub trait Symbol: Copy {
    /// Calls `emit` with each waveform of this symbol, in transmission order.
    fn for_each_waveform<F: FnMut(Waveform)>(self, protocol: &Protocol, emit: F);

    /// Length of this symbol in pulse units under `protocol`.
    fn units(self, protocol: &Protocol) -> u32 {
        let mut units: u32 = 0;
        self.for_each_waveform(protocol, |waveform| {
            units = units.saturating_add(waveform.units());
        });
        units
    }
}

/// A binary symbol: `true` sends the one waveform, `false` the zero waveform.
impl Symbol for bool {
    fn for_each_waveform<F: FnMut(Waveform)>(self, protocol: &Protocol, mut emit: F) {
        if self {
            emit(protocol.one());
        } else {
            emit(protocol.zero());
        }
    }
}

/// One tri-state code bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum TriState {
    /// `0`: pin tied low on the encoder chip.
    Zero,
    /// `1`: pin tied high on the encoder chip.
    One,
    /// `F`: pin left open.
    Floating,
}

impl TriState {
    /// The character used for this symbol in codeword strings.
    pub const fn as_char(self) -> char {
        match self {
            TriState::Zero => '0',
            TriState::One => '1',
            TriState::Floating => 'F',
        }
    }
}

impl TryFrom<char> for TriState {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(TriState::Zero),
            '1' => Ok(TriState::One),
            'F' => Ok(TriState::Floating),
            _ => Err(Error::InvalidPattern),
        }
    }
}

impl Symbol for TriState {
    fn for_each_waveform<F: FnMut(Waveform)>(self, protocol: &Protocol, mut emit: F) {
        match self {
            TriState::Zero => {
                emit(protocol.zero());
                emit(protocol.zero());
            }
            TriState::One => {
                emit(protocol.one());
                emit(protocol.one());
            }
            TriState::Floating => {
                emit(protocol.zero());
                emit(protocol.one());
            }
        }
    }
}

/// A tri-state codeword produced by the encoders in [`crate::encoding`].
///
/// Codewords hold at most [`CODEWORD_MAX_LEN`] symbols. An empty codeword is the
/// result of rejected rotary-switch input and transmits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct Codeword {
    symbols: Vec<TriState, CODEWORD_MAX_LEN>,
}

impl Codeword {
    /// Creates an empty codeword.
    pub const fn empty() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Appends symbols, silently dropping any beyond the codeword capacity.
    pub(crate) fn extend_from_slice(&mut self, symbols: &[TriState]) {
        for &symbol in symbols {
            let _ = self.symbols.push(symbol);
        }
    }

    /// Appends one symbol, silently dropping it if the codeword is full.
    pub(crate) fn push(&mut self, symbol: TriState) {
        let _ = self.symbols.push(symbol);
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the codeword holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in transmission order.
    pub fn symbols(&self) -> &[TriState] {
        &self.symbols
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            f.write_char(symbol.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{PROTOCOL_1, PROTOCOL_3};

    fn waveforms<S: Symbol>(symbol: S, protocol: &Protocol) -> std::vec::Vec<Waveform> {
        let mut out = std::vec::Vec::new();
        symbol.for_each_waveform(protocol, |w| out.push(w));
        out
    }

    #[test]
    fn test_tri_state_waveform_pairs() {
        let zero = PROTOCOL_1.zero();
        let one = PROTOCOL_1.one();
        assert_eq!(waveforms(TriState::Zero, &PROTOCOL_1), [zero, zero]);
        assert_eq!(waveforms(TriState::One, &PROTOCOL_1), [one, one]);
        assert_eq!(waveforms(TriState::Floating, &PROTOCOL_1), [zero, one]);
    }

    #[test]
    fn test_binary_symbol_is_single_waveform() {
        assert_eq!(waveforms(true, &PROTOCOL_3), [PROTOCOL_3.one()]);
        assert_eq!(waveforms(false, &PROTOCOL_3), [PROTOCOL_3.zero()]);
    }

    #[test]
    fn test_symbol_units() {
        assert_eq!(TriState::Floating.units(&PROTOCOL_1), 8);
        assert_eq!(false.units(&PROTOCOL_3), 15);
    }

    #[test]
    fn test_tri_state_chars() {
        for c in ['0', '1', 'F'] {
            assert_eq!(TriState::try_from(c).unwrap().as_char(), c);
        }
        assert_eq!(TriState::try_from('f'), Err(Error::InvalidPattern));
        assert_eq!(TriState::try_from('S'), Err(Error::InvalidPattern));
    }

    #[test]
    fn test_codeword_display_and_capacity() {
        let mut codeword = Codeword::empty();
        assert!(codeword.is_empty());
        codeword.extend_from_slice(&[TriState::Zero, TriState::Floating, TriState::One]);
        assert_eq!(codeword.to_string(), "0F1");
        for _ in 0..20 {
            codeword.push(TriState::Floating);
        }
        assert_eq!(codeword.len(), CODEWORD_MAX_LEN);
    }

    #[cfg(feature = "defmt-0-3")]
    #[test]
    fn test_value_types_are_defmt_format() {
        fn assert_format<T: defmt::Format>() {}
        assert_format::<Codeword>();
        assert_format::<TriState>();
    }
}
