//! DIP switch group addresses for Type A outlets.
//!
//! Type A outlets carry a row of 10 DIP switches: the first five select the
//! switch group, the last five the outlet (A..E). [`SwitchGroupAddress`] models the
//! first five, bit `i` standing for DIP switch `i + 1`.
//!
//! Two validation rules apply, one per input shape:
//!
//! - bit masks and bool slices are accepted if they have **at most** 5 significant
//!   bits (trailing clear positions are ignored);
//! - pattern strings such as `"01011"` must be **exactly** 5 characters.

use core::fmt::{self, Write};
use core::str::FromStr;

use crate::consts::DIP_SWITCH_COUNT;
use crate::error::Error;

/// The position of the five group DIP switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct SwitchGroupAddress {
    bits: u8,
}

impl SwitchGroupAddress {
    const MASK: u32 = (1 << DIP_SWITCH_COUNT) - 1;

    /// Builds an address from a bit mask, bit 0 being DIP switch 1.
    ///
    /// Returns [`Error::InvalidAddress`] if any bit above bit 4 is set.
    pub fn from_bits(bits: u32) -> Result<Self, Error> {
        if bits & !Self::MASK != 0 {
            return Err(Error::InvalidAddress);
        }
        Ok(Self { bits: bits as u8 })
    }

    /// Parses a literal DIP pattern, `'1'` meaning the switch is on.
    ///
    /// # Example
    /// ```rust
    /// use rcswitch433::address::SwitchGroupAddress;
    ///
    /// // DIP switches 2, 4 and 5 are on
    /// let address = SwitchGroupAddress::from_pattern("01011").unwrap();
    /// assert!(!address.is_on(0));
    /// assert!(address.is_on(1));
    /// assert_eq!(address.bits(), 0b11010);
    /// ```
    ///
    /// # Errors
    /// - [`Error::InvalidAddress`] if the pattern is not exactly 5 characters
    /// - [`Error::InvalidPattern`] if it contains anything but `'0'` and `'1'`
    pub fn from_pattern(pattern: &str) -> Result<Self, Error> {
        if pattern.chars().count() != DIP_SWITCH_COUNT {
            return Err(Error::InvalidAddress);
        }
        let mut bits = 0u8;
        for (index, c) in pattern.chars().enumerate() {
            match c {
                '1' => bits |= 1 << index,
                '0' => {}
                _ => return Err(Error::InvalidPattern),
            }
        }
        Ok(Self { bits })
    }

    /// Whether DIP switch `index + 1` is on. Positions past the fifth are always off.
    pub fn is_on(&self, index: usize) -> bool {
        index < DIP_SWITCH_COUNT && self.bits & (1 << index) != 0
    }

    /// The raw bit mask, bit 0 being DIP switch 1.
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// The switch positions in DIP order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..DIP_SWITCH_COUNT).map(move |index| self.is_on(index))
    }
}

impl From<[bool; DIP_SWITCH_COUNT]> for SwitchGroupAddress {
    fn from(switches: [bool; DIP_SWITCH_COUNT]) -> Self {
        let bits = switches
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(0u8, |bits, (index, _)| bits | (1 << index));
        Self { bits }
    }
}

impl TryFrom<&[bool]> for SwitchGroupAddress {
    type Error = Error;

    fn try_from(switches: &[bool]) -> Result<Self, Self::Error> {
        let significant = switches.iter().rposition(|on| *on).map_or(0, |i| i + 1);
        if significant > DIP_SWITCH_COUNT {
            return Err(Error::InvalidAddress);
        }
        let mut padded = [false; DIP_SWITCH_COUNT];
        for (slot, on) in padded.iter_mut().zip(switches) {
            *slot = *on;
        }
        Ok(Self::from(padded))
    }
}

impl TryFrom<u32> for SwitchGroupAddress {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl FromStr for SwitchGroupAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pattern(s)
    }
}

impl fmt::Display for SwitchGroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for on in self.iter() {
            f.write_char(if on { '1' } else { '0' })?;
        }
        Ok(())
    }
}
