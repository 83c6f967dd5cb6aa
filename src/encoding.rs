//! Codeword encoders for the supported switch addressing schemes.
//!
//! Remote outlets do not understand addresses directly; they compare the
//! received tri-state codeword against the positions of their own switches.
//! This module turns application-level addressing into that codeword.
//!
//! ## Functions
//!
//! - [`codeword_type_a`]: 10 pole DIP switches (5 group switches, outlet A..E)
//! - [`codeword_type_b`]: two rotary/sliding switches (group 1..4, channel 1..4)
//! - [`code_bits`]: the low bits of an integer code, MSB first, for binary protocols
//!
//! ## Validation
//!
//! The two schemes reject bad input differently and this is deliberate:
//! Type A reports an [`Error`], Type B returns an empty codeword which the
//! transmitter treats as a no-op. Neither touches the pin.
//!
//! See [`crate::consts`] for the codeword layouts.

use crate::address::SwitchGroupAddress;
use crate::codeword::{Codeword, TriState};
use crate::consts::{
    DIP_CHANNEL_CODES, DIP_CHANNEL_MAX, DIP_STATUS_OFF, DIP_STATUS_ON, MAX_CODE_BITS,
    ROTARY_CODE_MAX, ROTARY_CODES, ROTARY_UNUSED,
};
use crate::error::Error;

/// Encodes a Type A (DIP switch) command into its 12 symbol codeword.
///
/// # Arguments
/// - `address`: the group DIP switches, either a [`SwitchGroupAddress`] or anything that
///   converts into one (a `[bool; 5]`, a `&[bool]`, a `u32` bit mask)
/// - `channel`: the outlet, 1 (A) to 5 (E)
/// - `status`: `true` to switch on
///
/// # Errors
/// - [`Error::InvalidAddress`] if the address has more than 5 significant bits
/// - [`Error::InvalidChannel`] if `channel` is outside `1..=5`
///
/// # Example
/// ```rust
/// use rcswitch433::address::SwitchGroupAddress;
/// use rcswitch433::encoding::codeword_type_a;
///
/// let address = SwitchGroupAddress::from_pattern("11111").unwrap();
/// let codeword = codeword_type_a(address, 2, true).unwrap();
/// assert_eq!(codeword.to_string(), "00000F0FFF0F");
/// ```
pub fn codeword_type_a<A>(address: A, channel: u8, status: bool) -> Result<Codeword, Error>
where
    A: TryInto<SwitchGroupAddress>,
    Error: From<A::Error>,
{
    let address = address.try_into()?;
    if !(1..=DIP_CHANNEL_MAX).contains(&channel) {
        return Err(Error::InvalidChannel(channel));
    }

    let mut codeword = Codeword::empty();
    for on in address.iter() {
        codeword.push(if on {
            TriState::Zero
        } else {
            TriState::Floating
        });
    }
    codeword.extend_from_slice(&DIP_CHANNEL_CODES[usize::from(channel)]);
    codeword.extend_from_slice(if status {
        &DIP_STATUS_ON
    } else {
        &DIP_STATUS_OFF
    });
    Ok(codeword)
}

/// Encodes a Type B (rotary switch) command.
///
/// The codeword is 13 bits on air: the 12 symbols returned here followed by the
/// sync bit the transmitter closes every repetition with.
///
/// Codes outside `1..=4` produce an empty codeword rather than an error.
///
/// # Arguments
/// - `address_code`: the group selector, 1 (I) to 4 (IV)
/// - `channel_code`: the outlet selector, 1 to 4
/// - `status`: `true` to switch on
pub fn codeword_type_b(address_code: u8, channel_code: u8, status: bool) -> Codeword {
    let valid = 1..=ROTARY_CODE_MAX;
    if !valid.contains(&address_code) || !valid.contains(&channel_code) {
        return Codeword::empty();
    }

    let mut codeword = Codeword::empty();
    codeword.extend_from_slice(&ROTARY_CODES[usize::from(address_code)]);
    codeword.extend_from_slice(&ROTARY_CODES[usize::from(channel_code)]);
    codeword.extend_from_slice(&ROTARY_UNUSED);
    codeword.push(if status {
        TriState::Floating
    } else {
        TriState::Zero
    });
    codeword
}

/// Returns the low `length` bits of `code`, most significant first.
///
/// # Errors
/// [`Error::InvalidCodeLength`] if `length` is 0 or more than 32.
pub fn code_bits(
    code: u32,
    length: u8,
) -> Result<impl Iterator<Item = bool> + Clone, Error> {
    if length == 0 || length > MAX_CODE_BITS {
        return Err(Error::InvalidCodeLength(length));
    }
    Ok((0..length).rev().map(move |bit| (code >> bit) & 1 == 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{TYPE_A_CODEWORD_LEN, TYPE_B_SYMBOL_COUNT};

    fn chars(codeword: &Codeword) -> Vec<char> {
        codeword.to_string().chars().collect()
    }

    #[test]
    fn test_type_a_known_codewords() {
        let address = SwitchGroupAddress::from_pattern("01011").unwrap();
        assert_eq!(
            codeword_type_a(address, 1, true).unwrap().to_string(),
            "F0F000FFFF0F"
        );
        assert_eq!(
            codeword_type_a(address, 5, false).unwrap().to_string(),
            "F0F00FFFF0F0"
        );
    }

    #[test]
    fn test_type_a_layout_for_every_address_and_channel() {
        for bits in 0..32u32 {
            let address = SwitchGroupAddress::from_bits(bits).unwrap();
            for channel in 1..=5u8 {
                for status in [true, false] {
                    let codeword = codeword_type_a(address, channel, status).unwrap();
                    assert_eq!(codeword.len(), TYPE_A_CODEWORD_LEN);
                    let c = chars(&codeword);

                    for (i, symbol) in c[..5].iter().enumerate() {
                        let expected = if bits & (1 << i) != 0 { '0' } else { 'F' };
                        assert_eq!(*symbol, expected);
                    }

                    let window = &c[5..10];
                    assert_eq!(window.iter().filter(|s| **s == '0').count(), 1);
                    assert_eq!(window[usize::from(channel - 1)], '0');

                    let tail: String = c[10..].iter().collect();
                    assert_eq!(tail, if status { "0F" } else { "F0" });
                }
            }
        }
    }

    #[test]
    fn test_type_a_invalid_channel() {
        let address = SwitchGroupAddress::default();
        assert_eq!(codeword_type_a(address, 0, true), Err(Error::InvalidChannel(0)));
        assert_eq!(codeword_type_a(address, 6, true), Err(Error::InvalidChannel(6)));
    }

    #[test]
    fn test_type_a_invalid_address() {
        assert_eq!(codeword_type_a(0b100000u32, 1, true), Err(Error::InvalidAddress));
        let six = [true, false, false, false, false, true];
        assert_eq!(codeword_type_a(&six[..], 1, true), Err(Error::InvalidAddress));
    }

    #[test]
    fn test_type_a_accepts_raw_switches() {
        let from_array = codeword_type_a([true, false, false, false, false], 3, true).unwrap();
        let from_mask = codeword_type_a(0b00001u32, 3, true).unwrap();
        assert_eq!(from_array, from_mask);
        assert_eq!(from_array.to_string(), "0FFFFFF0FF0F");
    }

    #[test]
    fn test_type_b_known_codewords() {
        assert_eq!(codeword_type_b(1, 1, true).to_string(), "0FFF0FFFFFFF");
        assert_eq!(codeword_type_b(1, 1, false).to_string(), "0FFF0FFFFFF0");
        assert_eq!(codeword_type_b(4, 2, true).to_string(), "FFF0F0FFFFFF");
    }

    #[test]
    fn test_type_b_layout_for_every_code() {
        for address_code in 1..=4u8 {
            for channel_code in 1..=4u8 {
                for status in [true, false] {
                    let codeword = codeword_type_b(address_code, channel_code, status);
                    assert_eq!(codeword.len(), TYPE_B_SYMBOL_COUNT);
                    let c = chars(&codeword);

                    for (field, code) in [(&c[0..4], address_code), (&c[4..8], channel_code)] {
                        assert_eq!(field.iter().filter(|s| **s == '0').count(), 1);
                        assert_eq!(field[usize::from(code - 1)], '0');
                    }
                    assert_eq!(&c[8..11], ['F', 'F', 'F']);
                    assert_eq!(c[11], if status { 'F' } else { '0' });
                }
            }
        }
    }

    #[test]
    fn test_type_b_out_of_range_is_empty() {
        assert!(codeword_type_b(0, 1, true).is_empty());
        assert!(codeword_type_b(1, 5, true).is_empty());
        assert!(codeword_type_b(5, 0, false).is_empty());
    }

    #[test]
    fn test_code_bits_msb_first() {
        let bits: Vec<bool> = code_bits(0b1011, 6).unwrap().collect();
        assert_eq!(bits, [false, false, true, false, true, true]);
        assert_eq!(code_bits(u32::MAX, 32).unwrap().count(), 32);
        assert!(code_bits(1, 0).is_err());
        assert_eq!(code_bits(1, 33).err(), Some(Error::InvalidCodeLength(33)));
    }
}
