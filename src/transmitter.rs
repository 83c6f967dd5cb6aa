//! Blocking OOK transmitter for 433 MHz remote controlled outlets.
//!
//! This module provides the [`Transmitter`] struct, which renders codewords into
//! timed pulses on a single digital output pin connected to the DATA input of a
//! cheap 433 MHz transmitter module (FS1000A and similar).
//!
//! Unlike a modem driven from a timer interrupt, a send here runs to completion
//! inside the call: the pin is toggled and the thread waits on
//! [`DelayNs::delay_us`] between edges. A Type A codeword with the default
//! 10 repetitions of protocol 1 blocks for roughly 450 ms.
//!
//! ## Features
//!
//! - Type A (DIP) and Type B (rotary) addressing through [`crate::encoding`]
//! - Raw tri-state codewords and binary codes
//! - Any [`Protocol`] of the registry, or a custom one, swappable between sends
//! - Uses `embedded-hal` for pin and delay abstraction
//!
//! ## Example
//!
//! ```rust
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{ErrorType, OutputPin};
//! use rcswitch433::address::SwitchGroupAddress;
//! use rcswitch433::protocol::PROTOCOL_1;
//! use rcswitch433::transmitter::Transmitter;
//!
//! # struct DataPin;
//! # impl ErrorType for DataPin { type Error = Infallible; }
//! # impl OutputPin for DataPin {
//! #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # struct Delay;
//! # impl DelayNs for Delay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (pin, delay) = (DataPin, Delay);
//! // our switching group address is 01011 (DIP switches 1 to 5 on the outlet)
//! let address = SwitchGroupAddress::from_pattern("01011").unwrap();
//!
//! let mut transmitter = Transmitter::new(Some(pin), delay, Some(PROTOCOL_1));
//! transmitter.switch_on(address, 1).unwrap(); // outlet A on
//! transmitter.switch_off(address, 1).unwrap(); // outlet A off
//! assert_eq!(transmitter.tx_good, 2);
//! ```
//!
//! ## Notes
//!
//! - One `Transmitter` owns one pin. Sends take `&mut self`, so a send can never
//!   overlap another send or a protocol change on the same transmitter.
//! - Share a transmitter with interrupt handlers through [`crate::global`]
//!   (feature `global`) rather than by creating a second one on the same pin.

use core::num::NonZeroU32;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::address::SwitchGroupAddress;
use crate::codeword::{Codeword, Symbol, TriState};
use crate::consts::DEFAULT_REPEAT_TRANSMIT;
use crate::encoding::{code_bits, codeword_type_a, codeword_type_b};
use crate::error::Error;
use crate::fmt::{debug, info, trace, warn};
use crate::protocol::{Protocol, Waveform};
use crate::timing::{phase_us, transmission_duration_us};

/// A blocking transmitter for remote controlled outlets.
///
/// ## Type Parameters
///
/// - `P`: the [`OutputPin`] wired to the RF module's DATA input
/// - `D`: a [`DelayNs`] provider with microsecond accuracy, busy-waiting preferred
///
/// ## Transmission
///
/// Every send walks its symbol sequence `repeat_transmit` times. Each symbol is
/// rendered to one or two [`Waveform`]s of the active [`Protocol`], each waveform
/// to a high phase and a low phase, and each repetition is closed by the sync
/// waveform. The pin is driven low once the last repetition is done.
///
/// When the protocol is [inverted](Protocol::inverted), every phase is driven at
/// the complement of its nominal level. The final idle level is low regardless.
///
/// Without a pin every send is a silent no-op, which keeps encoder-level code
/// testable on a host without hardware.
#[derive(Debug)]
pub struct Transmitter<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    pin: Option<P>,
    delay: D,
    protocol: Protocol,
    repeat_transmit: u32,

    /// Counter of completed sends that put at least one frame on air.
    pub tx_good: u32,

    /// Counter of pin writes that reported an error.
    ///
    /// A failing write never aborts a send; the remaining pulses are still emitted
    /// so the timing of the frame is preserved.
    pub pin_faults: u32,
}

impl<P, D> Transmitter<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Creates a new `Transmitter`.
    ///
    /// # Arguments
    /// - `pin`: the output pin driving the RF module, or `None` to disable transmission
    /// - `delay`: the microsecond delay provider used between edges
    /// - `protocol`: the pulse timing to use, protocol 1 if `None`
    ///
    /// # Notes
    /// The pin is driven `LOW` initially (carrier off).
    pub fn new(pin: Option<P>, delay: D, protocol: Option<Protocol>) -> Self {
        let protocol = protocol.unwrap_or_default();
        let mut transmitter = Self {
            pin,
            delay,
            protocol,
            repeat_transmit: DEFAULT_REPEAT_TRANSMIT,
            tx_good: 0,
            pin_faults: 0,
        };
        transmitter.idle();
        info!(
            "transmitter ready: pulse length {} us, pin attached {}",
            protocol.pulse_length(),
            transmitter.has_pin()
        );
        transmitter
    }

    /// Whether an output pin is attached.
    pub fn has_pin(&self) -> bool {
        self.pin.is_some()
    }

    /// The active protocol.
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Replaces the active protocol. Takes effect from the next send.
    pub fn set_protocol(&mut self, protocol: Protocol) {
        debug!(
            "protocol set: pulse length {} us, inverted {}",
            protocol.pulse_length(),
            protocol.inverted()
        );
        self.protocol = protocol;
    }

    /// Replaces the active protocol with registry entry `number` (`1..=7`).
    pub fn set_protocol_number(&mut self, number: u8) -> Result<(), Error> {
        let protocol = *Protocol::from_number(number)?;
        self.set_protocol(protocol);
        Ok(())
    }

    /// Overrides the base pulse length of the active protocol.
    ///
    /// Useful for outlets whose oscillator runs noticeably off the nominal timing.
    pub fn set_pulse_length(&mut self, pulse_length: NonZeroU32) {
        self.set_protocol(self.protocol.with_pulse_length(pulse_length));
    }

    /// Number of times each send repeats its codeword (10 by default).
    pub fn repeat_transmit(&self) -> u32 {
        self.repeat_transmit
    }

    /// Sets the number of repetitions per send.
    pub fn set_repeat_transmit(&mut self, repeat_transmit: u32) {
        self.repeat_transmit = repeat_transmit;
    }

    /// Consumes the transmitter and hands back the pin and the delay provider.
    pub fn release(self) -> (Option<P>, D) {
        (self.pin, self.delay)
    }

    /// Switches a Type A outlet (10 pole DIP switches) on.
    ///
    /// # Arguments
    /// - `address`: the group DIP switches 1..5, see [`SwitchGroupAddress`]
    /// - `channel`: the outlet, 1 (A) to 5 (E)
    ///
    /// # Errors
    /// [`Error::InvalidAddress`] or [`Error::InvalidChannel`], reported before the
    /// pin is touched.
    pub fn switch_on<A>(&mut self, address: A, channel: u8) -> Result<(), Error>
    where
        A: TryInto<SwitchGroupAddress>,
        Error: From<A::Error>,
    {
        let codeword = codeword_type_a(address, channel, true)?;
        self.send_codeword(&codeword);
        Ok(())
    }

    /// Switches a Type A outlet off. See [`switch_on`](Self::switch_on).
    pub fn switch_off<A>(&mut self, address: A, channel: u8) -> Result<(), Error>
    where
        A: TryInto<SwitchGroupAddress>,
        Error: From<A::Error>,
    {
        let codeword = codeword_type_a(address, channel, false)?;
        self.send_codeword(&codeword);
        Ok(())
    }

    /// Switches a Type B outlet (two rotary/sliding switches) on.
    ///
    /// Codes outside `1..=4` are ignored: nothing is sent and no error is reported.
    pub fn switch_on_rotary(&mut self, address_code: u8, channel_code: u8) {
        self.send_rotary(address_code, channel_code, true);
    }

    /// Switches a Type B outlet off. See [`switch_on_rotary`](Self::switch_on_rotary).
    pub fn switch_off_rotary(&mut self, address_code: u8, channel_code: u8) {
        self.send_rotary(address_code, channel_code, false);
    }

    fn send_rotary(&mut self, address_code: u8, channel_code: u8, status: bool) {
        let codeword = codeword_type_b(address_code, channel_code, status);
        if codeword.is_empty() {
            warn!(
                "ignoring rotary switch command for group {} channel {}",
                address_code,
                channel_code
            );
        }
        self.send_codeword(&codeword);
    }

    /// Sends an encoded codeword.
    ///
    /// An empty codeword sends nothing.
    pub fn send_codeword(&mut self, codeword: &Codeword) {
        self.send_symbols(codeword.symbols().iter().copied());
    }

    /// Sends a tri-state codeword given as a string over `0`, `1` and `F`,
    /// bypassing the encoders.
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] if any other character is present. The whole string
    /// is checked before the first pulse.
    pub fn send_tri_state(&mut self, codeword: &str) -> Result<(), Error> {
        for c in codeword.chars() {
            let _ = TriState::try_from(c)?;
        }
        self.send_symbols(codeword.chars().filter_map(|c| TriState::try_from(c).ok()));
        Ok(())
    }

    /// Sends a sequence of bits, one waveform per bit.
    pub fn send(&mut self, bits: &[bool]) {
        self.send_symbols(bits.iter().copied());
    }

    /// Sends a bit string such as `"000000000001010100010001"`.
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] if the string contains anything but `0` and `1`.
    pub fn send_bit_string(&mut self, bits: &str) -> Result<(), Error> {
        if bits.chars().any(|c| c != '0' && c != '1') {
            return Err(Error::InvalidPattern);
        }
        self.send_symbols(bits.chars().map(|c| c == '1'));
        Ok(())
    }

    /// Sends the low `length` bits of `code`, most significant bit first.
    ///
    /// # Errors
    /// [`Error::InvalidCodeLength`] if `length` is 0 or more than 32.
    pub fn send_code(&mut self, code: u32, length: u8) -> Result<(), Error> {
        let bits = code_bits(code, length)?;
        self.send_symbols(bits);
        Ok(())
    }

    /// How long [`send_codeword`](Self::send_codeword) would block for `codeword`
    /// with the current protocol and repeat count, in microseconds.
    pub fn transmission_time_us(&self, codeword: &Codeword) -> u64 {
        if codeword.is_empty() || !self.has_pin() {
            return 0;
        }
        transmission_duration_us(
            &self.protocol,
            codeword.symbols().iter().copied(),
            self.repeat_transmit,
        )
    }

    fn send_symbols<S, I>(&mut self, symbols: I)
    where
        S: Symbol,
        I: Iterator<Item = S> + Clone,
    {
        if self.pin.is_none() {
            debug!("no transmitter pin attached, skipping send");
            return;
        }
        if self.repeat_transmit == 0 || symbols.clone().next().is_none() {
            debug!("nothing to send");
            return;
        }

        let protocol = self.protocol;
        let faults = self.pin_faults;
        trace!(
            "sending: pulse length {} us, {} repetitions",
            protocol.pulse_length(),
            self.repeat_transmit
        );
        for _ in 0..self.repeat_transmit {
            for symbol in symbols.clone() {
                symbol.for_each_waveform(&protocol, |waveform| self.transmit(waveform));
            }
            self.transmit(protocol.sync());
        }
        self.idle();
        self.tx_good = self.tx_good.wrapping_add(1);

        if self.pin_faults != faults {
            warn!(
                "{} pin writes failed during send",
                self.pin_faults.wrapping_sub(faults)
            );
        }
    }

    fn transmit(&mut self, waveform: Waveform) {
        let high_us = phase_us(&self.protocol, waveform.high);
        let low_us = phase_us(&self.protocol, waveform.low);
        self.adjust_pin(true);
        self.delay.delay_us(high_us);
        self.adjust_pin(false);
        self.delay.delay_us(low_us);
    }

    fn adjust_pin(&mut self, nominal: bool) {
        let Some(pin) = self.pin.as_mut() else {
            return;
        };
        let result = if self.protocol.inverted() ^ nominal {
            pin.set_high()
        } else {
            pin.set_low()
        };
        if result.is_err() {
            self.pin_faults = self.pin_faults.saturating_add(1);
        }
    }

    fn idle(&mut self) {
        if let Some(pin) = self.pin.as_mut() {
            if pin.set_low().is_err() {
                self.pin_faults = self.pin_faults.saturating_add(1);
            }
        }
    }
}
