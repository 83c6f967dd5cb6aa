//! Pulse timing tables for the supported remote switch protocols.
//!
//! A [`Protocol`] describes how symbols become physical pulses: a base pulse
//! length in microseconds and three [`Waveform`]s (sync, zero and one), each a
//! pair of multipliers for the high and low phase. Some receivers expect the
//! carrier polarity flipped, which is captured by [`Protocol::inverted`].
//!
//! ## Registry
//!
//! | # | Pulse (µs) | Sync     | Zero    | One    | Inverted |
//! |---|------------|----------|---------|--------|----------|
//! | 1 |        350 | (1, 31)  | (1, 3)  | (3, 1) | no       |
//! | 2 |        650 | (1, 10)  | (1, 2)  | (2, 1) | no       |
//! | 3 |        100 | (30, 71) | (4, 11) | (9, 6) | no       |
//! | 4 |        380 | (1, 6)   | (1, 3)  | (3, 1) | no       |
//! | 5 |        500 | (6, 14)  | (1, 2)  | (2, 1) | no       |
//! | 6 |        450 | (23, 1)  | (1, 2)  | (2, 1) | yes      |
//! | 7 |        150 | (2, 62)  | (1, 6)  | (6, 1) | no       |
//!
//! Protocol 1 is the default and matches the common PT2262/EV1527 based outlets.
//! New hardware is supported by adding a row, not a type.

use core::num::NonZeroU32;

use crate::error::Error;

/// A high/low pair of pulse-length multipliers.
///
/// Emitting a waveform holds the line at the logical high level for
/// `pulse_length * high` µs, then at the logical low level for
/// `pulse_length * low` µs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct Waveform {
    /// Multiplier for the high phase.
    pub high: u32,
    /// Multiplier for the low phase.
    pub low: u32,
}

impl Waveform {
    /// Creates a waveform from its high and low multipliers.
    pub const fn new(high: u32, low: u32) -> Self {
        Self { high, low }
    }

    /// Total length of the waveform in pulse units.
    pub const fn units(&self) -> u32 {
        self.high.saturating_add(self.low)
    }
}

/// Immutable timing parameters of one hardware protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct Protocol {
    pulse_length: NonZeroU32,
    sync: Waveform,
    zero: Waveform,
    one: Waveform,
    inverted: bool,
}

const fn pulse_us(us: u32) -> NonZeroU32 {
    match NonZeroU32::new(us) {
        Some(us) => us,
        None => panic!("pulse length must be non-zero"),
    }
}

/// Protocol 1: 350 µs, the PT2262 timing used by most DIP and rotary outlets.
pub const PROTOCOL_1: Protocol = Protocol::new(
    pulse_us(350),
    Waveform::new(1, 31),
    Waveform::new(1, 3),
    Waveform::new(3, 1),
    false,
);

/// Protocol 2: 650 µs.
pub const PROTOCOL_2: Protocol = Protocol::new(
    pulse_us(650),
    Waveform::new(1, 10),
    Waveform::new(1, 2),
    Waveform::new(2, 1),
    false,
);

/// Protocol 3: 100 µs with a long sync.
pub const PROTOCOL_3: Protocol = Protocol::new(
    pulse_us(100),
    Waveform::new(30, 71),
    Waveform::new(4, 11),
    Waveform::new(9, 6),
    false,
);

/// Protocol 4: 380 µs.
pub const PROTOCOL_4: Protocol = Protocol::new(
    pulse_us(380),
    Waveform::new(1, 6),
    Waveform::new(1, 3),
    Waveform::new(3, 1),
    false,
);

/// Protocol 5: 500 µs.
pub const PROTOCOL_5: Protocol = Protocol::new(
    pulse_us(500),
    Waveform::new(6, 14),
    Waveform::new(1, 2),
    Waveform::new(2, 1),
    false,
);

/// Protocol 6: 450 µs, inverted signal (HT6P20B).
pub const PROTOCOL_6: Protocol = Protocol::new(
    pulse_us(450),
    Waveform::new(23, 1),
    Waveform::new(1, 2),
    Waveform::new(2, 1),
    true,
);

/// Protocol 7: 150 µs (HS2303-PT).
pub const PROTOCOL_7: Protocol = Protocol::new(
    pulse_us(150),
    Waveform::new(2, 62),
    Waveform::new(1, 6),
    Waveform::new(6, 1),
    false,
);

/// All known protocols, index `n - 1` holding protocol `n`.
pub static PROTOCOLS: [Protocol; 7] = [
    PROTOCOL_1, PROTOCOL_2, PROTOCOL_3, PROTOCOL_4, PROTOCOL_5, PROTOCOL_6, PROTOCOL_7,
];

impl Protocol {
    /// Creates a custom protocol.
    ///
    /// # Arguments
    /// - `pulse_length`: base pulse length in microseconds
    /// - `sync`: waveform closing every repetition
    /// - `zero`: waveform for a binary `0` (and half of a tri-state symbol)
    /// - `one`: waveform for a binary `1` (and half of a tri-state symbol)
    /// - `inverted`: whether the physical line is the complement of the logical level
    ///
    /// A single phase (`pulse_length * multiplier`) is capped at `u32::MAX` µs, both on
    /// air and in the estimates of [`crate::timing`].
    pub const fn new(
        pulse_length: NonZeroU32,
        sync: Waveform,
        zero: Waveform,
        one: Waveform,
        inverted: bool,
    ) -> Self {
        Self {
            pulse_length,
            sync,
            zero,
            one,
            inverted,
        }
    }

    /// Looks up a protocol in the registry by its number (`1..=7`).
    pub fn from_number(number: u8) -> Result<&'static Protocol, Error> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|index| PROTOCOLS.get(index))
            .ok_or(Error::UnknownProtocol(number))
    }

    /// Returns the registry number of this protocol, if it is one of the built-in tables.
    pub fn number(&self) -> Option<u8> {
        PROTOCOLS
            .iter()
            .position(|p| p == self)
            .and_then(|index| u8::try_from(index + 1).ok())
    }

    /// Returns a copy of this protocol with a different base pulse length.
    pub const fn with_pulse_length(self, pulse_length: NonZeroU32) -> Self {
        Self {
            pulse_length,
            ..self
        }
    }

    /// Base pulse length in microseconds.
    pub const fn pulse_length(&self) -> u32 {
        self.pulse_length.get()
    }

    /// Waveform closing each repetition.
    pub const fn sync(&self) -> Waveform {
        self.sync
    }

    /// Waveform for a logical zero.
    pub const fn zero(&self) -> Waveform {
        self.zero
    }

    /// Waveform for a logical one.
    pub const fn one(&self) -> Waveform {
        self.one
    }

    /// Whether the physical level is the complement of the logical level.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }
}

impl Default for Protocol {
    fn default() -> Self {
        PROTOCOL_1
    }
}
