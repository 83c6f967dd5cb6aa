//! Constants used across the encoders and the transmitter.
//!
//! This module defines the codeword layouts of the two supported addressing
//! schemes, the lookup tables that map a channel or address code to its
//! tri-state pattern, and the transmitter defaults.
//!
//! ## Codeword layouts
//!
//! **Type A** (10 pole DIP switches), 12 symbols:
//!
//! | 5 address symbols    | 5 channel symbols           | 2 status symbols |
//! |----------------------|-----------------------------|------------------|
//! | DIP on = `0`, off = `F` | A=`0FFFF` .. E=`FFFF0`   | on=`0F` off=`F0` |
//!
//! **Type B** (two rotary/sliding switches), 13 bits:
//!
//! | 4 group symbols      | 4 channel symbols    | 3 unused | 1 status       | 1 sync |
//! |----------------------|----------------------|----------|----------------|--------|
//! | 1=`0FFF` .. 4=`FFF0` | 1=`0FFF` .. 4=`FFF0` | `FFF`    | on=`F` off=`0` | `S`    |
//!
//! The sync bit is not part of the [`Codeword`](crate::codeword::Codeword); the
//! transmitter sends it after every repetition of any codeword.

use crate::codeword::TriState::{self, Floating, Zero};

/// Number of DIP switches forming a Type A switch group address.
pub const DIP_SWITCH_COUNT: usize = 5;

/// Length of a Type A (DIP) codeword.
pub const TYPE_A_CODEWORD_LEN: usize = 12;

/// Length of a Type B (rotary) codeword on air, including the closing sync bit.
pub const TYPE_B_CODEWORD_LEN: usize = 13;

/// Number of tri-state symbols in a Type B codeword. The last of the
/// [`TYPE_B_CODEWORD_LEN`] bits is the sync bit sent after every repetition.
pub const TYPE_B_SYMBOL_COUNT: usize = TYPE_B_CODEWORD_LEN - 1;

/// Capacity of a [`Codeword`](crate::codeword::Codeword).
pub const CODEWORD_MAX_LEN: usize = TYPE_A_CODEWORD_LEN;

/// Highest Type A channel (outlet E).
pub const DIP_CHANNEL_MAX: u8 = 5;

/// Highest Type B address or channel code.
pub const ROTARY_CODE_MAX: u8 = 4;

/// Number of times a codeword is repeated per send unless configured otherwise.
pub const DEFAULT_REPEAT_TRANSMIT: u32 = 10;

/// Longest integer code accepted by
/// [`Transmitter::send_code`](crate::transmitter::Transmitter::send_code).
pub const MAX_CODE_BITS: u8 = 32;

/// Type A channel patterns, indexed by channel. Index 0 is unused.
pub const DIP_CHANNEL_CODES: [[TriState; DIP_SWITCH_COUNT]; 6] = [
    [Floating, Floating, Floating, Floating, Floating],
    [Zero, Floating, Floating, Floating, Floating],
    [Floating, Zero, Floating, Floating, Floating],
    [Floating, Floating, Zero, Floating, Floating],
    [Floating, Floating, Floating, Zero, Floating],
    [Floating, Floating, Floating, Floating, Zero],
];

/// Type A status symbols for "on".
pub const DIP_STATUS_ON: [TriState; 2] = [Zero, Floating];

/// Type A status symbols for "off".
pub const DIP_STATUS_OFF: [TriState; 2] = [Floating, Zero];

/// Type B address/channel patterns, indexed by code. Index 0 is unused.
pub const ROTARY_CODES: [[TriState; 4]; 5] = [
    [Floating, Floating, Floating, Floating],
    [Zero, Floating, Floating, Floating],
    [Floating, Zero, Floating, Floating],
    [Floating, Floating, Zero, Floating],
    [Floating, Floating, Floating, Zero],
];

/// The three unused Type B address symbols.
pub const ROTARY_UNUSED: [TriState; 3] = [Floating, Floating, Floating];
