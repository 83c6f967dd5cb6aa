//! # rcswitch433
//!
//! A portable, no_std Rust driver for 433 MHz remote controlled power outlets,
//! sending through cheap OOK transmitter modules like the FS1000A.
//!
//! The crate turns switch addresses into the tri-state codewords PT2262-style
//! outlets listen for and bit-bangs them onto a single output pin using:
//! - `embedded-hal` traits for the data pin and microsecond delays
//! - a table of pulse timings covering the common protocols
//! - optional interrupt-safe sharing with `critical-section`
//!
//! ## Crate features
//! | Feature     | Description |
//! |-------------|-------------|
//! | `std`       | Disables `#![no_std]` |
//! | `global`    | Enables [`global`], a transmitter shared through `critical_section::Mutex` |
//! | `defmt-0-3` | Uses `defmt` logging and derives `defmt::Format` |
//! | `log`       | Uses `log` logging |
//!
//! ## Supported outlets
//!
//! - **Type A**: 10 pole DIP switches, 5 for the group address and 5 for the outlet (A..E)
//! - **Type B**: two rotary or sliding switches, group I..IV and outlet 1..4
//! - Raw tri-state codewords and plain binary codes for anything else
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rcswitch433::protocol::PROTOCOL_1;
//! use rcswitch433::Transmitter;
//!
//! let mut transmitter = Transmitter::new(Some(data_pin), delay, Some(PROTOCOL_1));
//!
//! // DIP switches 1..5 set to 01011, outlet C on
//! transmitter.switch_on(SwitchGroupAddress::from_pattern("01011")?, 3)?;
//!
//! // rotary switches at group II, outlet 4, off
//! transmitter.switch_off_rotary(2, 4);
//!
//! // an EV1527 doorbell
//! transmitter.set_protocol_number(1)?;
//! transmitter.send_code(5393, 24)?;
//! ```
//!
//! ## Integration Notes
//!
//! - Sends are blocking: the default 10 repetitions of a Type A codeword take ~450 ms
//! - Timing precision matters; prefer a busy-wait `DelayNs` over a scheduler-based one
//! - Only one transmitter should drive a given pin; share it through [`global`] if needed

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "global")]
pub use critical_section;

mod fmt;

pub mod address;
pub mod codeword;
pub mod consts;
pub mod encoding;
pub mod error;
#[cfg(feature = "global")]
pub mod global;
pub mod protocol;
pub mod timing;
pub mod transmitter;

pub use address::SwitchGroupAddress;
pub use codeword::{Codeword, TriState};
pub use error::Error;
pub use protocol::{Protocol, Waveform};
pub use transmitter::Transmitter;
