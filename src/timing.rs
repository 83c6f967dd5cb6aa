//! Pulse timing calculations.
//!
//! Sends block the caller for their whole duration, so it is often useful to
//! know in advance how long a transmission will hold the pin. These helpers
//! compute that from a [`Protocol`] without touching any hardware:
//!
//! - [`phase_us`]: one high or low phase, the unit the transmitter waits on
//! - [`waveform_duration_us`]: one high/low waveform
//! - [`symbols_duration_us`]: one pass over a symbol sequence, sync excluded
//! - [`transmission_duration_us`]: a full send, repetitions and sync bits included
//!
//! For protocol 1 a Type A codeword takes 12 × 8 + 32 = 128 pulse units per
//! repetition, i.e. 44.8 ms, and the default 10 repetitions take 448 ms.

use crate::codeword::Symbol;
use crate::protocol::{Protocol, Waveform};

/// Length of one phase of `multiplier` pulses under `protocol`, in microseconds.
///
/// Phases longer than `u32::MAX` µs are capped there, which is also the longest
/// single wait the transmitter hands to its delay provider.
pub const fn phase_us(protocol: &Protocol, multiplier: u32) -> u32 {
    protocol.pulse_length().saturating_mul(multiplier)
}

/// Duration of one waveform under `protocol`, in microseconds.
pub const fn waveform_duration_us(protocol: &Protocol, waveform: Waveform) -> u64 {
    phase_us(protocol, waveform.high) as u64 + phase_us(protocol, waveform.low) as u64
}

/// Duration of one pass over `symbols`, sync bit excluded, in microseconds.
///
/// Saturates at `u64::MAX`.
pub fn symbols_duration_us<S, I>(protocol: &Protocol, symbols: I) -> u64
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut total: u64 = 0;
    for symbol in symbols {
        symbol.for_each_waveform(protocol, |waveform| {
            total = total.saturating_add(waveform_duration_us(protocol, waveform));
        });
    }
    total
}

/// Duration of a complete send of `symbols` repeated `repeats` times, in microseconds.
///
/// Every repetition is closed by one sync waveform. Saturates at `u64::MAX`.
pub fn transmission_duration_us<S, I>(protocol: &Protocol, symbols: I, repeats: u32) -> u64
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    symbols_duration_us(protocol, symbols)
        .saturating_add(waveform_duration_us(protocol, protocol.sync()))
        .saturating_mul(u64::from(repeats))
}
