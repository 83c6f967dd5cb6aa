//! A transmitter shared through a `critical_section` mutex.
//!
//! Firmware often needs to switch outlets from more than one context, e.g. the
//! main loop and a button interrupt. Place the [`Transmitter`] in a static
//! [`GlobalTransmitter`] and reach it through [`with_global_transmitter`]; the
//! critical section keeps two sends from ever interleaving on the pin.
//!
//! A send blocks for hundreds of milliseconds and interrupts stay masked for the
//! whole of it. Avoid sending from latency sensitive handlers.

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::fmt::debug;
use crate::transmitter::Transmitter;

/// Storage for a transmitter shared between execution contexts.
pub type GlobalTransmitter<P, D> = Mutex<RefCell<Option<Transmitter<P, D>>>>;

/// Used to initialize the global static [`GlobalTransmitter`].
///
/// # Example
/// ```rust
/// use rcswitch433::global::{GlobalTransmitter, global_transmitter_init};
/// # use core::convert::Infallible;
/// # struct DataPin;
/// # impl embedded_hal::digital::ErrorType for DataPin { type Error = Infallible; }
/// # impl embedded_hal::digital::OutputPin for DataPin {
/// #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
/// # }
/// # struct Delay;
/// # impl embedded_hal::delay::DelayNs for Delay { fn delay_ns(&mut self, _ns: u32) {} }
///
/// static TRANSMITTER: GlobalTransmitter<DataPin, Delay> = global_transmitter_init();
/// ```
pub const fn global_transmitter_init<P, D>() -> GlobalTransmitter<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    Mutex::new(RefCell::new(None))
}

/// Installs `transmitter` into `global`.
///
/// # Returns
/// The transmitter previously installed, if any.
pub fn global_transmitter_setup<P, D>(
    global: &GlobalTransmitter<P, D>,
    transmitter: Transmitter<P, D>,
) -> Option<Transmitter<P, D>>
where
    P: OutputPin,
    D: DelayNs,
{
    critical_section::with(|cs| {
        let previous = global.borrow(cs).replace(Some(transmitter));
        debug!("global transmitter installed, replaced {}", previous.is_some());
        previous
    })
}

/// Runs `f` on the installed transmitter inside a critical section.
///
/// # Returns
/// `None` if no transmitter is installed, otherwise what `f` returned.
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn EXTI0() {
///     let _ = with_global_transmitter(&TRANSMITTER, |tx| tx.switch_on_rotary(1, 1));
/// }
/// ```
pub fn with_global_transmitter<P, D, R, F>(global: &GlobalTransmitter<P, D>, f: F) -> Option<R>
where
    P: OutputPin,
    D: DelayNs,
    F: FnOnce(&mut Transmitter<P, D>) -> R,
{
    critical_section::with(|cs| global.borrow(cs).borrow_mut().as_mut().map(f))
}

/// Removes and returns the installed transmitter, leaving `global` empty.
pub fn global_transmitter_take<P, D>(global: &GlobalTransmitter<P, D>) -> Option<Transmitter<P, D>>
where
    P: OutputPin,
    D: DelayNs,
{
    critical_section::with(|cs| global.borrow(cs).take())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[derive(Debug)]
    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_empty_global_runs_nothing() {
        static GLOBAL: GlobalTransmitter<PinMock, NoDelay> = global_transmitter_init();
        assert_eq!(with_global_transmitter(&GLOBAL, |tx| tx.tx_good), None);
        assert!(global_transmitter_take(&GLOBAL).is_none());
    }

    #[test]
    fn test_send_through_global() {
        static GLOBAL: GlobalTransmitter<PinMock, NoDelay> = global_transmitter_init();
        let pin = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            // zero
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            // sync
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            // idle
            PinTransaction::set(PinState::Low),
        ]);
        let transmitter = Transmitter::new(Some(pin), NoDelay, None);
        assert!(global_transmitter_setup(&GLOBAL, transmitter).is_none());

        let sent = with_global_transmitter(&GLOBAL, |tx| {
            tx.set_repeat_transmit(1);
            tx.send(&[false]);
            tx.tx_good
        });
        assert_eq!(sent, Some(1));

        let (pin, _) = global_transmitter_take(&GLOBAL).unwrap().release();
        pin.unwrap().done();
        assert!(with_global_transmitter(&GLOBAL, |tx| tx.tx_good).is_none());
    }

    #[test]
    fn test_setup_returns_previous() {
        static GLOBAL: GlobalTransmitter<PinMock, NoDelay> = global_transmitter_init();
        let first = Transmitter::new(
            Some(PinMock::new(&[PinTransaction::set(PinState::Low)])),
            NoDelay,
            None,
        );
        let second = Transmitter::new(
            Some(PinMock::new(&[PinTransaction::set(PinState::Low)])),
            NoDelay,
            None,
        );
        assert!(global_transmitter_setup(&GLOBAL, first).is_none());

        let mut previous = global_transmitter_setup(&GLOBAL, second).unwrap();
        previous.set_repeat_transmit(3);
        let (pin, _) = previous.release();
        pin.unwrap().done();

        let repeats = with_global_transmitter(&GLOBAL, |tx| tx.repeat_transmit());
        assert_eq!(repeats, Some(10));
        let (pin, _) = global_transmitter_take(&GLOBAL).unwrap().release();
        pin.unwrap().done();
    }
}
