//! Internal logging macros.
//!
//! Each macro forwards to `log` (feature `log`) and/or `defmt` (feature `defmt-0-3`).
//! With neither feature enabled the arguments are still borrowed so that values
//! which are only logged do not trip the crate's `unused` lints.
//!
//! Format strings must stay within the subset both backends accept: plain `{}`
//! placeholders over integers, booleans and `&str`.
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::trace!($s $(, $x)*);
            #[cfg(feature = "defmt-0-3")]
            ::defmt::trace!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt-0-3")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::debug!($s $(, $x)*);
            #[cfg(feature = "defmt-0-3")]
            ::defmt::debug!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt-0-3")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::info!($s $(, $x)*);
            #[cfg(feature = "defmt-0-3")]
            ::defmt::info!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt-0-3")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! warn_ {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::warn!($s $(, $x)*);
            #[cfg(feature = "defmt-0-3")]
            ::defmt::warn!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt-0-3")))]
                let _ = &$x;
            )*
        }
    };
}

pub(crate) use debug;
pub(crate) use info;
pub(crate) use trace;
pub(crate) use warn_ as warn;
