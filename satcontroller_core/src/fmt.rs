// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Logging shims.
//!
//! Forward to `defmt` when the `defmt` feature is on, otherwise expand to nothing so host builds
//! don't need a global logger.

#![allow(unused_macros)]

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}

macro_rules! info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
    }};
}
