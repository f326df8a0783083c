// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Controller timing and protocol constants.

/// Serial line rate expected by rotator-control software.
pub const BAUD_RATE: u32 = 9600;

/// Longest command line kept; anything past this is dropped until the terminator.
pub const LINE_CAPACITY: usize = 100;

/// Tunables for the control loop.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Fixed wait at the end of every tick.
    pub tick_ms: u32,
    /// Wait between the discarded and the authoritative ADC sample.
    pub settle_ms: u32,
    /// Include raw ADC samples in the status readout.
    pub raw_readout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 500,
            settle_ms: 5,
            raw_readout: false,
        }
    }
}

impl Config {
    pub fn with_raw_readout(mut self, enabled: bool) -> Self {
        self.raw_readout = enabled;
        self
    }
}
