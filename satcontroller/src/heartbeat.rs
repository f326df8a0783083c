// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Liveness supervision for the control loop.

use embedded_hal::digital::OutputPin;
use satcontroller_core::control::Supervisor;

use crate::hw::{IndependentWatchdog, Led};

/// Watchdog timeout; several ticks may be missed before the board resets.
pub const WATCHDOG_TIMEOUT_MS: u32 = 2_000;

/// Feeds the watchdog and blinks the LED after every completed tick.
pub struct Heartbeat<P: OutputPin> {
    watchdog: IndependentWatchdog,
    led: Led<P>,
}

impl<P: OutputPin> Heartbeat<P> {
    pub fn new(watchdog: IndependentWatchdog, led: Led<P>) -> Self {
        Self { watchdog, led }
    }
}

impl<P: OutputPin> Supervisor for Heartbeat<P> {
    fn tick_complete(&mut self) {
        self.watchdog.feed();
        self.led.toggle();
    }
}
