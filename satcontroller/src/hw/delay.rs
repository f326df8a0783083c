// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Busy-wait delay counted in core cycles.
//!
//! `Copy`, so the control loop and the LCD driver can each hold one without sharing SysTick.

use embedded_hal::delay::DelayNs;

#[derive(Copy, Clone, Debug)]
pub struct CycleDelay {
    sysclk_hz: u32,
}

impl CycleDelay {
    pub fn new(sysclk_hz: u32) -> Self {
        Self { sysclk_hz }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = u64::from(ns) * u64::from(self.sysclk_hz) / 1_000_000_000;
        cortex_m::asm::delay((cycles as u32).max(1));
    }
}
