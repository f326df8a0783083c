// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Independent watchdog clocked from the 32 kHz LSI.

use stm32f7xx_hal::pac;

const KEY_START: u32 = 0xCCCC;
const KEY_UNLOCK: u32 = 0x5555;
const KEY_FEED: u32 = 0xAAAA;

/// LSI / 64 = 500 Hz.
const PRESCALER_DIV64: u32 = 0b100;
const TICKS_PER_MS_DIV64: u32 = 2;
const MAX_RELOAD: u32 = 0x0FFF;

pub struct IndependentWatchdog {
    iwdg: pac::IWDG,
}

impl IndependentWatchdog {
    /// Start the watchdog with roughly `timeout_ms` (at most about 8 s). It can not be stopped.
    pub fn start(iwdg: pac::IWDG, timeout_ms: u32) -> Self {
        let reload = (timeout_ms * TICKS_PER_MS_DIV64).clamp(1, MAX_RELOAD);

        iwdg.kr.write(|w| unsafe { w.bits(KEY_START) });
        iwdg.kr.write(|w| unsafe { w.bits(KEY_UNLOCK) });
        iwdg.pr.write(|w| unsafe { w.bits(PRESCALER_DIV64) });
        iwdg.rlr.write(|w| unsafe { w.bits(reload) });
        // PVU / RVU
        while iwdg.sr.read().bits() & 0b11 != 0 {}

        let mut watchdog = Self { iwdg };
        watchdog.feed();
        watchdog
    }

    #[inline]
    pub fn feed(&mut self) {
        self.iwdg.kr.write(|w| unsafe { w.bits(KEY_FEED) });
    }
}
