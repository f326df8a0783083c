// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Battery-backed SRAM (4 KiB at `0x4002_4000`) as the calibration store.
//!
//! Contents survive resets and, with VBAT fitted, power loss. The backup regulator is enabled so
//! the SRAM is retained in standby and VBAT modes as well.

use core::ptr;

use satcontroller_core::storage::NvStorage;
use stm32f7xx_hal::pac;

const BASE: usize = 0x4002_4000;
const SIZE: usize = 4 * 1024;

pub struct BackupSram {
    _pwr: pac::PWR,
}

impl BackupSram {
    /// Enable the backup domain, its regulator and the SRAM clock.
    pub fn new(pwr: pac::PWR) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };

        rcc.apb1enr.modify(|_, w| w.pwren().set_bit());
        pwr.cr1.modify(|_, w| w.dbp().set_bit());
        rcc.ahb1enr.modify(|_, w| w.bkpsramen().set_bit());

        pwr.csr1.modify(|_, w| w.bre().set_bit());
        while pwr.csr1.read().brr().bit_is_clear() {}

        Self { _pwr: pwr }
    }
}

impl NvStorage for BackupSram {
    fn read(&mut self, addr: usize) -> u8 {
        if addr >= SIZE {
            return 0;
        }
        unsafe { ptr::read_volatile((BASE + addr) as *const u8) }
    }

    fn write(&mut self, addr: usize, value: u8) {
        if addr >= SIZE {
            return;
        }
        unsafe { ptr::write_volatile((BASE + addr) as *mut u8, value) }
    }
}
