// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ADC1 blocking single-channel reads using direct PAC register access.
//!
//! Example:
//! ```no_run
//! let adc = RefCell::new(Adc::adc1(dp.ADC1));
//! let mut read_azimuth = Adc::make_reader(&adc, AZIMUTH_CHANNEL);
//! let raw = read_azimuth();
//! ```

use core::cell::RefCell;

use stm32f7xx_hal::pac;

/// Azimuth potentiometer on PA3 (ADC1_IN3).
pub const AZIMUTH_CHANNEL: u8 = 3;

/// Elevation potentiometer on PC0 (ADC1_IN10).
pub const ELEVATION_CHANNEL: u8 = 10;

/// Longest sample time (480 cycles) for high-impedance potentiometer wipers.
const SAMPLE_TIME: u32 = 0b111;

pub struct Adc {
    adc: pac::ADC1,
}

impl Adc {
    /// Create and initialize ADC1: 12-bit, right-aligned, software trigger.
    pub fn adc1(adc1: pac::ADC1) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        let common = unsafe { &*pac::ADC_COMMON::ptr() };
        // PCLK2 / 4
        common.ccr.modify(|_, w| w.adcpre().div4());

        adc1.cr2.modify(|_, w| w.adon().clear_bit());
        adc1.cr1.modify(|_, w| w.res().bits(0b00));
        adc1.cr2.modify(|_, w| {
            w.cont().clear_bit();
            w.align().right();
            w.exten().disabled();
            w
        });
        adc1.cr2.modify(|_, w| w.adon().set_bit());

        Self { adc: adc1 }
    }

    /// Read a single channel (0..=18).
    pub fn read(&mut self, channel: u8) -> u16 {
        let adc = &self.adc;
        let channel = channel & 0x1F;

        // SMPR2 holds channels 0..=9, SMPR1 the rest, three bits each.
        if channel <= 9 {
            let shift = 3 * u32::from(channel);
            adc.smpr2
                .modify(|r, w| unsafe { w.bits(r.bits() | (SAMPLE_TIME << shift)) });
        } else {
            let shift = 3 * u32::from(channel - 10);
            adc.smpr1
                .modify(|r, w| unsafe { w.bits(r.bits() | (SAMPLE_TIME << shift)) });
        }

        // One conversion
        adc.sqr1.modify(|_, w| w.l().bits(0));
        adc.sqr3.modify(|_, w| unsafe { w.sq1().bits(channel) });

        adc.cr2.modify(|_, w| w.swstart().set_bit());
        while adc.sr.read().eoc().bit_is_clear() {}

        adc.dr.read().data().bits() as u16
    }

    /// Closure reading `channel` through a shared ADC, for use as a sensor reader.
    pub fn make_reader(adc: &RefCell<Self>, channel: u8) -> impl FnMut() -> u16 + '_ {
        move || adc.borrow_mut().read(channel)
    }

    #[inline]
    pub fn free(self) -> pac::ADC1 {
        self.adc
    }
}
