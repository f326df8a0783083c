// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the NUCLEO-F767ZI board.
//!
//! | Function | Pin | Header |
//! | -------- | --- | ------ |
//! | Rotator CCW | PF12 | D8 |
//! | Rotator CW | PF13 | D7 |
//! | Rotator UP | PF14 | D4 |
//! | Rotator DOWN | PF15 | D2 |
//! | Azimuth pot | PA3 | A0 |
//! | Elevation pot | PC0 | A1 |
//! | Serial | PD8 / PD9 | ST-LINK VCP |
//! | LCD RS / RW / EN | PE7 / PE8 / PE10 | CN10 |
//! | LCD D4..D7 | PE12 / PE14 / PE15 / PE13 | CN10 |

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, gpiod, gpioe, gpiof, Alternate, Analog, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```no_run
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE, dp.GPIOF);
/// ```
pub struct BoardPins {
    pub led: gpiob::PB0<Output<PushPull>>, // LD1 (green)
    pub usart3: Usart3Pins,
    pub rotator: RotatorPins,
    pub pots: PotPins,
    pub lcd: LcdPins,
}

pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Rotator control box direction inputs, active high.
pub struct RotatorPins {
    pub ccw: gpiof::PF12<Output<PushPull>>,
    pub cw: gpiof::PF13<Output<PushPull>>,
    pub up: gpiof::PF14<Output<PushPull>>,
    pub down: gpiof::PF15<Output<PushPull>>,
}

/// Position potentiometer wipers.
pub struct PotPins {
    pub azimuth: gpioa::PA3<Analog>,   // ADC1_IN3
    pub elevation: gpioc::PC0<Analog>, // ADC1_IN10
}

/// HD44780 in 4-bit mode.
pub struct LcdPins {
    pub rs: gpioe::PE7<Output<PushPull>>,
    pub rw: gpioe::PE8<Output<PushPull>>,
    pub en: gpioe::PE10<Output<PushPull>>,
    pub d4: gpioe::PE12<Output<PushPull>>,
    pub d5: gpioe::PE14<Output<PushPull>>,
    pub d6: gpioe::PE15<Output<PushPull>>,
    pub d7: gpioe::PE13<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(
        gpioa: pac::GPIOA,
        gpiob: pac::GPIOB,
        gpioc: pac::GPIOC,
        gpiod: pac::GPIOD,
        gpioe: pac::GPIOE,
        gpiof: pac::GPIOF,
    ) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();
        let gpiof = gpiof.split();

        Self {
            led: gpiob.pb0.into_push_pull_output(),

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            rotator: RotatorPins {
                ccw: gpiof.pf12.into_push_pull_output(),
                cw: gpiof.pf13.into_push_pull_output(),
                up: gpiof.pf14.into_push_pull_output(),
                down: gpiof.pf15.into_push_pull_output(),
            },

            pots: PotPins {
                azimuth: gpioa.pa3.into_analog(),
                elevation: gpioc.pc0.into_analog(),
            },

            lcd: LcdPins {
                rs: gpioe.pe7.into_push_pull_output(),
                rw: gpioe.pe8.into_push_pull_output(),
                en: gpioe.pe10.into_push_pull_output(),
                d4: gpioe.pe12.into_push_pull_output(),
                d5: gpioe.pe14.into_push_pull_output(),
                d6: gpioe.pe15.into_push_pull_output(),
                d7: gpioe.pe13.into_push_pull_output(),
            },
        }
    }
}
