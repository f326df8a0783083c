// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # MCU-Level Wrappers
//!
//! Thin layers over `stm32f7xx-hal` and raw PAC registers that expose the board through the
//! `embedded-hal` 1.0 / `embedded-io` traits the controller core is written against.

pub mod adc;
pub mod bkpsram;
pub mod delay;
pub mod gpio;
pub mod iwdg;
pub mod led;
pub mod pins;
pub mod usart;

pub use adc::Adc;
pub use bkpsram::BackupSram;
pub use delay::CycleDelay;
pub use gpio::Output;
pub use iwdg::IndependentWatchdog;
pub use led::Led;
pub use pins::BoardPins;
pub use usart::Usart;
