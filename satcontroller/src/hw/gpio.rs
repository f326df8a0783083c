// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `embedded-hal` 1.0 view of the HAL's push-pull outputs.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_02::digital::v2::OutputPin as HalOutputPin;

/// Push-pull output usable wherever the core expects an [`OutputPin`].
pub struct Output<P>(P);

impl<P: HalOutputPin<Error = Infallible>> Output<P> {
    pub fn new(pin: P) -> Self {
        Self(pin)
    }

    pub fn free(self) -> P {
        self.0
    }
}

impl<P> ErrorType for Output<P> {
    type Error = Infallible;
}

impl<P: HalOutputPin<Error = Infallible>> OutputPin for Output<P> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set_low()
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set_high()
    }
}
