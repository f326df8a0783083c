// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Potentiometer position sensing.
//!
//! The wiper lines are high impedance, so the first conversion after switching channels is
//! unreliable. Every read takes a throwaway sample, waits for the line to settle, then keeps the
//! second.

use embedded_hal::delay::DelayNs;

use super::PositionSensor;
use crate::calibration::Axis;

/// Two ADC channels, one per axis.
///
/// `ReadAz` / `ReadEl` are closures returning the raw 12-bit reading (0..4095), typically built
/// with the firmware's `Adc::make_reader`.
pub struct AnalogSensor<ReadAz, ReadEl> {
    read_azimuth: ReadAz,
    read_elevation: ReadEl,
    settle_ms: u32,
}

impl<ReadAz, ReadEl> AnalogSensor<ReadAz, ReadEl>
where
    ReadAz: FnMut() -> u16,
    ReadEl: FnMut() -> u16,
{
    pub fn new(read_azimuth: ReadAz, read_elevation: ReadEl, settle_ms: u32) -> Self {
        Self {
            read_azimuth,
            read_elevation,
            settle_ms,
        }
    }

    #[inline]
    fn read_once(&mut self, axis: Axis) -> u16 {
        match axis {
            Axis::Azimuth => (self.read_azimuth)(),
            Axis::Elevation => (self.read_elevation)(),
        }
    }
}

impl<ReadAz, ReadEl> PositionSensor for AnalogSensor<ReadAz, ReadEl>
where
    ReadAz: FnMut() -> u16,
    ReadEl: FnMut() -> u16,
{
    fn sample<D: DelayNs>(&mut self, axis: Axis, delay: &mut D) -> u16 {
        let _ = self.read_once(axis);
        delay.delay_ms(self.settle_ms);
        self.read_once(axis)
    }
}
