// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Position Sensing
//!
//! Each axis reports its position through a potentiometer on an ADC channel. Raw samples become
//! degrees by linear interpolation between the calibrated bounds.
//!
//! ## Modules
//!
//! - [`analog`] - Potentiometer readers with the double-sample settle.
//! - [`demo`] - Simulated rotator for running without hardware.

pub mod analog;
pub mod demo;

pub use analog::AnalogSensor;
pub use demo::DemoSensor;

use embedded_hal::delay::DelayNs;

use crate::calibration::{Axis, AxisBounds, CalibrationBounds};
use crate::control::Drive;

/// Source of axis positions for the control loop.
pub trait PositionSensor {
    /// Settled raw sample for `axis`.
    fn sample<D: DelayNs>(&mut self, axis: Axis, delay: &mut D) -> u16;

    /// Current angle of `axis` in degrees.
    fn read_angle<D: DelayNs>(
        &mut self,
        axis: Axis,
        bounds: &CalibrationBounds,
        delay: &mut D,
    ) -> u16 {
        let raw = self.sample(axis, delay);
        map_angle(axis, raw, bounds.axis(axis))
    }

    /// Told which way `axis` is being driven this tick. Real sensors ignore it.
    fn follow(&mut self, _axis: Axis, _drive: Drive) {}

    /// Whether calibration captured from this sensor belongs in non-volatile storage.
    fn persists_calibration(&self) -> bool {
        true
    }
}

/// Map a raw sample onto `0..=axis.full_scale()` degrees.
///
/// Equal bounds map everything to 0°. Otherwise bounds are checked in order: at or below `min` is
/// 0°, at or above `max` is full scale, and anything between is interpolated and rounded to the
/// nearest degree. Inverted bounds never reach the division.
pub fn map_angle(axis: Axis, reading: u16, bounds: AxisBounds) -> u16 {
    let full_scale = axis.full_scale();

    if bounds.max == bounds.min {
        return 0;
    }
    if reading <= bounds.min {
        return 0;
    }
    if reading >= bounds.max {
        return full_scale;
    }

    let span = u32::from(bounds.max - bounds.min);
    let offset = u32::from(reading - bounds.min);
    let scaled = (offset * u32::from(full_scale) * 2 + span) / (span * 2);
    scaled as u16
}
