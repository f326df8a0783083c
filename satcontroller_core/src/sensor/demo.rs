// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated rotator for demo builds.
//!
//! Angles move one degree per tick in whatever direction the axis is being driven, so the whole
//! protocol and display path can be exercised on a bare board. Calibration bounds are ignored.

use embedded_hal::delay::DelayNs;

use super::PositionSensor;
use crate::calibration::{Axis, CalibrationBounds};
use crate::control::Drive;

/// Full-scale raw reading reported by [`DemoSensor::sample`].
const RAW_FULL_SCALE: u32 = 4095;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DemoSensor {
    azimuth: u16,
    elevation: u16,
}

impl Default for DemoSensor {
    fn default() -> Self {
        Self::new(180, 90)
    }
}

impl DemoSensor {
    pub fn new(azimuth: u16, elevation: u16) -> Self {
        Self {
            azimuth: azimuth.min(Axis::Azimuth.full_scale()),
            elevation: elevation.min(Axis::Elevation.full_scale()),
        }
    }

    #[inline]
    pub fn angle(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Azimuth => self.azimuth,
            Axis::Elevation => self.elevation,
        }
    }
}

impl PositionSensor for DemoSensor {
    /// Synthetic raw reading proportional to the simulated angle.
    fn sample<D: DelayNs>(&mut self, axis: Axis, _delay: &mut D) -> u16 {
        let angle = u32::from(self.angle(axis));
        (angle * RAW_FULL_SCALE / u32::from(axis.full_scale())) as u16
    }

    fn read_angle<D: DelayNs>(
        &mut self,
        axis: Axis,
        _bounds: &CalibrationBounds,
        _delay: &mut D,
    ) -> u16 {
        self.angle(axis)
    }

    fn follow(&mut self, axis: Axis, drive: Drive) {
        let angle = match axis {
            Axis::Azimuth => &mut self.azimuth,
            Axis::Elevation => &mut self.elevation,
        };
        match drive {
            Drive::Advance => *angle = (*angle + 1).min(axis.full_scale()),
            Drive::Retreat => *angle = angle.saturating_sub(1),
            Drive::Hold => {}
        }
    }

    /// Synthetic samples would overwrite the real calibration.
    fn persists_calibration(&self) -> bool {
        false
    }
}
