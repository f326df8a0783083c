// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Calibration bounds for the two rotator axes.
//!
//! Each axis has a potentiometer whose raw ADC reading is pinned to 0° at `min` and to the axis
//! full scale at `max`. Bounds are captured from the live sensor by the calibrate commands and
//! persisted by [`crate::storage::CalibrationStore`].

/// Rotator axis identity.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    Azimuth,
    Elevation,
}

impl Axis {
    /// Full-scale angle in degrees.
    ///
    /// Azimuth runs past 360° so the rotator can overlap for ambiguity resolution.
    #[inline]
    pub const fn full_scale(self) -> u16 {
        match self {
            Axis::Azimuth => 450,
            Axis::Elevation => 180,
        }
    }
}

/// Which end of an axis' travel a calibration value describes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Bound {
    Min,
    Max,
}

/// Raw-sample bounds for a single axis.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AxisBounds {
    pub min: u16,
    pub max: u16,
}

/// Calibration for both axes.
///
/// `min < max` is expected for a usable calibration but is not enforced; the angle mapping
/// tolerates equal or inverted bounds.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CalibrationBounds {
    pub azimuth: AxisBounds,
    pub elevation: AxisBounds,
}

impl CalibrationBounds {
    pub const fn new(
        azimuth_min: u16,
        azimuth_max: u16,
        elevation_min: u16,
        elevation_max: u16,
    ) -> Self {
        Self {
            azimuth: AxisBounds {
                min: azimuth_min,
                max: azimuth_max,
            },
            elevation: AxisBounds {
                min: elevation_min,
                max: elevation_max,
            },
        }
    }

    #[inline]
    pub fn axis(&self, axis: Axis) -> AxisBounds {
        match axis {
            Axis::Azimuth => self.azimuth,
            Axis::Elevation => self.elevation,
        }
    }

    #[inline]
    pub fn get(&self, axis: Axis, bound: Bound) -> u16 {
        let bounds = self.axis(axis);
        match bound {
            Bound::Min => bounds.min,
            Bound::Max => bounds.max,
        }
    }

    pub fn set(&mut self, axis: Axis, bound: Bound, value: u16) {
        let bounds = match axis {
            Axis::Azimuth => &mut self.azimuth,
            Axis::Elevation => &mut self.elevation,
        };
        match bound {
            Bound::Min => bounds.min = value,
            Bound::Max => bounds.max = value,
        }
    }
}
