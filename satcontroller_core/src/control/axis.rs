// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bang-bang drive for a single rotator axis.
//!
//! Each axis has two direction outputs into the rotator's motor relays (CW/CCW for azimuth,
//! UP/DOWN for elevation). At most one is asserted at a time.

use embedded_hal::digital::OutputPin;

use crate::calibration::Axis;

/// Logical drive direction of an axis.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Drive {
    /// Toward increasing angle (CW / UP).
    Advance,
    /// Toward decreasing angle (CCW / DOWN).
    Retreat,
    /// Both outputs released.
    Hold,
}

impl Drive {
    /// Direction that moves `current` toward `target`.
    #[inline]
    pub fn toward(current: u16, target: u16) -> Self {
        use core::cmp::Ordering;

        match target.cmp(&current) {
            Ordering::Less => Drive::Retreat,
            Ordering::Greater => Drive::Advance,
            Ordering::Equal => Drive::Hold,
        }
    }
}

/// Something that can put an axis motor into a [`Drive`] state.
pub trait MotorBridge {
    fn set_drive(&mut self, drive: Drive);
}

/// Advance/retreat output pair.
pub struct DirectionPins<Adv, Ret> {
    advance: Adv,
    retreat: Ret,
}

impl<Adv: OutputPin, Ret: OutputPin> DirectionPins<Adv, Ret> {
    /// Wrap both outputs, releasing them.
    pub fn new(mut advance: Adv, mut retreat: Ret) -> Self {
        advance.set_low().ok();
        retreat.set_low().ok();
        Self { advance, retreat }
    }

    pub fn free(self) -> (Adv, Ret) {
        (self.advance, self.retreat)
    }
}

impl<Adv: OutputPin, Ret: OutputPin> MotorBridge for DirectionPins<Adv, Ret> {
    fn set_drive(&mut self, drive: Drive) {
        // Release the opposing output before asserting, so a reversal never overlaps.
        match drive {
            Drive::Advance => {
                self.retreat.set_low().ok();
                self.advance.set_high().ok();
            }
            Drive::Retreat => {
                self.advance.set_low().ok();
                self.retreat.set_high().ok();
            }
            Drive::Hold => {
                self.advance.set_low().ok();
                self.retreat.set_low().ok();
            }
        }
    }
}

/// Drive state for one axis, re-decided from scratch on every [`step`](Self::step).
pub struct AxisController<B> {
    axis: Axis,
    bridge: B,
    drive: Drive,
}

impl<B: MotorBridge> AxisController<B> {
    /// Take over `bridge`, starting in [`Drive::Hold`].
    pub fn new(axis: Axis, mut bridge: B) -> Self {
        bridge.set_drive(Drive::Hold);
        Self {
            axis,
            bridge,
            drive: Drive::Hold,
        }
    }

    /// Decide and apply the drive for this tick.
    pub fn step(&mut self, current: u16, target: u16) -> Drive {
        let drive = Drive::toward(current, target);
        if drive != self.drive {
            debug!("{} {} -> {}", self.axis, self.drive, drive);
        }
        self.apply(drive);
        drive
    }

    /// Release both outputs immediately.
    #[inline]
    pub fn hold(&mut self) {
        self.apply(Drive::Hold);
    }

    fn apply(&mut self, drive: Drive) {
        self.bridge.set_drive(drive);
        self.drive = drive;
    }

    /// Last applied drive.
    #[inline]
    pub fn drive(&self) -> Drive {
        self.drive
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn free(self) -> B {
        self.bridge
    }
}
