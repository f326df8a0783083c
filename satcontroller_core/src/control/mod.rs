// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Rotator Control
//!
//! Strictly on/off positioning: every tick each axis is driven toward its target at full speed or
//! held, with no ramping or memory between ticks.
//!
//! ## Modules
//!
//! - [`axis`] - Three-way drive decision and the direction outputs of one axis.
//! - [`rotator`] - Tick-driven control loop tying sensing, driving and the command protocol.

pub mod axis;
pub mod rotator;

pub use axis::{AxisController, DirectionPins, Drive, MotorBridge};
pub use rotator::{PositionState, Rotator};

/// Liveness supervisor acknowledged once per completed tick.
pub trait Supervisor {
    fn tick_complete(&mut self);
}

impl<T: Supervisor + ?Sized> Supervisor for &mut T {
    #[inline]
    fn tick_complete(&mut self) {
        T::tick_complete(self)
    }
}
