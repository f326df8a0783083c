// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # SatController Core
//!
//! Hardware-independent logic for the SatController two-axis (azimuth/elevation) antenna
//! rotator. Everything in here talks to the board through `embedded-hal` / `embedded-io` traits
//! or small collaborator traits, so it builds for the STM32 target and runs its tests on the host.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`calibration`] | Calibration bounds and the axis/bound identities |
//! | [`storage`] | Persisted calibration layout on a non-volatile byte store |
//! | [`sensor`] | Raw potentiometer samples to degrees |
//! | [`control`] | Per-axis bang-bang drive and the tick-driven control loop |
//! | [`protocol`] | Line-oriented GS-232 style command protocol |
//! | [`compass`] | Azimuth to 16-point compass label |
//! | [`status`] | Status readout values handed to the display |
//! | [`display`] | Status layout on a 16x2 character LCD |
//! | [`config`] | Timing and protocol constants |
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p satcontroller_core
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod calibration;
pub mod compass;
pub mod config;
pub mod control;
pub mod display;
pub mod protocol;
pub mod sensor;
pub mod status;
pub mod storage;

#[cfg(test)]
mod testing;

pub use calibration::{Axis, Bound, CalibrationBounds};
pub use config::Config;
pub use control::{Drive, PositionState, Rotator};
pub use protocol::{Command, LineBuffer, Response};
