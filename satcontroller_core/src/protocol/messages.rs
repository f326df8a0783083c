// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Commands understood by the controller.
//!
//! | Line | Command |
//! | ---- | ------- |
//! | `C` | [`Command::ReportAzimuth`] |
//! | `C2` | [`Command::ReportPosition`] |
//! | `B` | [`Command::ReportElevation`] |
//! | `M<az>` | [`Command::Move`] (azimuth only) |
//! | `W<az> <el>` | [`Command::Move`] |
//! | `S` | [`Command::Stop`] |
//! | `O` / `O2` | [`Command::Calibrate`] azimuth / elevation minimum |
//! | `F` / `F2` | [`Command::Calibrate`] azimuth / elevation maximum |

use crate::calibration::{Axis, Bound};

// Opcodes
pub const OP_REPORT_AZIMUTH: u8 = b'C';
pub const OP_REPORT_ELEVATION: u8 = b'B';
pub const OP_MOVE_AZIMUTH: u8 = b'M';
pub const OP_MOVE: u8 = b'W';
pub const OP_STOP: u8 = b'S';
pub const OP_CALIBRATE_MIN: u8 = b'O';
pub const OP_CALIBRATE_MAX: u8 = b'F';

/// Second opcode character selecting the elevation / two-axis variant.
pub const SUFFIX_ELEVATION: u8 = b'2';

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    ReportAzimuth,
    ReportElevation,
    ReportPosition,
    /// New targets in degrees. `None` leaves that axis' target as it is.
    Move {
        azimuth: Option<u16>,
        elevation: Option<u16>,
    },
    Stop,
    /// Capture the current raw sample as a calibration bound.
    Calibrate { axis: Axis, bound: Bound },
}
