// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line framing and command parsing.
//!
//! Bytes are collected until `\n` or `\r`, then the line is parsed and the buffer cleared. A line
//! longer than [`LINE_CAPACITY`] is truncated: the excess is dropped and whatever fit is still
//! parsed when the terminator arrives. Unknown opcodes and empty lines produce nothing.

use heapless::Vec;

use crate::calibration::{Axis, Bound};
use crate::config::LINE_CAPACITY;
use crate::protocol::messages::*;

/// Accumulates one command line at a time.
pub struct LineBuffer {
    line: Vec<u8, LINE_CAPACITY>,
    truncated: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            line: Vec::new(),
            truncated: false,
        }
    }

    /// Process a single incoming byte. Returns `Some(Command)` when a terminator completes a
    /// recognised line.
    pub fn push(&mut self, byte: u8) -> Option<Command> {
        if byte == b'\n' || byte == b'\r' {
            if self.truncated {
                warn!("line truncated to {} bytes", LINE_CAPACITY);
            }
            let command = parse_line(&self.line);
            if command.is_none() && !self.line.is_empty() {
                debug!("ignored line {=[u8]:a}", self.line.as_slice());
            }
            self.line.clear();
            self.truncated = false;
            return command;
        }

        if self.line.push(byte).is_err() {
            self.truncated = true;
        }
        None
    }

    /// Bytes buffered so far for the current line.
    #[inline]
    pub fn pending(&self) -> &[u8] {
        &self.line
    }
}

/// Parse one unterminated line.
pub fn parse_line(line: &[u8]) -> Option<Command> {
    let (&opcode, args) = line.split_first()?;
    let elevation_variant = args.first() == Some(&SUFFIX_ELEVATION);
    let calibrated_axis = if elevation_variant {
        Axis::Elevation
    } else {
        Axis::Azimuth
    };

    let command = match opcode {
        OP_REPORT_AZIMUTH if elevation_variant => Command::ReportPosition,
        OP_REPORT_AZIMUTH => Command::ReportAzimuth,
        OP_REPORT_ELEVATION => Command::ReportElevation,
        OP_MOVE_AZIMUTH => {
            let mut fields = fields(args);
            Command::Move {
                azimuth: fields.next().and_then(scan_u16),
                elevation: None,
            }
        }
        OP_MOVE => {
            let mut fields = fields(args);
            Command::Move {
                azimuth: fields.next().and_then(scan_u16),
                elevation: fields.next().and_then(scan_u16),
            }
        }
        OP_STOP => Command::Stop,
        OP_CALIBRATE_MIN => Command::Calibrate {
            axis: calibrated_axis,
            bound: Bound::Min,
        },
        OP_CALIBRATE_MAX => Command::Calibrate {
            axis: calibrated_axis,
            bound: Bound::Max,
        },
        _ => return None,
    };
    Some(command)
}

/// Whitespace-separated argument fields.
fn fields(args: &[u8]) -> impl Iterator<Item = &[u8]> {
    args.split(|b| b.is_ascii_whitespace())
        .filter(|field| !field.is_empty())
}

/// Tolerant unsigned scan: optional `+`, then at least one digit. Anything after the digits is
/// ignored. Values that don't fit a `u16` are rejected.
fn scan_u16(field: &[u8]) -> Option<u16> {
    let digits = field.strip_prefix(b"+").unwrap_or(field);
    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }

    digits[..len].iter().try_fold(0u16, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u16::from(d - b'0'))
    })
}
