// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Response encoding.
//!
//! Position fields are always `+0` followed by exactly three zero-padded digits, so `45` goes out
//! as `+0045`. Values past 999 saturate. Report lines end in CR LF; move and stop are acknowledged
//! with a bare CR.

use heapless::Vec;

/// Longest encoded response: `+0AAA +0EEE\r\n`.
pub const MAX_RESPONSE_LEN: usize = 13;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Response {
    Azimuth(u16),
    Elevation(u16),
    Position { azimuth: u16, elevation: u16 },
    /// Terminator echo for commands with nothing to report.
    Ack,
}

impl Response {
    /// Wire bytes for this response.
    pub fn encode(&self) -> Vec<u8, MAX_RESPONSE_LEN> {
        let mut out = Vec::new();
        match *self {
            Response::Azimuth(deg) | Response::Elevation(deg) => {
                push_degrees(&mut out, deg);
                push(&mut out, b"\r\n");
            }
            Response::Position { azimuth, elevation } => {
                push_degrees(&mut out, azimuth);
                push(&mut out, b" ");
                push_degrees(&mut out, elevation);
                push(&mut out, b"\r\n");
            }
            Response::Ack => push(&mut out, b"\r"),
        }
        out
    }
}

fn push_degrees(out: &mut Vec<u8, MAX_RESPONSE_LEN>, degrees: u16) {
    let deg = degrees.min(999);
    let digits = [
        b'0' + (deg / 100) as u8,
        b'0' + (deg / 10 % 10) as u8,
        b'0' + (deg % 10) as u8,
    ];
    push(out, b"+0");
    push(out, &digits);
}

#[inline]
fn push(out: &mut Vec<u8, MAX_RESPONSE_LEN>, bytes: &[u8]) {
    // Every response fits MAX_RESPONSE_LEN.
    let _ = out.extend_from_slice(bytes);
}
