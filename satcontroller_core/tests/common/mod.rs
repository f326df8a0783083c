// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Shared fakes for the session tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use satcontroller_core::control::Supervisor;
use satcontroller_core::status::{Status, StatusDisplay};
use satcontroller_core::storage::NvStorage;

/// Output pin whose level can be watched from the test.
#[derive(Clone, Default)]
pub struct Line(Rc<Cell<bool>>);

impl Line {
    pub fn is_high(&self) -> bool {
        self.0.get()
    }
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

/// Potentiometer wiper the test can move.
#[derive(Clone, Default)]
pub struct Wiper(Rc<Cell<u16>>);

impl Wiper {
    pub fn at(raw: u16) -> Self {
        Self(Rc::new(Cell::new(raw)))
    }

    pub fn set(&self, raw: u16) {
        self.0.set(raw);
    }

    pub fn reader(&self) -> impl FnMut() -> u16 {
        let raw = self.0.clone();
        move || raw.get()
    }
}

pub struct InstantDelay;

impl DelayNs for InstantDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Battery-backed RAM stand-in, erased to zero.
pub struct Ram(pub [u8; 64]);

impl Default for Ram {
    fn default() -> Self {
        Self([0; 64])
    }
}

impl NvStorage for Ram {
    fn read(&mut self, addr: usize) -> u8 {
        self.0[addr]
    }

    fn write(&mut self, addr: usize, value: u8) {
        self.0[addr] = value;
    }
}

/// Serial link to a scripted client.
#[derive(Default)]
pub struct Link {
    pub inbound: VecDeque<u8>,
    pub outbound: Vec<u8>,
    /// Refuse every write, as a wedged transmitter would.
    pub jammed: bool,
}

#[derive(Debug)]
pub struct Jammed;

impl embedded_io::Error for Jammed {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

impl Link {
    pub fn send(&mut self, bytes: &[u8]) {
        self.inbound.extend(bytes);
    }

    pub fn received(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.outbound)).unwrap()
    }
}

impl embedded_io::ErrorType for Link {
    type Error = Jammed;
}

impl embedded_io::Read for Link {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Jammed> {
        let n = buf.len().min(self.inbound.len());
        for (slot, byte) in buf.iter_mut().zip(self.inbound.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl embedded_io::ReadReady for Link {
    fn read_ready(&mut self) -> Result<bool, Jammed> {
        Ok(!self.inbound.is_empty())
    }
}

impl embedded_io::Write for Link {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Jammed> {
        if self.jammed {
            return Err(Jammed);
        }
        self.outbound.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Jammed> {
        Ok(())
    }
}

/// Keeps the last status shown, like a character display would.
#[derive(Default)]
pub struct Screen {
    pub last: Option<Status>,
    pub frames: usize,
}

impl StatusDisplay for Screen {
    fn show(&mut self, status: &Status) {
        self.last = Some(*status);
        self.frames += 1;
    }
}

#[derive(Default)]
pub struct Watchdog {
    pub feeds: u32,
}

impl Supervisor for Watchdog {
    fn tick_complete(&mut self) {
        self.feeds += 1;
    }
}
