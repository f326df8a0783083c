// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side fakes for the collaborator traits.

use core::convert::Infallible;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::control::Supervisor;
use crate::status::{Status, StatusDisplay};
use crate::storage::NvStorage;

/// Observes both lines of one H-bridge.
#[derive(Clone, Default)]
pub struct BridgeMonitor {
    lines: Rc<[Cell<bool>; 2]>,
    overlapped: Rc<Cell<bool>>,
}

impl BridgeMonitor {
    pub fn advance(&self) -> bool {
        self.lines[0].get()
    }

    pub fn retreat(&self) -> bool {
        self.lines[1].get()
    }

    /// True if both lines were ever high at the same time.
    pub fn overlapped(&self) -> bool {
        self.overlapped.get()
    }
}

pub struct FakePin {
    monitor: BridgeMonitor,
    line: usize,
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.monitor.lines[self.line].set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.monitor.lines[self.line].set(true);
        if self.monitor.lines.iter().all(Cell::get) {
            self.monitor.overlapped.set(true);
        }
        Ok(())
    }
}

/// Advance pin, retreat pin and a monitor on both.
pub fn bridge() -> (FakePin, FakePin, BridgeMonitor) {
    let monitor = BridgeMonitor::default();
    let advance = FakePin {
        monitor: monitor.clone(),
        line: 0,
    };
    let retreat = FakePin {
        monitor: monitor.clone(),
        line: 1,
    };
    (advance, retreat, monitor)
}

/// Delay that returns immediately and counts what was asked of it.
#[derive(Default)]
pub struct NoDelay {
    pub total_ns: u64,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

pub struct MemStorage {
    pub bytes: [u8; 16],
}

impl MemStorage {
    pub fn new() -> Self {
        Self { bytes: [0; 16] }
    }
}

impl NvStorage for MemStorage {
    fn read(&mut self, addr: usize) -> u8 {
        self.bytes[addr]
    }

    fn write(&mut self, addr: usize, value: u8) {
        self.bytes[addr] = value;
    }
}

/// Serial port fed from a script, capturing everything written.
#[derive(Default)]
pub struct FakeSerial {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
}

impl FakeSerial {
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            rx: input.iter().copied().collect(),
            tx: Vec::new(),
        }
    }

    pub fn take_output(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.tx)
    }
}

impl embedded_io::ErrorType for FakeSerial {
    type Error = Infallible;
}

impl embedded_io::Read for FakeSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut n = 0;
        while n < buf.len() {
            match self.rx.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

impl embedded_io::ReadReady for FakeSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.rx.is_empty())
    }
}

impl embedded_io::Write for FakeSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub shown: Vec<Status>,
}

impl StatusDisplay for RecordingDisplay {
    fn show(&mut self, status: &Status) {
        self.shown.push(*status);
    }
}

#[derive(Default)]
pub struct CountingSupervisor {
    pub ticks: u32,
}

impl Supervisor for CountingSupervisor {
    fn tick_complete(&mut self) {
        self.ticks += 1;
    }
}
