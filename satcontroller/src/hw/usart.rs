// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART as an `embedded-io` byte stream.
//!
//! Reads never wait once at least one byte has been returned, and [`ReadReady`] only looks at
//! what the receiver already holds, so the control loop can drain input without stalling.
//!
//! To talk to the controller from the host, connect to the ST-LINK virtual COM port:
//! ```text
//! $ screen /dev/tty.usbmodem* 9600
//! ```
//! Commands are terminated with `Enter` (CR).

use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write};
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Rx, Serial, Tx},
};

/// Receive fault (overrun, framing, noise or parity).
#[derive(Copy, Clone, Debug, Eq, PartialEq, defmt::Format)]
pub struct LineError;

impl embedded_io::Error for LineError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct Usart<U: Instance> {
    tx: Tx<U>,
    rx: Rx<U>,
    /// Byte taken off the receiver by a readiness check.
    pending: Option<u8>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, rx) = serial.split();
        Self {
            tx,
            rx,
            pending: None,
        }
    }

    fn try_read(&mut self) -> nb::Result<u8, LineError> {
        if let Some(byte) = self.pending.take() {
            return Ok(byte);
        }
        self.rx.read().map_err(|e| e.map(|_| LineError))
    }
}

impl<U: Instance> ErrorType for Usart<U> {
    type Error = LineError;
}

impl<U: Instance> ReadReady for Usart<U> {
    fn read_ready(&mut self) -> Result<bool, LineError> {
        if self.pending.is_none() {
            match self.rx.read() {
                Ok(byte) => self.pending = Some(byte),
                Err(nb::Error::WouldBlock) => {}
                Err(nb::Error::Other(_)) => return Err(LineError),
            }
        }
        Ok(self.pending.is_some())
    }
}

impl<U: Instance> Read for Usart<U> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, LineError> {
        let Some((first, rest)) = buf.split_first_mut() else {
            return Ok(0);
        };
        *first = block!(self.try_read())?;

        let mut n = 1;
        for slot in rest {
            match self.try_read() {
                Ok(byte) => *slot = byte,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(e)) => return Err(e),
            }
            n += 1;
        }
        Ok(n)
    }
}

impl<U: Instance> Write for Usart<U> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, LineError> {
        for &b in buf {
            block!(self.tx.write(b)).map_err(|_| LineError)?;
        }
        Ok(buf.len())
    }

    /// Block until the transmitter has drained.
    fn flush(&mut self) -> Result<(), LineError> {
        block!(self.tx.flush()).map_err(|_| LineError)
    }
}
