// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status layout for a 16x2 character display.
//!
//! ```text
//!  0    5      12
//! +----------------+
//! |Azi: 225 SW  500|
//! |Ele:  90    2000|
//! +----------------+
//! ```
//!
//! Labels are drawn once; afterwards only the fixed-width value fields are rewritten so nothing
//! stale is left behind. The raw columns appear only when the status carries raw samples.

use core::fmt::Write;

use heapless::String;

use crate::calibration::CalibrationBounds;
use crate::status::{Status, StatusDisplay};

/// Minimal text interface of a character LCD.
pub trait CharacterLcd {
    fn clear(&mut self);
    fn set_cursor(&mut self, col: u8, row: u8);
    fn write_str(&mut self, text: &str);
}

impl<T: CharacterLcd + ?Sized> CharacterLcd for &mut T {
    fn clear(&mut self) {
        T::clear(self)
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        T::set_cursor(self, col, row)
    }

    fn write_str(&mut self, text: &str) {
        T::write_str(self, text)
    }
}

const VALUE_COL: u8 = 5;
const RAW_COL: u8 = 12;

/// [`StatusDisplay`] on a character LCD, plus the boot screens.
pub struct StatusScreen<L> {
    lcd: L,
    labelled: bool,
}

impl<L: CharacterLcd> StatusScreen<L> {
    pub fn new(lcd: L) -> Self {
        Self {
            lcd,
            labelled: false,
        }
    }

    pub fn banner(&mut self) {
        self.lcd.clear();
        self.lcd.set_cursor(1, 1);
        self.lcd.write_str("SatController");
        self.labelled = false;
    }

    pub fn demo_banner(&mut self) {
        self.lcd.clear();
        self.lcd.set_cursor(4, 0);
        self.lcd.write_str("**DEMO**");
        self.lcd.set_cursor(4, 1);
        self.lcd.write_str("**MODE**");
        self.labelled = false;
    }

    /// Loaded calibration, one axis per row.
    pub fn calibration(&mut self, bounds: &CalibrationBounds) {
        self.lcd.clear();
        for (row, label, axis) in [(0, 'A', bounds.azimuth), (1, 'E', bounds.elevation)] {
            let mut line: String<16> = String::new();
            let _ = write!(line, "{} Cal: {} {}", label, axis.min, axis.max);
            self.lcd.set_cursor(0, row);
            self.lcd.write_str(&line);
        }
        self.labelled = false;
    }

    pub fn free(self) -> L {
        self.lcd
    }
}

impl<L: CharacterLcd> StatusDisplay for StatusScreen<L> {
    fn show(&mut self, status: &Status) {
        if !self.labelled {
            self.lcd.clear();
            self.lcd.set_cursor(0, 0);
            self.lcd.write_str("Azi: ");
            self.lcd.set_cursor(0, 1);
            self.lcd.write_str("Ele: ");
            self.labelled = true;
        }

        self.lcd.set_cursor(VALUE_COL, 0);
        self.lcd.write_str(&status.azimuth_text());
        self.lcd.set_cursor(VALUE_COL, 1);
        self.lcd.write_str(&status.elevation_text());

        if let Some(raw) = status.raw {
            self.lcd.set_cursor(RAW_COL, 0);
            self.lcd.write_str(&Status::raw_text(raw.azimuth));
            self.lcd.set_cursor(RAW_COL, 1);
            self.lcd.write_str(&Status::raw_text(raw.elevation));
        }
    }
}
