// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Values for the status readout.
//!
//! The controller only hands over numbers and short fixed-width strings; where they land on the
//! display, and any static labels, are up to the [`StatusDisplay`] implementation.

use core::fmt::Write;

use heapless::String;

use crate::compass::direction_label;

/// Raw ADC samples shown when the raw readout is enabled.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RawSamples {
    pub azimuth: u16,
    pub elevation: u16,
}

/// Snapshot published once per tick.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Status {
    pub azimuth: u16,
    pub elevation: u16,
    /// Compass label for `azimuth`.
    pub heading: &'static str,
    pub raw: Option<RawSamples>,
}

impl Status {
    pub fn new(azimuth: u16, elevation: u16) -> Self {
        Self {
            azimuth,
            elevation,
            heading: direction_label(i32::from(azimuth)),
            raw: None,
        }
    }

    pub fn with_raw(mut self, raw: RawSamples) -> Self {
        self.raw = Some(raw);
        self
    }

    /// Azimuth and heading, e.g. `"225 SW "`. Always 7 characters.
    pub fn azimuth_text(&self) -> String<8> {
        let mut s = String::new();
        let _ = write!(s, "{:>3} {:<3}", self.azimuth, self.heading);
        s
    }

    /// Elevation, e.g. `" 45"`. Always 3 characters.
    pub fn elevation_text(&self) -> String<4> {
        let mut s = String::new();
        let _ = write!(s, "{:>3}", self.elevation);
        s
    }

    /// A raw sample right-aligned to 4 characters.
    pub fn raw_text(sample: u16) -> String<5> {
        let mut s = String::new();
        let _ = write!(s, "{:>4}", sample);
        s
    }
}

/// Sink for the per-tick status.
pub trait StatusDisplay {
    fn show(&mut self, status: &Status);
}

impl<T: StatusDisplay + ?Sized> StatusDisplay for &mut T {
    #[inline]
    fn show(&mut self, status: &Status) {
        T::show(self, status)
    }
}

/// For builds without a display.
impl StatusDisplay for () {
    #[inline]
    fn show(&mut self, _status: &Status) {}
}
