// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Persisted calibration.
//!
//! Layout on the non-volatile byte store (8 bytes, little-endian words):
//!
//! | Offset | Value |
//! | ------ | ----- |
//! | 0–1 | azimuth min |
//! | 2–3 | azimuth max |
//! | 4–5 | elevation min |
//! | 6–7 | elevation max |
//!
//! Reads and writes are infallible from the controller's point of view. A cell that was never
//! written reads back as whatever the medium defaults to, which yields a degenerate but harmless
//! calibration.

use crate::calibration::{Axis, Bound, CalibrationBounds};

/// Number of bytes the calibration occupies.
pub const CALIBRATION_LEN: usize = 8;

/// Byte-addressable non-volatile storage.
pub trait NvStorage {
    fn read(&mut self, addr: usize) -> u8;
    fn write(&mut self, addr: usize, value: u8);
}

impl<T: NvStorage + ?Sized> NvStorage for &mut T {
    #[inline]
    fn read(&mut self, addr: usize) -> u8 {
        T::read(self, addr)
    }

    #[inline]
    fn write(&mut self, addr: usize, value: u8) {
        T::write(self, addr, value)
    }
}

/// Byte offset of the low byte for a given calibration value.
#[inline]
pub const fn offset(axis: Axis, bound: Bound) -> usize {
    match (axis, bound) {
        (Axis::Azimuth, Bound::Min) => 0,
        (Axis::Azimuth, Bound::Max) => 2,
        (Axis::Elevation, Bound::Min) => 4,
        (Axis::Elevation, Bound::Max) => 6,
    }
}

/// Calibration bounds on top of an [`NvStorage`].
pub struct CalibrationStore<S> {
    storage: S,
}

impl<S: NvStorage> CalibrationStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read all four bounds.
    pub fn load(&mut self) -> CalibrationBounds {
        let mut bounds = CalibrationBounds::default();
        for axis in [Axis::Azimuth, Axis::Elevation] {
            for bound in [Bound::Min, Bound::Max] {
                bounds.set(axis, bound, self.read_word(offset(axis, bound)));
            }
        }
        bounds
    }

    /// Persist a single bound.
    pub fn store(&mut self, axis: Axis, bound: Bound, value: u16) {
        let addr = offset(axis, bound);
        let [lower, upper] = value.to_le_bytes();
        self.storage.write(addr, lower);
        self.storage.write(addr + 1, upper);
    }

    fn read_word(&mut self, addr: usize) -> u16 {
        let lower = self.storage.read(addr);
        let upper = self.storage.read(addr + 1);
        u16::from_le_bytes([lower, upper])
    }

    pub fn free(self) -> S {
        self.storage
    }
}
