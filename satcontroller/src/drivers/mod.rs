// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! Drivers that sit above the raw `hw/` layer and below the controller core.
//!
//! ## Existing drivers
//!
//! - [`hd44780`] – HD44780-compatible 16x2 character LCD in 4-bit mode

pub mod hd44780;

pub use hd44780::Hd44780;
