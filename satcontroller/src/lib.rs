// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # SatController Firmware
//!
//! Board support for running the SatController antenna rotator on a NUCLEO-F767ZI (STM32F767).
//! The control logic lives in `satcontroller_core`; this crate provides the hardware it runs on.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around ADC, USART, GPIO, backup SRAM, watchdog |
//! | [`drivers`] | Device-level drivers (HD44780 LCD) |
//! | [`heartbeat`] | Per-tick liveness: watchdog feed and LED blink |
//!
//! ## Features
//!
//! | Feature | Effect |
//! | ------- | ------ |
//! | `lcd` (default) | Drive the 16x2 status display |
//! | `demo` | Simulated rotator, no sensors or motors needed |
//! | `debug-readout` | Raw ADC samples on the display |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc -p satcontroller --no-deps --open --target thumbv7em-none-eabihf
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run -p satcontroller --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

pub mod drivers;
pub mod heartbeat;
pub mod hw;

pub use heartbeat::Heartbeat;
