// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! HD44780-compatible character LCD, write-only, 4-bit bus.
//!
//! RW must be held low by the caller. Without busy-flag reads every instruction is followed by
//! its worst-case execution time.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use satcontroller_core::display::CharacterLcd;

// Instructions
pub mod cmd {
    pub const CLEAR: u8 = 0x01;
    /// Increment cursor, no display shift.
    pub const ENTRY_MODE: u8 = 0x06;
    /// Display on, cursor and blink off.
    pub const DISPLAY_ON: u8 = 0x0C;
    /// 4-bit bus, two lines, 5x8 font.
    pub const FUNCTION_SET: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Longest regular instruction time.
const INSTRUCTION_US: u32 = 50;
const CLEAR_US: u32 = 2_000;

pub struct Hd44780<RS, EN, D4, D5, D6, D7, D> {
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: D,
}

impl<RS, EN, D4, D5, D6, D7, D> Hd44780<RS, EN, D4, D5, D6, D7, D>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    D: DelayNs,
{
    /// Run the power-on initialisation by instruction and clear the display.
    pub fn new(rs: RS, en: EN, d4: D4, d5: D5, d6: D6, d7: D7, delay: D) -> Self {
        let mut lcd = Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        };

        lcd.rs.set_low().ok();
        lcd.en.set_low().ok();
        lcd.delay.delay_ms(50);

        // Three 8-bit function sets bring the controller into a known state from any mode.
        lcd.write_nibble(0x3);
        lcd.delay.delay_us(4_500);
        lcd.write_nibble(0x3);
        lcd.delay.delay_us(4_500);
        lcd.write_nibble(0x3);
        lcd.delay.delay_us(150);
        lcd.write_nibble(0x2);

        lcd.command(cmd::FUNCTION_SET);
        lcd.command(cmd::DISPLAY_ON);
        CharacterLcd::clear(&mut lcd);
        lcd.command(cmd::ENTRY_MODE);
        lcd
    }

    fn write_nibble(&mut self, nibble: u8) {
        self.d4.set_state(PinState::from(nibble & 0x1 != 0)).ok();
        self.d5.set_state(PinState::from(nibble & 0x2 != 0)).ok();
        self.d6.set_state(PinState::from(nibble & 0x4 != 0)).ok();
        self.d7.set_state(PinState::from(nibble & 0x8 != 0)).ok();

        self.en.set_high().ok();
        self.delay.delay_us(1);
        self.en.set_low().ok();
        self.delay.delay_us(INSTRUCTION_US);
    }

    fn send(&mut self, byte: u8, data: bool) {
        self.rs.set_state(PinState::from(data)).ok();
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    #[inline]
    pub fn command(&mut self, instruction: u8) {
        self.send(instruction, false);
    }

    /// Write one character at the cursor. Non-ASCII renders as `?`.
    #[inline]
    pub fn write_char(&mut self, c: u8) {
        let c = if c.is_ascii() { c } else { b'?' };
        self.send(c, true);
    }
}

impl<RS, EN, D4, D5, D6, D7, D> CharacterLcd for Hd44780<RS, EN, D4, D5, D6, D7, D>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) {
        self.command(cmd::CLEAR);
        self.delay.delay_us(CLEAR_US);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        let offset = ROW_OFFSETS[usize::from(row).min(ROW_OFFSETS.len() - 1)];
        self.command(cmd::SET_DDRAM_ADDR | (offset + col.min(0x27)));
    }

    fn write_str(&mut self, text: &str) {
        for &c in text.as_bytes() {
            self.write_char(c);
        }
    }
}
