// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

#[cfg(not(feature = "demo"))]
use core::cell::RefCell;

use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;

use embedded_hal::delay::DelayNs;
#[cfg(feature = "lcd")]
use embedded_hal::digital::OutputPin;
use hal::{
    pac,
    prelude::*,
    serial::{Config as SerialConfig, Serial},
};
use stm32f7xx_hal as hal;

use satcontroller::heartbeat::{Heartbeat, WATCHDOG_TIMEOUT_MS};
use satcontroller::hw::{
    BackupSram, BoardPins, CycleDelay, IndependentWatchdog, Led, Output, Usart,
};
use satcontroller_core::config::BAUD_RATE;
use satcontroller_core::control::DirectionPins;
use satcontroller_core::{Config, Rotator};

#[cfg(feature = "lcd")]
use satcontroller::drivers::Hd44780;
#[cfg(not(feature = "demo"))]
use satcontroller::hw::{adc, Adc};
#[cfg(feature = "lcd")]
use satcontroller_core::display::StatusScreen;
#[cfg(not(feature = "demo"))]
use satcontroller_core::sensor::AnalogSensor;
#[cfg(feature = "demo")]
use satcontroller_core::sensor::DemoSensor;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut delay = CycleDelay::new(clocks.sysclk().to_Hz());

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE, dp.GPIOF);

    defmt::info!("SatController starting");

    // LCD, write-only: RW stays low for as long as `main` runs
    #[cfg(feature = "lcd")]
    let mut lcd_rw = Output::new(pins.lcd.rw);
    #[cfg(feature = "lcd")]
    lcd_rw.set_low().ok();
    #[cfg(feature = "lcd")]
    let mut screen = {
        let mut screen = StatusScreen::new(Hd44780::new(
            Output::new(pins.lcd.rs),
            Output::new(pins.lcd.en),
            Output::new(pins.lcd.d4),
            Output::new(pins.lcd.d5),
            Output::new(pins.lcd.d6),
            Output::new(pins.lcd.d7),
            delay,
        ));
        screen.banner();
        #[cfg(feature = "demo")]
        {
            delay.delay_ms(1_000);
            screen.demo_banner();
            delay.delay_ms(1_500);
        }
        screen
    };
    #[cfg(not(feature = "lcd"))]
    let mut screen = ();

    // USART3 (ST-LINK VCP)
    let usart_cfg = SerialConfig {
        baud_rate: BAUD_RATE.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let mut usart = Usart::new(serial);

    let config = Config::default().with_raw_readout(cfg!(feature = "debug-readout"));

    // Position sensing
    #[cfg(not(feature = "demo"))]
    let adc = RefCell::new(Adc::adc1(dp.ADC1));
    #[cfg(not(feature = "demo"))]
    let sensor = AnalogSensor::new(
        Adc::make_reader(&adc, adc::AZIMUTH_CHANNEL),
        Adc::make_reader(&adc, adc::ELEVATION_CHANNEL),
        config.settle_ms,
    );
    #[cfg(feature = "demo")]
    let sensor = DemoSensor::default();

    // Rotator
    let rotator_pins = pins.rotator;
    let rotator = Rotator::new(
        config,
        sensor,
        BackupSram::new(dp.PWR),
        DirectionPins::new(Output::new(rotator_pins.cw), Output::new(rotator_pins.ccw)),
        DirectionPins::new(Output::new(rotator_pins.up), Output::new(rotator_pins.down)),
        delay,
    );

    #[cfg(feature = "lcd")]
    {
        screen.calibration(&rotator.bounds());
        delay.delay_ms(2_000);
    }

    delay.delay_ms(1_000);

    let watchdog = IndependentWatchdog::start(dp.IWDG, WATCHDOG_TIMEOUT_MS);
    let mut heartbeat = Heartbeat::new(watchdog, Led::active_high(Output::new(pins.led)));

    defmt::info!("running");
    rotator.run(&mut usart, &mut screen, &mut heartbeat)
}
