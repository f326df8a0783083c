// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tick-driven rotator control loop.
//!
//! [`Rotator`] owns every piece of controller state: the calibration, the current and target
//! angles, both axis drives, the sensor and the command line buffer. Each [`tick`](Rotator::tick)
//! runs, in order:
//!
//! 1. sample and map both axes,
//! 2. drive both axes toward their targets,
//! 3. drain whatever serial input has already arrived through the command protocol,
//! 4. publish the status readout,
//! 5. acknowledge the liveness supervisor.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut rotator = Rotator::new(Config::default(), sensor, storage, az_pins, el_pins, delay);
//! rotator.run(&mut serial, &mut display, &mut watchdog);
//! ```

use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};

use crate::calibration::{Axis, Bound, CalibrationBounds};
use crate::config::Config;
use crate::control::axis::{AxisController, Drive, MotorBridge};
use crate::control::Supervisor;
use crate::protocol::{Command, LineBuffer, Response};
use crate::sensor::PositionSensor;
use crate::status::{RawSamples, Status, StatusDisplay};
use crate::storage::{CalibrationStore, NvStorage};

/// Serial bytes pulled per read while draining input.
const READ_CHUNK: usize = 16;

/// Current and commanded angles in degrees.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionState {
    pub azimuth: u16,
    pub elevation: u16,
    pub azimuth_target: u16,
    pub elevation_target: u16,
}

impl PositionState {
    #[inline]
    pub fn current(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Azimuth => self.azimuth,
            Axis::Elevation => self.elevation,
        }
    }

    #[inline]
    pub fn target(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Azimuth => self.azimuth_target,
            Axis::Elevation => self.elevation_target,
        }
    }

    fn set_current(&mut self, axis: Axis, degrees: u16) {
        match axis {
            Axis::Azimuth => self.azimuth = degrees,
            Axis::Elevation => self.elevation = degrees,
        }
    }

    /// Set a new target, clamped to the axis full scale.
    pub fn set_target(&mut self, axis: Axis, degrees: u16) {
        let clamped = degrees.min(axis.full_scale());
        match axis {
            Axis::Azimuth => self.azimuth_target = clamped,
            Axis::Elevation => self.elevation_target = clamped,
        }
    }

    /// Make the current position the target on both axes.
    pub fn stop(&mut self) {
        self.azimuth_target = self.azimuth;
        self.elevation_target = self.elevation;
    }
}

/// Controller context for both axes.
pub struct Rotator<S, N, Az, El, D> {
    config: Config,
    position: PositionState,
    bounds: CalibrationBounds,
    sensor: S,
    store: CalibrationStore<N>,
    azimuth: AxisController<Az>,
    elevation: AxisController<El>,
    line: LineBuffer,
    delay: D,
}

impl<S, N, Az, El, D> Rotator<S, N, Az, El, D>
where
    S: PositionSensor,
    N: NvStorage,
    Az: MotorBridge,
    El: MotorBridge,
    D: DelayNs,
{
    /// Load the persisted calibration and take over both axes.
    ///
    /// The rotator starts out holding wherever it is pointing.
    pub fn new(
        config: Config,
        sensor: S,
        storage: N,
        azimuth: Az,
        elevation: El,
        delay: D,
    ) -> Self {
        let mut store = CalibrationStore::new(storage);
        let bounds = store.load();
        info!("calibration: {}", bounds);

        let mut rotator = Self {
            config,
            position: PositionState::default(),
            bounds,
            sensor,
            store,
            azimuth: AxisController::new(Axis::Azimuth, azimuth),
            elevation: AxisController::new(Axis::Elevation, elevation),
            line: LineBuffer::new(),
            delay,
        };
        rotator.sample();
        rotator.position.stop();
        rotator
    }

    /// Run one control cycle.
    pub fn tick<P, Disp, Sup>(&mut self, port: &mut P, display: &mut Disp, supervisor: &mut Sup)
    where
        P: Read + ReadReady + Write,
        Disp: StatusDisplay,
        Sup: Supervisor,
    {
        self.sample();
        debug!(
            "target {} {} current {} {}",
            self.position.azimuth_target,
            self.position.elevation_target,
            self.position.azimuth,
            self.position.elevation
        );

        self.drive();
        self.service(port);

        let status = self.status();
        display.show(&status);

        supervisor.tick_complete();
    }

    /// Tick forever, waiting `config.tick_ms` after each cycle.
    pub fn run<P, Disp, Sup>(
        mut self,
        port: &mut P,
        display: &mut Disp,
        supervisor: &mut Sup,
    ) -> !
    where
        P: Read + ReadReady + Write,
        Disp: StatusDisplay,
        Sup: Supervisor,
    {
        loop {
            self.tick(port, display, supervisor);
            self.delay.delay_ms(self.config.tick_ms);
        }
    }

    fn sample(&mut self) {
        for axis in [Axis::Azimuth, Axis::Elevation] {
            let degrees = self.sensor.read_angle(axis, &self.bounds, &mut self.delay);
            self.position.set_current(axis, degrees);
        }
    }

    fn drive(&mut self) {
        let pos = self.position;

        let drive = self.azimuth.step(pos.azimuth, pos.azimuth_target);
        self.sensor.follow(Axis::Azimuth, drive);

        let drive = self.elevation.step(pos.elevation, pos.elevation_target);
        self.sensor.follow(Axis::Elevation, drive);
    }

    /// Drain buffered serial input without waiting for more.
    fn service<P>(&mut self, port: &mut P)
    where
        P: Read + ReadReady + Write,
    {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match port.read_ready() {
                Ok(true) => {}
                Ok(false) => break,
                Err(_) => {
                    warn!("serial: read_ready failed");
                    break;
                }
            }

            let n = match port.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(_) => {
                    warn!("serial: read failed");
                    break;
                }
            };

            for &byte in &chunk[..n] {
                let Some(command) = self.line.push(byte) else {
                    continue;
                };
                if let Some(response) = self.execute(command) {
                    if port.write_all(&response.encode()).is_err() {
                        warn!("serial: dropped {}", response);
                    }
                }
            }
        }
        port.flush().ok();
    }

    /// Apply a parsed command, returning what should be sent back.
    pub fn execute(&mut self, command: Command) -> Option<Response> {
        debug!("command: {}", command);

        match command {
            Command::ReportAzimuth => Some(Response::Azimuth(self.position.azimuth)),
            Command::ReportElevation => Some(Response::Elevation(self.position.elevation)),
            Command::ReportPosition => Some(Response::Position {
                azimuth: self.position.azimuth,
                elevation: self.position.elevation,
            }),
            Command::Move { azimuth, elevation } => {
                if let Some(degrees) = azimuth {
                    self.position.set_target(Axis::Azimuth, degrees);
                }
                if let Some(degrees) = elevation {
                    self.position.set_target(Axis::Elevation, degrees);
                }
                info!(
                    "directing to {} {}",
                    self.position.azimuth_target, self.position.elevation_target
                );
                Some(Response::Ack)
            }
            Command::Stop => {
                self.position.stop();
                self.azimuth.hold();
                self.elevation.hold();
                info!("stop at {} {}", self.position.azimuth, self.position.elevation);
                Some(Response::Ack)
            }
            Command::Calibrate { axis, bound } => {
                self.calibrate(axis, bound);
                None
            }
        }
    }

    /// Capture the current raw sample of `axis` as `bound`, in memory and, unless the sensor opts
    /// out, in storage.
    pub fn calibrate(&mut self, axis: Axis, bound: Bound) {
        let raw = self.sensor.sample(axis, &mut self.delay);
        self.bounds.set(axis, bound, raw);
        if self.sensor.persists_calibration() {
            self.store.store(axis, bound, raw);
        } else {
            debug!("{} {} calibration not stored", axis, bound);
        }
        info!("{} {} calibration set: {}", axis, bound, raw);
    }

    /// Status for this tick, with raw samples if the raw readout is enabled.
    pub fn status(&mut self) -> Status {
        let status = Status::new(self.position.azimuth, self.position.elevation);
        if !self.config.raw_readout {
            return status;
        }

        status.with_raw(RawSamples {
            azimuth: self.sensor.sample(Axis::Azimuth, &mut self.delay),
            elevation: self.sensor.sample(Axis::Elevation, &mut self.delay),
        })
    }

    #[inline]
    pub fn position(&self) -> PositionState {
        self.position
    }

    #[inline]
    pub fn bounds(&self) -> CalibrationBounds {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drive currently applied to `axis`.
    pub fn drive_of(&self, axis: Axis) -> Drive {
        match axis {
            Axis::Azimuth => self.azimuth.drive(),
            Axis::Elevation => self.elevation.drive(),
        }
    }

    #[inline]
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn free(self) -> (S, N, Az, El, D) {
        (
            self.sensor,
            self.store.free(),
            self.azimuth.free(),
            self.elevation.free(),
            self.delay,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::DirectionPins;
    use crate::sensor::{AnalogSensor, DemoSensor};
    use crate::testing::*;

    use std::boxed::Box;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::vec::Vec;

    type Reader = Box<dyn FnMut() -> u16>;
    type Pins = DirectionPins<FakePin, FakePin>;
    type TestRotator = Rotator<AnalogSensor<Reader, Reader>, MemStorage, Pins, Pins, NoDelay>;

    struct Rig {
        rotator: TestRotator,
        az_raw: Rc<Cell<u16>>,
        el_raw: Rc<Cell<u16>>,
        az: BridgeMonitor,
        el: BridgeMonitor,
        serial: FakeSerial,
        display: RecordingDisplay,
        supervisor: CountingSupervisor,
    }

    impl Rig {
        /// Azimuth calibrated 200..800, elevation 1000..3000, pointing at 225° / 90°.
        fn new(config: Config) -> Self {
            let mut store = CalibrationStore::new(MemStorage::new());
            store.store(Axis::Azimuth, Bound::Min, 200);
            store.store(Axis::Azimuth, Bound::Max, 800);
            store.store(Axis::Elevation, Bound::Min, 1000);
            store.store(Axis::Elevation, Bound::Max, 3000);
            Self::with_storage(config, store.free(), 500, 2000)
        }

        fn with_storage(config: Config, storage: MemStorage, az: u16, el: u16) -> Self {
            let az_raw = Rc::new(Cell::new(az));
            let el_raw = Rc::new(Cell::new(el));
            let read_az: Reader = {
                let raw = az_raw.clone();
                Box::new(move || raw.get())
            };
            let read_el: Reader = {
                let raw = el_raw.clone();
                Box::new(move || raw.get())
            };

            let (az_adv, az_ret, az) = bridge();
            let (el_adv, el_ret, el) = bridge();
            let rotator = Rotator::new(
                config,
                AnalogSensor::new(read_az, read_el, config.settle_ms),
                storage,
                DirectionPins::new(az_adv, az_ret),
                DirectionPins::new(el_adv, el_ret),
                NoDelay::default(),
            );

            Self {
                rotator,
                az_raw,
                el_raw,
                az,
                el,
                serial: FakeSerial::default(),
                display: RecordingDisplay::default(),
                supervisor: CountingSupervisor::default(),
            }
        }

        fn tick(&mut self, input: &[u8]) -> Vec<u8> {
            self.serial.rx.extend(input.iter().copied());
            self.rotator
                .tick(&mut self.serial, &mut self.display, &mut self.supervisor);
            self.serial.take_output()
        }
    }

    #[test]
    fn holds_where_it_is_at_power_up() {
        let mut rig = Rig::new(Config::default());
        let pos = rig.rotator.position();
        assert_eq!((pos.azimuth, pos.elevation), (225, 90));
        assert_eq!((pos.azimuth_target, pos.elevation_target), (225, 90));

        rig.tick(b"");
        assert_eq!(rig.rotator.drive_of(Axis::Azimuth), Drive::Hold);
        assert_eq!(rig.rotator.drive_of(Axis::Elevation), Drive::Hold);
    }

    #[test]
    fn reports_position() {
        let mut rig = Rig::new(Config::default());
        // 45° azimuth, 30° elevation.
        rig.az_raw.set(260);
        rig.el_raw.set(1333);

        assert_eq!(rig.tick(b"C2\r"), b"+0045 +0030\r\n");
        assert_eq!(rig.tick(b"C\r"), b"+0045\r\n");
        assert_eq!(rig.tick(b"B\r"), b"+0030\r\n");
    }

    #[test]
    fn move_takes_effect_on_the_next_tick() {
        let mut rig = Rig::new(Config::default());

        assert_eq!(rig.tick(b"W+0090 +0045\r"), b"\r");
        let pos = rig.rotator.position();
        assert_eq!((pos.azimuth_target, pos.elevation_target), (90, 45));
        // Drive was decided before the command arrived.
        assert!(!rig.az.retreat());

        rig.tick(b"");
        assert!(rig.az.retreat() && !rig.az.advance());
        assert!(rig.el.retreat() && !rig.el.advance());
    }

    #[test]
    fn axes_drive_independently() {
        let mut rig = Rig::new(Config::default());
        rig.tick(b"M300\r");
        rig.tick(b"");
        assert_eq!(rig.rotator.drive_of(Axis::Azimuth), Drive::Advance);
        assert_eq!(rig.rotator.drive_of(Axis::Elevation), Drive::Hold);
        assert!(rig.az.advance());
        assert!(!rig.el.advance() && !rig.el.retreat());
    }

    #[test]
    fn garbage_move_keeps_target() {
        let mut rig = Rig::new(Config::default());
        rig.tick(b"W100 20\r");
        let before = rig.rotator.position();

        rig.tick(b"Mgarbage\r");
        assert_eq!(rig.rotator.position(), before);
    }

    #[test]
    fn targets_clamp_to_full_scale() {
        let mut rig = Rig::new(Config::default());
        rig.tick(b"W999 999\r");
        let pos = rig.rotator.position();
        assert_eq!((pos.azimuth_target, pos.elevation_target), (450, 180));
    }

    #[test]
    fn stop_holds_both_axes_immediately() {
        let mut rig = Rig::new(Config::default());
        rig.tick(b"W0 0\r");
        rig.tick(b"");
        assert!(rig.az.retreat() && rig.el.retreat());

        assert_eq!(rig.tick(b"S\r"), b"\r");
        assert!(!rig.az.retreat() && !rig.az.advance());
        assert!(!rig.el.retreat() && !rig.el.advance());
        let pos = rig.rotator.position();
        assert_eq!(pos.azimuth_target, pos.azimuth);
        assert_eq!(pos.elevation_target, pos.elevation);

        rig.tick(b"");
        assert_eq!(rig.rotator.drive_of(Axis::Azimuth), Drive::Hold);
        assert_eq!(rig.rotator.drive_of(Axis::Elevation), Drive::Hold);
    }

    #[test]
    fn calibration_persists_across_power_cycle() {
        let mut rig = Rig::with_storage(Config::default(), MemStorage::new(), 0, 0);

        rig.az_raw.set(130);
        assert!(rig.tick(b"O\r").is_empty());
        rig.az_raw.set(3900);
        assert!(rig.tick(b"F\r").is_empty());
        rig.el_raw.set(77);
        rig.tick(b"O2\r");
        rig.el_raw.set(2222);
        rig.tick(b"F2\r");

        let expected = CalibrationBounds::new(130, 3900, 77, 2222);
        assert_eq!(rig.rotator.bounds(), expected);

        let (_, storage, ..) = rig.rotator.free();
        let rig = Rig::with_storage(Config::default(), storage, 130, 77);
        assert_eq!(rig.rotator.bounds(), expected);
    }

    #[test]
    fn new_calibration_is_used_on_the_next_sample() {
        let mut rig = Rig::new(Config::default());
        rig.az_raw.set(800);
        rig.tick(b"O\r");
        rig.tick(b"");
        assert_eq!(rig.rotator.position().azimuth, 0);
    }

    #[test]
    fn uncalibrated_controller_keeps_running() {
        let mut rig = Rig::with_storage(Config::default(), MemStorage::new(), 300, 0);
        assert_eq!(rig.tick(b"C2\r"), b"+0000 +0000\r\n");
        rig.tick(b"W10 10\r");
        rig.tick(b"");
        assert_eq!(rig.rotator.drive_of(Axis::Azimuth), Drive::Advance);
        assert_eq!(rig.rotator.drive_of(Axis::Elevation), Drive::Advance);
    }

    #[test]
    fn publishes_status_and_acknowledges_supervisor_every_tick() {
        let mut rig = Rig::new(Config::default());
        rig.tick(b"");
        rig.tick(b"");
        assert_eq!(rig.supervisor.ticks, 2);
        assert_eq!(rig.display.shown.len(), 2);
        assert_eq!(rig.display.shown[1], Status::new(225, 90));
        assert_eq!(rig.display.shown[1].heading, "SW");
    }

    #[test]
    fn raw_readout_adds_samples() {
        let mut rig = Rig::new(Config::default().with_raw_readout(true));
        rig.tick(b"");
        assert_eq!(
            rig.display.shown[0].raw,
            Some(RawSamples {
                azimuth: 500,
                elevation: 2000
            })
        );
    }

    #[test]
    fn several_commands_in_one_tick() {
        let mut rig = Rig::new(Config::default());
        let out = rig.tick(b"M10\rC\nXYZ\rB\r");
        assert_eq!(out, b"\r+0225\r\n+0090\r\n");
    }

    #[test]
    fn partial_line_carries_over_ticks() {
        let mut rig = Rig::new(Config::default());
        assert!(rig.tick(b"C").is_empty());
        assert_eq!(rig.tick(b"2\r"), b"+0225 +0090\r\n");
    }

    #[test]
    fn demo_sensor_walks_to_target() {
        let (az_adv, az_ret, _) = bridge();
        let (el_adv, el_ret, _) = bridge();
        let mut rotator = Rotator::new(
            Config::default(),
            DemoSensor::new(180, 90),
            MemStorage::new(),
            DirectionPins::new(az_adv, az_ret),
            DirectionPins::new(el_adv, el_ret),
            NoDelay::default(),
        );
        let mut serial = FakeSerial::with_input(b"W185 88\r");
        let mut supervisor = CountingSupervisor::default();

        for _ in 0..10 {
            rotator.tick(&mut serial, &mut (), &mut supervisor);
        }
        let pos = rotator.position();
        assert_eq!((pos.azimuth, pos.elevation), (185, 88));
        assert_eq!(rotator.drive_of(Axis::Azimuth), Drive::Hold);
        assert_eq!(rotator.sensor().angle(Axis::Azimuth), 185);
    }

    #[test]
    fn demo_calibration_leaves_storage_alone() {
        let mut storage = MemStorage::new();
        storage.bytes[..8].copy_from_slice(&[150, 0, 0x6E, 0x0F, 100, 0, 0x34, 0x08]);
        let saved = storage.bytes;

        let (az_adv, az_ret, _) = bridge();
        let (el_adv, el_ret, _) = bridge();
        let mut rotator = Rotator::new(
            Config::default(),
            DemoSensor::new(180, 90),
            storage,
            DirectionPins::new(az_adv, az_ret),
            DirectionPins::new(el_adv, el_ret),
            NoDelay::default(),
        );
        let mut serial = FakeSerial::with_input(b"O\rF2\r");
        rotator.tick(&mut serial, &mut (), &mut CountingSupervisor::default());

        assert_eq!(rotator.bounds().get(Axis::Azimuth, Bound::Min), 1638);
        assert_eq!(rotator.bounds().get(Axis::Elevation, Bound::Max), 2047);
        let (_, storage, _, _, _) = rotator.free();
        assert_eq!(storage.bytes, saved);
    }
}
