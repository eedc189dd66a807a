//! Acquisition loop
//!
//! Setup happens once in [`Acquisition::configure`], which takes ownership
//! of the peripherals; a configured `Acquisition` is the only way to sample,
//! so there is no path that configures the ADC twice.
//!
//! ```text
//! Uninitialized --configure()--> Configured --run()--> Sampling (forever)
//! ```
//!
//! Each iteration reads the temperature, then the clock, then writes one
//! `<timestamp> <temperature>` line. Nothing sleeps or yields in between.

use crate::config::{TEMPERATURE_SENSOR_CHANNEL, TEMPERATURE_UNIT};
use crate::domain::{SampleLine, TemperatureUnit};
use crate::ports::{AdcPort, ClockPort, OutputPort, SensorError, StatusIndicator};
use crate::protocol::format_sample_line;

use super::TemperatureReader;

/// Stand-in for boards without a status LED
pub struct NoIndicator;

impl StatusIndicator for NoIndicator {
    fn set_on(&mut self, _on: bool) {}
}

/// A configured acquisition pipeline: reader, clock and output sink.
pub struct Acquisition<A: AdcPort, C: ClockPort, O: OutputPort, S: StatusIndicator = NoIndicator> {
    reader: TemperatureReader<A>,
    clock: C,
    output: O,
    status: Option<S>,
    unit: TemperatureUnit,
    samples_emitted: u32,
    read_failures: u32,
    write_failures: u32,
}

impl<A: AdcPort, C: ClockPort, O: OutputPort> Acquisition<A, C, O, NoIndicator> {
    /// Configure the ADC for the onboard sensor on a board without an LED
    pub fn configure(adc: A, clock: C, output: O) -> Result<Self, SensorError> {
        Self::setup(adc, clock, output, None)
    }
}

impl<A: AdcPort, C: ClockPort, O: OutputPort, S: StatusIndicator> Acquisition<A, C, O, S> {
    /// Configure the ADC for the onboard sensor and take over the status LED
    pub fn configure_with_indicator(
        adc: A,
        clock: C,
        output: O,
        status: S,
    ) -> Result<Self, SensorError> {
        Self::setup(adc, clock, output, Some(status))
    }

    fn setup(mut adc: A, clock: C, output: O, mut status: Option<S>) -> Result<Self, SensorError> {
        if let Some(led) = status.as_mut() {
            led.set_on(false);
        }

        adc.initialize()?;
        adc.set_temperature_sensor_enabled(true);
        adc.select_input(TEMPERATURE_SENSOR_CHANNEL)?;
        info!(
            "ADC configured: input {}, unit {}",
            TEMPERATURE_SENSOR_CHANNEL,
            TEMPERATURE_UNIT.symbol()
        );

        if let Some(led) = status.as_mut() {
            led.set_on(true);
        }

        Ok(Self {
            reader: TemperatureReader::new(adc),
            clock,
            output,
            status,
            unit: TEMPERATURE_UNIT,
            samples_emitted: 0,
            read_failures: 0,
            write_failures: 0,
        })
    }

    /// Report in `unit` instead of the build-time unit
    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Unit the lines are reported in
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Lines successfully handed to the output
    pub fn samples_emitted(&self) -> u32 {
        self.samples_emitted
    }

    /// Iterations dropped because the ADC read failed
    pub fn read_failures(&self) -> u32 {
        self.read_failures
    }

    /// Iterations whose line could not be written
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }

    /// Last raw ADC value (for diagnostics)
    pub fn last_raw_value(&self) -> Option<u16> {
        self.reader.last_raw_value()
    }

    /// Run one iteration: read temperature, read timestamp, emit line.
    ///
    /// Returns the emitted sample, or `None` when the read or the write
    /// failed. Failures are logged and counted; they never stop the loop.
    pub fn step(&mut self) -> Option<SampleLine> {
        let temperature = match self.reader.read_in(self.unit) {
            Ok(t) => t,
            Err(e) => {
                self.read_failures = self.read_failures.wrapping_add(1);
                warn!("Sensor read failed: {}", e);
                return None;
            }
        };

        let timestamp_us = self.clock.now_us();

        let result = format_sample_line(timestamp_us, temperature)
            .and_then(|line| self.output.write_line(&line));
        match result {
            Ok(()) => {
                self.samples_emitted = self.samples_emitted.wrapping_add(1);
                Some(SampleLine::new(timestamp_us, temperature))
            }
            Err(e) => {
                self.write_failures = self.write_failures.wrapping_add(1);
                warn!("Output write failed: {}", e);
                None
            }
        }
    }

    /// Sample forever. This is the whole runtime of the firmware.
    pub fn run(mut self) -> ! {
        info!("Sampling");
        loop {
            self.step();
        }
    }

    /// Sample until `stop` returns true.
    ///
    /// `stop` is checked before every iteration, so a pending stop request
    /// never interrupts a half-written line. Returns the number of
    /// iterations performed.
    pub fn run_until<F: FnMut() -> bool>(&mut self, mut stop: F) -> u32 {
        let mut iterations = 0u32;
        while !stop() {
            self.step();
            iterations = iterations.wrapping_add(1);
        }
        iterations
    }

    /// Give the status LED back, switched off
    pub fn release_indicator(&mut self) -> Option<S> {
        let mut led = self.status.take()?;
        led.set_on(false);
        Some(led)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::convert_raw;
    use crate::ports::OutputError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Call log shared between the mocks so ordering can be checked
    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct VecAdc {
        samples: Vec<Result<u16, SensorError>>,
        next: usize,
        log: Log,
        enabled: bool,
        channel: Option<u8>,
    }

    impl VecAdc {
        fn new(samples: &[u16], log: &Log) -> Self {
            Self::with_results(samples.iter().map(|&s| Ok(s)).collect(), log)
        }

        fn with_results(samples: Vec<Result<u16, SensorError>>, log: &Log) -> Self {
            Self {
                samples,
                next: 0,
                log: log.clone(),
                enabled: false,
                channel: None,
            }
        }
    }

    impl AdcPort for VecAdc {
        fn initialize(&mut self) -> Result<(), SensorError> {
            self.log.borrow_mut().push("adc_init");
            Ok(())
        }

        fn set_temperature_sensor_enabled(&mut self, enabled: bool) {
            self.log.borrow_mut().push("temp_enable");
            self.enabled = enabled;
        }

        fn select_input(&mut self, channel: u8) -> Result<(), SensorError> {
            self.log.borrow_mut().push("select");
            if channel > 4 {
                return Err(SensorError::InvalidChannel(channel));
            }
            self.channel = Some(channel);
            Ok(())
        }

        fn read(&mut self) -> Result<u16, SensorError> {
            self.log.borrow_mut().push("read");
            assert!(self.enabled, "read before sensor enabled");
            assert_eq!(self.channel, Some(4), "read before input selected");
            let sample = self.samples[self.next];
            self.next += 1;
            sample
        }
    }

    struct VecClock {
        ticks: Vec<u64>,
        next: usize,
        log: Log,
    }

    impl ClockPort for VecClock {
        fn now_us(&mut self) -> u64 {
            self.log.borrow_mut().push("clock");
            let t = self.ticks[self.next];
            self.next += 1;
            t
        }
    }

    struct VecOutput {
        lines: Rc<RefCell<Vec<String>>>,
        log: Log,
        fail_next: bool,
    }

    impl OutputPort for VecOutput {
        fn write_line(&mut self, line: &str) -> Result<(), OutputError> {
            self.log.borrow_mut().push("write");
            if self.fail_next {
                self.fail_next = false;
                return Err(OutputError::WriteFailed);
            }
            self.lines.borrow_mut().push(String::from(line));
            Ok(())
        }
    }

    struct Led {
        states: Rc<RefCell<Vec<bool>>>,
    }

    impl StatusIndicator for Led {
        fn set_on(&mut self, on: bool) {
            self.states.borrow_mut().push(on);
        }
    }

    fn rig(
        samples: &[u16],
        ticks: &[u64],
    ) -> (
        Acquisition<VecAdc, VecClock, VecOutput>,
        Rc<RefCell<Vec<String>>>,
        Log,
    ) {
        let log: Log = Rc::default();
        let lines = Rc::new(RefCell::new(Vec::new()));
        let acq = Acquisition::configure(
            VecAdc::new(samples, &log),
            VecClock {
                ticks: ticks.to_vec(),
                next: 0,
                log: log.clone(),
            },
            VecOutput {
                lines: lines.clone(),
                log: log.clone(),
                fail_next: false,
            },
        )
        .unwrap();
        (acq, lines, log)
    }

    #[test]
    fn test_setup_order() {
        let (_acq, _lines, log) = rig(&[], &[]);
        assert_eq!(*log.borrow(), ["adc_init", "temp_enable", "select"]);
    }

    #[test]
    fn test_iteration_order() {
        let (mut acq, _lines, log) = rig(&[1000], &[5]);
        log.borrow_mut().clear();
        acq.step();
        assert_eq!(*log.borrow(), ["read", "clock", "write"]);
    }

    #[test]
    fn test_emits_one_line_per_sample_in_order() {
        let samples = [0u16, 876, 2048, 4095, 900];
        let ticks = [10u64, 20, 30, 40, 1_000_000];
        let (mut acq, lines, _log) = rig(&samples, &ticks);

        let mut remaining = samples.len();
        let iterations = acq.run_until(|| {
            if remaining == 0 {
                return true;
            }
            remaining -= 1;
            false
        });

        assert_eq!(iterations, 5);
        assert_eq!(acq.samples_emitted(), 5);
        let lines = lines.borrow();
        assert_eq!(lines.len(), samples.len());
        for ((line, &raw), &ts) in lines.iter().zip(&samples).zip(&ticks) {
            let expected = format_sample_line(ts, convert_raw(raw, TEMPERATURE_UNIT.symbol())).unwrap();
            assert_eq!(line.as_str(), expected.as_str());
        }
    }

    #[test]
    fn test_raw_zero_line() {
        let (acq, lines, _log) = rig(&[0], &[1_000_000]);
        let sample = acq.with_unit(TemperatureUnit::Celsius).step().unwrap();
        assert_eq!(sample.timestamp_us, 1_000_000);
        assert_eq!(lines.borrow()[0], "1000000 437.23\n");
    }

    #[test]
    fn test_fahrenheit_override() {
        let (acq, lines, _log) = rig(&[0], &[7]);
        let mut acq = acq.with_unit(TemperatureUnit::Fahrenheit);
        assert_eq!(acq.unit(), TemperatureUnit::Fahrenheit);
        acq.step();
        assert_eq!(lines.borrow()[0], "7 819.01\n");
    }

    #[test]
    fn test_read_failure_skips_line() {
        let log: Log = Rc::default();
        let lines = Rc::new(RefCell::new(Vec::new()));
        let mut acq = Acquisition::configure(
            VecAdc::with_results(vec![Ok(100), Err(SensorError::ReadFailed), Ok(200)], &log),
            VecClock {
                ticks: vec![1, 3],
                next: 0,
                log: log.clone(),
            },
            VecOutput {
                lines: lines.clone(),
                log: log.clone(),
                fail_next: false,
            },
        )
        .unwrap();

        assert!(acq.step().is_some());
        assert!(acq.step().is_none());
        assert!(acq.step().is_some());
        assert_eq!(acq.read_failures(), 1);
        assert_eq!(acq.samples_emitted(), 2);
        assert_eq!(acq.last_raw_value(), Some(200));
        assert_eq!(lines.borrow().len(), 2);
    }

    #[test]
    fn test_write_failure_is_counted_and_loop_continues() {
        let (mut acq, lines, _log) = rig(&[100, 200], &[1, 2]);
        acq.output.fail_next = true;
        assert!(acq.step().is_none());
        assert!(acq.step().is_some());
        assert_eq!(acq.write_failures(), 1);
        assert_eq!(lines.borrow().len(), 1);
        assert!(lines.borrow()[0].starts_with("2 "));
    }

    #[test]
    fn test_stop_before_first_iteration() {
        let (mut acq, lines, log) = rig(&[], &[]);
        log.borrow_mut().clear();
        assert_eq!(acq.run_until(|| true), 0);
        assert!(lines.borrow().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_indicator_lights_after_setup() {
        let log: Log = Rc::default();
        let states = Rc::new(RefCell::new(Vec::new()));
        let mut acq = Acquisition::configure_with_indicator(
            VecAdc::new(&[], &log),
            VecClock {
                ticks: vec![],
                next: 0,
                log: log.clone(),
            },
            VecOutput {
                lines: Rc::default(),
                log: log.clone(),
                fail_next: false,
            },
            Led {
                states: states.clone(),
            },
        )
        .unwrap();
        assert_eq!(*states.borrow(), [false, true]);

        assert!(acq.release_indicator().is_some());
        assert!(acq.release_indicator().is_none());
        assert_eq!(*states.borrow(), [false, true, false]);
    }

    #[test]
    fn test_setup_error_propagates() {
        struct BrokenAdc;

        impl AdcPort for BrokenAdc {
            fn initialize(&mut self) -> Result<(), SensorError> {
                Err(SensorError::NotInitialized)
            }
            fn set_temperature_sensor_enabled(&mut self, _enabled: bool) {}
            fn select_input(&mut self, _channel: u8) -> Result<(), SensorError> {
                Ok(())
            }
            fn read(&mut self) -> Result<u16, SensorError> {
                Ok(0)
            }
        }

        let log: Log = Rc::default();
        let result = Acquisition::configure(
            BrokenAdc,
            VecClock {
                ticks: vec![],
                next: 0,
                log: log.clone(),
            },
            VecOutput {
                lines: Rc::default(),
                log,
                fail_next: false,
            },
        );
        assert!(matches!(result, Err(SensorError::NotInitialized)));
    }
}
