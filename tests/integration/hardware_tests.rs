//! End-to-end tests: RoomController → HardwareAdapter → embedded-hal pins.
//!
//! The fakes below stand in for GPIO, PWM and bus drivers.  They share
//! their state through `Rc<Cell<_>>` so a test can change a reading or
//! inspect an output after handing the peripheral to the adapter.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin, PinState};
use embedded_hal::pwm::{self, SetDutyCycle};
use smartroom::RoomController;
use smartroom::adapters::hardware::HardwareAdapter;
use smartroom::adapters::log_sink::LogEventSink;
use smartroom::app::commands::AppCommand;
use smartroom::sensors::{Co2Sensor, SensorHub, TemperatureSensor};

// ── Fake peripherals ─────────────────────────────────────────

/// Input pin; `None` in the cell makes the next read fail.
#[derive(Clone)]
struct FakeInput(Rc<Cell<Option<bool>>>);

impl ErrorType for FakeInput {
    type Error = ErrorKind;
}

impl InputPin for FakeInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.0.get().ok_or(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

#[derive(Clone)]
struct FakeOutput(Rc<Cell<PinState>>);

impl ErrorType for FakeOutput {
    type Error = ErrorKind;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(PinState::High);
        Ok(())
    }
}

/// 16-bit PWM channel (e.g. a PCA9685-style controller).
#[derive(Clone)]
struct FakePwm(Rc<Cell<u16>>);

impl pwm::ErrorType for FakePwm {
    type Error = pwm::ErrorKind;
}

impl SetDutyCycle for FakePwm {
    fn max_duty_cycle(&self) -> u16 {
        10_000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.0.set(duty);
        Ok(())
    }
}

/// Bus sensor; `None` in the cell is a failed transaction.
#[derive(Clone)]
struct FakeBus<T: Copy>(Rc<Cell<Option<T>>>);

impl TemperatureSensor for FakeBus<f32> {
    type Error = ();

    fn temperature(&mut self) -> Result<f32, Self::Error> {
        self.0.get().ok_or(())
    }
}

impl Co2Sensor for FakeBus<u16> {
    type Error = ();

    fn co2(&mut self) -> Result<u16, Self::Error> {
        self.0.get().ok_or(())
    }
}

// ── Rig ──────────────────────────────────────────────────────

struct Rig {
    occupied: Rc<Cell<Option<bool>>>,
    bright: Rc<Cell<Option<bool>>>,
    indoor: Rc<Cell<Option<f32>>>,
    outdoor: Rc<Cell<Option<f32>>>,
    co2: Rc<Cell<Option<u16>>>,
    light: Rc<Cell<PinState>>,
    fan: Rc<Cell<PinState>>,
    servo: Rc<Cell<u16>>,
}

type Hub = SensorHub<FakeInput, FakeInput, FakeBus<f32>, FakeBus<f32>, FakeBus<u16>>;
type Hw = HardwareAdapter<Hub, FakeOutput, FakeOutput, FakePwm>;

fn make_rig() -> (Rig, RoomController<Hw, LogEventSink>) {
    let rig = Rig {
        occupied: Rc::new(Cell::new(Some(false))),
        bright: Rc::new(Cell::new(Some(false))),
        indoor: Rc::new(Cell::new(Some(22.0))),
        outdoor: Rc::new(Cell::new(Some(22.0))),
        co2: Rc::new(Cell::new(Some(420))),
        light: Rc::new(Cell::new(PinState::Low)),
        fan: Rc::new(Cell::new(PinState::Low)),
        servo: Rc::new(Cell::new(0)),
    };

    let hub = SensorHub::new(
        FakeInput(rig.occupied.clone()),
        FakeInput(rig.bright.clone()),
        FakeBus(rig.indoor.clone()),
        FakeBus(rig.outdoor.clone()),
        FakeBus(rig.co2.clone()),
    );
    let hw = HardwareAdapter::new(
        hub,
        FakeOutput(rig.light.clone()),
        FakeOutput(rig.fan.clone()),
        FakePwm(rig.servo.clone()),
    );
    (rig, RoomController::new(hw, LogEventSink::new()))
}

// ── Tests ────────────────────────────────────────────────────

#[test]
fn occupied_dark_room_drives_light_pin_high() {
    let (rig, mut c) = make_rig();
    rig.occupied.set(Some(true));

    c.manage_light_level();

    assert_eq!(rig.light.get(), PinState::High);
    assert!(c.light_on());
    assert!(c.hardware().light().is_on());
}

#[test]
fn open_window_drives_servo_to_twelve_percent() {
    let (rig, mut c) = make_rig();
    rig.indoor.set(Some(20.0));
    rig.outdoor.set(Some(25.0));

    c.manage_window();

    assert_eq!(rig.servo.get(), 1_200);
    assert!((c.hardware().servo().pulse_width_us() - 2_400.0).abs() < 0.01);
}

#[test]
fn closed_window_drives_servo_to_two_percent() {
    let (rig, mut c) = make_rig();
    rig.indoor.set(Some(25.0));
    rig.outdoor.set(Some(20.0));

    c.manage_window();

    assert_eq!(rig.servo.get(), 200);
    assert!(!c.window_open());
}

#[test]
fn co2_threshold_drives_fan_pin() {
    let (rig, mut c) = make_rig();
    rig.co2.set(Some(500));
    c.monitor_air_quality();
    assert_eq!(rig.fan.get(), PinState::High);

    rig.co2.set(Some(499));
    c.monitor_air_quality();
    assert_eq!(rig.fan.get(), PinState::Low);
}

#[test]
fn failed_pir_read_holds_last_level() {
    let (rig, mut c) = make_rig();
    rig.occupied.set(Some(true));
    c.manage_light_level();
    assert!(c.light_on());

    rig.occupied.set(None);
    c.manage_light_level();
    assert!(c.light_on(), "a failed read must not switch the light off");
    assert_eq!(rig.light.get(), PinState::High);
}

#[test]
fn temperature_bus_failure_before_first_reading_keeps_window_closed() {
    let (rig, mut c) = make_rig();
    rig.indoor.set(None);
    rig.outdoor.set(Some(28.0));

    c.manage_window();

    assert!(!c.window_open());
    assert_eq!(rig.servo.get(), 200);
}

#[test]
fn temperature_bus_failure_reuses_last_good_reading() {
    let (rig, mut c) = make_rig();
    rig.indoor.set(Some(19.0));
    rig.outdoor.set(Some(26.0));
    c.manage_window();
    assert!(c.window_open());

    rig.outdoor.set(None);
    c.manage_window();
    assert!(c.window_open());
    assert_eq!(c.status().outdoor_c, Some(26.0));
}

#[test]
fn evaluate_all_through_real_adapter() {
    let (rig, mut c) = make_rig();
    rig.occupied.set(Some(true));
    rig.bright.set(Some(true));
    rig.indoor.set(Some(29.0));
    rig.outdoor.set(Some(18.0));
    rig.co2.set(Some(1_250));

    c.handle_command(AppCommand::EvaluateAll);
    c.handle_command(AppCommand::ReportStatus);

    assert_eq!(rig.light.get(), PinState::Low);
    assert_eq!(rig.servo.get(), 200);
    assert_eq!(rig.fan.get(), PinState::High);
    assert!(!c.light_on());
    assert!(!c.window_open());
    assert!(c.fan_on());
}
