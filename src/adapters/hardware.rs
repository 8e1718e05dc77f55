//! Hardware adapter: bridges real peripherals to the domain port traits.
//!
//! Owns the sensor side (anything implementing [`SensorPort`], normally a
//! [`SensorHub`](crate::sensors::SensorHub)) and the three actuator
//! drivers, exposing them through [`SensorPort`] and [`ActuatorPort`].
//! This is the only place where the room's peripherals meet the
//! controller.

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::servo::ServoDriver;
use crate::drivers::switch::SwitchDriver;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<S, L, F, W> {
    sensors: S,
    light: SwitchDriver<L>,
    fan: SwitchDriver<F>,
    servo: ServoDriver<W>,
}

impl<S, L, F, W> HardwareAdapter<S, L, F, W>
where
    S: SensorPort,
    L: OutputPin,
    F: OutputPin,
    W: SetDutyCycle,
{
    pub fn new(sensors: S, light_pin: L, fan_pin: F, servo_pwm: W) -> Self {
        Self {
            sensors,
            light: SwitchDriver::new(light_pin, "light"),
            fan: SwitchDriver::new(fan_pin, "fan"),
            servo: ServoDriver::new(servo_pwm),
        }
    }

    pub fn sensors(&self) -> &S {
        &self.sensors
    }

    pub fn light(&self) -> &SwitchDriver<L> {
        &self.light
    }

    pub fn fan(&self) -> &SwitchDriver<F> {
        &self.fan
    }

    pub fn servo(&self) -> &ServoDriver<W> {
        &self.servo
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<S, L, F, W> SensorPort for HardwareAdapter<S, L, F, W>
where
    S: SensorPort,
{
    fn occupancy(&mut self) -> bool {
        self.sensors.occupancy()
    }

    fn enough_light(&mut self) -> bool {
        self.sensors.enough_light()
    }

    fn indoor_temperature(&mut self) -> f32 {
        self.sensors.indoor_temperature()
    }

    fn outdoor_temperature(&mut self) -> f32 {
        self.sensors.outdoor_temperature()
    }

    fn co2_ppm(&mut self) -> u16 {
        self.sensors.co2_ppm()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<S, L, F, W> ActuatorPort for HardwareAdapter<S, L, F, W>
where
    L: OutputPin,
    F: OutputPin,
    W: SetDutyCycle,
{
    fn write_light(&mut self, level: PinState) {
        self.light.set(level);
    }

    fn write_fan(&mut self, level: PinState) {
        self.fan.set(level);
    }

    fn set_servo_duty(&mut self, duty_percent: f32) {
        self.servo.set_duty(duty_percent);
    }
}
