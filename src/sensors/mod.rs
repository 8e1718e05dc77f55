//! Sensor subsystem: per-peripheral readers and the aggregating [`SensorHub`].
//!
//! Each reader wraps one driver and turns its fallible reads into the
//! always-available values the [`SensorPort`] contract promises: a failed
//! or implausible read is logged and the previous good value is retained,
//! so a single flaky sensor cannot stall the controller.

pub mod co2;
pub mod digital;
pub mod temperature;

use crate::app::ports::SensorPort;
use co2::Co2Probe;
use digital::DigitalSensor;
use embedded_hal::digital::InputPin;
use temperature::TemperatureProbe;

// ───────────────────────────────────────────────────────────────
// Driver traits for bus-attached sensors
// ───────────────────────────────────────────────────────────────

/// An air-temperature sensor (e.g. BMP280 on I²C).
pub trait TemperatureSensor {
    type Error: core::fmt::Debug;

    /// Current temperature in Celsius.
    fn temperature(&mut self) -> Result<f32, Self::Error>;
}

/// A CO2 sensor (e.g. Senseair S8 on Modbus/UART).
pub trait Co2Sensor {
    type Error: core::fmt::Debug;

    /// Current CO2 concentration in ppm.
    fn co2(&mut self) -> Result<u16, Self::Error>;
}

// ───────────────────────────────────────────────────────────────
// SensorHub
// ───────────────────────────────────────────────────────────────

/// Owns every sensor reader of the room and serves the [`SensorPort`].
pub struct SensorHub<O, L, TI, TO, C> {
    pub occupancy: DigitalSensor<O>,
    pub light: DigitalSensor<L>,
    pub indoor: TemperatureProbe<TI>,
    pub outdoor: TemperatureProbe<TO>,
    pub co2: Co2Probe<C>,
}

impl<O, L, TI, TO, C> SensorHub<O, L, TI, TO, C>
where
    O: InputPin,
    L: InputPin,
    TI: TemperatureSensor,
    TO: TemperatureSensor,
    C: Co2Sensor,
{
    /// Construct a new hub from raw drivers (built by the caller, where
    /// peripheral ownership is established).
    pub fn new(occupancy_pin: O, light_pin: L, indoor: TI, outdoor: TO, co2: C) -> Self {
        Self {
            occupancy: DigitalSensor::new(occupancy_pin, "occupancy"),
            light: DigitalSensor::new(light_pin, "light level"),
            indoor: TemperatureProbe::new(indoor, "indoor"),
            outdoor: TemperatureProbe::new(outdoor, "outdoor"),
            co2: Co2Probe::new(co2),
        }
    }
}

impl<O, L, TI, TO, C> SensorPort for SensorHub<O, L, TI, TO, C>
where
    O: InputPin,
    L: InputPin,
    TI: TemperatureSensor,
    TO: TemperatureSensor,
    C: Co2Sensor,
{
    fn occupancy(&mut self) -> bool {
        self.occupancy.read()
    }

    fn enough_light(&mut self) -> bool {
        self.light.read()
    }

    fn indoor_temperature(&mut self) -> f32 {
        self.indoor.read()
    }

    fn outdoor_temperature(&mut self) -> f32 {
        self.outdoor.read()
    }

    fn co2_ppm(&mut self) -> u16 {
        self.co2.read()
    }
}

// ───────────────────────────────────────────────────────────────
// Test doubles shared by the reader tests
// ───────────────────────────────────────────────────────────────
