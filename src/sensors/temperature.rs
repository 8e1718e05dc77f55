//! Air-temperature reader (BMP280-class part, one per placement).
//!
//! The BMP280 is specified for -40 .. 85 °C; anything outside that window
//! (or NaN) is treated as a bad sample.  Bad samples and bus errors are
//! logged and the last good reading is reported.  Before the first good
//! reading the fallback is 0 °C, which lies outside the window rule's
//! comfort range and therefore keeps the window closed.

use core::ops::RangeInclusive;

use log::warn;

use super::TemperatureSensor;
use crate::error::{Result, SensorError};

/// Plausible operating range of the sensor.
const PLAUSIBLE_C: RangeInclusive<f32> = -40.0..=85.0;

pub struct TemperatureProbe<S> {
    sensor: S,
    placement: &'static str,
    last_c: f32,
}

impl<S: TemperatureSensor> TemperatureProbe<S> {
    pub fn new(sensor: S, placement: &'static str) -> Self {
        Self {
            sensor,
            placement,
            last_c: 0.0,
        }
    }

    /// Take one sample, surfacing failures.
    pub fn try_read(&mut self) -> Result<f32> {
        let celsius = self.sensor.temperature().map_err(|e| {
            warn!("{} temperature bus: {:?}", self.placement, e);
            SensorError::BusReadFailed
        })?;
        if !PLAUSIBLE_C.contains(&celsius) {
            return Err(SensorError::OutOfRange(celsius).into());
        }
        self.last_c = celsius;
        Ok(celsius)
    }

    /// Take one sample, falling back to the last good reading.
    pub fn read(&mut self) -> f32 {
        match self.try_read() {
            Ok(celsius) => celsius,
            Err(e) => {
                warn!(
                    "{} temperature: {}; holding {:.1}C",
                    self.placement, e, self.last_c
                );
                self.last_c
            }
        }
    }

    /// Last good reading in Celsius.
    pub fn last(&self) -> f32 {
        self.last_c
    }
}
