//! CO2 reader (Senseair S8-class NDIR part).
//!
//! The S8 reports 0 .. 10 000 ppm.  Readings above that are treated as
//! garbled frames; they and bus errors are logged and the last good value
//! is reported (0 ppm before the first good reading).

use log::warn;

use super::Co2Sensor;
use crate::error::{Result, SensorError};

/// Upper end of the sensor's measuring range.
const MAX_PPM: u16 = 10_000;

pub struct Co2Probe<S> {
    sensor: S,
    last_ppm: u16,
}

impl<S: Co2Sensor> Co2Probe<S> {
    pub fn new(sensor: S) -> Self {
        Self {
            sensor,
            last_ppm: 0,
        }
    }

    /// Take one sample, surfacing failures.
    pub fn try_read(&mut self) -> Result<u16> {
        let ppm = self.sensor.co2().map_err(|e| {
            warn!("co2 bus: {:?}", e);
            SensorError::BusReadFailed
        })?;
        if ppm > MAX_PPM {
            return Err(SensorError::OutOfRange(f32::from(ppm)).into());
        }
        self.last_ppm = ppm;
        Ok(ppm)
    }

    /// Take one sample, falling back to the last good reading.
    pub fn read(&mut self) -> u16 {
        match self.try_read() {
            Ok(ppm) => ppm,
            Err(e) => {
                warn!("co2: {}; holding {}ppm", e, self.last_ppm);
                self.last_ppm
            }
        }
    }

    pub fn last(&self) -> u16 {
        self.last_ppm
    }
}
