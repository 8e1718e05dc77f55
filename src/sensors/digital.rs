//! Active-HIGH digital sensor (PIR occupancy, photoresistor comparator).
//!
//! Wraps any `embedded-hal` [`InputPin`].  A failed sample is logged and
//! the last good level is reported instead; before the first good sample
//! that level is LOW.

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::error::{Result, SensorError};

pub struct DigitalSensor<P> {
    pin: P,
    name: &'static str,
    last: bool,
}

impl<P: InputPin> DigitalSensor<P> {
    pub fn new(pin: P, name: &'static str) -> Self {
        Self {
            pin,
            name,
            last: false,
        }
    }

    /// Sample the pin once, surfacing failures.
    pub fn try_read(&mut self) -> Result<bool> {
        let high = self.pin.is_high().map_err(|e| {
            warn!("{} pin: {:?}", self.name, e.kind());
            SensorError::GpioReadFailed
        })?;
        self.last = high;
        Ok(high)
    }

    /// Sample the pin once, falling back to the last good level.
    pub fn read(&mut self) -> bool {
        match self.try_read() {
            Ok(high) => high,
            Err(e) => {
                warn!("{} sensor: {}; holding {}", self.name, e, self.last);
                self.last
            }
        }
    }

    /// Last successfully sampled level.
    pub fn last(&self) -> bool {
        self.last
    }
}
