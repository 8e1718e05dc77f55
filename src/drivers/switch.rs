//! On/off output driver (room light, fan relay).
//!
//! A dumb actuator over any `embedded-hal` [`OutputPin`]: it records the
//! level it was last asked for, whether or not the pin write went through.
//! Failed writes are logged; retrying is left to the next command.

use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::warn;

use crate::error::{ActuatorError, Result};

pub struct SwitchDriver<P> {
    pin: P,
    name: &'static str,
    commanded: PinState,
}

impl<P: OutputPin> SwitchDriver<P> {
    pub fn new(pin: P, name: &'static str) -> Self {
        Self {
            pin,
            name,
            commanded: PinState::Low,
        }
    }

    /// Drive the pin, surfacing failures.
    pub fn try_set(&mut self, level: PinState) -> Result<()> {
        self.commanded = level;
        self.pin.set_state(level).map_err(|e| {
            warn!("{} pin: {:?}", self.name, e.kind());
            ActuatorError::GpioWriteFailed.into()
        })
    }

    /// Drive the pin; a failure is logged and otherwise ignored.
    pub fn set(&mut self, level: PinState) {
        if let Err(e) = self.try_set(level) {
            warn!("{} output: {}", self.name, e);
        }
    }

    /// Level most recently commanded.
    pub fn commanded(&self) -> PinState {
        self.commanded
    }

    pub fn is_on(&self) -> bool {
        self.commanded == PinState::High
    }
}
