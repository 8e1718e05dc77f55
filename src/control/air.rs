//! Ventilation fan rule: run the fan while CO2 is at or above the threshold.

use embedded_hal::digital::PinState;

/// Commanded state of the ventilation fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanState {
    #[default]
    Off,
    On,
}

impl FanState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Output level for the fan relay (active HIGH).
    pub fn level(self) -> PinState {
        match self {
            Self::On => PinState::High,
            Self::Off => PinState::Low,
        }
    }
}

/// Decide the fan state from a CO2 sample.  The threshold itself counts
/// as "on"; only readings strictly below it turn the fan off.
pub fn decide(co2_ppm: u16, threshold_ppm: u16) -> FanState {
    if co2_ppm < threshold_ppm {
        FanState::Off
    } else {
        FanState::On
    }
}
