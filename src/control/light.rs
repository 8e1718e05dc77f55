//! Room light rule.
//!
//! The light is wanted only while someone is in the room and the ambient
//! light is insufficient.

use embedded_hal::digital::PinState;

/// Commanded state of the room light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightState {
    #[default]
    Off,
    On,
}

impl LightState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Output level for the light pin (active HIGH).
    pub fn level(self) -> PinState {
        match self {
            Self::On => PinState::High,
            Self::Off => PinState::Low,
        }
    }
}

/// Decide the light state from an occupancy and a light-level sample.
pub fn decide(occupied: bool, enough_light: bool) -> LightState {
    if occupied && !enough_light {
        LightState::On
    } else {
        LightState::Off
    }
}
