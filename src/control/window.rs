//! Window rule and servo geometry.
//!
//! ## Rule (evaluated in priority order)
//!
//! 1. Either temperature outside `[window_min_temp_c, window_max_temp_c]`
//!    (inclusive) → close.
//! 2. Indoor colder than outdoor by more than the dead-band → open.
//! 3. Indoor warmer than outdoor by more than the dead-band → close.
//! 4. Otherwise hold the last commanded position.
//!
//! ## Servo
//!
//! Standard hobby servo on a 50 Hz carrier: 0° = closed, 180° = open,
//! `duty % = angle / 18 + 2` (0.4 ms .. 2.4 ms pulse).

use crate::config::ControllerConfig;

/// Commanded position of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Closed,
    Open,
}

impl WindowState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Servo angle (degrees) for this position.
    pub fn angle(self, config: &ControllerConfig) -> f32 {
        match self {
            Self::Open => config.servo_open_angle_deg,
            Self::Closed => config.servo_closed_angle_deg,
        }
    }
}

/// Outcome of one evaluation of the window rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDecision {
    /// A temperature is outside the allowed range.
    ForceClosed,
    /// Outdoor air is warmer than indoor by more than the dead-band.
    Open,
    /// Indoor air is warmer than outdoor by more than the dead-band.
    Close,
    /// Inside the dead-band: keep the previous position, no servo command.
    Hold,
}

impl WindowDecision {
    /// Resolve the decision into a position, given the previous one.
    pub fn target(self, prior: WindowState) -> WindowState {
        match self {
            Self::ForceClosed | Self::Close => WindowState::Closed,
            Self::Open => WindowState::Open,
            Self::Hold => prior,
        }
    }

    /// Whether the servo has to be driven for this decision.
    pub fn commands_servo(self) -> bool {
        !matches!(self, Self::Hold)
    }
}

/// Evaluate the window rule for one indoor/outdoor sample pair.
///
/// NaN readings never satisfy the range check and therefore close the
/// window.
pub fn decide(indoor_c: f32, outdoor_c: f32, config: &ControllerConfig) -> WindowDecision {
    let range = config.window_min_temp_c..=config.window_max_temp_c;
    if !range.contains(&indoor_c) || !range.contains(&outdoor_c) {
        return WindowDecision::ForceClosed;
    }

    let band = config.window_deadband_c;
    if indoor_c < outdoor_c - band {
        WindowDecision::Open
    } else if indoor_c > outdoor_c + band {
        WindowDecision::Close
    } else {
        WindowDecision::Hold
    }
}

/// Convert a servo angle (degrees) into a PWM duty cycle (percent).
pub fn angle_to_duty(angle_deg: f32) -> f32 {
    angle_deg / 18.0 + 2.0
}
