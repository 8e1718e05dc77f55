//! Controller configuration parameters
//!
//! All tunable thresholds for the SmartRoom rules.  Defaults reproduce the
//! fixed behaviour of the reference installation; a deployment may override
//! them from a JSON document.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // --- Window ---
    /// Lowest indoor/outdoor temperature (Celsius) at which the window may open
    pub window_min_temp_c: f32,
    /// Highest indoor/outdoor temperature (Celsius) at which the window may open
    pub window_max_temp_c: f32,
    /// Half-width of the indoor/outdoor dead-band (Celsius)
    pub window_deadband_c: f32,

    // --- Servo ---
    /// Servo angle (degrees) for a fully closed window
    pub servo_closed_angle_deg: f32,
    /// Servo angle (degrees) for a fully open window
    pub servo_open_angle_deg: f32,

    // --- Air quality ---
    /// CO2 concentration (ppm) at or above which the fan runs
    pub co2_fan_threshold_ppm: u16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Window
            window_min_temp_c: 18.0,
            window_max_temp_c: 30.0,
            window_deadband_c: 2.0,

            // Servo
            servo_closed_angle_deg: 0.0,
            servo_open_angle_deg: 180.0,

            // Air quality
            co2_fan_threshold_ppm: 500,
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON document and validate the result.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Malformed {
            line: e.line(),
            column: e.column(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the rules meaningless.
    ///
    /// Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.window_min_temp_c.is_finite() || !self.window_max_temp_c.is_finite() {
            return Err(ConfigError::ValidationFailed(
                "window temperature bounds must be finite",
            ));
        }
        if self.window_min_temp_c >= self.window_max_temp_c {
            return Err(ConfigError::ValidationFailed(
                "window_min_temp_c must be below window_max_temp_c",
            ));
        }
        if !self.window_deadband_c.is_finite() || self.window_deadband_c < 0.0 {
            return Err(ConfigError::ValidationFailed(
                "window_deadband_c must be a non-negative number",
            ));
        }
        for angle in [self.servo_closed_angle_deg, self.servo_open_angle_deg] {
            if !(0.0..=180.0).contains(&angle) {
                return Err(ConfigError::ValidationFailed(
                    "servo angles must lie within 0..=180 degrees",
                ));
            }
        }
        if self.co2_fan_threshold_ppm == 0 {
            return Err(ConfigError::ValidationFailed(
                "co2_fan_threshold_ppm must be above zero",
            ));
        }
        Ok(())
    }
}
