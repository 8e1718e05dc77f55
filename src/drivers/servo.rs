//! Window servo driver.
//!
//! Takes a duty cycle in percent of the 50 Hz frame and maps it onto the
//! native resolution of any `embedded-hal` [`SetDutyCycle`] channel.  The
//! channel itself must already be configured for
//! [`SERVO_PWM_FREQ_HZ`](crate::pins::SERVO_PWM_FREQ_HZ).

use embedded_hal::pwm::{Error as _, SetDutyCycle};
use log::warn;

use crate::error::{ActuatorError, Result};
use crate::pins::SERVO_PWM_FREQ_HZ;

pub struct ServoDriver<P> {
    pwm: P,
    duty_percent: f32,
}

impl<P: SetDutyCycle> ServoDriver<P> {
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            duty_percent: 0.0,
        }
    }

    /// Set the duty cycle, surfacing failures.  Values are clamped to
    /// 0..=100 %.
    pub fn try_set_duty(&mut self, duty_percent: f32) -> Result<()> {
        let duty_percent = duty_percent.clamp(0.0, 100.0);
        self.duty_percent = duty_percent;

        let max = f32::from(self.pwm.max_duty_cycle());
        let ticks = (duty_percent / 100.0 * max).round() as u16;
        self.pwm.set_duty_cycle(ticks).map_err(|e| {
            warn!("servo pwm: {:?}", e.kind());
            ActuatorError::PwmWriteFailed.into()
        })
    }

    /// Set the duty cycle; a failure is logged and otherwise ignored.
    pub fn set_duty(&mut self, duty_percent: f32) {
        if let Err(e) = self.try_set_duty(duty_percent) {
            warn!("servo: {}", e);
        }
    }

    /// Duty cycle most recently commanded, in percent.
    pub fn duty_percent(&self) -> f32 {
        self.duty_percent
    }

    /// High time of the commanded pulse in microseconds.
    pub fn pulse_width_us(&self) -> f32 {
        let period_us = 1_000_000.0 / SERVO_PWM_FREQ_HZ as f32;
        self.duty_percent / 100.0 * period_us
    }
}
