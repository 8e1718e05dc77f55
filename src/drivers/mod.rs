//! Actuator drivers over `embedded-hal` outputs.

pub mod servo;
pub mod switch;
