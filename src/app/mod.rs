//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the SmartRoom controller: it samples sensors,
//! consults the rules in [`crate::control`], and commands actuators.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod controller;
pub mod events;
pub mod ports;
