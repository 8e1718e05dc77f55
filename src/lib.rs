//! SmartRoom controller library.
//!
//! Decides the state of a room's light, window servo and ventilation fan
//! from occupancy, light-level, temperature and CO2 readings.  The decision
//! core ([`app`], [`control`]) is hardware-agnostic; [`sensors`],
//! [`drivers`] and [`adapters`] connect it to `embedded-hal` peripherals.
//! Scheduling and process wiring belong to the caller.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod pins;

pub mod adapters;
pub mod drivers;
pub mod sensors;

pub use app::controller::RoomController;
