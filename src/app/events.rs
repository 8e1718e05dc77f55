//! Outbound application events.
//!
//! The [`RoomController`](super::controller::RoomController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them.

use crate::control::{FanState, LightState, WindowState};
use crate::error::ConfigError;

/// Structured events emitted by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The commanded light state changed.
    LightChanged { from: LightState, to: LightState },

    /// The commanded window position changed.
    WindowChanged { from: WindowState, to: WindowState },

    /// The commanded fan state changed.
    FanChanged { from: FanState, to: FanState },

    /// A new configuration was accepted.
    ConfigUpdated,

    /// A configuration update failed validation; the old one stays active.
    ConfigRejected(ConfigError),

    /// Point-in-time status, produced on request.
    Status(RoomStatus),
}

/// Snapshot of the controller: commanded states plus the most recent sample
/// of every sensor (`None` until the sensor was first read).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoomStatus {
    pub light: LightState,
    pub window: WindowState,
    pub fan: FanState,
    pub occupied: Option<bool>,
    pub enough_light: Option<bool>,
    pub indoor_c: Option<f32>,
    pub outdoor_c: Option<f32>,
    pub co2_ppm: Option<u16>,
}
