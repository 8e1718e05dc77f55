//! Inbound commands to the controller.
//!
//! These represent actions requested by whatever polls the controller (a
//! timer loop, a button, a remote shell) and are interpreted by
//! [`RoomController::handle_command`](super::controller::RoomController::handle_command).

use crate::config::ControllerConfig;

/// Commands that external callers can send into the controller.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Re-evaluate the light.
    ManageLight,

    /// Re-evaluate the window.
    ManageWindow,

    /// Re-evaluate the ventilation fan.
    MonitorAirQuality,

    /// Light, then window, then air quality.
    EvaluateAll,

    /// Replace the active configuration (validated first).
    UpdateConfig(ControllerConfig),

    /// Emit an [`AppEvent::Status`](super::events::AppEvent::Status).
    ReportStatus,
}
