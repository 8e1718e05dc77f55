//! Port traits: the hexagonal boundary between decision logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RoomController (domain)
//! ```
//!
//! Driven adapters (sensor hub, output drivers, event sinks) implement these
//! traits.  The [`RoomController`](super::controller::RoomController) owns
//! them via generics, so the domain core never touches a register.
//!
//! Ports are infallible by contract: a read always yields a value and a
//! write always "succeeds" from the controller's point of view.  Retry,
//! fallback and error logging belong to the adapter behind the port.

use embedded_hal::digital::PinState;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: every call samples the underlying sensor exactly once.
pub trait SensorPort {
    /// Infrared occupancy sensor, active HIGH (`true` = room occupied).
    fn occupancy(&mut self) -> bool;

    /// Light-level sensor, active HIGH (`true` = enough ambient light).
    fn enough_light(&mut self) -> bool;

    /// Indoor air temperature in Celsius.
    fn indoor_temperature(&mut self) -> f32;

    /// Outdoor air temperature in Celsius.
    fn outdoor_temperature(&mut self) -> f32;

    /// CO2 concentration in ppm.
    fn co2_ppm(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Drive the light output pin.
    fn write_light(&mut self, level: PinState);

    /// Drive the ventilation fan output pin.
    fn write_fan(&mut self, level: PinState);

    /// Set the window servo duty cycle, in percent of the 50 Hz period.
    fn set_servo_duty(&mut self, duty_percent: f32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
