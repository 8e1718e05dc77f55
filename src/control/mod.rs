//! Pure decision rules, one module per actuator.
//!
//! Nothing in here touches a port: each rule maps readings (and, for the
//! window, the previous state) to the state the actuator should be in.
//! [`RoomController`](crate::app::controller::RoomController) samples the
//! sensors, asks these rules, and applies the result.

pub mod air;
pub mod light;
pub mod window;

pub use air::FanState;
pub use light::LightState;
pub use window::WindowState;
