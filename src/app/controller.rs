//! Room controller: the hexagonal core.
//!
//! [`RoomController`] owns the hardware ports, the event sink, the active
//! configuration and the last commanded state of each actuator.  Every
//! public operation runs to completion synchronously; the caller decides
//! when (and how often) to invoke them.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │      RoomController      │
//! ActuatorPort ◀──│  light · window · air    │
//!                 └──────────────────────────┘
//! ```
//!
//! The controller never reads actuator status back: `light_on`,
//! `window_open` and `fan_on` report what was last *commanded*.

use log::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::control::window::{self, WindowDecision};
use crate::control::{FanState, LightState, WindowState, air, light};
use crate::error::Result;

use super::commands::AppCommand;
use super::events::{AppEvent, RoomStatus};
use super::ports::{ActuatorPort, EventSink, SensorPort};

/// Most recent sensor samples taken by a management operation.
#[derive(Debug, Clone, Copy, Default)]
struct Samples {
    occupied: Option<bool>,
    enough_light: Option<bool>,
    indoor_c: Option<f32>,
    outdoor_c: Option<f32>,
    co2_ppm: Option<u16>,
}

// ───────────────────────────────────────────────────────────────
// RoomController
// ───────────────────────────────────────────────────────────────

/// Single-room environmental controller.
///
/// `H` satisfies **both** [`SensorPort`] and [`ActuatorPort`] so one
/// hardware handle serves reads and writes without a double borrow.
pub struct RoomController<H, E> {
    hw: H,
    sink: E,
    config: ControllerConfig,
    light: LightState,
    window: WindowState,
    fan: FanState,
    samples: Samples,
}

impl<H, E> RoomController<H, E>
where
    H: SensorPort + ActuatorPort,
    E: EventSink,
{
    /// Construct a controller with the default configuration.
    ///
    /// All actuators are assumed off / closed until first evaluated.
    pub fn new(hw: H, sink: E) -> Self {
        Self {
            hw,
            sink,
            config: ControllerConfig::default(),
            light: LightState::Off,
            window: WindowState::Closed,
            fan: FanState::Off,
            samples: Samples::default(),
        }
    }

    /// Construct a controller with a custom configuration.
    ///
    /// The configuration is validated first; an invalid one is returned as
    /// [`Error::Config`](crate::error::Error::Config).
    pub fn with_config(hw: H, sink: E, config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        let mut controller = Self::new(hw, sink);
        controller.config = config;
        Ok(controller)
    }

    // ── Sensing queries ───────────────────────────────────────

    /// Sample the occupancy sensor once.  Does not touch controller state.
    pub fn check_room_occupancy(&mut self) -> bool {
        self.hw.occupancy()
    }

    /// Sample the light-level sensor once.  Does not touch controller state.
    pub fn check_enough_light(&mut self) -> bool {
        self.hw.enough_light()
    }

    // ── Management operations ─────────────────────────────────

    /// Turn the light on when the room is occupied and too dark, off
    /// otherwise.  Both sensors are sampled on every call, occupancy first,
    /// and exactly one write reaches the light pin.
    pub fn manage_light_level(&mut self) {
        let occupied = self.check_room_occupancy();
        let enough_light = self.check_enough_light();
        self.samples.occupied = Some(occupied);
        self.samples.enough_light = Some(enough_light);

        let target = light::decide(occupied, enough_light);
        debug!(
            "light: occupied={} enough_light={} -> {:?}",
            occupied, enough_light, target
        );

        self.hw.write_light(target.level());

        let prev = self.light;
        self.light = target;
        if prev != target {
            info!("Light {:?} -> {:?}", prev, target);
            self.sink.emit(&AppEvent::LightChanged {
                from: prev,
                to: target,
            });
        }
    }

    /// Open or close the window from an indoor/outdoor temperature pair.
    ///
    /// Inside the dead-band the window keeps its last commanded position
    /// and the servo is left alone.
    pub fn manage_window(&mut self) {
        let indoor = self.hw.indoor_temperature();
        let outdoor = self.hw.outdoor_temperature();
        self.samples.indoor_c = Some(indoor);
        self.samples.outdoor_c = Some(outdoor);

        let decision = window::decide(indoor, outdoor, &self.config);
        let target = decision.target(self.window);
        debug!(
            "window: indoor={:.1}C outdoor={:.1}C -> {:?} ({:?})",
            indoor, outdoor, decision, target
        );

        if decision.commands_servo() {
            let duty = window::angle_to_duty(target.angle(&self.config));
            self.hw.set_servo_duty(duty);
        }

        let prev = self.window;
        self.window = target;
        if prev != target {
            if decision == WindowDecision::ForceClosed {
                info!(
                    "Window forced closed: temperature outside {:.1}..={:.1}C",
                    self.config.window_min_temp_c, self.config.window_max_temp_c
                );
            } else {
                info!("Window {:?} -> {:?}", prev, target);
            }
            self.sink.emit(&AppEvent::WindowChanged {
                from: prev,
                to: target,
            });
        }
    }

    /// Run the fan while CO2 is at or above the configured threshold.
    pub fn monitor_air_quality(&mut self) {
        let ppm = self.hw.co2_ppm();
        self.samples.co2_ppm = Some(ppm);

        let target = air::decide(ppm, self.config.co2_fan_threshold_ppm);
        debug!("air: co2={}ppm -> {:?}", ppm, target);

        self.hw.write_fan(target.level());

        let prev = self.fan;
        self.fan = target;
        if prev != target {
            info!("Fan {:?} -> {:?} (co2={}ppm)", prev, target, ppm);
            self.sink.emit(&AppEvent::FanChanged {
                from: prev,
                to: target,
            });
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.
    pub fn handle_command(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::ManageLight => self.manage_light_level(),
            AppCommand::ManageWindow => self.manage_window(),
            AppCommand::MonitorAirQuality => self.monitor_air_quality(),
            AppCommand::EvaluateAll => {
                self.manage_light_level();
                self.manage_window();
                self.monitor_air_quality();
            }
            AppCommand::UpdateConfig(new_config) => match new_config.validate() {
                Ok(()) => {
                    self.config = new_config;
                    info!("Configuration updated at runtime");
                    self.sink.emit(&AppEvent::ConfigUpdated);
                }
                Err(e) => {
                    warn!("Configuration rejected: {}", e);
                    self.sink.emit(&AppEvent::ConfigRejected(e));
                }
            },
            AppCommand::ReportStatus => {
                let status = self.status();
                self.sink.emit(&AppEvent::Status(status));
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whether the light was last commanded on.
    pub fn light_on(&self) -> bool {
        self.light.is_on()
    }

    /// Whether the window was last commanded open.
    pub fn window_open(&self) -> bool {
        self.window.is_open()
    }

    /// Whether the fan was last commanded on.
    pub fn fan_on(&self) -> bool {
        self.fan.is_on()
    }

    pub fn light_state(&self) -> LightState {
        self.light
    }

    pub fn window_state(&self) -> WindowState {
        self.window
    }

    pub fn fan_state(&self) -> FanState {
        self.fan
    }

    /// Build a status snapshot from the current state and last samples.
    pub fn status(&self) -> RoomStatus {
        RoomStatus {
            light: self.light,
            window: self.window,
            fan: self.fan,
            occupied: self.samples.occupied,
            enough_light: self.samples.enough_light,
            indoor_c: self.samples.indoor_c,
            outdoor_c: self.samples.outdoor_c,
            co2_ppm: self.samples.co2_ppm,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Borrow the hardware handle.
    pub fn hardware(&self) -> &H {
        &self.hw
    }

    /// Mutably borrow the hardware handle (e.g. to reconfigure a driver).
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Borrow the event sink.
    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// Tear the controller down, handing back its collaborators.
    pub fn into_parts(self) -> (H, E) {
        (self.hw, self.sink)
    }
}
