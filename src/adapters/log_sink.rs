//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every controller event as a single
//! line through the `log` facade.  Whichever logger backend the caller
//! installs decides where the lines end up.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::LightChanged { from, to } => {
                info!("LIGHT | {:?} -> {:?}", from, to);
            }
            AppEvent::WindowChanged { from, to } => {
                info!("WINDOW | {:?} -> {:?}", from, to);
            }
            AppEvent::FanChanged { from, to } => {
                info!("FAN | {:?} -> {:?}", from, to);
            }
            AppEvent::ConfigUpdated => {
                info!("CONFIG | updated");
            }
            AppEvent::ConfigRejected(e) => {
                warn!("CONFIG | rejected: {}", e);
            }
            AppEvent::Status(s) => {
                info!(
                    "STATUS | light={:?} window={:?} fan={:?} | occupied={:?} \
                     enough_light={:?} | in={:?}\u{00b0}C out={:?}\u{00b0}C | co2={:?}ppm",
                    s.light,
                    s.window,
                    s.fan,
                    s.occupied,
                    s.enough_light,
                    s.indoor_c,
                    s.outdoor_c,
                    s.co2_ppm,
                );
            }
        }
    }
}
