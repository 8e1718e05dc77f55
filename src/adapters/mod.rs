//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                        |
//! |-------------|--------------|------------------------------------|
//! | `hardware`  | SensorPort   | sensor hub (GPIO, I²C, UART)       |
//! |             | ActuatorPort | light/fan GPIO, window servo PWM   |
//! | `log_sink`  | EventSink    | `log` facade                       |

pub mod hardware;
pub mod log_sink;
