//! Pin and bus assignments for the reference SmartRoom wiring.
//!
//! Single source of truth for whoever wires the adapters at startup.  Pin
//! numbers use the physical BOARD numbering of the 40-pin header.

// ---------------------------------------------------------------------------
// Digital inputs (active HIGH)
// ---------------------------------------------------------------------------

/// Passive-infrared occupancy sensor.  HIGH = someone in the room.
pub const INFRARED_PIN: u8 = 11;
/// Photoresistor comparator.  HIGH = enough ambient light.
pub const PHOTO_PIN: u8 = 12;

// ---------------------------------------------------------------------------
// Digital outputs
// ---------------------------------------------------------------------------

/// Room light (LED strip relay).  HIGH = on.
pub const LED_PIN: u8 = 13;
/// Ventilation fan relay.  HIGH = on.
pub const FAN_PIN: u8 = 15;

// ---------------------------------------------------------------------------
// Window servo
// ---------------------------------------------------------------------------

/// PWM control line of the window servo.
pub const SERVO_PIN: u8 = 14;
/// Hobby-servo carrier frequency.
pub const SERVO_PWM_FREQ_HZ: u32 = 50;

// ---------------------------------------------------------------------------
// I²C bus (BMP280 temperature sensors)
// ---------------------------------------------------------------------------

/// Indoor BMP280 (SDO tied high).
pub const BMP280_INDOOR_ADDR: u8 = 0x77;
/// Outdoor BMP280 (SDO tied low).
pub const BMP280_OUTDOOR_ADDR: u8 = 0x76;

// ---------------------------------------------------------------------------
// UART (Senseair S8 CO2 sensor, Modbus RTU)
// ---------------------------------------------------------------------------

pub const CO2_UART_BAUD: u32 = 9_600;
