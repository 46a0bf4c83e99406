//! System constants
//!
//! Capacity limits and timing values shared across the firmware. All
//! string limits truncate on overflow, never error.

/// Maximum appliances held in the repository
pub const MAX_DEVICES: usize = 20;

/// Maximum commands per appliance
pub const MAX_COMMANDS: usize = 10;

/// Appliance rows per main-menu page
pub const DEVICES_PER_PAGE: usize = 4;

/// Maximum appliance display name length in bytes
pub const MAX_DEVICE_NAME: usize = 31;

/// Maximum command name length in bytes
pub const MAX_COMMAND_NAME: usize = 15;

/// Maximum error message length in bytes
pub const MAX_ERROR_LEN: usize = 63;

/// Splash screen dwell time before auto-advancing to the main menu
pub const SPLASH_DURATION_MS: u64 = 5000;

/// Hold-repeat threshold for touch input, in milliseconds.
///
/// Deliberately the transmitter's send cooldown: a held button repeats at
/// exactly the rate the emitter is willing to send.
pub const REPEAT_DELAY_MS: u64 = heliograph_ir::SEND_COOLDOWN_MS;

/// Display width in pixels (landscape)
pub const SCREEN_WIDTH: i32 = 320;

/// Display height in pixels (landscape)
pub const SCREEN_HEIGHT: i32 = 240;
