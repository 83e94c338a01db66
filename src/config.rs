//! Simulator configuration constants.
//!
//! The watch layout itself lives in `bubble_watch_common::config`; these are
//! the desktop host's own knobs.

use std::time::Duration;

// =============================================================================
// Window
// =============================================================================

/// Window scale factor. The 144x168 face is tiny on a desktop monitor.
pub const WINDOW_SCALE: u32 = 3;

/// Window title.
pub const WINDOW_TITLE: &str = "Bubble Watch";

// =============================================================================
// Timing
// =============================================================================

/// Main loop period. Ticks are detected by polling the clock at this rate.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// How long the haptic flash stays on screen after a pulse.
pub const HAPTIC_FLASH: Duration = Duration::from_millis(400);

/// Interval between simulated heart-rate samples.
pub const HEART_RATE_PERIOD: Duration = Duration::from_secs(5);

// =============================================================================
// Simulated Status
// =============================================================================

/// Battery level reported at startup.
pub const INITIAL_BATTERY_PERCENT: i32 = 80;

/// Battery change per Up/Down key press.
pub const BATTERY_KEY_STEP: i32 = 5;

/// Simulated heart rate range (BPM).
pub const HEART_RATE_MIN: f32 = 58.0;
pub const HEART_RATE_MAX: f32 = 124.0;

// =============================================================================
// Storage
// =============================================================================

/// Directory holding the persisted settings record.
pub const SETTINGS_DIR: &str = ".bubble-watch";
