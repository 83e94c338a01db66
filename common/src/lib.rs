//! Frame-composition engine for the Bubble Watch face.
//!
//! This crate contains the platform-agnostic core shared by every host:
//!
//! - [`geometry`]: Fixed-point hand angles and endpoint lookup
//! - [`time`]: Tick time samples and digital banner formatting
//! - [`status`]: Battery, link and heart-rate status model
//! - [`settings`]: User settings, companion-app messages, persisted record
//! - [`draw`]: Renderer-agnostic draw operations grouped into layers
//! - [`compose`]: The frame composer (time + status + settings -> layers)
//! - [`scheduler`]: Tick cadence and banner regeneration decisions
//! - [`app`]: Application state and event handlers tying it all together
//! - [`render`]: Rasterizes composed frames onto an `embedded-graphics` target
//! - [`host`]: Traits for the tick service, haptics and settings storage
//! - [`event_log`]: Bounded event log shown on the debug page
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free outside of tests. All per-frame
//! buffers are `heapless` containers with fixed capacity.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p bubble-watch-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

/// Record an event in an [`event_log::EventLog`], mirrored to defmt when enabled.
macro_rules! log_event {
    ($log:expr, $($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
        $log.push_fmt(format_args!($($arg)*));
    }};
}

pub mod app;
pub mod colors;
pub mod compose;
pub mod config;
pub mod draw;
pub mod event_log;
pub mod geometry;
pub mod host;
pub mod render;
pub mod scheduler;
pub mod settings;
pub mod status;
pub mod styles;
pub mod thresholds;
pub mod time;

// Re-export commonly used items
pub use app::{Redraw, WatchApp};
pub use compose::{FaceLayout, FaceOptions, compose_frame};
pub use draw::{DrawOp, Frame, Layer};
pub use geometry::{HandAngles, compute_angles, endpoint};
pub use scheduler::{RedrawScheduler, TickCadence, TickDecision};
pub use settings::{ConfigMessage, MessageKey, Palette, Settings};
pub use status::{HealthEvent, HeartRate, StatusModel, StatusSnapshot};
pub use render::render_frame;
pub use time::{ClockStyle, TimeSample};
