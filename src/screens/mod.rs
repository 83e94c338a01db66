//! Simulator-only screens.
//!
//! - **Debug Page** ([`debug`]): settings, tick cadence, status readings and
//!   the event log (toggled with `Y`)

mod debug;

pub use debug::draw_debug_page;
