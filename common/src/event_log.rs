//! Bounded event log for the debug page.
//!
//! Handlers record what happened (settings applied, link lost, cadence
//! switched) as short lines. The simulator shows the most recent lines on its
//! debug page; with the `defmt` feature the same lines are mirrored to the
//! probe through the `log_event!` macro.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("settings loaded");
//! log.push_fmt(format_args!("battery {}%", 37));
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per line. Longer lines are truncated.
pub const LOG_LINE_LENGTH: usize = 32;

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of recent events.
///
/// Stores the last `LOG_BUFFER_SIZE` lines. The oldest line is dropped when
/// the buffer is full.
#[derive(Debug, Default)]
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl EventLog {
    /// Create a new empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message. If the buffer is full, the oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = TruncatingLine::default();
        line.write_str(msg).ok();
        self.push_line(line.0);
    }

    /// Push a formatted message, truncated to `LOG_LINE_LENGTH`.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = TruncatingLine::default();
        line.write_fmt(args).ok();
        self.push_line(line.0);
    }

    fn push_line(
        &mut self,
        line: String<LOG_LINE_LENGTH>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }

    /// Iterate over messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

/// Writer that keeps as many characters as fit and silently drops the rest.
#[derive(Default)]
struct TruncatingLine(String<LOG_LINE_LENGTH>);

impl Write for TruncatingLine {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
