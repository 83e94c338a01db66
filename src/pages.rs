//! Page navigation for the simulator window.
//!
//! Press `Y` to toggle between the watch face and the debug view.
//!
//! # Pages
//!
//! - [`Page::Watch`]: The composed watch face
//! - [`Page::Debug`]: Settings, status and the event log

/// Available pages in the simulator.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The watch face as the device would show it.
    #[default]
    Watch,

    /// Internal state and recent events.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Watch => Self::Debug,
            Self::Debug => Self::Watch,
        }
    }
}
