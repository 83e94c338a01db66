//! Device status model: battery, wireless link and heart rate.
//!
//! Each field is written by exactly one status callback and read by the
//! composer through a [`StatusSnapshot`]. The model does no validation beyond
//! clamping the battery percentage.

use crate::thresholds::MAX_BATTERY_PERCENT;

// =============================================================================
// Heart Rate
// =============================================================================

/// Last heart-rate reading from the health service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeartRate {
    /// Health service unavailable or not yet queried.
    #[default]
    Unknown,
    /// The sensor reported no current measurement.
    NotMeasured,
    /// A positive beats-per-minute sample.
    Bpm(u16),
}

impl HeartRate {
    /// Interpret a raw peeked value. Zero and negative values mean no
    /// measurement.
    pub fn from_raw(value: i32) -> Self {
        if value > 0 { Self::Bpm(value.min(i32::from(u16::MAX)) as u16) } else { Self::NotMeasured }
    }

    /// Beats per minute if a positive sample is present.
    pub const fn bpm(self) -> Option<u16> {
        match self {
            Self::Bpm(bpm) if bpm > 0 => Some(bpm),
            _ => None,
        }
    }
}

/// Health service event kinds that reach the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HealthEvent {
    /// A new heart-rate sample is available.
    HeartRateUpdate,
    /// Aggregated health data changed significantly.
    SignificantUpdate,
    /// Any other event (movement, sleep). Ignored by the face.
    Other,
}

impl HealthEvent {
    /// Whether this event carries a heart-rate reading worth taking.
    pub const fn updates_heart_rate(self) -> bool { matches!(self, Self::HeartRateUpdate | Self::SignificantUpdate) }
}

// =============================================================================
// Link Transitions
// =============================================================================

/// Result of applying a link state callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkChange {
    /// Connected to disconnected edge.
    Lost,
    /// Disconnected to connected edge.
    Restored,
    /// Same state as before.
    Unchanged,
}

// =============================================================================
// Status Model
// =============================================================================

/// Read-only view handed to the composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    pub battery_percent: u8,
    pub link_connected: bool,
    pub heart_rate: Option<u16>,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            battery_percent: MAX_BATTERY_PERCENT,
            link_connected: true,
            heart_rate: None,
        }
    }
}

/// Most recently observed device status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusModel {
    battery_percent: u8,
    link_connected: bool,
    heart_rate: HeartRate,
}

impl Default for StatusModel {
    fn default() -> Self { Self::new() }
}

impl StatusModel {
    /// Full battery, connected, no heart rate.
    pub const fn new() -> Self {
        Self {
            battery_percent: MAX_BATTERY_PERCENT,
            link_connected: true,
            heart_rate: HeartRate::Unknown,
        }
    }

    /// Store a battery reading, clamped to `0..=100`.
    pub fn set_battery(
        &mut self,
        percent: i32,
    ) {
        self.battery_percent = percent.clamp(0, i32::from(MAX_BATTERY_PERCENT)) as u8;
    }

    /// Store the link state and report which edge, if any, was crossed.
    pub fn set_link_connected(
        &mut self,
        connected: bool,
    ) -> LinkChange {
        let was = self.link_connected;
        self.link_connected = connected;
        match (was, connected) {
            (true, false) => LinkChange::Lost,
            (false, true) => LinkChange::Restored,
            _ => LinkChange::Unchanged,
        }
    }

    /// Store the initial link state without reporting an edge.
    pub fn prime_link(
        &mut self,
        connected: bool,
    ) {
        self.link_connected = connected;
    }

    pub fn set_heart_rate(
        &mut self,
        heart_rate: HeartRate,
    ) {
        self.heart_rate = heart_rate;
    }

    #[inline]
    pub const fn battery_percent(&self) -> u8 { self.battery_percent }

    #[inline]
    pub const fn link_connected(&self) -> bool { self.link_connected }

    #[inline]
    pub const fn heart_rate(&self) -> HeartRate { self.heart_rate }

    pub const fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            battery_percent: self.battery_percent,
            link_connected: self.link_connected,
            heart_rate: self.heart_rate.bpm(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
