//! Desktop implementations of the watch host services.
//!
//! - [`SimTicker`]: polls the local clock and fires when the subscribed unit
//!   (second or minute) changes
//! - [`SimHaptics`]: remembers the last pulse so the window can flash
//! - [`FileSettingsStore`]: one file per storage key

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use bubble_watch_common::host::{Haptics, SettingsStore, StoreError, TickService};
use bubble_watch_common::scheduler::TickCadence;
use chrono::Timelike;

// =============================================================================
// Tick Service
// =============================================================================

/// Clock-polling tick service.
///
/// A fresh subscription arms on the first poll and fires on the next unit
/// change, like a hardware tick that never fires mid-unit.
#[derive(Debug, Default)]
pub struct SimTicker {
    cadence: Option<TickCadence>,
    last_unit: Option<u32>,
}

impl SimTicker {
    pub const fn new() -> Self {
        Self {
            cadence: None,
            last_unit: None,
        }
    }

    /// Whether a tick is due at `now`.
    pub fn poll(
        &mut self,
        now: &impl Timelike,
    ) -> bool {
        let Some(cadence) = self.cadence else {
            return false;
        };
        let unit = match cadence {
            TickCadence::PerSecond => now.num_seconds_from_midnight(),
            TickCadence::PerMinute => now.num_seconds_from_midnight() / 60,
        };
        let due = self.last_unit.is_some_and(|last| last != unit);
        self.last_unit = Some(unit);
        due
    }
}

impl TickService for SimTicker {
    fn subscribe(
        &mut self,
        cadence: TickCadence,
    ) {
        self.cadence = Some(cadence);
        self.last_unit = None;
    }

    fn unsubscribe(&mut self) {
        self.cadence = None;
        self.last_unit = None;
    }
}

// =============================================================================
// Haptics
// =============================================================================

/// Vibration stand-in. The window flashes while a pulse is recent.
#[derive(Debug, Default)]
pub struct SimHaptics {
    last_pulse: Option<Instant>,
    pub pulses: u32,
}

impl SimHaptics {
    /// Time of the most recent pulse.
    pub const fn last_pulse(&self) -> Option<Instant> { self.last_pulse }
}

impl Haptics for SimHaptics {
    fn double_pulse(&mut self) {
        self.last_pulse = Some(Instant::now());
        self.pulses += 1;
    }
}

// =============================================================================
// Settings Storage
// =============================================================================

/// Stores each key as `<dir>/key-<n>.bin`.
#[derive(Debug)]
pub struct FileSettingsStore {
    dir: PathBuf,
}

impl FileSettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    fn path(
        &self,
        key: u32,
    ) -> PathBuf {
        self.dir.join(format!("key-{key}.bin"))
    }
}

impl SettingsStore for FileSettingsStore {
    fn read(
        &self,
        key: u32,
        buf: &mut [u8],
    ) -> usize {
        let Ok(data) = fs::read(self.path(key)) else {
            return 0;
        };
        let len = data.len().min(buf.len());
        buf[..len].copy_from_slice(&data[..len]);
        len
    }

    fn write(
        &mut self,
        key: u32,
        data: &[u8],
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|_| StoreError::Io)?;
        fs::write(self.path(key), data).map_err(|_| StoreError::Io)
    }
}
