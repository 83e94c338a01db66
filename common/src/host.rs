//! Host services consumed by the watch app.
//!
//! These traits decouple the core from the platform: the watch firmware
//! backs them with the system tick, vibration motor and persistent storage,
//! the simulator with a polling ticker, a log line and a file.

use crate::scheduler::TickCadence;

/// Tick event subscription.
///
/// A subscription is replaced wholesale: callers unsubscribe before
/// subscribing at a new cadence.
pub trait TickService {
    /// Start delivering ticks at the given cadence.
    fn subscribe(
        &mut self,
        cadence: TickCadence,
    );

    /// Stop delivering ticks.
    fn unsubscribe(&mut self);
}

/// Vibration motor.
pub trait Haptics {
    /// Two short pulses.
    fn double_pulse(&mut self);
}

/// Errors from a settings store write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// The store has no room for the record.
    Full,
    /// The backing medium rejected the write.
    Io,
}

/// Key-value persistent storage.
pub trait SettingsStore {
    /// Copy the record stored under `key` into `buf`.
    ///
    /// Returns the number of bytes copied, `0` if nothing is stored.
    fn read(
        &self,
        key: u32,
        buf: &mut [u8],
    ) -> usize;

    /// Replace the record stored under `key`.
    fn write(
        &mut self,
        key: u32,
        data: &[u8],
    ) -> Result<(), StoreError>;
}

// =============================================================================
// Test Doubles
// =============================================================================

#[cfg(test)]
pub mod test_support {
    use std::collections::BTreeMap;

    use super::*;

    /// In-memory store counting successful writes.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        records: BTreeMap<u32, Vec<u8>>,
        fail_writes: bool,
        pub writes: usize,
    }

    impl MemoryStore {
        pub fn with_record(
            key: u32,
            data: &[u8],
        ) -> Self {
            let mut store = Self::default();
            store.records.insert(key, data.to_vec());
            store
        }

        pub fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        pub fn record(
            &self,
            key: u32,
        ) -> Option<&[u8]> {
            self.records.get(&key).map(Vec::as_slice)
        }
    }

    impl SettingsStore for MemoryStore {
        fn read(
            &self,
            key: u32,
            buf: &mut [u8],
        ) -> usize {
            let Some(data) = self.records.get(&key) else {
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
            if self.fail_writes {
                return Err(StoreError::Io);
            }
            self.records.insert(key, data.to_vec());
            self.writes += 1;
            Ok(())
        }
    }

    /// Subscription call recorded by [`RecordingTicker`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum TickCall {
        Subscribe(TickCadence),
        Unsubscribe,
    }

    /// Tick service recording every call in order.
    #[derive(Debug, Default)]
    pub struct RecordingTicker {
        pub calls: Vec<TickCall>,
    }

    impl RecordingTicker {
        /// Cadence of the live subscription, if any.
        pub fn active(&self) -> Option<TickCadence> {
            match self.calls.last() {
                Some(TickCall::Subscribe(cadence)) => Some(*cadence),
                _ => None,
            }
        }
    }

    impl TickService for RecordingTicker {
        fn subscribe(
            &mut self,
            cadence: TickCadence,
        ) {
            self.calls.push(TickCall::Subscribe(cadence));
        }

        fn unsubscribe(&mut self) { self.calls.push(TickCall::Unsubscribe); }
    }

    /// Haptics counting pulses.
    #[derive(Debug, Default)]
    pub struct RecordingHaptics {
        pub pulses: usize,
    }

    impl Haptics for RecordingHaptics {
        fn double_pulse(&mut self) { self.pulses += 1; }
    }
}
