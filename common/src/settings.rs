//! User settings: the persisted record and companion-app updates.
//!
//! # Persistence
//!
//! Settings are stored as one fixed-size `postcard` record under
//! [`SETTINGS_KEY`]. The record is always written in full. At startup it is
//! read back in full; a missing, short or malformed record falls back to the
//! defaults without surfacing an error to the wearer.
//!
//! Field order is the on-storage layout and must not change:
//!
//! | Bytes | Field                  |
//! |-------|------------------------|
//! | 0     | show_seconds           |
//! | 1..4  | foreground (R, G, B)   |
//! | 4..7  | background (R, G, B)   |
//! | 7     | show_bubbles           |
//! | 8     | vibrate_on_disconnect  |
//! | 9     | inverted               |
//!
//! # Updates
//!
//! The companion app sends a sparse [`ConfigMessage`]: each present key
//! overwrites exactly one field, absent keys leave the field untouched and
//! unknown keys are ignored.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::colors::{HEX_BLACK, HEX_WHITE, pack_rgb, to_rgb565, unpack_rgb};
use crate::event_log::EventLog;
use crate::host::{SettingsStore, StoreError};

/// Storage key of the settings record.
pub const SETTINGS_KEY: u32 = 1;

/// Size of the encoded settings record.
pub const SETTINGS_RECORD_LEN: usize = 10;

/// Maximum number of tuples in one configuration message.
pub const MAX_MESSAGE_TUPLES: usize = 8;

// =============================================================================
// Errors
// =============================================================================

/// Settings persistence errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Nothing stored under the settings key.
    Missing,
    /// Stored record is shorter than a full record.
    Short(usize),
    /// Stored bytes do not decode.
    Malformed,
    /// Record did not fit the encode buffer.
    Encode,
    /// The store rejected the write.
    Store(StoreError),
}

impl From<StoreError> for SettingsError {
    fn from(e: StoreError) -> Self { Self::Store(e) }
}

// =============================================================================
// Settings Record
// =============================================================================

/// Active display options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub show_seconds: bool,
    pub foreground: [u8; 3],
    pub background: [u8; 3],
    pub show_bubbles: bool,
    pub vibrate_on_disconnect: bool,
    pub inverted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_seconds: true,
            foreground: unpack_rgb(HEX_WHITE),
            background: unpack_rgb(HEX_BLACK),
            show_bubbles: true,
            vibrate_on_disconnect: false,
            inverted: false,
        }
    }
}

impl Settings {
    /// Resolve the drawing colors. `inverted` swaps foreground and background.
    pub fn palette(&self) -> Palette {
        let foreground = to_rgb565(self.foreground);
        let background = to_rgb565(self.background);
        if self.inverted {
            Palette {
                foreground: background,
                background: foreground,
            }
        } else {
            Palette { foreground, background }
        }
    }

    /// Apply a sparse update from the companion app.
    pub fn apply(
        &mut self,
        message: &ConfigMessage,
    ) {
        for &(id, value) in message.tuples() {
            let Some(key) = MessageKey::from_id(id) else {
                continue;
            };
            match key {
                MessageKey::ShowSeconds => self.show_seconds = value == 1,
                MessageKey::ShowBubbles => self.show_bubbles = value == 1,
                MessageKey::VibrateOnDisconnect => self.vibrate_on_disconnect = value == 1,
                MessageKey::Inverted => self.inverted = value == 1,
                MessageKey::ForegroundColor => self.foreground = unpack_rgb(value as u32),
                MessageKey::BackgroundColor => self.background = unpack_rgb(value as u32),
            }
        }
    }

    /// Encode into a full record.
    pub fn encode(&self) -> Result<[u8; SETTINGS_RECORD_LEN], SettingsError> {
        let mut record = [0u8; SETTINGS_RECORD_LEN];
        let used = postcard::to_slice(self, &mut record).map_err(|_| SettingsError::Encode)?.len();
        if used == SETTINGS_RECORD_LEN { Ok(record) } else { Err(SettingsError::Encode) }
    }

    /// Decode a full record. Bytes past the record are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, SettingsError> {
        match bytes.len() {
            0 => return Err(SettingsError::Missing),
            len if len < SETTINGS_RECORD_LEN => return Err(SettingsError::Short(len)),
            _ => {}
        }
        postcard::from_bytes(&bytes[..SETTINGS_RECORD_LEN]).map_err(|_| SettingsError::Malformed)
    }

    /// Read the record from the store.
    pub fn load(store: &impl SettingsStore) -> Result<Self, SettingsError> {
        let mut buffer = [0u8; SETTINGS_RECORD_LEN];
        let len = store.read(SETTINGS_KEY, &mut buffer);
        Self::decode(&buffer[..len.min(SETTINGS_RECORD_LEN)])
    }

    /// Read the record, falling back to defaults on any failure.
    pub fn load_or_default(
        store: &impl SettingsStore,
        log: &mut EventLog,
    ) -> Self {
        match Self::load(store) {
            Ok(settings) => {
                log_event!(log, "settings loaded");
                settings
            }
            Err(SettingsError::Missing) => {
                log_event!(log, "no settings, defaults");
                Self::default()
            }
            Err(SettingsError::Short(len)) => {
                log_event!(log, "settings short ({}), defaults", len);
                Self::default()
            }
            Err(_) => {
                log_event!(log, "settings malformed, defaults");
                Self::default()
            }
        }
    }

    /// Write the full record to the store.
    pub fn save(
        &self,
        store: &mut impl SettingsStore,
    ) -> Result<(), SettingsError> {
        let record = self.encode()?;
        store.write(SETTINGS_KEY, &record)?;
        Ok(())
    }

    /// Packed `0xRRGGBB` foreground, as sent by the companion app.
    pub const fn foreground_hex(&self) -> u32 { pack_rgb(self.foreground) }

    /// Packed `0xRRGGBB` background, as sent by the companion app.
    pub const fn background_hex(&self) -> u32 { pack_rgb(self.background) }
}

/// Concrete drawing colors after resolving the inverted flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb565,
    pub background: Rgb565,
}

impl Default for Palette {
    fn default() -> Self { Settings::default().palette() }
}

// =============================================================================
// Configuration Messages
// =============================================================================

/// Keys of the companion app's configuration message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum MessageKey {
    ShowSeconds = 0,
    ShowBubbles = 1,
    VibrateOnDisconnect = 2,
    ForegroundColor = 3,
    BackgroundColor = 4,
    Inverted = 5,
}

impl MessageKey {
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::ShowSeconds),
            1 => Some(Self::ShowBubbles),
            2 => Some(Self::VibrateOnDisconnect),
            3 => Some(Self::ForegroundColor),
            4 => Some(Self::BackgroundColor),
            5 => Some(Self::Inverted),
            _ => None,
        }
    }

    #[inline]
    pub const fn id(self) -> u32 { self as u32 }
}

/// One inbound message: a list of `(key id, value)` tuples.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigMessage {
    tuples: Vec<(u32, i32), MAX_MESSAGE_TUPLES>,
}

impl ConfigMessage {
    pub const fn new() -> Self { Self { tuples: Vec::new() } }

    /// Append a tuple by raw key id. Tuples beyond capacity are dropped.
    pub fn push_raw(
        &mut self,
        id: u32,
        value: i32,
    ) {
        self.tuples.push((id, value)).ok();
    }

    /// Builder form of [`push_raw`](Self::push_raw) for a known key.
    #[must_use]
    pub fn with(
        mut self,
        key: MessageKey,
        value: i32,
    ) -> Self {
        self.push_raw(key.id(), value);
        self
    }

    /// Builder for a 0/1 flag.
    #[must_use]
    pub fn with_flag(
        self,
        key: MessageKey,
        on: bool,
    ) -> Self {
        self.with(key, i32::from(on))
    }

    pub fn tuples(&self) -> &[(u32, i32)] { &self.tuples }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::host::test_support::MemoryStore;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.show_seconds);
        assert!(settings.show_bubbles);
        assert!(!settings.vibrate_on_disconnect);
        assert!(!settings.inverted);
        assert_eq!(settings.foreground_hex(), HEX_WHITE);
        assert_eq!(settings.background_hex(), HEX_BLACK);
    }

    #[test]
    fn test_palette_inverted_swaps() {
        let mut settings = Settings::default();
        assert_eq!(settings.palette(), Palette { foreground: WHITE, background: BLACK });
        settings.inverted = true;
        assert_eq!(settings.palette(), Palette { foreground: BLACK, background: WHITE });
    }

    #[test]
    fn test_record_is_fixed_size() {
        let record = Settings::default().encode().unwrap();
        assert_eq!(record.len(), SETTINGS_RECORD_LEN);
        assert_eq!(record, [1, 0xFF, 0xFF, 0xFF, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_record_decodes_what_was_encoded() {
        let settings = Settings {
            show_seconds: false,
            foreground: [0x12, 0x34, 0x56],
            background: [0xAB, 0xCD, 0xEF],
            show_bubbles: false,
            vibrate_on_disconnect: true,
            inverted: true,
        };
        let record = settings.encode().unwrap();
        assert_eq!(Settings::decode(&record), Ok(settings));
    }

    #[test]
    fn test_decode_rejects_missing_short_and_malformed() {
        assert_eq!(Settings::decode(&[]), Err(SettingsError::Missing));
        assert_eq!(Settings::decode(&[1, 2, 3]), Err(SettingsError::Short(3)));
        assert_eq!(Settings::decode(&[7, 0, 0, 0, 0, 0, 0, 1, 0, 0]), Err(SettingsError::Malformed));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let mut log = EventLog::new();

        let empty = MemoryStore::default();
        assert_eq!(Settings::load_or_default(&empty, &mut log), Settings::default());
        assert_eq!(log.last(), Some("no settings, defaults"));

        let short = MemoryStore::with_record(SETTINGS_KEY, &[0, 1, 2]);
        assert_eq!(Settings::load_or_default(&short, &mut log), Settings::default());
        assert_eq!(log.last(), Some("settings short (3), defaults"));

        let malformed = MemoryStore::with_record(SETTINGS_KEY, &[7, 0, 0, 0, 0, 0, 0, 1, 0, 0]);
        assert_eq!(Settings::load_or_default(&malformed, &mut log), Settings::default());
        assert_eq!(log.last(), Some("settings malformed, defaults"));
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::default();
        let mut settings = Settings::default();
        settings.show_bubbles = false;
        settings.save(&mut store).unwrap();
        assert_eq!(store.writes, 1);

        let mut log = EventLog::new();
        assert_eq!(Settings::load_or_default(&store, &mut log), settings);
        assert_eq!(log.last(), Some("settings loaded"));
    }

    #[test]
    fn test_save_reports_store_failure() {
        let mut store = MemoryStore::failing();
        assert_eq!(Settings::default().save(&mut store), Err(SettingsError::Store(StoreError::Io)));
    }

    #[test]
    fn test_apply_is_sparse() {
        let mut settings = Settings::default();
        let message = ConfigMessage::new().with_flag(MessageKey::ShowSeconds, false);
        settings.apply(&message);
        assert!(!settings.show_seconds);
        assert!(settings.show_bubbles, "absent key untouched");
        assert_eq!(settings.foreground_hex(), HEX_WHITE);
    }

    #[test]
    fn test_apply_colors_and_flags() {
        let mut settings = Settings::default();
        let message = ConfigMessage::new()
            .with(MessageKey::ForegroundColor, 0x00FF_AA00)
            .with(MessageKey::BackgroundColor, 0x0000_55FF)
            .with_flag(MessageKey::VibrateOnDisconnect, true)
            .with_flag(MessageKey::Inverted, true);
        settings.apply(&message);
        assert_eq!(settings.foreground_hex(), 0x00FF_AA00);
        assert_eq!(settings.background_hex(), 0x0000_55FF);
        assert!(settings.vibrate_on_disconnect);
        assert!(settings.inverted);
    }

    #[test]
    fn test_apply_flag_true_only_on_one() {
        let mut settings = Settings::default();
        settings.apply(&ConfigMessage::new().with(MessageKey::ShowBubbles, 2));
        assert!(!settings.show_bubbles);
        settings.apply(&ConfigMessage::new().with(MessageKey::ShowBubbles, 1));
        assert!(settings.show_bubbles);
    }

    #[test]
    fn test_apply_ignores_unknown_keys() {
        let mut settings = Settings::default();
        let mut message = ConfigMessage::new();
        message.push_raw(42, 1);
        message.push_raw(MessageKey::ShowSeconds.id(), 0);
        settings.apply(&message);
        assert!(!settings.show_seconds);
        let expected = Settings { show_seconds: false, ..Settings::default() };
        assert_eq!(settings, expected);
    }

    #[test]
    fn test_message_key_ids() {
        for id in 0..6 {
            assert_eq!(MessageKey::from_id(id).map(MessageKey::id), Some(id));
        }
        assert_eq!(MessageKey::from_id(6), None);
    }
}
