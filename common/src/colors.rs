//! Color constants and packed-RGB conversion.
//!
//! Settings carry colors as packed `0xRRGGBB` values (the companion app's
//! wire format). Drawing uses `Rgb565`, the native format of the small
//! SPI panels this face targets, so conversion happens once when the
//! [`Palette`](crate::settings::Palette) is resolved.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Default background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default foreground.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Packed RGB Values
// =============================================================================

/// Packed white, the default foreground setting.
pub const HEX_WHITE: u32 = 0x00FF_FFFF;

/// Packed black, the default background setting.
pub const HEX_BLACK: u32 = 0x0000_0000;

/// Colors offered by the companion app's color picker (no grays).
pub const PICKER_COLORS: [u32; 8] = [
    HEX_WHITE, HEX_BLACK, 0x00FF_0000, 0x0000_FF00, 0x0000_55FF, 0x00FF_FF00, 0x00FF_AA00, 0x0000_FFFF,
];

/// Split a packed `0xRRGGBB` value into its channels. The top byte is ignored.
#[inline]
pub const fn unpack_rgb(hex: u32) -> [u8; 3] { [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8] }

/// Join channels back into a packed `0xRRGGBB` value.
#[inline]
pub const fn pack_rgb(rgb: [u8; 3]) -> u32 { ((rgb[0] as u32) << 16) | ((rgb[1] as u32) << 8) | rgb[2] as u32 }

/// Convert 8-bit channels to the display's `Rgb565`.
#[inline]
pub fn to_rgb565(rgb: [u8; 3]) -> Rgb565 { Rgb565::from(Rgb888::new(rgb[0], rgb[1], rgb[2])) }
