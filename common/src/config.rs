//! Layout and timing constants for the watch face.
//!
//! Panel geometry is expressed relative to the host window, which is split into
//! a short digital banner on top and the analog dial below it. The face (the
//! layer holding hands, bubbles and status glyphs) sits inside the dial ring.
//!
//! ```text
//! ┌──────────────────────────┐
//! │  12:34  15.10.2026       │  BANNER_HEIGHT
//! ├──────────────────────────┤
//! │ ┌──────────────────────┐ │
//! │ │        face          │ │  dial, face inset by FACE_INSET
//! │ └──────────────────────┘ │
//! └──────────────────────────┘
//! ```
//!
//! Overlay glyph offsets are absolute pixels inside the face and do not scale
//! with the face size. Hands and bubbles follow the face center.

// =============================================================================
// Display Configuration
// =============================================================================

/// Default display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Default display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// Panels
// =============================================================================

/// Height of the digital banner panel.
pub const BANNER_HEIGHT: u32 = 25;

/// Inset between the nested panel rectangles (background, ring, inner area).
pub const BORDER_STEP: u32 = 2;

/// Corner radius of the banner panel rectangles.
pub const BANNER_CORNER_RADIUS: u32 = 3;

/// Corner radius of the dial panel rectangles.
pub const DIAL_CORNER_RADIUS: u32 = 5;

/// Inset of the face layer inside the dial panel.
pub const FACE_INSET: u32 = 8;

/// Length of the quarter-hour tick marks.
pub const TICK_LENGTH: i32 = 6;

/// Stroke width of the quarter-hour tick marks.
pub const TICK_WIDTH: u32 = 3;

// =============================================================================
// Hands
// =============================================================================

/// Minute hand stroke width.
pub const MINUTE_HAND_WIDTH: u32 = 5;

/// Hour hand stroke width (drawn over the minute hand).
pub const HOUR_HAND_WIDTH: u32 = 6;

/// Second hand stroke width.
pub const SECOND_HAND_WIDTH: u32 = 2;

/// Second hand length. Fixed regardless of face size; the face layer clips it.
pub const SECOND_HAND_LENGTH: i32 = 140;

// =============================================================================
// Bubbles
// =============================================================================

/// Radius of the bubble outline ring.
pub const BUBBLE_RING_RADIUS: u32 = 8;

/// Radius of the background fill inside the ring.
pub const BUBBLE_FILL_RADIUS: u32 = 7;

/// Side of the square text box centered on each bubble.
pub const BUBBLE_TEXT_BOX: u32 = 18;

/// Distance of the minute bubble from the face center.
pub const MINUTE_BUBBLE_DISTANCE: i32 = 22;

/// Distance of the second bubble from the face center.
pub const SECOND_BUBBLE_DISTANCE: i32 = 44;

// =============================================================================
// Status Glyphs
// =============================================================================

/// Top-left corner of the disconnect glyph inside the face.
pub const LINK_GLYPH_ORIGIN: (i32, i32) = (2, 2);

/// Side of the square disconnect glyph.
pub const LINK_GLYPH_SIZE: u32 = 12;

/// Halo stroke width of the disconnect glyph (background pass).
pub const LINK_HALO_WIDTH: u32 = 3;

/// Battery glyph width, anchored to the face's top-right corner.
pub const BATTERY_GLYPH_WIDTH: u32 = 23;

/// Battery glyph height.
pub const BATTERY_GLYPH_HEIGHT: u32 = 10;

/// Left offset of the heart-rate label.
pub const HEART_RATE_X: i32 = 2;

/// Distance of the heart-rate label's top edge from the face bottom.
pub const HEART_RATE_BOTTOM_OFFSET: i32 = 16;

// =============================================================================
// Text Buffers
// =============================================================================

/// Capacity of the digital banner buffer (`"HH:MM  DD.MM.YYYY"` plus slack).
pub const BANNER_TEXT_LEN: usize = 22;

/// Capacity of any text carried by a draw operation.
pub const TEXT_CAPACITY: usize = 24;

/// Characters shown in a bubble.
pub const BUBBLE_DIGITS: usize = 2;

/// Capacity of the heart-rate label (`"BPM: "` plus up to four digits).
pub const HEART_RATE_TEXT_LEN: usize = 10;

const _: () = assert!(BANNER_TEXT_LEN <= TEXT_CAPACITY);
const _: () = assert!(BUBBLE_FILL_RADIUS < BUBBLE_RING_RADIUS);
const _: () = assert!(MINUTE_BUBBLE_DISTANCE < SECOND_BUBBLE_DISTANCE);
