//! Status thresholds that switch overlays on and off.
//!
//! Thresholds are compile-time constants with `const` assertions so an
//! out-of-range edit fails the build instead of silently hiding a glyph.

// =============================================================================
// Battery
// =============================================================================

/// Battery percentage below which the battery glyph is drawn.
/// At exactly this value the glyph is hidden.
pub const LOW_BATTERY_PERCENT: u8 = 40;

/// Highest battery percentage the status service reports.
pub const MAX_BATTERY_PERCENT: u8 = 100;

/// Battery percentage represented by one fill-bar step.
pub const BATTERY_STEP_PERCENT: u8 = 10;

/// Pixels of fill-bar width per step.
pub const BATTERY_STEP_PIXELS: u32 = 2;

const _: () = assert!(LOW_BATTERY_PERCENT <= MAX_BATTERY_PERCENT);
const _: () = assert!(BATTERY_STEP_PERCENT > 0);

/// Check if the battery glyph should be shown.
#[inline]
pub const fn is_low_battery(percent: u8) -> bool { percent < LOW_BATTERY_PERCENT }

/// Width of the battery fill bar, quantized to whole steps.
#[inline]
pub const fn battery_fill_width(percent: u8) -> u32 {
    (percent / BATTERY_STEP_PERCENT) as u32 * BATTERY_STEP_PIXELS
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_battery_boundary() {
        assert!(is_low_battery(0));
        assert!(is_low_battery(39));
        assert!(!is_low_battery(40), "glyph is hidden at exactly the threshold");
        assert!(!is_low_battery(100));
    }

    #[test]
    fn test_battery_fill_is_quantized() {
        assert_eq!(battery_fill_width(0), 0);
        assert_eq!(battery_fill_width(9), 0);
        assert_eq!(battery_fill_width(10), 2);
        assert_eq!(battery_fill_width(19), 2);
        assert_eq!(battery_fill_width(39), 6);
        assert_eq!(battery_fill_width(100), 20);
    }
}
