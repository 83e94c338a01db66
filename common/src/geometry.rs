//! Fixed-point clock geometry.
//!
//! Angles are integers in `0..TURN`, where `TURN` is one full revolution.
//! Angle 0 points at 12 o'clock and angles grow clockwise, matching screen
//! coordinates where y grows downward.
//!
//! Sine and cosine come from a quarter-wave table generated by `build.rs`
//! with linear interpolation between entries. Lookups return values scaled by
//! [`TRIG_MAX_RATIO`], so `sin_lookup(TURN / 4) == TRIG_MAX_RATIO` and the
//! cardinal directions are exact.

use embedded_graphics::geometry::{Point, Size};

use crate::config::SECOND_HAND_LENGTH;
use crate::time::TimeSample;

include!(concat!(env!("OUT_DIR"), "/trig_table.rs"));

/// One full revolution in angle units.
pub const TURN: i32 = 0x1_0000;

/// Fixed-point value of 1.0 returned by the trig lookups.
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

/// A quarter revolution (3 o'clock).
pub const QUARTER: i32 = TURN / 4;

/// Entries in the generated quarter-wave table, excluding the endpoint.
const QUARTER_STEPS: i32 = 256;

/// Angle units between adjacent table entries.
const STEP: i32 = QUARTER / QUARTER_STEPS;

const _: () = assert!(SIN_QUARTER.len() == QUARTER_STEPS as usize + 1);
const _: () = assert!(QUARTER % QUARTER_STEPS == 0);

/// Hour-hand positions per hour. The hour hand advances every ten minutes.
const HOUR_STEPS: u32 = 6;

// =============================================================================
// Trig Lookup
// =============================================================================

/// Interpolated sine for an offset within the first quadrant (`0..=QUARTER`).
fn quarter_sin(offset: i32) -> i32 {
    let idx = (offset / STEP) as usize;
    let frac = offset % STEP;
    if idx >= QUARTER_STEPS as usize {
        return SIN_QUARTER[QUARTER_STEPS as usize];
    }
    let lo = SIN_QUARTER[idx];
    let hi = SIN_QUARTER[idx + 1];
    lo + (hi - lo) * frac / STEP
}

/// Fixed-point sine. Any angle is accepted and wrapped into one turn.
pub fn sin_lookup(angle: i32) -> i32 {
    let a = angle.rem_euclid(TURN);
    let offset = a % QUARTER;
    match a / QUARTER {
        0 => quarter_sin(offset),
        1 => quarter_sin(QUARTER - offset),
        2 => -quarter_sin(offset),
        _ => -quarter_sin(QUARTER - offset),
    }
}

/// Fixed-point cosine. Any angle is accepted and wrapped into one turn.
pub fn cos_lookup(angle: i32) -> i32 { sin_lookup(angle.rem_euclid(TURN) + QUARTER) }

// =============================================================================
// Hand Angles
// =============================================================================

/// Angles of the three clock hands for one time sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandAngles {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

/// Compute hand angles for a time sample.
///
/// The hour hand moves in six steps per hour: `minute / 10` truncates, so
/// 03:00 through 03:09 all share one hour-hand angle. Minute and second
/// angles are linear in their component.
pub fn compute_angles(time: TimeSample) -> HandAngles {
    let hour_step = (time.hour() % 12) * HOUR_STEPS + time.minute() / 10;
    HandAngles {
        hour: TURN * hour_step as i32 / (12 * HOUR_STEPS) as i32,
        minute: TURN * time.minute() as i32 / 60,
        second: TURN * time.second() as i32 / 60,
    }
}

/// Point at `length` from `center` in the direction of `angle`.
///
/// Products are truncated toward zero before adding the center, so the
/// result matches the integer arithmetic of the target's graphics stack.
pub fn endpoint(
    angle: i32,
    length: i32,
    center: Point,
) -> Point {
    let x = sin_lookup(angle) * length / TRIG_MAX_RATIO + center.x;
    let y = -cos_lookup(angle) * length / TRIG_MAX_RATIO + center.y;
    Point::new(x, y)
}

// =============================================================================
// Hand Lengths
// =============================================================================

/// Hand lengths for a face of a given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandLengths {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl HandLengths {
    /// Hour is a quarter and minute half of the face's shorter side.
    /// The second hand keeps its fixed length on every face.
    pub const fn for_face(size: Size) -> Self {
        let short_side = if size.width < size.height { size.width as i32 } else { size.height as i32 };
        Self {
            hour: short_side / 4,
            minute: short_side / 2,
            second: SECOND_HAND_LENGTH,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
