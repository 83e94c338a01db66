//! Simulated status signals.

use micromath::F32;

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// `t` is elapsed seconds, `freq` is in radians per second.
pub fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = F32(t * freq).sin().0 * 0.5 + 0.5;
    min + normalized * (max - min)
}

/// Next simulated heart-rate sample in whole BPM.
pub fn heart_rate_sample(
    t: f32,
    min: f32,
    max: f32,
) -> i32 {
    F32(fake_signal(t, min, max, 0.05)).round().0 as i32
}
