/// Linear interpolation between `a` and `b`.
///
/// `t` is not clamped, so values outside of [0, 1] extrapolate.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert a duration in seconds into a number of ticks of a loop running
/// at `tick_rate` ticks per second.
#[must_use]
pub fn seconds_to_ticks(seconds: f32, tick_rate: f32) -> u32 {
    if seconds <= 0.0 || tick_rate <= 0.0 {
        return 0;
    }
    libm::roundf(seconds * tick_rate) as u32
}
