//! Helpers for writing transform fields as pure functions of absolute
//! simulation time. Nothing here accumulates: the same `time` always
//! yields the same value, so scrubbing or replaying time is exact.

/// `base + sin(time * frequency) * amplitude`.
pub fn wave(time: f32, base: f32, amplitude: f32, frequency: f32) -> f32 {
    base + (time * frequency).sin() * amplitude
}

/// Angle in radians of a constant spin at `degrees_per_second`, derived
/// from absolute time rather than integrated from deltas.
pub fn spin_angle(time: f32, degrees_per_second: f32) -> f32 {
    (time * degrees_per_second).to_radians()
}

/// True once `time` has passed `threshold`. Strict: a step landing exactly
/// on the threshold is not yet past it.
pub fn past(time: f32, threshold: f32) -> bool {
    time > threshold
}
