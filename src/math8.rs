/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math, matching how WS281x drivers apply global brightness.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Linear step between two 8-bit values
///
/// Returns `from` at `step == 0` and exactly `to` at `step == steps`.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn lerp8(from: u8, to: u8, step: u16, steps: u16) -> u8 {
    if steps == 0 || step >= steps {
        return to;
    }
    let delta = to as i32 - from as i32;
    (from as i32 + delta * step as i32 / steps as i32) as u8
}
