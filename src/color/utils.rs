use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::lerp8,
};

/// Unlit pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Parse a `#RRGGBB` (or bare `RRGGBB`) hex color
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let digits = value.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(rgb_from_u32)
}

/// Step linearly from `from` towards `to`, channel by channel
///
/// `step == steps` yields exactly `to`.
#[inline]
pub fn lerp_colors(from: Rgb, to: Rgb, step: u16, steps: u16) -> Rgb {
    Rgb {
        r: lerp8(from.r, to.r, step, steps),
        g: lerp8(from.g, to.g, step, steps),
        b: lerp8(from.b, to.b, step, steps),
    }
}

/// Fully saturated color at `position` on a 0-255 color wheel
pub fn wheel(position: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue: position,
        sat: 255,
        val: 255,
    })
}
