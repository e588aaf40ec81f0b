//! Static multi-color paint
//!
//! Splits the strip into even runs, one per color. Pixels left over by the
//! integer division are absorbed by the last color.

use crate::color::Rgb;
use crate::strip::StripDriver;

/// Index into `num_colors` for `pixel` on a strip of `num_pixels`
pub fn color_index(pixel: usize, num_pixels: usize, num_colors: usize) -> usize {
    let per_color = num_pixels / num_colors.max(1);
    if per_color == 0 {
        // More colors than pixels: one pixel each, extra colors dropped
        return pixel.min(num_colors.saturating_sub(1));
    }
    (pixel / per_color).min(num_colors - 1)
}

/// Paint `colors` across the whole strip as a single frame
pub fn paint<D: StripDriver + ?Sized>(driver: &mut D, colors: &[Rgb]) {
    if colors.is_empty() {
        return;
    }
    let num_pixels = driver.num_pixels();
    for pixel in 0..num_pixels {
        let color = colors[color_index(pixel, num_pixels, colors.len())];
        driver.set_pixel(pixel, color);
    }
    driver.show();
}
