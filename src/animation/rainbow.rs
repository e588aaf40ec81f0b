use embassy_time::Duration;

use super::Animation;
use crate::color::wheel;
use crate::frame_scheduler::FramePacer;
use crate::strip::{StripDriver, StripHandle};
use crate::task::CancellationToken;

/// Rainbow spread evenly over the strip, rolling one hue step per frame
///
/// Ignores the scene colors.
#[derive(Debug, Clone)]
pub struct RainbowAnimation {
    frame: Duration,
    offset: u8,
}

impl RainbowAnimation {
    pub fn new(frame: Duration) -> Self {
        Self { frame, offset: 0 }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn hue_at(pixel: usize, num_pixels: usize, offset: u8) -> u8 {
    let position = (pixel * 256 / num_pixels.max(1)) as u8;
    position.wrapping_add(offset)
}

impl Animation for RainbowAnimation {
    fn run<D: StripDriver>(&mut self, strip: &StripHandle<D>, cancel: &CancellationToken) {
        let mut pacer = FramePacer::new(self.frame);
        loop {
            strip.with(|driver| {
                let num_pixels = driver.num_pixels();
                for pixel in 0..num_pixels {
                    driver.set_pixel(pixel, wheel(hue_at(pixel, num_pixels, self.offset)));
                }
                driver.show();
            });
            self.offset = self.offset.wrapping_add(1);
            if !pacer.wait(cancel) {
                return;
            }
        }
    }
}
