use embassy_time::Duration;

use super::Animation;
use crate::color::{BLACK, Rgb};
use crate::frame_scheduler::FramePacer;
use crate::strip::{StripDriver, StripHandle};
use crate::task::CancellationToken;

/// Projectile - a lit window sweeps along the strip, one sweep per color
///
/// The head advances one pixel per frame; the pixel `width` behind the head
/// is cleared as it moves, wrapping so the tail of the previous sweep fades
/// out while the next one starts.
#[derive(Debug, Clone)]
pub struct ProjectileAnimation {
    colors: Vec<Rgb>,
    width: usize,
    frame: Duration,
}

impl ProjectileAnimation {
    pub fn new(colors: &[Rgb], width: usize, frame: Duration) -> Self {
        Self {
            colors: colors.to_vec(),
            width: width.max(1),
            frame,
        }
    }
}

impl Animation for ProjectileAnimation {
    fn run<D: StripDriver>(&mut self, strip: &StripHandle<D>, cancel: &CancellationToken) {
        let mut pacer = FramePacer::new(self.frame);
        let num_pixels = strip.num_pixels();
        if num_pixels == 0 || self.colors.is_empty() {
            while pacer.wait(cancel) {}
            return;
        }

        loop {
            for &color in &self.colors {
                for head in 0..num_pixels {
                    strip.with(|driver| {
                        driver.set_pixel(head, color);
                        if num_pixels > self.width {
                            let tail = (head + num_pixels - self.width) % num_pixels;
                            driver.set_pixel(tail, BLACK);
                        }
                        driver.show();
                    });
                    if !pacer.wait(cancel) {
                        return;
                    }
                }
            }
        }
    }
}
