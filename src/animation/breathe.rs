use embassy_time::Duration;

use super::{Animation, static_paint};
use crate::color::Rgb;
use crate::frame_scheduler::FramePacer;
use crate::strip::{StripDriver, StripHandle};
use crate::task::CancellationToken;

const BREATHE_MIN: u8 = 1;
const BREATHE_MAX: u8 = 127;

/// Breathe - paints the colors once, then ramps global brightness
/// 1 → 127 → 1 forever.
#[derive(Debug, Clone)]
pub struct BreatheAnimation {
    colors: Vec<Rgb>,
    step: Duration,
}

impl BreatheAnimation {
    pub fn new(colors: &[Rgb], step: Duration) -> Self {
        Self {
            colors: colors.to_vec(),
            step,
        }
    }

    /// Brightness levels of one full breath
    pub fn levels() -> impl Iterator<Item = u8> {
        (BREATHE_MIN..=BREATHE_MAX).chain((BREATHE_MIN + 1..BREATHE_MAX).rev())
    }
}

impl Animation for BreatheAnimation {
    fn run<D: StripDriver>(&mut self, strip: &StripHandle<D>, cancel: &CancellationToken) {
        strip.with(|driver| static_paint::paint(driver, &self.colors));

        let mut pacer = FramePacer::new(self.step);
        loop {
            for level in Self::levels() {
                if !pacer.wait(cancel) {
                    return;
                }
                strip.with(|driver| {
                    driver.set_brightness(level);
                    driver.show();
                });
            }
        }
    }
}
