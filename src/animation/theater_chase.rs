use embassy_time::Duration;

use super::Animation;
use crate::color::{BLACK, Rgb};
use crate::frame_scheduler::FramePacer;
use crate::strip::{StripDriver, StripHandle};
use crate::task::CancellationToken;

const CHASE_SPACING: usize = 3;

/// Theater marquee chase: every third pixel lit, the pattern crawling one
/// pixel per frame. Each color runs for `rounds` full crawls.
#[derive(Debug, Clone)]
pub struct TheaterChaseAnimation {
    colors: Vec<Rgb>,
    rounds: u8,
    frame: Duration,
}

impl TheaterChaseAnimation {
    pub fn new(colors: &[Rgb], rounds: u8, frame: Duration) -> Self {
        Self {
            colors: colors.to_vec(),
            rounds: rounds.max(1),
            frame,
        }
    }
}

fn set_phase<D: StripDriver>(driver: &mut D, phase: usize, color: Rgb) {
    let num_pixels = driver.num_pixels();
    for pixel in (phase..num_pixels).step_by(CHASE_SPACING) {
        driver.set_pixel(pixel, color);
    }
}

impl Animation for TheaterChaseAnimation {
    fn run<D: StripDriver>(&mut self, strip: &StripHandle<D>, cancel: &CancellationToken) {
        let mut pacer = FramePacer::new(self.frame);
        if self.colors.is_empty() {
            while pacer.wait(cancel) {}
            return;
        }

        loop {
            for &color in &self.colors {
                for _ in 0..self.rounds {
                    for phase in 0..CHASE_SPACING {
                        strip.with(|driver| {
                            set_phase(driver, phase, color);
                            driver.show();
                        });
                        if !pacer.wait(cancel) {
                            return;
                        }
                        strip.with(|driver| set_phase(driver, phase, BLACK));
                    }
                }
            }
        }
    }
}
