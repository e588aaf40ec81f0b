//! Twinkle - a constant number of randomly placed lit pixels, one of which
//! hops to a new position every cycle.
//!
//! The generator is seeded, so for a given color set and pixel count the
//! sequence of hops is reproducible.

use embassy_time::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Animation;
use crate::color::{BLACK, Rgb};
use crate::frame_scheduler::FramePacer;
use crate::strip::{StripDriver, StripHandle};
use crate::task::CancellationToken;

/// One twinkle cycle: `off` goes dark, `on` lights up with `color`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwinkleStep {
    pub off: usize,
    pub on: usize,
    pub color: Rgb,
}

/// Lit/dark pixel bookkeeping for the twinkle renderer
#[derive(Debug, Clone)]
pub struct TwinkleState {
    rng: StdRng,
    colors: Vec<Rgb>,
    lit: Vec<(usize, Rgb)>,
    dark: Vec<usize>,
}

impl TwinkleState {
    pub fn new(num_pixels: usize, colors: &[Rgb], ratio: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dark: Vec<usize> = (0..num_pixels).collect();
        let count = if colors.is_empty() {
            0
        } else {
            lit_count(num_pixels, ratio)
        };

        let mut lit = Vec::with_capacity(count);
        for _ in 0..count {
            let pixel = dark.swap_remove(rng.random_range(0..dark.len()));
            let color = colors[rng.random_range(0..colors.len())];
            lit.push((pixel, color));
        }

        Self {
            rng,
            colors: colors.to_vec(),
            lit,
            dark,
        }
    }

    /// Currently lit pixels and their colors
    pub fn lit(&self) -> &[(usize, Rgb)] {
        &self.lit
    }

    /// Turn one lit pixel off and light one dark pixel
    ///
    /// Returns `None` when nothing is lit.
    pub fn step(&mut self) -> Option<TwinkleStep> {
        if self.lit.is_empty() {
            return None;
        }

        let slot = self.rng.random_range(0..self.lit.len());
        let (off, _) = self.lit[slot];
        let on = if self.dark.is_empty() {
            off
        } else {
            let pixel = self
                .dark
                .swap_remove(self.rng.random_range(0..self.dark.len()));
            self.dark.push(off);
            pixel
        };
        let color = self.colors[self.rng.random_range(0..self.colors.len())];
        self.lit[slot] = (on, color);

        Some(TwinkleStep { off, on, color })
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn lit_count(num_pixels: usize, ratio: f32) -> usize {
    let count = (num_pixels as f32 * ratio.clamp(0.0, 1.0)) as usize;
    count.min(num_pixels)
}

#[derive(Debug, Clone)]
pub struct TwinkleAnimation {
    colors: Vec<Rgb>,
    ratio: f32,
    seed: u64,
    frame: Duration,
}

impl TwinkleAnimation {
    pub fn new(colors: &[Rgb], ratio: f32, seed: u64, frame: Duration) -> Self {
        Self {
            colors: colors.to_vec(),
            ratio,
            seed,
            frame,
        }
    }
}

impl Animation for TwinkleAnimation {
    fn run<D: StripDriver>(&mut self, strip: &StripHandle<D>, cancel: &CancellationToken) {
        let mut state = TwinkleState::new(strip.num_pixels(), &self.colors, self.ratio, self.seed);

        strip.with(|driver| {
            for pixel in 0..driver.num_pixels() {
                driver.set_pixel(pixel, BLACK);
            }
            for &(pixel, color) in state.lit() {
                driver.set_pixel(pixel, color);
            }
            driver.show();
        });

        let mut pacer = FramePacer::new(self.frame);
        while pacer.wait(cancel) {
            let Some(step) = state.step() else {
                continue;
            };
            strip.with(|driver| {
                driver.set_pixel(step.off, BLACK);
                driver.set_pixel(step.on, step.color);
                driver.show();
            });
        }
    }
}
