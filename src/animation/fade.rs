//! Fade between colors
//!
//! The whole strip cycles through a precomputed sequence of colors that
//! steps linearly from each color to the next, wrapping from the last color
//! back to the first.

use embassy_time::Duration;

use super::Animation;
use crate::color::{Rgb, lerp_colors};
use crate::frame_scheduler::FramePacer;
use crate::strip::{StripDriver, StripHandle, fill};
use crate::task::CancellationToken;

/// Precompute the cyclic fade sequence
///
/// Each consecutive pair contributes `steps` colors: step 0 (the pair's
/// source) up to, but not including, the next color. Taking one more step
/// after the last element lands exactly on `colors[0]`.
pub fn fade_sequence(colors: &[Rgb], steps: u16) -> Vec<Rgb> {
    let steps = steps.max(1);
    let mut sequence = Vec::with_capacity(colors.len() * usize::from(steps));
    for (index, &from) in colors.iter().enumerate() {
        let to = colors[(index + 1) % colors.len()];
        sequence.extend((0..steps).map(|step| lerp_colors(from, to, step, steps)));
    }
    sequence
}

#[derive(Debug, Clone)]
pub struct FadeAnimation {
    sequence: Vec<Rgb>,
    frame: Duration,
}

impl FadeAnimation {
    pub fn new(colors: &[Rgb], steps: u16, frame: Duration) -> Self {
        Self {
            sequence: fade_sequence(colors, steps),
            frame,
        }
    }

    pub fn sequence(&self) -> &[Rgb] {
        &self.sequence
    }
}

impl Animation for FadeAnimation {
    fn run<D: StripDriver>(&mut self, strip: &StripHandle<D>, cancel: &CancellationToken) {
        let mut pacer = FramePacer::new(self.frame);
        if self.sequence.is_empty() {
            while pacer.wait(cancel) {}
            return;
        }
        loop {
            for &color in &self.sequence {
                strip.with(|driver| fill(driver, color));
                if !pacer.wait(cancel) {
                    return;
                }
            }
        }
    }
}
