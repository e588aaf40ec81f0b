use log::trace;

use super::StripDriver;
use crate::color::{BLACK, Rgb};
use crate::error::StripError;
use crate::math8::scale8;

/// In-memory strip driver
///
/// Keeps the pending buffer and the last published frame separately so the
/// effect of [`StripDriver::show`] can be observed. Used by the simulator
/// binary and by tests.
#[derive(Debug, Clone)]
pub struct MemoryStrip {
    pending: Vec<Rgb>,
    frame: Vec<Rgb>,
    brightness: u8,
    shows: usize,
    initialized: bool,
    init_failure: Option<String>,
}

impl MemoryStrip {
    pub fn new(num_pixels: usize) -> Self {
        Self {
            pending: vec![BLACK; num_pixels],
            frame: vec![BLACK; num_pixels],
            brightness: 255,
            shows: 0,
            initialized: false,
            init_failure: None,
        }
    }

    /// A strip whose bring-up always fails with `reason`
    #[must_use]
    pub fn with_init_failure(mut self, reason: impl Into<String>) -> Self {
        self.init_failure = Some(reason.into());
        self
    }

    /// Last published frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    /// Buffered pixels, including writes not yet shown
    pub fn pending(&self) -> &[Rgb] {
        &self.pending
    }

    /// Last published frame with global brightness applied
    pub fn rendered(&self) -> Vec<Rgb> {
        self.frame
            .iter()
            .map(|color| Rgb {
                r: scale8(color.r, self.brightness),
                g: scale8(color.g, self.brightness),
                b: scale8(color.b, self.brightness),
            })
            .collect()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn show_count(&self) -> usize {
        self.shows
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// True when no pixel of the published frame is lit
    pub fn is_dark(&self) -> bool {
        self.frame.iter().all(|color| *color == BLACK)
    }
}

impl StripDriver for MemoryStrip {
    fn init(&mut self) -> Result<(), StripError> {
        if let Some(reason) = &self.init_failure {
            return Err(StripError::Init(reason.clone()));
        }
        self.initialized = true;
        Ok(())
    }

    fn num_pixels(&self) -> usize {
        self.pending.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pending.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.frame.copy_from_slice(&self.pending);
        self.shows += 1;
        let lit = self.frame.iter().filter(|color| **color != BLACK).count();
        trace!(
            "frame #{}: {lit}/{} lit, brightness {}",
            self.shows,
            self.frame.len(),
            self.brightness
        );
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}
