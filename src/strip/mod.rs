//! Strip driver abstraction
//!
//! The controller and every renderer talk to the hardware only through
//! [`StripDriver`], shared between threads via [`StripHandle`].

mod memory;

use std::sync::Arc;

use parking_lot::Mutex;

pub use memory::MemoryStrip;

use crate::color::{BLACK, Rgb};
use crate::error::StripError;

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// Pixel writes are buffered until [`StripDriver::show`], which is the
/// single publish point for everything set since the previous `show`.
pub trait StripDriver: Send + 'static {
    /// One-time hardware bring-up
    fn init(&mut self) -> Result<(), StripError>;

    /// Number of addressable pixels
    fn num_pixels(&self) -> usize;

    /// Buffer a color for one pixel. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Publish buffered pixel writes
    fn show(&mut self);

    /// Set the driver-level global brightness
    fn set_brightness(&mut self, brightness: u8);
}

/// Shared handle to the strip driver
///
/// Cloned into each animation worker. Every frame, brightness change and
/// wipe runs under the lock, so a `show` never interleaves with another
/// caller's pixel writes. Which renderer may write at all is decided by the
/// controller, which joins the old worker before starting a new one.
pub struct StripHandle<D> {
    inner: Arc<Mutex<D>>,
}

impl<D: StripDriver> StripHandle<D> {
    pub fn new(driver: D) -> Self {
        Self {
            inner: Arc::new(Mutex::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the driver
    pub fn with<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut driver = self.inner.lock();
        f(&mut driver)
    }

    pub fn num_pixels(&self) -> usize {
        self.inner.lock().num_pixels()
    }

    /// Paint every pixel with one color and publish the frame
    pub fn fill(&self, color: Rgb) {
        self.with(|driver| fill(driver, color));
    }

    /// Turn every pixel off in a single frame
    pub fn wipe(&self) {
        self.fill(BLACK);
    }
}

impl<D> Clone for StripHandle<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Paint every pixel with one color and publish the frame
pub fn fill<D: StripDriver + ?Sized>(driver: &mut D, color: Rgb) {
    for index in 0..driver.num_pixels() {
        driver.set_pixel(index, color);
    }
    driver.show();
}
