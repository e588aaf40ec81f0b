#![allow(dead_code)]

use std::thread;
use std::time::{Duration as StdDuration, Instant};

use myrtio_light_scene::animation::AnimationConfig;
use myrtio_light_scene::error::StripError;
use myrtio_light_scene::strip::{MemoryStrip, StripDriver};
use myrtio_light_scene::{Duration, Rgb, SceneControllerConfig};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

/// Controller config with 1 ms frames so renderers cycle quickly
pub fn fast_config() -> SceneControllerConfig {
    SceneControllerConfig {
        animation: AnimationConfig::default().with_frame(Duration::from_millis(1)),
        ..SceneControllerConfig::default()
    }
}

/// Poll `condition` until it holds or two seconds pass
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + StdDuration::from_secs(2);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(StdDuration::from_millis(1));
    }
    condition()
}

pub fn settle() {
    thread::sleep(StdDuration::from_millis(20));
}

/// Memory strip that remembers which thread published each frame
#[derive(Debug)]
pub struct RecordingStrip {
    inner: MemoryStrip,
    publishers: Vec<String>,
    fail_workers: bool,
}

impl RecordingStrip {
    pub fn new(num_pixels: usize) -> Self {
        Self {
            inner: MemoryStrip::new(num_pixels),
            publishers: Vec::new(),
            fail_workers: false,
        }
    }

    /// Panic whenever an animation worker publishes a frame
    pub fn failing_workers(mut self) -> Self {
        self.fail_workers = true;
        self
    }

    pub fn publishers(&self) -> &[String] {
        &self.publishers
    }

    pub fn memory(&self) -> &MemoryStrip {
        &self.inner
    }
}

pub fn is_worker(name: &str) -> bool {
    name.starts_with("scene-")
}

impl StripDriver for RecordingStrip {
    fn init(&mut self) -> Result<(), StripError> {
        self.inner.init()
    }

    fn num_pixels(&self) -> usize {
        self.inner.num_pixels()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.inner.set_pixel(index, color);
    }

    fn show(&mut self) {
        let name = thread::current().name().unwrap_or("unnamed").to_string();
        if self.fail_workers && is_worker(&name) {
            panic!("strip exploded");
        }
        self.publishers.push(name);
        self.inner.show();
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.inner.set_brightness(brightness);
    }
}
