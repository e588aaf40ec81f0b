//! Frame pacing for renderer loops.
//!
//! Each animation worker owns a [`FramePacer`] and calls
//! [`FramePacer::wait`] once per frame. The wait is also where the worker
//! observes cancellation, so teardown latency is bounded by one frame.

use embassy_time::{Duration, Instant};

use crate::task::CancellationToken;

/// Drift-corrected fixed-period frame pacer.
///
/// If the loop falls behind by more than two frames the schedule is reset
/// to now, skipping the backlog instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    next_frame: Instant,
    frame_duration: Duration,
}

impl FramePacer {
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            next_frame: Instant::now(),
            frame_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Sleep until the next frame deadline.
    ///
    /// Returns `false` once `cancel` has been requested; the caller must
    /// leave its loop without writing another frame.
    pub fn wait(&mut self, cancel: &CancellationToken) -> bool {
        if cancel.is_cancelled() {
            return false;
        }

        let now = Instant::now();
        let max_drift = Duration::from_micros(self.frame_duration.as_micros() * 2);
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }
        self.next_frame += self.frame_duration;

        if self.next_frame > now {
            let remaining = self.next_frame.duration_since(now);
            std::thread::sleep(std::time::Duration::from_micros(remaining.as_micros()));
        }

        !cancel.is_cancelled()
    }
}
