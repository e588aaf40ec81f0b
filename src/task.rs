//! Cancellable animation tasks
//!
//! One worker thread per running animation. Cancellation is cooperative:
//! the renderer polls its [`CancellationToken`] once per frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use log::debug;

use crate::animation::{Animation, AnimationId, AnimationSlot};
use crate::error::AnimationFault;
use crate::strip::{StripDriver, StripHandle};

/// Per-task cancellation flag
///
/// Cloning shares the flag. Cancelling is idempotent and cancelling a task
/// that already exited has no effect.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// A running renderer bound to one scene activation
#[derive(Debug)]
pub struct AnimationTask {
    animation: AnimationId,
    cancel: CancellationToken,
    worker: JoinHandle<()>,
}

impl AnimationTask {
    /// Start `slot` on a dedicated worker thread
    pub fn spawn<D: StripDriver>(
        animation: AnimationId,
        slot: AnimationSlot,
        strip: StripHandle<D>,
    ) -> std::io::Result<Self> {
        Self::spawn_with_stack(animation, slot, strip, None)
    }

    /// Like [`AnimationTask::spawn`], with an explicit worker stack size
    pub fn spawn_with_stack<D: StripDriver>(
        animation: AnimationId,
        mut slot: AnimationSlot,
        strip: StripHandle<D>,
        stack_size: Option<usize>,
    ) -> std::io::Result<Self> {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let mut builder =
            thread::Builder::new().name(format!("scene-{}", animation.as_str().to_ascii_lowercase()));
        if let Some(size) = stack_size {
            builder = builder.stack_size(size);
        }
        let worker = builder
            .spawn(move || {
                debug!("{animation} worker started");
                slot.run(&strip, &token);
                debug!("{animation} worker stopped");
            })?;

        Ok(Self {
            animation,
            cancel,
            worker,
        })
    }

    pub const fn animation(&self) -> AnimationId {
        self.animation
    }

    /// Token observed by the renderer loop
    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// True once the worker has left its loop
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Request cancellation without waiting
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancel and block until the worker has exited
    pub fn stop(self) -> Option<AnimationFault> {
        self.cancel.cancel();
        self.join()
    }

    /// Block until the worker has exited
    ///
    /// Never fails. A renderer panic is returned as a fault.
    pub fn join(self) -> Option<AnimationFault> {
        let animation = self.animation;
        match self.worker.join() {
            Ok(()) => None,
            Err(payload) => Some(AnimationFault::from_panic(animation, &*payload)),
        }
    }
}
