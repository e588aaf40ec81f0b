//! Scene runner - the controller's single processing loop.

use std::sync::Arc;

use embassy_time::Duration;
use log::info;

use crate::channel::{CommandQueue, TryReceiveError};
use crate::controller::SceneController;
use crate::strip::StripDriver;

/// Poll period while the queue is empty
pub const IDLE_POLL: Duration = Duration::from_millis(5);

/// Feeds queued commands to the controller, strictly one at a time and in
/// arrival order.
pub struct SceneRunner<D: StripDriver, const SIZE: usize> {
    controller: SceneController<D>,
    queue: Arc<CommandQueue<SIZE>>,
}

impl<D: StripDriver, const SIZE: usize> SceneRunner<D, SIZE> {
    pub fn new(controller: SceneController<D>, queue: Arc<CommandQueue<SIZE>>) -> Self {
        Self { controller, queue }
    }

    pub fn controller(&self) -> &SceneController<D> {
        &self.controller
    }

    /// Handle everything currently queued
    ///
    /// Returns the number of commands handled.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(command) = self.queue.try_receive() {
            self.controller.handle(command);
            handled += 1;
        }
        handled
    }

    /// Process commands until the queue is closed and drained, then shut the
    /// controller down.
    pub fn run(mut self, clear_on_exit: bool) {
        let idle = std::time::Duration::from_micros(IDLE_POLL.as_micros());
        loop {
            match self.queue.try_receive() {
                Ok(command) => self.controller.handle(command),
                Err(TryReceiveError::Empty) => std::thread::sleep(idle),
                Err(TryReceiveError::Closed) => break,
            }
        }
        info!("command stream closed");
        self.controller.shutdown(clear_on_exit);
    }
}
