//! Bounded command queue between a transport and the scene runner.
//!
//! Built on `critical-section` and `heapless::Deque`, so the same queue
//! works from threads and interrupt contexts. Producers may block with
//! backoff when the queue is full; closing the queue lets the consumer
//! drain what is left and stop.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;
use heapless::Deque;

use crate::command::Command;

/// Producer backoff while the queue is full, in microseconds
pub const QUEUE_BACKOFF_MICROS: u64 = 500;

/// Error returned when trying to send to a full or closed channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrySendError<T> {
    Full(T),
    Closed(T),
}

impl<T> TrySendError<T> {
    /// Recover the value that could not be sent
    pub fn into_inner(self) -> T {
        match self {
            Self::Full(value) | Self::Closed(value) => value,
        }
    }
}

/// Error returned when trying to receive from a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryReceiveError {
    /// Nothing queued right now
    Empty,
    /// Closed and fully drained
    Closed,
}

/// A bounded, thread-safe FIFO channel.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
    closed: AtomicBool,
}

/// Queue of decoded commands waiting for the controller
pub type CommandQueue<const SIZE: usize> = Channel<Command, SIZE>;

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
            closed: AtomicBool::new(false),
        }
    }

    /// Try to send a value into the channel.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        if self.is_closed() {
            return Err(TrySendError::Closed(value));
        }
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError::Full)
        })
    }

    /// Send a value, backing off while the channel is full.
    ///
    /// Returns the value back if the channel gets closed meanwhile.
    pub fn send_blocking(&self, value: T) -> Result<(), T> {
        let mut value = value;
        loop {
            match self.try_send(value) {
                Ok(()) => return Ok(()),
                Err(TrySendError::Closed(rejected)) => return Err(rejected),
                Err(TrySendError::Full(rejected)) => {
                    value = rejected;
                    std::thread::sleep(std::time::Duration::from_micros(QUEUE_BACKOFF_MICROS));
                }
            }
        }
    }

    /// Try to receive a value from the channel.
    ///
    /// A closed channel keeps yielding queued values until it is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        if let Some(value) = self.pop() {
            return Ok(value);
        }
        if !self.is_closed() {
            return Err(TryReceiveError::Empty);
        }
        // Values pushed right before `close` are visible once it is observed
        self.pop().ok_or(TryReceiveError::Closed)
    }

    fn pop(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Stop accepting new values
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
