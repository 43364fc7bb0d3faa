//! Channel - FIFO integer queue between an interpreter and the outside
//!
//! Every interpreter owns one input and one output channel. Each queue
//! has a single producer and a single consumer at any time, enforced by
//! ownership: only the owning interpreter pops its input and pushes its
//! output, and only the ring driver (or the external caller) moves
//! values between channels. `push` always succeeds; an empty `pop` is a
//! suspend condition for the consumer, never an error.

use std::collections::VecDeque;

/// Unbounded FIFO queue of integers
#[derive(Debug, Clone, Default)]
pub struct Channel {
    queue: VecDeque<i64>,
}

impl Channel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value at the tail
    pub fn push(&mut self, value: i64) {
        self.queue.push_back(value);
    }

    /// Remove and return the oldest value, or `None` when empty
    pub fn pop(&mut self) -> Option<i64> {
        self.queue.pop_front()
    }

    /// Move every queued value out, oldest first
    pub fn drain(&mut self) -> Vec<i64> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Extend<i64> for Channel {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        self.queue.extend(iter);
    }
}

impl FromIterator<i64> for Channel {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}
