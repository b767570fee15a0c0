//! Deferred computer replies.

use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, instrument};

/// Request for the computer to move, stamped with the session epoch it was
/// issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct ReplyTicket {
    /// Session epoch at scheduling time.
    pub epoch: u64,
}

/// Runs a reply ticket later.
///
/// Implementations hand the ticket back to whoever owns the controller once
/// `delay` has passed. They never touch game state themselves.
pub trait Scheduler {
    /// Queues `ticket` for delivery after `delay`.
    fn schedule(&mut self, ticket: ReplyTicket, delay: Duration);

    /// Drops every ticket not yet delivered.
    fn cancel_pending(&mut self);
}

/// In-memory scheduler that ignores delays.
///
/// The owner pulls due tickets with [`QueueScheduler::pop`]. Used for
/// headless play and tests.
#[derive(Debug, Default)]
pub struct QueueScheduler {
    queue: VecDeque<ReplyTicket>,
}

impl QueueScheduler {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the oldest ticket.
    pub fn pop(&mut self) -> Option<ReplyTicket> {
        self.queue.pop_front()
    }

    /// Number of tickets waiting.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Scheduler for QueueScheduler {
    #[instrument(skip(self))]
    fn schedule(&mut self, ticket: ReplyTicket, delay: Duration) {
        self.queue.push_back(ticket);
    }

    fn cancel_pending(&mut self) {
        debug!(dropped = self.queue.len(), "Cancelling queued replies");
        self.queue.clear();
    }
}
