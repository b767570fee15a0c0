//! Tokio-backed reply scheduler.

use noughts_core::{ReplyTicket, Scheduler};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Sleeps on the runtime, then sends the ticket back to the event loop.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<ReplyTicket>,
    pending: Vec<JoinHandle<()>>,
}

impl TokioScheduler {
    /// Creates a scheduler delivering on `tx`.
    pub fn new(tx: mpsc::UnboundedSender<ReplyTicket>) -> Self {
        Self {
            tx,
            pending: Vec::new(),
        }
    }

    /// Number of timers not yet finished.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    #[instrument(skip(self))]
    fn schedule(&mut self, ticket: ReplyTicket, delay: Duration) {
        self.pending.retain(|h| !h.is_finished());
        let tx = self.tx.clone();
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!(?ticket, "Event loop gone, dropping reply");
            }
        }));
    }

    fn cancel_pending(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivers_ticket_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);

        scheduler.schedule(ReplyTicket::new(3), Duration::from_millis(5));

        assert_eq!(rx.recv().await, Some(ReplyTicket::new(3)));
    }

    #[tokio::test]
    async fn test_cancel_stops_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);

        scheduler.schedule(ReplyTicket::new(1), Duration::from_millis(50));
        scheduler.cancel_pending();

        let received = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
        assert!(received.is_err(), "cancelled ticket was delivered");
        assert_eq!(scheduler.pending(), 0);
    }
}
