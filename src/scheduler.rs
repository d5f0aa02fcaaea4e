//! Cancellable one-shot tick timer.
//!
//! The session re-arms the timer after every tick that leaves the game
//! running, so ticks never overlap and are spaced at least `delay` apart.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{sleep, Sleep};

pub struct TickScheduler {
    delay: Duration,
    pending: Option<Pin<Box<Sleep>>>,
}

impl TickScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm the next tick `delay` from now, replacing any pending one
    pub fn schedule(&mut self) {
        self.pending = Some(Box::pin(sleep(self.delay)));
    }

    /// Drop the pending tick. No-op when nothing is pending.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolve when the pending tick is due; never resolves if none is armed.
    ///
    /// Cancel safe: dropping this future keeps the deadline armed.
    pub async fn fired(&mut self) {
        match self.pending.as_mut() {
            Some(deadline) => {
                deadline.as_mut().await;
                self.pending = None;
            }
            None => future::pending::<()>().await,
        }
    }
}
