//! Payload-free "something changed, re-fetch" signal between views.
//!
//! DESIGN
//! ======
//! A thin wrapper over `tokio::sync::broadcast<()>`. Publishers call
//! [`RefreshBus::notify`] after a question or reply mutation; every live
//! [`RefreshSubscription`] observes it once. Signals are not persisted and
//! coalesce: a subscriber that fell behind sees one pending refresh, not many.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

const CHANNEL_CAPACITY: usize = 16;

#[derive(Clone, Debug)]
pub struct RefreshBus {
    tx: broadcast::Sender<()>,
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshBus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Tell every subscriber to re-fetch. Returns how many were listening.
    pub fn notify(&self) -> usize {
        let listeners = self.tx.send(()).unwrap_or(0);
        tracing::debug!(listeners, "refresh broadcast");
        listeners
    }

    #[must_use]
    pub fn subscribe(&self) -> RefreshSubscription {
        RefreshSubscription { rx: self.tx.subscribe() }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// One view's end of the bus. Dropping it unsubscribes.
#[derive(Debug)]
pub struct RefreshSubscription {
    rx: broadcast::Receiver<()>,
}

impl RefreshSubscription {
    /// Wait for the next refresh. Returns `false` once every bus handle is gone.
    pub async fn changed(&mut self) -> bool {
        match self.rx.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => {
                self.drain();
                true
            }
            Err(RecvError::Closed) => false,
        }
    }

    /// Call `on_change` for each refresh until `stop` resolves or the bus
    /// closes. The subscription is dropped on return.
    pub async fn run_until(mut self, stop: impl Future, mut on_change: impl FnMut()) {
        let mut stop = pin!(stop);
        loop {
            let next = pin!(self.changed());
            match select(next, stop.as_mut()).await {
                Either::Left((true, _)) => on_change(),
                Either::Left((false, _)) | Either::Right(_) => break,
            }
        }
    }

    /// Non-blocking check; consumes all pending signals.
    pub fn try_changed(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(()) | Err(TryRecvError::Lagged(_)) => {
                self.drain();
                true
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => false,
        }
    }

    fn drain(&mut self) {
        while matches!(self.rx.try_recv(), Ok(()) | Err(TryRecvError::Lagged(_))) {}
    }
}
