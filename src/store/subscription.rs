use std::pin::Pin;
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::mpsc;

use crate::ui::list::ListState;

use super::StoreInner;

/// Push-based view of a [`ListStore`](super::ListStore).
///
/// Yields the state current at subscription time, then every published
/// state in publication order. Ends only when the store is gone.
/// Dropping the subscription unsubscribes it.
pub struct Subscription {
    id: u64,
    rx: mpsc::UnboundedReceiver<Arc<ListState>>,
    store: Weak<StoreInner>,
}

impl Subscription {
    pub(crate) fn new(
        id: u64,
        rx: mpsc::UnboundedReceiver<Arc<ListState>>,
        store: Weak<StoreInner>,
    ) -> Self {
        Self { id, rx, store }
    }

    /// Wait for the next state. `None` once the store has been dropped.
    pub async fn recv(&mut self) -> Option<Arc<ListState>> {
        self.rx.recv().await
    }

    /// Take the next queued state without waiting.
    pub fn try_recv(&mut self) -> Option<Arc<ListState>> {
        self.rx.try_recv().ok()
    }

    /// Take every queued state without waiting, oldest first.
    pub fn drain(&mut self) -> Vec<Arc<ListState>> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }

    /// Stop receiving publications. Other subscribers are unaffected.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.remove_subscriber(self.id);
            tracing::trace!(subscriber = self.id, "unsubscribed");
        }
    }
}

impl Stream for Subscription {
    type Item = Arc<ListState>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}
