//! Paced heart animation.
//!
//! A toggle is realized as [`MAX_PROGRESS`] progress publications, each
//! followed by a fixed pause, then one terminal publication that flips the
//! heart and resets progress. Each animation is its own tokio task and holds
//! no lock across the pause, so other commands interleave freely.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::ui::list::{ItemId, ListIntent, MAX_PROGRESS};

use super::{ListStore, Publish, StoreInner};

pub(super) struct AnimationTask {
    store: ListStore,
    id: ItemId,
}

impl AnimationTask {
    pub(super) fn new(store: ListStore, id: ItemId) -> Self {
        Self { store, id }
    }

    /// Run the animation in the background. There is no handle to cancel it.
    pub(super) fn spawn(self) {
        let guard = InFlightGuard::enter(&self.store.inner);
        let runtime = self.store.inner.runtime.clone();
        runtime.spawn(async move {
            let _guard = guard;
            self.run().await;
        });
    }

    async fn run(self) {
        let id = self.id;
        let step_interval = self.store.inner.step_interval;
        tracing::debug!(id, "heart animation started");

        for progress in 1..=MAX_PROGRESS {
            // Always published: a row deleted mid-animation still gets its
            // (unchanged) frame, and the task keeps going.
            self.store
                .apply(ListIntent::SetProgress { id, progress }, Publish::Always);
            tracing::trace!(id, progress, "heart animation step");
            tokio::time::sleep(step_interval).await;
        }

        self.store
            .apply(ListIntent::FinishToggle { id }, Publish::Always);
        tracing::debug!(id, "heart animation finished");
    }
}

/// Counts a running animation for [`ListStore::wait_idle`].
struct InFlightGuard {
    store: Arc<StoreInner>,
}

impl InFlightGuard {
    fn enter(store: &Arc<StoreInner>) -> Self {
        store.in_flight.fetch_add(1, Ordering::SeqCst);
        Self {
            store: Arc::clone(store),
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.store.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.store.idle.notify_waiters();
        }
    }
}
