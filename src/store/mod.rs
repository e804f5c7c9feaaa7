//! Authoritative owner of the list state.
//!
//! [`ListStore`] serializes every transition (row commands and animation
//! steps) through a single lock, so all published states form one total
//! order that every subscriber observes identically.
//!
//! Commands never fail: an unknown id or a move past either end is a
//! silent no-op.

mod animation;
mod subscription;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, Notify};

use crate::ui::list::{ItemId, ListIntent, ListReducer, ListState, DEFAULT_SEED_COUNT};
use crate::ui::mvi::Reducer;

use animation::AnimationTask;
pub use subscription::Subscription;

/// Default pause between two animation steps.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(16);

/// Errors that can occur when constructing a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("list store must be created inside a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Construction parameters for a [`ListStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    /// Number of rows in the initial collection.
    pub seed_count: ItemId,
    /// Pause after each animation step.
    pub step_interval: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed_count: DEFAULT_SEED_COUNT,
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

/// Whether a transition that changed nothing is still published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Publish {
    IfChanged,
    Always,
}

/// Cloneable handle to the list state.
///
/// Every clone shares the same state, subscribers and animations.
#[derive(Clone)]
pub struct ListStore {
    inner: Arc<StoreInner>,
}

pub(crate) struct StoreInner {
    shared: Mutex<Shared>,
    runtime: Handle,
    step_interval: Duration,
    in_flight: AtomicUsize,
    idle: Notify,
}

struct Shared {
    current: Arc<ListState>,
    /// Number of publications since construction.
    version: u64,
    subscribers: Vec<Subscriber>,
    next_subscriber_id: u64,
}

struct Subscriber {
    id: u64,
    tx: mpsc::UnboundedSender<Arc<ListState>>,
}

impl Shared {
    fn publish(&mut self, state: Arc<ListState>) {
        self.version += 1;
        self.current = Arc::clone(&state);
        // Receivers dropped without unsubscribing are pruned here.
        self.subscribers
            .retain(|subscriber| subscriber.tx.send(Arc::clone(&state)).is_ok());
    }
}

impl StoreInner {
    pub(crate) fn remove_subscriber(&self, id: u64) {
        self.shared
            .lock()
            .subscribers
            .retain(|subscriber| subscriber.id != id);
    }
}

impl ListStore {
    /// Create a store on the current tokio runtime.
    ///
    /// # Errors
    /// Returns [`StoreError::NoRuntime`] when called outside a runtime,
    /// since toggle animations need somewhere to run.
    pub fn new(settings: StoreSettings) -> Result<Self, StoreError> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_handle(settings, runtime))
    }

    /// Create a store whose animations are spawned on `runtime`.
    pub fn with_handle(settings: StoreSettings, runtime: Handle) -> Self {
        let shared = Shared {
            current: Arc::new(ListState::seeded(settings.seed_count)),
            version: 0,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        };
        Self {
            inner: Arc::new(StoreInner {
                shared: Mutex::new(shared),
                runtime,
                step_interval: settings.step_interval,
                in_flight: AtomicUsize::new(0),
                idle: Notify::new(),
            }),
        }
    }

    /// The current state. Never blocks on an animation.
    pub fn snapshot(&self) -> Arc<ListState> {
        Arc::clone(&self.inner.shared.lock().current)
    }

    /// Number of states published since construction.
    pub fn version(&self) -> u64 {
        self.inner.shared.lock().version
    }

    /// Subscribe to state changes.
    ///
    /// The returned subscription yields the current state first, then every
    /// later publication in order. Nothing is coalesced or dropped.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut shared = self.inner.shared.lock();
        let id = shared.next_subscriber_id;
        shared.next_subscriber_id += 1;
        // Replay under the lock so no publication slips in between.
        let _ = tx.send(Arc::clone(&shared.current));
        shared.subscribers.push(Subscriber { id, tx });
        tracing::trace!(subscriber = id, "subscribed");
        Subscription::new(id, rx, Arc::downgrade(&self.inner))
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.shared.lock().subscribers.len()
    }

    /// Start the heart animation for `id`. Returns immediately.
    ///
    /// Unknown ids are ignored. A second toggle of an id that is still
    /// animating starts a second, independent animation.
    pub fn toggle_heart(&self, id: ItemId) {
        if self.inner.shared.lock().current.get(id).is_none() {
            return;
        }
        AnimationTask::new(self.clone(), id).spawn();
    }

    /// Remove the row with `id`.
    pub fn delete_item(&self, id: ItemId) {
        if self.apply(ListIntent::Delete { id }, Publish::IfChanged) {
            tracing::debug!(id, "item deleted");
        }
    }

    /// Swap the row with `id` and the row above it.
    pub fn move_item_up(&self, id: ItemId) {
        if self.apply(ListIntent::MoveUp { id }, Publish::IfChanged) {
            tracing::debug!(id, "item moved up");
        }
    }

    /// Swap the row with `id` and the row below it.
    pub fn move_item_down(&self, id: ItemId) {
        if self.apply(ListIntent::MoveDown { id }, Publish::IfChanged) {
            tracing::debug!(id, "item moved down");
        }
    }

    /// Number of heart animations still running.
    pub fn animations_in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Wait until no heart animation is running.
    pub async fn wait_idle(&self) {
        loop {
            // Register before checking the counter so a concurrent finish
            // cannot slip between the check and the await.
            let notified = self.inner.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.animations_in_flight() == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Read-modify-write against the latest state. Returns whether a state
    /// was published.
    fn apply(&self, intent: ListIntent, policy: Publish) -> bool {
        let mut shared = self.inner.shared.lock();
        let next = ListReducer::reduce(ListState::clone(&shared.current), intent);
        debug_assert!(
            next.check_invariants().is_ok(),
            "{:?} broke list invariants",
            intent
        );
        if policy == Publish::IfChanged && next == *shared.current {
            return false;
        }
        shared.publish(Arc::new(next));
        true
    }
}
