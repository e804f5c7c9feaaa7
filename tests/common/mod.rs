//! Shared helpers for list store tests.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use heartlist::store::{ListStore, StoreSettings, Subscription};
use heartlist::ui::list::{ItemId, ListState};

/// Pause between animation steps used by every store test.
pub const STEP: Duration = Duration::from_millis(16);

/// A store seeded with the default 20 rows.
pub fn make_store() -> ListStore {
    ListStore::new(StoreSettings::default()).expect("tests run inside a tokio runtime")
}

pub fn make_store_with(seed_count: ItemId) -> ListStore {
    ListStore::new(StoreSettings {
        seed_count,
        step_interval: STEP,
    })
    .expect("tests run inside a tokio runtime")
}

/// Subscribe and discard the replayed current state.
pub fn subscribe_fresh(store: &ListStore) -> Subscription {
    let mut subscription = store.subscribe();
    assert!(subscription.try_recv().is_some(), "subscribe replays state");
    subscription
}

/// Progress of `id` in every state that still contains it.
pub fn progress_of(states: &[Arc<ListState>], id: ItemId) -> Vec<u8> {
    states
        .iter()
        .filter_map(|state| state.get(id).map(|item| item.progress))
        .collect()
}

pub fn assert_invariants(states: &[Arc<ListState>]) {
    for (index, state) in states.iter().enumerate() {
        if let Err(violation) = state.check_invariants() {
            panic!("state #{} broke invariants: {}", index, violation);
        }
    }
}

/// `1..=100` followed by the terminal `0`.
pub fn full_animation() -> Vec<u8> {
    (1..=100).chain(std::iter::once(0)).collect()
}
