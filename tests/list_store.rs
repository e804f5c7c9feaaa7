mod common;

use std::future::poll_fn;
use std::pin::Pin;
use std::time::Duration;

use common::{assert_invariants, make_store, make_store_with, subscribe_fresh};
use futures_core::Stream;
use heartlist::store::{ListStore, StoreError, StoreSettings};
use heartlist::ui::list::{ItemId, ListState};

fn seeded_ids() -> Vec<ItemId> {
    (0..20).collect()
}

#[tokio::test]
async fn store_starts_with_seeded_items() {
    let store = make_store();
    let state = store.snapshot();
    assert_eq!(*state, ListState::seeded(20));
    assert_eq!(state.items[0].title, "Item 0");
    assert_eq!(state.items[19].title, "Item 19");
    assert_eq!(store.version(), 0);
    assert_eq!(store.animations_in_flight(), 0);
}

#[test]
fn store_outside_runtime_is_an_error() {
    let result = ListStore::new(StoreSettings::default());
    assert!(matches!(result, Err(StoreError::NoRuntime(_))));
}

#[tokio::test]
async fn move_up_swaps_with_previous() {
    let store = make_store();
    store.move_item_up(5);

    let state = store.snapshot();
    assert_eq!(state.items[4].id, 5);
    assert_eq!(state.items[5].id, 4);
    let mut expected = seeded_ids();
    expected.swap(4, 5);
    assert_eq!(state.ids(), expected);
    assert_eq!(store.version(), 1);
}

#[tokio::test]
async fn move_up_first_item_is_noop() {
    let store = make_store();
    let mut subscription = subscribe_fresh(&store);
    store.move_item_up(0);

    assert_eq!(store.snapshot().ids(), seeded_ids());
    assert_eq!(store.version(), 0);
    assert!(subscription.try_recv().is_none());
}

#[tokio::test]
async fn delete_removes_item_and_keeps_order() {
    let store = make_store();
    store.delete_item(10);

    let state = store.snapshot();
    assert_eq!(state.len(), 19);
    assert!(state.get(10).is_none());
    let expected: Vec<ItemId> = seeded_ids().into_iter().filter(|&id| id != 10).collect();
    assert_eq!(state.ids(), expected);
}

#[tokio::test]
async fn move_down_last_item_is_noop() {
    let store = make_store();
    store.move_item_down(19);
    assert_eq!(store.snapshot().ids(), seeded_ids());
    assert_eq!(store.version(), 0);
}

#[tokio::test]
async fn unknown_ids_are_silently_ignored() {
    let store = make_store();
    let mut subscription = subscribe_fresh(&store);

    store.delete_item(99);
    store.move_item_up(99);
    store.move_item_down(99);
    store.toggle_heart(99);

    assert_eq!(*store.snapshot(), ListState::seeded(20));
    assert_eq!(store.version(), 0);
    assert_eq!(store.animations_in_flight(), 0);
    assert!(subscription.try_recv().is_none());
}

#[tokio::test]
async fn move_up_then_down_is_identity() {
    let store = make_store();
    for id in 1..19 {
        store.move_item_up(id);
        store.move_item_down(id);
        assert_eq!(store.snapshot().ids(), seeded_ids(), "id {}", id);
    }
}

#[tokio::test]
async fn commands_compose_against_latest_state() {
    let store = make_store_with(4);
    store.move_item_down(0);
    store.move_item_down(0);
    store.move_item_down(0);
    assert_eq!(store.snapshot().ids(), vec![1, 2, 3, 0]);

    store.delete_item(2);
    store.move_item_up(0);
    assert_eq!(store.snapshot().ids(), vec![1, 0, 3]);
    assert_eq!(store.version(), 5);
}

#[tokio::test]
async fn delete_everything_leaves_empty_list() {
    let store = make_store_with(3);
    for id in 0..3 {
        store.delete_item(id);
    }
    assert!(store.snapshot().is_empty());
    store.move_item_up(0);
    store.move_item_down(0);
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn subscribe_replays_current_then_follows_publications() {
    let store = make_store();
    store.delete_item(0);

    let mut subscription = store.subscribe();
    let replay = subscription.recv().await.expect("replayed state");
    assert_eq!(replay.len(), 19);

    store.move_item_up(2);
    store.delete_item(5);
    let states = subscription.drain();
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].ids()[..3], [2, 1, 3]);
    assert_eq!(states[1].len(), 18);
    assert_eq!(*states[1], *store.snapshot());
    assert_invariants(&states);
}

#[tokio::test]
async fn published_snapshots_are_never_mutated() {
    let store = make_store();
    let before = store.snapshot();
    store.move_item_down(3);
    store.delete_item(7);
    assert_eq!(*before, ListState::seeded(20));
    assert_ne!(*store.snapshot(), *before);
}

#[tokio::test]
async fn every_subscriber_sees_the_same_sequence() {
    let store = make_store();
    let mut first = store.subscribe();
    store.move_item_up(3);
    let mut second = store.subscribe();
    store.delete_item(4);
    store.move_item_down(8);

    let first_states = first.drain();
    let second_states = second.drain();
    assert_eq!(first_states.len(), 4);
    assert_eq!(second_states.len(), 3);
    assert_eq!(first_states[1..], second_states[..]);
}

#[tokio::test]
async fn unsubscribe_leaves_other_subscribers_alone() {
    let store = make_store();
    let first = store.subscribe();
    let mut second = subscribe_fresh(&store);
    assert_eq!(store.subscriber_count(), 2);

    first.unsubscribe();
    assert_eq!(store.subscriber_count(), 1);

    store.delete_item(1);
    assert_eq!(second.drain().len(), 1);

    let mut third = store.subscribe();
    let replay = third.try_recv().expect("replayed state");
    assert_eq!(replay.len(), 19);
    assert_eq!(store.subscriber_count(), 2);

    drop(second);
    drop(third);
    assert_eq!(store.subscriber_count(), 0);
}

#[tokio::test]
async fn subscription_is_a_stream() {
    let store = make_store_with(3);
    let mut subscription = store.subscribe();
    store.move_item_down(0);

    let replay = poll_fn(|cx| Pin::new(&mut subscription).poll_next(cx)).await;
    assert_eq!(replay.map(|state| state.ids()), Some(vec![0, 1, 2]));
    let next = poll_fn(|cx| Pin::new(&mut subscription).poll_next(cx)).await;
    assert_eq!(next.map(|state| state.ids()), Some(vec![1, 0, 2]));
}

#[tokio::test]
async fn subscription_ends_when_store_is_dropped() {
    let store = make_store_with(2);
    let mut subscription = store.subscribe();
    drop(store);

    assert!(subscription.recv().await.is_some());
    assert!(subscription.recv().await.is_none());
}

#[tokio::test]
async fn subscriber_waiting_on_recv_is_woken() {
    let store = make_store_with(2);
    let mut subscription = subscribe_fresh(&store);

    let writer = store.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        writer.move_item_down(0);
    });

    let state = subscription.recv().await.expect("published state");
    assert_eq!(state.ids(), vec![1, 0]);
    handle.await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_commands_are_not_lost() {
    let store = make_store();
    let mut subscription = subscribe_fresh(&store);

    let handles: Vec<_> = (0..10)
        .map(|id| {
            let store = store.clone();
            tokio::spawn(async move {
                store.delete_item(id * 2);
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let expected: Vec<ItemId> = (0..10).map(|id| id * 2 + 1).collect();
    assert_eq!(store.snapshot().ids(), expected);
    assert_eq!(store.version(), 10);

    let states = subscription.drain();
    assert_eq!(states.len(), 10);
    let lengths: Vec<usize> = states.iter().map(|state| state.len()).collect();
    assert_eq!(lengths, (10..20).rev().collect::<Vec<_>>());
    assert_invariants(&states);
}
