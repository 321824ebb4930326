//! Integration tests for WishlistStore: mutations, hydration, persistence, notifications.


use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use connectspace_wishlist::{
    demo, Event, InMemoryStorage, KeyValueStorage, StoragePersistence, WishlistChange,
    WishlistConfig, WishlistStore,
};
use support::{day, empty_store, full_event, open, open_with, record_changes, FlakyStorage};

#[test]
fn add_twice_counts_once() {
    let (store, _) = empty_store();
    let event = full_event(1);

    store.add(event.clone());
    store.add(event);

    assert!(store.has(1));
    assert_eq!(store.len(), 1);
}

#[test]
fn items_keep_insertion_order() {
    let (store, _) = empty_store();
    store.add(Event::new(3, "Third date, first added", day(2024, 3, 1)));
    store.add(Event::new(1, "First date, second added", day(2024, 1, 1)));

    let ids: Vec<u64> = store.items().iter().map(|event| event.id).collect();
    assert_eq!(ids, [3, 1]);
}

#[test]
fn remove_absent_id_changes_nothing() {
    let (store, storage) = empty_store();
    store.add(full_event(1));
    let before = storage.get_item("wishlist").unwrap();

    assert!(!store.remove(99));

    assert_eq!(store.len(), 1);
    assert_eq!(storage.get_item("wishlist").unwrap(), before);
}

#[test]
fn remove_present_id() {
    let (store, _) = empty_store();
    store.add(full_event(1));
    store.add(full_event(2));

    assert!(store.remove(1));
    assert!(!store.has(1));
    assert!(store.has(2));
}

#[test]
fn clear_empties_and_reloads_empty() {
    let (store, storage) = empty_store();
    store.add(full_event(1));
    store.add(full_event(2));

    store.clear();
    assert!(!store.has(1));
    assert!(!store.has(2));
    assert!(store.is_empty());

    // Restart: the key is present and empty, so no demo seed.
    let reloaded = open(&storage);
    assert!(reloaded.is_empty());
    assert_eq!(storage.get_item("wishlist").unwrap().as_deref(), Some("[]"));
}

#[test]
fn added_event_survives_restart_unchanged() {
    let (store, storage) = empty_store();
    let event = full_event(42);
    store.add(event.clone());

    let reloaded = open(&storage);
    assert_eq!(reloaded.items(), vec![event]);
}

#[test]
fn fresh_profile_is_seeded_with_demo_prefix() {
    let storage = InMemoryStorage::new();
    let store = open(&storage);

    let expected: Vec<Event> = demo::sample_events().into_iter().take(3).collect();
    assert_eq!(store.items(), expected);

    // The seed is persisted immediately.
    let raw = storage.get_item("wishlist").unwrap().unwrap();
    let stored: Vec<Event> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, expected);
}

#[test]
fn bootstrap_len_zero_starts_empty() {
    let storage = InMemoryStorage::new();
    let store = open_with(&storage, WishlistConfig::new().with_bootstrap_len(0));

    assert!(store.is_empty());
    assert_eq!(storage.get_item("wishlist").unwrap().as_deref(), Some("[]"));
}

#[test]
fn corrupt_snapshot_falls_back_to_demo_seed() {
    let storage = InMemoryStorage::with_item("wishlist", "{not json");
    let store = open(&storage);

    assert_eq!(store.len(), 3);
    let raw = storage.get_item("wishlist").unwrap().unwrap();
    assert!(serde_json::from_str::<Vec<Event>>(&raw).is_ok());
}

#[test]
fn malformed_entries_are_dropped_not_the_whole_snapshot() {
    let good = serde_json::to_value(full_event(1)).unwrap();
    let raw = serde_json::json!([good, { "id": 2, "title": "missing fields" }]).to_string();
    let storage = InMemoryStorage::with_item("wishlist", &raw);

    let store = open(&storage);
    assert_eq!(store.items(), vec![full_event(1)]);
}

#[test]
fn custom_storage_key_is_used() {
    let storage = InMemoryStorage::new();
    let store = open_with(
        &storage,
        WishlistConfig::new()
            .with_storage_key("wishlist:alice")
            .with_bootstrap_len(0),
    );
    store.add(full_event(5));

    assert!(storage.get_item("wishlist").unwrap().is_none());
    assert!(storage.get_item("wishlist:alice").unwrap().is_some());
}

#[test]
fn failed_writes_keep_in_memory_state() {
    let storage = FlakyStorage::with_item("wishlist", "[]");
    let store = WishlistStore::open(
        StoragePersistence::new(storage.clone(), "wishlist"),
        WishlistConfig::default(),
    );

    storage.fail_writes(true);
    assert!(store.add(full_event(1)));
    assert!(store.has(1));
    assert_eq!(storage.get_item("wishlist").unwrap().as_deref(), Some("[]"));

    // Next successful mutation writes the whole set.
    storage.fail_writes(false);
    store.add(full_event(2));
    let raw = storage.get_item("wishlist").unwrap().unwrap();
    let stored: Vec<Event> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 2);
}

#[test]
fn failed_seed_write_keeps_seeded_items() {
    let storage = FlakyStorage::failing();
    let store = WishlistStore::open(
        StoragePersistence::new(storage.clone(), "wishlist"),
        WishlistConfig::default(),
    );

    let expected: Vec<Event> = demo::sample_events().into_iter().take(3).collect();
    assert_eq!(store.items(), expected);
    assert!(storage.get_item("wishlist").unwrap().is_none());
}

#[test]
fn clear_with_failing_writes_still_empties_memory() {
    let storage = FlakyStorage::with_item("wishlist", "[]");
    let store = WishlistStore::open(
        StoragePersistence::new(storage.clone(), "wishlist"),
        WishlistConfig::default(),
    );
    store.add(full_event(1));
    store.add(full_event(2));

    storage.fail_writes(true);
    store.clear();

    assert!(store.is_empty());
    assert!(!store.has(1));
    let raw = storage.get_item("wishlist").unwrap().unwrap();
    let stored: Vec<Event> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 2);
}

#[test]
fn concurrent_handles_deliver_changes_in_mutation_order() {
    let (store, _) = empty_store();
    let counts = Arc::new(Mutex::new(Vec::new()));
    let (entered_tx, entered_rx) = mpsc::channel::<()>();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let entered = Mutex::new(entered_tx);
    let release = Mutex::new(release_rx);
    let sink = Arc::clone(&counts);

    store.subscribe(move |change| {
        if let WishlistChange::Added { id: 1, .. } = change {
            entered.lock().unwrap().send(()).unwrap();
            release.lock().unwrap().recv().unwrap();
        }
        sink.lock().unwrap().push(change.count());
    });

    let first = {
        let handle = store.clone();
        thread::spawn(move || handle.add(full_event(1)))
    };
    entered_rx.recv().unwrap();

    let second = {
        let handle = store.clone();
        thread::spawn(move || handle.add(full_event(2)))
    };
    thread::sleep(Duration::from_millis(50));
    release_tx.send(()).unwrap();

    assert!(first.join().unwrap());
    assert!(second.join().unwrap());
    assert_eq!(*counts.lock().unwrap(), vec![1, 2]);
    assert_eq!(store.len(), 2);
}

#[test]
fn subscribers_see_each_applied_change() {
    let (store, _) = empty_store();
    let seen = record_changes(&store);

    store.add(full_event(1));
    store.add(full_event(1));
    store.add(full_event(2));
    store.remove(1);
    store.remove(1);
    store.clear();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            WishlistChange::Added { id: 1, count: 1 },
            WishlistChange::Added { id: 2, count: 2 },
            WishlistChange::Removed { id: 1, count: 1 },
            WishlistChange::Cleared,
        ]
    );
}

#[test]
fn toggle_notifies_add_then_remove() {
    let (store, _) = empty_store();
    let seen = record_changes(&store);

    assert!(store.toggle(full_event(7)));
    assert!(!store.toggle(full_event(7)));

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            WishlistChange::Added { id: 7, count: 1 },
            WishlistChange::Removed { id: 7, count: 0 },
        ]
    );
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let (store, _) = empty_store();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(move |change| sink.lock().unwrap().push(change));

    assert!(store.unsubscribe(&subscription));
    assert!(!store.unsubscribe(&subscription));

    store.add(full_event(1));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn subscribers_on_a_clone_see_changes_from_another_handle() {
    let (store, _) = empty_store();
    let badge = store.clone();
    let seen = record_changes(&badge);

    store.add(full_event(1));

    assert_eq!(seen.lock().unwrap().last().map(WishlistChange::count), Some(1));
    assert_eq!(badge.len(), 1);
}

#[test]
fn listener_can_read_the_store() {
    let (store, _) = empty_store();
    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    let reader = store.clone();
    store.subscribe(move |_| sink.lock().unwrap().push(reader.len()));

    store.add(full_event(1));
    store.add(full_event(2));

    assert_eq!(*observed.lock().unwrap(), vec![1, 2]);
}
