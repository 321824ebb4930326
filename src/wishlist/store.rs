//! WishlistStore - The shared, persisted set of saved events.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use event_emitter_rs::EventEmitter;
use tracing::{debug, warn};

use crate::config::WishlistConfig;
use crate::demo;
use crate::event::{Event, EventId};
use crate::view::{self, ViewOptions, WishlistSummary};

use super::change::{Subscription, WishlistChange, CHANGED};
use super::persistence::WishlistPersistence;

/// The user's saved events, kept in insertion order and keyed by `Event::id`.
///
/// Clone-friendly: every clone shares the same items, persistence, and
/// subscribers, so pages, cards, and badges can each hold their own handle.
///
/// Operations never fail. Storage failures are logged and the in-memory set
/// stays authoritative; the next successful write persists the whole set.
///
/// # Example
///
/// ```ignore
/// let store = WishlistStore::open(
///     StoragePersistence::new(InMemoryStorage::new(), "wishlist"),
///     WishlistConfig::default(),
/// );
///
/// store.subscribe(|change| println!("wishlist now has {} events", change.count()));
/// store.add(event);
/// assert!(store.has(event_id));
/// ```
pub struct WishlistStore<P> {
    items: Arc<RwLock<Vec<Event>>>,
    persistence: Arc<P>,
    emitter: Arc<Mutex<EventEmitter>>,
    delivery: Arc<Mutex<()>>,
    config: Arc<WishlistConfig>,
}

impl<P> Clone for WishlistStore<P> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            persistence: Arc::clone(&self.persistence),
            emitter: Arc::clone(&self.emitter),
            delivery: Arc::clone(&self.delivery),
            config: Arc::clone(&self.config),
        }
    }
}

impl<P: WishlistPersistence> WishlistStore<P> {
    /// Hydrate a store from `persistence`.
    ///
    /// When nothing is stored yet, or the stored snapshot is unreadable, the
    /// store is seeded with the first `config.bootstrap_len` demo events and
    /// that seed is persisted straight away.
    pub fn open(persistence: P, config: WishlistConfig) -> Self {
        let items = hydrate(&persistence, &config);
        Self {
            items: Arc::new(RwLock::new(items)),
            persistence: Arc::new(persistence),
            emitter: Arc::new(Mutex::new(EventEmitter::new())),
            delivery: Arc::new(Mutex::new(())),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &WishlistConfig {
        &self.config
    }

    /// Access the persistence adapter.
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Save `event` unless an event with the same id is already saved.
    ///
    /// Returns true if it was inserted. An existing entry is kept, not replaced.
    pub fn add(&self, event: Event) -> bool {
        self.mutate(|items| {
            if items.iter().any(|item| item.id == event.id) {
                return None;
            }
            let id = event.id;
            items.push(event);
            Some(WishlistChange::Added {
                id,
                count: items.len(),
            })
        })
        .is_some()
    }

    /// Remove the event with `id`. Returns true if it was saved.
    pub fn remove(&self, id: EventId) -> bool {
        self.mutate(|items| {
            let index = items.iter().position(|item| item.id == id)?;
            items.remove(index);
            Some(WishlistChange::Removed {
                id,
                count: items.len(),
            })
        })
        .is_some()
    }

    /// Remove `event` if it is saved, save it otherwise. Returns true if it is saved afterwards.
    pub fn toggle(&self, event: Event) -> bool {
        let change = self.mutate(|items| {
            let id = event.id;
            match items.iter().position(|item| item.id == id) {
                Some(index) => {
                    items.remove(index);
                    Some(WishlistChange::Removed {
                        id,
                        count: items.len(),
                    })
                }
                None => {
                    items.push(event);
                    Some(WishlistChange::Added {
                        id,
                        count: items.len(),
                    })
                }
            }
        });
        matches!(change, Some(WishlistChange::Added { .. }))
    }

    pub fn has(&self, id: EventId) -> bool {
        self.read_items().iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: EventId) -> Option<Event> {
        self.read_items().iter().find(|item| item.id == id).cloned()
    }

    /// Empty the wishlist.
    ///
    /// An empty array is persisted rather than deleting the key, so a cleared
    /// wishlist reloads empty instead of being re-seeded with demo events.
    pub fn clear(&self) {
        self.mutate(|items| {
            items.clear();
            Some(WishlistChange::Cleared)
        });
    }

    /// Snapshot of the saved events, oldest add first.
    pub fn items(&self) -> Vec<Event> {
        self.read_items().clone()
    }

    pub fn len(&self) -> usize {
        self.read_items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_items().is_empty()
    }

    /// Filtered and sorted copy of the current snapshot.
    pub fn view(&self, options: &ViewOptions) -> Vec<Event> {
        let items = self.read_items();
        view::apply(&items, options).into_iter().cloned().collect()
    }

    /// Filtered and sorted events dated within the configured window from `today`.
    pub fn upcoming(&self, options: &ViewOptions, today: NaiveDate) -> Vec<Event> {
        let items = self.read_items();
        let sorted = view::apply(&items, options);
        view::upcoming(&sorted, today, self.config.upcoming_window_days)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Category choices for the current snapshot, `"All"` first.
    pub fn categories(&self) -> Vec<String> {
        view::categories(&self.read_items())
    }

    pub fn summary(&self, today: NaiveDate) -> WishlistSummary {
        WishlistSummary::from_items(&self.read_items(), today, self.config.upcoming_window_days)
    }

    /// Register `listener` for every applied change.
    ///
    /// Listeners run on emitter threads; the mutating call returns only after
    /// all of them have finished. Changes arrive in mutation order, even when
    /// several handles mutate concurrently. A listener must not mutate the
    /// store it is subscribed to.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(WishlistChange) + Send + Sync + 'static,
    {
        let id = self
            .lock_emitter()
            .on(CHANGED, move |change: WishlistChange| listener(change));
        Subscription::new(id)
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn unsubscribe(&self, subscription: &Subscription) -> bool {
        self.lock_emitter()
            .remove_listener(subscription.id())
            .is_some()
    }

    /// Apply one mutation and deliver its change.
    ///
    /// `apply` returns None for a no-op, which neither writes nor notifies.
    /// The delivery lock is held from before the items are touched until every
    /// listener has returned, so changes reach subscribers in mutation order
    /// across all handles. Listeners may read the store but must not mutate it.
    fn mutate<F>(&self, apply: F) -> Option<WishlistChange>
    where
        F: FnOnce(&mut Vec<Event>) -> Option<WishlistChange>,
    {
        let _delivery = self.lock_delivery();
        let change = {
            let mut items = self.write_items();
            let change = apply(&mut items)?;
            self.persist(&items);
            change
        };
        self.notify(change.clone());
        Some(change)
    }

    fn persist(&self, items: &[Event]) {
        if let Err(err) = self.persistence.save(items) {
            warn!(
                error = %err,
                key = %self.config.storage_key,
                count = items.len(),
                "failed to persist wishlist, keeping in-memory state"
            );
        }
    }

    fn notify(&self, change: WishlistChange) {
        let handles = self.lock_emitter().emit(CHANGED, change);
        for handle in handles {
            if handle.join().is_err() {
                warn!("wishlist listener panicked");
            }
        }
    }

    fn read_items(&self) -> RwLockReadGuard<'_, Vec<Event>> {
        self.items.read().unwrap_or_else(|poisoned| {
            warn!("wishlist lock poisoned during read, recovering");
            poisoned.into_inner()
        })
    }

    fn write_items(&self) -> RwLockWriteGuard<'_, Vec<Event>> {
        self.items.write().unwrap_or_else(|poisoned| {
            warn!("wishlist lock poisoned during write, recovering");
            poisoned.into_inner()
        })
    }

    fn lock_delivery(&self) -> MutexGuard<'_, ()> {
        self.delivery.lock().unwrap_or_else(|poisoned| {
            warn!("wishlist delivery lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn lock_emitter(&self) -> MutexGuard<'_, EventEmitter> {
        self.emitter.lock().unwrap_or_else(|poisoned| {
            warn!("wishlist emitter lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

fn hydrate<P: WishlistPersistence>(persistence: &P, config: &WishlistConfig) -> Vec<Event> {
    match persistence.load() {
        Ok(Some(items)) => {
            let items = dedupe(items);
            debug!(key = %config.storage_key, count = items.len(), "hydrated wishlist");
            return items;
        }
        Ok(None) => {
            debug!(key = %config.storage_key, "no stored wishlist, seeding demo events");
        }
        Err(err) => {
            warn!(
                error = %err,
                key = %config.storage_key,
                "unreadable wishlist snapshot, seeding demo events"
            );
        }
    }

    let seed: Vec<Event> = demo::sample_events()
        .into_iter()
        .take(config.bootstrap_len)
        .collect();
    if let Err(err) = persistence.save(&seed) {
        warn!(error = %err, key = %config.storage_key, "failed to persist demo wishlist");
    }
    seed
}

/// Collapse repeated ids, keeping the first occurrence.
fn dedupe(items: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.id)).collect()
}
