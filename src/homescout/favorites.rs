//! # Favorites Service
//!
//! Wraps the session store's durable favorites concern with an in-memory
//! cache. The cache and storage are never allowed to diverge: every mutating
//! call completes its persistence write before touching the cache, so a
//! failed write leaves memory exactly as it was.
//!
//! A favorite id is independent of the listing it refers to. Listings deleted
//! from the data source keep their entry here; callers decide how to present
//! stale ids.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::store::SessionStore;

/// Stateful favorite-set service, constructed once per session.
pub struct Favorites<S: SessionStore> {
    store: S,
    cache: BTreeSet<u64>,
    subscribers: Vec<Box<dyn Fn(&BTreeSet<u64>)>>,
}

impl<S: SessionStore> Favorites<S> {
    /// Initialize the cache from durable storage.
    pub fn load(store: S) -> Result<Self> {
        let cache = store.load_favorites()?;
        Ok(Self {
            store,
            cache,
            subscribers: Vec::new(),
        })
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.cache.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.cache.len()
    }

    pub fn ids(&self) -> &BTreeSet<u64> {
        &self.cache
    }

    /// Flip membership for `id`. Returns the new state: `true` if just
    /// added, `false` if just removed. Persists before returning; on a
    /// failed write the in-memory set is unchanged.
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let mut next = self.cache.clone();
        let added = if next.contains(&id) {
            next.remove(&id);
            false
        } else {
            next.insert(id);
            true
        };
        self.store.save_favorites(&next)?;
        self.cache = next;
        self.notify();
        Ok(added)
    }

    /// Register a change callback. Called after every completed mutation.
    pub fn subscribe(&mut self, f: impl Fn(&BTreeSet<u64>) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.cache);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = Favorites::load(InMemoryStore::new()).unwrap();

        assert!(favorites.toggle(42).unwrap());
        assert!(favorites.is_favorite(42));
        assert_eq!(favorites.count(), 1);

        assert!(!favorites.toggle(42).unwrap());
        assert!(!favorites.is_favorite(42));
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn double_toggle_restores_persisted_state() {
        let store = InMemoryStore::new();
        let mut favorites = Favorites::load(store.clone()).unwrap();
        favorites.toggle(7).unwrap();
        let persisted_before = store.load_favorites().unwrap();

        favorites.toggle(9).unwrap();
        favorites.toggle(9).unwrap();

        assert_eq!(store.load_favorites().unwrap(), persisted_before);
    }

    #[test]
    fn every_toggle_is_written_through() {
        let store = InMemoryStore::new();
        let mut favorites = Favorites::load(store.clone()).unwrap();

        favorites.toggle(1).unwrap();
        favorites.toggle(2).unwrap();

        let persisted = store.load_favorites().unwrap();
        assert_eq!(persisted, [1, 2].into_iter().collect());
    }

    #[test]
    fn failed_write_leaves_cache_unchanged() {
        let store = InMemoryStore::new();
        let mut favorites = Favorites::load(store.clone()).unwrap();
        favorites.toggle(5).unwrap();

        store.set_fail_writes(true);
        assert!(favorites.toggle(6).is_err());

        // No optimistic divergence: memory still matches storage.
        assert!(favorites.is_favorite(5));
        assert!(!favorites.is_favorite(6));
        assert_eq!(favorites.count(), 1);
        store.set_fail_writes(false);
        assert_eq!(store.load_favorites().unwrap(), *favorites.ids());
    }

    #[test]
    fn cache_initializes_from_storage() {
        let store = InMemoryStore::new();
        {
            let mut first = Favorites::load(store.clone()).unwrap();
            first.toggle(12).unwrap();
            first.toggle(34).unwrap();
        }
        let second = Favorites::load(store).unwrap();
        assert_eq!(second.count(), 2);
        assert!(second.is_favorite(12));
        assert!(second.is_favorite(34));
    }

    #[test]
    fn subscribers_see_the_new_set() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut favorites = Favorites::load(InMemoryStore::new()).unwrap();
        favorites.subscribe(move |set| sink.borrow_mut().push(set.len()));

        favorites.toggle(1).unwrap();
        favorites.toggle(2).unwrap();
        favorites.toggle(1).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }
}
