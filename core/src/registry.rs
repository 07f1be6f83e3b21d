//! Ordered handler registry.
//!
//! Keys keep the position of their first registration. Every transition
//! returns a fresh registry; a published registry is never mutated, so
//! builders that share an ancestor can diverge freely.

use crate::{Vec, handler::Handler};
use core::hash::Hash;
use hashbrown::HashMap;

pub(crate) struct Registry<K, V> {
    entries: Vec<(K, Handler<K, V>)>,
    index: HashMap<K, usize>,
}

impl<K, V> Registry<K, V>
where
    K: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<&Handler<K, V>> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub(crate) fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns a copy of `self` with `key` bound to `handler`.
    ///
    /// An existing key is rebound in place; a new key is appended.
    ///
    /// The copy is flat: entries and index are cloned (handlers only bump a
    /// reference count), so each call is O(n) and a chain of n registrations
    /// is O(n²). Use `FromIterator`/`Extend` on `Builder` to register many
    /// fields at once without intermediate copies.
    pub(crate) fn insert(&self, key: K, handler: Handler<K, V>) -> Self {
        let mut next = self.clone();
        next.insert_mut(key, handler);
        next
    }

    /// In-place variant of [`insert`](Self::insert), for registries that have
    /// not been published yet.
    pub(crate) fn insert_mut(&mut self, key: K, handler: Handler<K, V>) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = handler,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, handler));
            }
        }
    }
}

// Manual impl: cloning only bumps the handlers' reference counts, so no
// `V: Clone` bound is needed.
impl<K: Clone, V> Clone for Registry<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}
