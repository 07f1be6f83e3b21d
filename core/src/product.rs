//! The materialized product of a [`Builder`](crate::Builder).
//!
//! A product owns no field values. Each read looks the key up and invokes the
//! registered handler with the product itself, so:
//!
//! - fields are recomputed on every read (no memoization);
//! - every handler sees the same product identity, whatever its position in
//!   the registration order, which is what makes forward references and
//!   (mutual) recursion work.

use crate::{Arc, registry::Registry};
use core::{fmt, hash::Hash};

struct Inner<K, V> {
    registry: Arc<Registry<K, V>>,
}

/// A record with one lazily evaluated field per registered key.
///
/// Cloning a product is cheap and yields a handle to the *same* product:
/// [`Product::ptr_eq`] holds between clones but never between the results of
/// two separate `build()` calls.
pub struct Product<K, V> {
    inner: Arc<Inner<K, V>>,
}

impl<K, V> Product<K, V>
where
    K: Eq + Hash + Clone,
{
    pub(crate) fn new(registry: Arc<Registry<K, V>>) -> Self {
        Self {
            inner: Arc::new(Inner { registry }),
        }
    }

    /// Reads the field `key`, invoking its handler.
    ///
    /// Returns `None` if `key` was not registered on the builder this product
    /// was built from. Panics raised by the handler propagate unchanged, and
    /// a handler that recurses without a base case does not return.
    pub fn get(&self, key: &K) -> Option<V> {
        let handler = self.inner.registry.get(key)?;
        Some(handler(self))
    }

    /// Whether the product has a field named `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.registry.contains_key(key)
    }

    /// Field names, in registration order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.inner.registry.keys()
    }

    pub fn len(&self) -> usize {
        self.inner.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Product<K, V> {
    /// Returns true when both handles refer to the same materialization.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl<K, V> Clone for Product<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// Never reads fields: doing so would run arbitrary handlers.
impl<K, V> fmt::Debug for Product<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Product")
            .field("keys", &KeyList(self))
            .finish()
    }
}

struct KeyList<'a, K, V>(&'a Product<K, V>);

impl<K, V> fmt::Debug for KeyList<'_, K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.keys()).finish()
    }
}

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;
