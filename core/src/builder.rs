//! Immutable builder of self-referential products.
//!
//! A [`Builder`] is an ordered collection of field handlers. Registering or
//! overriding a field never touches the receiver; it returns a new builder,
//! so several variants can branch off a shared prefix of declarations.
//!
//! # Example
//!
//! ```
//! use object_builder_core::Builder;
//!
//! // `total` is declared before the fields it reads.
//! let builder = Builder::<&str, i64>::create()
//!     .with("total", |p| p.get(&"price").unwrap() * p.get(&"qty").unwrap())
//!     .with("price", |_| 3)
//!     .with("qty", |_| 4);
//!
//! let product = builder.build();
//! assert_eq!(product.get(&"total"), Some(12));
//!
//! // Overriding wraps the previous handler instead of replacing it.
//! let discounted = builder
//!     .override_with("price", |_, price| price - 1)
//!     .unwrap()
//!     .build();
//! assert_eq!(discounted.get(&"total"), Some(8));
//!
//! // The original builder is unaffected.
//! assert_eq!(builder.build().get(&"total"), Some(12));
//! ```

use crate::{
    Arc, ToString, Vec,
    error::{Error, Result},
    handler::{self, Handler, OverrideHandler},
    product::Product,
    registry::Registry,
};
use core::{fmt, hash::Hash};

/// Requirements on a field key.
///
/// `Display` is needed so errors can name the key.
pub trait FieldKey: Eq + Hash + Clone + fmt::Display + 'static {}

impl<T> FieldKey for T where T: Eq + Hash + Clone + fmt::Display + 'static {}

/// Persistent, ordered mapping from field keys to [`Handler`]s.
///
/// See the [module documentation](self) for an example.
pub struct Builder<K, V> {
    registry: Arc<Registry<K, V>>,
}

static_assertions::assert_eq_size!(Builder<&'static str, i64>, usize);
static_assertions::assert_impl_all!(Builder<&'static str, i64>: Send, Sync, Clone);

impl<K, V> Builder<K, V>
where
    K: FieldKey,
    V: 'static,
{
    /// Creates an empty builder.
    pub fn create() -> Self {
        Self::from_registry(Registry::new())
    }

    /// Same as [`create`](Self::create).
    #[inline]
    pub fn new() -> Self {
        Self::create()
    }

    fn from_registry(registry: Registry<K, V>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a new builder where `key` is computed by `handler`.
    ///
    /// A new key is appended after the existing ones. Registering a key that
    /// is already present replaces its handler but keeps its position.
    pub fn with<F>(&self, key: K, handler: F) -> Self
    where
        F: Fn(&Product<K, V>) -> V + Send + Sync + 'static,
    {
        self.with_handler(key, Arc::new(handler))
    }

    /// Like [`with`](Self::with), for an already boxed [`Handler`].
    pub fn with_handler(&self, key: K, handler: Handler<K, V>) -> Self {
        if self.registry.contains_key(&key) {
            tracing::trace!(key = %key, "Replacing field handler in place");
        } else {
            tracing::trace!(key = %key, "Registering field handler");
        }
        Self::from_registry(self.registry.insert(key, handler))
    }

    /// Returns a new builder where `key` is computed by `handler`, which
    /// receives the value the currently registered handler produces.
    ///
    /// The current handler is captured, so layering overrides composes them
    /// like successive `super` calls. The key keeps its position.
    ///
    /// # Errors
    ///
    /// [`Error::OverrideUnsetKey`] if `key` has no handler in `self`.
    pub fn override_with<F>(&self, key: K, handler: F) -> Result<Self>
    where
        F: Fn(&Product<K, V>, V) -> V + Send + Sync + 'static,
    {
        let Some(previous) = self.registry.get(&key) else {
            tracing::debug!(key = %key, "Override of an unset key");
            return Err(Error::OverrideUnsetKey {
                key: key.to_string(),
            });
        };

        tracing::debug!(key = %key, "Overriding field handler");
        let wrapped = handler::wrap(Arc::clone(previous), handler);
        Ok(Self::from_registry(self.registry.insert(key, wrapped)))
    }

    /// Like [`override_with`](Self::override_with), for an already boxed
    /// [`OverrideHandler`].
    pub fn override_with_handler(&self, key: K, handler: OverrideHandler<K, V>) -> Result<Self> {
        self.override_with(key, move |product: &Product<K, V>, previous: V| {
            handler(product, previous)
        })
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> Vec<K> {
        self.registry.keys().cloned().collect()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.registry.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes a new product.
    ///
    /// No handler runs here; fields are computed when read. Each call
    /// returns a distinct product.
    pub fn build(&self) -> Product<K, V> {
        tracing::debug!(fields = self.registry.len(), "Building product");
        Product::new(Arc::clone(&self.registry))
    }
}

impl<K, V> Clone for Builder<K, V> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<K, V> Default for Builder<K, V>
where
    K: FieldKey,
    V: 'static,
{
    fn default() -> Self {
        Self::create()
    }
}

impl<K, V> fmt::Debug for Builder<K, V>
where
    K: FieldKey + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("keys", &self.registry.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Collects handlers as if registered one by one with
/// [`with_handler`](Builder::with_handler).
impl<K, V> FromIterator<(K, Handler<K, V>)> for Builder<K, V>
where
    K: FieldKey,
    V: 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, Handler<K, V>)>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for (key, handler) in iter {
            registry.insert_mut(key, handler);
        }
        Self::from_registry(registry)
    }
}

impl<K, V> Extend<(K, Handler<K, V>)> for Builder<K, V>
where
    K: FieldKey,
    V: 'static,
{
    fn extend<I: IntoIterator<Item = (K, Handler<K, V>)>>(&mut self, iter: I) {
        // Copies the registry if another builder or product still shares it.
        let registry = Arc::make_mut(&mut self.registry);
        for (key, handler) in iter {
            registry.insert_mut(key, handler);
        }
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
