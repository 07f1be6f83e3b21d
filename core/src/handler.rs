//! Handler types: the "constructors" of a product's fields.
//!
//! A [`Handler`] computes one field from the finished product, the way a
//! method body reads `self`. An [`OverrideHandler`] additionally receives the
//! value the previously registered handler produces, which plays the role of
//! calling the parent implementation of an overridden method.

use crate::{Arc, product::Product};

/// Computes the value of one field from the materialized product.
///
/// The product passed in is the same for every handler of a given
/// [`build`](crate::Builder::build) call, so a handler may read any field of
/// it, including its own (recursion) and fields registered after it.
pub type Handler<K, V> = Arc<dyn Fn(&Product<K, V>) -> V + Send + Sync>;

/// Computes the value of an overridden field from the product and the value
/// the previous handler yields for that same product.
pub type OverrideHandler<K, V> = Arc<dyn Fn(&Product<K, V>, V) -> V + Send + Sync>;

/// Boxes a closure into a [`Handler`].
#[inline]
pub fn handler<K, V, F>(f: F) -> Handler<K, V>
where
    F: Fn(&Product<K, V>) -> V + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wraps `previous` so that every invocation first evaluates it against the
/// product, then hands the result to `next`.
///
/// The previous handler is captured, not snapshotted: it runs again on every
/// read, with the same laziness as the wrapper itself.
pub(crate) fn wrap<K, V, F>(previous: Handler<K, V>, next: F) -> Handler<K, V>
where
    K: 'static,
    V: 'static,
    F: Fn(&Product<K, V>, V) -> V + Send + Sync + 'static,
{
    Arc::new(move |product: &Product<K, V>| {
        let prev = previous(product);
        next(product, prev)
    })
}
