//! Type-erased field values.
//!
//! A `Builder<K, V>` needs a single value type. When a product mixes fields
//! of different types (numbers, strings, functions...) use [`Value`] as `V`
//! and read fields back with [`Product::get_as`] or [`Product::call`].
//!
//! ```
//! use object_builder_core::{Builder, Value};
//!
//! let product = Builder::<&str, Value>::create()
//!     .with("greet", |p| {
//!         let p = p.clone();
//!         Value::function(move |name: &'static str| {
//!             let prefix: String = p.get_as(&"prefix").unwrap();
//!             format!("{prefix}, {name}!")
//!         })
//!     })
//!     .with("prefix", |_| Value::new(String::from("Hello")))
//!     .build();
//!
//! let greeting: String = product.call(&"greet", "world").unwrap();
//! assert_eq!(greeting, "Hello, world!");
//! ```

use crate::{Arc, builder::FieldKey, product::Product};
use core::{any::Any, fmt};

/// A shared, callable field value taking one argument.
///
/// Functions of several arguments take a tuple.
pub type Func<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// A dynamically typed, cheaply clonable field value.
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wraps any shareable value.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            inner: Arc::new(value),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Wraps a closure as a [`Func`], readable back with [`Value::call`].
    pub fn function<A, R, F>(f: F) -> Self
    where
        A: 'static,
        R: 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::new::<Func<A, R>>(Arc::new(f))
    }

    /// Name of the wrapped type, for diagnostics only.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Clones the wrapped value out if it is a `T`.
    pub fn get<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Calls the wrapped function if it was created by
    /// [`Value::function`] with exactly these argument and return types.
    pub fn call<A: 'static, R: 'static>(&self, arg: A) -> Option<R> {
        let f = self.downcast_ref::<Func<A, R>>()?;
        Some(f(arg))
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &*self.inner
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value<{}>", self.type_name)
    }
}

impl<K: FieldKey> Product<K, Value> {
    /// Reads field `key` and downcasts it to `T`.
    ///
    /// `None` if the field is not registered or holds another type.
    pub fn get_as<T: Any + Clone>(&self, key: &K) -> Option<T> {
        self.get(key)?.get::<T>()
    }

    /// Reads the function field `key` and applies it to `arg`.
    ///
    /// `None` if the field is not registered or is not a `Func<A, R>`.
    pub fn call<A: 'static, R: 'static>(&self, key: &K, arg: A) -> Option<R> {
        self.get(key)?.call(arg)
    }
}
