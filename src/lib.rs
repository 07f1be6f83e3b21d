//! object-builder - Assemble records from lazily evaluated, self-referential fields
//!
//! # Overview
//!
//! A [`Builder`] collects one handler per field. A handler computes its field
//! from the finished [`Product`], so it may read any other field, including
//! fields declared after it and itself. Declaration order is incidental:
//!
//! - forward references and (mutual) recursion need no two-pass resolution;
//! - every operation returns a new builder, so variants can branch off a
//!   shared prefix without affecting each other;
//! - overriding a field wraps its previous handler, much like calling the
//!   parent implementation of an overridden method.
//!
//! # Quick Start
//!
//! ```
//! use object_builder::Builder;
//! use std::sync::Arc;
//!
//! type Calc = Arc<dyn Fn(i64) -> i64 + Send + Sync>;
//!
//! let base = Builder::<&str, Calc>::create()
//!     .with("base", |p| {
//!         let p = p.clone();
//!         Arc::new(move |a: i64| p.get(&"diff").unwrap()(a) + 1)
//!     })
//!     .with("diff", |_| Arc::new(|a: i64| a * 2));
//!
//! let doubled = base
//!     .override_with("diff", |_, prev| Arc::new(move |a: i64| prev(a) * 2))
//!     .unwrap();
//!
//! assert_eq!(base.build().get(&"base").unwrap()(10), 21);
//! assert_eq!(doubled.build().get(&"base").unwrap()(10), 41);
//! ```
//!
//! # Heterogeneous fields
//!
//! Use [`Value`] when fields have different types:
//!
//! ```
//! use object_builder::{Builder, Value};
//!
//! let product = Builder::<&str, Value>::create()
//!     .with("even", |s| {
//!         let s = s.clone();
//!         Value::function(move |n: u32| n == 0 || !s.call::<u32, bool>(&"odd", n - 1).unwrap())
//!     })
//!     .with("odd", |s| {
//!         let s = s.clone();
//!         Value::function(move |n: u32| n != 0 && !s.call::<u32, bool>(&"even", n - 1).unwrap())
//!     })
//!     .with("name", |_| Value::new("parity"))
//!     .build();
//!
//! assert_eq!(product.call::<u32, bool>(&"even", 10), Some(true));
//! assert_eq!(product.get_as::<&str>(&"name"), Some("parity"));
//! ```
//!
//! # Errors
//!
//! Overriding a key that has no handler yet is the only failure the builder
//! reports itself:
//!
//! ```
//! use object_builder::{Builder, Error};
//!
//! let err = Builder::<&str, i64>::create()
//!     .with("a", |_| 1)
//!     .override_with("b", |_, prev| prev)
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "The key 'b' must already be set to be overridden.");
//! assert!(matches!(err, Error::OverrideUnsetKey { .. }));
//! ```
//!
//! Whatever a handler returns or panics with while a field is read reaches
//! the caller unchanged.

// Re-export public API from object_builder_core
pub use object_builder_core::{
    Builder, Error, FieldKey, Handler, OverrideHandler, Product, Result, Value,
};

pub use object_builder_core::{dynamic, handler};
