#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// Needed so that doc examples and downstream re-exports can uniformly refer
// to `::object_builder_core` from within this crate or a different one.
extern crate self as object_builder_core;

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that re-exporting crates can refer to them.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, format, string::String, string::ToString, sync::Arc, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod builder;
pub mod dynamic;
pub mod error;
pub mod handler;
pub mod product;
mod registry;

pub use builder::{Builder, FieldKey};
pub use dynamic::Value;
pub use error::{Error, Result};
pub use handler::{Handler, OverrideHandler};
pub use product::Product;
