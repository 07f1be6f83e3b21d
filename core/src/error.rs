//! Error type for builder operations.
//!
//! Only `Builder::override` can fail on its own. Failures raised by handlers
//! while a field is being read belong to the handler's author and reach the
//! caller untouched: they are never wrapped into this type.

use crate::String;
use thiserror::Error;

/// Errors returned by [`Builder`](crate::Builder) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `override` was called for a key that has no handler yet.
    ///
    /// `key` holds the `Display` rendering of the offending key.
    #[error("The key '{key}' must already be set to be overridden.")]
    OverrideUnsetKey { key: String },
}

impl Error {
    /// The rendered key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            Error::OverrideUnsetKey { key } => key,
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
