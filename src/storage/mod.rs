//! Storage - the local key-value backend the shopping lists live in.
//!
//! The repository only ever reads and writes one whole value under one key,
//! so a backend needs nothing more than get/set/remove of strings.
//!
//! ## Example
//!
//! ```ignore
//! use shopping_lists::{InMemoryStorage, KeyValueStorage};
//!
//! let storage = InMemoryStorage::new();
//! storage.set_item("shopping_lists", "[]")?;
//! assert_eq!(storage.get_item("shopping_lists")?.as_deref(), Some("[]"));
//! ```

#[cfg(feature = "fs")]
mod file;
mod in_memory;

use std::sync::Arc;

use crate::error::StorageError;

#[cfg(feature = "fs")]
pub use file::FileStorage;
pub use in_memory::InMemoryStorage;

/// String key-value storage.
///
/// `set_item` must replace the stored value in a single step: a concurrent
/// reader sees either the previous value or the new one.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value under `key`. A key that was never written is `Ok(None)`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
