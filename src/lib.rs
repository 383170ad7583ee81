//! Local persistence for shopping lists.
//!
//! The whole collection of lists lives as one JSON array under a single key
//! of a [`KeyValueStorage`]. [`ListRepository`] performs every mutation as a
//! serialized read-modify-write of that array; [`ListStore`] wraps it for
//! presentation code and turns storage failures into neutral values.

mod config;
mod error;
mod id;
mod model;
mod repository;
mod storage;
mod store;
pub mod validation;

pub use config::STORAGE_KEY;
pub use error::{ErrorKind, ListStoreError, StorageError};
pub use id::{
    Clock, IdGenerator, ManualClock, SequentialIdGenerator, SystemClock, UuidIdGenerator,
};
pub use model::{sort_newest_first, ListPatch, ShoppingList, ShoppingListItem};
pub use repository::ListRepository;
#[cfg(feature = "fs")]
pub use storage::FileStorage;
pub use storage::{InMemoryStorage, KeyValueStorage};
pub use store::ListStore;
pub use validation::{ListDraft, NewList, ValidationError};
