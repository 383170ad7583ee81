//! ListRepository - the shopping list collection over a key-value storage.
//!
//! Every mutation is a full cycle: load the whole collection, transform it in
//! memory, write the whole collection back with one `set_item` call. A writer
//! lock serializes these cycles so two callers can never lose each other's
//! changes.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::config::STORAGE_KEY;
use crate::error::ListStoreError;
use crate::id::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use crate::model::{ListPatch, ShoppingList, ShoppingListItem};
use crate::storage::KeyValueStorage;
use crate::validation::NewList;

/// Fresh ids drawn per new list or item beyond the number already taken.
const ID_ATTEMPTS: usize = 8;

/// Strict access to the persisted collection: every storage failure is
/// returned to the caller.
///
/// See [`ListStore`](crate::ListStore) for the variant that swallows
/// failures into neutral values.
pub struct ListRepository<S, I = UuidIdGenerator, C = SystemClock> {
    storage: S,
    ids: I,
    clock: C,
    writer: Mutex<()>,
}

impl<S: KeyValueStorage> ListRepository<S> {
    /// Repository with random ids and the system clock.
    pub fn new(storage: S) -> Self {
        Self::with_parts(storage, UuidIdGenerator, SystemClock)
    }
}

impl<S, I, C> ListRepository<S, I, C>
where
    S: KeyValueStorage,
    I: IdGenerator,
    C: Clock,
{
    pub fn with_parts(storage: S, ids: I, clock: C) -> Self {
        ListRepository {
            storage,
            ids,
            clock,
            writer: Mutex::new(()),
        }
    }

    /// Access the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All stored lists in insertion order. Nothing stored yet is an empty `Vec`.
    pub fn get_all(&self) -> Result<Vec<ShoppingList>, ListStoreError> {
        let raw = self
            .storage
            .get_item(STORAGE_KEY)
            .map_err(ListStoreError::Read)?;

        match raw {
            Some(raw) => serde_json::from_str(&raw).map_err(ListStoreError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<ShoppingList>, ListStoreError> {
        Ok(self.get_all()?.into_iter().find(|list| list.id == id))
    }

    /// Create a list from `name` and item texts, in order, all uncompleted.
    ///
    /// The list id is redrawn while it matches a stored list, and item ids
    /// while they repeat within the new list. No validation of name or texts
    /// happens here; see [`crate::validation`].
    pub fn create<T: AsRef<str>>(
        &self,
        name: &str,
        item_texts: &[T],
    ) -> Result<ShoppingList, ListStoreError> {
        let _writer = self.lock_writer()?;
        let mut lists = self.get_all()?;

        let id = unique_id(
            || self.ids.list_id(),
            |id| lists.iter().any(|list| list.id == id),
            lists.len(),
        )?;

        let mut items: Vec<ShoppingListItem> = Vec::with_capacity(item_texts.len());
        for text in item_texts {
            let item_id = unique_id(
                || self.ids.item_id(),
                |id| items.iter().any(|item| item.id == id),
                items.len(),
            )?;
            items.push(ShoppingListItem::new(item_id, text.as_ref()));
        }

        let list = ShoppingList {
            id,
            name: name.to_string(),
            items,
            created_at: self.clock.now_millis(),
        };

        lists.push(list.clone());
        self.save_all(&lists)?;
        debug!(
            list_id = %list.id,
            items = list.items.len(),
            total = lists.len(),
            "created shopping list"
        );
        Ok(list)
    }

    pub fn create_new(&self, new_list: &NewList) -> Result<ShoppingList, ListStoreError> {
        self.create(&new_list.name, &new_list.items)
    }

    /// Remove the list with `id`. The collection is rewritten even when no
    /// list matched; returns whether one was removed.
    pub fn delete(&self, id: &str) -> Result<bool, ListStoreError> {
        let _writer = self.lock_writer()?;
        let mut lists = self.get_all()?;

        let before = lists.len();
        lists.retain(|list| list.id != id);
        let removed = lists.len() != before;

        self.save_all(&lists)?;
        debug!(list_id = %id, removed, total = lists.len(), "deleted shopping list");
        Ok(removed)
    }

    /// Replace the fields present in `patch`. `None` when no list has `id`.
    pub fn update(
        &self,
        id: &str,
        patch: ListPatch,
    ) -> Result<Option<ShoppingList>, ListStoreError> {
        let _writer = self.lock_writer()?;
        let mut lists = self.get_all()?;
        self.update_in(&mut lists, id, patch)
    }

    /// Invert `completed` on one item and persist the list.
    ///
    /// An unknown `item_id` still rewrites the list unchanged. `None` when no
    /// list has `list_id`.
    pub fn toggle_item(
        &self,
        list_id: &str,
        item_id: &str,
    ) -> Result<Option<ShoppingList>, ListStoreError> {
        let _writer = self.lock_writer()?;
        let mut lists = self.get_all()?;

        let Some(list) = lists.iter().find(|list| list.id == list_id) else {
            warn!(list_id = %list_id, "toggle on missing shopping list");
            return Ok(None);
        };
        if list.item(item_id).is_none() {
            warn!(list_id = %list_id, item_id = %item_id, "toggle on missing item");
        }

        let items = list.items_with_toggled(item_id);
        self.update_in(&mut lists, list_id, ListPatch::items(items))
    }

    fn update_in(
        &self,
        lists: &mut [ShoppingList],
        id: &str,
        patch: ListPatch,
    ) -> Result<Option<ShoppingList>, ListStoreError> {
        let Some(list) = lists.iter_mut().find(|list| list.id == id) else {
            warn!(list_id = %id, "update on missing shopping list");
            return Ok(None);
        };

        list.apply(patch);
        let updated = list.clone();

        self.save_all(lists)?;
        debug!(list_id = %id, items = updated.items.len(), "updated shopping list");
        Ok(Some(updated))
    }

    fn save_all(&self, lists: &[ShoppingList]) -> Result<(), ListStoreError> {
        let raw = serde_json::to_string(lists).map_err(ListStoreError::Serialize)?;
        self.storage
            .set_item(STORAGE_KEY, &raw)
            .map_err(ListStoreError::Write)
    }

    fn lock_writer(&self) -> Result<MutexGuard<'_, ()>, ListStoreError> {
        self.writer.lock().map_err(|_| ListStoreError::LockPoisoned)
    }
}

/// Draw ids from `next` until one is not `taken`. With `in_use` ids taken, a
/// generator that never repeats itself succeeds within `in_use + 1` draws.
fn unique_id(
    mut next: impl FnMut() -> String,
    taken: impl Fn(&str) -> bool,
    in_use: usize,
) -> Result<String, ListStoreError> {
    let attempts = in_use + ID_ATTEMPTS;
    for _ in 0..attempts {
        let id = next();
        if !taken(&id) {
            return Ok(id);
        }
        debug!(id = %id, "generated id already in use, drawing another");
    }
    Err(ListStoreError::IdCollision { attempts })
}
