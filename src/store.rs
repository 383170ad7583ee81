//! ListStore - the fail-soft face of [`ListRepository`] handed to screens.
//!
//! No storage failure crosses this boundary. Each one is logged and turned
//! into a neutral value: an empty `Vec`, `None`, or `false`. Nothing is
//! retried.

use tracing::error;

use crate::error::ListStoreError;
use crate::id::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use crate::model::{ListPatch, ShoppingList};
use crate::repository::ListRepository;
use crate::storage::KeyValueStorage;
use crate::validation::NewList;

/// Shopping list store for presentation code.
///
/// ```ignore
/// let store = ListStore::new(InMemoryStorage::new());
/// let list = store.create("Groceries", &["milk", "eggs"]).expect("saved");
/// store.toggle_item(&list.id, &list.items[1].id);
/// assert!(store.delete(&list.id));
/// ```
pub struct ListStore<S, I = UuidIdGenerator, C = SystemClock> {
    repository: ListRepository<S, I, C>,
}

impl<S: KeyValueStorage> ListStore<S> {
    pub fn new(storage: S) -> Self {
        ListStore {
            repository: ListRepository::new(storage),
        }
    }
}

impl<S, I, C> From<ListRepository<S, I, C>> for ListStore<S, I, C> {
    fn from(repository: ListRepository<S, I, C>) -> Self {
        ListStore { repository }
    }
}

impl<S, I, C> ListStore<S, I, C>
where
    S: KeyValueStorage,
    I: IdGenerator,
    C: Clock,
{
    /// The strict repository underneath, for callers that want the errors.
    pub fn repository(&self) -> &ListRepository<S, I, C> {
        &self.repository
    }

    /// All lists, or an empty `Vec` when storage cannot be read.
    pub fn get_all(&self) -> Vec<ShoppingList> {
        self.repository
            .get_all()
            .unwrap_or_else(|e| report("get_all", e, Vec::new()))
    }

    pub fn get_by_id(&self, id: &str) -> Option<ShoppingList> {
        self.repository
            .get_by_id(id)
            .unwrap_or_else(|e| report("get_by_id", e, None))
    }

    /// The new list, or `None` when it could not be saved.
    pub fn create<T: AsRef<str>>(&self, name: &str, item_texts: &[T]) -> Option<ShoppingList> {
        self.repository
            .create(name, item_texts)
            .map(Some)
            .unwrap_or_else(|e| report("create", e, None))
    }

    pub fn create_new(&self, new_list: &NewList) -> Option<ShoppingList> {
        self.create(&new_list.name, &new_list.items)
    }

    /// `true` once the collection was rewritten, whether or not `id` existed.
    pub fn delete(&self, id: &str) -> bool {
        self.repository
            .delete(id)
            .map(|_| true)
            .unwrap_or_else(|e| report("delete", e, false))
    }

    pub fn update(&self, id: &str, patch: ListPatch) -> Option<ShoppingList> {
        self.repository
            .update(id, patch)
            .unwrap_or_else(|e| report("update", e, None))
    }

    pub fn toggle_item(&self, list_id: &str, item_id: &str) -> Option<ShoppingList> {
        self.repository
            .toggle_item(list_id, item_id)
            .unwrap_or_else(|e| report("toggle_item", e, None))
    }
}

fn report<T>(operation: &'static str, err: ListStoreError, fallback: T) -> T {
    error!(operation, kind = ?err.kind(), error = %err, "shopping list storage failure");
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStorage;

    #[test]
    fn corrupt_storage_reads_as_empty() {
        let storage = InMemoryStorage::new();
        storage.set_item(crate::STORAGE_KEY, "][").unwrap();

        let store = ListStore::new(storage);
        assert!(store.get_all().is_empty());
        assert!(store.get_by_id("anything").is_none());
        assert!(store.create("x", &["y"]).is_none());
        assert!(!store.delete("anything"));
        assert!(store.update("anything", ListPatch::name("z")).is_none());
        assert!(store.toggle_item("anything", "item").is_none());
    }

    #[test]
    fn delete_reports_success_for_unknown_id() {
        let store = ListStore::new(InMemoryStorage::new());
        assert!(store.delete("nope"));
    }

    #[test]
    fn wraps_an_existing_repository() {
        let repo = ListRepository::new(InMemoryStorage::new());
        let list = repo.create("a", &["x"]).unwrap();

        let store = ListStore::from(repo);
        assert_eq!(store.get_by_id(&list.id), Some(list.clone()));
        assert_eq!(store.repository().get_all().unwrap(), vec![list]);
    }
}
