//! Shopping list data model.
//!
//! These types are exactly what gets persisted: the whole collection is one
//! JSON array of [`ShoppingList`] values stored under a single key.
//!
//! ```ignore
//! [{ "id": "...", "name": "Groceries", "createdAt": 1700000000000,
//!    "items": [{ "id": "...", "text": "milk", "completed": false }] }]
//! ```

mod patch;

use serde::{Deserialize, Serialize};

pub use patch::ListPatch;

/// A single line entry within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl ShoppingListItem {
    /// Create an uncompleted item.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        ShoppingListItem {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this item with `completed` inverted.
    pub fn toggled(&self) -> Self {
        ShoppingListItem {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// A named, ordered collection of items with a creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    pub items: Vec<ShoppingListItem>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl ShoppingList {
    /// Look up an item by id.
    pub fn item(&self, item_id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// True when the list has items and every one of them is completed.
    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.completed)
    }

    /// Apply a patch, replacing whichever fields it carries.
    pub fn apply(&mut self, patch: ListPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
    }

    /// Items with the one matching `item_id` toggled. Other items keep
    /// their identity and position; an unknown id leaves every item as is.
    pub fn items_with_toggled(&self, item_id: &str) -> Vec<ShoppingListItem> {
        self.items
            .iter()
            .map(|item| {
                if item.id == item_id {
                    item.toggled()
                } else {
                    item.clone()
                }
            })
            .collect()
    }
}

/// Sort lists newest first by `created_at`. Ties keep their stored order.
///
/// Ordering is a presentation concern; the store itself returns lists in
/// insertion order.
pub fn sort_newest_first(lists: &mut [ShoppingList]) {
    lists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
