use super::ShoppingListItem;

/// Partial update for a shopping list.
///
/// Present fields replace the stored value wholesale; `items` is never merged
/// item by item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPatch {
    pub name: Option<String>,
    pub items: Option<Vec<ShoppingListItem>>,
}

impl ListPatch {
    /// Patch that only renames.
    pub fn name(name: impl Into<String>) -> Self {
        ListPatch {
            name: Some(name.into()),
            items: None,
        }
    }

    /// Patch that only replaces the items.
    pub fn items(items: Vec<ShoppingListItem>) -> Self {
        ListPatch {
            name: None,
            items: Some(items),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_items(mut self, items: Vec<ShoppingListItem>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.items.is_none()
    }
}
