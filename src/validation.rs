//! Caller-side validation for the list-creation flow.
//!
//! The repository persists whatever it is handed. These rules belong to the
//! caller: run them before `create` when the data comes from a user.

use thiserror::Error;

/// Longest accepted list name, in characters, after trimming.
pub const MAX_LIST_NAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("list name is required")]
    EmptyName,
    #[error("list name is {len} characters long (maximum {max})")]
    NameTooLong { len: usize, max: usize },
    #[error("a list needs at least one item")]
    NoItems,
    #[error("item \"{0}\" is already in the list")]
    DuplicateItem(String),
    #[error("no item at index {0}")]
    IndexOutOfRange(usize),
}

/// Trim `name` and check it is non-empty and at most [`MAX_LIST_NAME_LEN`] characters.
pub fn validate_list_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = trimmed.chars().count();
    if len > MAX_LIST_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len,
            max: MAX_LIST_NAME_LEN,
        });
    }
    Ok(trimmed.to_string())
}

/// A list that passed validation, ready for `create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub name: String,
    pub items: Vec<String>,
}

/// In-progress list being assembled by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDraft {
    name: String,
    items: Vec<String>,
}

impl ListDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append an item. Blank input is ignored and returns `Ok(false)`.
    pub fn add_item(&mut self, text: &str) -> Result<bool, ValidationError> {
        let Some(text) = self.checked_text(text, None)? else {
            return Ok(false);
        };
        self.items.push(text);
        Ok(true)
    }

    /// Replace the item at `index`. Blank input is ignored and returns `Ok(false)`.
    ///
    /// The slot being replaced does not count as a duplicate of itself.
    pub fn replace_item(&mut self, index: usize, text: &str) -> Result<bool, ValidationError> {
        if index >= self.items.len() {
            return Err(ValidationError::IndexOutOfRange(index));
        }
        let Some(text) = self.checked_text(text, Some(index))? else {
            return Ok(false);
        };
        self.items[index] = text;
        Ok(true)
    }

    pub fn remove_item(&mut self, index: usize) -> Result<String, ValidationError> {
        if index >= self.items.len() {
            return Err(ValidationError::IndexOutOfRange(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.items.clear();
    }

    /// Validate the whole draft.
    pub fn finish(&self) -> Result<NewList, ValidationError> {
        let name = validate_list_name(&self.name)?;
        if self.items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        Ok(NewList {
            name,
            items: self.items.clone(),
        })
    }

    fn checked_text(
        &self,
        text: &str,
        skip: Option<usize>,
    ) -> Result<Option<String>, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let lowered = trimmed.to_lowercase();
        let duplicate = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| Some(i) != skip && existing.to_lowercase() == lowered);
        if duplicate {
            return Err(ValidationError::DuplicateItem(trimmed.to_string()));
        }
        Ok(Some(trimmed.to_string()))
    }
}
