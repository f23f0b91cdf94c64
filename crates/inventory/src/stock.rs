//! The in-memory item list every operation loads, mutates and writes back.

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::item::Item;

/// Ordered snapshot of all items in the store.
///
/// Lookups are case-insensitive by name and return the first match. Files
/// written before uniqueness was enforced may still hold duplicates, so
/// `remove` drops every match while `find`/`edit` touch only the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name().matches(name))
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name().matches(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.name().matches(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append a new item, keeping names unique (case-insensitive).
    pub fn add(&mut self, item: Item) -> DomainResult<()> {
        if self.contains(item.name().as_str()) {
            return Err(DomainError::conflict(format!(
                "an item named '{}' already exists",
                item.name()
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace every field of the item currently named `name`.
    ///
    /// The replacement may carry a different name, as long as no *other* item
    /// already uses it.
    pub fn edit(&mut self, name: &str, replacement: Item) -> DomainResult<&Item> {
        let idx = self
            .position(name)
            .ok_or_else(|| DomainError::not_found(format!("item '{name}'")))?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, other)| i != idx && other.is_identified_by(replacement.id()));
        if collides {
            return Err(DomainError::conflict(format!(
                "an item named '{}' already exists",
                replacement.name()
            )));
        }

        self.items[idx].replace_with(replacement);
        Ok(&self.items[idx])
    }

    /// Replace the first item with the same name, or append when there is none.
    pub fn upsert(&mut self, item: Item) {
        match self.find_mut(item.name().as_str()) {
            Some(existing) => existing.replace_with(item),
            None => self.items.push(item),
        }
    }

    /// Drop every item whose name matches. Returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.name().matches(name));
        before - self.items.len()
    }

    /// Items for the restock alert listing, in store order.
    pub fn restock_alerts(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.needs_restock_alert())
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
