//! Persistence boundary for the item list and the sales log.
//!
//! Both stores follow "read everything, mutate in memory, write everything".
//! The traits keep callers independent of the backing mechanism: flat files in
//! production, in-memory vectors in tests.

pub mod codec;
pub mod file;
pub mod in_memory;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use stockroom_inventory::{Inventory, Item};
use stockroom_sales::SaleRecord;

pub use file::{FileItemStore, FileSalesLog};
pub use in_memory::{InMemoryItemStore, InMemorySalesLog};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Whole-list item persistence.
pub trait ItemStore: Send + Sync {
    /// All persisted items in stored order. No backing data yet means empty.
    fn load(&self) -> Result<Inventory, StoreError>;

    /// Replace the persisted set with `inventory`, preserving order.
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError>;

    /// Case-insensitive lookup, first match.
    fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        Ok(self.load()?.find(name).cloned())
    }

    /// Replace the item with the same name, or append it.
    fn upsert(&self, item: Item) -> Result<(), StoreError> {
        let mut inventory = self.load()?;
        inventory.upsert(item);
        self.save(&inventory)
    }

    /// Drop every item matching `name`. Returns how many were removed; the
    /// store is left untouched when nothing matches.
    fn remove(&self, name: &str) -> Result<usize, StoreError> {
        let mut inventory = self.load()?;
        let removed = inventory.remove(name);
        if removed > 0 {
            self.save(&inventory)?;
        }
        Ok(removed)
    }
}

/// Append-only sales log.
pub trait SalesLog: Send + Sync {
    fn append(&self, record: &SaleRecord) -> Result<(), StoreError>;

    /// Every record ever appended, in append order.
    fn load(&self) -> Result<Vec<SaleRecord>, StoreError>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn load(&self) -> Result<Inventory, StoreError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        (**self).save(inventory)
    }
}

impl<S> SalesLog for Arc<S>
where
    S: SalesLog + ?Sized,
{
    fn append(&self, record: &SaleRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn load(&self) -> Result<Vec<SaleRecord>, StoreError> {
        (**self).load()
    }
}
