use std::sync::RwLock;

use stockroom_inventory::{Inventory, Item};
use stockroom_sales::SaleRecord;

use super::{ItemStore, SalesLog, StoreError};

/// In-memory item store.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn load(&self) -> Result<Inventory, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::Poisoned)?;
        Ok(Inventory::new(items.clone()))
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::Poisoned)?;
        *items = inventory.items().to_vec();
        Ok(())
    }
}

/// In-memory append-only sales log.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySalesLog {
    records: RwLock<Vec<SaleRecord>>,
}

impl InMemorySalesLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SalesLog for InMemorySalesLog {
    fn append(&self, record: &SaleRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        records.push(record.clone());
        Ok(())
    }

    fn load(&self) -> Result<Vec<SaleRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }
}
