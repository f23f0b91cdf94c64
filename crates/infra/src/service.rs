//! Application service: every operator action as one load → mutate → save.
//!
//! Mutating operations run under a process-wide write guard, so two requests
//! in the same process cannot overwrite each other's update. Separate
//! processes sharing the files are still last-write-wins.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_inventory::{Inventory, Item, ItemDraft};
use stockroom_sales::{DailySummary, SellDecision, SellItem, SellOutcome, apply_sale, decide_sale};

use crate::config::ShopConfig;
use crate::store::{FileItemStore, FileSalesLog, ItemStore, SalesLog, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Everything the main screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub items: Vec<Item>,
    /// Items with `stock < 10`, in store order.
    pub restock_alerts: Vec<Item>,
    pub today: DailySummary,
}

pub struct ShopService<I = FileItemStore, S = FileSalesLog> {
    items: I,
    sales: S,
    write_guard: Mutex<()>,
}

impl ShopService<FileItemStore, FileSalesLog> {
    /// File-backed service using the configured paths.
    pub fn from_config(config: &ShopConfig) -> Self {
        Self::new(
            FileItemStore::new(config.items_path()),
            FileSalesLog::new(config.sales_path()),
        )
    }
}

impl<I, S> ShopService<I, S>
where
    I: ItemStore,
    S: SalesLog,
{
    pub fn new(items: I, sales: S) -> Self {
        Self {
            items,
            sales,
            write_guard: Mutex::new(()),
        }
    }

    pub fn sales_log(&self) -> &S {
        &self.sales
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guard protects no data, so a poisoned lock is still usable.
        self.write_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list_items(&self) -> Result<Inventory, ServiceError> {
        Ok(self.items.load()?)
    }

    pub fn get_item(&self, name: &str) -> Result<Option<Item>, ServiceError> {
        Ok(self.items.find_by_name(name)?)
    }

    pub fn add_item(&self, draft: ItemDraft) -> Result<Item, ServiceError> {
        let item = Item::from_draft(draft)?;
        let _guard = self.lock();

        let mut inventory = self.items.load()?;
        inventory.add(item.clone())?;
        self.items.save(&inventory)?;

        tracing::info!(item = %item.name(), stock = item.stock(), "item added");
        Ok(item)
    }

    /// Replace every field of the item called `name`, including the name.
    pub fn edit_item(&self, name: &str, draft: ItemDraft) -> Result<Item, ServiceError> {
        let replacement = Item::from_draft(draft)?;
        let _guard = self.lock();

        let mut inventory = self.items.load()?;
        let edited = inventory.edit(name, replacement)?.clone();
        self.items.save(&inventory)?;

        tracing::info!(from = name, to = %edited.name(), "item edited");
        Ok(edited)
    }

    /// Remove every item matching `name`. Returns how many were removed.
    pub fn delete_item(&self, name: &str) -> Result<usize, ServiceError> {
        let _guard = self.lock();
        let removed = self.items.remove(name)?;
        if removed > 0 {
            tracing::info!(item = name, removed, "item deleted");
        } else {
            tracing::debug!(item = name, "delete matched nothing");
        }
        Ok(removed)
    }

    /// Sell against stock.
    ///
    /// Only a `Sold` outcome writes anything: the sale record is appended
    /// first, then the decremented item list is saved. A sale that would push
    /// the day's profit total out of range is refused before anything is written.
    pub fn sell(&self, cmd: SellItem) -> Result<SellOutcome, ServiceError> {
        let _guard = self.lock();

        let mut inventory = self.items.load()?;
        let decision = decide_sale(&inventory, &cmd)?;
        let outcome = decision.outcome();

        match decision {
            SellDecision::Sell(record) => {
                let day_total = stockroom_sales::profit_on(&self.sales.load()?, record.date)?;
                if day_total.checked_add(record.profit).is_none() {
                    return Err(DomainError::validation("profit out of range").into());
                }

                apply_sale(&mut inventory, &record)?;
                self.sales.append(&record)?;
                if let Err(e) = self.items.save(&inventory) {
                    tracing::error!(
                        item = %record.name,
                        qty = record.qty,
                        error = %e,
                        "sale recorded but stock not saved"
                    );
                    return Err(e.into());
                }
                tracing::info!(
                    item = %record.name,
                    qty = record.qty,
                    profit = %record.profit,
                    "sale recorded"
                );
            }
            SellDecision::Reject(_) => {
                tracing::info!(item = %cmd.name, qty = cmd.quantity, outcome = outcome.code(), "sale rejected");
            }
        }

        Ok(outcome)
    }

    /// Total profit of sales recorded on `date`.
    pub fn profit_on(&self, date: NaiveDate) -> Result<Decimal, ServiceError> {
        let records = self.sales.load()?;
        Ok(stockroom_sales::profit_on(&records, date)?)
    }

    pub fn daily_summary(&self, date: NaiveDate) -> Result<DailySummary, ServiceError> {
        let records = self.sales.load()?;
        Ok(DailySummary::for_date(&records, date)?)
    }

    pub fn dashboard(&self, today: NaiveDate) -> Result<Dashboard, ServiceError> {
        let inventory = self.items.load()?;
        let restock_alerts = inventory.restock_alerts().cloned().collect();
        Ok(Dashboard {
            items: inventory.into_items(),
            restock_alerts,
            today: self.daily_summary(today)?,
        })
    }
}
