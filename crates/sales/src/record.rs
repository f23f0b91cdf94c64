use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable log entry of one completed sale.
///
/// `profit` is frozen at sale time: later price edits never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    /// Item name as stored on the item when it was sold.
    pub name: String,
    pub qty: u32,
    pub profit: Decimal,
}

impl SaleRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>, qty: u32, profit: Decimal) -> Self {
        Self {
            date,
            name: name.into(),
            qty,
            profit,
        }
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
