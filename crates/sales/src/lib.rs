//! Sales domain module.
//!
//! Sale records, the sell decision and the daily aggregations, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod record;
pub mod report;
pub mod sell;

pub use record::SaleRecord;
pub use report::{DailySummary, SoldQuantity, profit_on, quantities_on};
pub use sell::{SellDecision, SellItem, SellOutcome, apply_sale, decide_sale};
