//! Inventory domain module.
//!
//! Items, the in-memory item list and the derived low-stock views, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod stock;

pub use item::{Item, ItemDraft, LOW_STOCK_ALERT_THRESHOLD, LOW_STOCK_LABEL_THRESHOLD};
pub use stock::Inventory;
