//! Sell transaction logic.
//!
//! Split the same way as command handling elsewhere in the domain:
//! - **Decision**: `decide_sale(&inventory, cmd)` inspects state and either
//!   produces the `SaleRecord` to commit or a rejection.
//! - **State mutation**: `apply_sale(&mut inventory, record)` takes the stock.
//!
//! Neither step performs IO; the caller appends the record and persists items.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::Inventory;

use crate::record::SaleRecord;

/// Command: sell `quantity` units of the item called `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellItem {
    pub name: String,
    pub quantity: u32,
    /// Calendar day the sale is recorded under.
    pub occurred_on: NaiveDate,
}

/// What a sell attempt did.
///
/// Only `Sold` changes state. The other two leave both the item list and the
/// sales log untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SellOutcome {
    Sold { quantity: u32, profit: Decimal },
    NotFound,
    InsufficientStock { available: u32 },
}

impl SellOutcome {
    pub fn is_sold(&self) -> bool {
        matches!(self, SellOutcome::Sold { .. })
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SellOutcome::Sold { .. } => "sold",
            SellOutcome::NotFound => "not_found",
            SellOutcome::InsufficientStock { .. } => "insufficient_stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SellDecision {
    /// Commit this record and take its quantity out of stock.
    Sell(SaleRecord),
    /// Nothing happens; the outcome says why.
    Reject(SellOutcome),
}

impl SellDecision {
    pub fn outcome(&self) -> SellOutcome {
        match self {
            SellDecision::Sell(record) => SellOutcome::Sold {
                quantity: record.qty,
                profit: record.profit,
            },
            SellDecision::Reject(outcome) => outcome.clone(),
        }
    }
}

/// Decide whether a sale can go through at the item's current prices.
pub fn decide_sale(inventory: &Inventory, cmd: &SellItem) -> DomainResult<SellDecision> {
    if cmd.quantity == 0 {
        return Err(DomainError::validation("quantity must be at least 1"));
    }

    let Some(item) = inventory.find(&cmd.name) else {
        return Ok(SellDecision::Reject(SellOutcome::NotFound));
    };

    if !item.has_stock_for(cmd.quantity) {
        return Ok(SellDecision::Reject(SellOutcome::InsufficientStock {
            available: item.stock(),
        }));
    }

    let profit = item
        .unit_margin()
        .checked_mul(Decimal::from(cmd.quantity))
        .ok_or_else(|| DomainError::validation("profit out of range"))?;
    Ok(SellDecision::Sell(SaleRecord::new(
        cmd.occurred_on,
        item.name().as_str(),
        cmd.quantity,
        profit,
    )))
}

/// Take a decided sale out of stock.
pub fn apply_sale(inventory: &mut Inventory, record: &SaleRecord) -> DomainResult<()> {
    let item = inventory
        .find_mut(&record.name)
        .ok_or_else(|| DomainError::not_found(format!("item '{}'", record.name)))?;
    item.decrement_stock(record.qty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_inventory::{Item, ItemDraft};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn bandage(stock: i64) -> Inventory {
        Inventory::new(vec![
            Item::from_draft(ItemDraft {
                name: "Bandage".to_string(),
                stock,
                original_price: Decimal::new(5, 0),
                sale_price: Decimal::new(10, 0),
                expiry: None,
            })
            .unwrap(),
        ])
    }

    fn cmd(name: &str, quantity: u32) -> SellItem {
        SellItem {
            name: name.to_string(),
            quantity,
            occurred_on: day(),
        }
    }

    #[test]
    fn sells_when_stock_suffices() {
        let mut inv = bandage(20);
        let decision = decide_sale(&inv, &cmd("bandage", 3)).unwrap();

        let SellDecision::Sell(record) = &decision else {
            panic!("expected a sale, got {decision:?}");
        };
        assert_eq!(record, &SaleRecord::new(day(), "Bandage", 3, Decimal::new(15, 0)));
        assert_eq!(
            decision.outcome(),
            SellOutcome::Sold {
                quantity: 3,
                profit: Decimal::new(15, 0)
            }
        );

        apply_sale(&mut inv, record).unwrap();
        assert_eq!(inv.find("Bandage").unwrap().stock(), 17);
    }

    #[test]
    fn selling_everything_is_allowed() {
        let inv = bandage(4);
        let decision = decide_sale(&inv, &cmd("Bandage", 4)).unwrap();
        assert!(decision.outcome().is_sold());
    }

    #[test]
    fn rejects_when_stock_is_short() {
        let inv = bandage(20);
        let decision = decide_sale(&inv, &cmd("Bandage", 25)).unwrap();
        assert_eq!(
            decision,
            SellDecision::Reject(SellOutcome::InsufficientStock { available: 20 })
        );
        assert_eq!(inv.find("Bandage").unwrap().stock(), 20);
    }

    #[test]
    fn rejects_unknown_items() {
        let inv = bandage(20);
        let decision = decide_sale(&inv, &cmd("Gauze", 1)).unwrap();
        assert_eq!(decision, SellDecision::Reject(SellOutcome::NotFound));
        assert_eq!(decision.outcome().code(), "not_found");
    }

    #[test]
    fn zero_quantity_is_a_validation_error() {
        let err = decide_sale(&bandage(1), &cmd("Bandage", 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn oversized_profit_is_rejected_without_touching_stock() {
        let inv = Inventory::new(vec![
            Item::from_draft(ItemDraft {
                name: "Gold".to_string(),
                stock: 10,
                original_price: Decimal::ZERO,
                sale_price: Decimal::MAX,
                expiry: None,
            })
            .unwrap(),
        ]);

        assert!(decide_sale(&inv, &cmd("Gold", 1)).unwrap().outcome().is_sold());
        let err = decide_sale(&inv, &cmd("Gold", 2)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(inv.find("Gold").unwrap().stock(), 10);
    }

    #[test]
    fn outcome_codes_are_stable() {
        let sold = SellOutcome::Sold {
            quantity: 1,
            profit: Decimal::ZERO,
        };
        assert_eq!(sold.code(), "sold");
        assert_eq!(SellOutcome::NotFound.code(), "not_found");
        assert_eq!(
            SellOutcome::InsufficientStock { available: 2 }.code(),
            "insufficient_stock"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a sale either takes exactly `qty` out of stock with
        /// profit `(sale - cost) * qty`, or leaves stock untouched.
        #[test]
        fn sale_takes_exact_quantity_or_nothing(
            stock in 0u32..500,
            qty in 1u32..600,
            cost_cents in 0i64..10_000,
            sale_cents in 0i64..10_000,
        ) {
            let mut inv = Inventory::new(vec![
                Item::from_draft(ItemDraft {
                    name: "Widget".to_string(),
                    stock: i64::from(stock),
                    original_price: Decimal::new(cost_cents, 2),
                    sale_price: Decimal::new(sale_cents, 2),
                    expiry: None,
                })
                .unwrap(),
            ]);

            match decide_sale(&inv, &cmd("widget", qty)).unwrap() {
                SellDecision::Sell(record) => {
                    prop_assert!(qty <= stock);
                    let expected = (Decimal::new(sale_cents, 2) - Decimal::new(cost_cents, 2))
                        * Decimal::from(qty);
                    prop_assert_eq!(record.profit, expected);
                    apply_sale(&mut inv, &record).unwrap();
                    prop_assert_eq!(inv.items()[0].stock(), stock - qty);
                }
                SellDecision::Reject(outcome) => {
                    prop_assert!(qty > stock);
                    prop_assert_eq!(outcome, SellOutcome::InsufficientStock { available: stock });
                    prop_assert_eq!(inv.items()[0].stock(), stock);
                }
            }
        }
    }
}
