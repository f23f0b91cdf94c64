use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemName, Money, check_field};

/// Items below this stock level appear in the restock alert listing.
pub const LOW_STOCK_ALERT_THRESHOLD: u32 = 10;

/// Items below this stock level carry the stronger "low stock" label.
pub const LOW_STOCK_LABEL_THRESHOLD: u32 = 5;

/// Unvalidated item fields as submitted by an operator (add and edit forms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub stock: i64,
    pub original_price: Decimal,
    pub sale_price: Decimal,
    #[serde(default)]
    pub expiry: Option<String>,
}

/// A stocked product with quantity and pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: ItemName,
    stock: u32,
    original_price: Money,
    sale_price: Money,
    /// Free-form expiry date, empty when absent.
    expiry: String,
}

impl Item {
    /// Build an item from already-validated parts.
    pub fn new(
        name: ItemName,
        stock: u32,
        original_price: Money,
        sale_price: Money,
        expiry: impl Into<String>,
    ) -> DomainResult<Self> {
        let expiry = normalize_expiry(Some(expiry.into()))?;
        Ok(Self {
            name,
            stock,
            original_price,
            sale_price,
            expiry,
        })
    }

    /// Validate a draft into an item.
    pub fn from_draft(draft: ItemDraft) -> DomainResult<Self> {
        let name = ItemName::new(&draft.name)?;
        let stock = validate_stock(draft.stock)?;
        let original_price = Money::new(draft.original_price)?;
        let sale_price = Money::new(draft.sale_price)?;
        let expiry = normalize_expiry(draft.expiry)?;
        Ok(Self {
            name,
            stock,
            original_price,
            sale_price,
            expiry,
        })
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn original_price(&self) -> Money {
        self.original_price
    }

    pub fn sale_price(&self) -> Money {
        self.sale_price
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn has_expiry(&self) -> bool {
        !self.expiry.is_empty()
    }

    /// Per-unit margin at current prices. Negative when selling below cost.
    pub fn unit_margin(&self) -> Decimal {
        self.sale_price.amount() - self.original_price.amount()
    }

    pub fn has_stock_for(&self, qty: u32) -> bool {
        self.stock >= qty
    }

    /// Remove `qty` units from stock.
    pub fn decrement_stock(&mut self, qty: u32) -> DomainResult<()> {
        self.stock = self.stock.checked_sub(qty).ok_or_else(|| {
            DomainError::invariant(format!(
                "stock cannot go negative ({} on hand, {qty} requested)",
                self.stock
            ))
        })?;
        Ok(())
    }

    /// Overwrite every field in place, including the name.
    pub fn replace_with(&mut self, replacement: Item) {
        *self = replacement;
    }

    /// Listed in the restock alert (`stock < 10`).
    pub fn needs_restock_alert(&self) -> bool {
        self.stock < LOW_STOCK_ALERT_THRESHOLD
    }

    /// Carries the "low stock" label (`stock < 5`).
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_LABEL_THRESHOLD
    }
}

impl Entity for Item {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

fn validate_stock(stock: i64) -> DomainResult<u32> {
    if stock < 0 {
        return Err(DomainError::validation(format!(
            "stock cannot be negative (got {stock})"
        )));
    }
    u32::try_from(stock).map_err(|_| DomainError::validation(format!("stock too large: {stock}")))
}

fn normalize_expiry(expiry: Option<String>) -> DomainResult<String> {
    let expiry = expiry.unwrap_or_default().trim().to_string();
    check_field("expiry", &expiry)?;
    Ok(expiry)
}
