use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use stockroom_core::money::{format_2dp, parse_decimal};
use stockroom_core::{DomainError, DomainResult};
use stockroom_infra::Dashboard;
use stockroom_inventory::{Item, ItemDraft};

const DATE_FORMAT: &str = "%Y-%m-%d";

// -------------------------
// Request DTOs
// -------------------------

/// Add/edit form. Field names follow the HTML form the shop has always used
/// (`buy`/`sell` for the prices). Everything arrives as text and is validated
/// here so bad input yields a JSON error rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub name: String,
    pub stock: String,
    pub buy: String,
    pub sell: String,
    pub expiry: Option<String>,
}

impl ItemForm {
    pub fn into_draft(self) -> DomainResult<ItemDraft> {
        let stock = self.stock.trim();
        let stock: i64 = stock
            .parse()
            .map_err(|_| DomainError::validation(format!("stock must be a whole number (got '{stock}')")))?;
        Ok(ItemDraft {
            name: self.name,
            stock,
            original_price: parse_decimal(&self.buy)?,
            sale_price: parse_decimal(&self.sell)?,
            expiry: self.expiry,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SellForm {
    pub name: String,
    pub qty: String,
}

impl SellForm {
    pub fn quantity(&self) -> DomainResult<u32> {
        let qty = self.qty.trim();
        qty.parse()
            .map_err(|_| DomainError::validation(format!("qty must be a positive whole number (got '{qty}')")))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteForm {
    pub confirm: Option<String>,
}

impl DeleteForm {
    pub fn is_confirmed(&self) -> bool {
        self.confirm
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("yes"))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfitQuery {
    pub date: Option<String>,
}

impl ProfitQuery {
    /// Requested date, or `default` when absent or blank.
    pub fn date_or(&self, default: NaiveDate) -> DomainResult<NaiveDate> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map_err(|_| DomainError::validation(format!("date must be YYYY-MM-DD (got '{raw}')"))),
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    json!({
        "name": item.name().as_str(),
        "stock": item.stock(),
        "original_price": item.original_price().to_string(),
        "sale_price": item.sale_price().to_string(),
        "original_price_display": item.original_price().display_2dp(),
        "sale_price_display": item.sale_price().display_2dp(),
        "expiry": item.has_expiry().then(|| item.expiry()),
        "low_stock": item.is_low_stock(),
    })
}

pub fn dashboard_to_json(dash: &Dashboard) -> serde_json::Value {
    json!({
        "today": dash.today.date.format(DATE_FORMAT).to_string(),
        "today_profit": dash.today.profit.to_string(),
        "today_profit_display": format_2dp(dash.today.profit),
        "has_sales_today": dash.today.has_sales(),
        "sold_today": dash.today.sold.iter().map(|s| json!({
            "name": s.name,
            "quantity": s.quantity,
        })).collect::<Vec<_>>(),
        "low_stock_alerts": dash.restock_alerts.iter().map(|i| json!({
            "name": i.name().as_str(),
            "stock": i.stock(),
        })).collect::<Vec<_>>(),
        "items": dash.items.iter().map(item_to_json).collect::<Vec<_>>(),
    })
}

pub fn profit_to_json(date: NaiveDate, profit: rust_decimal::Decimal) -> serde_json::Value {
    let date = date.format(DATE_FORMAT).to_string();
    let display = format_2dp(profit);
    json!({
        "message": format!("Profit for {date}: ${display}"),
        "date": date,
        "profit": profit.to_string(),
        "profit_display": display,
    })
}
