//! Line format of the flat files.
//!
//! - items: `name,stock,original_price,sale_price,expiry` (a 4-field line
//!   without expiry is accepted and written back with an empty expiry)
//! - sales: `date,name,qty,profit` with `date` as `YYYY-MM-DD`
//!
//! No header, no quoting: names and expiry strings never contain commas.

use chrono::NaiveDate;
use thiserror::Error;

use stockroom_core::money::parse_decimal;
use stockroom_core::{DomainError, ItemName, Money};
use stockroom_inventory::Item;
use stockroom_sales::SaleRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a single line could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: &'static str, found: usize },

    #[error("invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn invalid(field: &'static str, value: &str) -> LineError {
    LineError::InvalidField {
        field,
        value: value.to_string(),
    }
}

pub fn encode_item(item: &Item) -> String {
    format!(
        "{},{},{},{},{}",
        item.name(),
        item.stock(),
        item.original_price(),
        item.sale_price(),
        item.expiry()
    )
}

/// Decode one (already trimmed, non-blank) item line.
pub fn decode_item(line: &str) -> Result<Item, LineError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let (name, stock, original_price, sale_price, expiry) = match fields.as_slice() {
        [name, stock, original, sale, expiry] => (*name, *stock, *original, *sale, *expiry),
        [name, stock, original, sale] => (*name, *stock, *original, *sale, ""),
        other => {
            return Err(LineError::FieldCount {
                expected: "4 or 5",
                found: other.len(),
            });
        }
    };

    let name = ItemName::new(name)?;
    let stock: u32 = stock.parse().map_err(|_| invalid("stock", stock))?;
    let original_price: Money = original_price.parse()?;
    let sale_price: Money = sale_price.parse()?;
    Ok(Item::new(name, stock, original_price, sale_price, expiry)?)
}

pub fn encode_sale(record: &SaleRecord) -> String {
    format!(
        "{},{},{},{}",
        record.date.format(DATE_FORMAT),
        record.name,
        record.qty,
        record.profit
    )
}

/// Decode one (already trimmed, non-blank) sales line.
pub fn decode_sale(line: &str) -> Result<SaleRecord, LineError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [date, name, qty, profit] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            expected: "4",
            found: fields.len(),
        });
    };

    let date =
        NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid("date", date))?;
    let qty: u32 = match qty.parse() {
        Ok(q) if q > 0 => q,
        _ => return Err(invalid("qty", qty)),
    };
    let profit = parse_decimal(profit)?;
    Ok(SaleRecord::new(date, *name, qty, profit))
}
