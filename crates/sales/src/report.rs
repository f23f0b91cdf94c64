//! Per-day aggregation over the full sales log.
//!
//! Each call scans every record. That is O(all sales ever) per view, which is
//! fine for manual single-shop entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use stockroom_core::{DomainError, DomainResult};

use crate::record::SaleRecord;

/// Sum of `profit` over records dated exactly `date`.
///
/// Fails when the day's total does not fit in a `Decimal`.
pub fn profit_on(records: &[SaleRecord], date: NaiveDate) -> DomainResult<Decimal> {
    records
        .iter()
        .filter(|r| r.is_on(date))
        .try_fold(Decimal::ZERO, |total, r| {
            total.checked_add(r.profit).ok_or_else(|| {
                DomainError::invariant(format!("profit total for {date} is out of range"))
            })
        })
}

/// Total quantity per item name sold on `date`, ordered by first occurrence.
///
/// Names are grouped exactly as recorded, so an item renamed during the day
/// shows up under both names.
pub fn quantities_on(records: &[SaleRecord], date: NaiveDate) -> Vec<SoldQuantity> {
    let mut sold: Vec<SoldQuantity> = Vec::new();
    for record in records.iter().filter(|r| r.is_on(date)) {
        match sold.iter_mut().find(|s| s.name == record.name) {
            Some(entry) => entry.quantity += u64::from(record.qty),
            None => sold.push(SoldQuantity {
                name: record.name.clone(),
                quantity: u64::from(record.qty),
            }),
        }
    }
    sold
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoldQuantity {
    pub name: String,
    pub quantity: u64,
}

/// Profit and per-item quantities for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub profit: Decimal,
    pub sold: Vec<SoldQuantity>,
}

impl DailySummary {
    pub fn for_date(records: &[SaleRecord], date: NaiveDate) -> DomainResult<Self> {
        Ok(Self {
            date,
            profit: profit_on(records, date)?,
            sold: quantities_on(records, date),
        })
    }

    pub fn has_sales(&self) -> bool {
        !self.sold.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn rec(day: u32, name: &str, qty: u32, profit_cents: i64) -> SaleRecord {
        SaleRecord::new(d(day), name, qty, Decimal::new(profit_cents, 2))
    }

    #[test]
    fn profit_sums_only_matching_date() {
        let records = vec![
            rec(1, "Bandage", 3, 1500),
            rec(2, "Bandage", 1, 500),
            rec(1, "Gauze", 2, -125),
        ];
        assert_eq!(profit_on(&records, d(1)).unwrap(), Decimal::new(1375, 2));
        assert_eq!(profit_on(&records, d(2)).unwrap(), Decimal::new(5, 0));
        assert_eq!(profit_on(&records, d(3)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn overflowing_day_total_is_an_error() {
        let records = vec![
            SaleRecord::new(d(1), "Gold", 1, Decimal::MAX),
            SaleRecord::new(d(1), "Gold", 1, Decimal::MAX),
            SaleRecord::new(d(2), "Gold", 1, Decimal::MAX),
        ];
        let err = profit_on(&records, d(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(DailySummary::for_date(&records, d(1)).is_err());
        assert_eq!(profit_on(&records, d(2)).unwrap(), Decimal::MAX);
    }

    #[test]
    fn quantities_group_by_first_occurrence() {
        let records = vec![
            rec(1, "Gauze", 2, 0),
            rec(1, "Bandage", 3, 0),
            rec(2, "Tape", 9, 0),
            rec(1, "Gauze", 5, 0),
        ];
        let sold = quantities_on(&records, d(1));
        assert_eq!(
            sold,
            vec![
                SoldQuantity {
                    name: "Gauze".to_string(),
                    quantity: 7
                },
                SoldQuantity {
                    name: "Bandage".to_string(),
                    quantity: 3
                },
            ]
        );
    }

    #[test]
    fn summary_for_empty_day() {
        let summary = DailySummary::for_date(&[rec(1, "Gauze", 1, 100)], d(9)).unwrap();
        assert_eq!(summary.profit, Decimal::ZERO);
        assert!(!summary.has_sales());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: per-day profits add up to the whole log's profit.
        #[test]
        fn daily_profits_partition_the_log(
            entries in prop::collection::vec((1u32..5, 1u32..20, -10_000i64..10_000), 0..40)
        ) {
            let records: Vec<SaleRecord> = entries
                .iter()
                .map(|(day, qty, cents)| rec(*day, "Item", *qty, *cents))
                .collect();

            let total: Decimal = records.iter().map(|r| r.profit).sum();
            let by_day: Decimal = (1u32..5).map(|day| profit_on(&records, d(day)).unwrap()).sum();
            prop_assert_eq!(total, by_day);

            let qty_total: u64 = records.iter().map(|r| u64::from(r.qty)).sum();
            let qty_by_day: u64 = (1u32..5)
                .flat_map(|day| quantities_on(&records, d(day)))
                .map(|s| s.quantity)
                .sum();
            prop_assert_eq!(qty_total, qty_by_day);
        }
    }
}
