use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::RemittanceRecord;

/// Grand total plus the single largest remittance.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary<'a> {
    pub(crate) total: Decimal,
    pub(crate) highest: &'a RemittanceRecord,
}

/// Records in ascending (year, month) order. Stable for equal periods.
pub(crate) fn sorted_by_period(records: &[RemittanceRecord]) -> Vec<&RemittanceRecord> {
    let mut sorted: Vec<&RemittanceRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.period());
    sorted
}

/// Totals per year. Sums saturate at `Decimal::MAX`/`MIN` instead of overflowing.
pub(crate) fn by_year(records: &[RemittanceRecord]) -> BTreeMap<i32, Decimal> {
    let mut totals: BTreeMap<i32, Decimal> = BTreeMap::new();
    for rec in records {
        let total = totals.entry(rec.year).or_insert(Decimal::ZERO);
        *total = total.saturating_add(rec.amount);
    }
    totals
}

/// Monthly totals for one year. Empty when the year has no records.
pub(crate) fn by_month(records: &[RemittanceRecord], year: i32) -> BTreeMap<i32, Decimal> {
    let mut totals: BTreeMap<i32, Decimal> = BTreeMap::new();
    for rec in records.iter().filter(|r| r.year == year) {
        let total = totals.entry(rec.month).or_insert(Decimal::ZERO);
        *total = total.saturating_add(rec.amount);
    }
    totals
}

/// Sum of all amounts and the record with the largest amount.
///
/// On ties the earliest record in `records` wins. The total saturates like
/// [`by_year`]. Returns `None` for an empty slice.
pub(crate) fn total_and_max(records: &[RemittanceRecord]) -> Option<Summary<'_>> {
    let (first, rest) = records.split_first()?;
    let mut total = first.amount;
    let mut highest = first;
    for rec in rest {
        total = total.saturating_add(rec.amount);
        if rec.amount > highest.amount {
            highest = rec;
        }
    }
    Some(Summary { total, highest })
}

#[cfg(test)]
mod tests;
