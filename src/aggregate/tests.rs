#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn rec(year: i32, month: i32, amount: Decimal, purpose: &str) -> RemittanceRecord {
    RemittanceRecord::new(year, month, amount, purpose.into())
}

fn sample() -> Vec<RemittanceRecord> {
    vec![
        rec(2023, 1, dec!(100), "a"),
        rec(2023, 5, dec!(50), "b"),
        rec(2024, 1, dec!(20), "c"),
    ]
}

// ── sorted_by_period ──────────────────────────────────────────

#[test]
fn test_sorted_by_period() {
    let records = vec![
        rec(2024, 1, dec!(1), "late"),
        rec(2023, 11, dec!(1), "mid"),
        rec(2023, 2, dec!(1), "early"),
    ];
    let purposes: Vec<&str> = sorted_by_period(&records)
        .iter()
        .map(|r| r.purpose.as_str())
        .collect();
    assert_eq!(purposes, vec!["early", "mid", "late"]);
}

#[test]
fn test_sorted_by_period_is_stable() {
    let records = vec![rec(2023, 1, dec!(1), "first"), rec(2023, 1, dec!(2), "second")];
    let sorted = sorted_by_period(&records);
    assert_eq!(sorted[0].purpose, "first");
    assert_eq!(sorted[1].purpose, "second");
}

#[test]
fn test_sorted_by_period_empty() {
    assert!(sorted_by_period(&[]).is_empty());
}

// ── by_year ───────────────────────────────────────────────────

#[test]
fn test_by_year() {
    let totals = by_year(&sample());
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&2023], dec!(150));
    assert_eq!(totals[&2024], dec!(20));
}

#[test]
fn test_by_year_keys_ascending() {
    let records = vec![
        rec(2025, 1, dec!(1), ""),
        rec(2019, 1, dec!(1), ""),
        rec(2022, 1, dec!(1), ""),
    ];
    let years: Vec<i32> = by_year(&records).into_keys().collect();
    assert_eq!(years, vec![2019, 2022, 2025]);
}

#[test]
fn test_by_year_empty() {
    assert!(by_year(&[]).is_empty());
}

// ── by_month ──────────────────────────────────────────────────

#[test]
fn test_by_month() {
    let totals = by_month(&sample(), 2023);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&1], dec!(100));
    assert_eq!(totals[&5], dec!(50));
}

#[test]
fn test_by_month_unknown_year_is_empty() {
    assert!(by_month(&sample(), 2099).is_empty());
}

#[test]
fn test_by_month_sums_duplicate_months() {
    // The store never produces these, but a hand-edited file can.
    let records = vec![rec(2023, 3, dec!(10), ""), rec(2023, 3, dec!(5.5), "")];
    assert_eq!(by_month(&records, 2023)[&3], dec!(15.5));
}

// ── total_and_max ─────────────────────────────────────────────

#[test]
fn test_total_and_max_first_wins_ties() {
    let records = vec![
        rec(2023, 1, dec!(100), "a"),
        rec(2023, 2, dec!(300), "b"),
        rec(2023, 3, dec!(300), "c"),
    ];
    let summary = total_and_max(&records).unwrap();
    assert_eq!(summary.total, dec!(700));
    assert_eq!(summary.highest.purpose, "b");
}

#[test]
fn test_total_and_max_single_record() {
    let records = vec![rec(2020, 6, dec!(42.42), "only")];
    let summary = total_and_max(&records).unwrap();
    assert_eq!(summary.total, dec!(42.42));
    assert_eq!(summary.highest.purpose, "only");
}

#[test]
fn test_total_and_max_exact_decimal_sum() {
    let records = vec![rec(2023, 1, dec!(0.1), "x"), rec(2023, 2, dec!(0.2), "y")];
    assert_eq!(total_and_max(&records).unwrap().total, dec!(0.3));
}

#[test]
fn test_total_and_max_empty() {
    assert!(total_and_max(&[]).is_none());
}

#[test]
fn test_sums_saturate_instead_of_overflowing() {
    let records = vec![
        rec(2023, 1, Decimal::MAX, "a"),
        rec(2023, 1, Decimal::MAX, "b"),
        rec(2023, 2, dec!(1), "c"),
    ];
    assert_eq!(by_year(&records)[&2023], Decimal::MAX);
    assert_eq!(by_month(&records, 2023)[&1], Decimal::MAX);
    let summary = total_and_max(&records).unwrap();
    assert_eq!(summary.total, Decimal::MAX);
    assert_eq!(summary.highest.purpose, "a");
}
