#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::aggregate::{sorted_by_period, total_and_max};
use crate::models::RemittanceRecord;

fn sample() -> Vec<RemittanceRecord> {
    vec![
        RemittanceRecord::new(2024, 1, dec!(20), "books".into()),
        RemittanceRecord::new(2023, 5, dec!(50), "school".into()),
        RemittanceRecord::new(2023, 1, dec!(100), "rent".into()),
    ]
}

// ── render_table ──────────────────────────────────────────────

#[test]
fn test_render_table_layout() {
    let records = vec![RemittanceRecord::new(2023, 1, dec!(100), "rent".into())];
    let refs: Vec<&RemittanceRecord> = records.iter().collect();
    let expected = "\
+------+---------+--------+---------+
| Year | Month   | Amount | Purpose |
+======+=========+========+=========+
| 2023 | January | 100.00 | rent    |
+------+---------+--------+---------+
";
    assert_eq!(render_table(&refs), expected);
}

#[test]
fn test_render_table_rows_follow_input_order() {
    let records = sample();
    let table = render_table(&sorted_by_period(&records));
    let rent = table.find("rent").unwrap();
    let school = table.find("school").unwrap();
    let books = table.find("books").unwrap();
    assert!(rent < school && school < books);
}

#[test]
fn test_render_table_widens_for_long_cells() {
    let records = vec![RemittanceRecord::new(
        2023,
        9,
        dec!(1234567.5),
        "university tuition".into(),
    )];
    let table = render_table(&[&records[0]]);
    assert!(table.contains("| 2023 | September | 1234567.50 | university tuition |"));
    let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_render_table_shows_invalid_month() {
    let records = vec![RemittanceRecord::new(2023, 13, dec!(1), "x".into())];
    assert!(render_table(&[&records[0]]).contains("Invalid Month"));
}

#[test]
fn test_render_table_rounds_amounts() {
    let records = vec![RemittanceRecord::new(2023, 1, dec!(2.679), "x".into())];
    assert!(render_table(&[&records[0]]).contains("| 2023 | January |   2.68 | x       |"));
}

// ── analysis_lines ────────────────────────────────────────────

#[test]
fn test_analysis_lines() {
    let records = vec![
        RemittanceRecord::new(2023, 1, dec!(100), "a".into()),
        RemittanceRecord::new(2023, 2, dec!(300), "b".into()),
        RemittanceRecord::new(2023, 3, dec!(300), "c".into()),
    ];
    let summary = total_and_max(&records).unwrap();
    let [total, highest] = analysis_lines(&summary);
    assert_eq!(total, "Total Remittance Amount: 700.00");
    assert_eq!(highest, "Highest Remittance: 300.00 (2023, February)");
}

#[test]
fn test_analysis_lines_round_amounts() {
    let records = vec![
        RemittanceRecord::new(2023, 1, dec!(2.679), "a".into()),
        RemittanceRecord::new(2023, 2, dec!(0.001), "b".into()),
    ];
    let summary = total_and_max(&records).unwrap();
    assert_eq!(
        analysis_lines(&summary),
        [
            "Total Remittance Amount: 2.68".to_string(),
            "Highest Remittance: 2.68 (2023, January)".to_string(),
        ]
    );
}

// ── export_csv ────────────────────────────────────────────────

#[test]
fn test_export_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CSV_FILE);
    let records = sample();
    let count = export_csv(&sorted_by_period(&records), &path).unwrap();
    assert_eq!(count, 3);

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "year,month,month_name,amount,purpose");
    assert_eq!(lines[1], "2023,1,January,100.00,rent");
    assert_eq!(lines[3], "2024,1,January,20.00,books");
}

#[test]
fn test_export_csv_quotes_commas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = vec![RemittanceRecord::new(2023, 1, dec!(5), "rent, utilities".into())];
    export_csv(&[&records[0]], &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"rent, utilities\""));
}

#[test]
fn test_export_csv_rounds_amounts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = vec![RemittanceRecord::new(2023, 3, dec!(2.679), "gift".into())];
    export_csv(&[&records[0]], &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("2023,3,March,2.68,gift"));
}
