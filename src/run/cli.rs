use anyhow::Result;
use chrono::Datelike;
use std::path::PathBuf;

use crate::aggregate;
use crate::config::Config;
use crate::models::{month_name, parse_amount, parse_int, NewRemittance, INVALID_MONTH};
use crate::report;
use crate::store::{RecordStore, UpsertOutcome};
use crate::ui::chart;

pub(crate) fn as_cli(args: &[String], store: &RecordStore, config: &Config) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], store),
        "view" | "list" | "ls" => cli_view(store),
        "chart" | "c" => cli_chart(&args[2..], store),
        "analyze" | "summary" | "s" => cli_analyze(store),
        "export" => cli_export(&args[2..], store, config),
        "export-csv" => cli_export_csv(&args[2..], store, config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("remittui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("remittui: local remittance tracker");
    println!();
    println!("Usage: remittui [--data <file.json>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Interactive menu");
    println!("  add <year> <month> <amount> [purpose...]");
    println!("                                  Record a remittance (adds to an existing month)");
    println!("  view                            Print all records, oldest first");
    println!("  chart yearly                    Bar chart of totals per year");
    println!("  chart monthly [year]            Bar chart of one year's months (default: this year)");
    println!("  analyze                         Total and highest remittance");
    println!("  export [path.pdf]               PDF report (default: remittance_report.pdf)");
    println!("  export-csv [path.csv]           CSV export (default: remittance_export.csv)");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
    println!();
    println!("The data file defaults to the platform data directory; set it with");
    println!("--data or the REMITTUI_DATA environment variable.");
}

fn parse_add_args(args: &[String]) -> Result<NewRemittance> {
    if args.len() < 3 {
        anyhow::bail!("Usage: remittui add <year> <month> <amount> [purpose...]");
    }
    let year = parse_int(&args[0], "year")?;
    let month = parse_int(&args[1], "month")?;
    let amount = parse_amount(&args[2])?;
    let purpose = args[3..].join(" ");
    Ok(NewRemittance::new(year, month, amount, purpose))
}

fn cli_add(args: &[String], store: &RecordStore) -> Result<()> {
    let entry = parse_add_args(args)?;
    let period = entry.period();
    if month_name(entry.month) == INVALID_MONTH {
        eprintln!(
            "Note: month {} is outside 1-12 and will show as '{INVALID_MONTH}'.",
            entry.month
        );
    }
    match store.add(entry)? {
        UpsertOutcome::Added => println!("Record added for {period}"),
        UpsertOutcome::Updated => println!("Amount updated for {period}"),
    }
    Ok(())
}

fn cli_view(store: &RecordStore) -> Result<()> {
    let records = store.load()?;
    if records.is_empty() {
        println!("No records found.");
        return Ok(());
    }
    print!("{}", report::render_table(&aggregate::sorted_by_period(&records)));
    Ok(())
}

fn cli_chart(args: &[String], store: &RecordStore) -> Result<()> {
    let records = store.load()?;
    if records.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    let chart = match args.first().map(String::as_str) {
        Some("yearly") | Some("y") | None => chart::yearly_chart(&aggregate::by_year(&records)),
        Some("monthly") | Some("m") => {
            let year = match args.get(1) {
                Some(y) => parse_int(y, "year")?,
                None => chrono::Local::now().year(),
            };
            match chart::monthly_chart(year, &aggregate::by_month(&records, year)) {
                Some(chart) => chart,
                None => {
                    println!("No data found for the year {year}.");
                    return Ok(());
                }
            }
        }
        Some(other) => anyhow::bail!("Unknown chart '{other}'. Use 'yearly' or 'monthly [year]'"),
    };
    chart::show(&chart)
}

fn cli_analyze(store: &RecordStore) -> Result<()> {
    let records = store.load()?;
    let Some(summary) = aggregate::total_and_max(&records) else {
        println!("No records found.");
        return Ok(());
    };
    for line in report::analysis_lines(&summary) {
        println!("{line}");
    }
    Ok(())
}

fn output_path(args: &[String], default: &std::path::Path) -> PathBuf {
    args.first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(super::shellexpand(a)))
        .unwrap_or_else(|| default.to_path_buf())
}

fn cli_export(args: &[String], store: &RecordStore, config: &Config) -> Result<()> {
    let records = store.load()?;
    let Some(summary) = aggregate::total_and_max(&records) else {
        println!("No records found.");
        return Ok(());
    };
    let path = output_path(args, &config.report_path);
    report::export_pdf(&aggregate::sorted_by_period(&records), &summary, &path)?;
    println!("Data exported to {} successfully!", path.display());
    Ok(())
}

fn cli_export_csv(args: &[String], store: &RecordStore, config: &Config) -> Result<()> {
    let records = store.load()?;
    if records.is_empty() {
        println!("No records found.");
        return Ok(());
    }
    let path = output_path(args, &config.csv_path);
    let count = report::export_csv(&aggregate::sorted_by_period(&records), &path)?;
    println!("Exported {count} records to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rust_decimal_macros::dec;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_add_args_joins_purpose() {
        let entry = parse_add_args(&args(&["2023", "4", "120.5", "rent", "and", "bills"])).unwrap();
        assert_eq!(entry, NewRemittance::new(2023, 4, dec!(120.5), "rent and bills"));
    }

    #[test]
    fn test_parse_add_args_purpose_optional() {
        let entry = parse_add_args(&args(&["2023", "4", "10"])).unwrap();
        assert!(entry.purpose.is_empty());
    }

    #[test]
    fn test_parse_add_args_errors() {
        assert!(parse_add_args(&args(&["2023", "4"])).is_err());
        assert!(parse_add_args(&args(&["2023", "April", "10"])).is_err());
        assert!(parse_add_args(&args(&["2023", "4", "ten"])).is_err());
    }

    #[test]
    fn test_output_path() {
        let default = PathBuf::from("remittance_report.pdf");
        assert_eq!(output_path(&[], &default), default);
        assert_eq!(
            output_path(&args(&["out/report.pdf"]), &default),
            PathBuf::from("out/report.pdf")
        );
        assert_eq!(output_path(&args(&["--force"]), &default), default);
    }

    #[test]
    fn test_cli_add_and_unknown_command() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_path(dir.path().join("data.json"));
        let store = RecordStore::new(&config.data_path);

        as_cli(&args(&["remittui", "add", "2023", "1", "100", "rent"]), &store, &config).unwrap();
        as_cli(&args(&["remittui", "add", "2023", "1", "50"]), &store, &config).unwrap();
        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, dec!(150));
        assert_eq!(records[0].purpose, "rent");

        assert!(as_cli(&args(&["remittui", "frobnicate"]), &store, &config).is_err());
    }

    #[test]
    fn test_cli_export_csv_to_named_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_path(dir.path().join("data.json"));
        let store = RecordStore::new(&config.data_path);
        store
            .add(NewRemittance::new(2023, 2, dec!(30), "gift"))
            .unwrap();

        let out = dir.path().join("out.csv");
        let out_str = out.to_string_lossy().to_string();
        as_cli(&args(&["remittui", "export-csv", &out_str]), &store, &config).unwrap();
        assert!(std::fs::read_to_string(&out).unwrap().contains("2023,2,February,30.00,gift"));
    }
}
