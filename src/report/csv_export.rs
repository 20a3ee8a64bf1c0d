use anyhow::{Context, Result};
use std::path::Path;

use crate::models::RemittanceRecord;
use crate::ui::util::format_plain;

/// Write `records` to a CSV file, replacing any existing file.
/// Returns the number of data rows written.
pub(crate) fn export_csv(records: &[&RemittanceRecord], path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    wtr.write_record(["year", "month", "month_name", "amount", "purpose"])
        .context("Failed to write CSV header")?;
    for rec in records {
        wtr.write_record([
            rec.year.to_string(),
            rec.month.to_string(),
            rec.display_month().to_string(),
            format_plain(rec.amount),
            rec.purpose.clone(),
        ])
        .context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush CSV file")?;

    log::info!("Exported {} records to {}", records.len(), path.display());
    Ok(records.len())
}
