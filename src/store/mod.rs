use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::models::*;

/// Result of merging a [`NewRemittance`] into the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpsertOutcome {
    Added,
    Updated,
}

/// JSON-file backed collection of remittance records.
pub(crate) struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty store.
    pub(crate) fn load(&self) -> Result<Vec<RemittanceRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No store at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to open data file: {}", self.path.display())
                })
            }
        };

        let records: Vec<RemittanceRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Malformed data file: {}", self.path.display()))?;
        log::debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Replace the persisted collection with `records`.
    ///
    /// The new contents are written to a sibling temp file and renamed over
    /// the target, so readers see either the old file or the new one.
    pub(crate) fn save(&self, records: &[RemittanceRecord]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;

        let tmp = tempfile::NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
            records
                .serialize(&mut ser)
                .context("Failed to serialize records")?;
            writer.flush().context("Failed to write records")?;
        }
        tmp.as_file()
            .sync_all()
            .context("Failed to flush data file")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace data file: {}", self.path.display()))?;

        log::debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Load, merge `entry`, and save.
    pub(crate) fn add(&self, entry: NewRemittance) -> Result<UpsertOutcome> {
        let mut records = self.load()?;
        let outcome = upsert(&mut records, entry)?;
        self.save(&records)?;
        Ok(outcome)
    }
}

/// Merge `entry` into `records`, keeping one record per (year, month).
///
/// A matching record has its amount increased; its purpose and month name
/// are left as they were. Otherwise a new record is appended.
///
/// Fails, leaving `records` unchanged, when the sum does not fit a `Decimal`.
pub(crate) fn upsert(
    records: &mut Vec<RemittanceRecord>,
    entry: NewRemittance,
) -> Result<UpsertOutcome> {
    let period = entry.period();
    if let Some(existing) = records.iter_mut().find(|r| r.period() == period) {
        let sum = existing
            .amount
            .checked_add(entry.amount)
            .with_context(|| {
                format!(
                    "Amount too large: {} + {} for {period}",
                    existing.amount, entry.amount
                )
            })?;
        existing.amount = sum;
        log::info!("Added {} to {period} (now {})", entry.amount, existing.amount);
        return Ok(UpsertOutcome::Updated);
    }

    log::info!("New record for {period}: {}", entry.amount);
    records.push(entry.into_record());
    Ok(UpsertOutcome::Added)
}
