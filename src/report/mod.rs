mod csv_export;
mod pdf;
mod summary;
mod table;

pub(crate) use csv_export::export_csv;
pub(crate) use pdf::{export_pdf, DEFAULT_REPORT_FILE};
pub(crate) use summary::analysis_lines;
pub(crate) use table::render_table;

pub(crate) const DEFAULT_CSV_FILE: &str = "remittance_export.csv";

#[cfg(test)]
mod tests;
