use crate::aggregate::Summary;
use crate::ui::util::format_plain;

pub(crate) fn total_line(summary: &Summary) -> String {
    format!("Total Remittance Amount: {}", format_plain(summary.total))
}

pub(crate) fn highest_line(summary: &Summary) -> String {
    let h = summary.highest;
    format!(
        "Highest Remittance: {} ({}, {})",
        format_plain(h.amount),
        h.year,
        h.display_month()
    )
}

pub(crate) fn analysis_lines(summary: &Summary) -> [String; 2] {
    [total_line(summary), highest_line(summary)]
}
