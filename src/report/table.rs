use crate::models::RemittanceRecord;
use crate::ui::util::format_plain;

const HEADERS: [&str; 4] = ["Year", "Month", "Amount", "Purpose"];

/// Render records as a boxed text grid, one row per record, in the order given.
pub(crate) fn render_table(records: &[&RemittanceRecord]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.year.to_string(),
                r.display_month().to_string(),
                format_plain(r.amount),
                r.purpose.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&separator(&widths, '-'));
    out.push_str(&line(&HEADERS.map(String::from), &widths));
    out.push_str(&separator(&widths, '='));
    for row in &rows {
        out.push_str(&line(row, &widths));
        out.push_str(&separator(&widths, '-'));
    }
    out
}

fn separator(widths: &[usize; 4], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat(fill).take(w + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut s = String::from("|");
    for (i, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        // Year and Amount are right-aligned.
        if i == 0 || i == 2 {
            s.push_str(&format!(" {cell:>w$} |"));
        } else {
            s.push_str(&format!(" {cell:<w$} |"));
        }
    }
    s.push('\n');
    s
}
