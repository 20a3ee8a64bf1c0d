use anyhow::{Context, Result};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::aggregate::Summary;
use crate::models::RemittanceRecord;
use crate::report::summary::analysis_lines;
use crate::ui::util::{format_plain, truncate};

pub(crate) const DEFAULT_REPORT_FILE: &str = "remittance_report.pdf";

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 10.0;
const ROW_H: f32 = 10.0;
const FONT_SIZE: f32 = 12.0;
const TITLE: &str = "Remittance Tracker Report";

/// (header, width in mm)
const COLUMNS: [(&str, f32); 4] = [
    ("Year", 40.0),
    ("Month", 40.0),
    ("Amount", 40.0),
    ("Purpose", 70.0),
];
const PURPOSE_MAX_CHARS: usize = 32;

const HEADER_FILL: (f32, f32, f32) = (135.0, 206.0, 235.0);
const SUMMARY_FILL: (f32, f32, f32) = (144.0, 238.0, 144.0);

/// Render the records table and summary to a PDF at `path`, replacing any
/// existing file. `records` should already be sorted.
pub(crate) fn export_pdf(
    records: &[&RemittanceRecord],
    summary: &Summary,
    path: &Path,
) -> Result<()> {
    let report = Report::render(records, summary)?;
    let pages = report.pages;
    report.save(path)?;

    log::info!(
        "Wrote {}-row, {pages}-page report to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

struct Report {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    /// Top edge of the next row, in mm from the bottom of the page.
    cursor: f32,
    pages: usize,
    header_rows: usize,
}

impl Report {
    fn new() -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(TITLE, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow::anyhow!("Failed to load PDF font: {e:?}"))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow::anyhow!("Failed to load PDF font: {e:?}"))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            font,
            bold,
            cursor: PAGE_H - MARGIN,
            pages: 1,
            header_rows: 0,
        })
    }

    fn render(records: &[&RemittanceRecord], summary: &Summary) -> Result<Self> {
        let mut report = Self::new()?;
        report.title();
        report.header_row();
        for rec in records {
            report.record_row(rec);
        }
        report.summary(summary);
        log::debug!(
            "Laid out {} rows on {} pages with {} header rows",
            records.len(),
            report.pages,
            report.header_rows
        );
        Ok(report)
    }

    fn title(&mut self) {
        let x = (PAGE_W - text_width(TITLE, FONT_SIZE)) / 2.0;
        self.layer
            .use_text(TITLE, FONT_SIZE, Mm(x), Mm(self.cursor - 7.0), &self.font);
        self.cursor -= ROW_H * 2.0;
    }

    fn header_row(&mut self) {
        let cells = COLUMNS.map(|(name, _)| name.to_string());
        self.row(&cells, Some(HEADER_FILL), true);
        self.header_rows += 1;
    }

    fn record_row(&mut self, rec: &RemittanceRecord) {
        if self.cursor - ROW_H < MARGIN {
            self.new_page();
            self.header_row();
        }
        let cells = [
            rec.year.to_string(),
            rec.display_month().to_string(),
            format_plain(rec.amount),
            truncate(&rec.purpose, PURPOSE_MAX_CHARS),
        ];
        self.row(&cells, None, false);
    }

    fn summary(&mut self, summary: &Summary) {
        // Gap, band, two lines.
        if self.cursor - ROW_H * 4.0 < MARGIN {
            self.new_page();
        } else {
            self.cursor -= ROW_H;
        }

        let bottom = self.cursor - ROW_H;
        self.fill_rect(MARGIN, bottom, PAGE_W - MARGIN, self.cursor, SUMMARY_FILL);
        let x = (PAGE_W - text_width("Summary", FONT_SIZE)) / 2.0;
        self.layer
            .use_text("Summary", FONT_SIZE, Mm(x), Mm(bottom + 3.5), &self.bold);
        self.cursor = bottom;

        for line in analysis_lines(summary) {
            let bottom = self.cursor - ROW_H;
            self.layer
                .use_text(line, FONT_SIZE, Mm(MARGIN), Mm(bottom + 3.5), &self.font);
            self.cursor = bottom;
        }
    }

    fn row(&mut self, cells: &[String; 4], fill: Option<(f32, f32, f32)>, centered: bool) {
        let bottom = self.cursor - ROW_H;
        let mut x = MARGIN;
        for (cell, (_, width)) in cells.iter().zip(COLUMNS) {
            if let Some(rgb) = fill {
                self.fill_rect(x, bottom, x + width, self.cursor, rgb);
            }
            self.stroke_rect(x, bottom, x + width, self.cursor);

            let text_x = if centered {
                x + (width - text_width(cell, FONT_SIZE)) / 2.0
            } else {
                x + 1.5
            };
            let font = if centered { &self.bold } else { &self.font };
            self.layer
                .use_text(cell.as_str(), FONT_SIZE, Mm(text_x), Mm(bottom + 3.5), font);
            x += width;
        }
        self.cursor = bottom;
    }

    fn fill_rect(&self, x1: f32, y1: f32, x2: f32, y2: f32, (r, g, b): (f32, f32, f32)) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(r / 255.0, g / 255.0, b / 255.0, None)));
        self.layer
            .add_rect(Rect::new(Mm(x1), Mm(y1), Mm(x2), Mm(y2)).with_mode(PaintMode::Fill));
        // Text is drawn with the fill color.
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    }

    fn stroke_rect(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.layer.set_outline_thickness(0.5);
        self.layer
            .add_rect(Rect::new(Mm(x1), Mm(y1), Mm(x2), Mm(y2)).with_mode(PaintMode::Stroke));
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = PAGE_H - MARGIN;
        self.pages += 1;
    }

    fn save(self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report: {}", path.display()))?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| anyhow::anyhow!("Failed to write report {}: {e:?}", path.display()))
    }
}

/// Rough Helvetica width: half an em per character, converted from pt to mm.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * 0.3528
}
