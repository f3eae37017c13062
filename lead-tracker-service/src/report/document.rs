//! A4 landscape PDF rendering of a report.
//!
//! Every page carries the title and the column header; rows flow onto as many pages as
//! needed. Cells are single lines, so note line breaks become spaces and long values are
//! cut to the column width.

use lead_tracker_api::domain::report::{ExportFormat, ExportRow, EXPORT_COLUMNS};
use lead_tracker_api::error::{ApiError, ApiResult};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::ops::Range;

use super::encoder::ReportEncoder;

pub const TITLE: &str = "Client Records";
pub const ROWS_PER_PAGE: usize = 28;

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 10.0;
const TITLE_Y: f32 = 195.0;
const HEADER_Y: f32 = 185.0;
const FIRST_ROW_Y: f32 = 178.0;
const ROW_HEIGHT: f32 = 6.0;
const TITLE_SIZE: f32 = 14.0;
const TEXT_SIZE: f32 = 8.0;
// Average advance of an 8pt Helvetica glyph.
const CHAR_WIDTH: f32 = 1.6;
const COLUMN_WIDTHS: [f32; 9] = [32.0, 24.0, 28.0, 24.0, 40.0, 35.0, 50.0, 16.0, 28.0];
const LAYER_NAME: &str = "Records";

#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentEncoder;

impl DocumentEncoder {
    /// Row ranges of each page; an empty report still gets one page.
    pub fn page_ranges(row_count: usize) -> Vec<Range<usize>> {
        if row_count == 0 {
            return vec![0..0];
        }
        (0..row_count)
            .step_by(ROWS_PER_PAGE)
            .map(|start| start..(start + ROWS_PER_PAGE).min(row_count))
            .collect()
    }

    /// Single-line rendering of `value` that fits `width` millimetres.
    pub fn fit_cell(value: &str, width: f32) -> String {
        let flat = value.replace(['\r', '\n'], " ");
        let max_chars = (width / CHAR_WIDTH) as usize;
        if flat.chars().count() <= max_chars {
            return flat;
        }
        let mut cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }

    fn render(rows: &[ExportRow]) -> Result<Vec<u8>, printpdf::Error> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let pages = Self::page_ranges(rows.len());
        let page_count = pages.len();
        for (index, range) in pages.into_iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
                doc.get_page(page).get_layer(layer)
            };

            layer.use_text(TITLE, TITLE_SIZE, Mm(MARGIN), Mm(TITLE_Y), &bold);
            layer.use_text(
                format!("Page {} of {}", index + 1, page_count),
                TEXT_SIZE,
                Mm(PAGE_WIDTH - MARGIN - 25.0),
                Mm(TITLE_Y),
                &regular,
            );
            Self::draw_row(&layer, &EXPORT_COLUMNS, HEADER_Y, &bold);

            for (offset, row) in rows[range].iter().enumerate() {
                let y = FIRST_ROW_Y - offset as f32 * ROW_HEIGHT;
                Self::draw_row(&layer, &row.cells(), y, &regular);
            }
        }

        doc.save_to_bytes()
    }

    fn draw_row(layer: &PdfLayerReference, cells: &[&str], y: f32, font: &IndirectFontRef) {
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
            layer.use_text(Self::fit_cell(cell, width), TEXT_SIZE, Mm(x), Mm(y), font);
            x += width;
        }
    }
}

impl ReportEncoder for DocumentEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Document
    }

    fn encode(&self, rows: &[ExportRow]) -> ApiResult<Vec<u8>> {
        Self::render(rows).map_err(|e| ApiError::ExportError(format!("Document: {e}")))
    }
}
