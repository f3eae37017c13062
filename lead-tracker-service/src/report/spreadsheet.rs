use lead_tracker_api::domain::report::{ExportFormat, ExportRow, EXPORT_COLUMNS};
use lead_tracker_api::error::{ApiError, ApiResult};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::borrow::Cow;

use super::encoder::ReportEncoder;

pub const SHEET_NAME: &str = "Records";

const COLUMN_WIDTHS: [f64; 9] = [24.0, 16.0, 20.0, 16.0, 28.0, 30.0, 48.0, 10.0, 20.0];

/// Longest text an `.xlsx` cell may hold, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

const ELLIPSIS: &str = "...";

/// Single-sheet `.xlsx` workbook with a bold header row.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpreadsheetEncoder;

impl SpreadsheetEncoder {
    /// Cuts text that does not fit a cell, keeping the head and marking the cut with `...`.
    pub fn fit_cell(value: &str) -> Cow<'_, str> {
        if value.chars().count() <= MAX_CELL_CHARS {
            return Cow::Borrowed(value);
        }
        let kept: String = value.chars().take(MAX_CELL_CHARS - ELLIPSIS.len()).collect();
        Cow::Owned(kept + ELLIPSIS)
    }

    fn workbook(rows: &[ExportRow]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let wrapped = Format::new().set_text_wrap();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, (title, width)) in EXPORT_COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, width)?;
            worksheet.write_string_with_format(0, col, *title, &header)?;
        }

        for (index, row) in rows.iter().enumerate() {
            let row_num = index as u32 + 1;
            for (col, cell) in row.cells().iter().enumerate() {
                worksheet.write_string_with_format(row_num, col as u16, Self::fit_cell(cell), &wrapped)?;
            }
        }

        workbook.save_to_buffer()
    }
}

impl ReportEncoder for SpreadsheetEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Spreadsheet
    }

    fn encode(&self, rows: &[ExportRow]) -> ApiResult<Vec<u8>> {
        Self::workbook(rows).map_err(|e| ApiError::ExportError(format!("Spreadsheet: {e}")))
    }
}
