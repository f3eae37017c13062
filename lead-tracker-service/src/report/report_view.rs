use lead_tracker_api::domain::report::{ExportFile, ExportFormat, ExportRow, StatusFilter};
use lead_tracker_api::error::ApiResult;
use lead_tracker_db::models::client::client_record::ClientRecordModel;
use lead_tracker_db::utils::today_iso;
use tracing::info;

use super::document::DocumentEncoder;
use super::encoder::ReportEncoder;
use super::spreadsheet::SpreadsheetEncoder;

/// Records whose status passes `status` and whose `created_at` starts with `date_prefix`,
/// in collection order. An empty prefix keeps every date.
pub fn filter(
    records: &[ClientRecordModel],
    status: StatusFilter,
    date_prefix: &str,
) -> Vec<ClientRecordModel> {
    let date_prefix = date_prefix.trim();
    records
        .iter()
        .filter(|r| r.status.matches(status) && r.created_at.starts_with(date_prefix))
        .cloned()
        .collect()
}

pub fn to_export_rows(records: &[ClientRecordModel]) -> Vec<ExportRow> {
    records
        .iter()
        .map(|r| ExportRow {
            company: r.company.to_string(),
            industry: r.industry.as_deref().unwrap_or_default().to_string(),
            contact: r.contact_name.to_string(),
            phone: r.phone.as_deref().unwrap_or_default().to_string(),
            email: r.email.to_string(),
            comment: r.comment.clone().unwrap_or_default(),
            notes: r
                .notes
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            status: r.status.to_string(),
            date: r.created_at.clone(),
        })
        .collect()
}

fn encoder_for(format: ExportFormat) -> Box<dyn ReportEncoder> {
    match format {
        ExportFormat::Spreadsheet => Box::new(SpreadsheetEncoder),
        ExportFormat::Document => Box::new(DocumentEncoder),
    }
}

/// Encodes `rows` into a file named after today's date.
pub fn export(format: ExportFormat, rows: &[ExportRow]) -> ApiResult<ExportFile> {
    export_dated(format, rows, &today_iso())
}

pub fn export_dated(format: ExportFormat, rows: &[ExportRow], iso_date: &str) -> ApiResult<ExportFile> {
    let bytes = encoder_for(format).encode(rows)?;
    let file_name = format.file_name(iso_date);
    info!(%file_name, rows = rows.len(), bytes = bytes.len(), "report exported");
    Ok(ExportFile { file_name, bytes })
}

/// Filter selection of the report screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportView {
    pub status_filter: StatusFilter,
    pub date_prefix: String,
}

impl ReportView {
    pub fn new(status_filter: StatusFilter, date_prefix: impl Into<String>) -> Self {
        Self {
            status_filter,
            date_prefix: date_prefix.into(),
        }
    }

    pub fn select(&self, records: &[ClientRecordModel]) -> Vec<ClientRecordModel> {
        filter(records, self.status_filter, &self.date_prefix)
    }

    pub fn rows(&self, records: &[ClientRecordModel]) -> Vec<ExportRow> {
        to_export_rows(&self.select(records))
    }

    pub fn export(&self, format: ExportFormat, records: &[ClientRecordModel]) -> ApiResult<ExportFile> {
        export(format, &self.rows(records))
    }
}
