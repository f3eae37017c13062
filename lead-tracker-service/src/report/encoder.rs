use lead_tracker_api::domain::report::{ExportFormat, ExportRow};
use lead_tracker_api::error::ApiResult;

/// Turns report rows into the bytes of one file format.
pub trait ReportEncoder: Send + Sync {
    fn format(&self) -> ExportFormat;

    /// Fails with `ApiError::ExportError` when the encoder cannot produce the file.
    fn encode(&self, rows: &[ExportRow]) -> ApiResult<Vec<u8>>;
}
