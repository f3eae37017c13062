pub mod document;
pub mod encoder;
pub mod report_view;
pub mod spreadsheet;

pub use document::DocumentEncoder;
pub use encoder::ReportEncoder;
pub use report_view::{export, export_dated, filter, to_export_rows, ReportView};
pub use spreadsheet::SpreadsheetEncoder;
