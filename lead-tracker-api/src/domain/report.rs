use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiError;

/// Header labels of an exported report, in column order.
pub const EXPORT_COLUMNS: [&str; 9] = [
    "Company", "Industry", "Contact", "Phone", "Email", "Comment", "Notes", "Status", "Date",
];

/// Status selector used by the report and follow-up views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Closed,
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All"),
            StatusFilter::Pending => write!(f, "Pending"),
            StatusFilter::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(StatusFilter::All),
            "Pending" => Ok(StatusFilter::Pending),
            "Closed" => Ok(StatusFilter::Closed),
            _ => Err(ApiError::ValidationError(format!("Invalid status filter: {s}"))),
        }
    }
}

/// One flattened record as handed to the report encoders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub company: String,
    pub industry: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub comment: String,
    /// Every follow-up note as `<timestamp>: <text>`, newline separated
    pub notes: String,
    pub status: String,
    pub date: String,
}

impl ExportRow {
    /// Cell values in `EXPORT_COLUMNS` order.
    pub fn cells(&self) -> [&str; 9] {
        [
            self.company.as_str(),
            self.industry.as_str(),
            self.contact.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.comment.as_str(),
            self.notes.as_str(),
            self.status.as_str(),
            self.date.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Spreadsheet,
    Document,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Document => "pdf",
        }
    }

    /// `Records_<iso_date>.<ext>`
    pub fn file_name(&self, iso_date: &str) -> String {
        format!("Records_{}.{}", iso_date, self.extension())
    }
}

/// An encoded report ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
