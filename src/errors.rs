use std::io;

use thiserror::Error;

/// Error type for upload handling, file ingestion, and dashboard generation.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no file part named 'file' in the upload form")]
    NoFileProvided,
    #[error("an empty filename was submitted")]
    EmptyFilename,
    #[error("malformed multipart form data: {0}")]
    InvalidMultipart(String),
    #[error("unsupported file type '.{extension}': please upload an Excel (.xlsx) or CSV file")]
    UnsupportedFormat { extension: String },
    #[error("failed to parse uploaded file: {0}")]
    Parse(String),
    #[error("column '{column}' is missing from the uploaded data")]
    MissingColumn { column: String },
    #[error("no rows left to aggregate after filtering")]
    NoData,
    #[error("failed to render dashboard chart: {0}")]
    Render(String),
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DashboardError {
    /* Distinguishes bad uploads from server-side processing faults so the
    controller can answer 4xx instead of a blanket 500. */
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            DashboardError::NoFileProvided
                | DashboardError::EmptyFilename
                | DashboardError::InvalidMultipart(_)
                | DashboardError::UnsupportedFormat { .. }
                | DashboardError::MissingColumn { .. }
                | DashboardError::NoData
        )
    }
}
