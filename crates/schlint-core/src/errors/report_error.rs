//! Violation report and ignore-list file errors.

use super::error_code::{self, SchlintErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid report document {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to serialize report: {0}")]
    Serialize(String),

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

impl SchlintErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
