//! Presentation errors. Reported, never fatal.

use super::error_code::{self, SchlintErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresentationError {
    #[error("Unknown diagnostic severity '{0}'")]
    UnknownSeverity(String),
}

impl SchlintErrorCode for PresentationError {
    fn error_code(&self) -> &'static str {
        error_code::PRESENTATION_ERROR
    }
}
