//! Library save errors.

use super::error_code::{self, SchlintErrorCode};

/// Errors raised while writing a fixed library back to its source.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to encode {library}: {message}")]
    Encode { library: String, message: String },

    #[error("Failed to write {library}: {message}")]
    Write { library: String, message: String },
}

impl SchlintErrorCode for PersistenceError {
    fn error_code(&self) -> &'static str {
        error_code::PERSISTENCE_ERROR
    }
}
