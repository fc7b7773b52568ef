//! Library decode errors.

use super::error_code::{self, SchlintErrorCode};

/// Errors raised while turning a library source into components.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Library not found: {library}")]
    NotFound { library: String },

    #[error("Failed to read {library}: {message}")]
    Io { library: String, message: String },

    #[error("Malformed library {library}: {message}")]
    Malformed { library: String, message: String },

    #[error("Duplicate component '{component}' in {library}")]
    DuplicateComponent { library: String, component: String },
}

impl DecodeError {
    /// The library identifier the error refers to.
    pub fn library(&self) -> &str {
        match self {
            Self::NotFound { library }
            | Self::Io { library, .. }
            | Self::Malformed { library, .. }
            | Self::DuplicateComponent { library, .. } => library,
        }
    }
}

impl SchlintErrorCode for DecodeError {
    fn error_code(&self) -> &'static str {
        error_code::DECODE_ERROR
    }
}
